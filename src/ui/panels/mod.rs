// PawFinder - ui/panels/mod.rs

pub mod about;
pub mod detail;
pub mod filters;
pub mod listing;
