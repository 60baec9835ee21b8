// PawFinder - core/mod.rs
//
// Core business logic layer.
// Dependencies: standard library and serialisation crates only.
// Must NOT depend on: ui, platform, app, or do any I/O directly.

pub mod export;
pub mod facets;
pub mod filter;
pub mod listing;
pub mod model;
