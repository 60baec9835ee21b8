// PawFinder - app/mod.rs
//
// Application layer: listing loading and the adapter state that owns the
// current criteria and calls the filter evaluator.
// Dependencies: core layer.
// Must NOT depend on: ui, platform specifics.

pub mod listing_mgr;
pub mod state;
