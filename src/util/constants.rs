// PawFinder - util/constants.rs
//
// Single source of truth for all named constants, limits, and defaults.

// =============================================================================
// Application metadata
// =============================================================================

/// Application display name.
pub const APP_NAME: &str = "PawFinder";

/// Application identifier used for config/data directories.
pub const APP_ID: &str = "PawFinder";

/// Current application version (updated by release script).
pub const APP_VERSION: &str = env!("CARGO_PKG_VERSION");

// =============================================================================
// Listing limits
// =============================================================================

/// Maximum number of pets accepted from a single listing.
///
/// The evaluator is a linear scan re-run on every keystroke; listings are
/// expected to hold tens to low hundreds of pets.
pub const MAX_PETS: usize = 1_000;

/// Maximum size of a listing file in bytes.
pub const MAX_LISTING_FILE_SIZE: u64 = 1024 * 1024; // 1 MB

/// File extensions accepted for listing files (lowercase, no dot).
pub const LISTING_EXTENSIONS: &[&str] = &["toml", "json"];

/// Display name used in messages for the embedded sample listing.
pub const BUILTIN_LISTING_NAME: &str = "<built-in sample>";

// =============================================================================
// UI defaults
// =============================================================================

/// Label shown for the wildcard entry in each attribute combo box.
pub const ANY_LABEL: &str = "Any";

/// Message shown when the current criteria hide every pet.
pub const NO_RESULTS_MESSAGE: &str = "No pets match the current filters.";

/// Default UI body font size in points.
pub const DEFAULT_FONT_SIZE: f32 = 14.5;

/// Minimum user-configurable UI font size (points).
pub const MIN_FONT_SIZE: f32 = 10.0;

/// Maximum user-configurable UI font size (points).
pub const MAX_FONT_SIZE: f32 = 24.0;

// =============================================================================
// Logging
// =============================================================================

/// Default log level.
pub const DEFAULT_LOG_LEVEL: &str = "info";

/// Log levels accepted in `[logging] level`.
pub const VALID_LOG_LEVELS: &[&str] = &["error", "warn", "info", "debug", "trace"];

// =============================================================================
// Export
// =============================================================================

/// Maximum number of pets that can be exported in a single operation.
pub const MAX_EXPORT_PETS: usize = MAX_PETS;

// =============================================================================
// Configuration
// =============================================================================

/// Configuration file name.
pub const CONFIG_FILE_NAME: &str = "config.toml";
