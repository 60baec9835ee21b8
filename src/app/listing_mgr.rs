// PawFinder - app/listing_mgr.rs
//
// Loads the pet listing either from a user-supplied TOML/JSON file or from
// the sample listing embedded in the binary. Performs the file I/O and
// feeds content to core::listing for parsing and validation.

use crate::core::listing;
use crate::core::model::Pet;
use crate::util::constants;
use crate::util::error::ListingError;
use std::fmt;
use std::path::{Path, PathBuf};

/// Embedded sample listing used when no listing path is configured.
const BUILTIN_LISTING: &str = include_str!("../../listings/sample.toml");

/// Where the current listing came from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ListingSource {
    Builtin,
    File(PathBuf),
}

impl fmt::Display for ListingSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ListingSource::Builtin => f.write_str(constants::BUILTIN_LISTING_NAME),
            ListingSource::File(path) => write!(f, "{}", path.display()),
        }
    }
}

/// A validated listing together with its origin.
#[derive(Debug, Clone)]
pub struct Listing {
    pub pets: Vec<Pet>,
    pub source: ListingSource,
}

/// Load the listing at `path`, or the built-in sample when `path` is None.
pub fn load_listing(path: Option<&Path>) -> Result<Listing, ListingError> {
    let listing = match path {
        Some(p) => Listing {
            pets: load_listing_file(p)?,
            source: ListingSource::File(p.to_path_buf()),
        },
        None => Listing {
            pets: load_builtin_listing()?,
            source: ListingSource::Builtin,
        },
    };

    tracing::info!(
        source = %listing.source,
        pets = listing.pets.len(),
        "Listing loaded"
    );

    Ok(listing)
}

/// Parse the sample listing compiled into the binary.
pub fn load_builtin_listing() -> Result<Vec<Pet>, ListingError> {
    listing::parse_listing_toml(BUILTIN_LISTING, Path::new(constants::BUILTIN_LISTING_NAME))
}

/// Read, size-check and parse a listing file.
///
/// The format is chosen from the file extension (`.toml` or `.json`).
pub fn load_listing_file(path: &Path) -> Result<Vec<Pet>, ListingError> {
    let extension = path
        .extension()
        .and_then(|e| e.to_str())
        .map(str::to_lowercase)
        .unwrap_or_default();

    if !constants::LISTING_EXTENSIONS.contains(&extension.as_str()) {
        return Err(ListingError::UnsupportedFormat {
            path: path.to_path_buf(),
            extension,
        });
    }

    let metadata = std::fs::metadata(path).map_err(|e| ListingError::Io {
        path: path.to_path_buf(),
        source: e,
    })?;

    if metadata.len() > constants::MAX_LISTING_FILE_SIZE {
        return Err(ListingError::FileTooLarge {
            path: path.to_path_buf(),
            size: metadata.len(),
            max_size: constants::MAX_LISTING_FILE_SIZE,
        });
    }

    let content = std::fs::read_to_string(path).map_err(|e| ListingError::Io {
        path: path.to_path_buf(),
        source: e,
    })?;

    tracing::debug!(path = %path.display(), bytes = content.len(), "Read listing file");

    match extension.as_str() {
        "json" => listing::parse_listing_json(&content, path),
        _ => listing::parse_listing_toml(&content, path),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;

    #[test]
    fn test_builtin_listing_is_valid() {
        let pets = load_builtin_listing().unwrap();
        assert!(!pets.is_empty());
        assert!(pets.iter().any(|p| p.id == "max"));
    }

    #[test]
    fn test_no_path_loads_builtin() {
        let listing = load_listing(None).unwrap();
        assert_eq!(listing.source, ListingSource::Builtin);
        assert_eq!(listing.source.to_string(), constants::BUILTIN_LISTING_NAME);
    }

    #[test]
    fn test_unsupported_extension() {
        let err = load_listing_file(Path::new("pets.yaml")).unwrap_err();
        assert!(matches!(
            err,
            ListingError::UnsupportedFormat { ref extension, .. } if extension == "yaml"
        ));
    }

    #[test]
    fn test_missing_file_is_io_error() {
        let dir = tempfile::tempdir().unwrap();
        let err = load_listing_file(&dir.path().join("absent.toml")).unwrap_err();
        assert!(matches!(err, ListingError::Io { .. }));
    }

    #[test]
    fn test_oversized_file_is_rejected() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("big.json");
        let filler = " ".repeat(constants::MAX_LISTING_FILE_SIZE as usize + 1);
        fs::write(&path, filler).unwrap();
        let err = load_listing_file(&path).unwrap_err();
        assert!(matches!(err, ListingError::FileTooLarge { .. }));
    }

    #[test]
    fn test_uppercase_extension_is_accepted() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("PETS.JSON");
        fs::write(&path, r#"[{"id": "a", "name": "Ace"}]"#).unwrap();
        let pets = load_listing_file(&path).unwrap();
        assert_eq!(pets.len(), 1);
    }
}
