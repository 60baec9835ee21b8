// PawFinder - core/listing.rs
//
// Listing document parsing and validation.
// Core layer: accepts TOML/JSON strings, never touches the filesystem.
// I/O is handled by app::listing_mgr which feeds content here.

use crate::core::model::{Pet, PetAttribute};
use crate::util::constants;
use crate::util::error::ListingError;
use serde::Deserialize;
use std::collections::HashSet;
use std::path::Path;

/// Raw listing document: a `pets` array of pet tables.
#[derive(Debug, Deserialize)]
pub struct ListingDocument {
    #[serde(default)]
    pub pets: Vec<Pet>,
}

/// JSON listings may be a `{ "pets": [...] }` document or a bare array.
#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum JsonListing {
    Document(ListingDocument),
    Bare(Vec<Pet>),
}

/// Parse a TOML listing (`[[pets]]` tables) and validate it.
///
/// `source_path` is used for error messages only (not for I/O).
pub fn parse_listing_toml(content: &str, source_path: &Path) -> Result<Vec<Pet>, ListingError> {
    let doc: ListingDocument = toml::from_str(content).map_err(|e| ListingError::TomlParse {
        path: source_path.to_path_buf(),
        source: e,
    })?;
    validate_listing(doc.pets, source_path)
}

/// Parse a JSON listing and validate it.
pub fn parse_listing_json(content: &str, source_path: &Path) -> Result<Vec<Pet>, ListingError> {
    let listing: JsonListing =
        serde_json::from_str(content).map_err(|e| ListingError::JsonParse {
            path: source_path.to_path_buf(),
            source: e,
        })?;
    let pets = match listing {
        JsonListing::Document(doc) => doc.pets,
        JsonListing::Bare(pets) => pets,
    };
    validate_listing(pets, source_path)
}

/// Normalise and validate a parsed listing.
///
/// Trims IDs and attribute tokens, then rejects:
/// - a pet with an empty `id` or `name`
/// - two pets with the same `id`
/// - more than `MAX_PETS` pets
pub fn validate_listing(mut pets: Vec<Pet>, source_path: &Path) -> Result<Vec<Pet>, ListingError> {
    if pets.len() > constants::MAX_PETS {
        return Err(ListingError::TooManyPets {
            path: source_path.to_path_buf(),
            count: pets.len(),
            max: constants::MAX_PETS,
        });
    }

    let mut seen = HashSet::with_capacity(pets.len());

    for (index, pet) in pets.iter_mut().enumerate() {
        normalise(pet);

        if pet.id.is_empty() {
            return Err(ListingError::MissingField {
                path: source_path.to_path_buf(),
                index,
                field: "id",
            });
        }
        if pet.name.is_empty() {
            return Err(ListingError::MissingField {
                path: source_path.to_path_buf(),
                index,
                field: "name",
            });
        }
        if !seen.insert(pet.id.clone()) {
            return Err(ListingError::DuplicateId {
                path: source_path.to_path_buf(),
                id: pet.id.clone(),
            });
        }
    }

    tracing::debug!(
        path = %source_path.display(),
        pets = pets.len(),
        "Listing validated"
    );

    Ok(pets)
}

fn normalise(pet: &mut Pet) {
    pet.id = pet.id.trim().to_string();
    pet.name = pet.name.trim().to_string();
    pet.breed_label = pet.breed_label.trim().to_string();
    for attr in PetAttribute::all() {
        let slot = pet.attribute_mut(*attr);
        let trimmed = slot.trim();
        if trimmed.len() != slot.len() {
            *slot = trimmed.to_string();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    fn path() -> PathBuf {
        PathBuf::from("pets.toml")
    }

    const TWO_PETS: &str = r#"
[[pets]]
id = "max"
name = "Max"
type = "dog"
breed = "lab"
breedLabel = "Labrador"
age = "young"
gender = "male"
location = "ny"
temperament = "calm"

[[pets]]
id = "luna"
name = "Luna"
type = "cat"
breed = "siamese"
breed_label = "Siamese"
"#;

    #[test]
    fn test_parse_toml_listing() {
        let pets = parse_listing_toml(TWO_PETS, &path()).unwrap();
        assert_eq!(pets.len(), 2);
        assert_eq!(pets[0].pet_type, "dog");
        assert_eq!(pets[0].breed_label, "Labrador");
        assert_eq!(pets[1].breed_label, "Siamese");
        assert_eq!(pets[1].location, "");
    }

    #[test]
    fn test_parse_json_document_and_bare_array() {
        let doc = r#"{"pets": [{"id": "a", "name": "Ace", "type": "dog"}]}"#;
        let bare = r#"[{"id": "a", "name": "Ace", "type": "dog"}]"#;
        let p = PathBuf::from("pets.json");
        assert_eq!(parse_listing_json(doc, &p).unwrap().len(), 1);
        assert_eq!(parse_listing_json(bare, &p).unwrap().len(), 1);
    }

    #[test]
    fn test_attribute_tokens_are_trimmed() {
        let text = r#"
[[pets]]
id = " p1 "
name = "Pip"
type = "  bird "
"#;
        let pets = parse_listing_toml(text, &path()).unwrap();
        assert_eq!(pets[0].id, "p1");
        assert_eq!(pets[0].pet_type, "bird");
    }

    #[test]
    fn test_missing_name_is_rejected() {
        let text = "[[pets]]\nid = \"x\"\n";
        let err = parse_listing_toml(text, &path()).unwrap_err();
        assert!(matches!(
            err,
            ListingError::MissingField {
                index: 0,
                field: "name",
                ..
            }
        ));
    }

    #[test]
    fn test_duplicate_id_is_rejected() {
        let text = "[[pets]]\nid = \"x\"\nname = \"A\"\n[[pets]]\nid = \"x\"\nname = \"B\"\n";
        let err = parse_listing_toml(text, &path()).unwrap_err();
        assert!(matches!(err, ListingError::DuplicateId { ref id, .. } if id == "x"));
    }

    #[test]
    fn test_too_many_pets_is_rejected() {
        let pets: Vec<Pet> = (0..=constants::MAX_PETS)
            .map(|i| Pet {
                id: format!("p{i}"),
                name: format!("Pet {i}"),
                pet_type: String::new(),
                breed: String::new(),
                breed_label: String::new(),
                age: String::new(),
                gender: String::new(),
                location: String::new(),
                temperament: String::new(),
                description: None,
            })
            .collect();
        let err = validate_listing(pets, &path()).unwrap_err();
        assert!(matches!(err, ListingError::TooManyPets { .. }));
    }

    #[test]
    fn test_invalid_toml_reports_parse_error() {
        let err = parse_listing_toml("[[pets]\nid = ", &path()).unwrap_err();
        assert!(matches!(err, ListingError::TomlParse { .. }));
    }

    #[test]
    fn test_empty_document_is_an_empty_listing() {
        assert!(parse_listing_toml("", &path()).unwrap().is_empty());
    }
}
