// PawFinder - core/model.rs
//
// Core data model types. Pure data definitions with no I/O, no UI,
// no platform dependencies.
//
// These types are the shared vocabulary across all layers.

use serde::{Deserialize, Serialize};
use std::str::FromStr;

// =============================================================================
// Pet record
// =============================================================================

/// A single adoptable pet as it appears on a listing card.
///
/// The six attribute tokens are compared case-insensitively by the filter
/// evaluator. A token missing from the listing deserialises to an empty
/// string, which never matches a non-empty criterion.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Pet {
    /// Unique card identifier within the listing.
    #[serde(default)]
    pub id: String,

    /// Display name, searched by the free-text query.
    #[serde(default)]
    pub name: String,

    /// Species token, e.g. "dog" or "cat".
    #[serde(rename = "type", default)]
    pub pet_type: String,

    /// Breed token used for exact matching, e.g. "lab".
    #[serde(default)]
    pub breed: String,

    /// Human-readable breed, searched by the free-text query.
    #[serde(rename = "breedLabel", alias = "breed_label", default)]
    pub breed_label: String,

    /// Age band token, e.g. "young" or "senior".
    #[serde(default)]
    pub age: String,

    #[serde(default)]
    pub gender: String,

    #[serde(default)]
    pub location: String,

    #[serde(default)]
    pub temperament: String,

    /// Free-form blurb shown in the detail pane. Never filtered on.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

impl Pet {
    /// Value of one filterable attribute.
    pub fn attribute(&self, attr: PetAttribute) -> &str {
        match attr {
            PetAttribute::Type => &self.pet_type,
            PetAttribute::Breed => &self.breed,
            PetAttribute::Age => &self.age,
            PetAttribute::Gender => &self.gender,
            PetAttribute::Location => &self.location,
            PetAttribute::Temperament => &self.temperament,
        }
    }

    /// Mutable access to one attribute, used when normalising a listing.
    pub fn attribute_mut(&mut self, attr: PetAttribute) -> &mut String {
        match attr {
            PetAttribute::Type => &mut self.pet_type,
            PetAttribute::Breed => &mut self.breed,
            PetAttribute::Age => &mut self.age,
            PetAttribute::Gender => &mut self.gender,
            PetAttribute::Location => &mut self.location,
            PetAttribute::Temperament => &mut self.temperament,
        }
    }

    /// Name for display, falling back to the ID when the name is blank.
    pub fn display_name(&self) -> &str {
        if self.name.trim().is_empty() {
            &self.id
        } else {
            &self.name
        }
    }
}

// =============================================================================
// Attributes
// =============================================================================

/// The six exact-match attributes every pet carries.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PetAttribute {
    Type,
    Breed,
    Age,
    Gender,
    Location,
    Temperament,
}

impl PetAttribute {
    /// Returns all variants in display order.
    pub fn all() -> &'static [PetAttribute] {
        &[
            PetAttribute::Type,
            PetAttribute::Breed,
            PetAttribute::Age,
            PetAttribute::Gender,
            PetAttribute::Location,
            PetAttribute::Temperament,
        ]
    }

    /// Human-readable label for display.
    pub fn label(&self) -> &'static str {
        match self {
            PetAttribute::Type => "Type",
            PetAttribute::Breed => "Breed",
            PetAttribute::Age => "Age",
            PetAttribute::Gender => "Gender",
            PetAttribute::Location => "Location",
            PetAttribute::Temperament => "Temperament",
        }
    }

    /// Field key as used in listing files and CLI flags.
    pub fn key(&self) -> &'static str {
        match self {
            PetAttribute::Type => "type",
            PetAttribute::Breed => "breed",
            PetAttribute::Age => "age",
            PetAttribute::Gender => "gender",
            PetAttribute::Location => "location",
            PetAttribute::Temperament => "temperament",
        }
    }
}

impl std::fmt::Display for PetAttribute {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for PetAttribute {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim().to_lowercase();
        PetAttribute::all()
            .iter()
            .copied()
            .find(|a| a.key() == wanted)
            .ok_or_else(|| format!("unknown pet attribute '{s}'"))
    }
}
