// PawFinder - core/filter.rs
//
// Filter evaluator for the pet listing.
// Six exact-match attribute criteria plus a free-text query, AND-combined.
// Core layer: pure logic, no I/O or UI dependencies. Total: never fails.

use crate::core::model::{Pet, PetAttribute};
use std::collections::BTreeSet;

/// Complete filter criteria. An empty field is a wildcard that matches
/// every pet. Whitespace is significant.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FilterCriteria {
    pub pet_type: String,
    pub breed: String,
    pub age: String,
    pub gender: String,
    pub location: String,
    pub temperament: String,

    /// Case-insensitive substring matched against name or breed label.
    pub query: String,
}

impl FilterCriteria {
    /// Returns true if no criterion is active (every field is a wildcard).
    pub fn is_empty(&self) -> bool {
        PetAttribute::all().iter().all(|a| is_wildcard(self.get(*a))) && is_wildcard(&self.query)
    }

    /// Number of active criteria, the free-text query included.
    pub fn active_count(&self) -> usize {
        let attrs = PetAttribute::all()
            .iter()
            .filter(|a| !is_wildcard(self.get(**a)))
            .count();
        attrs + usize::from(!is_wildcard(&self.query))
    }

    /// Current value for an attribute criterion.
    pub fn get(&self, attr: PetAttribute) -> &str {
        match attr {
            PetAttribute::Type => &self.pet_type,
            PetAttribute::Breed => &self.breed,
            PetAttribute::Age => &self.age,
            PetAttribute::Gender => &self.gender,
            PetAttribute::Location => &self.location,
            PetAttribute::Temperament => &self.temperament,
        }
    }

    /// Replace an attribute criterion. An empty value clears it.
    pub fn set(&mut self, attr: PetAttribute, value: impl Into<String>) {
        let slot = match attr {
            PetAttribute::Type => &mut self.pet_type,
            PetAttribute::Breed => &mut self.breed,
            PetAttribute::Age => &mut self.age,
            PetAttribute::Gender => &mut self.gender,
            PetAttribute::Location => &mut self.location,
            PetAttribute::Temperament => &mut self.temperament,
        };
        *slot = value.into();
    }

    /// Builder-style variant of [`FilterCriteria::set`].
    pub fn with(mut self, attr: PetAttribute, value: impl Into<String>) -> Self {
        self.set(attr, value);
        self
    }

    /// Builder-style setter for the free-text query.
    pub fn with_query(mut self, query: impl Into<String>) -> Self {
        self.query = query.into();
        self
    }

    /// Reset every field to the wildcard.
    pub fn reset(&mut self) {
        *self = Self::default();
    }
}

fn is_wildcard(value: &str) -> bool {
    value.is_empty()
}

/// Outcome of one evaluation pass.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Visibility {
    /// IDs of the pets that passed every criterion.
    pub visible: BTreeSet<String>,

    /// Positions of visible pets in the evaluated slice, in slice order.
    pub indices: Vec<usize>,

    /// True iff at least one pet is visible. Drives the "no results" state.
    pub any_visible: bool,
}

impl Visibility {
    /// Whether the pet with this ID is visible.
    pub fn is_visible(&self, id: &str) -> bool {
        self.visible.contains(id)
    }

    /// Number of visible pets.
    pub fn len(&self) -> usize {
        self.indices.len()
    }

    /// True when nothing is visible.
    pub fn is_empty(&self) -> bool {
        self.indices.is_empty()
    }
}

/// Criteria lowercased once per pass so the per-pet check only lowercases
/// the pet side.
struct NormalisedCriteria {
    attributes: Vec<(PetAttribute, String)>,
    query: Option<String>,
}

impl NormalisedCriteria {
    fn new(criteria: &FilterCriteria) -> Self {
        let attributes = PetAttribute::all()
            .iter()
            .filter_map(|attr| {
                let value = criteria.get(*attr);
                (!is_wildcard(value)).then(|| (*attr, value.to_lowercase()))
            })
            .collect();
        let query = (!is_wildcard(&criteria.query)).then(|| criteria.query.to_lowercase());
        Self { attributes, query }
    }

    fn matches(&self, pet: &Pet) -> bool {
        // Attribute filters: case-insensitive equality
        for (attr, wanted) in &self.attributes {
            if pet.attribute(*attr).to_lowercase() != *wanted {
                return false;
            }
        }

        // Free-text search: substring of name OR breed label
        if let Some(ref query) = self.query {
            if !pet.name.to_lowercase().contains(query.as_str())
                && !pet.breed_label.to_lowercase().contains(query.as_str())
            {
                return false;
            }
        }

        true
    }
}

/// Decide which pets are visible under `criteria`.
///
/// Pure and total: the same inputs always give the same outcome and no
/// combination of criteria and pets is an error.
pub fn evaluate(criteria: &FilterCriteria, pets: &[Pet]) -> Visibility {
    let indices = apply_filters(pets, criteria);
    let visible = indices.iter().map(|&i| pets[i].id.clone()).collect();
    let any_visible = !indices.is_empty();
    Visibility {
        visible,
        indices,
        any_visible,
    }
}

/// Apply criteria to a slice of pets, returning indices of matching pets.
///
/// Returns a Vec of indices into the original slice so callers can render
/// the filtered view without copying pets.
pub fn apply_filters(pets: &[Pet], criteria: &FilterCriteria) -> Vec<usize> {
    if criteria.is_empty() {
        return (0..pets.len()).collect();
    }

    let normalised = NormalisedCriteria::new(criteria);

    pets.iter()
        .enumerate()
        .filter(|(_, pet)| normalised.matches(pet))
        .map(|(idx, _)| idx)
        .collect()
}

/// Check a single pet against the criteria.
pub fn matches(pet: &Pet, criteria: &FilterCriteria) -> bool {
    criteria.is_empty() || NormalisedCriteria::new(criteria).matches(pet)
}
