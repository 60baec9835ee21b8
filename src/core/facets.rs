// PawFinder - core/facets.rs
//
// Distinct attribute values present in a listing, used to populate the
// filter combo boxes. Core layer: pure, total.

use crate::core::model::{Pet, PetAttribute};

/// One selectable value for an attribute and how many pets carry it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FacetValue {
    /// First-seen spelling of the value.
    pub value: String,
    pub count: usize,
}

/// Distinct non-empty values of `attr` across `pets`.
///
/// Values are deduplicated case-insensitively (the first spelling seen is
/// kept for display) and sorted case-insensitively.
pub fn facet_values(pets: &[Pet], attr: PetAttribute) -> Vec<FacetValue> {
    let mut facets: Vec<(String, FacetValue)> = Vec::new();

    for pet in pets {
        let raw = pet.attribute(attr).trim();
        if raw.is_empty() {
            continue;
        }
        let key = raw.to_lowercase();
        match facets.iter_mut().find(|(k, _)| *k == key) {
            Some((_, facet)) => facet.count += 1,
            None => facets.push((
                key,
                FacetValue {
                    value: raw.to_string(),
                    count: 1,
                },
            )),
        }
    }

    facets.sort_by(|(a, _), (b, _)| a.cmp(b));
    facets.into_iter().map(|(_, facet)| facet).collect()
}
