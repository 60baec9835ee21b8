// PawFinder - app/state.rs
//
// Application state management. Holds the loaded listing, the current
// filter criteria, the last evaluation outcome, selection and status.
// Owned by the eframe::App implementation (or the headless CLI path).
//
// Every criteria mutation funnels through `on_criteria_changed`, the single
// point where the evaluator runs and the outcome is logged.

use crate::app::listing_mgr::{Listing, ListingSource};
use crate::core::export::{self, ExportFormat};
use crate::core::facets::{self, FacetValue};
use crate::core::filter::{self, FilterCriteria, Visibility};
use crate::core::model::{Pet, PetAttribute};
use crate::util::constants;
use crate::util::error::ExportError;
use std::fs;
use std::io::Write;
use std::path::Path;

/// What triggered a re-evaluation. Carried into the log event.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ChangeReason {
    Initial,
    Attribute(PetAttribute),
    Query,
    Reset,
    ListingReplaced,
}

/// Top-level application state.
#[derive(Debug)]
pub struct AppState {
    /// Pets from the current listing. Read-only between listing loads.
    pub pets: Vec<Pet>,

    /// Origin of `pets`.
    pub source: ListingSource,

    /// Current filter configuration.
    criteria: FilterCriteria,

    /// Outcome of the most recent evaluation of `criteria` over `pets`.
    visibility: Visibility,

    /// Combo box options per attribute, rebuilt when the listing changes.
    facets: Vec<(PetAttribute, Vec<FacetValue>)>,

    /// ID of the selected pet, if it is still visible.
    selected_id: Option<String>,

    /// Status message for the status bar.
    pub status_message: String,

    /// Non-fatal warnings (config problems etc.) shown to the user.
    pub warnings: Vec<String>,

    /// Whether to show the About window.
    pub show_about: bool,

    /// Dark mode (true) or light mode (false).
    pub dark_mode: bool,

    /// Whether debug mode is enabled.
    pub debug_mode: bool,
}

impl AppState {
    /// Create initial state for a loaded listing and starting criteria.
    pub fn new(listing: Listing, criteria: FilterCriteria, debug_mode: bool) -> Self {
        let facets = build_facets(&listing.pets);
        let mut state = Self {
            pets: listing.pets,
            source: listing.source,
            criteria,
            visibility: Visibility::default(),
            facets,
            selected_id: None,
            status_message: String::new(),
            warnings: Vec::new(),
            show_about: false,
            dark_mode: true,
            debug_mode,
        };
        state.on_criteria_changed(ChangeReason::Initial);
        state
    }

    /// Current criteria (read-only; mutate through the setters).
    pub fn criteria(&self) -> &FilterCriteria {
        &self.criteria
    }

    /// Outcome of the latest evaluation.
    pub fn visibility(&self) -> &Visibility {
        &self.visibility
    }

    /// Combo box options for an attribute.
    pub fn facets(&self, attr: PetAttribute) -> &[FacetValue] {
        self.facets
            .iter()
            .find(|(a, _)| *a == attr)
            .map(|(_, values)| values.as_slice())
            .unwrap_or(&[])
    }

    /// Change one attribute criterion. Returns true if the value changed.
    pub fn set_criterion(&mut self, attr: PetAttribute, value: &str) -> bool {
        if self.criteria.get(attr) == value {
            return false;
        }
        self.criteria.set(attr, value);
        self.on_criteria_changed(ChangeReason::Attribute(attr));
        true
    }

    /// Change the free-text query. Returns true if the value changed.
    pub fn set_query(&mut self, query: &str) -> bool {
        if self.criteria.query == query {
            return false;
        }
        self.criteria.query = query.to_string();
        self.on_criteria_changed(ChangeReason::Query);
        true
    }

    /// Replace every criterion with the wildcard.
    pub fn reset_filters(&mut self) {
        self.criteria.reset();
        self.on_criteria_changed(ChangeReason::Reset);
    }

    /// Swap in a newly loaded listing, keeping the current criteria.
    pub fn replace_listing(&mut self, listing: Listing) {
        self.facets = build_facets(&listing.pets);
        self.pets = listing.pets;
        self.source = listing.source;
        self.selected_id = None;
        self.on_criteria_changed(ChangeReason::ListingReplaced);
    }

    /// Single notification point for any criteria or listing change.
    ///
    /// Re-runs the evaluator, drops a selection that is no longer visible,
    /// refreshes the status line, then logs the outcome.
    fn on_criteria_changed(&mut self, reason: ChangeReason) {
        self.visibility = filter::evaluate(&self.criteria, &self.pets);

        if let Some(ref id) = self.selected_id {
            if !self.visibility.is_visible(id) {
                self.selected_id = None;
            }
        }

        self.status_message = self.results_summary();

        tracing::debug!(
            reason = ?reason,
            value = self.changed_value(reason).unwrap_or_default(),
            active_filters = self.criteria.active_count(),
            visible = self.visibility.len(),
            total = self.pets.len(),
            "Filters applied"
        );
    }

    /// New value of the filter behind `reason`, if it names one.
    fn changed_value(&self, reason: ChangeReason) -> Option<&str> {
        match reason {
            ChangeReason::Attribute(attr) => Some(self.criteria.get(attr)),
            ChangeReason::Query => Some(self.criteria.query.as_str()),
            ChangeReason::Initial | ChangeReason::Reset | ChangeReason::ListingReplaced => None,
        }
    }

    /// Pets that passed the current criteria, in listing order.
    pub fn visible_pets(&self) -> impl Iterator<Item = &Pet> {
        self.visibility
            .indices
            .iter()
            .filter_map(|&i| self.pets.get(i))
    }

    /// True when the "no results" indicator should be shown.
    pub fn show_no_results(&self) -> bool {
        !self.visibility.any_visible
    }

    /// Human-readable count of visible pets.
    pub fn results_summary(&self) -> String {
        if self.show_no_results() {
            constants::NO_RESULTS_MESSAGE.to_string()
        } else {
            let n = self.visibility.len();
            let total = self.pets.len();
            let noun = if total == 1 { "pet" } else { "pets" };
            format!("Showing {n} of {total} {noun}")
        }
    }

    /// Write the visible pets to `writer` in the given format.
    pub fn export_visible<W: Write>(
        &self,
        format: ExportFormat,
        writer: W,
        export_path: &Path,
    ) -> Result<usize, ExportError> {
        let pets: Vec<&Pet> = self.visible_pets().collect();
        let count = export::export(format, &pets, writer, export_path)?;
        tracing::info!(
            path = %export_path.display(),
            format = ?format,
            pets = count,
            "Exported visible pets"
        );
        Ok(count)
    }

    /// Export the visible pets to `dest`. A failed export removes the
    /// partially written file.
    pub fn export_to_file(&self, format: ExportFormat, dest: &Path) -> Result<usize, ExportError> {
        let file = fs::File::create(dest).map_err(|e| ExportError::Io {
            path: dest.to_path_buf(),
            source: e,
        })?;
        let result = self.export_visible(format, file, dest);
        if result.is_err() {
            if let Err(e) = fs::remove_file(dest) {
                tracing::warn!(path = %dest.display(), error = %e, "Could not remove partial export");
            }
        }
        result
    }

    /// Select a pet by ID. Ignored unless the pet is currently visible.
    pub fn select(&mut self, id: &str) {
        if self.visibility.is_visible(id) {
            self.selected_id = Some(id.to_string());
        }
    }

    pub fn clear_selection(&mut self) {
        self.selected_id = None;
    }

    /// Get the currently selected pet, if any.
    pub fn selected_pet(&self) -> Option<&Pet> {
        let id = self.selected_id.as_deref()?;
        self.pets.iter().find(|p| p.id == id)
    }
}

fn build_facets(pets: &[Pet]) -> Vec<(PetAttribute, Vec<FacetValue>)> {
    PetAttribute::all()
        .iter()
        .map(|attr| (*attr, facets::facet_values(pets, *attr)))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn pet(id: &str, pet_type: &str, name: &str) -> Pet {
        Pet {
            id: id.to_string(),
            name: name.to_string(),
            pet_type: pet_type.to_string(),
            breed: String::new(),
            breed_label: String::new(),
            age: String::new(),
            gender: String::new(),
            location: String::new(),
            temperament: String::new(),
            description: None,
        }
    }

    fn state() -> AppState {
        let listing = Listing {
            pets: vec![pet("max", "dog", "Max"), pet("luna", "cat", "Luna")],
            source: ListingSource::Builtin,
        };
        AppState::new(listing, FilterCriteria::default(), false)
    }

    #[test]
    fn test_initial_state_shows_everything() {
        let s = state();
        assert_eq!(s.visible_pets().count(), 2);
        assert!(!s.show_no_results());
        assert_eq!(s.status_message, "Showing 2 of 2 pets");
    }

    #[test]
    fn test_initial_criteria_are_applied() {
        let listing = Listing {
            pets: vec![pet("max", "dog", "Max")],
            source: ListingSource::Builtin,
        };
        let criteria = FilterCriteria::default().with(PetAttribute::Type, "cat");
        let s = AppState::new(listing, criteria, false);
        assert!(s.show_no_results());
        assert_eq!(s.status_message, constants::NO_RESULTS_MESSAGE);
    }

    #[test]
    fn test_set_criterion_reevaluates() {
        let mut s = state();
        assert!(s.set_criterion(PetAttribute::Type, "Cat"));
        let names: Vec<_> = s.visible_pets().map(|p| p.name.as_str()).collect();
        assert_eq!(names, vec!["Luna"]);
        assert_eq!(s.status_message, "Showing 1 of 2 pets");
    }

    #[test]
    fn test_unchanged_value_is_a_no_op() {
        let mut s = state();
        assert!(s.set_query("lu"));
        assert!(!s.set_query("lu"));
        assert!(!s.set_criterion(PetAttribute::Age, ""));
    }

    #[test]
    fn test_no_results_then_reset() {
        let mut s = state();
        s.set_criterion(PetAttribute::Type, "bird");
        assert!(s.show_no_results());
        s.reset_filters();
        assert!(s.criteria().is_empty());
        assert_eq!(s.visible_pets().count(), 2);
    }

    #[test]
    fn test_selection_cleared_when_pet_hidden() {
        let mut s = state();
        s.select("max");
        assert_eq!(s.selected_pet().map(|p| p.id.as_str()), Some("max"));
        s.set_query("luna");
        assert!(s.selected_pet().is_none());
    }

    #[test]
    fn test_cannot_select_hidden_pet() {
        let mut s = state();
        s.set_criterion(PetAttribute::Type, "dog");
        s.select("luna");
        assert!(s.selected_pet().is_none());
    }

    #[test]
    fn test_replace_listing_rebuilds_facets() {
        let mut s = state();
        assert_eq!(s.facets(PetAttribute::Type).len(), 2);
        s.set_criterion(PetAttribute::Type, "dog");
        s.replace_listing(Listing {
            pets: vec![pet("kiwi", "bird", "Kiwi")],
            source: ListingSource::File("birds.toml".into()),
        });
        assert_eq!(s.facets(PetAttribute::Type)[0].value, "bird");
        // Criteria survive the reload, so nothing is visible.
        assert!(s.show_no_results());
    }

    #[test]
    fn test_export_only_includes_visible_pets() {
        let mut s = state();
        s.set_query("max");
        let mut buf = Vec::new();
        let n = s
            .export_visible(ExportFormat::Csv, &mut buf, Path::new("out.csv"))
            .unwrap();
        assert_eq!(n, 1);
        let text = String::from_utf8(buf).unwrap();
        assert!(text.contains("max,Max,dog"));
        assert!(!text.contains("luna"));
    }

    #[test]
    fn test_changed_value_reports_new_filter_value() {
        let mut s = state();
        s.set_criterion(PetAttribute::Gender, "female");
        s.set_query("lu");
        assert_eq!(
            s.changed_value(ChangeReason::Attribute(PetAttribute::Gender)),
            Some("female")
        );
        assert_eq!(s.changed_value(ChangeReason::Query), Some("lu"));
        assert_eq!(s.changed_value(ChangeReason::Reset), None);
    }

    #[test]
    fn test_export_to_file_writes_visible_pets() {
        let mut s = state();
        s.set_criterion(PetAttribute::Type, "cat");
        let dir = tempfile::tempdir().unwrap();
        let dest = dir.path().join("cats.csv");
        assert_eq!(s.export_to_file(ExportFormat::Csv, &dest).unwrap(), 1);
        let text = std::fs::read_to_string(&dest).unwrap();
        assert!(text.contains("luna,Luna,cat"));
    }

    #[test]
    fn test_failed_export_removes_partial_file() {
        let listing = Listing {
            pets: (0..=constants::MAX_EXPORT_PETS)
                .map(|i| pet(&format!("p{i}"), "dog", "Rex"))
                .collect(),
            source: ListingSource::Builtin,
        };
        let s = AppState::new(listing, FilterCriteria::default(), false);
        let dir = tempfile::tempdir().unwrap();
        let dest = dir.path().join("all.json");
        let err = s.export_to_file(ExportFormat::Json, &dest).unwrap_err();
        assert!(matches!(err, ExportError::TooManyPets { .. }));
        assert!(!dest.exists());
    }

    #[test]
    fn test_summary_singular() {
        let listing = Listing {
            pets: vec![pet("max", "dog", "Max")],
            source: ListingSource::Builtin,
        };
        let s = AppState::new(listing, FilterCriteria::default(), false);
        assert_eq!(s.results_summary(), "Showing 1 of 1 pet");
    }
}
