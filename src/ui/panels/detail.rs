// PawFinder - ui/panels/detail.rs
//
// Detail pane for the selected pet.

use crate::app::state::AppState;
use crate::core::model::PetAttribute;

/// Render the detail pane (bottom panel).
pub fn render(ui: &mut egui::Ui, state: &AppState) {
    let Some(pet) = state.selected_pet() else {
        ui.centered_and_justified(|ui| {
            ui.label("Select a pet to view details.");
        });
        return;
    };

    ui.horizontal(|ui| {
        ui.heading(pet.display_name());
        if !pet.breed_label.is_empty() {
            ui.label(egui::RichText::new(&pet.breed_label).weak());
        }
    });

    egui::Grid::new("detail_grid")
        .num_columns(2)
        .spacing([8.0, 4.0])
        .show(ui, |ui| {
            for attr in PetAttribute::all() {
                let value = pet.attribute(*attr);
                ui.label(format!("{}:", attr.label()));
                ui.label(if value.is_empty() { "\u{2014}" } else { value });
                ui.end_row();
            }
            ui.label("ID:");
            ui.label(egui::RichText::new(&pet.id).monospace());
            ui.end_row();
        });

    if let Some(ref description) = pet.description {
        ui.separator();
        egui::ScrollArea::vertical()
            .max_height(60.0)
            .show(ui, |ui| {
                ui.label(description);
            });
    }
}
