// PawFinder - ui/panels/listing.rs
//
// Central panel: one card per visible pet, or the "no results" indicator.

use crate::app::state::AppState;
use crate::core::model::{Pet, PetAttribute};
use crate::ui::theme;
use crate::util::constants;

/// Render the pet cards.
pub fn render(ui: &mut egui::Ui, state: &mut AppState) {
    if state.show_no_results() {
        render_no_results(ui, state);
        return;
    }

    let selected_id = state.selected_pet().map(|p| p.id.clone());
    let mut clicked: Option<String> = None;

    egui::ScrollArea::vertical()
        .auto_shrink([false; 2])
        .show(ui, |ui| {
            for pet in state.visible_pets() {
                let is_selected = selected_id.as_deref() == Some(pet.id.as_str());
                if render_card(ui, pet, is_selected) {
                    clicked = Some(pet.id.clone());
                }
                ui.add_space(theme::CARD_SPACING);
            }
        });

    if let Some(id) = clicked {
        state.select(&id);
    }
}

/// Draw one card. Returns true when it was clicked.
fn render_card(ui: &mut egui::Ui, pet: &Pet, is_selected: bool) -> bool {
    let fill = if is_selected {
        ui.visuals().selection.bg_fill
    } else {
        ui.visuals().faint_bg_color
    };

    let inner = egui::Frame::group(ui.style()).fill(fill).show(ui, |ui| {
        ui.set_width(ui.available_width());
        ui.horizontal(|ui| {
            ui.label(egui::RichText::new(pet.display_name()).strong().size(18.0));
            if !pet.breed_label.is_empty() {
                ui.label(egui::RichText::new(&pet.breed_label).weak());
            }
        });
        ui.horizontal_wrapped(|ui| {
            if !pet.pet_type.is_empty() {
                ui.colored_label(theme::type_colour(&pet.pet_type), &pet.pet_type);
            }
            for attr in &PetAttribute::all()[1..] {
                let value = pet.attribute(*attr);
                if !value.is_empty() {
                    ui.label(
                        egui::RichText::new(format!("{}: {value}", attr.label())).small(),
                    );
                }
            }
        });
    });

    ui.interact(
        inner.response.rect,
        ui.id().with(("pet_card", &pet.id)),
        egui::Sense::click(),
    )
    .clicked()
}

fn render_no_results(ui: &mut egui::Ui, state: &mut AppState) {
    ui.vertical_centered(|ui| {
        ui.add_space(ui.available_height() * 0.3);
        ui.label(
            egui::RichText::new(constants::NO_RESULTS_MESSAGE)
                .size(20.0)
                .color(theme::NO_RESULTS_COLOUR),
        );
        ui.add_space(8.0);
        if state.pets.is_empty() {
            ui.label("The listing is empty. Open another listing from the File menu.");
        } else if ui.button("Reset filters").clicked() {
            state.reset_filters();
        }
    });
}
