// PawFinder - ui/panels/filters.rs
//
// Filter controls sidebar: one combo box per attribute, a free-text search
// box and a reset button. Reads from and writes to AppState only through
// its setters so every change reaches the single re-evaluation point.

use crate::app::state::AppState;
use crate::core::model::PetAttribute;
use crate::ui::theme;
use crate::util::constants;

/// Stable ID of the search box so the `/` shortcut can focus it.
pub fn search_box_id() -> egui::Id {
    egui::Id::new("pet_search_box")
}

/// Single-key filter shortcuts: `R` resets the filters and `/` focuses the
/// search box. Ignored while a text field has keyboard focus.
pub fn handle_shortcuts(ctx: &egui::Context, state: &mut AppState) {
    if ctx.wants_keyboard_input() {
        return;
    }
    let (reset, focus_search) =
        ctx.input(|i| (i.key_pressed(egui::Key::R), i.key_pressed(egui::Key::Slash)));
    if reset {
        state.reset_filters();
    }
    if focus_search {
        ctx.memory_mut(|m| m.request_focus(search_box_id()));
    }
}

/// Render the filter controls.
pub fn render(ui: &mut egui::Ui, state: &mut AppState) {
    ui.heading("Find a pet");
    ui.separator();

    // Text search
    ui.label("Search:");
    let mut query = state.criteria().query.clone();
    let response = ui.add(
        egui::TextEdit::singleline(&mut query)
            .id(search_box_id())
            .hint_text("Name or breed")
            .desired_width(f32::INFINITY),
    );
    if response.changed() {
        state.set_query(&query);
    }

    ui.add_space(6.0);

    egui::Grid::new("attribute_filters")
        .num_columns(2)
        .spacing([8.0, 6.0])
        .show(ui, |ui| {
            for attr in PetAttribute::all() {
                ui.label(format!("{}:", attr.label()));
                attribute_combo(ui, state, *attr);
                ui.end_row();
            }
        });

    ui.add_space(6.0);
    ui.separator();

    ui.horizontal(|ui| {
        let active = state.criteria().active_count();
        if ui
            .add_enabled(active > 0, egui::Button::new("Reset filters"))
            .clicked()
        {
            state.reset_filters();
        }
        if active > 0 {
            ui.label(egui::RichText::new(format!("{active} active")).weak());
        }
    });

    if !state.warnings.is_empty() {
        ui.separator();
        for warning in &state.warnings {
            ui.label(
                egui::RichText::new(warning)
                    .small()
                    .color(theme::WARNING_COLOUR),
            );
        }
    }
}

/// One combo box: "Any" plus every value the listing holds for `attr`.
fn attribute_combo(ui: &mut egui::Ui, state: &mut AppState, attr: PetAttribute) {
    let current = state.criteria().get(attr).to_string();
    let options = state.facets(attr).to_vec();
    let mut chosen: Option<String> = None;

    let selected_text = if current.is_empty() {
        constants::ANY_LABEL.to_string()
    } else {
        current.clone()
    };

    egui::ComboBox::from_id_salt(attr.key())
        .selected_text(selected_text)
        .width(140.0)
        .show_ui(ui, |ui| {
            if ui
                .selectable_label(current.is_empty(), constants::ANY_LABEL)
                .clicked()
            {
                chosen = Some(String::new());
            }
            for option in &options {
                let is_current = option.value.to_lowercase() == current.to_lowercase();
                let text = format!("{} ({})", option.value, option.count);
                if ui.selectable_label(is_current, text).clicked() {
                    chosen = Some(option.value.clone());
                }
            }
        });

    if let Some(value) = chosen {
        state.set_criterion(attr, &value);
    }
}
