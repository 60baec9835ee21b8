// PawFinder - ui/theme.rs
//
// Colour scheme, pet type colour mapping, and layout constants.
// No dependencies on app state or business logic.

use egui::Color32;

/// Accent colour for a pet type token (case-insensitive).
pub fn type_colour(pet_type: &str) -> Color32 {
    match pet_type.trim().to_lowercase().as_str() {
        "dog" => Color32::from_rgb(217, 119, 6),     // Amber 600
        "cat" => Color32::from_rgb(124, 58, 237),    // Violet 600
        "rabbit" => Color32::from_rgb(219, 39, 119), // Pink 600
        "bird" => Color32::from_rgb(8, 145, 178),    // Cyan 600
        _ => Color32::from_rgb(107, 114, 128),       // Gray 500
    }
}

/// Colour of the "no results" indicator.
pub const NO_RESULTS_COLOUR: Color32 = Color32::from_rgb(220, 38, 38); // Red 600

/// Colour for config/listing warnings in the sidebar.
pub const WARNING_COLOUR: Color32 = Color32::from_rgb(217, 119, 6); // Amber 600

/// Layout constants.
pub const SIDEBAR_WIDTH: f32 = 250.0;
pub const DETAIL_PANE_HEIGHT: f32 = 160.0;
pub const CARD_SPACING: f32 = 6.0;

/// Apply dark/light visuals and the configured body font size.
pub fn apply(ctx: &egui::Context, dark_mode: bool, font_size: f32) {
    ctx.set_visuals(if dark_mode {
        egui::Visuals::dark()
    } else {
        egui::Visuals::light()
    });
    ctx.style_mut(|style| {
        for text_style in [egui::TextStyle::Body, egui::TextStyle::Button] {
            if let Some(font) = style.text_styles.get_mut(&text_style) {
                font.size = font_size;
            }
        }
    });
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_type_colour_ignores_case() {
        assert_eq!(type_colour("DOG"), type_colour("dog"));
        assert_ne!(type_colour("dog"), type_colour("cat"));
        assert_eq!(type_colour("lizard"), type_colour(""));
    }
}
