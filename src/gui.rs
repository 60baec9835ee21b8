// PawFinder - gui.rs
//
// Top-level eframe::App implementation.
// Wires together all UI panels, the menu bar and the status bar.

use crate::app::listing_mgr;
use crate::app::state::AppState;
use crate::core::export::ExportFormat;
use crate::ui;
use std::path::PathBuf;

/// The PawFinder application.
pub struct PawFinderApp {
    pub state: AppState,

    /// Directory the Open Listing dialog starts in.
    pub dialog_dir: PathBuf,
}

impl PawFinderApp {
    /// Create a new application instance with the given state.
    pub fn new(state: AppState, dialog_dir: PathBuf) -> Self {
        Self { state, dialog_dir }
    }

    fn open_listing(&mut self) {
        let Some(path) = rfd::FileDialog::new()
            .set_directory(&self.dialog_dir)
            .add_filter("Pet listings", &["toml", "json"])
            .pick_file()
        else {
            return;
        };

        match listing_mgr::load_listing(Some(path.as_path())) {
            Ok(listing) => {
                if let Some(parent) = path.parent() {
                    self.dialog_dir = parent.to_path_buf();
                }
                self.state.replace_listing(listing);
            }
            Err(e) => {
                tracing::warn!(error = %e, "Failed to open listing");
                self.state.status_message = format!("Could not open listing: {e}");
            }
        }
    }

    fn export(&mut self, format: ExportFormat) {
        let (label, ext) = match format {
            ExportFormat::Csv => ("CSV", "csv"),
            ExportFormat::Json => ("JSON", "json"),
        };
        let Some(dest) = rfd::FileDialog::new()
            .add_filter(label, &[ext])
            .set_file_name(format!("pets.{ext}"))
            .save_file()
        else {
            return;
        };

        self.state.status_message = match self.state.export_to_file(format, &dest) {
            Ok(n) => format!("Exported {n} pets to {label}."),
            Err(e) => format!("{label} export failed: {e}"),
        };
    }
}

impl eframe::App for PawFinderApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        if ctx.input(|i| i.key_pressed(egui::Key::Escape)) {
            self.state.clear_selection();
        }

        ui::panels::filters::handle_shortcuts(ctx, &mut self.state);

        // Top menu bar
        egui::TopBottomPanel::top("menu_bar").show(ctx, |ui| {
            egui::menu::bar(ui, |ui| {
                ui.menu_button("File", |ui| {
                    if ui.button("Open Listing\u{2026}").clicked() {
                        ui.close_menu();
                        self.open_listing();
                    }
                    ui.separator();
                    // Export sub-menu -- enabled only when something is visible
                    let has_visible = self.state.visibility().any_visible;
                    ui.add_enabled_ui(has_visible, |ui| {
                        ui.menu_button("Export", |ui| {
                            if ui.button("Export CSV\u{2026}").clicked() {
                                ui.close_menu();
                                self.export(ExportFormat::Csv);
                            }
                            if ui.button("Export JSON\u{2026}").clicked() {
                                ui.close_menu();
                                self.export(ExportFormat::Json);
                            }
                        });
                    });
                    ui.separator();
                    if ui.button("Exit").clicked() {
                        ctx.send_viewport_cmd(egui::ViewportCommand::Close);
                    }
                });
                ui.menu_button("View", |ui| {
                    let active = !self.state.criteria().is_empty();
                    if ui
                        .add_enabled(active, egui::Button::new("Reset Filters"))
                        .clicked()
                    {
                        self.state.reset_filters();
                        ui.close_menu();
                    }
                    let theme_label = if self.state.dark_mode {
                        "Light Theme"
                    } else {
                        "Dark Theme"
                    };
                    if ui.button(theme_label).clicked() {
                        self.state.dark_mode = !self.state.dark_mode;
                        ctx.set_visuals(if self.state.dark_mode {
                            egui::Visuals::dark()
                        } else {
                            egui::Visuals::light()
                        });
                        ui.close_menu();
                    }
                });
                ui.menu_button("Help", |ui| {
                    if ui.button("About").clicked() {
                        self.state.show_about = true;
                        ui.close_menu();
                    }
                });
            });
        });

        // Status bar
        egui::TopBottomPanel::bottom("status_bar").show(ctx, |ui| {
            ui.horizontal(|ui| {
                if self.state.debug_mode {
                    ui.label(egui::RichText::new(" DEBUG ").strong().weak());
                    ui.separator();
                }
                ui.label(&self.state.status_message);
                ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                    let total = self.state.pets.len();
                    let visible = self.state.visibility().len();
                    ui.label(format!("{visible}/{total} pets"));
                    ui.separator();
                    ui.label(egui::RichText::new(self.state.source.to_string()).weak());
                });
            });
        });

        // Detail pane (bottom)
        egui::TopBottomPanel::bottom("detail_pane")
            .resizable(true)
            .default_height(ui::theme::DETAIL_PANE_HEIGHT)
            .show(ctx, |ui| {
                ui::panels::detail::render(ui, &self.state);
            });

        // Left sidebar
        egui::SidePanel::left("sidebar")
            .default_width(ui::theme::SIDEBAR_WIDTH)
            .resizable(true)
            .show(ctx, |ui| {
                egui::ScrollArea::vertical()
                    .id_salt("sidebar_filters")
                    .auto_shrink([false; 2])
                    .show(ui, |ui| {
                        ui::panels::filters::render(ui, &mut self.state);
                    });
            });

        // Central panel (pet cards)
        egui::CentralPanel::default().show(ctx, |ui| {
            ui::panels::listing::render(ui, &mut self.state);
        });

        ui::panels::about::render(ctx, &mut self.state);
    }
}
