// PawFinder - main.rs
//
// Application entry point. Handles:
// 1. CLI argument parsing
// 2. config.toml loading and logging initialisation (debug mode support)
// 3. Listing loading (file or built-in sample)
// 4. Headless print/export, or eframe GUI launch

mod gui;

// Re-export modules from the library crate so that `gui.rs` can still use
// `crate::app::...`, `crate::core::...` etc.
pub use pawfinder::app;
pub use pawfinder::core;
pub use pawfinder::platform;
pub use pawfinder::ui;
pub use pawfinder::util;

use crate::core::export::ExportFormat;
use crate::core::filter::FilterCriteria;
use crate::core::model::{Pet, PetAttribute};
use clap::Parser;
use std::path::{Path, PathBuf};

/// PawFinder - browse and filter a listing of adoptable pets.
///
/// Without --print or --export the listing opens in a window with the
/// filter flags pre-selected.
#[derive(Parser, Debug)]
#[command(name = "PawFinder", version, about)]
struct Cli {
    /// Listing file (.toml or .json). Defaults to [listing] path in
    /// config.toml, then the built-in sample.
    listing: Option<PathBuf>,

    /// Only pets of this type (e.g. dog, cat).
    #[arg(long = "type", value_name = "TYPE")]
    pet_type: Option<String>,

    #[arg(long)]
    breed: Option<String>,

    #[arg(long)]
    age: Option<String>,

    #[arg(long)]
    gender: Option<String>,

    #[arg(long)]
    location: Option<String>,

    #[arg(long)]
    temperament: Option<String>,

    /// Free-text search over name and breed.
    #[arg(short = 'q', long)]
    query: Option<String>,

    /// Print the matching pets to stdout and exit.
    #[arg(long)]
    print: bool,

    /// Write the matching pets to this file (.csv or .json) and exit.
    #[arg(short = 'o', long, value_name = "PATH")]
    export: Option<PathBuf>,

    /// Enable debug logging (equivalent to RUST_LOG=debug).
    #[arg(short = 'd', long = "debug")]
    debug: bool,
}

impl Cli {
    /// Starting criteria from the filter flags.
    fn criteria(&self) -> FilterCriteria {
        let flags = [
            (PetAttribute::Type, &self.pet_type),
            (PetAttribute::Breed, &self.breed),
            (PetAttribute::Age, &self.age),
            (PetAttribute::Gender, &self.gender),
            (PetAttribute::Location, &self.location),
            (PetAttribute::Temperament, &self.temperament),
        ];
        let mut criteria = FilterCriteria::default();
        for (attr, value) in flags {
            if let Some(v) = value {
                criteria.set(attr, v.as_str());
            }
        }
        if let Some(ref q) = self.query {
            criteria.query = q.clone();
        }
        criteria
    }

    fn is_headless(&self) -> bool {
        self.print || self.export.is_some()
    }
}

fn main() {
    let cli = Cli::parse();

    // Config is read before logging exists so its level can seed the filter;
    // warnings are re-emitted once the subscriber is installed.
    let platform_paths = platform::config::PlatformPaths::resolve();
    let (config, config_warnings) = platform::config::load_config(&platform_paths.config_dir);

    util::logging::init(cli.debug, config.log_level.as_deref());

    tracing::info!(
        version = util::constants::APP_VERSION,
        debug = cli.debug,
        "PawFinder starting"
    );
    for warning in &config_warnings {
        tracing::warn!(warning = %warning, "Config warning");
    }

    // Listing: CLI path > config path > built-in sample
    let listing_path = cli.listing.clone().or_else(|| config.listing_path.clone());
    let listing = match app::listing_mgr::load_listing(listing_path.as_deref()) {
        Ok(l) => l,
        Err(e) => {
            tracing::error!(error = %e, "Failed to load listing");
            eprintln!("Error: {e}");
            std::process::exit(1);
        }
    };

    let mut state = app::state::AppState::new(listing, cli.criteria(), cli.debug);
    state.warnings = config_warnings;
    state.dark_mode = config.dark_mode;

    if cli.is_headless() {
        if let Err(e) = run_headless(&cli, &state) {
            tracing::error!(error = %e, "Headless run failed");
            eprintln!("Error: {e}");
            std::process::exit(1);
        }
        return;
    }

    let native_options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_title(format!(
                "{} v{}",
                util::constants::APP_NAME,
                util::constants::APP_VERSION
            ))
            .with_inner_size([1000.0, 700.0])
            .with_min_inner_size([640.0, 420.0]),
        ..Default::default()
    };

    let dark_mode = config.dark_mode;
    let font_size = config.font_size;
    let dialog_dir = platform_paths.data_dir.clone();

    let result = eframe::run_native(
        util::constants::APP_NAME,
        native_options,
        Box::new(move |cc| {
            ui::theme::apply(&cc.egui_ctx, dark_mode, font_size);
            Ok(Box::new(gui::PawFinderApp::new(state, dialog_dir)))
        }),
    );

    if let Err(e) = result {
        tracing::error!(error = %e, "Failed to launch GUI");
        eprintln!("Error: Failed to launch PawFinder GUI: {e}");
        std::process::exit(1);
    }
}

/// Print and/or export the visible pets without opening a window.
fn run_headless(cli: &Cli, state: &app::state::AppState) -> util::error::Result<()> {
    if let Some(ref dest) = cli.export {
        let count = export_to_file(state, dest)?;
        println!("Exported {count} pets to {}", dest.display());
    }

    if cli.print {
        for line in print_lines(state) {
            println!("{line}");
        }
    }

    Ok(())
}

/// Export format follows the destination's extension.
fn export_to_file(state: &app::state::AppState, dest: &Path) -> util::error::Result<usize> {
    let count = state.export_to_file(ExportFormat::from_path(dest), dest)?;
    Ok(count)
}

/// Lines written by --print: one per visible pet and a summary, or the
/// no-results message.
fn print_lines(state: &app::state::AppState) -> Vec<String> {
    if state.show_no_results() {
        return vec![util::constants::NO_RESULTS_MESSAGE.to_string()];
    }
    let mut lines: Vec<String> = state.visible_pets().map(summary_line).collect();
    lines.push(state.results_summary());
    lines
}

/// One line per pet for --print output.
fn summary_line(pet: &Pet) -> String {
    format!(
        "{:<12} {:<20} {:<8} {:<8} {:<8} {:<10} {}",
        pet.display_name(),
        pet.breed_label,
        pet.pet_type,
        pet.age,
        pet.gender,
        pet.location,
        pet.temperament
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::app::listing_mgr::load_listing;
    use crate::app::state::AppState;

    fn state_for(args: &[&str]) -> (Cli, AppState) {
        let cli = Cli::try_parse_from(args.iter().copied()).unwrap();
        let listing = load_listing(None).unwrap();
        let state = AppState::new(listing, cli.criteria(), cli.debug);
        (cli, state)
    }

    #[test]
    fn test_flags_map_to_matching_attributes() {
        let cli = Cli::try_parse_from([
            "pawfinder",
            "--type",
            "dog",
            "--breed",
            "lab",
            "--age",
            "young",
            "--gender",
            "male",
            "--location",
            "ny",
            "--temperament",
            "calm",
            "-q",
            "max",
        ])
        .unwrap();
        let criteria = cli.criteria();
        assert_eq!(criteria.get(PetAttribute::Type), "dog");
        assert_eq!(criteria.get(PetAttribute::Breed), "lab");
        assert_eq!(criteria.get(PetAttribute::Age), "young");
        assert_eq!(criteria.get(PetAttribute::Gender), "male");
        assert_eq!(criteria.get(PetAttribute::Location), "ny");
        assert_eq!(criteria.get(PetAttribute::Temperament), "calm");
        assert_eq!(criteria.query, "max");
        assert!(!cli.is_headless());
    }

    #[test]
    fn test_no_flags_is_all_wildcards() {
        let cli = Cli::try_parse_from(["pawfinder"]).unwrap();
        assert!(cli.criteria().is_empty());
        assert!(cli.listing.is_none());
    }

    #[test]
    fn test_print_and_export_are_headless() {
        let print = Cli::try_parse_from(["pawfinder", "--print"]).unwrap();
        assert!(print.is_headless());
        let export = Cli::try_parse_from(["pawfinder", "-o", "pets.csv"]).unwrap();
        assert!(export.is_headless());
        assert_eq!(export.export, Some(PathBuf::from("pets.csv")));
    }

    #[test]
    fn test_print_lines_lists_visible_pets_then_summary() {
        let (_, state) = state_for(&["pawfinder", "--print", "-q", "luna"]);
        let lines = print_lines(&state);
        assert_eq!(lines.len(), state.visibility().len() + 1);
        assert!(lines[0].starts_with("Luna"));
        assert_eq!(lines.last(), Some(&state.results_summary()));
    }

    #[test]
    fn test_print_lines_no_results_message() {
        let (_, state) = state_for(&["pawfinder", "--print", "--type", "dragon"]);
        assert_eq!(
            print_lines(&state),
            vec![util::constants::NO_RESULTS_MESSAGE.to_string()]
        );
    }

    #[test]
    fn test_export_format_follows_extension() {
        let (_, state) = state_for(&["pawfinder", "--type", "cat"]);
        let dir = tempfile::tempdir().unwrap();

        let json = dir.path().join("cats.json");
        let n = export_to_file(&state, &json).unwrap();
        assert_eq!(n, state.visibility().len());
        let parsed: serde_json::Value =
            serde_json::from_str(&std::fs::read_to_string(&json).unwrap()).unwrap();
        assert!(parsed.is_object() || parsed.is_array());

        let csv = dir.path().join("cats.csv");
        export_to_file(&state, &csv).unwrap();
        let text = std::fs::read_to_string(&csv).unwrap();
        assert!(text.starts_with("id,"));
    }

    #[test]
    fn test_export_to_missing_directory_fails() {
        let (_, state) = state_for(&["pawfinder"]);
        let dir = tempfile::tempdir().unwrap();
        let dest = dir.path().join("no-such-dir").join("pets.csv");
        assert!(export_to_file(&state, &dest).is_err());
    }
}
