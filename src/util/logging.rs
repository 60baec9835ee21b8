// PawFinder - util/logging.rs
//
// Structured logging with runtime-selectable debug mode.
//
// Activation:
//   - Environment variable: RUST_LOG=debug (or trace)
//   - CLI flag: --debug
//   - Config file: [logging] level = "debug"
//
// Output: stderr.

use tracing_subscriber::EnvFilter;

/// Initialise the logging subsystem.
///
/// `debug_flag` is true when the user passed --debug on the CLI.
/// `config_level` is the validated level from config.toml (if present).
///
/// Priority: RUST_LOG env var > CLI --debug flag > config level > default "info".
pub fn init(debug_flag: bool, config_level: Option<&str>) {
    let filter = resolve_filter(std::env::var("RUST_LOG").ok(), debug_flag, config_level);

    // try_init so a second call (tests, embedding) is harmless.
    let result = tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::new(&filter))
        .with_target(true)
        .with_file(true)
        .with_line_number(true)
        .with_writer(std::io::stderr)
        .compact()
        .try_init();

    if result.is_ok() {
        tracing::debug!(
            app = super::constants::APP_NAME,
            version = super::constants::APP_VERSION,
            filter = %filter,
            "Logging initialised"
        );
    }
}

/// Pick the filter directive according to the documented priority order.
fn resolve_filter(env: Option<String>, debug_flag: bool, config_level: Option<&str>) -> String {
    match env {
        Some(directive) if !directive.trim().is_empty() => directive,
        _ if debug_flag => "debug".to_string(),
        _ => config_level
            .unwrap_or(super::constants::DEFAULT_LOG_LEVEL)
            .to_string(),
    }
}
