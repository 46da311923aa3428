//! Logger setup for the command-line driver

use log::LevelFilter;
use std::env;

/// Initialise `env_logger`
///
/// Logs at `Debug` when `verbose` is set and `Warn` otherwise, so progress
/// output stays readable. An explicit `RUST_LOG` overrides both.
pub fn init_logger(verbose: bool) {
    let level = if verbose {
        LevelFilter::Debug
    } else {
        LevelFilter::Warn
    };

    let mut builder = env_logger::Builder::new();
    builder
        .filter(None, level)
        .format_timestamp(None)
        .format_module_path(false)
        .format_target(false);

    if let Ok(spec) = env::var("RUST_LOG") {
        builder.parse_filters(&spec);
    }

    // A second call (e.g. from tests) keeps the first logger
    if builder.try_init().is_ok() {
        log::debug!("Logger initialized at {level:?} level");
    }
}
