//! Logger setup for the shell binary.

use env_logger::{Builder, Env};
use log::LevelFilter;

/// Initialize the global logger.
///
/// `verbose` raises the default filter from info to debug. A `RUST_LOG`
/// value in the environment overrides either.
pub fn init(verbose: bool) {
    let level = if verbose {
        LevelFilter::Debug
    } else {
        LevelFilter::Info
    };

    let env = Env::default().default_filter_or(level.to_string());

    // try_init fails only if a logger is already set (repeated calls in
    // tests); that case is safe to ignore.
    let _ = Builder::from_env(env).try_init();
}
