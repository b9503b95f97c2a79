pub mod commands;

use std::path::Path;

use anyhow::Result;
use exefind_core::FinderConfig;
use tracing_subscriber::EnvFilter;

/// Install the stderr tracing subscriber.
///
/// `RUST_LOG` wins when set; otherwise `--verbose` turns on debug output for
/// both crates and the default is warnings only.
pub fn init_logging(verbose: bool) {
    let env_filter = if std::env::var("RUST_LOG").is_ok() {
        EnvFilter::from_default_env()
    } else if verbose {
        EnvFilter::new("exefind=debug,exefind_core=debug")
    } else {
        EnvFilter::new("warn")
    };

    // A second init (tests driving several commands in-process) is not an error.
    let _ = tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .try_init();
}

/// Load the config from `--config` if given, else defaults + environment.
pub fn load_config(path: Option<&Path>) -> Result<FinderConfig> {
    FinderConfig::load_or_default(path)
}
