//! Diagnostic logging to stderr.

use eyre::Result;
use tracing_subscriber::EnvFilter;

const CRATES: &[&str] = &["classpath", "classpath_core", "classpath_manifest"];

/// Install the global subscriber.
///
/// `RUST_LOG` wins when set; otherwise the level comes from `-v`/`-q`.
pub fn init(verbose: u8, quiet: bool) -> Result<()> {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(default_directives(verbose, quiet)));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .compact()
        .try_init()
        .map_err(|e| eyre::eyre!("failed to initialize logging: {}", e))
}

fn level(verbose: u8, quiet: bool) -> &'static str {
    if quiet {
        return "error";
    }
    match verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    }
}

fn default_directives(verbose: u8, quiet: bool) -> String {
    let level = level(verbose, quiet);
    CRATES
        .iter()
        .map(|krate| format!("{}={}", krate, level))
        .collect::<Vec<_>>()
        .join(",")
}
