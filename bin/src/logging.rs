//! Log setup for the CLI.

use tracing_subscriber::EnvFilter;

/// Maps the `-v`/`-q` flags to a filter directive.
pub(crate) const fn level_for(verbose: u8, quiet: bool) -> &'static str {
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

/// Installs the global subscriber. Logs go to stderr so exported data on
/// stdout stays clean.
///
/// `RUST_LOG` wins over `-v`; `-q` wins over both.
pub(crate) fn init(verbose: u8, quiet: bool) {
    let filter = if quiet {
        EnvFilter::new(level_for(verbose, quiet))
    } else {
        EnvFilter::try_from_default_env()
            .unwrap_or_else(|_| EnvFilter::new(level_for(verbose, quiet)))
    };

    // A subscriber may already be set when running under a test harness
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .try_init();
}
