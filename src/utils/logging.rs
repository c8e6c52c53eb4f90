// Diagnostic logging setup for the command line tool

use tracing_subscriber::EnvFilter;

/// Filter directive for the given flags when `RUST_LOG` is not set
pub const fn default_level(verbosity: u8, batch: bool) -> &'static str {
    if batch {
        return "error";
    }
    match verbosity {
        0 => "warn",
        1 => "debug",
        _ => "trace",
    }
}

/// Install a stderr subscriber; stdout is reserved for results
///
/// Calling this more than once keeps the first subscriber.
pub fn init_logging(verbosity: u8, batch: bool) {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level(verbosity, batch)));

    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .try_init();
}
