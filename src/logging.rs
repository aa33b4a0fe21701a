// 📜 Logging - tracing subscriber for the binaries
//
// The library only emits events; binaries install the subscriber.

use tracing_subscriber::EnvFilter;

/// Crate targets that receive the CLI verbosity level.
const CRATE_TARGETS: &[&str] = &["enrolment_calendar", "enrolment_server"];

/// Map a `-v` count to a level name.
///
/// 0 → warn, 1 → info, 2 → debug, 3+ → trace
pub fn level_for(verbosity: u8) -> &'static str {
    match verbosity {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    }
}

/// Default filter directive for a verbosity level
pub fn default_filter(verbosity: u8) -> String {
    let level = level_for(verbosity);
    CRATE_TARGETS
        .iter()
        .map(|target| format!("{target}={level}"))
        .collect::<Vec<_>>()
        .join(",")
}

/// Initialize tracing. `RUST_LOG` overrides the verbosity flag if set.
pub fn init(verbosity: u8) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(default_filter(verbosity)));

    // Ignore a second init (tests, embedding)
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .try_init();
}
