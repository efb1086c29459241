// ============================================================================
// Logging
// Installs a tracing subscriber for binaries and test harnesses
// ============================================================================

use tracing::subscriber::SetGlobalDefaultError;
use tracing::Level;
use tracing_subscriber::FmtSubscriber;

/// Map a level name to a `tracing::Level`. Unknown names fall back to INFO.
pub fn parse_level(name: &str) -> Level {
    match name.to_ascii_lowercase().as_str() {
        "trace" => Level::TRACE,
        "debug" => Level::DEBUG,
        "info" => Level::INFO,
        "warn" => Level::WARN,
        "error" => Level::ERROR,
        _ => Level::INFO,
    }
}

/// Install a global fmt subscriber at the given level.
///
/// Use `"trace"` to see numeric operations that degrade to NaN.
///
/// # Errors
/// Fails if a global subscriber was already set.
pub fn init_logging(level: &str) -> Result<(), SetGlobalDefaultError> {
    let subscriber = FmtSubscriber::builder()
        .with_max_level(parse_level(level))
        .with_target(false)
        .finish();
    tracing::subscriber::set_global_default(subscriber)
}
