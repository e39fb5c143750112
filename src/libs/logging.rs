use crate::libs::messages::macros::is_debug_mode;
use tracing_subscriber::EnvFilter;

/// Installs the tracing subscriber when debug output was requested.
///
/// `RUST_LOG` takes precedence; with only `MORO_DEBUG` set everything from
/// this crate is logged at debug level. Logs go to stderr.
pub fn enable_logging() {
    if !is_debug_mode() {
        return;
    }

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(format!("{}=debug", env!("CARGO_PKG_NAME"))));

    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .try_init();
}
