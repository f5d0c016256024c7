use crate::libs::messages::macros::is_debug_mode;
use tracing_subscriber::EnvFilter;

/// Default filter when debug mode is on but `RUST_LOG` is not set.
const DEFAULT_FILTER: &str = "todo_cli=debug,todo=debug";

/// Installs the stderr `tracing` subscriber when debug mode is enabled.
///
/// Outside debug mode no subscriber is installed and the `msg_*!` macros
/// print plain text instead.
pub fn init() {
    if !is_debug_mode() {
        return;
    }

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER));
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init();
}
