//! Output macros for application messages.
//!
//! Every line the application shows a user goes through one of these macros.
//! They route output depending on whether debug mode is active:
//!
//! ```text
//! ┌─────────────────┐    ┌─────────────────┐    ┌─────────────────┐
//! │   Macro Call    │    │   Debug Mode    │    │   Output        │
//! │   msg_info!()   │───▶│   Detection     │───▶│   Routing       │
//! └─────────────────┘    └─────────────────┘    └─────────────────┘
//!          │                       │                       │
//!          ▼                       ▼                       ▼
//! ┌─────────────────┐    ┌─────────────────┐    ┌─────────────────┐
//! │ Message Content │    │ TODO_DEBUG or   │    │ tracing::info!  │
//! │ + Level Info    │    │ RUST_LOG Set?   │    │ OR println!     │
//! └─────────────────┘    └─────────────────┘    └─────────────────┘
//! ```
//!
//! ## Macros
//!
//! - **`msg_print!`**: plain message
//! - **`msg_success!`**: green `✓` prefix
//! - **`msg_info!`**: no prefix, informational
//! - **`msg_error!`**: red `Error:` prefix, written to stderr
//! - **`msg_debug!`**: only emitted in debug mode
//! - **`msg_error_anyhow!`**: builds an `anyhow::Error` from a message
//!
//! ## Usage
//!
//! ```rust
//! use todo_cli::libs::messages::Message;
//! use todo_cli::{msg_info, msg_success};
//!
//! msg_success!(Message::TodoMarkedDone(3));
//! msg_info!(Message::OperationCancelled);
//! ```

use std::sync::OnceLock;

static DEBUG_MODE: OnceLock<bool> = OnceLock::new();

/// Checks whether debug mode is enabled.
///
/// Debug mode is on when either `TODO_DEBUG` or `RUST_LOG` is set. The check
/// runs once per process and is cached afterwards.
#[doc(hidden)]
pub fn is_debug_mode() -> bool {
    *DEBUG_MODE.get_or_init(|| std::env::var("TODO_DEBUG").is_ok() || std::env::var("RUST_LOG").is_ok())
}

/// Prints a message as is.
///
/// With a trailing `true` the message is surrounded by blank lines.
#[macro_export]
macro_rules! msg_print {
    ($msg:expr) => {
        if $crate::libs::messages::macros::is_debug_mode() {
            tracing::info!("{}", $msg);
        } else {
            println!("{}", $msg);
        }
    };
    ($msg:expr, true) => {
        if $crate::libs::messages::macros::is_debug_mode() {
            tracing::info!("\n{}\n", $msg);
        } else {
            println!("\n{}\n", $msg);
        }
    };
}

/// Prints a success message prefixed with a green check mark.
///
/// ```text
/// ✓ Added todo #1: Buy groceries
/// ```
#[macro_export]
macro_rules! msg_success {
    ($msg:expr) => {
        if $crate::libs::messages::macros::is_debug_mode() {
            tracing::info!("✓ {}", $msg);
        } else {
            println!("{}", $crate::libs::messages::success($msg));
        }
    };
}

/// Prints an informational message.
#[macro_export]
macro_rules! msg_info {
    ($msg:expr) => {
        if $crate::libs::messages::macros::is_debug_mode() {
            tracing::info!("{}", $msg);
        } else {
            println!("{}", $msg);
        }
    };
}

/// Prints an error to stderr prefixed with `Error:`.
///
/// Accepts anything implementing `Display`, so both messages and
/// propagated `anyhow::Error` values can be reported.
#[macro_export]
macro_rules! msg_error {
    ($msg:expr) => {
        if $crate::libs::messages::macros::is_debug_mode() {
            tracing::error!("Error: {}", $msg);
        } else {
            eprintln!("{}", $crate::libs::messages::error($msg));
        }
    };
}

/// Emits a debug line through `tracing`; silent outside debug mode.
#[macro_export]
macro_rules! msg_debug {
    ($msg:expr) => {
        if $crate::libs::messages::macros::is_debug_mode() {
            tracing::debug!("{}", $msg);
        }
    };
}

/// Creates an `anyhow::Error` whose text is the message.
///
/// ```rust
/// use todo_cli::libs::messages::Message;
/// use todo_cli::msg_error_anyhow;
///
/// let err = msg_error_anyhow!(Message::ConfigParseError("config.json".into()));
/// assert!(err.to_string().contains("config.json"));
/// ```
#[macro_export]
macro_rules! msg_error_anyhow {
    ($msg:expr) => {
        anyhow::anyhow!("{}", $msg)
    };
}
