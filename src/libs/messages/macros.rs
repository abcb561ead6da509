//! Convenience macros for application messaging and logging.
//!
//! Two families of macros live here:
//!
//! - **Log macros** (`msg_info!`, `msg_debug!`, `msg_error!`)
//!   always go through `tracing`, so the server's subscriber decides where
//!   they end up and the `RUST_LOG` filter applies to them.
//! - **Console macros** (`msg_print!`, `msg_success!`) write to stdout and
//!   are meant for one-shot CLI commands such as `init` and `schema`.
//!
//! The error helper (`msg_error_anyhow!`) turns a `Message` into an
//! `anyhow::Error` for command plumbing.
//!
//! ## Usage
//!
//! ```rust
//! use taskql::{msg_info, msg_success};
//! use taskql::libs::messages::Message;
//!
//! msg_info!(Message::AllMigrationsCompleted);
//! msg_success!(Message::ConfigSaved("config.json".to_string()));
//! ```

/// Logs a message at `info` level.
#[macro_export]
macro_rules! msg_info {
    ($msg:expr) => {
        tracing::info!("{}", $msg)
    };
}

/// Logs a message at `debug` level.
#[macro_export]
macro_rules! msg_debug {
    ($msg:expr) => {
        tracing::debug!("{}", $msg)
    };
}

/// Logs a message at `error` level.
#[macro_export]
macro_rules! msg_error {
    ($msg:expr) => {
        tracing::error!("{}", $msg)
    };
}

/// Prints a message to stdout.
///
/// Used by CLI commands whose output is the product itself (for example the
/// SDL printed by `taskql schema`), where log formatting would get in the way.
#[macro_export]
macro_rules! msg_print {
    ($msg:expr) => {
        println!("{}", $msg)
    };
}

/// Prints a success message with ✅ prefix to stdout.
#[macro_export]
macro_rules! msg_success {
    ($msg:expr) => {
        println!("✅ {}", $msg)
    };
}

/// Creates an `anyhow::Error` from a message.
///
/// ```rust
/// use taskql::msg_error_anyhow;
/// use taskql::libs::messages::Message;
///
/// let error = msg_error_anyhow!(Message::ConfigInvalidPort("abc".to_string()));
/// assert_eq!(error.to_string(), "Invalid port 'abc' in environment");
/// ```
#[macro_export]
macro_rules! msg_error_anyhow {
    ($msg:expr) => {
        anyhow::anyhow!("{}", $msg)
    };
}
