//! Logging setup for binaries embedding the build decision layer.
//!
//! Library crates only emit `tracing` events; a binary calls [`init_logger`]
//! once to decide where and how those events are written.
mod config;
mod error;
mod format;
mod init;
mod level;
mod timer;

pub use config::LoggerConfig;
pub use error::{LoggerError, LoggerResult};
pub use format::LoggerFormat;
pub use level::LoggerLevel;
pub use timer::UtcRfc3339;

/// Installs the global tracing subscriber described by `cfg`.
///
/// Text and JSON output go to stderr, leaving stdout to the program's own output.
/// Fails with [`LoggerError::AlreadyInitialized`] if a subscriber is already set.
///
/// # Examples
/// ```rust
/// use bld_observe::{LoggerConfig, init_logger};
///
/// let config = LoggerConfig::default();
/// init_logger(&config).expect("logger must initialize once");
/// tracing::debug!("logger ready");
/// ```
pub fn init_logger(cfg: &LoggerConfig) -> LoggerResult<()> {
    match cfg.format {
        LoggerFormat::Text => init::text(cfg),
        LoggerFormat::Json => init::json(cfg),
        LoggerFormat::Journald => init::journald(cfg),
    }
}
