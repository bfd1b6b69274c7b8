use thiserror::Error;

/// Errors raised while configuring or installing the `tracing` subscriber.
#[derive(Debug, Error)]
pub enum LoggerError {
    #[error("unknown log format `{0}`, expected one of: text, json, journald")]
    InvalidFormat(String),

    #[error("invalid log filter `{directive}`: {reason}")]
    InvalidLogLevel { directive: String, reason: String },

    #[error("journald output requires Linux and the `journald` feature")]
    JournaldNotSupported,

    #[error("a global tracing subscriber is already installed")]
    AlreadyInitialized,

    #[error("subscriber setup failed: {0}")]
    InitializationFailed(String),
}
