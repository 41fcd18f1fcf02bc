use thiserror::Error;

#[derive(Debug, Error)]
pub enum LoggerError {
    #[error("unknown log format '{0}', use one of: text, json, journald")]
    InvalidFormat(String),
    #[error("journald output needs Linux and the `journald` feature")]
    JournaldNotSupported,
    #[error("a global tracing subscriber is already installed")]
    AlreadyInitialized,
    #[error("could not install tracing subscriber: {0}")]
    InitializationFailed(String),
    #[error("log filter '{0}' is not a valid directive")]
    InvalidLogLevel(String),
}
