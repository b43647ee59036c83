use thiserror::Error;

/// Errors surfaced by a signalforge run.
#[derive(Debug, Error)]
pub enum SignalforgeError {
    #[error("invalid log filter `{directive}`: {reason}")]
    LogFilter { directive: String, reason: String },
    #[error("{0}")]
    Run(String),
}

impl SignalforgeError {
    pub fn run(message: impl Into<String>) -> Self {
        Self::Run(message.into())
    }
}

pub type Result<T> = std::result::Result<T, SignalforgeError>;
