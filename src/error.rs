use thiserror::Error;

use crate::config::ApplyMode;

#[derive(Error, Debug)]
pub enum FilterError {
    #[error("Invalid filter coefficients: {0}")]
    InvalidCoefficients(String),

    #[error("Apply mode '{0}' is not supported by this filter engine")]
    UnsupportedMode(ApplyMode),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Signal mismatch: {0}")]
    SignalMismatch(String),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("WAV error: {0}")]
    Wav(#[from] hound::Error),
}

pub type Result<T> = std::result::Result<T, FilterError>;
