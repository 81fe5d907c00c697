use std::num::{ParseFloatError, ParseIntError};

use thiserror::Error;

/// Failure reported by a converter when the source text does not fit its type.
///
/// The registry passes these through to the caller untouched.
#[derive(Debug, Error)]
pub enum ConversionError {
    #[error("unable to convert string to boolean value")]
    InvalidBoolean,

    #[error("invalid integer \"{value}\": {source}")]
    InvalidInteger {
        value: String,
        #[source]
        source: ParseIntError,
    },

    #[error("invalid unsigned integer \"{value}\": {source}")]
    InvalidUnsigned {
        value: String,
        #[source]
        source: ParseIntError,
    },

    #[error("invalid unsigned integer \"{0}\": sign not allowed")]
    UnsignedSign(String),

    #[error("invalid float \"{value}\": {source}")]
    InvalidFloat {
        value: String,
        #[source]
        source: ParseFloatError,
    },

    #[error("float \"{0}\" is out of range")]
    FloatOutOfRange(String),

    #[error("value \"{value}\" is out of range for {target}")]
    OutOfRange { value: String, target: &'static str },

    #[error("invalid duration \"{0}\"")]
    InvalidDuration(String),

    #[error("invalid duration \"{0}\": missing unit")]
    MissingDurationUnit(String),

    #[error("invalid duration \"{value}\": unknown unit \"{unit}\"")]
    UnknownDurationUnit { unit: String, value: String },

    #[error("invalid duration \"{0}\": negative durations are not supported here")]
    NegativeDuration(String),

    #[error("invalid timestamp \"{value}\": {source}")]
    InvalidTimestamp {
        value: String,
        #[source]
        source: chrono::ParseError,
    },

    #[error("{0}")]
    Custom(String),

    #[error(transparent)]
    Other(Box<dyn std::error::Error + Send + Sync + 'static>),
}

impl ConversionError {
    /// Error with a plain message, for caller-defined converters.
    pub fn custom(message: impl Into<String>) -> Self {
        ConversionError::Custom(message.into())
    }

    /// Wrap any error raised inside a caller-defined converter.
    pub fn other<E>(err: E) -> Self
    where
        E: std::error::Error + Send + Sync + 'static,
    {
        ConversionError::Other(Box::new(err))
    }
}
