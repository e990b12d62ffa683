use crate::value::CqlType;
use thiserror::Error as ThisError;

// re-exports
pub use crate::{config::ConfigError, types::TimeIdError, version::VersionError};

///
/// SerializeError
///
/// Rejection raised by a value serializer.
/// Literal builders hand it back to the caller unchanged.
///

#[derive(Clone, Debug, Eq, PartialEq, ThisError)]
pub enum SerializeError {
    #[error("value {value} is out of range for {target}")]
    OutOfRange { value: String, target: CqlType },

    #[error("cannot serialize value as {target}: {message}")]
    Invalid { target: CqlType, message: String },
}

impl SerializeError {
    pub fn out_of_range(value: impl ToString, target: CqlType) -> Self {
        Self::OutOfRange {
            value: value.to_string(),
            target,
        }
    }

    pub fn invalid(target: CqlType, message: impl Into<String>) -> Self {
        Self::Invalid {
            target,
            message: message.into(),
        }
    }
}
