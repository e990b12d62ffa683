use crate::core::error::{ConfigError, SerializeError, TimeIdError, VersionError};
use derive_more::Display;
use serde::{Deserialize, Serialize};
use thiserror::Error as ThisError;

///
/// Error
/// Public error type with a stable class + origin taxonomy.
///

#[derive(Debug, Deserialize, Serialize, ThisError)]
#[error("{message}")]
pub struct Error {
    pub kind: ErrorKind,
    pub origin: ErrorOrigin,
    pub message: String,
}

impl Error {
    pub fn new(kind: ErrorKind, origin: ErrorOrigin, message: impl Into<String>) -> Self {
        Self {
            kind,
            origin,
            message: message.into(),
        }
    }
}

impl From<SerializeError> for Error {
    fn from(err: SerializeError) -> Self {
        let kind = match err {
            SerializeError::OutOfRange { .. } => SerializeErrorKind::OutOfRange,
            SerializeError::Invalid { .. } => SerializeErrorKind::Invalid,
        };

        Self::new(
            ErrorKind::Serialize(kind),
            ErrorOrigin::Clause,
            err.to_string(),
        )
    }
}

impl From<TimeIdError> for Error {
    fn from(err: TimeIdError) -> Self {
        Self::new(
            ErrorKind::TimeId(time_id_kind(&err)),
            ErrorOrigin::TimeId,
            err.to_string(),
        )
    }
}

impl From<VersionError> for Error {
    fn from(err: VersionError) -> Self {
        Self::new(
            ErrorKind::InvalidVersion,
            ErrorOrigin::Version,
            err.to_string(),
        )
    }
}

impl From<ConfigError> for Error {
    fn from(err: ConfigError) -> Self {
        let kind = match &err {
            ConfigError::Io { .. } => ErrorKind::Config(ConfigErrorKind::Io),
            ConfigError::Parse(_) => ErrorKind::Config(ConfigErrorKind::Parse),
            ConfigError::Unsupported { .. } => ErrorKind::Config(ConfigErrorKind::Unsupported),
            ConfigError::Entropy(inner) => ErrorKind::TimeId(time_id_kind(inner)),
        };

        Self::new(kind, ErrorOrigin::Config, err.to_string())
    }
}

const fn time_id_kind(err: &TimeIdError) -> TimeIdErrorKind {
    match err {
        TimeIdError::TimestampOutOfRange { .. } => TimeIdErrorKind::TimestampOutOfRange,
        TimeIdError::Entropy { .. } => TimeIdErrorKind::Entropy,
        TimeIdError::InvalidString => TimeIdErrorKind::InvalidString,
    }
}

///
/// ErrorKind
/// Public error taxonomy for callers.
///

#[derive(Clone, Debug, Deserialize, Eq, PartialEq, Serialize)]
pub enum ErrorKind {
    Config(ConfigErrorKind),
    Serialize(SerializeErrorKind),
    TimeId(TimeIdErrorKind),

    /// Version string could not be parsed.
    InvalidVersion,
}

///
/// ConfigErrorKind
///

#[derive(Clone, Debug, Deserialize, Eq, PartialEq, Serialize)]
pub enum ConfigErrorKind {
    Io,
    Parse,

    /// Clause needs a newer store than the one configured.
    Unsupported,
}

///
/// SerializeErrorKind
///

#[derive(Clone, Debug, Deserialize, Eq, PartialEq, Serialize)]
pub enum SerializeErrorKind {
    /// Value does not fit the column's declared type.
    OutOfRange,
    Invalid,
}

///
/// TimeIdErrorKind
///

#[derive(Clone, Debug, Deserialize, Eq, PartialEq, Serialize)]
pub enum TimeIdErrorKind {
    TimestampOutOfRange,
    Entropy,
    InvalidString,
}

///
/// ErrorOrigin
/// Public origin taxonomy for callers.
///

#[derive(Clone, Copy, Debug, Deserialize, Display, Eq, PartialEq, Serialize)]
pub enum ErrorOrigin {
    Clause,
    Config,
    TimeId,
    Version,
}

///
/// TESTS
///

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{config::QueryConfig, value::CqlValue, version::Version};
    use chrono::{TimeZone, Utc};

    #[test]
    fn serialize_errors_keep_their_class() {
        let err: Error = u64::MAX.to_cql().unwrap_err().into();

        assert_eq!(
            err.kind,
            ErrorKind::Serialize(SerializeErrorKind::OutOfRange)
        );
        assert_eq!(err.origin, ErrorOrigin::Clause);
        assert!(err.message.contains("bigint"));
    }

    #[test]
    fn time_id_and_version_errors() {
        let at = Utc.timestamp_millis_opt(-5).unwrap();
        let err: Error = crate::core::types::TimeId::min_for(at).unwrap_err().into();
        assert_eq!(
            err.kind,
            ErrorKind::TimeId(TimeIdErrorKind::TimestampOutOfRange)
        );

        let err: Error = "x.y".parse::<Version>().unwrap_err().into();
        assert_eq!(err.kind, ErrorKind::InvalidVersion);
        assert_eq!(err.origin.to_string(), "Version");
    }

    #[test]
    fn config_errors_map_to_config_kinds() {
        let err: Error = QueryConfig::from_toml_str("store = 5").unwrap_err().into();

        assert_eq!(err.kind, ErrorKind::Config(ConfigErrorKind::Parse));
        assert_eq!(err.origin, ErrorOrigin::Config);
        assert_eq!(err.to_string(), err.message);
    }
}
