mod entropy;
mod generator;

#[cfg(test)]
mod tests;

use crate::{
    error::SerializeError,
    value::{CqlType, CqlValue},
};
use chrono::{DateTime, Utc};
use derive_more::Display;
use serde::{Deserialize, Serialize, Serializer, de::Deserializer};
use std::str::FromStr;
use thiserror::Error as ThisError;
use ulid::Ulid as WrappedUlid;
use uuid::Uuid;

// re-exports
pub use entropy::{ChaChaEntropy, EntropySource};
pub use generator::TimeIdGenerator;

/// Largest millisecond timestamp the 48 time bits can hold.
pub const MAX_TIMESTAMP_MS: u64 = (1 << 48) - 1;

///
/// TimeIdError
///

#[derive(Debug, ThisError)]
pub enum TimeIdError {
    #[error("timestamp {millis}ms is outside the representable time id range")]
    TimestampOutOfRange { millis: i64 },

    #[error("entropy source unavailable: {message}")]
    Entropy { message: String },

    #[error("invalid time id string")]
    InvalidString,
}

///
/// TimeId
///
/// 48-bit millisecond timestamp followed by 80 random bits.
/// Natural ordering is timestamp-major, so ids minted at least one
/// millisecond apart sort chronologically whatever their random bits.
///

#[derive(Clone, Copy, Debug, Display, Eq, Hash, Ord, PartialEq, PartialOrd)]
#[repr(transparent)]
pub struct TimeId(WrappedUlid);

impl TimeId {
    pub const MIN: Self = Self::from_parts(0, 0);
    pub const MAX: Self = Self::from_parts(MAX_TIMESTAMP_MS, u128::MAX);

    /// from_parts
    /// Random bits beyond the low 80 are discarded.
    #[must_use]
    pub const fn from_parts(timestamp_ms: u64, random: u128) -> Self {
        Self(WrappedUlid::from_parts(timestamp_ms, random))
    }

    /// Smallest id carrying the given timestamp.
    pub fn min_for(at: DateTime<Utc>) -> Result<Self, TimeIdError> {
        Ok(Self::from_parts(timestamp_bits(at)?, 0))
    }

    /// Largest id carrying the given timestamp.
    pub fn max_for(at: DateTime<Utc>) -> Result<Self, TimeIdError> {
        Ok(Self::from_parts(timestamp_bits(at)?, u128::MAX))
    }

    #[must_use]
    pub const fn timestamp_ms(&self) -> u64 {
        self.0.timestamp_ms()
    }

    #[must_use]
    pub const fn random(&self) -> u128 {
        self.0.random()
    }

    /// Originating timestamp, truncated to milliseconds.
    #[must_use]
    pub fn timestamp(&self) -> DateTime<Utc> {
        // 48-bit millisecond values are always inside chrono's range
        i64::try_from(self.timestamp_ms())
            .ok()
            .and_then(DateTime::<Utc>::from_timestamp_millis)
            .unwrap_or_default()
    }

    #[must_use]
    pub const fn to_u128(&self) -> u128 {
        self.0.0
    }

    #[must_use]
    pub const fn to_uuid(&self) -> Uuid {
        Uuid::from_u128(self.0.0)
    }
}

/// Mint a time-ordered id for `at`, drawing fresh randomness from `source`.
pub fn time_ordered_id<S>(at: DateTime<Utc>, source: &S) -> Result<TimeId, TimeIdError>
where
    S: EntropySource + ?Sized,
{
    let timestamp_ms = timestamp_bits(at)?;

    Ok(TimeId::from_parts(timestamp_ms, source.next_u128()))
}

/// Recover the millisecond timestamp from the time bits of `id`.
#[must_use]
pub fn extract_timestamp(id: TimeId) -> DateTime<Utc> {
    id.timestamp()
}

fn timestamp_bits(at: DateTime<Utc>) -> Result<u64, TimeIdError> {
    let millis = at.timestamp_millis();

    u64::try_from(millis)
        .ok()
        .filter(|ms| *ms <= MAX_TIMESTAMP_MS)
        .ok_or(TimeIdError::TimestampOutOfRange { millis })
}

impl CqlValue for TimeId {
    fn cql_type() -> CqlType {
        CqlType::Uuid
    }

    fn to_cql(&self) -> Result<String, SerializeError> {
        self.to_uuid().to_cql()
    }
}

impl From<WrappedUlid> for TimeId {
    fn from(ulid: WrappedUlid) -> Self {
        Self(ulid)
    }
}

impl From<TimeId> for Uuid {
    fn from(id: TimeId) -> Self {
        id.to_uuid()
    }
}

impl FromStr for TimeId {
    type Err = TimeIdError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        WrappedUlid::from_string(s)
            .map(Self)
            .map_err(|_| TimeIdError::InvalidString)
    }
}

// The ulid crate's serde impls are gated behind its `serde` feature,
// which stays off with default features disabled.
impl Serialize for TimeId {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        let mut buffer = [0; ::ulid::ULID_LEN];
        let text = self.0.array_to_str(&mut buffer);
        text.serialize(serializer)
    }
}

impl<'de> Deserialize<'de> for TimeId {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let raw = String::deserialize(deserializer)?;

        raw.parse()
            .map_err(|_| serde::de::Error::custom("invalid time id string"))
    }
}
