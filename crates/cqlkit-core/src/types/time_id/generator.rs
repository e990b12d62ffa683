use crate::types::{ChaChaEntropy, EntropySource, TimeId, TimeIdError, time_ordered_id};
use chrono::{DateTime, Utc};

///
/// TimeIdGenerator
///
/// Owns an entropy source and stamps identifiers with it.
/// Build one at the application entry point and share it; there is no
/// global generator.
///

#[derive(Debug)]
pub struct TimeIdGenerator<S = ChaChaEntropy> {
    source: S,
}

impl TimeIdGenerator<ChaChaEntropy> {
    /// Process default: ChaCha20 seeded from the operating system.
    pub fn from_os_entropy() -> Result<Self, TimeIdError> {
        Ok(Self::new(ChaChaEntropy::from_os()?))
    }

    #[must_use]
    pub fn seeded(seed: u64) -> Self {
        Self::new(ChaChaEntropy::from_seed(seed))
    }
}

impl<S: EntropySource> TimeIdGenerator<S> {
    pub const fn new(source: S) -> Self {
        Self { source }
    }

    pub fn generate(&self, at: DateTime<Utc>) -> Result<TimeId, TimeIdError> {
        time_ordered_id(at, &self.source)
    }

    /// Identifier stamped with the current wall-clock time.
    pub fn now(&self) -> Result<TimeId, TimeIdError> {
        self.generate(Utc::now())
    }

    pub const fn source(&self) -> &S {
        &self.source
    }
}
