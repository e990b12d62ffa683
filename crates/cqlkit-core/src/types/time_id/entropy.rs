use crate::types::TimeIdError;
use rand_chacha::ChaCha20Rng;
use rand_core::{Rng, SeedableRng};
use std::{
    fmt,
    sync::{Arc, Mutex, PoisonError},
};

///
/// EntropySource
///
/// Randomness feeding the non-time bits of every `TimeId`.
/// Implementations must be safe to share across threads.
///

pub trait EntropySource: Send + Sync {
    fn next_u128(&self) -> u128;
}

impl<S: EntropySource + ?Sized> EntropySource for Arc<S> {
    fn next_u128(&self) -> u128 {
        (**self).next_u128()
    }
}

///
/// ChaChaEntropy
///
/// ChaCha20 stream behind a mutex. Seeded from the operating system for
/// production use, or from a fixed seed for reproducible runs.
///

pub struct ChaChaEntropy {
    rng: Mutex<ChaCha20Rng>,
}

impl ChaChaEntropy {
    pub fn from_os() -> Result<Self, TimeIdError> {
        let mut seed = [0u8; 32];
        getrandom::fill(&mut seed).map_err(|err| TimeIdError::Entropy {
            message: err.to_string(),
        })?;
        tracing::debug!("seeded time id entropy from the operating system");

        Ok(Self::from_rng(ChaCha20Rng::from_seed(seed)))
    }

    #[must_use]
    pub fn from_seed(seed: u64) -> Self {
        tracing::debug!(seed, "seeded time id entropy from a fixed seed");

        Self::from_rng(ChaCha20Rng::seed_from_u64(seed))
    }

    const fn from_rng(rng: ChaCha20Rng) -> Self {
        Self {
            rng: Mutex::new(rng),
        }
    }
}

impl EntropySource for ChaChaEntropy {
    fn next_u128(&self) -> u128 {
        let (high, low) = {
            // the stream stays valid even if another holder panicked mid-draw
            let mut rng = self.rng.lock().unwrap_or_else(PoisonError::into_inner);
            (rng.next_u64(), rng.next_u64())
        };

        (u128::from(high) << 64) | u128::from(low)
    }
}

impl fmt::Debug for ChaChaEntropy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ChaChaEntropy").finish_non_exhaustive()
    }
}
