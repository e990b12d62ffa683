//! Module: config
//! Responsibility: runtime settings for clause generation, loaded from TOML.
//! Does not own: connection or session settings.
//! Boundary: the configured store version is the only input to clause gating.

use crate::{
    clause::Clause,
    types::{TimeIdError, TimeIdGenerator},
    version::{StoreFeature, Version},
};
use serde::{Deserialize, Serialize};
use std::{fs, io, path::Path};
use thiserror::Error as ThisError;

///
/// ConfigError
///

#[derive(Debug, ThisError)]
pub enum ConfigError {
    #[error("failed to read config file '{path}': {source}")]
    Io {
        path: String,
        #[source]
        source: io::Error,
    },

    #[error("invalid config: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("{feature} requires store version {required}, configured store is {configured}")]
    Unsupported {
        feature: StoreFeature,
        required: Version,
        configured: Version,
    },

    #[error(transparent)]
    Entropy(#[from] TimeIdError),
}

///
/// QueryConfig
///
/// ```toml
/// [store]
/// version = "3.11.4"
///
/// [time_ids]
/// seed = 42
/// ```
///

#[derive(Clone, Debug, Default, Deserialize, Eq, PartialEq, Serialize)]
#[serde(default, deny_unknown_fields)]
pub struct QueryConfig {
    pub store: StoreConfig,
    pub time_ids: TimeIdConfig,
}

impl QueryConfig {
    pub fn from_toml_str(source: &str) -> Result<Self, ConfigError> {
        let config: Self = toml::from_str(source)?;
        tracing::debug!(
            store_version = %config.store.version,
            seeded = config.time_ids.seed.is_some(),
            "loaded query config"
        );

        Ok(config)
    }

    pub fn from_path(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let source = fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.display().to_string(),
            source,
        })?;

        Self::from_toml_str(&source)
    }

    #[must_use]
    pub fn supports(&self, feature: StoreFeature) -> bool {
        self.store.version.supports(feature)
    }

    /// Reject a clause that depends on a feature newer than the configured
    /// store.
    pub fn check(&self, clause: &Clause) -> Result<(), ConfigError> {
        let Some(feature) = clause.required_feature() else {
            return Ok(());
        };
        if self.supports(feature) {
            return Ok(());
        }

        tracing::warn!(
            fragment = %clause.fragment(),
            %feature,
            configured = %self.store.version,
            "clause rejected by store version"
        );

        Err(ConfigError::Unsupported {
            feature,
            required: feature.min_version(),
            configured: self.store.version.clone(),
        })
    }

    /// Seeded generator when `time_ids.seed` is set, otherwise OS entropy.
    pub fn time_id_generator(&self) -> Result<TimeIdGenerator, ConfigError> {
        match self.time_ids.seed {
            Some(seed) => Ok(TimeIdGenerator::seeded(seed)),
            None => Ok(TimeIdGenerator::from_os_entropy()?),
        }
    }
}

///
/// StoreConfig
///

#[derive(Clone, Debug, Default, Deserialize, Eq, PartialEq, Serialize)]
#[serde(default, deny_unknown_fields)]
pub struct StoreConfig {
    pub version: Version,
}

///
/// TimeIdConfig
///

#[derive(Clone, Debug, Default, Deserialize, Eq, PartialEq, Serialize)]
#[serde(default, deny_unknown_fields)]
pub struct TimeIdConfig {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub seed: Option<u64>,
}

///
/// TESTS
///
