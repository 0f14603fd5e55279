//! Experiment configuration.
//!
//! Every field has a default matching the reference experiment, so an
//! empty TOML file (or no file at all) reproduces it exactly:
//!
//! ```toml
//! source_mean = 0.5
//! source_std = 2.0
//! target_mean = -1.0
//! target_std = 0.7
//! samples = 200000
//! seed = 0
//! ```

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::distributions::Normal;
use crate::error::{Result, TransportError};
use crate::transport::GaussianMonge;

pub const DEFAULT_SOURCE_MEAN: f64 = 0.5;
pub const DEFAULT_SOURCE_STD: f64 = 2.0;
pub const DEFAULT_TARGET_MEAN: f64 = -1.0;
pub const DEFAULT_TARGET_STD: f64 = 0.7;
pub const DEFAULT_SAMPLES: usize = 200_000;
pub const DEFAULT_SEED: u64 = 0;

/// Parameters of one sampling experiment.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ExperimentConfig {
    /// Mean m₀ of the source Gaussian μ.
    pub source_mean: f64,
    /// Standard deviation s₀ of μ.
    pub source_std: f64,
    /// Mean m₁ of the target Gaussian ν.
    pub target_mean: f64,
    /// Standard deviation s₁ of ν.
    pub target_std: f64,
    /// Number of samples drawn from μ.
    pub samples: usize,
    /// Seed for the sampler.
    pub seed: u64,
}

impl Default for ExperimentConfig {
    fn default() -> Self {
        Self {
            source_mean: DEFAULT_SOURCE_MEAN,
            source_std: DEFAULT_SOURCE_STD,
            target_mean: DEFAULT_TARGET_MEAN,
            target_std: DEFAULT_TARGET_STD,
            samples: DEFAULT_SAMPLES,
            seed: DEFAULT_SEED,
        }
    }
}

impl ExperimentConfig {
    /// Loads a configuration from a TOML file. Missing keys keep their defaults.
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path).map_err(|source| TransportError::ConfigRead {
            path: path.to_path_buf(),
            source,
        })?;
        let config: Self = toml::from_str(&content).map_err(|source| TransportError::ConfigParse {
            path: path.to_path_buf(),
            source,
        })?;
        config.validate()?;
        Ok(config)
    }

    /// Checks that both Gaussians are well defined.
    pub fn validate(&self) -> Result<()> {
        for (name, value) in [("source_std", self.source_std), ("target_std", self.target_std)] {
            if !value.is_finite() || value <= 0.0 {
                return Err(TransportError::InvalidConfig(format!(
                    "{name} must be finite and > 0, got {value}"
                )));
            }
        }
        for (name, value) in [("source_mean", self.source_mean), ("target_mean", self.target_mean)] {
            if !value.is_finite() {
                return Err(TransportError::InvalidConfig(format!(
                    "{name} must be finite, got {value}"
                )));
            }
        }
        Ok(())
    }

    pub fn source(&self) -> Result<Normal> {
        Ok(Normal::new(self.source_mean, self.source_std)?)
    }

    pub fn target(&self) -> Result<Normal> {
        Ok(Normal::new(self.target_mean, self.target_std)?)
    }

    /// The optimal map from the source to the target Gaussian.
    pub fn map(&self) -> Result<GaussianMonge> {
        Ok(GaussianMonge::new(self.source()?, self.target()?))
    }
}
