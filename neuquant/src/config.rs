use serde::{Deserialize, Serialize};

use crate::{
    constants::SAMPLE_FACTOR_RNG,
    error::{QuantizeError, Result},
};

/// Hyperparameters for a NeuQuant run
#[derive(Clone, Serialize, Deserialize, Debug, PartialEq)]
pub struct Config {
    /// Only every n-th pixel is visited. 1 gives the best quality,
    /// 30 the fastest run.
    pub sample_factor: usize,
}

impl Config {
    pub fn new(sample_factor: usize) -> Result<Self> {
        let config = Self { sample_factor };
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<()> {
        if !SAMPLE_FACTOR_RNG.contains(&self.sample_factor) {
            return Err(QuantizeError::InvalidSampleFactor(self.sample_factor));
        }
        Ok(())
    }

    /// Learning rate decay divisor. Sparser sampling decays slower.
    #[inline]
    pub fn alpha_decay(&self) -> usize {
        30 + (self.sample_factor - 1) / 3
    }
}

impl Default for Config {
    fn default() -> Self {
        Self { sample_factor: 1 }
    }
}
