//! Run configuration: read once at startup, immutable afterwards.

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Full parameter set for one simulation run.
///
/// Caps are "average" maxima in name only: every agent currently receives the
/// same value, but they are stored per-agent so a heterogeneous population
/// stays a data change rather than a structural one.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SimConfig {
    /// Seed for the single generator shared by matching and price feedback.
    pub seed: u64,
    /// Population size.
    pub num_agents: usize,
    /// Number of rounds to run.
    pub num_iters: u64,
    /// Average max consumption per agent per round.
    pub max_consumption: f64,
    /// Average max production per agent per round.
    pub max_production: f64,
    /// Producer draws per matching attempt (with replacement).
    pub producer_sample_size: usize,
    /// Diagnostic verbosity. The core ignores it; the CLI dumps per-agent
    /// state at report checkpoints when >= 1.
    pub verbosity: u8,
}

impl Default for SimConfig {
    fn default() -> Self {
        Self {
            seed: 31,
            num_agents: 100,
            num_iters: 100_000,
            max_consumption: 10.0,
            max_production: 10.0,
            producer_sample_size: 10,
            verbosity: 0,
        }
    }
}

#[derive(Debug, Error)]
pub enum ConfigError {
    /// Price feedback divides by max production.
    #[error("max production must be positive, got {0}")]
    NonPositiveMaxProduction(f64),
    /// With zero draws the matcher can never find a counterpart and the
    /// trade loop would spin on a full consumer set.
    #[error("producer sample size must be at least 1")]
    ZeroSampleSize,
}

impl SimConfig {
    /// Reject configurations the round loop cannot run on. Zero agents or
    /// zero rounds are legal degenerate runs that simply trade nothing.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.max_production <= 0.0 {
            return Err(ConfigError::NonPositiveMaxProduction(self.max_production));
        }
        if self.producer_sample_size == 0 {
            return Err(ConfigError::ZeroSampleSize);
        }
        Ok(())
    }

    /// Rounds between report checkpoints: 25 checkpoints per run, minimum
    /// stride 1.
    pub fn report_stride(&self) -> u64 {
        self.num_iters.div_ceil(25).max(1)
    }
}
