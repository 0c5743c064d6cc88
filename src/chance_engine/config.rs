//! Tunable engine limits.
//!
//! Every knob has a default, so a partial JSON document (or none at all) is a
//! valid configuration.

use serde::{Deserialize, Serialize};

use crate::chance_engine::error::{ChanceError, Result};

/// Largest surplus-token list enumerated exactly (the power set is `2^n`).
pub const DEFAULT_MAX_SURPLUS_TOKENS: usize = 26;
/// Largest `n` the binomial cache will extend to.
pub const DEFAULT_MAX_BINOMIAL_N: u64 = 10_000;
pub const DEFAULT_MONTE_CARLO_TRIALS: u32 = 10_000;
/// Largest deck accepted by `validate_request`.
pub const DEFAULT_MAX_DECK_SIZE: u32 = 1_000;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct EngineConfig {
    pub max_surplus_tokens_before_approximation: usize,
    pub monte_carlo_trials: u32,
    pub max_population_for_exact_binomial: u64,
    /// When `false`, requests that would need Monte Carlo fail with
    /// `ResourceLimit` instead.
    pub allow_approximation: bool,
    /// Seed for the Monte Carlo RNG; `None` draws from OS entropy.
    pub rng_seed: Option<u64>,
    pub max_deck_size: u32,
}

impl Default for EngineConfig {
    fn default() -> Self {
        EngineConfig {
            max_surplus_tokens_before_approximation: DEFAULT_MAX_SURPLUS_TOKENS,
            monte_carlo_trials: DEFAULT_MONTE_CARLO_TRIALS,
            max_population_for_exact_binomial: DEFAULT_MAX_BINOMIAL_N,
            allow_approximation: true,
            rng_seed: None,
            max_deck_size: DEFAULT_MAX_DECK_SIZE,
        }
    }
}

impl EngineConfig {
    /// Parse a (possibly partial) JSON configuration.
    pub fn from_json(json: &str) -> Result<Self> {
        let config: EngineConfig = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    /// Builder-style seed setter, handy for reproducible runs.
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.rng_seed = Some(seed);
        self
    }

    pub fn validate(&self) -> Result<()> {
        if self.monte_carlo_trials == 0 {
            return Err(ChanceError::invalid("monte_carlo_trials must be at least 1"));
        }
        Ok(())
    }
}
