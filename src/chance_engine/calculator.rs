//! The orchestrator: turns an "at least N of each" question into a sum of
//! exact hypergeometric terms, or a Monte Carlo estimate when that sum would
//! need an intractable power set.

use rand::{rngs::StdRng, SeedableRng};
use tracing::{debug, info};

use crate::chance_engine::{
    combinatorics::{powerset_with_ceiling, BinomialCache},
    config::EngineConfig,
    error::{ChanceError, Result},
    hypergeometric::exact_split_probability,
    models::{ChanceRequest, ChanceResult},
    monte_carlo::approximate_probability,
};

/// Exact results in `[CLAMP_PERCENT, 100)` are reported as `CLAMP_PERCENT`
/// so a near-certainty never reads as "100%".
pub const CLAMP_PERCENT: f64 = 99.9;

/// Owns the binomial cache and configuration for a series of requests.
///
/// `ChanceCalculator` is `Send + Sync`; share one behind an `Arc` to reuse
/// the cache across threads.
#[derive(Debug, Default)]
pub struct ChanceCalculator {
    config: EngineConfig,
    cache: BinomialCache,
}

impl ChanceCalculator {
    pub fn new(config: EngineConfig) -> Self {
        let cache = BinomialCache::new(config.max_population_for_exact_binomial);
        ChanceCalculator { config, cache }
    }

    /// Use an existing (possibly pre-warmed) cache.
    pub fn with_cache(config: EngineConfig, cache: BinomialCache) -> Self {
        ChanceCalculator { config, cache }
    }

    pub fn config(&self) -> &EngineConfig {
        &self.config
    }

    pub fn cache(&self) -> &BinomialCache {
        &self.cache
    }

    /// Chance of drawing at least `num_required` of every card.
    ///
    /// The caller's request is never modified.
    pub fn compute_chance(&self, request: &ChanceRequest) -> Result<ChanceResult> {
        check_structure(request)?;
        // Bounds both paths: the binomial tables and the simulated deck.
        let max_deck = self.config.max_population_for_exact_binomial;
        if u64::from(request.deck_size) > max_deck {
            return Err(ChanceError::limit(format!(
                "deck size {} is larger than the supported maximum of {max_deck}",
                request.deck_size
            )));
        }

        let free_slots = (u64::from(request.hand_size) - request.sum_required()) as usize;
        let tokens = surplus_tokens(request);
        let ceiling = self.config.max_surplus_tokens_before_approximation;

        if tokens.len() > ceiling && free_slots > 1 {
            if self.config.allow_approximation {
                return self.approximate(request, tokens.len(), free_slots);
            }
            debug!(tokens = tokens.len(), free_slots, "approximation disabled");
        }

        let subsets = powerset_with_ceiling(&tokens, free_slots, ceiling)?;
        debug!(
            tokens = tokens.len(),
            free_slots,
            subsets = subsets.len(),
            "summing exact hypergeometric terms"
        );

        let in_deck: Vec<u32> = request.cards.iter().map(|c| c.num_in_deck).collect();
        let baseline: Vec<u32> = request.cards.iter().map(|c| c.num_required).collect();
        let mut required = baseline.clone();
        let mut probability = 0.0;

        for subset in &subsets {
            required.copy_from_slice(&baseline);
            for &card in subset {
                required[card] += 1;
            }
            probability += exact_split_probability(
                &self.cache,
                request.deck_size,
                request.hand_size,
                &in_deck,
                &required,
            )?;
        }

        let percent = (probability * 100.0).clamp(0.0, 100.0);
        Ok(ChanceResult { percent: clamp_percent(percent), experimental: false })
    }

    fn approximate(
        &self,
        request: &ChanceRequest,
        tokens: usize,
        free_slots: usize,
    ) -> Result<ChanceResult> {
        info!(
            tokens,
            free_slots,
            trials = self.config.monte_carlo_trials,
            "power set too large, falling back to monte carlo"
        );
        let mut rng: StdRng = match self.config.rng_seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        };
        let p = approximate_probability(request, self.config.monte_carlo_trials, &mut rng)?;
        Ok(ChanceResult { percent: p * 100.0, experimental: true })
    }
}

/// One-shot [`ChanceCalculator::compute_chance`] with default configuration.
pub fn compute_chance(request: &ChanceRequest) -> Result<ChanceResult> {
    ChanceCalculator::default().compute_chance(request)
}

/// Sum of required copies over every card in the request.
pub fn sum_required(request: &ChanceRequest) -> u64 {
    request.sum_required()
}

/// Sum of deck copies over every card in the request.
pub fn sum_in_population(request: &ChanceRequest) -> u64 {
    request.sum_in_deck()
}

/// One token per spare copy: card `i` appears `num_in_deck - num_required` times.
fn surplus_tokens(request: &ChanceRequest) -> Vec<usize> {
    request
        .cards
        .iter()
        .enumerate()
        .flat_map(|(i, card)| std::iter::repeat(i).take(card.surplus() as usize))
        .collect()
}

/// Relations that must hold for the formula to be defined at all.
fn check_structure(request: &ChanceRequest) -> Result<()> {
    if request.hand_size > request.deck_size {
        return Err(ChanceError::invalid(format!(
            "hand size {} is larger than deck size {}",
            request.hand_size, request.deck_size
        )));
    }
    if request.sum_in_deck() > u64::from(request.deck_size) {
        return Err(ChanceError::invalid(format!(
            "deck size {} is smaller than the {} listed copies",
            request.deck_size,
            request.sum_in_deck()
        )));
    }
    if request.sum_required() > u64::from(request.hand_size) {
        return Err(ChanceError::invalid(format!(
            "hand size {} is smaller than the {} required cards",
            request.hand_size,
            request.sum_required()
        )));
    }
    Ok(())
}

fn clamp_percent(percent: f64) -> f64 {
    if (CLAMP_PERCENT..100.0).contains(&percent) {
        CLAMP_PERCENT
    } else {
        percent
    }
}
