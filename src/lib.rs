//! # combo_odds
//!
//! Odds of drawing a specific combo in a single random draw: "what is the
//! chance of holding these cards in a 7-card opening hand from a 60-card
//! deck?"
//!
//! ## How it works
//!
//! 1. Build a [`ChanceRequest`] with the deck size, hand size, and the cards
//!    you need (copies in deck, copies required).
//! 2. Call [`compute_chance`] (or [`ChanceCalculator::compute_chance`] to keep
//!    the binomial cache warm across requests). "At least N" is decomposed
//!    into disjoint "exactly N + extras" splits, each scored with the
//!    multivariate hypergeometric formula, and the splits are summed.
//! 3. When the extras would need a power set over more than 26 spare copies,
//!    the engine simulates draws instead and marks the [`ChanceResult`] as
//!    `experimental`.
//!
//! ## Quick start
//!
//! ```rust
//! use combo_odds::{compute_chance, Card, ChanceRequest};
//!
//! let request = ChanceRequest::new(60, 7, vec![
//!     Card::new("Birds of Paradise", 4, 1),
//!     Card::new("Forest", 24, 1),
//! ]);
//! let result = compute_chance(&request).unwrap();
//! assert!(!result.experimental);
//! println!("{} → {}", request.combo_description(), result);
//! ```
//!
//! Reproducible approximations come from a seeded [`EngineConfig`]:
//!
//! ```rust
//! use combo_odds::{ChanceCalculator, EngineConfig};
//!
//! let calc = ChanceCalculator::new(EngineConfig::default().with_seed(42));
//! let result = calc.compute_chance(&combo_odds::presets::leyline()).unwrap();
//! assert!((result.percent - 39.9).abs() < 0.1);
//! ```

pub mod chance_engine;
pub mod logging;

// Convenience re-exports so callers can use `combo_odds::compute_chance`
// directly without reaching into `chance_engine::`.
pub use chance_engine::{
    approximate_probability, compute_chance, exact_probability, powerset, presets,
    sum_in_population, sum_required, validate_request, BinomialCache, Card, ChanceCalculator,
    ChanceError, ChanceRequest, ChanceResult, EngineConfig, Result,
};

#[cfg(test)]
mod tests;
