//! Core chance engine: combinatorics, exact evaluation, and the orchestrator.
//!
//! ## Module overview
//!
//! | Module           | Purpose |
//! |------------------|---------|
//! | `models`         | Request/response types: cards, requests, results |
//! | `error`          | `ChanceError` and the crate `Result` alias |
//! | `config`         | Engine limits and Monte Carlo knobs |
//! | `combinatorics`  | Growth-only binomial cache and bounded power sets |
//! | `hypergeometric` | Exact multivariate hypergeometric probability |
//! | `monte_carlo`    | Simulated draws when exact enumeration is too big |
//! | `calculator`     | `compute_chance()`: "at least" decomposition and fallback |
//! | `validation`     | User-facing pre-checks for an input layer |
//! | `presets`        | Canonical example combos |

pub mod calculator;
pub mod combinatorics;
pub mod config;
pub mod error;
pub mod hypergeometric;
pub mod models;
pub mod monte_carlo;
pub mod presets;
pub mod validation;

pub use calculator::{compute_chance, sum_in_population, sum_required, ChanceCalculator};
pub use combinatorics::{powerset, BinomialCache};
pub use config::EngineConfig;
pub use error::{ChanceError, Result};
pub use hypergeometric::exact_probability;
pub use models::{Card, ChanceRequest, ChanceResult};
pub use monte_carlo::approximate_probability;
pub use validation::validate_request;
