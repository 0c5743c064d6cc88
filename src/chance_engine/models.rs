use std::fmt;
use serde::{Deserialize, Serialize};

// ---------------------------------------------------------------------------
// Request primitives
// ---------------------------------------------------------------------------

/// One required card: how many copies the deck holds and how many must be drawn.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Card {
    /// Display only; never used in computation.
    #[serde(default)]
    pub name: String,
    pub num_in_deck: u32,
    pub num_required: u32,
}

impl Card {
    pub fn new(name: impl Into<String>, num_in_deck: u32, num_required: u32) -> Self {
        Card { name: name.into(), num_in_deck, num_required }
    }

    /// Copies beyond the required minimum (zero when over-required).
    pub fn surplus(&self) -> u32 {
        self.num_in_deck.saturating_sub(self.num_required)
    }
}

impl fmt::Display for Card {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = if self.name.is_empty() { "Unnamed Card" } else { self.name.as_str() };
        write!(f, "{}x {}", self.num_required, name)
    }
}

// ---------------------------------------------------------------------------
// Request / response types
// ---------------------------------------------------------------------------

/// A single-draw question: "what is the chance of drawing at least these
/// cards in a `hand_size` hand from a `deck_size` deck?"
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChanceRequest {
    pub deck_size: u32,
    pub hand_size: u32,
    pub cards: Vec<Card>,
}

impl ChanceRequest {
    pub fn new(deck_size: u32, hand_size: u32, cards: Vec<Card>) -> Self {
        ChanceRequest { deck_size, hand_size, cards }
    }

    /// Sum of `num_required` over all cards.
    pub fn sum_required(&self) -> u64 {
        self.cards.iter().map(|c| u64::from(c.num_required)).sum()
    }

    /// Sum of `num_in_deck` over all cards.
    pub fn sum_in_deck(&self) -> u64 {
        self.cards.iter().map(|c| u64::from(c.num_in_deck)).sum()
    }

    /// Human-readable combo, e.g. `"1x Black Lotus, 1x Channel"`.
    pub fn combo_description(&self) -> String {
        self.cards.iter().map(|c| c.to_string()).collect::<Vec<_>>().join(", ")
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ChanceResult {
    /// Probability in percent, within `[0, 100]`.
    pub percent: f64,
    /// `true` when the value is a Monte Carlo estimate rather than exact.
    pub experimental: bool,
}

impl fmt::Display for ChanceResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.experimental {
            write!(f, "approximately ")?;
        }
        write!(f, "{}%", three_significant_digits(self.percent))
    }
}

/// Format like a three-digit precision readout: `39.9`, `0.332`, `0.000152`, `100`.
///
/// Anything short of certainty that would round up to `100` reads `99.9`.
fn three_significant_digits(value: f64) -> String {
    if value == 0.0 || !value.is_finite() {
        return format!("{value}");
    }
    let rounded: f64 = format!("{value:.2e}").parse().unwrap_or(value);
    if value < 100.0 && rounded >= 100.0 {
        return "99.9".to_string();
    }
    let magnitude = rounded.abs().log10().floor() as i32;
    let decimals = (2 - magnitude).max(0) as usize;
    format!("{rounded:.decimals$}")
}
