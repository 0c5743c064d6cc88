//! Monte Carlo estimate of the "at least" probability, used when exact
//! enumeration would need an intractable power set.

use rand::Rng;
use tracing::debug;

use crate::chance_engine::{
    error::{ChanceError, Result},
    models::ChanceRequest,
};

/// A simulated deck: `Some(i)` is a copy of card `i`, `None` is filler.
struct SimulatedDeck {
    slots: Vec<Option<usize>>,
}

impl SimulatedDeck {
    fn from_request(request: &ChanceRequest) -> Result<Self> {
        let deck_size = request.deck_size as usize;
        let mut slots: Vec<Option<usize>> = Vec::with_capacity(deck_size);
        for (i, card) in request.cards.iter().enumerate() {
            slots.extend(std::iter::repeat(Some(i)).take(card.num_in_deck as usize));
        }
        if slots.len() > deck_size {
            return Err(ChanceError::invalid(format!(
                "deck of {deck_size} cards cannot hold {} listed copies",
                slots.len()
            )));
        }
        slots.resize(deck_size, None);
        Ok(SimulatedDeck { slots })
    }

    /// Shuffle just enough to make the first `hand_size` slots a uniform
    /// random hand (partial Fisher-Yates), and return that hand.
    fn draw_hand<R: Rng>(&mut self, rng: &mut R, hand_size: usize) -> &[Option<usize>] {
        let len = self.slots.len();
        for i in 0..hand_size.min(len) {
            let j = rng.gen_range(i..len);
            self.slots.swap(i, j);
        }
        &self.slots[..hand_size.min(len)]
    }
}

/// Fraction of `trials` simulated hands that contain at least `num_required`
/// copies of every card.
pub fn approximate_probability<R: Rng>(
    request: &ChanceRequest,
    trials: u32,
    rng: &mut R,
) -> Result<f64> {
    if trials == 0 {
        return Err(ChanceError::invalid("at least one Monte Carlo trial is required"));
    }
    if request.hand_size > request.deck_size {
        return Err(ChanceError::invalid(format!(
            "hand of {} cannot be drawn from a deck of {}",
            request.hand_size, request.deck_size
        )));
    }

    let mut deck = SimulatedDeck::from_request(request)?;
    let hand_size = request.hand_size as usize;
    let required: Vec<u32> = request.cards.iter().map(|c| c.num_required).collect();
    let mut counts = vec![0u32; required.len()];
    let mut successes = 0u32;

    for _ in 0..trials {
        counts.iter_mut().for_each(|c| *c = 0);
        for &slot in deck.draw_hand(rng, hand_size) {
            if let Some(i) = slot {
                counts[i] += 1;
            }
        }
        if counts.iter().zip(&required).all(|(have, need)| have >= need) {
            successes += 1;
        }
    }

    debug!(trials, successes, "monte carlo run finished");
    Ok(f64::from(successes) / f64::from(trials))
}
