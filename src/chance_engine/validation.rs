//! Pre-flight checks an input layer runs before asking for a chance.
//!
//! Messages are written for end users, so they can be shown as-is.

use crate::chance_engine::{
    config::EngineConfig,
    error::{ChanceError, Result},
    models::ChanceRequest,
};

/// Reject requests that are malformed or too large to be worth computing.
///
/// Checks run in a fixed order and the first failure wins.
pub fn validate_request(request: &ChanceRequest, config: &EngineConfig) -> Result<()> {
    if request.hand_size > request.deck_size {
        return Err(ChanceError::invalid("Your hand size is bigger than your deck size."));
    }
    if u64::from(request.deck_size) < request.sum_in_deck() {
        return Err(ChanceError::invalid(
            "Your deck size is too small, check your \"Amount in Deck\" values.",
        ));
    }
    if u64::from(request.hand_size) < request.sum_required() {
        return Err(ChanceError::invalid("Your hand size is too small for this combo."));
    }
    if request.deck_size > config.max_deck_size {
        return Err(ChanceError::limit(format!(
            "If your deck has {} cards, I wouldn't suggest playing combo.",
            request.deck_size
        )));
    }
    Ok(())
}
