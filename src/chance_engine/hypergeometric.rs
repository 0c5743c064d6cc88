use crate::chance_engine::{
    combinatorics::BinomialCache,
    error::Result,
    models::ChanceRequest,
};

/// Probability of drawing *exactly* `num_required` of every card in `request`
/// and filling the rest of the hand from the unlisted cards.
pub fn exact_probability(cache: &BinomialCache, request: &ChanceRequest) -> Result<f64> {
    let in_deck: Vec<u32> = request.cards.iter().map(|c| c.num_in_deck).collect();
    let required: Vec<u32> = request.cards.iter().map(|c| c.num_required).collect();
    exact_split_probability(cache, request.deck_size, request.hand_size, &in_deck, &required)
}

/// Multivariate hypergeometric probability for one exact split:
///
/// `C(D - Σin, H - Σreq) · Π C(in_i, req_i) / C(D, H)`
///
/// `in_deck` and `required` are parallel slices. Any factor may be zero,
/// which is a legitimate "cannot happen" answer rather than an error.
/// Once a coefficient no longer fits in `f64` the ratio is taken in log space.
pub fn exact_split_probability(
    cache: &BinomialCache,
    deck_size: u32,
    hand_size: u32,
    in_deck: &[u32],
    required: &[u32],
) -> Result<f64> {
    debug_assert_eq!(in_deck.len(), required.len());

    let sum_in_deck: i64 = in_deck.iter().map(|&n| i64::from(n)).sum();
    let sum_required: i64 = required.iter().map(|&n| i64::from(n)).sum();

    let mut factors: Vec<(i64, i64)> = Vec::with_capacity(in_deck.len() + 1);
    factors.push((i64::from(deck_size) - sum_in_deck, i64::from(hand_size) - sum_required));
    factors.extend(in_deck.iter().zip(required).map(|(&n, &k)| (i64::from(n), i64::from(k))));
    let total = (i64::from(deck_size), i64::from(hand_size));

    let mut numerator = 1.0_f64;
    for &(n, k) in &factors {
        numerator *= cache.choose(n, k)?;
    }
    let denominator = cache.choose(total.0, total.1)?;
    if numerator == 0.0 || (numerator.is_finite() && denominator.is_finite()) {
        return Ok(numerator / denominator);
    }

    let mut ln_numerator = 0.0_f64;
    for &(n, k) in &factors {
        ln_numerator += cache.ln_choose(n, k)?;
    }
    let ln_denominator = cache.ln_choose(total.0, total.1)?;
    Ok((ln_numerator - ln_denominator).exp())
}
