//! Crate-level tests for `combo_odds`.
//!
//! Included from `lib.rs` under `#[cfg(test)]`.
//!
//! | Group | What is tested |
//! |-------|----------------|
//! | Presets | Known combos match their published odds, exact path |
//! | Clamp | Exact results in `[99.9, 100)` read as 99.9; certainty stays 100 |
//! | Fallback trigger | Monte Carlo fires only for >26 spare copies and >1 free slot |
//! | Brute force | Exact and approximate paths agree with full enumeration |
//! | Config | Disabled approximation and small binomial ceilings surface `ResourceLimit` |
//! | Sharing | One calculator serves many threads |

use std::sync::Arc;

use crate::chance_engine::{
    presets, Card, ChanceCalculator, ChanceError, ChanceRequest, EngineConfig,
};

// ── helpers ──────────────────────────────────────────────────────────────────

fn seeded(seed: u64) -> ChanceCalculator {
    ChanceCalculator::new(EngineConfig::default().with_seed(seed))
}

fn assert_close(actual: f64, expected: f64, tol: f64, what: &str) {
    assert!(
        (actual - expected).abs() < tol,
        "{what}: expected {expected} ± {tol}, got {actual}"
    );
}

/// Percent of all `hand_size`-subsets of the deck holding every required copy.
/// Walks every combination, so keep the deck small.
fn brute_force_percent(req: &ChanceRequest) -> f64 {
    let mut deck: Vec<Option<usize>> = Vec::new();
    for (i, card) in req.cards.iter().enumerate() {
        deck.extend(std::iter::repeat(Some(i)).take(card.num_in_deck as usize));
    }
    deck.resize(req.deck_size as usize, None);

    let n = deck.len();
    let k = req.hand_size as usize;
    let mut idx: Vec<usize> = (0..k).collect();
    let (mut hits, mut total) = (0u64, 0u64);

    loop {
        let mut counts = vec![0u32; req.cards.len()];
        for &i in &idx {
            if let Some(c) = deck[i] {
                counts[c] += 1;
            }
        }
        if counts.iter().zip(&req.cards).all(|(have, card)| *have >= card.num_required) {
            hits += 1;
        }
        total += 1;

        let mut i = k;
        while i > 0 && idx[i - 1] == i - 1 + n - k {
            i -= 1;
        }
        if i == 0 {
            break;
        }
        idx[i - 1] += 1;
        for j in i..k {
            idx[j] = idx[j - 1] + 1;
        }
    }
    100.0 * hits as f64 / total as f64
}

// ── presets ──────────────────────────────────────────────────────────────────

#[test]
fn exodia_odds() {
    let r = seeded(1).compute_chance(&presets::exodia()).unwrap();
    assert!(!r.experimental);
    assert_close(r.percent, 0.000152, 1e-6, "Exodia");
}

#[test]
fn channel_fireball_odds() {
    let r = seeded(1).compute_chance(&presets::channel_fireball()).unwrap();
    assert!(!r.experimental);
    assert_close(r.percent, 0.332, 1e-3, "Channel Fireball");
}

#[test]
fn leyline_odds() {
    let r = seeded(1).compute_chance(&presets::leyline()).unwrap();
    assert!(!r.experimental);
    assert_close(r.percent, 39.9, 0.1, "Leyline");
}

#[test]
fn birds_of_paradise_odds() {
    let r = seeded(1).compute_chance(&presets::birds_of_paradise()).unwrap();
    assert!(!r.experimental);
    assert_close(r.percent, 38.7, 0.1, "Birds of Paradise");
}

#[test]
fn every_preset_is_valid_and_exact() {
    let calc = seeded(1);
    for (name, req) in presets::all() {
        crate::validate_request(&req, calc.config())
            .unwrap_or_else(|e| panic!("{name} failed validation: {e}"));
        let r = calc.compute_chance(&req).unwrap();
        assert!(!r.experimental, "{name} should be exact");
        assert!((0.0..=100.0).contains(&r.percent), "{name} out of range: {}", r.percent);
    }
}

#[test]
fn exact_presets_are_repeatable() {
    let calc = seeded(1);
    for (_, req) in presets::all() {
        let a = calc.compute_chance(&req).unwrap();
        let b = calc.compute_chance(&req).unwrap();
        assert_eq!(a.percent.to_bits(), b.percent.to_bits());
    }
}

// ── clamp ────────────────────────────────────────────────────────────────────

#[test]
fn near_certain_exact_result_reads_99_9() {
    // Raw value is 99.9935%.
    let req = ChanceRequest::new(20, 5, vec![Card::new("Plains", 15, 1)]);
    let r = seeded(1).compute_chance(&req).unwrap();
    assert!(!r.experimental);
    assert_eq!(r.percent, 99.9);
}

#[test]
fn true_certainty_stays_100() {
    let req = ChanceRequest::new(5, 5, vec![Card::new("Island", 5, 1)]);
    let r = seeded(1).compute_chance(&req).unwrap();
    assert_eq!(r.percent, 100.0);
}

// ── fallback trigger ─────────────────────────────────────────────────────────

#[test]
fn many_spares_and_free_slots_use_monte_carlo() {
    // 27 spare copies, 2 free slots.
    let req = ChanceRequest::new(60, 3, vec![Card::new("Swamp", 28, 1)]);
    let r = seeded(11).compute_chance(&req).unwrap();
    assert!(r.experimental);
}

#[test]
fn exactly_26_spares_stays_exact() {
    let req = ChanceRequest::new(60, 3, vec![Card::new("Swamp", 27, 1)]);
    let r = seeded(11).compute_chance(&req).unwrap();
    assert!(!r.experimental);
    assert_close(r.percent, brute_force_percent(&req), 1e-9, "26 spares");
}

#[test]
fn many_spares_with_one_free_slot_stays_exact() {
    // 27 spare copies but only one free slot: singleton enumeration is linear.
    let req = ChanceRequest::new(60, 2, vec![Card::new("Swamp", 28, 1)]);
    let r = seeded(11).compute_chance(&req).unwrap();
    assert!(!r.experimental);
    // 1 - C(32,2)/C(60,2)
    assert_close(r.percent, 100.0 * (1.0 - 496.0 / 1770.0), 1e-9, "one free slot");
}

#[test]
fn many_spares_with_no_free_slots_stays_exact() {
    let req = ChanceRequest::new(60, 2, vec![Card::new("Swamp", 40, 2)]);
    let r = seeded(11).compute_chance(&req).unwrap();
    assert!(!r.experimental);
    // C(40,2)/C(60,2)
    assert_close(r.percent, 100.0 * 780.0 / 1770.0, 1e-9, "no free slots");
}

#[test]
fn approximation_converges_on_brute_force_reference() {
    let req = ChanceRequest::new(60, 3, vec![Card::new("Swamp", 28, 1)]);
    let reference = brute_force_percent(&req);
    assert_close(reference, 85.5056, 1e-3, "reference");

    let calc = ChanceCalculator::new(EngineConfig {
        monte_carlo_trials: 40_000,
        ..EngineConfig::default().with_seed(99)
    });
    let r = calc.compute_chance(&req).unwrap();
    assert!(r.experimental);
    // Standard error at 40k trials is ~0.18 points.
    assert_close(r.percent, reference, 1.5, "monte carlo");
}

#[test]
fn seeded_approximations_repeat() {
    let req = ChanceRequest::new(60, 5, vec![Card::new("Swamp", 28, 2), Card::new("Bolt", 3, 1)]);
    let a = seeded(5).compute_chance(&req).unwrap();
    let b = seeded(5).compute_chance(&req).unwrap();
    assert!(a.experimental);
    assert_eq!(a, b);
}

#[test]
fn certain_approximation_reports_100() {
    // 54 spare copies, but every hand holds at least one.
    let req = ChanceRequest::new(60, 7, vec![Card::new("Mountain", 55, 1)]);
    let r = seeded(3).compute_chance(&req).unwrap();
    assert!(r.experimental);
    assert_eq!(r.percent, 100.0);
}

// ── brute force agreement ────────────────────────────────────────────────────

#[test]
fn exact_path_matches_brute_force_on_small_decks() {
    let cases = [
        ChanceRequest::new(12, 4, vec![Card::new("a", 3, 1), Card::new("b", 4, 2)]),
        ChanceRequest::new(15, 6, vec![Card::new("a", 5, 2), Card::new("b", 2, 1), Card::new("c", 3, 0)]),
        ChanceRequest::new(10, 3, vec![Card::new("a", 1, 2)]),
        ChanceRequest::new(8, 8, vec![Card::new("a", 3, 3), Card::new("b", 5, 1)]),
    ];
    let calc = seeded(1);
    for req in &cases {
        let r = calc.compute_chance(req).unwrap();
        let expected = brute_force_percent(req);
        if (99.9..100.0).contains(&expected) {
            assert_eq!(r.percent, 99.9);
        } else {
            assert_close(r.percent, expected, 1e-9, &req.combo_description());
        }
    }
}

// ── config ───────────────────────────────────────────────────────────────────

#[test]
fn disabled_approximation_surfaces_resource_limit() {
    let calc = ChanceCalculator::new(EngineConfig {
        allow_approximation: false,
        ..EngineConfig::default()
    });
    let req = ChanceRequest::new(60, 3, vec![Card::new("Swamp", 28, 1)]);
    assert!(matches!(calc.compute_chance(&req), Err(ChanceError::ResourceLimit { .. })));
}

#[test]
fn raised_ceiling_keeps_large_requests_exact() {
    let calc = ChanceCalculator::new(EngineConfig {
        max_surplus_tokens_before_approximation: 40,
        ..EngineConfig::default()
    });
    let req = ChanceRequest::new(60, 3, vec![Card::new("Swamp", 28, 1)]);
    let r = calc.compute_chance(&req).unwrap();
    assert!(!r.experimental);
    assert_close(r.percent, 85.50555, 1e-4, "raised ceiling");
}

#[test]
fn small_binomial_ceiling_surfaces_resource_limit() {
    let calc = ChanceCalculator::new(EngineConfig {
        max_population_for_exact_binomial: 50,
        ..EngineConfig::default()
    });
    assert!(matches!(
        calc.compute_chance(&presets::leyline()),
        Err(ChanceError::ResourceLimit { .. })
    ));
}

#[test]
fn request_from_json_computes() {
    let json = r#"{
        "deck_size": 60,
        "hand_size": 7,
        "cards": [{ "name": "Leyline of Sanctity", "num_in_deck": 4, "num_required": 1 }]
    }"#;
    let req: ChanceRequest = serde_json::from_str(json).unwrap();
    assert_eq!(req, presets::leyline());
}

// ── sharing ──────────────────────────────────────────────────────────────────

#[test]
fn one_calculator_serves_many_threads() {
    let calc = Arc::new(seeded(1));
    let expected = calc.compute_chance(&presets::birds_of_paradise()).unwrap().percent;

    let handles: Vec<_> = (0..4)
        .map(|_| {
            let calc = Arc::clone(&calc);
            std::thread::spawn(move || calc.compute_chance(&presets::birds_of_paradise()).unwrap())
        })
        .collect();
    for h in handles {
        assert_eq!(h.join().unwrap().percent, expected);
    }
}
