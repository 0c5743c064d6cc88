//! End-to-end tour of `combo_odds`.
//!
//! Run with: `cargo run --example demo`
//! Set `RUST_LOG=combo_odds=debug` to see which path each request takes.
//!
//! 1. **Exact path**: a two-card combo summed over every "extra copies" split.
//! 2. **Validation**: what an input layer reports for a malformed request.
//! 3. **Monte Carlo path**: too many spare copies for an exact power set, so
//!    the engine simulates draws. A fixed seed keeps the output reproducible.
//! 4. **Strict mode**: the same request with approximation disabled.

use combo_odds::{
    logging::init_logger, validate_request, Card, ChanceCalculator, ChanceRequest,
    EngineConfig,
};

/// Validate, compute, and pretty-print one request.
fn print_request(calc: &ChanceCalculator, title: &str, request: &ChanceRequest) {
    println!("━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━");
    println!("  {title}");
    println!("━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━");
    println!("  Combo: {}", request.combo_description());
    println!("  Deck Size: {}, Cards in Hand: {}", request.deck_size, request.hand_size);

    if let Err(e) = validate_request(request, calc.config()) {
        println!("  Rejected: {e}");
        println!();
        return;
    }
    match calc.compute_chance(request) {
        Ok(result) => println!("  The chance of you pulling this off is {result}."),
        Err(e) => println!("  Could not compute: {e}"),
    }
    println!();
}

fn main() {
    init_logger(false);
    let calc = ChanceCalculator::new(EngineConfig::default().with_seed(2024));

    // ── Exact path ───────────────────────────────────────────────────────────
    print_request(&calc, "Exact: turn-one mana creature", &ChanceRequest::new(60, 7, vec![
        Card::new("Llanowar Elves", 4, 1),
        Card::new("Forest", 20, 1),
    ]));

    // ── Validation ───────────────────────────────────────────────────────────
    print_request(&calc, "Validation: hand too small", &ChanceRequest::new(60, 2, vec![
        Card::new("Lightning Bolt", 4, 2),
        Card::new("Mountain", 20, 1),
    ]));

    // ── Monte Carlo path ─────────────────────────────────────────────────────
    // 31 spare copies and 4 free slots: the exact power set is out of reach.
    let big = ChanceRequest::new(60, 7, vec![
        Card::new("Dark Ritual", 4, 1),
        Card::new("Swamp", 30, 2),
    ]);
    print_request(&calc, "Monte Carlo: many spare lands", &big);

    // ── Strict mode ──────────────────────────────────────────────────────────
    let strict = ChanceCalculator::new(EngineConfig {
        allow_approximation: false,
        ..EngineConfig::default()
    });
    print_request(&strict, "Strict: approximation disabled", &big);
}
