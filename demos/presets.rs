//! The canonical example combos and their odds.
//!
//! Run with:
//!   cargo run --example presets
//!
//! All four presets take the exact path, so the numbers never change
//! between runs.

use combo_odds::{compute_chance, presets};

fn main() {
    combo_odds::logging::init_logger(false);

    for (name, request) in presets::all() {
        println!("── {name} ──");
        println!("  Combo: {}", request.combo_description());
        println!("  Deck Size: {}, Cards in Hand: {}", request.deck_size, request.hand_size);
        match compute_chance(&request) {
            Ok(result) => println!("  Chance: {result}"),
            Err(e) => println!("  Error: {e}"),
        }
        println!();
    }
}
