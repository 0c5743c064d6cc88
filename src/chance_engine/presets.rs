//! Well-known combos, handy as demos and as regression anchors.

use crate::chance_engine::models::{Card, ChanceRequest};

/// All five pieces of Exodia in a 5-card opening hand from 40.
pub fn exodia() -> ChanceRequest {
    ChanceRequest::new(40, 5, vec![
        Card::new("Exodia the Forbidden One", 1, 1),
        Card::new("Right Leg of the Forbidden One", 1, 1),
        Card::new("Left Leg of the Forbidden One", 1, 1),
        Card::new("Right Arm of the Forbidden One", 1, 1),
        Card::new("Left Arm of the Forbidden One", 1, 1),
    ])
}

pub fn channel_fireball() -> ChanceRequest {
    ChanceRequest::new(60, 7, vec![
        Card::new("Black Lotus", 1, 1),
        Card::new("Channel", 1, 1),
        Card::new("Fireball", 4, 1),
        Card::new("Mountain", 24, 1),
    ])
}

pub fn leyline() -> ChanceRequest {
    ChanceRequest::new(60, 7, vec![Card::new("Leyline of Sanctity", 4, 1)])
}

pub fn birds_of_paradise() -> ChanceRequest {
    ChanceRequest::new(60, 7, vec![
        Card::new("Birds of Paradise", 4, 1),
        Card::new("Forest", 24, 1),
    ])
}

/// Every preset with a short display name.
pub fn all() -> Vec<(&'static str, ChanceRequest)> {
    vec![
        ("Exodia", exodia()),
        ("Channel Fireball", channel_fireball()),
        ("Leyline", leyline()),
        ("Birds of Paradise", birds_of_paradise()),
    ]
}
