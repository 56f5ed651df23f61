//! Card game logic: checking suits in hands, comparing card strength

use super::cards_types::{Card, Suit, Trump};

pub fn hand_has_suit(hand: &[Card], suit: Suit) -> bool {
    hand.iter().any(|c| c.suit == suit)
}

/// Tier of a card within a trick: trumps over the led suit over everything else.
fn tier(card: Card, lead: Suit, trump: Trump) -> u8 {
    if trump.is_trump(card) {
        2
    } else if card.suit == lead {
        1
    } else {
        0
    }
}

/// Does `a` beat `b` in a trick led with `lead`?
///
/// Off-suit discards never beat anything; within a tier (which implies the
/// same suit) the higher rank wins.
pub fn card_beats(a: Card, b: Card, lead: Suit, trump: Trump) -> bool {
    let (ta, tb) = (tier(a, lead, trump), tier(b, lead, trump));
    if ta != tb {
        return ta > tb;
    }
    ta > 0 && a.rank > b.rank
}
