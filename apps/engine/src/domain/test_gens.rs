// Proptest generators for domain types.
// Hands come from real deals so every generated state keeps the deck intact.

use proptest::prelude::*;

use crate::domain::dealing::deal_hands;
use crate::domain::rules::{GameMode, PLAYERS};
use crate::domain::{Card, Rank, Suit, Trump};

pub fn suit() -> impl Strategy<Value = Suit> {
    prop::sample::select(Suit::ALL.to_vec())
}

pub fn rank() -> impl Strategy<Value = Rank> {
    prop::sample::select(Rank::ALL.to_vec())
}

pub fn card() -> impl Strategy<Value = Card> {
    (suit(), rank()).prop_map(|(suit, rank)| Card { suit, rank })
}

/// Any trump including no-trumps.
pub fn trump() -> impl Strategy<Value = Trump> {
    prop_oneof![
        4 => suit().prop_map(Trump::from),
        1 => Just(Trump::NoTrumps),
    ]
}

pub fn mode() -> impl Strategy<Value = GameMode> {
    prop::sample::select(GameMode::ALL.to_vec())
}

/// Four distinct cards, one per seat.
pub fn trick_cards() -> impl Strategy<Value = Vec<Card>> {
    prop::sample::subsequence(crate::domain::dealing::full_deck(), PLAYERS).prop_shuffle()
}

/// A full 13-card-per-seat deal from a random seed.
pub fn deal() -> impl Strategy<Value = Vec<Vec<Card>>> {
    any::<u64>().prop_map(|seed| match deal_hands(PLAYERS, seed) {
        Ok(deal) => deal.hands,
        Err(err) => panic!("dealing four hands failed: {err}"),
    })
}
