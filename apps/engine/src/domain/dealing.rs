//! Deterministic card dealing logic.

use rand::seq::SliceRandom;
use rand::SeedableRng;
use rand_chacha::ChaCha20Rng;

use crate::domain::{Card, Rank, Suit};
use crate::errors::GameError;

pub const DECK_SIZE: usize = 52;

/// Generate a full 52-card deck in standard order.
pub fn full_deck() -> Vec<Card> {
    let mut deck = Vec::with_capacity(DECK_SIZE);
    for suit in Suit::ALL {
        for rank in Rank::ALL {
            deck.push(Card { suit, rank });
        }
    }
    deck
}

/// Full deck shuffled with a ChaCha20 stream seeded from `seed`.
pub fn shuffled_deck(seed: u64) -> Vec<Card> {
    let mut deck = full_deck();
    let mut rng = ChaCha20Rng::seed_from_u64(seed);
    deck.shuffle(&mut rng);
    deck
}

/// Result of dealing one round.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Deal {
    /// One sorted hand per player, indexed by player id.
    pub hands: Vec<Vec<Card>>,
}

/// Deal the whole deck evenly, one card at a time, starting with player 0.
pub fn deal_hands(player_count: usize, seed: u64) -> Result<Deal, GameError> {
    if player_count == 0 || DECK_SIZE % player_count != 0 {
        return Err(GameError::invalid_configuration(format!(
            "cannot deal {DECK_SIZE} cards evenly to {player_count} players"
        )));
    }

    let deck = shuffled_deck(seed);

    let mut hands: Vec<Vec<Card>> = vec![Vec::with_capacity(DECK_SIZE / player_count); player_count];
    for (i, card) in deck.into_iter().enumerate() {
        hands[i % player_count].push(card);
    }
    for hand in &mut hands {
        hand.sort();
    }

    Ok(Deal { hands })
}
