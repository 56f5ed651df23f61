//! Heuristic: the deterministic baseline AI used for every `(AI)` seat.
//!
//! Bidding:
//! - Never outbid the partner: if they hold the highest bid, bid the minimum.
//! - Otherwise estimate team tricks (own hand plus a fixed partner allowance)
//!   and bid it only when it strictly beats the table.
//!
//! Play:
//! - On lead: cash a side-suit ace, else lead low from the longest side suit.
//! - Following: play low under a winning partner, else win as cheaply as
//!   possible, else throw the cheapest card, keeping trumps.

use crate::ai::{AiError, AiPlayer};
use crate::domain::player_view::PlayerView;
use crate::domain::{card_beats, Card, Rank, Suit, Trump};

/// Tricks assumed to come from the partner's hand.
const PARTNER_ALLOWANCE: u8 = 2;

#[derive(Debug, Clone, Copy, Default)]
pub struct Heuristic;

impl Heuristic {
    pub const NAME: &'static str = "Heuristic";

    pub fn new() -> Self {
        Self
    }

    /// Tricks this hand should take on its own, counted in half tricks:
    /// aces are worth one, guarded kings one, queens with two guards a half,
    /// and every card past the fourth in a suit one.
    pub fn estimate_tricks(hand: &[Card]) -> u8 {
        let mut halves = 0u32;
        for suit in Suit::ALL {
            let cards: Vec<Card> = hand.iter().copied().filter(|c| c.suit == suit).collect();
            let len = cards.len();
            for card in &cards {
                halves += match card.rank {
                    Rank::Ace => 2,
                    Rank::King if len >= 2 => 2,
                    Rank::Queen if len >= 3 => 1,
                    _ => 0,
                };
            }
            halves += 2 * len.saturating_sub(4) as u32;
        }
        (halves / 2).min(u32::from(u8::MAX)) as u8
    }

    /// Sort key for "cheapest": side suits before trumps, then low rank.
    fn cost(card: Card, trump: Trump) -> (bool, Rank, Suit) {
        (trump.is_trump(card), card.rank, card.suit)
    }

    fn cheapest(cards: &[Card], trump: Trump) -> Option<Card> {
        cards.iter().copied().min_by_key(|&c| Self::cost(c, trump))
    }

    fn choose_lead(legal: &[Card], trump: Trump) -> Option<Card> {
        let side: Vec<Card> = legal.iter().copied().filter(|&c| !trump.is_trump(c)).collect();
        if let Some(ace) = side.iter().copied().find(|c| c.rank == Rank::Ace) {
            return Some(ace);
        }
        let longest = Suit::ALL
            .into_iter()
            .filter(|&s| side.iter().any(|c| c.suit == s))
            .max_by_key(|&s| (side.iter().filter(|c| c.suit == s).count(), s));
        match longest {
            Some(suit) => side.iter().copied().filter(|c| c.suit == suit).min(),
            None => Self::cheapest(legal, trump),
        }
    }

    fn choose_follow(state: &PlayerView, legal: &[Card], trump: Trump) -> Option<Card> {
        let lead = state.trick_lead?;
        let winner = state.current_winner()?;
        if winner == state.partner {
            return Self::cheapest(legal, trump);
        }
        let best = state
            .trick_plays
            .iter()
            .find(|p| p.player == winner)
            .map(|p| p.card)?;
        let winning: Vec<Card> = legal
            .iter()
            .copied()
            .filter(|&c| card_beats(c, best, lead, trump))
            .collect();
        Self::cheapest(&winning, trump).or_else(|| Self::cheapest(legal, trump))
    }
}

impl AiPlayer for Heuristic {
    fn choose_bid(&self, state: &PlayerView) -> Result<u8, AiError> {
        let legal = state.legal_bids();
        let (Some(&lowest), Some(&highest_legal)) = (legal.first(), legal.last()) else {
            return Err(AiError::InvalidMove("no legal bids".into()));
        };
        if state.partner_holds_highest() {
            return Ok(lowest);
        }

        let estimate = Self::estimate_tricks(&state.hand).saturating_add(PARTNER_ALLOWANCE);
        let beats_table = state.highest_bid.is_none_or(|b| estimate > b.amount);
        if beats_table && estimate >= lowest {
            Ok(estimate.min(highest_legal))
        } else {
            Ok(lowest)
        }
    }

    fn choose_play(&self, state: &PlayerView) -> Result<Card, AiError> {
        let legal = state.legal_plays();
        if legal.is_empty() {
            return Err(AiError::InvalidMove("no legal plays".into()));
        }
        let trump = state.trump_or_none();
        let choice = if state.trick_plays.is_empty() {
            Self::choose_lead(legal, trump)
        } else {
            Self::choose_follow(state, legal, trump)
        };
        choice.ok_or_else(|| AiError::Internal("no card selected".into()))
    }
}
