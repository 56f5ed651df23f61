//! AI player trait definition.

use thiserror::Error;

use crate::domain::player_view::PlayerView;
use crate::domain::Card;

/// Errors that can occur during AI decision-making.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum AiError {
    /// AI encountered an internal error
    #[error("AI internal error: {0}")]
    Internal(String),
    /// AI could not produce a legal move
    #[error("AI invalid move: {0}")]
    InvalidMove(String),
}

/// Trait for AI players.
///
/// Implementations receive the game state visible to one player and must
/// choose a legal action. Decisions must depend only on that view: the engine
/// replays games from a seed and expects the same choices.
pub trait AiPlayer: Send + Sync {
    /// Choose a bid value from `state.legal_bids()`.
    fn choose_bid(&self, state: &PlayerView) -> Result<u8, AiError>;

    /// Choose a card to play from `state.legal_plays()`.
    fn choose_play(&self, state: &PlayerView) -> Result<Card, AiError>;
}
