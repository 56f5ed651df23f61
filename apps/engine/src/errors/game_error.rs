//! Engine-level error type returned by every rejected action.
//!
//! Errors are values: the engine records the most recent one in its error
//! slot and hands it back to the caller. None of them is fatal.

use thiserror::Error;

use crate::domain::state::PlayerId;
use crate::errors::error_code::ErrorKind;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum GameError {
    #[error("Invalid configuration: {detail}")]
    InvalidConfiguration { detail: String },
    #[error("Illegal bid: {detail}")]
    IllegalBid { detail: String },
    #[error("Illegal move: {detail}")]
    IllegalMove { detail: String },
    #[error("Not your turn: player {player} acted, expected {expected:?}")]
    NotYourTurn {
        player: PlayerId,
        expected: Option<PlayerId>,
    },
    #[error("Game not started")]
    GameNotStarted,
    #[error("Game already over")]
    GameAlreadyOver,
    #[error("AI stalled: {detail}")]
    AiStalled { detail: String },
}

impl GameError {
    pub fn invalid_configuration(detail: impl Into<String>) -> Self {
        Self::InvalidConfiguration {
            detail: detail.into(),
        }
    }

    pub fn illegal_bid(detail: impl Into<String>) -> Self {
        Self::IllegalBid {
            detail: detail.into(),
        }
    }

    pub fn illegal_move(detail: impl Into<String>) -> Self {
        Self::IllegalMove {
            detail: detail.into(),
        }
    }

    pub fn ai_stalled(detail: impl Into<String>) -> Self {
        Self::AiStalled {
            detail: detail.into(),
        }
    }

    pub const fn not_your_turn(player: PlayerId, expected: Option<PlayerId>) -> Self {
        Self::NotYourTurn { player, expected }
    }

    /// Stable classification used by collaborators and tests.
    pub const fn kind(&self) -> ErrorKind {
        match self {
            GameError::InvalidConfiguration { .. } => ErrorKind::InvalidConfiguration,
            GameError::IllegalBid { .. } => ErrorKind::IllegalBid,
            GameError::IllegalMove { .. } => ErrorKind::IllegalMove,
            GameError::NotYourTurn { .. } => ErrorKind::NotYourTurn,
            GameError::GameNotStarted => ErrorKind::GameNotStarted,
            GameError::GameAlreadyOver => ErrorKind::GameAlreadyOver,
            GameError::AiStalled { .. } => ErrorKind::AiStalled,
        }
    }

    /// Human readable detail without the kind prefix.
    pub fn detail(&self) -> String {
        match self {
            GameError::InvalidConfiguration { detail }
            | GameError::IllegalBid { detail }
            | GameError::IllegalMove { detail }
            | GameError::AiStalled { detail } => detail.clone(),
            GameError::NotYourTurn { player, expected } => match expected {
                Some(seat) => format!("player {player} cannot act, player {seat} is to act"),
                None => format!("player {player} cannot act, nobody is to act"),
            },
            GameError::GameNotStarted => "no game has been started".to_string(),
            GameError::GameAlreadyOver => "the game is already over".to_string(),
        }
    }
}
