//! Stable error codes for engine rejections.
//!
//! Codes are SCREAMING_SNAKE_CASE and are what collaborators (UI, session
//! layer) should match on; never compare error message text.

use core::fmt;

use serde::{Deserialize, Serialize};

/// Classification of a [`crate::errors::GameError`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ErrorKind {
    /// Malformed start parameters or settings
    InvalidConfiguration,
    /// Bid out of range or placed outside the bidding phase
    IllegalBid,
    /// Card not legal or played outside trick play
    IllegalMove,
    /// Action issued by a player other than the one to act
    NotYourTurn,
    /// No game has been initialized
    GameNotStarted,
    /// The game reached its terminal phase
    GameAlreadyOver,
    /// AI seats could not bring the game back to a human turn; the call was rolled back
    AiStalled,
}

impl ErrorKind {
    pub const ALL: [ErrorKind; 7] = [
        ErrorKind::InvalidConfiguration,
        ErrorKind::IllegalBid,
        ErrorKind::IllegalMove,
        ErrorKind::NotYourTurn,
        ErrorKind::GameNotStarted,
        ErrorKind::GameAlreadyOver,
        ErrorKind::AiStalled,
    ];

    pub const fn as_str(self) -> &'static str {
        match self {
            ErrorKind::InvalidConfiguration => "INVALID_CONFIGURATION",
            ErrorKind::IllegalBid => "ILLEGAL_BID",
            ErrorKind::IllegalMove => "ILLEGAL_MOVE",
            ErrorKind::NotYourTurn => "NOT_YOUR_TURN",
            ErrorKind::GameNotStarted => "GAME_NOT_STARTED",
            ErrorKind::GameAlreadyOver => "GAME_ALREADY_OVER",
            ErrorKind::AiStalled => "AI_STALLED",
        }
    }
}

impl fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
