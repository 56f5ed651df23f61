#![deny(clippy::wildcard_imports)]
#![cfg_attr(test, allow(clippy::wildcard_imports))]

pub mod ai;
pub mod config;
pub mod domain;
pub mod engine;
pub mod errors;


// Re-exports for public API
pub use ai::{AiError, AiPlayer, Decision, Heuristic, RandomPlayer};
pub use config::EngineConfig;
pub use domain::{
    Action, ActionKind, Card, GameMode, GameRecord, GameSnapshot, GameState, GameTransition,
    Phase, PlayerId, PlayerKind, PlayerView, Rank, Suit, TeamId, Trump,
};
pub use engine::{GameEngine, TurnInfo};
pub use errors::{ErrorKind, GameError};
