//! Error handling for the game engine.

pub mod error_code;
pub mod game_error;

pub use error_code::ErrorKind;
pub use game_error::GameError;
