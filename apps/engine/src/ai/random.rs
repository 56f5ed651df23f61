//! Random AI player: uniformly random legal moves.
//!
//! Useful as a weak opponent in simulations. Seed it for reproducible runs;
//! the engine's own AI seats use [`Heuristic`](super::Heuristic).

use std::sync::Mutex;

use rand::rngs::StdRng;
use rand::seq::IndexedRandom;
use rand::SeedableRng;

use super::trait_def::{AiError, AiPlayer};
use crate::domain::player_view::PlayerView;
use crate::domain::Card;

pub struct RandomPlayer {
    /// `AiPlayer` methods take `&self`, the RNG needs `&mut`.
    rng: Mutex<StdRng>,
}

impl RandomPlayer {
    pub const NAME: &'static str = "RandomPlayer";

    /// `None` seeds from system entropy.
    pub fn new(seed: Option<u64>) -> Self {
        let rng = match seed {
            Some(s) => StdRng::seed_from_u64(s),
            None => StdRng::from_os_rng(),
        };
        Self {
            rng: Mutex::new(rng),
        }
    }

    fn pick<T: Copy>(&self, options: &[T], what: &str) -> Result<T, AiError> {
        if options.is_empty() {
            return Err(AiError::InvalidMove(format!("No legal {what} available")));
        }
        let mut rng = self
            .rng
            .lock()
            .map_err(|e| AiError::Internal(format!("RNG lock poisoned: {e}")))?;
        options
            .choose(&mut *rng)
            .copied()
            .ok_or_else(|| AiError::Internal(format!("Failed to choose random {what}")))
    }
}

impl AiPlayer for RandomPlayer {
    fn choose_bid(&self, state: &PlayerView) -> Result<u8, AiError> {
        self.pick(state.legal_bids(), "bids")
    }

    fn choose_play(&self, state: &PlayerView) -> Result<Card, AiError> {
        self.pick(state.legal_plays(), "plays")
    }
}
