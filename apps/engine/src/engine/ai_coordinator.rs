use tracing::{debug, warn};
use uuid::Uuid;

use super::{Batch, GameEngine};
use crate::ai::{select_next_action, Decision};
use crate::domain::actions::apply_action;
use crate::domain::round_lifecycle::advance_round;
use crate::domain::state::Phase;
use crate::errors::GameError;

impl GameEngine {
    /// Stage AI turns and automatic round advances on top of `batch` until a
    /// human must act or the game ends.
    ///
    /// Fails when an AI action is rejected or when more than
    /// `ai_step_limit` steps would be needed; the caller then drops the
    /// whole batch.
    pub(super) fn drive(&self, batch: &mut Batch) -> Result<(), GameError> {
        let limit = self.config.ai_step_limit;
        let mut steps = 0usize;
        loop {
            let Some(current) = batch.current() else {
                return Ok(());
            };
            let mut next = current.clone();

            if current.phase == Phase::RoundScoring {
                if !self.config.auto_advance_rounds {
                    debug!(game_id = %current.id, "Round scored, waiting for advance_round");
                    return Ok(());
                }
                if steps == limit {
                    return Err(stalled(current.id, limit));
                }
                advance_round(&mut next)?;
            } else {
                match select_next_action(current, self.strategy.as_ref()) {
                    Decision::Act { player, action } => {
                        if steps == limit {
                            return Err(stalled(current.id, limit));
                        }
                        debug!(game_id = %current.id, player, ?action, "Processing AI turn");
                        if let Err(err) = apply_action(&mut next, player, action) {
                            warn!(game_id = %current.id, player, error = %err, "AI action rejected");
                            return Err(GameError::ai_stalled(format!(
                                "AI player {player} chose a rejected action: {err}"
                            )));
                        }
                    }
                    Decision::AwaitInput { player, expecting } => {
                        debug!(game_id = %current.id, player, ?expecting, "Human player's turn, stopping AI processing");
                        return Ok(());
                    }
                    Decision::Idle => return Ok(()),
                }
            }

            batch.stage(next);
            steps += 1;
        }
    }
}

fn stalled(game_id: Uuid, limit: usize) -> GameError {
    warn!(%game_id, limit, "AI step limit reached, rolling back");
    GameError::ai_stalled(format!(
        "AI seats did not reach a human turn or the end of the game within {limit} steps"
    ))
}
