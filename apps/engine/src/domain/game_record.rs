//! Flat record of a finished game, the shape a persistence layer stores.

use serde::{Deserialize, Serialize};
use time::OffsetDateTime;
use uuid::Uuid;

use crate::domain::rules::TEAMS;
use crate::domain::state::{GameState, TeamId};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameRecord {
    pub game_id: Uuid,
    pub team_names: [String; TEAMS],
    pub team_scores: [i32; TEAMS],
    pub winning_team_id: TeamId,
    pub total_rounds: u32,
    pub game_mode: String,
    pub duration_ms: u64,
    pub player_count: u8,
    #[serde(with = "time::serde::rfc3339")]
    pub finished_at: OffsetDateTime,
}

impl GameRecord {
    /// `None` unless the game is over and its finish time is known.
    pub fn from_finished(state: &GameState) -> Option<Self> {
        if !state.is_over() {
            return None;
        }
        let winning_team_id = state.winning_team?;
        let finished_at = state.finished_at?;
        let duration_ms = u64::try_from(state.elapsed(finished_at).whole_milliseconds()).unwrap_or(0);

        Some(Self {
            game_id: state.id,
            team_names: [state.teams[0].name.clone(), state.teams[1].name.clone()],
            team_scores: state.scores(),
            winning_team_id,
            total_rounds: state.total_rounds,
            game_mode: state.settings.mode.name().to_string(),
            duration_ms,
            player_count: state.players.len() as u8,
            finished_at,
        })
    }
}
