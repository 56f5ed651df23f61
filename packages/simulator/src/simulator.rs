//! Headless games: every seat is played by the engine's AI.

use engine::ai::create_ai;
use engine::domain::state::RoundResult;
use engine::{EngineConfig, GameEngine, GameRecord, GameTransition, Phase};
use tracing::debug;

use crate::types::AiType;

const AI_MARKER: &str = "(AI)";

/// Outcome of one simulated game.
#[derive(Debug, Clone)]
pub struct GameResult {
    pub seed: u64,
    pub record: GameRecord,
    pub rounds: Vec<RoundResult>,
    pub cards_played: usize,
}

pub struct Simulator {
    config: EngineConfig,
    ai: AiType,
}

impl Simulator {
    pub fn new(config: EngineConfig, ai: AiType) -> Self {
        Self { config, ai }
    }

    /// Play one game to completion with `seed`.
    pub fn simulate_game(
        &self,
        seed: u64,
        team1: &str,
        team2: &str,
    ) -> Result<GameResult, Box<dyn std::error::Error>> {
        let config = EngineConfig {
            seed: Some(seed),
            auto_advance_rounds: true,
            ai_fill: true,
            ..self.config.clone()
        };
        let strategy = create_ai(self.ai.name(), Some(seed))
            .ok_or_else(|| format!("Unknown AI type: {}", self.ai.name()))?;
        let engine = GameEngine::with_ai(config, strategy)?;

        let transitions = engine.initialize_default_game(&ai_roster(team1), &ai_roster(team2))?;
        if engine.phase() != Phase::GameOver {
            return Err(format!("game with seed {seed} stopped in {:?}", engine.phase()).into());
        }
        let record = engine
            .finished_record()
            .ok_or("finished game produced no record")?;
        let rounds = engine
            .snapshot()
            .map(|s| s.history.clone())
            .unwrap_or_default();
        let cards_played = transitions
            .iter()
            .filter(|t| matches!(t, GameTransition::CardPlayed { .. }))
            .count();

        debug!(seed, game_id = %record.game_id, rounds = record.total_rounds, "Simulated game");
        Ok(GameResult {
            seed,
            record,
            rounds,
            cards_played,
        })
    }
}

/// Mark every named seat as AI so the engine never waits for input.
///
/// Empty segments pass through untouched so the engine still rejects them.
pub fn ai_roster(roster: &str) -> String {
    if roster.trim().is_empty() {
        return String::new();
    }
    roster
        .split('/')
        .map(str::trim)
        .map(|seat| {
            if seat.is_empty() || seat.to_ascii_uppercase().ends_with(AI_MARKER) {
                seat.to_string()
            } else {
                format!("{seat}{AI_MARKER}")
            }
        })
        .collect::<Vec<_>>()
        .join("/")
}
