//! Per-game metrics for simulation output.

use engine::domain::state::RoundResult;
use engine::GameRecord;
use serde::Serialize;

use crate::simulator::GameResult;

/// One JSONL line: the finished-game record plus simulation details.
#[derive(Debug, Clone, Serialize)]
pub struct GameMetrics {
    pub game_num: u32,
    pub seed: u64,
    pub ai: String,
    #[serde(flatten)]
    pub record: GameRecord,
    pub contracts_made: u32,
    pub contracts_set: u32,
    pub cards_played: usize,
    pub sim_duration_ms: f64,
    pub rounds: Vec<RoundMetrics>,
}

#[derive(Debug, Clone, Serialize)]
pub struct RoundMetrics {
    pub round_no: u32,
    pub declarer: u8,
    pub declaring_team: u8,
    pub bid: u8,
    pub trump: String,
    pub tricks_won: [u8; 2],
    pub points: [i32; 2],
    pub made: bool,
}

impl From<&RoundResult> for RoundMetrics {
    fn from(round: &RoundResult) -> Self {
        Self {
            round_no: round.round_no,
            declarer: round.contract.declarer,
            declaring_team: round.contract.team,
            bid: round.contract.amount,
            trump: format!("{:?}", round.trump),
            tricks_won: round.tricks_won,
            points: round.points,
            made: round.made,
        }
    }
}

/// Flat CSV row, one per game.
#[derive(Debug, Clone, Serialize)]
pub struct CsvSummaryRow {
    pub game_num: u32,
    pub game_id: String,
    pub seed: u64,
    pub mode: String,
    pub winner: u8,
    pub team1_score: i32,
    pub team2_score: i32,
    pub rounds: u32,
    pub contracts_made: u32,
    pub contracts_set: u32,
}

impl From<&GameMetrics> for CsvSummaryRow {
    fn from(m: &GameMetrics) -> Self {
        Self {
            game_num: m.game_num,
            game_id: m.record.game_id.to_string(),
            seed: m.seed,
            mode: m.record.game_mode.clone(),
            winner: m.record.winning_team_id,
            team1_score: m.record.team_scores[0],
            team2_score: m.record.team_scores[1],
            rounds: m.record.total_rounds,
            contracts_made: m.contracts_made,
            contracts_set: m.contracts_set,
        }
    }
}

pub fn build_game_metrics(game_num: u32, ai: &str, result: &GameResult, duration_ms: f64) -> GameMetrics {
    let made = result.rounds.iter().filter(|r| r.made).count() as u32;
    GameMetrics {
        game_num,
        seed: result.seed,
        ai: ai.to_string(),
        record: result.record.clone(),
        contracts_made: made,
        contracts_set: result.rounds.len() as u32 - made,
        cards_played: result.cards_played,
        sim_duration_ms: duration_ms,
        rounds: result.rounds.iter().map(RoundMetrics::from).collect(),
    }
}
