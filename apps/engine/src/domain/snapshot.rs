//! Public, serializable view of a game. Hands stay private: only their sizes
//! are exposed.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::domain::rules::{GameMode, TEAMS};
use crate::domain::state::{
    Bid, CompletedTrick, Contract, GameState, Phase, Play, PlayerId, PlayerKind, RoundResult,
    Team, TeamId,
};
use crate::domain::Trump;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlayerPublic {
    pub id: PlayerId,
    pub name: String,
    pub team: TeamId,
    pub kind: PlayerKind,
    pub cards_in_hand: u8,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameSnapshot {
    pub game_id: Uuid,
    pub mode: GameMode,
    pub phase: Phase,
    pub version: u64,
    pub round_no: u32,
    pub turn: Option<PlayerId>,
    pub players: Vec<PlayerPublic>,
    pub teams: Vec<Team>,
    pub bids: Vec<Bid>,
    pub contract: Option<Contract>,
    pub trump: Option<Trump>,
    pub trick: Vec<Play>,
    pub tricks_won: [u8; TEAMS],
    pub last_trick: Option<CompletedTrick>,
    pub history: Vec<RoundResult>,
    pub winning_team: Option<TeamId>,
}

impl GameSnapshot {
    pub fn from_state(state: &GameState) -> Self {
        Self {
            game_id: state.id,
            mode: state.settings.mode,
            phase: state.phase,
            version: state.version,
            round_no: state.round.round_no,
            turn: state.turn,
            players: state
                .players
                .iter()
                .map(|p| PlayerPublic {
                    id: p.id,
                    name: p.name.clone(),
                    team: p.team,
                    kind: p.kind,
                    cards_in_hand: p.hand.len() as u8,
                })
                .collect(),
            teams: state.teams.to_vec(),
            bids: state.round.bids.clone(),
            contract: state.round.contract,
            trump: state.round.trump,
            trick: state.round.trick.plays.clone(),
            tricks_won: state.round.tricks_won,
            last_trick: state.last_trick.clone(),
            history: state.history.clone(),
            winning_team: state.winning_team,
        }
    }
}
