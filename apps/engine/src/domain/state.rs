use std::collections::HashSet;

use serde::{Deserialize, Serialize};
use time::OffsetDateTime;
use uuid::Uuid;

use crate::domain::dealing::DECK_SIZE;
use crate::domain::rules::{GameSettings, ModeRules, PLAYERS, PLAYERS_PER_TEAM, TEAMS};
use crate::domain::{Card, Suit, Trump};
use crate::errors::GameError;

pub type PlayerId = u8; // 0..=3, also the seat in turn order
pub type TeamId = u8; // 0..=1

/// Overall game progression phases.
#[derive(Debug, Clone, Copy, Eq, PartialEq, Hash, Serialize, Deserialize)]
pub enum Phase {
    /// No game has been initialized.
    NotStarted,
    /// Players bid in turn order starting from the round's starting player.
    Bidding,
    /// Playing tricks; the declarer leads the first one.
    Playing,
    /// All hands are empty and the round has been scored.
    RoundScoring,
    /// A team won; nothing else can happen.
    GameOver,
}

/// Who decides for a seat.
#[derive(Debug, Clone, Copy, Eq, PartialEq, Hash, Serialize, Deserialize)]
pub enum PlayerKind {
    Human,
    Ai,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Player {
    pub id: PlayerId,
    pub name: String,
    pub team: TeamId,
    pub kind: PlayerKind,
    /// Sorted hand.
    pub hand: Vec<Card>,
}

impl Player {
    pub fn is_ai(&self) -> bool {
        self.kind == PlayerKind::Ai
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Team {
    pub id: TeamId,
    pub name: String,
    /// Player ids; the players themselves live in `GameState::players`.
    pub players: [PlayerId; PLAYERS_PER_TEAM],
    pub score: i32,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Bid {
    pub player: PlayerId,
    pub amount: u8,
    pub round_no: u32,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Play {
    pub player: PlayerId,
    pub card: Card,
}

/// The trick in progress.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Trick {
    pub leader: PlayerId,
    pub plays: Vec<Play>,
}

impl Trick {
    pub fn new(leader: PlayerId) -> Self {
        Self {
            leader,
            plays: Vec::with_capacity(PLAYERS),
        }
    }

    /// Suit of the first card played, if any.
    pub fn lead(&self) -> Option<Suit> {
        self.plays.first().map(|p| p.card.suit)
    }

    pub fn is_complete(&self) -> bool {
        self.plays.len() == PLAYERS
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CompletedTrick {
    /// 1-based within its round.
    pub trick_no: u8,
    pub round_no: u32,
    pub plays: Vec<Play>,
    pub winner: PlayerId,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Contract {
    pub declarer: PlayerId,
    pub team: TeamId,
    pub amount: u8,
}

/// Per-round container.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Round {
    pub round_no: u32,
    pub starting_player: PlayerId,
    /// Known from the deal for fixed-trump modes, otherwise set when bidding closes.
    pub trump: Option<Trump>,
    pub bids: Vec<Bid>,
    pub contract: Option<Contract>,
    pub tricks_won: [u8; TEAMS],
    pub trick: Trick,
    pub completed: Vec<CompletedTrick>,
}

impl Round {
    pub fn highest_bid(&self) -> Option<Bid> {
        // Earliest bid wins ties, so only a strictly higher amount replaces it.
        self.bids.iter().fold(None, |best: Option<Bid>, bid| match best {
            Some(b) if b.amount >= bid.amount => Some(b),
            _ => Some(*bid),
        })
    }

    pub fn bid_of(&self, player: PlayerId) -> Option<Bid> {
        self.bids.iter().copied().find(|b| b.player == player)
    }
}

/// Summary of a scored round, kept in `GameState::history`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RoundResult {
    pub round_no: u32,
    pub contract: Contract,
    pub trump: Trump,
    pub bids: Vec<Bid>,
    pub tricks_won: [u8; TEAMS],
    pub points: [i32; TEAMS],
    pub made: bool,
}

impl RoundResult {
    /// The team whose score went up this round.
    pub fn scoring_team(&self) -> TeamId {
        if self.made {
            self.contract.team
        } else {
            other_team(self.contract.team)
        }
    }
}

/// Entire game container, sufficient for pure domain operations.
#[derive(Debug, Clone)]
pub struct GameState {
    pub id: Uuid,
    pub settings: GameSettings,
    pub rules: ModeRules,
    /// Base seed; each round's deal derives from it.
    pub seed: u64,
    pub phase: Phase,
    /// Indexed by `PlayerId`.
    pub players: Vec<Player>,
    pub teams: [Team; TEAMS],
    pub round: Round,
    /// Player whose turn it is; `None` when nobody can act.
    pub turn: Option<PlayerId>,
    pub history: Vec<RoundResult>,
    pub total_rounds: u32,
    pub winning_team: Option<TeamId>,
    pub started_at: OffsetDateTime,
    pub finished_at: Option<OffsetDateTime>,
    /// Bumped on every committed action.
    pub version: u64,
    /// Tricks completed over the whole game.
    pub tricks_played: u32,
    /// Most recently completed trick, kept across round boundaries.
    pub last_trick: Option<CompletedTrick>,
}

impl GameState {
    pub fn player(&self, id: PlayerId) -> Option<&Player> {
        self.players.get(id as usize)
    }

    pub fn team_of(&self, id: PlayerId) -> Option<TeamId> {
        self.player(id).map(|p| p.team)
    }

    pub fn scores(&self) -> [i32; TEAMS] {
        [self.teams[0].score, self.teams[1].score]
    }

    pub fn hand_size(&self) -> u8 {
        self.players.iter().map(|p| p.hand.len()).max().unwrap_or(0) as u8
    }

    pub fn trump_or_none(&self) -> Trump {
        self.round.trump.unwrap_or(Trump::NoTrumps)
    }

    /// Elapsed time since the game started, frozen once it finishes.
    pub fn elapsed(&self, now: OffsetDateTime) -> time::Duration {
        self.finished_at.unwrap_or(now) - self.started_at
    }

    pub fn is_over(&self) -> bool {
        self.phase == Phase::GameOver
    }

    /// Every card of the deck is held or played exactly once this round.
    pub fn deck_is_intact(&self) -> bool {
        let cards = self
            .players
            .iter()
            .flat_map(|p| p.hand.iter())
            .chain(self.round.trick.plays.iter().map(|p| &p.card))
            .chain(
                self.round
                    .completed
                    .iter()
                    .flat_map(|t| t.plays.iter().map(|p| &p.card)),
            );
        let mut seen = HashSet::with_capacity(DECK_SIZE);
        let mut count = 0usize;
        for card in cards {
            count += 1;
            if !seen.insert(*card) {
                return false;
            }
        }
        count == DECK_SIZE
    }
}

/// Seat / turn math helpers (4 fixed seats, team-major).
///
/// Team 0 holds players 0 and 1, team 1 holds players 2 and 3; turn order
/// follows the player id.
#[inline]
pub fn next_player(p: PlayerId) -> PlayerId {
    ((p as usize + 1) % PLAYERS) as PlayerId
}

#[inline]
pub fn team_for_player(p: PlayerId) -> TeamId {
    (p as usize / PLAYERS_PER_TEAM) as TeamId
}

#[inline]
pub fn partner_of(p: PlayerId) -> PlayerId {
    p ^ 1
}

#[inline]
pub fn other_team(team: TeamId) -> TeamId {
    1 - team
}

pub fn require_player(state: &GameState, id: PlayerId) -> Result<&Player, GameError> {
    state
        .player(id)
        .ok_or_else(|| GameError::not_your_turn(id, state.turn))
}
