//! Game modes and their rule tables.

use std::fmt;
use std::ops::RangeInclusive;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::domain::dealing::DECK_SIZE;
use crate::domain::Suit;
use crate::errors::GameError;

pub const TEAMS: usize = 2;
pub const PLAYERS_PER_TEAM: usize = 2;
pub const PLAYERS: usize = TEAMS * PLAYERS_PER_TEAM;
pub const HAND_SIZE: u8 = (DECK_SIZE / PLAYERS) as u8;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum GameMode {
    /// Declarer's strongest suit is trump; first to 31.
    Classic,
    /// Spades are always trump; points in tens, first to 300.
    Spades,
    /// Played without trumps; first to 31.
    NoTrumps,
}

impl GameMode {
    pub const ALL: [GameMode; 3] = [GameMode::Classic, GameMode::Spades, GameMode::NoTrumps];

    pub const fn name(self) -> &'static str {
        match self {
            GameMode::Classic => "Classic",
            GameMode::Spades => "Spades",
            GameMode::NoTrumps => "NoTrumps",
        }
    }

    pub const fn rules(self) -> ModeRules {
        match self {
            GameMode::Classic => ModeRules {
                min_bid: 2,
                max_bid: HAND_SIZE,
                trump: TrumpRule::DeclarerStrongestSuit,
                scoring: ScoringTable {
                    made_per_trick: 1,
                    sweep_bonus: 3,
                    set_penalty_per_bid: 1,
                    defender_per_trick: 1,
                },
                target_score: 31,
            },
            GameMode::Spades => ModeRules {
                min_bid: 1,
                max_bid: HAND_SIZE,
                trump: TrumpRule::Fixed(Suit::Spades),
                scoring: ScoringTable {
                    made_per_trick: 10,
                    sweep_bonus: 50,
                    set_penalty_per_bid: 10,
                    defender_per_trick: 10,
                },
                target_score: 300,
            },
            GameMode::NoTrumps => ModeRules {
                min_bid: 2,
                max_bid: HAND_SIZE,
                trump: TrumpRule::NoTrumps,
                scoring: ScoringTable {
                    made_per_trick: 1,
                    sweep_bonus: 3,
                    set_penalty_per_bid: 1,
                    defender_per_trick: 1,
                },
                target_score: 31,
            },
        }
    }
}

impl fmt::Display for GameMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for GameMode {
    type Err = GameError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim().replace(['-', '_', ' '], "");
        GameMode::ALL
            .into_iter()
            .find(|m| m.name().eq_ignore_ascii_case(&wanted))
            .ok_or_else(|| GameError::invalid_configuration(format!("unknown game mode: {s:?}")))
    }
}

/// How a round's trump is decided.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum TrumpRule {
    /// Fixed when bidding closes, from the declarer's hand.
    DeclarerStrongestSuit,
    /// Known from the deal onward.
    Fixed(Suit),
    NoTrumps,
}

/// Points per round outcome.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScoringTable {
    /// Contract made: declaring team scores this per trick won.
    pub made_per_trick: i32,
    /// Extra points for taking every trick.
    pub sweep_bonus: i32,
    /// Contract set: declaring team loses this per bid trick.
    pub set_penalty_per_bid: i32,
    /// Contract set: defenders score this per trick won.
    pub defender_per_trick: i32,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ModeRules {
    pub min_bid: u8,
    pub max_bid: u8,
    pub trump: TrumpRule,
    pub scoring: ScoringTable,
    /// Default score that ends the game.
    pub target_score: i32,
}

/// Per-game settings resolved from configuration.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameSettings {
    pub mode: GameMode,
    pub target_score: i32,
    /// Optional fixed number of rounds after which the game ends regardless.
    pub max_rounds: Option<u32>,
}

impl GameSettings {
    pub fn for_mode(mode: GameMode) -> Self {
        Self {
            mode,
            target_score: mode.rules().target_score,
            max_rounds: None,
        }
    }
}

/// Legal bid amounts given the hand size and the highest bid so far.
///
/// Matching the current highest is legal; it keeps the contract with the
/// earlier bidder.
pub fn valid_bid_range(rules: &ModeRules, hand_size: u8, highest: Option<u8>) -> RangeInclusive<u8> {
    let floor = highest.map_or(rules.min_bid, |h| h.max(rules.min_bid));
    floor..=rules.max_bid.min(hand_size)
}

/// Player who opens bidding in a 1-based round; rotates every round.
pub fn starting_player_for_round(round_no: u32) -> u8 {
    (round_no.saturating_sub(1) % PLAYERS as u32) as u8
}
