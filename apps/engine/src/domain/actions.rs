//! The two things a player can do, as one value the AI and the engine share.

use serde::{Deserialize, Serialize};

use crate::domain::bidding::place_bid;
use crate::domain::state::{GameState, Phase, PlayerId};
use crate::domain::tricks::play_card;
use crate::domain::Card;
use crate::errors::GameError;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Action {
    Bid(u8),
    Play(Card),
}

/// What kind of input the player to act owes the game.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ActionKind {
    Bid,
    Play,
}

impl Action {
    pub const fn kind(self) -> ActionKind {
        match self {
            Action::Bid(_) => ActionKind::Bid,
            Action::Play(_) => ActionKind::Play,
        }
    }
}

/// The action a phase waits for; `None` when nobody is to act.
pub const fn expected_action(phase: Phase) -> Option<ActionKind> {
    match phase {
        Phase::Bidding => Some(ActionKind::Bid),
        Phase::Playing => Some(ActionKind::Play),
        Phase::NotStarted | Phase::RoundScoring | Phase::GameOver => None,
    }
}

pub fn apply_action(state: &mut GameState, who: PlayerId, action: Action) -> Result<(), GameError> {
    match action {
        Action::Bid(amount) => place_bid(state, who, amount).map(|_| ()),
        Action::Play(card) => play_card(state, who, card).map(|_| ()),
    }
}
