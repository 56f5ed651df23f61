//! AI player module: strategies and the decision dispatch the engine runs
//! for every seat flagged as AI.

mod heuristic;
mod random;
mod trait_def;

pub use heuristic::Heuristic;
pub use random::RandomPlayer;
pub use trait_def::{AiError, AiPlayer};
use tracing::warn;

use crate::domain::actions::expected_action;
use crate::domain::player_view::PlayerView;
use crate::domain::state::{GameState, PlayerId};
use crate::domain::{Action, ActionKind};

/// What should happen next in a game.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Decision {
    /// A human seat must act.
    AwaitInput {
        player: PlayerId,
        expecting: ActionKind,
    },
    /// An AI seat has decided.
    Act { player: PlayerId, action: Action },
    /// Nobody can act (round scored, game over, not started).
    Idle,
}

/// Create an AI strategy by name: `"heuristic"` or `"random"`.
pub fn create_ai(name: &str, seed: Option<u64>) -> Option<Box<dyn AiPlayer>> {
    match name.trim().to_ascii_lowercase().as_str() {
        "heuristic" => Some(Box::new(Heuristic::new())),
        "random" => Some(Box::new(RandomPlayer::new(seed))),
        _ => None,
    }
}

/// Dispatch on the player to act: humans are awaited, AI seats decide now.
pub fn select_next_action(state: &GameState, strategy: &dyn AiPlayer) -> Decision {
    let (Some(player), Some(expecting)) = (state.turn, expected_action(state.phase)) else {
        return Decision::Idle;
    };
    let Some(seat) = state.player(player) else {
        return Decision::Idle;
    };
    if !seat.is_ai() {
        return Decision::AwaitInput { player, expecting };
    }
    let Ok(view) = PlayerView::for_player(state, player) else {
        return Decision::Idle;
    };
    match decide(&view, expecting, strategy) {
        Some(action) => Decision::Act { player, action },
        None => Decision::Idle,
    }
}

fn decide(view: &PlayerView, expecting: ActionKind, strategy: &dyn AiPlayer) -> Option<Action> {
    let chosen = match expecting {
        ActionKind::Bid => strategy.choose_bid(view).map(Action::Bid),
        ActionKind::Play => strategy.choose_play(view).map(Action::Play),
    };
    match chosen {
        Ok(action) if is_legal(view, action) => Some(action),
        Ok(action) => {
            warn!(player = view.player, ?action, "AI chose an illegal action, using fallback");
            fallback_action(view, expecting)
        }
        Err(err) => {
            warn!(player = view.player, error = %err, "AI strategy failed, using fallback");
            fallback_action(view, expecting)
        }
    }
}

fn is_legal(view: &PlayerView, action: Action) -> bool {
    match action {
        Action::Bid(amount) => view.legal_bids().contains(&amount),
        Action::Play(card) => view.legal_plays().contains(&card),
    }
}

/// Lowest legal bid or first legal card.
pub fn fallback_action(view: &PlayerView, expecting: ActionKind) -> Option<Action> {
    match expecting {
        ActionKind::Bid => view.legal_bids().first().copied().map(Action::Bid),
        ActionKind::Play => view.legal_plays().first().copied().map(Action::Play),
    }
}
