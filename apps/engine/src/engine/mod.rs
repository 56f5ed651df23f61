//! The game engine: one owned game, serialized mutations, observable state.
//!
//! Every mutating call takes the write lock for the whole action, including
//! the AI turns and automatic round advances it triggers, and works on copies
//! of the committed state. Nothing is committed or published until the whole
//! call succeeds, so a rejected action changes nothing except the error slot.

mod ai_coordinator;
pub mod observer;
mod player_actions;

use std::sync::Arc;

use parking_lot::RwLock;
use serde::{Deserialize, Serialize};
use time::OffsetDateTime;
use tokio::sync::watch;
use tracing::{debug, info};

use crate::ai::{AiPlayer, Heuristic};
use crate::config::EngineConfig;
use crate::domain::actions::expected_action;
use crate::domain::bidding::legal_bids;
use crate::domain::player_view::PlayerView;
use crate::domain::snapshot::{GameSnapshot, PlayerPublic};
use crate::domain::state::{GameState, Phase, PlayerId, PlayerKind};
use crate::domain::tricks::legal_moves;
use crate::domain::{derive_game_transitions, ActionKind, Card, GameRecord, GameTransition};
use crate::errors::GameError;
use observer::Observable;

/// Who must act next and with what.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct TurnInfo {
    pub player: PlayerId,
    pub kind: PlayerKind,
    pub expecting: ActionKind,
}

pub type StateSlot = Option<Arc<GameState>>;

/// States produced by one call, not yet visible to readers or observers.
struct Batch {
    /// Committed state the first staged state follows; `None` for a new game.
    base: Option<Arc<GameState>>,
    version: u64,
    states: Vec<Arc<GameState>>,
    transitions: Vec<GameTransition>,
}

impl Batch {
    /// Continue from the committed `base`.
    fn after(base: Arc<GameState>) -> Self {
        Self {
            version: base.version,
            base: Some(base),
            states: Vec::new(),
            transitions: Vec::new(),
        }
    }

    /// Start a new game whose versions continue from `replaced`.
    fn replacing(replaced: Option<&GameState>) -> Self {
        Self {
            base: None,
            version: replaced.map_or(0, |g| g.version),
            states: Vec::new(),
            transitions: Vec::new(),
        }
    }

    /// Latest state, staged or committed.
    fn current(&self) -> Option<&GameState> {
        self.states.last().or(self.base.as_ref()).map(Arc::as_ref)
    }

    fn stage(&mut self, mut next: GameState) {
        self.version += 1;
        next.version = self.version;
        if next.is_over() && next.finished_at.is_none() {
            next.finished_at = Some(OffsetDateTime::now_utc());
        }
        debug_assert!(next.deck_is_intact(), "deck lost or duplicated a card");

        let transitions = derive_game_transitions(self.current(), &next);
        self.transitions.extend(transitions);
        self.states.push(Arc::new(next));
    }
}

pub struct GameEngine {
    config: EngineConfig,
    strategy: Box<dyn AiPlayer>,
    game: RwLock<StateSlot>,
    state: Observable<StateSlot>,
    errors: Observable<Option<GameError>>,
}

impl GameEngine {
    /// Engine with the baseline heuristic driving AI seats.
    pub fn new(config: EngineConfig) -> Result<Self, GameError> {
        Self::with_ai(config, Box::new(Heuristic::new()))
    }

    pub fn with_ai(config: EngineConfig, strategy: Box<dyn AiPlayer>) -> Result<Self, GameError> {
        config.validate()?;
        Ok(Self {
            config,
            strategy,
            game: RwLock::new(None),
            state: Observable::new(None),
            errors: Observable::new(None),
        })
    }

    pub fn config(&self) -> &EngineConfig {
        &self.config
    }

    pub fn phase(&self) -> Phase {
        self.game
            .read()
            .as_ref()
            .map_or(Phase::NotStarted, |g| g.phase)
    }

    /// Latest committed state.
    pub fn snapshot(&self) -> StateSlot {
        self.game.read().clone()
    }

    /// Public view without hands.
    pub fn public_snapshot(&self) -> Option<GameSnapshot> {
        self.game.read().as_deref().map(GameSnapshot::from_state)
    }

    pub fn subscribe(&self) -> watch::Receiver<StateSlot> {
        self.state.subscribe()
    }

    pub fn subscribe_errors(&self) -> watch::Receiver<Option<GameError>> {
        self.errors.subscribe()
    }

    /// Most recent rejection, `None` when clear.
    pub fn last_error(&self) -> Option<GameError> {
        self.errors.get()
    }

    pub fn valid_bids(&self, player: PlayerId) -> Vec<u8> {
        self.game
            .read()
            .as_deref()
            .map(|g| legal_bids(g, player))
            .unwrap_or_default()
    }

    pub fn valid_cards(&self, player: PlayerId) -> Vec<Card> {
        self.game
            .read()
            .as_deref()
            .map(|g| legal_moves(g, player))
            .unwrap_or_default()
    }

    pub fn turn_info(&self) -> Option<TurnInfo> {
        let slot = self.game.read();
        let game = slot.as_deref()?;
        let player = game.turn?;
        Some(TurnInfo {
            player,
            kind: game.player(player)?.kind,
            expecting: expected_action(game.phase)?,
        })
    }

    pub fn players(&self) -> Vec<PlayerPublic> {
        self.public_snapshot().map(|s| s.players).unwrap_or_default()
    }

    pub fn player_view(&self, player: PlayerId) -> Result<PlayerView, GameError> {
        let slot = self.game.read();
        let game = slot.as_deref().ok_or(GameError::GameNotStarted)?;
        PlayerView::for_player(game, player)
    }

    /// Record for the persistence layer once the game is over.
    pub fn finished_record(&self) -> Option<GameRecord> {
        self.game.read().as_deref().and_then(GameRecord::from_finished)
    }

    /// Run `op` on a copy of the current game, let AI seats and automatic
    /// round advances play on, and commit the lot under the same lock.
    fn mutate<F>(&self, op: &'static str, player: Option<PlayerId>, f: F) -> Result<Vec<GameTransition>, GameError>
    where
        F: FnOnce(&mut GameState) -> Result<(), GameError>,
    {
        let mut slot = self.game.write();
        let Some(current) = slot.clone() else {
            return Err(self.reject(op, player, GameError::GameNotStarted));
        };
        let mut next = GameState::clone(&current);
        if let Err(err) = f(&mut next) {
            return Err(self.reject(op, player, err));
        }

        let mut batch = Batch::after(current);
        batch.stage(next);
        self.finish(op, player, &mut slot, batch)
    }

    /// Drive automation on top of `batch`; commit it all or reject it all.
    fn finish(
        &self,
        op: &'static str,
        player: Option<PlayerId>,
        slot: &mut StateSlot,
        mut batch: Batch,
    ) -> Result<Vec<GameTransition>, GameError> {
        if let Err(err) = self.drive(&mut batch) {
            return Err(self.reject(op, player, err));
        }
        Ok(self.commit(slot, batch))
    }

    /// Install the staged states in order, publishing each one.
    fn commit(&self, slot: &mut StateSlot, batch: Batch) -> Vec<GameTransition> {
        let Batch {
            states, transitions, ..
        } = batch;
        for state in states {
            *slot = Some(Arc::clone(&state));
            self.state.publish(Some(state));
        }

        if let Some(game) = slot.as_deref() {
            for transition in &transitions {
                debug!(game_id = %game.id, ?transition, "Game transition");
                if let GameTransition::GameEnded { winning_team } = transition {
                    info!(
                        game_id = %game.id,
                        winning_team,
                        scores = ?game.scores(),
                        rounds = game.total_rounds,
                        "Game over"
                    );
                }
            }
        }
        transitions
    }

    fn reject(&self, op: &'static str, player: Option<PlayerId>, err: GameError) -> GameError {
        debug!(op, ?player, code = err.kind().as_str(), error = %err, "Action rejected");
        self.errors.publish(Some(err.clone()));
        err
    }
}
