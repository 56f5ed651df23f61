use time::OffsetDateTime;
use tracing::{debug, info};

use super::{Batch, GameEngine};
use crate::domain::bidding::place_bid;
use crate::domain::roster::Roster;
use crate::domain::round_lifecycle::{advance_round, start_game};
use crate::domain::state::PlayerId;
use crate::domain::tricks::play_card;
use crate::domain::{random_game_seed, Card, GameTransition};
use crate::errors::GameError;

impl GameEngine {
    /// Start a new game from two roster strings such as `"Alice/Charlie(AI)"`,
    /// replacing any game in progress.
    ///
    /// AI seats that are to act right away (including every seat of an
    /// all-AI table) play before this returns. If they stall, the previous
    /// game stays in place.
    pub fn initialize_default_game(
        &self,
        team1: &str,
        team2: &str,
    ) -> Result<Vec<GameTransition>, GameError> {
        const OP: &str = "initialize_default_game";
        let mut slot = self.game.write();

        let rosters = match (Roster::parse(team1), Roster::parse(team2)) {
            (Ok(a), Ok(b)) => [a, b],
            (Err(err), _) | (_, Err(err)) => return Err(self.reject(OP, None, err)),
        };
        let seed = self.config.seed.unwrap_or_else(random_game_seed);
        let state = match start_game(
            self.config.settings(),
            rosters,
            self.config.ai_fill,
            seed,
            OffsetDateTime::now_utc(),
        ) {
            Ok(state) => state,
            Err(err) => return Err(self.reject(OP, None, err)),
        };

        info!(
            game_id = %state.id,
            mode = %state.settings.mode,
            seed,
            team1 = %state.teams[0].name,
            team2 = %state.teams[1].name,
            "Game started"
        );

        let mut batch = Batch::replacing(slot.as_deref());
        batch.stage(state);
        self.finish(OP, None, &mut slot, batch)
    }

    /// Bid for `player`; on success AI seats bid or play on until a human must act.
    pub fn place_bid(&self, player: PlayerId, amount: u8) -> Result<Vec<GameTransition>, GameError> {
        debug!(player, amount, "Submitting bid");
        self.mutate("place_bid", Some(player), |state| {
            place_bid(state, player, amount).map(|_| ())
        })
    }

    pub fn play_card(&self, player: PlayerId, card: Card) -> Result<Vec<GameTransition>, GameError> {
        debug!(player, %card, "Submitting play");
        self.mutate("play_card", Some(player), |state| {
            play_card(state, player, card).map(|_| ())
        })
    }

    /// Deal the next round when automatic advancing is off.
    pub fn advance_round(&self) -> Result<Vec<GameTransition>, GameError> {
        self.mutate("advance_round", None, advance_round)
    }

    /// Clear the error slot. Clearing an empty slot notifies nobody.
    pub fn clear_error(&self) {
        self.errors.update_if(|err| err.take().is_some());
    }
}
