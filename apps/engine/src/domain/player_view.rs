//! Player view of game state: what one seat can see at a decision point.

use crate::domain::bidding::legal_bids;
use crate::domain::rules::TEAMS;
use crate::domain::state::{
    partner_of, require_player, Bid, Contract, GameState, Phase, Play, PlayerId, TeamId,
};
use crate::domain::tricks::{legal_moves, trick_winner};
use crate::domain::{Card, Suit, Trump};
use crate::errors::GameError;

/// Information visible to a player at a decision point for the current round.
///
/// This is the interface between the game and AI players: it carries the
/// player's own hand plus everything public (bids, trick, scores) and never
/// another player's cards.
///
/// # For AI Developers
///
/// Use [`legal_bids()`](Self::legal_bids) and [`legal_plays()`](Self::legal_plays)
/// rather than re-deriving the rules; both are empty when it is not this
/// player's turn for that kind of action.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PlayerView {
    pub player: PlayerId,
    pub team: TeamId,
    pub partner: PlayerId,
    pub phase: Phase,
    pub round_no: u32,
    pub turn: Option<PlayerId>,
    /// Sorted.
    pub hand: Vec<Card>,
    pub bids: Vec<Bid>,
    pub highest_bid: Option<Bid>,
    pub contract: Option<Contract>,
    /// `None` until bidding closes in a declarer-chooses mode.
    pub trump: Option<Trump>,
    pub trick_plays: Vec<Play>,
    pub trick_lead: Option<Suit>,
    pub tricks_won: [u8; TEAMS],
    pub scores: [i32; TEAMS],
    legal_bids: Vec<u8>,
    legal_plays: Vec<Card>,
}

impl PlayerView {
    pub fn for_player(state: &GameState, seat: PlayerId) -> Result<Self, GameError> {
        let me = require_player(state, seat)?;
        Ok(Self {
            player: seat,
            team: me.team,
            partner: partner_of(seat),
            phase: state.phase,
            round_no: state.round.round_no,
            turn: state.turn,
            hand: me.hand.clone(),
            bids: state.round.bids.clone(),
            highest_bid: state.round.highest_bid(),
            contract: state.round.contract,
            trump: state.round.trump,
            trick_plays: state.round.trick.plays.clone(),
            trick_lead: state.round.trick.lead(),
            tricks_won: state.round.tricks_won,
            scores: state.scores(),
            legal_bids: legal_bids(state, seat),
            legal_plays: legal_moves(state, seat),
        })
    }

    pub fn legal_bids(&self) -> &[u8] {
        &self.legal_bids
    }

    pub fn legal_plays(&self) -> &[Card] {
        &self.legal_plays
    }

    pub fn is_my_turn(&self) -> bool {
        self.turn == Some(self.player)
    }

    /// Trump for trick play; a round without a chosen trump plays as no-trumps.
    pub fn trump_or_none(&self) -> Trump {
        self.trump.unwrap_or(Trump::NoTrumps)
    }

    pub fn partner_holds_highest(&self) -> bool {
        self.highest_bid.is_some_and(|b| b.player == self.partner)
    }

    /// Who is winning the trick in progress so far.
    pub fn current_winner(&self) -> Option<PlayerId> {
        trick_winner(&self.trick_plays, self.trump_or_none())
    }
}
