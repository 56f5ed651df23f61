//! Edge-triggered events derived by comparing two committed states.

use crate::domain::rules::TEAMS;
use crate::domain::state::{Contract, GameState, PlayerId, TeamId};
use crate::domain::{Card, Trump};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GameTransition {
    /// No state before, a dealt game after.
    GameStarted,
    /// A new round number was dealt.
    RoundDealt { round_no: u32, starting_player: PlayerId },
    BidPlaced { player_id: PlayerId, amount: u8 },
    /// The contract appeared.
    BiddingClosed { contract: Contract, trump: Trump },
    CardPlayed { player_id: PlayerId, card: Card },
    TrickCompleted { trick_no: u8, winner: PlayerId },
    RoundScored { round_no: u32, points: [i32; TEAMS], made: bool },
    /// Edge-triggered: the turn became a specific player.
    TurnBecame { player_id: PlayerId },
    /// Edge-triggered: phase moved to GameOver.
    GameEnded { winning_team: TeamId },
}

fn round_plays(state: &GameState) -> impl Iterator<Item = (PlayerId, Card)> + '_ {
    state
        .round
        .completed
        .iter()
        .flat_map(|t| t.plays.iter())
        .chain(state.round.trick.plays.iter())
        .map(|p| (p.player, p.card))
}

/// Derive domain transitions from before/after states.
///
/// Expects `after` to be at most one player action away from `before`, or a
/// round boundary; per-round lists are compared positionally.
pub fn derive_game_transitions(before: Option<&GameState>, after: &GameState) -> Vec<GameTransition> {
    let mut transitions = Vec::new();

    let same_round = before.filter(|b| b.round.round_no == after.round.round_no);
    if before.is_none() {
        transitions.push(GameTransition::GameStarted);
    }
    if same_round.is_none() && after.round.round_no > 0 {
        transitions.push(GameTransition::RoundDealt {
            round_no: after.round.round_no,
            starting_player: after.round.starting_player,
        });
    }

    let (bids_before, plays_before, tricks_before, contract_before) = match same_round {
        Some(b) => (
            b.round.bids.len(),
            round_plays(b).count(),
            b.round.completed.len(),
            b.round.contract.is_some(),
        ),
        None => (0, 0, 0, false),
    };

    for bid in after.round.bids.iter().skip(bids_before) {
        transitions.push(GameTransition::BidPlaced {
            player_id: bid.player,
            amount: bid.amount,
        });
    }
    if let (false, Some(contract)) = (contract_before, after.round.contract) {
        transitions.push(GameTransition::BiddingClosed {
            contract,
            trump: after.trump_or_none(),
        });
    }
    for (player_id, card) in round_plays(after).skip(plays_before) {
        transitions.push(GameTransition::CardPlayed { player_id, card });
    }
    for trick in after.round.completed.iter().skip(tricks_before) {
        transitions.push(GameTransition::TrickCompleted {
            trick_no: trick.trick_no,
            winner: trick.winner,
        });
    }

    let history_before = before.map_or(0, |b| b.history.len());
    for result in after.history.iter().skip(history_before) {
        transitions.push(GameTransition::RoundScored {
            round_no: result.round_no,
            points: result.points,
            made: result.made,
        });
    }

    if let (false, Some(winning_team)) = (before.is_some_and(GameState::is_over), after.winning_team) {
        transitions.push(GameTransition::GameEnded { winning_team });
    }

    if let Some(player_id) = after.turn {
        if before.and_then(|b| b.turn) != Some(player_id) {
            transitions.push(GameTransition::TurnBecame { player_id });
        }
    }

    transitions
}
