use std::cmp::Ordering;

use crate::domain::rules::{ModeRules, HAND_SIZE, TEAMS};
use crate::domain::state::{other_team, Contract, GameState, Phase, RoundResult, TeamId};
use crate::errors::GameError;

/// Points each team earns for a round, and whether the contract was made.
pub fn score_round(
    rules: &ModeRules,
    contract: &Contract,
    tricks_won: [u8; TEAMS],
) -> ([i32; TEAMS], bool) {
    let table = &rules.scoring;
    let declarers = contract.team as usize;
    let defenders = other_team(contract.team) as usize;
    let taken = tricks_won[declarers];

    let mut points = [0; TEAMS];
    let made = taken >= contract.amount;
    if made {
        points[declarers] = i32::from(taken) * table.made_per_trick;
        if taken == HAND_SIZE {
            points[declarers] += table.sweep_bonus;
        }
    } else {
        points[declarers] = -i32::from(contract.amount) * table.set_penalty_per_bid;
        points[defenders] = i32::from(tricks_won[defenders]) * table.defender_per_trick;
    }
    (points, made)
}

/// Score the finished round into the team totals.
pub fn apply_round_scoring(state: &mut GameState) -> Result<RoundResult, GameError> {
    if state.phase != Phase::RoundScoring {
        return Err(GameError::illegal_move(format!(
            "round {} is not ready for scoring",
            state.round.round_no
        )));
    }
    let contract = state
        .round
        .contract
        .ok_or_else(|| GameError::illegal_move("round finished without a contract"))?;

    let (points, made) = score_round(&state.rules, &contract, state.round.tricks_won);
    for team in &mut state.teams {
        team.score += points[team.id as usize];
    }

    Ok(RoundResult {
        round_no: state.round.round_no,
        contract,
        trump: state.trump_or_none(),
        bids: state.round.bids.clone(),
        tricks_won: state.round.tricks_won,
        points,
        made,
    })
}

/// Winning team once the game is decided.
///
/// The game ends when a team reaches the target score, when a team falls to
/// minus the target score or below, or at the round cap. Higher score wins;
/// a tie goes to the team that scored in the last round.
pub fn game_winner(state: &GameState) -> Option<TeamId> {
    let scores = state.scores();
    let target = state.settings.target_score;
    let reached_target = scores.iter().any(|&s| s >= target);
    let hit_floor = scores.iter().any(|&s| s <= -target);
    let reached_cap = state
        .settings
        .max_rounds
        .is_some_and(|cap| state.total_rounds >= cap);
    if !reached_target && !hit_floor && !reached_cap {
        return None;
    }

    Some(match scores[0].cmp(&scores[1]) {
        Ordering::Greater => 0,
        Ordering::Less => 1,
        Ordering::Equal => state.history.last().map_or(0, RoundResult::scoring_team),
    })
}
