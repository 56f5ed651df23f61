use crate::domain::cards_parsing::try_parse_cards;
use crate::domain::round_lifecycle::advance_round;
use crate::domain::rules::{GameMode, GameSettings};
use crate::domain::scoring::{apply_round_scoring, game_winner, score_round};
use crate::domain::state::{Contract, Phase, RoundResult};
use crate::domain::test_state_helpers::{
    bid_minimum, new_game, new_game_with, play_out_round, playing_state,
};
use crate::domain::Trump;

fn contract(team: u8, amount: u8) -> Contract {
    Contract {
        declarer: team * 2,
        team,
        amount,
    }
}

#[test]
fn classic_made_and_set() {
    let rules = GameMode::Classic.rules();
    assert_eq!(score_round(&rules, &contract(0, 5), [7, 6]), ([7, 0], true));
    assert_eq!(score_round(&rules, &contract(0, 5), [5, 8]), ([5, 0], true));
    assert_eq!(score_round(&rules, &contract(1, 6), [9, 4]), ([9, -6], false));
    assert_eq!(score_round(&rules, &contract(1, 4), [0, 13]), ([0, 16], true));
}

#[test]
fn spades_scores_in_tens() {
    let rules = GameMode::Spades.rules();
    assert_eq!(score_round(&rules, &contract(0, 4), [6, 7]), ([60, 0], true));
    assert_eq!(score_round(&rules, &contract(0, 8), [6, 7]), ([-80, 70], false));
    assert_eq!(score_round(&rules, &contract(0, 13), [13, 0]), ([180, 0], true));
}

#[test]
fn apply_round_scoring_adds_to_team_totals() {
    let mut state = new_game(GameMode::Classic, 9);
    state.teams[0].score = 10;
    state.round.contract = Some(contract(0, 4));
    state.round.trump = Some(Trump::Hearts);
    state.round.tricks_won = [3, 10];
    state.phase = Phase::RoundScoring;

    let result = apply_round_scoring(&mut state).unwrap();
    assert!(!result.made);
    assert_eq!(result.points, [-4, 10]);
    assert_eq!(result.trump, Trump::Hearts);
    assert_eq!(state.scores(), [6, 10]);
    assert_eq!(result.scoring_team(), 1);
}

#[test]
fn apply_round_scoring_requires_scoring_phase() {
    let mut state = new_game(GameMode::Classic, 9);
    assert!(apply_round_scoring(&mut state).is_err());
    assert_eq!(state.scores(), [0, 0]);
}

fn result(team: u8, made: bool) -> RoundResult {
    RoundResult {
        round_no: 1,
        contract: contract(team, 2),
        trump: Trump::NoTrumps,
        bids: Vec::new(),
        tricks_won: [0, 0],
        points: [0, 0],
        made,
    }
}

#[test]
fn game_winner_on_target_cap_and_tie() {
    let mut state = new_game(GameMode::Classic, 9);
    assert_eq!(game_winner(&state), None);

    state.teams[1].score = 31;
    assert_eq!(game_winner(&state), Some(1));

    state.teams[0].score = 33;
    assert_eq!(game_winner(&state), Some(0));

    state.teams[0].score = 31;
    state.history.push(result(0, false));
    assert_eq!(game_winner(&state), Some(1), "tie goes to the last scorer");

    state.teams = new_game(GameMode::Classic, 9).teams;
    state.teams[0].score = -31;
    assert_eq!(game_winner(&state), Some(1), "minus the target loses");

    state.teams = new_game(GameMode::Classic, 9).teams;
    state.settings.max_rounds = Some(2);
    state.total_rounds = 2;
    state.history.push(result(0, true));
    assert_eq!(game_winner(&state), Some(0));
}

#[test]
fn rounds_progress_until_game_over() {
    let mut settings = GameSettings::for_mode(GameMode::NoTrumps);
    settings.target_score = 10;
    settings.max_rounds = Some(6);
    let mut state = new_game_with(settings, 42);

    loop {
        bid_minimum(&mut state);
        play_out_round(&mut state);
        if state.phase == Phase::GameOver {
            break;
        }
        assert_eq!(state.phase, Phase::RoundScoring);
        advance_round(&mut state).unwrap();
        assert!(state.deck_is_intact());
    }

    assert!(state.total_rounds <= 6);
    assert_eq!(state.history.len() as u32, state.total_rounds);
    let winner = state.winning_team.expect("winner set at game over");
    let scores = state.scores();
    assert!(scores[winner as usize] >= scores[1 - winner as usize]);
    assert_eq!(state.turn, None);
}

#[test]
fn set_contract_below_minus_target_ends_the_game() {
    let hands = ["2C", "3C", "4C", "5C"].map(|c| try_parse_cards([c]).unwrap());
    // One trick left, so a contract of 2 cannot be made.
    let mut state = playing_state(hands, 0, 2, Trump::NoTrumps);
    state.teams[0].score = -30;
    state.teams[1].score = -25;

    play_out_round(&mut state);

    assert_eq!(state.phase, Phase::GameOver);
    assert_eq!(state.scores(), [-32, -24]);
    assert_eq!(state.winning_team, Some(1));
    assert_eq!(state.total_rounds, 1);
}
