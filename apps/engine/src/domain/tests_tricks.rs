use crate::domain::cards_parsing::try_parse_cards;
use crate::domain::state::Phase;
use crate::domain::test_state_helpers::playing_state;
use crate::domain::tricks::{legal_moves, play_card};
use crate::domain::{Card, Trump};
use crate::errors::{ErrorKind, GameError};

fn cards(tokens: &[&str]) -> Vec<Card> {
    try_parse_cards(tokens.iter().copied()).expect("hardcoded valid card tokens")
}

fn small_hands() -> [Vec<Card>; 4] {
    [
        cards(&["AS", "KH", "2C"]),
        cards(&["TS", "3H", "4C"]),
        cards(&["QS", "5D", "6C"]),
        cards(&["9S", "7H", "8C"]),
    ]
}

#[test]
fn legal_moves_follow_lead() {
    let mut state = playing_state(small_hands(), 0, 2, Trump::Hearts);
    assert_eq!(legal_moves(&state, 0).len(), 3, "leader may play anything");
    assert!(legal_moves(&state, 1).is_empty(), "not player 1's turn");

    play_card(&mut state, 0, "2C".parse().unwrap()).unwrap();
    assert_eq!(legal_moves(&state, 1), cards(&["4C"]));
}

#[test]
fn off_suit_card_rejected_when_holding_lead() {
    let mut state = playing_state(small_hands(), 0, 2, Trump::Hearts);
    play_card(&mut state, 0, "AS".parse().unwrap()).unwrap();

    let before = state.players[1].hand.clone();
    let err = play_card(&mut state, 1, "3H".parse().unwrap()).unwrap_err();
    assert_eq!(err.kind(), ErrorKind::IllegalMove);
    assert_eq!(state.players[1].hand, before);
    assert_eq!(state.round.trick.plays.len(), 1);
    assert_eq!(state.turn, Some(1));
}

#[test]
fn card_not_in_hand_rejected() {
    let mut state = playing_state(small_hands(), 0, 2, Trump::Hearts);
    let err = play_card(&mut state, 0, "AD".parse().unwrap()).unwrap_err();
    assert_eq!(err.kind(), ErrorKind::IllegalMove);
}

#[test]
fn wrong_player_rejected() {
    let mut state = playing_state(small_hands(), 0, 2, Trump::Hearts);
    assert_eq!(
        play_card(&mut state, 3, "9S".parse().unwrap()).unwrap_err(),
        GameError::not_your_turn(3, Some(0))
    );
}

#[test]
fn trump_wins_and_winner_leads_next() {
    let mut state = playing_state(small_hands(), 0, 2, Trump::Hearts);
    play_card(&mut state, 0, "2C".parse().unwrap()).unwrap();
    play_card(&mut state, 1, "4C".parse().unwrap()).unwrap();
    play_card(&mut state, 2, "6C".parse().unwrap()).unwrap();
    let result = play_card(&mut state, 3, "8C".parse().unwrap()).unwrap();

    let trick = result.trick_completed.expect("fourth card completes the trick");
    assert_eq!(trick.winner, 3);
    assert_eq!(trick.trick_no, 1);
    assert!(!result.round_completed);
    assert_eq!(state.round.tricks_won, [0, 1]);
    assert_eq!(state.turn, Some(3));
    assert_eq!(state.round.trick.leader, 3);
    assert!(state.round.trick.plays.is_empty());
    assert_eq!(state.tricks_played, 1);
    assert_eq!(state.last_trick, Some(trick));

    // 3 leads spades; 0 holds the ace.
    play_card(&mut state, 3, "9S".parse().unwrap()).unwrap();
    play_card(&mut state, 0, "AS".parse().unwrap()).unwrap();
    play_card(&mut state, 1, "TS".parse().unwrap()).unwrap();
    play_card(&mut state, 2, "QS".parse().unwrap()).unwrap();
    assert_eq!(state.turn, Some(0));
    assert_eq!(state.round.tricks_won, [1, 1]);

    // Player 2 is void in hearts and discards; the trump lead wins.
    play_card(&mut state, 0, "KH".parse().unwrap()).unwrap();
    play_card(&mut state, 1, "3H".parse().unwrap()).unwrap();
    play_card(&mut state, 2, "5D".parse().unwrap()).unwrap();
    let last = play_card(&mut state, 3, "7H".parse().unwrap()).unwrap();
    assert!(last.round_completed);
    assert_eq!(state.round.tricks_won, [2, 1]);
    assert_eq!(state.round.completed.len(), 3);
    assert_ne!(state.phase, Phase::Playing);
}

#[test]
fn playing_during_bidding_is_illegal_move() {
    let mut state = playing_state(small_hands(), 0, 2, Trump::Hearts);
    state.phase = Phase::Bidding;
    let err = play_card(&mut state, 0, "AS".parse().unwrap()).unwrap_err();
    assert_eq!(err.kind(), ErrorKind::IllegalMove);
    assert!(legal_moves(&state, 0).is_empty());
}
