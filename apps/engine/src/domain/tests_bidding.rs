use crate::domain::bidding::{legal_bids, place_bid, strongest_suit, BidOutcome};
use crate::domain::cards_parsing::try_parse_cards;
use crate::domain::rules::GameMode;
use crate::domain::state::{Contract, Phase};
use crate::domain::test_state_helpers::{new_game, set_hands};
use crate::domain::{Suit, Trump};
use crate::errors::{ErrorKind, GameError};

#[test]
fn legal_bids_open_at_mode_minimum() {
    let state = new_game(GameMode::Classic, 3);
    assert_eq!(legal_bids(&state, 0), (2..=13).collect::<Vec<u8>>());
    assert!(legal_bids(&state, 1).is_empty(), "not player 1's turn");

    let spades = new_game(GameMode::Spades, 3);
    assert_eq!(legal_bids(&spades, 0).first(), Some(&1));
}

#[test]
fn bids_raise_the_floor_but_matching_is_allowed() {
    let mut state = new_game(GameMode::Classic, 3);
    assert_eq!(
        place_bid(&mut state, 0, 4).unwrap(),
        BidOutcome::Next { player: 1 }
    );
    assert_eq!(legal_bids(&state, 1), (4..=13).collect::<Vec<u8>>());

    let err = place_bid(&mut state, 1, 3).unwrap_err();
    assert_eq!(err.kind(), ErrorKind::IllegalBid);
    assert_eq!(state.round.bids.len(), 1, "rejected bid leaves state alone");
    assert_eq!(state.turn, Some(1));

    place_bid(&mut state, 1, 4).unwrap();
    assert_eq!(state.round.highest_bid().map(|b| b.player), Some(0));
}

#[test]
fn out_of_range_bids_are_rejected() {
    let mut state = new_game(GameMode::Classic, 3);
    for amount in [0, 1, 14, 200] {
        let err = place_bid(&mut state, 0, amount).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::IllegalBid, "amount {amount}");
    }
    assert!(state.round.bids.is_empty());
}

#[test]
fn wrong_player_is_not_your_turn() {
    let mut state = new_game(GameMode::Classic, 3);
    assert_eq!(
        place_bid(&mut state, 2, 5).unwrap_err(),
        GameError::not_your_turn(2, Some(0))
    );
    assert_eq!(
        place_bid(&mut state, 9, 5).unwrap_err().kind(),
        ErrorKind::NotYourTurn
    );
    assert!(state.round.bids.is_empty());
}

#[test]
fn fourth_bid_fixes_contract_with_earliest_highest_bidder() {
    let mut state = new_game(GameMode::Classic, 11);
    for (who, amount) in [(0, 3), (1, 3), (2, 5), (3, 5)] {
        place_bid(&mut state, who, amount).unwrap();
    }

    let contract = Contract {
        declarer: 2,
        team: 1,
        amount: 5,
    };
    assert_eq!(state.round.contract, Some(contract));
    assert_eq!(state.phase, Phase::Playing);
    assert_eq!(state.turn, Some(2));
    assert_eq!(state.round.trick.leader, 2);

    let expected = strongest_suit(&state.players[2].hand).map(Trump::from);
    assert_eq!(state.round.trump, expected);
}

#[test]
fn classic_trump_is_declarers_longest_suit() {
    let mut state = new_game(GameMode::Classic, 1);
    let hands = [
        try_parse_cards(["2C", "3C", "4C", "5C", "6C", "7C", "8C", "9C", "TC", "JC", "QC", "KC", "AC"]).unwrap(),
        try_parse_cards(["2D", "3D", "4D", "5D", "6D", "7D", "8D", "9D", "TD", "JD", "QD", "KD", "AD"]).unwrap(),
        try_parse_cards(["2H", "3H", "4H", "5H", "6H", "7H", "8H", "9H", "TH", "JH", "QH", "KH", "AH"]).unwrap(),
        try_parse_cards(["2S", "3S", "4S", "5S", "6S", "7S", "8S", "9S", "TS", "JS", "QS", "KS", "AS"]).unwrap(),
    ];
    set_hands(&mut state, hands);
    for (who, amount) in [(0, 2), (1, 7), (2, 7), (3, 7)] {
        place_bid(&mut state, who, amount).unwrap();
    }
    assert_eq!(state.round.contract.map(|c| c.declarer), Some(1));
    assert_eq!(state.round.trump, Some(Trump::Diamonds));
}

#[test]
fn fixed_trump_modes_keep_their_trump() {
    for (mode, trump) in [(GameMode::Spades, Trump::Spades), (GameMode::NoTrumps, Trump::NoTrumps)] {
        let mut state = new_game(mode, 5);
        let floor = state.rules.min_bid;
        for who in 0..4 {
            place_bid(&mut state, who, floor).unwrap();
        }
        assert_eq!(state.round.trump, Some(trump), "{mode}");
        assert_eq!(state.round.contract.map(|c| c.declarer), Some(0));
    }
}

#[test]
fn bidding_outside_bidding_phase() {
    let mut state = new_game(GameMode::Classic, 3);
    state.phase = Phase::Playing;
    assert_eq!(place_bid(&mut state, 0, 3).unwrap_err().kind(), ErrorKind::IllegalBid);
    assert!(legal_bids(&state, 0).is_empty());

    state.phase = Phase::GameOver;
    assert_eq!(place_bid(&mut state, 0, 3).unwrap_err(), GameError::GameAlreadyOver);

    state.phase = Phase::NotStarted;
    assert_eq!(place_bid(&mut state, 0, 3).unwrap_err(), GameError::GameNotStarted);
}

#[test]
fn strongest_suit_breaks_full_ties_toward_spades() {
    let hand = try_parse_cards(["AC", "AS"]).unwrap();
    assert_eq!(strongest_suit(&hand), Some(Suit::Spades));
}
