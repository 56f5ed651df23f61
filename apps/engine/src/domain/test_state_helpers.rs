//! Test-only game state builders for domain unit tests.

use time::macros::datetime;

use crate::domain::bidding::place_bid;
use crate::domain::roster::Roster;
use crate::domain::round_lifecycle::start_game;
use crate::domain::rules::{GameMode, GameSettings, PLAYERS, TEAMS};
use crate::domain::state::{
    team_for_player, Contract, GameState, Phase, PlayerId, Round, Trick,
};
use crate::domain::tricks::{legal_moves, play_card};
use crate::domain::{Card, Trump};

/// A freshly dealt round with no bids.
pub fn empty_round(round_no: u32, starting_player: PlayerId) -> Round {
    Round {
        round_no,
        starting_player,
        trump: None,
        bids: Vec::new(),
        contract: None,
        tricks_won: [0; TEAMS],
        trick: Trick::new(starting_player),
        completed: Vec::new(),
    }
}

/// Four human seats, round 1 dealt from `seed`.
pub fn new_game(mode: GameMode, seed: u64) -> GameState {
    new_game_with(GameSettings::for_mode(mode), seed)
}

pub fn new_game_with(settings: GameSettings, seed: u64) -> GameState {
    let rosters = [
        Roster::parse("North/South").expect("valid roster"),
        Roster::parse("East/West").expect("valid roster"),
    ];
    start_game(settings, rosters, false, seed, datetime!(2026-01-01 12:00 UTC))
        .expect("game starts")
}

/// Replace every hand; each hand is sorted like a real deal.
pub fn set_hands(state: &mut GameState, hands: [Vec<Card>; PLAYERS]) {
    for (player, mut hand) in state.players.iter_mut().zip(hands) {
        hand.sort();
        player.hand = hand;
    }
}

/// Jump straight into trick play with a fixed contract and trump.
pub fn playing_state(
    hands: [Vec<Card>; PLAYERS],
    declarer: PlayerId,
    amount: u8,
    trump: Trump,
) -> GameState {
    let mut state = new_game(GameMode::Classic, 1);
    set_hands(&mut state, hands);
    state.round.trump = Some(trump);
    state.round.contract = Some(Contract {
        declarer,
        team: team_for_player(declarer),
        amount,
    });
    state.round.trick = Trick::new(declarer);
    state.phase = Phase::Playing;
    state.turn = Some(declarer);
    state
}

/// Everyone bids the lowest legal amount, in turn order.
pub fn bid_minimum(state: &mut GameState) {
    while state.phase == Phase::Bidding {
        let who = state.turn.expect("someone is to bid");
        let amount = crate::domain::bidding::legal_bids(state, who)[0];
        place_bid(state, who, amount).expect("legal bid accepted");
    }
}

/// Play the first legal card until the round is over.
pub fn play_out_round(state: &mut GameState) {
    while state.phase == Phase::Playing {
        let who = state.turn.expect("someone is to play");
        let card = legal_moves(state, who)[0];
        play_card(state, who, card).expect("legal card accepted");
    }
}
