//! Bidding: one bid per player per round, in turn order.

use crate::domain::cards_logic::hand_has_suit;
use crate::domain::rules::{valid_bid_range, TrumpRule, PLAYERS};
use crate::domain::state::{
    next_player, require_player, Bid, Contract, GameState, Phase, PlayerId, Trick,
};
use crate::domain::{Card, Suit, Trump};
use crate::errors::GameError;

/// What happened after a bid was accepted.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BidOutcome {
    /// Bidding continues with `player`.
    Next { player: PlayerId },
    /// Everyone has bid; the contract is fixed and trick play begins.
    Closed(Contract),
}

/// Legal bid amounts for `who`, ascending; empty unless it is their turn to bid.
pub fn legal_bids(state: &GameState, who: PlayerId) -> Vec<u8> {
    if state.phase != Phase::Bidding || state.turn != Some(who) {
        return Vec::new();
    }
    if state.round.bid_of(who).is_some() {
        return Vec::new();
    }
    current_range(state).collect()
}

fn current_range(state: &GameState) -> std::ops::RangeInclusive<u8> {
    valid_bid_range(
        &state.rules,
        state.hand_size(),
        state.round.highest_bid().map(|b| b.amount),
    )
}

/// Place a bid for `who`, enforcing phase, turn order and the legal range.
///
/// Validation happens before any mutation; a rejected bid leaves `state` untouched.
pub fn place_bid(state: &mut GameState, who: PlayerId, amount: u8) -> Result<BidOutcome, GameError> {
    match state.phase {
        Phase::Bidding => {}
        Phase::NotStarted => return Err(GameError::GameNotStarted),
        Phase::GameOver => return Err(GameError::GameAlreadyOver),
        Phase::Playing | Phase::RoundScoring => {
            return Err(GameError::illegal_bid(format!(
                "bidding is closed for round {}",
                state.round.round_no
            )))
        }
    }
    require_player(state, who)?;
    if state.turn != Some(who) {
        return Err(GameError::not_your_turn(who, state.turn));
    }
    if state.round.bid_of(who).is_some() {
        return Err(GameError::illegal_bid(format!(
            "player {who} already bid this round"
        )));
    }
    let range = current_range(state);
    if !range.contains(&amount) {
        return Err(GameError::illegal_bid(format!(
            "bid {amount} is outside {}..={}",
            range.start(),
            range.end()
        )));
    }

    state.round.bids.push(Bid {
        player: who,
        amount,
        round_no: state.round.round_no,
    });

    if state.round.bids.len() < PLAYERS {
        let next = next_player(who);
        state.turn = Some(next);
        return Ok(BidOutcome::Next { player: next });
    }
    close_bidding(state).map(BidOutcome::Closed)
}

/// Fix the contract with the earliest highest bidder and hand the lead to them.
fn close_bidding(state: &mut GameState) -> Result<Contract, GameError> {
    let highest = state
        .round
        .highest_bid()
        .ok_or_else(|| GameError::illegal_bid("bidding closed without bids"))?;
    let declarer = require_player(state, highest.player)?;
    let contract = Contract {
        declarer: declarer.id,
        team: declarer.team,
        amount: highest.amount,
    };

    if state.rules.trump == TrumpRule::DeclarerStrongestSuit {
        let suit = strongest_suit(&declarer.hand).unwrap_or(Suit::Spades);
        state.round.trump = Some(Trump::from(suit));
    }

    state.round.contract = Some(contract);
    state.round.trick = Trick::new(contract.declarer);
    state.phase = Phase::Playing;
    state.turn = Some(contract.declarer);
    Ok(contract)
}

/// Longest suit in `hand`; ties go to the higher rank total, then the higher suit.
pub fn strongest_suit(hand: &[Card]) -> Option<Suit> {
    Suit::ALL
        .into_iter()
        .filter(|&suit| hand_has_suit(hand, suit))
        .max_by_key(|&suit| {
            let (count, rank_sum) = hand
                .iter()
                .filter(|c| c.suit == suit)
                .fold((0u8, 0u32), |(n, sum), c| (n + 1, sum + c.rank.value() as u32));
            (count, rank_sum, suit)
        })
}
