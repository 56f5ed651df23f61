//! Property tests for bid and card legality.

use std::collections::HashSet;

use proptest::prelude::*;

use crate::domain::bidding::{legal_bids, place_bid};
use crate::domain::state::Phase;
use crate::domain::test_state_helpers::{bid_minimum, new_game};
use crate::domain::tricks::{legal_moves, legal_moves_for_hand, play_card};
use crate::domain::{test_gens, test_prelude, Card};
use crate::errors::ErrorKind;

proptest! {
    #![proptest_config(test_prelude::proptest_config())]

    /// Legal plays are a sorted, duplicate-free subset of the hand that
    /// follows the lead whenever the hand can.
    #[test]
    fn prop_follow_suit_legality(
        hands in test_gens::deal(),
        seat in 0usize..4,
        lead in proptest::option::of(test_gens::suit()),
    ) {
        let hand = &hands[seat];
        let legal = legal_moves_for_hand(hand, lead);

        let unique: HashSet<Card> = legal.iter().copied().collect();
        prop_assert_eq!(unique.len(), legal.len());
        prop_assert!(legal.windows(2).all(|w| w[0] < w[1]));
        prop_assert!(legal.iter().all(|c| hand.contains(c)));

        match lead {
            Some(suit) if hand.iter().any(|c| c.suit == suit) => {
                let in_suit = hand.iter().filter(|c| c.suit == suit).count();
                prop_assert!(legal.iter().all(|c| c.suit == suit));
                prop_assert_eq!(legal.len(), in_suit);
            }
            _ => prop_assert_eq!(legal.len(), hand.len()),
        }
    }

    /// Every offered bid is accepted and becomes the next bidder's floor.
    #[test]
    fn prop_offered_bids_are_accepted(
        mode in test_gens::mode(),
        seed in any::<u64>(),
        picks in proptest::collection::vec(any::<prop::sample::Index>(), 4),
    ) {
        let mut state = new_game(mode, seed);
        for pick in picks {
            let who = state.turn.expect("a bidder is to act");
            let offered = legal_bids(&state, who);
            prop_assert!(!offered.is_empty());
            let amount = offered[pick.index(offered.len())];
            place_bid(&mut state, who, amount).expect("offered bid accepted");

            if state.phase == Phase::Bidding {
                let next = state.turn.expect("next bidder");
                let next_offer = legal_bids(&state, next);
                prop_assert_eq!(next_offer.first().copied(), Some(amount.max(state.rules.min_bid)));
            }
        }
        prop_assert_eq!(state.phase, Phase::Playing);
    }

    /// A card outside the legal set is rejected and nothing changes.
    #[test]
    fn prop_illegal_cards_leave_state_unchanged(
        seed in any::<u64>(),
        pick in any::<prop::sample::Index>(),
    ) {
        let mut state = new_game(crate::domain::rules::GameMode::Classic, seed);
        bid_minimum(&mut state);

        // Lead once so the second player has a suit to follow.
        let leader = state.turn.expect("declarer leads");
        let lead_card = legal_moves(&state, leader)[0];
        play_card(&mut state, leader, lead_card).expect("lead accepted");

        let who = state.turn.expect("follower");
        let legal = legal_moves(&state, who);
        let illegal: Vec<Card> = state.players[who as usize]
            .hand
            .iter()
            .copied()
            .filter(|c| !legal.contains(c))
            .collect();
        prop_assume!(!illegal.is_empty());

        let card = illegal[pick.index(illegal.len())];
        let hand_before = state.players[who as usize].hand.clone();
        let plays_before = state.round.trick.plays.clone();
        let err = play_card(&mut state, who, card).unwrap_err();
        prop_assert_eq!(err.kind(), ErrorKind::IllegalMove);
        prop_assert_eq!(&state.players[who as usize].hand, &hand_before);
        prop_assert_eq!(&state.round.trick.plays, &plays_before);
        prop_assert_eq!(state.turn, Some(who));
    }
}
