//! Property tests for trick resolution and whole-round card accounting.

use proptest::prelude::*;

use crate::domain::rules::HAND_SIZE;
use crate::domain::state::{Phase, Play};
use crate::domain::test_state_helpers::{bid_minimum, new_game};
use crate::domain::tricks::{legal_moves, play_card, trick_winner};
use crate::domain::{card_beats, test_gens, test_prelude};

proptest! {
    #![proptest_config(test_prelude::proptest_config())]

    /// The winning card is beaten by no other card in the trick.
    #[test]
    fn prop_trick_winner_is_unbeaten(
        cards in test_gens::trick_cards(),
        trump in test_gens::trump(),
        leader in 0u8..4,
    ) {
        let plays: Vec<Play> = cards
            .iter()
            .enumerate()
            .map(|(i, &card)| Play { player: (leader + i as u8) % 4, card })
            .collect();
        let lead = plays[0].card.suit;
        let winner = trick_winner(&plays, trump).expect("full trick has a winner");
        let winning = plays.iter().find(|p| p.player == winner).expect("winner played").card;

        for play in &plays {
            prop_assert!(!card_beats(play.card, winning, lead, trump));
        }
        if trump.suit().is_some_and(|s| cards.iter().any(|c| c.suit == s)) {
            prop_assert!(trump.is_trump(winning));
        } else {
            prop_assert_eq!(winning.suit, lead);
        }
    }

    /// A full round exhausts every hand in 13 tricks without losing or
    /// duplicating a card.
    #[test]
    fn prop_full_round_card_accounting(
        mode in test_gens::mode(),
        seed in any::<u64>(),
    ) {
        let mut state = new_game(mode, seed);
        bid_minimum(&mut state);
        prop_assert!(state.deck_is_intact());

        while state.phase == Phase::Playing {
            let who = state.turn.expect("someone is to play");
            let card = legal_moves(&state, who)[0];
            play_card(&mut state, who, card).expect("legal card accepted");
            prop_assert!(state.deck_is_intact());
        }

        prop_assert!(state.players.iter().all(|p| p.hand.is_empty()));
        prop_assert_eq!(state.round.completed.len(), HAND_SIZE as usize);
        prop_assert_eq!(state.round.tricks_won.iter().sum::<u8>(), HAND_SIZE);
        prop_assert_eq!(state.tricks_played, u32::from(HAND_SIZE));
        prop_assert_eq!(state.history.len(), 1);
        prop_assert!(matches!(state.phase, Phase::RoundScoring | Phase::GameOver));
    }
}
