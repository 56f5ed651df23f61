use crate::domain::round_lifecycle::complete_round;
use crate::domain::state::{
    next_player, require_player, CompletedTrick, GameState, Phase, Play, PlayerId, Trick,
};
use crate::domain::{card_beats, hand_has_suit, Card, Suit, Trump};
use crate::errors::GameError;

/// Result of playing a card, describing what state changes occurred.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PlayCardResult {
    /// The trick this card completed, if any.
    pub trick_completed: Option<CompletedTrick>,
    /// Whether this card emptied the last hand and ended the round.
    pub round_completed: bool,
}

/// Follow-suit filter over a bare hand, sorted.
pub fn legal_moves_for_hand(hand: &[Card], lead: Option<Suit>) -> Vec<Card> {
    let mut legal: Vec<Card> = match lead {
        Some(lead) if hand_has_suit(hand, lead) => {
            hand.iter().copied().filter(|c| c.suit == lead).collect()
        }
        _ => hand.to_vec(),
    };
    legal.sort();
    legal
}

/// Legal cards for `who`; empty unless it is their turn in trick play.
pub fn legal_moves(state: &GameState, who: PlayerId) -> Vec<Card> {
    if state.phase != Phase::Playing || state.turn != Some(who) {
        return Vec::new();
    }
    let Some(player) = state.player(who) else {
        return Vec::new();
    };
    legal_moves_for_hand(&player.hand, state.round.trick.lead())
}

/// Play a card into the current trick, enforcing phase, turn and suit-following.
pub fn play_card(
    state: &mut GameState,
    who: PlayerId,
    card: Card,
) -> Result<PlayCardResult, GameError> {
    match state.phase {
        Phase::Playing => {}
        Phase::NotStarted => return Err(GameError::GameNotStarted),
        Phase::GameOver => return Err(GameError::GameAlreadyOver),
        Phase::Bidding | Phase::RoundScoring => {
            return Err(GameError::illegal_move(format!(
                "cards cannot be played during {:?}",
                state.phase
            )))
        }
    }
    let hand = &require_player(state, who)?.hand;
    if state.turn != Some(who) {
        return Err(GameError::not_your_turn(who, state.turn));
    }
    let Some(pos) = hand.iter().position(|&c| c == card) else {
        return Err(GameError::illegal_move(format!(
            "{card} is not in player {who}'s hand"
        )));
    };
    if let Some(lead) = state.round.trick.lead() {
        if card.suit != lead && hand_has_suit(hand, lead) {
            return Err(GameError::illegal_move(format!(
                "player {who} must follow {lead:?}"
            )));
        }
    }

    let removed = state.players[who as usize].hand.remove(pos);
    state.round.trick.plays.push(Play {
        player: who,
        card: removed,
    });
    state.turn = Some(next_player(who));

    if !state.round.trick.is_complete() {
        return Ok(PlayCardResult {
            trick_completed: None,
            round_completed: false,
        });
    }

    let completed = resolve_current_trick(state)?;
    let round_completed = state.players.iter().all(|p| p.hand.is_empty());
    if round_completed {
        complete_round(state)?;
    }

    Ok(PlayCardResult {
        trick_completed: Some(completed),
        round_completed,
    })
}

/// Award the full trick, archive it and let the winner lead the next one.
fn resolve_current_trick(state: &mut GameState) -> Result<CompletedTrick, GameError> {
    let winner = trick_winner(&state.round.trick.plays, state.trump_or_none())
        .ok_or_else(|| GameError::illegal_move("cannot resolve an empty trick"))?;
    let team = require_player(state, winner)?.team;
    state.round.tricks_won[team as usize] += 1;

    let completed = CompletedTrick {
        trick_no: state.round.completed.len() as u8 + 1,
        round_no: state.round.round_no,
        plays: std::mem::take(&mut state.round.trick.plays),
        winner,
    };
    state.round.completed.push(completed.clone());
    state.last_trick = Some(completed.clone());
    state.tricks_played += 1;

    state.round.trick = Trick::new(winner);
    state.turn = Some(winner);
    Ok(completed)
}

/// Winner of a set of plays: highest trump if any, else highest of the led suit.
pub fn trick_winner(plays: &[Play], trump: Trump) -> Option<PlayerId> {
    let first = plays.first()?;
    let lead = first.card.suit;
    let best = plays[1..].iter().fold(first, |best, play| {
        if card_beats(play.card, best.card, lead, trump) {
            play
        } else {
            best
        }
    });
    Some(best.player)
}
