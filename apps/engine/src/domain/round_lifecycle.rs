//! Game creation and round boundaries: dealing, scoring hand-off, advancing.

use time::OffsetDateTime;
use uuid::Uuid;

use crate::domain::dealing::deal_hands;
use crate::domain::roster::Roster;
use crate::domain::rules::{starting_player_for_round, GameSettings, TrumpRule, PLAYERS, TEAMS};
use crate::domain::scoring::{apply_round_scoring, game_winner};
use crate::domain::seed_derivation::derive_dealing_seed;
use crate::domain::state::{GameState, Phase, Player, Round, Team, TeamId, Trick};
use crate::domain::Trump;
use crate::errors::GameError;

/// Build a new game from two rosters and deal round 1.
pub fn start_game(
    settings: GameSettings,
    rosters: [Roster; TEAMS],
    ai_fill: bool,
    seed: u64,
    now: OffsetDateTime,
) -> Result<GameState, GameError> {
    validate_settings(&settings)?;

    let mut players = Vec::with_capacity(PLAYERS);
    let mut teams = Vec::with_capacity(TEAMS);
    for (team_idx, roster) in rosters.into_iter().enumerate() {
        let team_id = team_idx as TeamId;
        let name = roster.team_name(team_id);
        let seats = roster.filled(team_id, ai_fill)?;
        let first = players.len() as u8;
        for seat in seats {
            players.push(Player {
                id: players.len() as u8,
                name: seat.name,
                team: team_id,
                kind: seat.kind,
                hand: Vec::new(),
            });
        }
        teams.push(Team {
            id: team_id,
            name,
            players: [first, first + 1],
            score: 0,
        });
    }

    for (i, a) in players.iter().enumerate() {
        if players[i + 1..]
            .iter()
            .any(|b| b.name.eq_ignore_ascii_case(&a.name))
        {
            return Err(GameError::invalid_configuration(format!(
                "duplicate player name {:?}",
                a.name
            )));
        }
    }

    let teams: [Team; TEAMS] = teams
        .try_into()
        .map_err(|_| GameError::invalid_configuration("exactly two teams are required"))?;

    let rules = settings.mode.rules();
    let mut state = GameState {
        id: Uuid::new_v4(),
        settings,
        rules,
        seed,
        phase: Phase::NotStarted,
        players,
        teams,
        round: Round {
            round_no: 0,
            starting_player: 0,
            trump: None,
            bids: Vec::new(),
            contract: None,
            tricks_won: [0; TEAMS],
            trick: Trick::new(0),
            completed: Vec::new(),
        },
        turn: None,
        history: Vec::new(),
        total_rounds: 0,
        winning_team: None,
        started_at: now,
        finished_at: None,
        version: 0,
        tricks_played: 0,
        last_trick: None,
    };
    deal_round(&mut state, 1)?;
    Ok(state)
}

fn validate_settings(settings: &GameSettings) -> Result<(), GameError> {
    if settings.target_score <= 0 {
        return Err(GameError::invalid_configuration(format!(
            "target score must be positive, got {}",
            settings.target_score
        )));
    }
    if settings.max_rounds == Some(0) {
        return Err(GameError::invalid_configuration(
            "round cap must be at least 1",
        ));
    }
    Ok(())
}

/// Deal `round_no` and open its bidding.
pub(crate) fn deal_round(state: &mut GameState, round_no: u32) -> Result<(), GameError> {
    let deal = deal_hands(state.players.len(), derive_dealing_seed(state.seed, round_no))?;
    for (player, hand) in state.players.iter_mut().zip(deal.hands) {
        player.hand = hand;
    }

    let starting_player = starting_player_for_round(round_no);
    let trump = match state.rules.trump {
        TrumpRule::DeclarerStrongestSuit => None,
        TrumpRule::Fixed(suit) => Some(Trump::from(suit)),
        TrumpRule::NoTrumps => Some(Trump::NoTrumps),
    };

    state.round = Round {
        round_no,
        starting_player,
        trump,
        bids: Vec::with_capacity(PLAYERS),
        contract: None,
        tricks_won: [0; TEAMS],
        trick: Trick::new(starting_player),
        completed: Vec::new(),
    };
    state.phase = Phase::Bidding;
    state.turn = Some(starting_player);
    Ok(())
}

/// Called once the last trick of a round resolves.
pub(crate) fn complete_round(state: &mut GameState) -> Result<(), GameError> {
    state.phase = Phase::RoundScoring;
    state.turn = None;

    let result = apply_round_scoring(state)?;
    state.total_rounds += 1;
    state.history.push(result);

    if let Some(winner) = game_winner(state) {
        state.winning_team = Some(winner);
        state.phase = Phase::GameOver;
    }
    Ok(())
}

/// Deal the next round after scoring: `RoundScoring -> Bidding`.
pub fn advance_round(state: &mut GameState) -> Result<(), GameError> {
    match state.phase {
        Phase::RoundScoring => {}
        Phase::GameOver => return Err(GameError::GameAlreadyOver),
        Phase::NotStarted => return Err(GameError::GameNotStarted),
        Phase::Bidding | Phase::Playing => {
            return Err(GameError::illegal_move(format!(
                "round {} is still in progress",
                state.round.round_no
            )))
        }
    }
    let next = state.round.round_no + 1;
    deal_round(state, next)
}
