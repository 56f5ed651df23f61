//! Team roster strings: `"Alice/Charlie(AI)"`.
//!
//! Seats are separated by `/`; a trailing `(AI)` (any case) marks a seat the
//! engine plays itself. Missing seats can be filled with AI players.

use crate::domain::rules::PLAYERS_PER_TEAM;
use crate::domain::state::{PlayerKind, TeamId};
use crate::errors::GameError;

const AI_MARKER: &str = "(ai)";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Seat {
    pub name: String,
    pub kind: PlayerKind,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Roster {
    pub seats: Vec<Seat>,
}

impl Roster {
    pub fn parse(line: &str) -> Result<Self, GameError> {
        let line = line.trim();
        if line.is_empty() {
            return Ok(Self { seats: Vec::new() });
        }

        let seats = line
            .split('/')
            .map(parse_seat)
            .collect::<Result<Vec<_>, _>>()?;

        if seats.len() > PLAYERS_PER_TEAM {
            return Err(GameError::invalid_configuration(format!(
                "a team has at most {PLAYERS_PER_TEAM} players, got {} in {line:?}",
                seats.len()
            )));
        }
        Ok(Self { seats })
    }

    /// Display name for the team: its seat names joined with " & ".
    pub fn team_name(&self, team: TeamId) -> String {
        if self.seats.is_empty() {
            return format!("Team {}", team + 1);
        }
        self.seats
            .iter()
            .map(|s| s.name.as_str())
            .collect::<Vec<_>>()
            .join(" & ")
    }

    /// Complete the roster to a full team, naming filled seats after their player id.
    pub fn filled(mut self, team: TeamId, ai_fill: bool) -> Result<Vec<Seat>, GameError> {
        if self.seats.len() < PLAYERS_PER_TEAM && !ai_fill {
            return Err(GameError::invalid_configuration(format!(
                "team {} needs {PLAYERS_PER_TEAM} players, got {}",
                team + 1,
                self.seats.len()
            )));
        }
        while self.seats.len() < PLAYERS_PER_TEAM {
            let player_id = team as usize * PLAYERS_PER_TEAM + self.seats.len();
            self.seats.push(Seat {
                name: format!("Bot {}", player_id + 1),
                kind: PlayerKind::Ai,
            });
        }
        Ok(self.seats)
    }
}

fn parse_seat(raw: &str) -> Result<Seat, GameError> {
    let raw = raw.trim();
    let lower = raw.to_ascii_lowercase();
    let (name, kind) = match lower.strip_suffix(AI_MARKER) {
        Some(rest) => (raw[..rest.len()].trim(), PlayerKind::Ai),
        None => (raw, PlayerKind::Human),
    };
    if name.is_empty() {
        return Err(GameError::invalid_configuration(format!(
            "player name must not be blank (seat {raw:?})"
        )));
    }
    Ok(Seat {
        name: name.to_string(),
        kind,
    })
}
