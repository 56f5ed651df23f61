//! Domain layer: pure game logic types and helpers.

pub mod actions;
pub mod bidding;
pub mod cards_logic;
pub mod cards_parsing;
pub mod cards_types;
pub mod dealing;
pub mod game_record;
pub mod game_transition;
pub mod player_view;
pub mod roster;
pub mod round_lifecycle;
pub mod rules;
pub mod scoring;
pub mod seed_derivation;
pub mod snapshot;
pub mod state;
pub mod tricks;

#[cfg(test)]
mod test_gens;
#[cfg(test)]
mod test_prelude;
#[cfg(test)]
pub(crate) mod test_state_helpers;
#[cfg(test)]
mod tests_bidding;
#[cfg(test)]
mod tests_props_legality;
#[cfg(test)]
mod tests_props_tricks;
#[cfg(test)]
mod tests_scoring;
#[cfg(test)]
mod tests_tricks;

// Re-exports for ergonomics
pub use actions::{Action, ActionKind};
pub use cards_logic::{card_beats, hand_has_suit};
pub use cards_types::{Card, Rank, Suit, Trump};
pub use dealing::deal_hands;
pub use game_record::GameRecord;
pub use game_transition::{derive_game_transitions, GameTransition};
pub use player_view::PlayerView;
pub use roster::Roster;
pub use rules::{GameMode, GameSettings, ModeRules};
pub use seed_derivation::{derive_dealing_seed, random_game_seed};
pub use snapshot::GameSnapshot;
pub use state::{GameState, Phase, PlayerId, PlayerKind, TeamId};
