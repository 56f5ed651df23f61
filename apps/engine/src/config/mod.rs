//! Engine configuration: defaults, environment overrides and validation.

use std::env;
use std::str::FromStr;

use crate::domain::rules::{GameMode, GameSettings};
use crate::errors::GameError;

/// Automated steps (AI actions and round deals) one call may run; an all-AI
/// game to the default target finishes far below it.
pub const DEFAULT_AI_STEP_LIMIT: usize = 100_000;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EngineConfig {
    pub mode: GameMode,
    /// Fixed game seed; `None` draws a fresh one per game.
    pub seed: Option<u64>,
    /// Overrides the mode's target score.
    pub target_score: Option<i32>,
    pub max_rounds: Option<u32>,
    /// Deal the next round as soon as one is scored.
    pub auto_advance_rounds: bool,
    /// Fill short rosters with AI seats.
    pub ai_fill: bool,
    /// A call whose AI follow-up needs more steps than this is rolled back.
    pub ai_step_limit: usize,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            mode: GameMode::Classic,
            seed: None,
            target_score: None,
            max_rounds: None,
            auto_advance_rounds: true,
            ai_fill: true,
            ai_step_limit: DEFAULT_AI_STEP_LIMIT,
        }
    }
}

impl EngineConfig {
    /// Defaults overridden by `TRICKS_*` environment variables.
    pub fn from_env() -> Result<Self, GameError> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Same as [`from_env`](Self::from_env) over any key lookup.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, GameError> {
        let mut config = Self::default();
        if let Some(mode) = lookup("TRICKS_MODE") {
            config.mode = mode.parse()?;
        }
        if let Some(seed) = lookup("TRICKS_SEED") {
            config.seed = Some(parse_var("TRICKS_SEED", &seed)?);
        }
        if let Some(target) = lookup("TRICKS_TARGET_SCORE") {
            config.target_score = Some(parse_var("TRICKS_TARGET_SCORE", &target)?);
        }
        if let Some(rounds) = lookup("TRICKS_MAX_ROUNDS") {
            config.max_rounds = Some(parse_var("TRICKS_MAX_ROUNDS", &rounds)?);
        }
        if let Some(flag) = lookup("TRICKS_AUTO_ADVANCE") {
            config.auto_advance_rounds = parse_flag("TRICKS_AUTO_ADVANCE", &flag)?;
        }
        if let Some(flag) = lookup("TRICKS_AI_FILL") {
            config.ai_fill = parse_flag("TRICKS_AI_FILL", &flag)?;
        }
        if let Some(limit) = lookup("TRICKS_AI_STEP_LIMIT") {
            config.ai_step_limit = parse_var("TRICKS_AI_STEP_LIMIT", &limit)?;
        }
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<(), GameError> {
        if let Some(target) = self.target_score {
            if target <= 0 {
                return Err(GameError::invalid_configuration(format!(
                    "target score must be positive, got {target}"
                )));
            }
        }
        if self.max_rounds == Some(0) {
            return Err(GameError::invalid_configuration(
                "round cap must be at least 1",
            ));
        }
        if self.ai_step_limit == 0 {
            return Err(GameError::invalid_configuration(
                "AI step limit must be at least 1",
            ));
        }
        Ok(())
    }

    /// Game settings for a new game under this configuration.
    pub fn settings(&self) -> GameSettings {
        let mut settings = GameSettings::for_mode(self.mode);
        if let Some(target) = self.target_score {
            settings.target_score = target;
        }
        settings.max_rounds = self.max_rounds;
        settings
    }
}

fn parse_var<T: FromStr>(key: &str, raw: &str) -> Result<T, GameError> {
    raw.trim().parse().map_err(|_| {
        GameError::invalid_configuration(format!("{key} has an invalid value: {raw:?}"))
    })
}

fn parse_flag(key: &str, raw: &str) -> Result<bool, GameError> {
    match raw.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Ok(true),
        "0" | "false" | "no" | "off" => Ok(false),
        _ => Err(GameError::invalid_configuration(format!(
            "{key} must be a boolean, got {raw:?}"
        ))),
    }
}
