//! Shared CLI value types for the simulator.

use clap::ValueEnum;
use engine::GameMode;

#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum ModeArg {
    Classic,
    Spades,
    NoTrumps,
}

impl From<ModeArg> for GameMode {
    fn from(mode: ModeArg) -> Self {
        match mode {
            ModeArg::Classic => GameMode::Classic,
            ModeArg::Spades => GameMode::Spades,
            ModeArg::NoTrumps => GameMode::NoTrumps,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum AiType {
    Heuristic,
    Random,
}

impl AiType {
    pub fn name(self) -> &'static str {
        match self {
            AiType::Heuristic => "heuristic",
            AiType::Random => "random",
        }
    }
}
