mod play;

pub use play::{PlayPlanner, PlayReason, can_win_trick};

use crate::policy::{HeuristicPolicy, Policy};
use std::str::FromStr;
use std::sync::OnceLock;
use thiserror::Error;

const DIFFICULTY_VAR: &str = "WHIST_BOT_DIFFICULTY";
const DETAILS_VAR: &str = "WHIST_DECISION_DETAILS";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum BotDifficulty {
    /// Lowest legal card, no lookahead.
    Easy,
    #[default]
    Simple,
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown bot difficulty '{0}'")]
pub struct ParseDifficultyError(String);

impl FromStr for BotDifficulty {
    type Err = ParseDifficultyError;

    fn from_str(raw: &str) -> Result<Self, Self::Err> {
        match raw.trim().to_ascii_lowercase().as_str() {
            "easy" | "legacy" => Ok(BotDifficulty::Easy),
            "simple" | "normal" | "default" => Ok(BotDifficulty::Simple),
            _ => Err(ParseDifficultyError(raw.to_string())),
        }
    }
}

impl BotDifficulty {
    /// Reads `WHIST_BOT_DIFFICULTY` once per process.
    pub fn from_env() -> Self {
        static CACHED: OnceLock<BotDifficulty> = OnceLock::new();
        *CACHED.get_or_init(|| Self::from_reader(|key| std::env::var(key).ok()))
    }

    fn from_reader<F>(mut read: F) -> Self
    where
        F: FnMut(&str) -> Option<String>,
    {
        read(DIFFICULTY_VAR)
            .and_then(|raw| raw.parse::<BotDifficulty>().ok())
            .unwrap_or_default()
    }

    /// Boxed policy playing at this difficulty.
    pub fn policy(self) -> Box<dyn Policy> {
        Box::new(HeuristicPolicy::new(self))
    }

    pub const fn as_str(self) -> &'static str {
        match self {
            BotDifficulty::Easy => "easy",
            BotDifficulty::Simple => "simple",
        }
    }
}

/// Bot settings read from the environment.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct BotConfig {
    pub difficulty: BotDifficulty,
    /// Log every decision with the legal cards considered.
    pub decision_details: bool,
}

impl BotConfig {
    pub fn from_env() -> Self {
        Self {
            difficulty: BotDifficulty::from_env(),
            decision_details: details_enabled(std::env::var(DETAILS_VAR).ok()),
        }
    }

    fn from_reader<F>(mut read: F) -> Self
    where
        F: FnMut(&str) -> Option<String>,
    {
        Self {
            difficulty: BotDifficulty::from_reader(&mut read),
            decision_details: details_enabled(read(DETAILS_VAR)),
        }
    }
}

fn details_enabled(raw: Option<String>) -> bool {
    raw.is_some_and(|raw| matches!(raw.trim(), "1" | "true" | "TRUE" | "on" | "ON"))
}
