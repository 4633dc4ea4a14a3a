pub mod bot;
pub mod policy;

pub use bot::{BotConfig, BotDifficulty, PlayPlanner, PlayReason, can_win_trick};
pub use policy::{HeuristicPolicy, Policy, PolicyContext, PolicyError};
