use super::{Policy, PolicyContext, PolicyError};
use crate::bot::{BotConfig, BotDifficulty, PlayPlanner};
use whist_core::model::card::Card;
use tracing::{Level, event};

/// Rule-based bot selected by difficulty.
#[derive(Debug, Clone, Copy)]
pub struct HeuristicPolicy {
    difficulty: BotDifficulty,
    decision_details: bool,
}

impl HeuristicPolicy {
    pub fn new(difficulty: BotDifficulty) -> Self {
        Self {
            difficulty,
            decision_details: false,
        }
    }

    pub fn from_config(config: BotConfig) -> Self {
        Self {
            difficulty: config.difficulty,
            decision_details: config.decision_details,
        }
    }

    pub fn easy() -> Self {
        Self::new(BotDifficulty::Easy)
    }

    pub fn simple() -> Self {
        Self::new(BotDifficulty::Simple)
    }

    pub fn difficulty(&self) -> BotDifficulty {
        self.difficulty
    }
}

/// Difficulty comes from the cached `WHIST_BOT_DIFFICULTY` reading.
impl Default for HeuristicPolicy {
    fn default() -> Self {
        Self::from_config(BotConfig::from_env())
    }
}

impl Policy for HeuristicPolicy {
    fn choose_play(&mut self, ctx: &PolicyContext) -> Result<Card, PolicyError> {
        let legal_moves = ctx.legal_cards();
        let Some(&lowest_legal) = legal_moves.first() else {
            return Err(PolicyError::NoLegalCard { seat: ctx.seat });
        };

        let (chosen, reason) = match self.difficulty {
            BotDifficulty::Easy => (lowest_legal, "easy_lowest_legal"),
            BotDifficulty::Simple => {
                let (card, reason) = PlayPlanner::choose_with_reason(ctx.hand, ctx.trick)?;
                (card, reason.as_str())
            }
        };

        if let Err(source) = ctx.trick.is_legal(ctx.seat, ctx.hand, chosen) {
            event!(
                target: "whist_bot::play",
                Level::WARN,
                seat = %ctx.seat,
                chosen = %chosen,
                error = %source,
                reason,
                "planner produced an unplayable card"
            );
            return Err(PolicyError::IllegalChoice {
                card: chosen,
                source,
            });
        }

        log_play_decision(ctx, self.difficulty, self.decision_details, &legal_moves, chosen, reason);
        Ok(chosen)
    }

    fn name(&self) -> &'static str {
        self.difficulty.as_str()
    }
}

fn log_play_decision(
    ctx: &PolicyContext,
    difficulty: BotDifficulty,
    details: bool,
    legal_moves: &[Card],
    chosen: Card,
    reason: &str,
) {
    if !tracing::enabled!(Level::DEBUG) {
        return;
    }

    let legal_preview = if details || legal_moves.len() <= 6 {
        legal_moves
            .iter()
            .map(|card| card.to_string())
            .collect::<Vec<_>>()
            .join(",")
    } else {
        format!("{} moves", legal_moves.len())
    };

    event!(
        target: "whist_bot::play",
        Level::DEBUG,
        seat = %ctx.seat,
        difficulty = difficulty.as_str(),
        legal_count = legal_moves.len(),
        legal_moves = %legal_preview,
        chosen = %chosen,
        trick_cards = ctx.trick.plays_made(),
        trumps = ?ctx.trick.trumps(),
        reason,
    );
}
