use crate::model::score::ScoreBoard;

const CLASSIC_TARGET: u32 = 5;
const KNOCK_OUT_START: usize = 13;

/// Rules that differ between whist variants: how many cards go out per hand
/// and when the game is over.
pub trait GameVariant {
    fn name(&self) -> &'static str;

    /// Number of cards dealt from a deck holding `deck_len` cards.
    fn cards_to_deal(&self, deck_len: usize) -> usize;

    fn is_finished(&self, scores: &ScoreBoard) -> bool;

    /// Called once per hand after scoring.
    fn end_hand(&mut self) {}
}

/// Whole deck every hand; the first seat to five points ends the game.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ClassicWhist {
    target: u32,
}

impl ClassicWhist {
    pub const fn new() -> Self {
        Self {
            target: CLASSIC_TARGET,
        }
    }

    pub const fn with_target(target: u32) -> Self {
        Self { target }
    }

    pub const fn target(&self) -> u32 {
        self.target
    }
}

impl Default for ClassicWhist {
    fn default() -> Self {
        Self::new()
    }
}

impl GameVariant for ClassicWhist {
    fn name(&self) -> &'static str {
        "Classic Whist"
    }

    fn cards_to_deal(&self, deck_len: usize) -> usize {
        deck_len
    }

    fn is_finished(&self, scores: &ScoreBoard) -> bool {
        scores.highest() >= self.target
    }
}

/// Thirteen cards each on the first hand, one fewer every hand after.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct KnockOutWhist {
    hand_size: usize,
}

impl KnockOutWhist {
    pub const fn new() -> Self {
        Self {
            hand_size: KNOCK_OUT_START,
        }
    }

    pub const fn hand_size(&self) -> usize {
        self.hand_size
    }
}

impl Default for KnockOutWhist {
    fn default() -> Self {
        Self::new()
    }
}

impl GameVariant for KnockOutWhist {
    fn name(&self) -> &'static str {
        "Knock-Out Whist"
    }

    fn cards_to_deal(&self, _deck_len: usize) -> usize {
        self.hand_size * 4
    }

    fn is_finished(&self, _scores: &ScoreBoard) -> bool {
        self.hand_size == 0
    }

    fn end_hand(&mut self) {
        self.hand_size = self.hand_size.saturating_sub(1);
    }
}
