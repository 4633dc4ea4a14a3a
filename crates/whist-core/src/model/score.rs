use crate::model::player::Direction;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScoreBoard {
    totals: [u32; 4],
}

impl ScoreBoard {
    pub const fn new() -> Self {
        Self { totals: [0; 4] }
    }

    pub fn add_points(&mut self, seat: Direction, points: u32) {
        self.totals[seat.index()] += points;
    }

    pub fn score(&self, seat: Direction) -> u32 {
        self.totals[seat.index()]
    }

    pub fn standings(&self) -> &[u32; 4] {
        &self.totals
    }

    pub fn highest(&self) -> u32 {
        self.totals.iter().copied().max().unwrap_or(0)
    }
}

impl Default for ScoreBoard {
    fn default() -> Self {
        Self::new()
    }
}
