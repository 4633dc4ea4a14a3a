mod heuristic;

pub use heuristic::HeuristicPolicy;

use thiserror::Error;
use whist_core::model::card::Card;
use whist_core::model::hand::{Hand, HandError};
use whist_core::model::player::Direction;
use whist_core::model::trick::{IllegalMove, Trick};

/// What a policy sees when it is asked for a card.
#[derive(Debug, Clone, Copy)]
pub struct PolicyContext<'a> {
    pub seat: Direction,
    pub hand: &'a Hand,
    pub trick: &'a Trick,
}

impl<'a> PolicyContext<'a> {
    pub fn new(seat: Direction, hand: &'a Hand, trick: &'a Trick) -> Self {
        Self { seat, hand, trick }
    }

    pub fn legal_cards(&self) -> Vec<Card> {
        self.trick.legal_cards(self.seat, self.hand)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum PolicyError {
    #[error("{seat} has no legal card to play")]
    NoLegalCard { seat: Direction },
    #[error("policy chose {card} which is not playable")]
    IllegalChoice {
        card: Card,
        #[source]
        source: IllegalMove,
    },
    #[error(transparent)]
    Hand(#[from] HandError),
}

/// Single capability shared by every automated (or prompted) player.
pub trait Policy: Send {
    /// Choose the card to play into `ctx.trick`. Never mutates the hand.
    fn choose_play(&mut self, ctx: &PolicyContext) -> Result<Card, PolicyError>;

    fn name(&self) -> &'static str;
}
