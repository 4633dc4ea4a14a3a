use crate::game::variant::GameVariant;
use crate::model::card::Card;
use crate::model::deck::Deck;
use crate::model::hand::Hand;
use crate::model::player::{Direction, Player};
use crate::model::score::ScoreBoard;
use crate::model::suit::Suit;
use crate::model::trick::{IllegalMove, Trick};
use std::cmp::Ordering;
use thiserror::Error;
use tracing::{Level, event};

/// Tricks a side must take before the rest count as points.
const BOOK: u32 = 6;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum DealError {
    #[error("deck holds {available} cards but {needed} are needed")]
    DeckTooSmall { needed: usize, available: usize },
    #[error("{cards} cards cannot be split evenly between four seats")]
    UnevenDeal { cards: usize },
    #[error("deck holds {0} more than once")]
    DuplicateCard(Card),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum PlayError {
    #[error("no trick is in progress")]
    NoTrickInProgress,
    #[error(transparent)]
    Illegal(#[from] IllegalMove),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PlayOutcome {
    Played,
    TrickCompleted { winner: Direction },
    HandCompleted { winner: Direction },
}

/// Partnership result of one hand of play.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HandSummary {
    pub north_south_tricks: u32,
    pub east_west_tricks: u32,
    /// Seats credited this hand, `None` on a tie.
    pub scorers: Option<(Direction, Direction)>,
    pub points: u32,
}

/// Bookkeeping for a whist game: seats, trick counts, scores and the trick
/// in progress. Callers drive the turns.
#[derive(Debug, Clone)]
pub struct Table<V> {
    variant: V,
    players: [Player; 4],
    tricks: [u32; 4],
    scores: ScoreBoard,
    trumps: Option<Suit>,
    current_trick: Option<Trick>,
}

impl<V: GameVariant> Table<V> {
    pub fn new(variant: V) -> Self {
        Self {
            variant,
            players: Direction::LOOP.map(Player::new),
            tricks: [0; 4],
            scores: ScoreBoard::new(),
            trumps: None,
            current_trick: None,
        }
    }

    pub fn variant(&self) -> &V {
        &self.variant
    }

    pub fn player(&self, seat: Direction) -> &Player {
        &self.players[seat.index()]
    }

    pub fn hand(&self, seat: Direction) -> &Hand {
        self.players[seat.index()].hand()
    }

    pub fn scores(&self) -> &ScoreBoard {
        &self.scores
    }

    pub fn tricks_won(&self, seat: Direction) -> u32 {
        self.tricks[seat.index()]
    }

    pub fn trumps(&self) -> Option<Suit> {
        self.trumps
    }

    pub fn current_trick(&self) -> Option<&Trick> {
        self.current_trick.as_ref()
    }

    pub fn is_finished(&self) -> bool {
        self.variant.is_finished(&self.scores)
    }

    /// Replaces every hand with a round-robin deal starting with North.
    ///
    /// Every seat must end up with the same number of distinct cards, so a
    /// hand runs out for all four seats on the same trick. On error the
    /// table is left as it was.
    pub fn deal(&mut self, deck: &Deck) -> Result<(), DealError> {
        let needed = self.variant.cards_to_deal(deck.len());
        if needed > deck.len() {
            return Err(DealError::DeckTooSmall {
                needed,
                available: deck.len(),
            });
        }
        if needed % 4 != 0 {
            return Err(DealError::UnevenDeal { cards: needed });
        }

        let mut hands: [Hand; 4] = Default::default();
        let mut seat = Direction::North;
        for &card in deck.cards().iter().take(needed) {
            if hands.iter().any(|hand| hand.contains(card)) {
                return Err(DealError::DuplicateCard(card));
            }
            hands[seat.index()].add(card);
            seat = seat.next();
        }

        self.current_trick = None;
        for (player, hand) in self.players.iter_mut().zip(hands) {
            *player.hand_mut() = hand;
        }

        event!(
            target: "whist_core::table",
            Level::DEBUG,
            variant = self.variant.name(),
            dealt = needed,
            "hand dealt"
        );
        Ok(())
    }

    pub fn start_hand(&mut self, trumps: Option<Suit>, lead: Direction) {
        self.trumps = trumps;
        self.current_trick = Some(Trick::new(lead, trumps));
    }

    pub fn play(&mut self, seat: Direction, card: Card) -> Result<PlayOutcome, PlayError> {
        let trick = self
            .current_trick
            .as_mut()
            .ok_or(PlayError::NoTrickInProgress)?;

        if let Err(err) = trick.play(&mut self.players[seat.index()], card) {
            event!(
                target: "whist_core::table",
                Level::DEBUG,
                seat = %seat,
                card = %card,
                error = %err,
                "rejected play"
            );
            return Err(err.into());
        }

        if !trick.is_complete() {
            return Ok(PlayOutcome::Played);
        }

        let Some(winner) = trick.winner() else {
            return Ok(PlayOutcome::Played);
        };
        self.tricks[winner.index()] += 1;

        event!(
            target: "whist_core::table",
            Level::DEBUG,
            winner = %winner,
            tricks = self.tricks[winner.index()],
            "trick completed"
        );

        if self.players.iter().any(|player| player.hand().is_empty()) {
            self.current_trick = None;
            Ok(PlayOutcome::HandCompleted { winner })
        } else {
            self.current_trick = Some(Trick::new(winner, self.trumps));
            Ok(PlayOutcome::TrickCompleted { winner })
        }
    }

    /// Scores the hand for the side taking more tricks, then resets trick
    /// counts and lets the variant move on.
    pub fn end_hand(&mut self) -> HandSummary {
        let side_tricks = |seat: Direction| self.tricks_won(seat) + self.tricks_won(seat.partner());
        let north_south_tricks = side_tricks(Direction::North);
        let east_west_tricks = side_tricks(Direction::East);

        let (scorer, points) = match north_south_tricks.cmp(&east_west_tricks) {
            Ordering::Greater => (Some(Direction::North), north_south_tricks.saturating_sub(BOOK)),
            Ordering::Less => (Some(Direction::East), east_west_tricks.saturating_sub(BOOK)),
            Ordering::Equal => (None, 0),
        };
        let scorers = scorer.map(|seat| (seat, seat.partner()));

        if let Some((first, second)) = scorers {
            self.scores.add_points(first, points);
            self.scores.add_points(second, points);
        }

        self.tricks = [0; 4];
        self.current_trick = None;
        self.variant.end_hand();

        event!(
            target: "whist_core::table",
            Level::INFO,
            variant = self.variant.name(),
            north_south_tricks,
            east_west_tricks,
            points,
            finished = self.is_finished(),
            "hand scored"
        );

        HandSummary {
            north_south_tricks,
            east_west_tricks,
            scorers,
            points,
        }
    }
}
