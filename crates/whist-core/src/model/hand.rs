use crate::model::card::Card;
use crate::model::suit::Suit;
use std::collections::BTreeSet;
use std::ops::Bound;
use thiserror::Error;

/// Query made against a hand that cannot satisfy it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum HandError {
    #[error("hand holds no {0} cards")]
    NoCardOfSuit(Suit),
    #[error("hand holds nothing higher than {0}")]
    NoCardHigherThan(Card),
    #[error("hand is empty")]
    Empty,
}

/// Cards held by one player, kept unique and sorted by the card order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Hand {
    cards: BTreeSet<Card>,
}

impl Hand {
    pub fn new() -> Self {
        Self {
            cards: BTreeSet::new(),
        }
    }

    pub fn with_cards(cards: impl IntoIterator<Item = Card>) -> Self {
        Self {
            cards: cards.into_iter().collect(),
        }
    }

    /// Adding a card already held leaves the hand unchanged.
    pub fn add(&mut self, card: Card) {
        self.cards.insert(card);
    }

    pub fn remove(&mut self, card: Card) -> bool {
        self.cards.remove(&card)
    }

    pub fn contains(&self, card: Card) -> bool {
        self.cards.contains(&card)
    }

    pub fn len(&self) -> usize {
        self.cards.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    pub fn clear(&mut self) {
        self.cards.clear();
    }

    /// Cards in ascending order.
    pub fn iter(&self) -> impl DoubleEndedIterator<Item = &Card> {
        self.cards.iter()
    }

    pub fn matches(&self, suit: Suit) -> BTreeSet<Card> {
        self.in_suit(suit).collect()
    }

    pub fn contains_suit(&self, suit: Suit) -> bool {
        self.in_suit(suit).next().is_some()
    }

    pub fn highest_in_suit(&self, suit: Suit) -> Result<Card, HandError> {
        self.cards
            .iter()
            .rev()
            .find(|card| card.suit == suit)
            .copied()
            .ok_or(HandError::NoCardOfSuit(suit))
    }

    pub fn lowest_in_suit(&self, suit: Suit) -> Result<Card, HandError> {
        self.in_suit(suit).next().ok_or(HandError::NoCardOfSuit(suit))
    }

    pub fn worst_card(&self) -> Result<Card, HandError> {
        self.cards.first().copied().ok_or(HandError::Empty)
    }

    /// Offensive pick: strongest trump if one is held, otherwise the highest
    /// ranked card.
    ///
    /// A non-leader without trumps also gets the highest card in hand rather
    /// than a discard. Callers that want to throw away a card use
    /// [`Hand::worst_card`].
    pub fn best_card(&self, trumps: Option<Suit>, is_leader: bool) -> Result<Card, HandError> {
        if let Some(trump) = trumps.filter(|&suit| self.contains_suit(suit)) {
            return self.highest_in_suit(trump);
        }

        if is_leader {
            let top_rank = self
                .cards
                .iter()
                .map(|card| card.rank)
                .max()
                .ok_or(HandError::Empty)?;
            return self
                .cards
                .iter()
                .filter(|card| card.rank == top_rank)
                .max()
                .copied()
                .ok_or(HandError::Empty);
        }

        self.cards.last().copied().ok_or(HandError::Empty)
    }

    /// Cheapest card strictly above `card` in the full card order, whatever its suit.
    pub fn higher_than(&self, card: Card) -> Result<Card, HandError> {
        self.cards
            .range((Bound::Excluded(card), Bound::Unbounded))
            .next()
            .copied()
            .ok_or(HandError::NoCardHigherThan(card))
    }

    /// Cheapest card of `card.suit` that outranks `card`.
    pub fn higher_in_suit_than(&self, card: Card) -> Result<Card, HandError> {
        self.cards
            .range((Bound::Excluded(card), Bound::Unbounded))
            .find(|held| held.suit == card.suit)
            .copied()
            .ok_or(HandError::NoCardHigherThan(card))
    }

    /// Whether the best held card of `card.suit` outranks `card`.
    pub fn max_of_suit_beats(&self, card: Card) -> bool {
        self.highest_in_suit(card.suit)
            .map(|best| best > card)
            .unwrap_or(false)
    }

    fn in_suit(&self, suit: Suit) -> impl Iterator<Item = Card> + '_ {
        self.cards
            .iter()
            .copied()
            .filter(move |card| card.suit == suit)
    }
}

impl<'a> IntoIterator for &'a Hand {
    type Item = &'a Card;
    type IntoIter = std::collections::btree_set::Iter<'a, Card>;

    fn into_iter(self) -> Self::IntoIter {
        self.cards.iter()
    }
}
