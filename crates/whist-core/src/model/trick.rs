use crate::model::card::Card;
use crate::model::hand::Hand;
use crate::model::player::{Direction, Player};
use crate::model::suit::Suit;
use thiserror::Error;

/// Reason a play was refused. The trick and the hand are left untouched.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum IllegalMove {
    #[error("{player} does not hold {card}")]
    CardNotHeld { player: Direction, card: Card },
    #[error("not {actual}'s turn (next to play: {expected:?})")]
    OutOfTurn {
        expected: Option<Direction>,
        actual: Direction,
    },
    #[error("{player} must follow the lead suit {lead}")]
    MustFollowSuit { player: Direction, lead: Suit },
}

/// One round of four plays, filled in turn order starting with `lead`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Trick {
    lead: Direction,
    trumps: Option<Suit>,
    slots: [Option<Card>; 4],
}

impl Trick {
    pub fn new(lead: Direction, trumps: Option<Suit>) -> Self {
        Self {
            lead,
            trumps,
            slots: [None; 4],
        }
    }

    pub fn lead(&self) -> Direction {
        self.lead
    }

    pub fn trumps(&self) -> Option<Suit> {
        self.trumps
    }

    pub fn plays_made(&self) -> usize {
        self.slots.iter().take_while(|slot| slot.is_some()).count()
    }

    pub fn is_empty(&self) -> bool {
        self.slots[0].is_none()
    }

    pub fn is_complete(&self) -> bool {
        self.plays_made() == 4
    }

    /// Three cards are down, so the next play settles the trick.
    pub fn is_last_play(&self) -> bool {
        self.plays_made() == 3
    }

    pub fn lead_suit(&self) -> Option<Suit> {
        self.slots[0].map(|card| card.suit)
    }

    pub fn trump_played(&self) -> bool {
        self.cards_played()
            .iter()
            .any(|card| card.is_trump(self.trumps))
    }

    pub fn cards_played(&self) -> Vec<Card> {
        self.slots.iter().map_while(|slot| *slot).collect()
    }

    /// Plays so far paired with the seat that made them.
    pub fn plays(&self) -> impl Iterator<Item = (Direction, Card)> + '_ {
        self.slots
            .iter()
            .map_while(|slot| *slot)
            .enumerate()
            .map(|(offset, card)| (self.lead.advance(offset), card))
    }

    pub fn card_played_by(&self, direction: Direction) -> Option<Card> {
        self.slots[self.offset_of(direction)]
    }

    pub fn next_to_play(&self) -> Option<Direction> {
        let made = self.plays_made();
        (made < 4).then(|| self.lead.advance(made))
    }

    pub fn highest_played_in_suit(&self, suit: Suit) -> Option<Card> {
        self.cards_played()
            .into_iter()
            .filter(|card| card.suit == suit)
            .max()
    }

    /// Highest played card of `suit`.
    ///
    /// When nothing of `suit` has been played this returns the two of that
    /// suit as a placeholder: it was never played and any real card of the
    /// suit beats it. Use [`Trick::highest_played_in_suit`] to tell the cases
    /// apart.
    pub fn highest_of_suit_played(&self, suit: Suit) -> Card {
        self.highest_played_in_suit(suit)
            .unwrap_or(Card::lowest_of(suit))
    }

    /// Checks a prospective play without recording it.
    pub fn is_legal(&self, direction: Direction, hand: &Hand, card: Card) -> Result<(), IllegalMove> {
        if !hand.contains(card) {
            return Err(IllegalMove::CardNotHeld {
                player: direction,
                card,
            });
        }

        let expected = self.next_to_play();
        if expected != Some(direction) {
            return Err(IllegalMove::OutOfTurn {
                expected,
                actual: direction,
            });
        }

        if let Some(lead) = self.lead_suit() {
            if card.suit != lead && hand.contains_suit(lead) {
                return Err(IllegalMove::MustFollowSuit {
                    player: direction,
                    lead,
                });
            }
        }

        Ok(())
    }

    /// Every card `direction` could legally play from `hand` right now.
    pub fn legal_cards(&self, direction: Direction, hand: &Hand) -> Vec<Card> {
        hand.iter()
            .copied()
            .filter(|&card| self.is_legal(direction, hand, card).is_ok())
            .collect()
    }

    /// Records `card` for `player` and takes it out of their hand.
    pub fn play(&mut self, player: &mut Player, card: Card) -> Result<(), IllegalMove> {
        let direction = player.direction();
        self.is_legal(direction, player.hand(), card)?;

        let slot = self.offset_of(direction);
        self.slots[slot] = Some(card);
        player.hand_mut().remove(card);
        Ok(())
    }

    /// Seat currently holding the trick, or `None` before the first play.
    ///
    /// A card takes over when it matches the winning card's suit at an equal
    /// or higher rank, or when it is a trump and the winning card is not. Equal
    /// cards therefore go to the later play.
    pub fn winner(&self) -> Option<Direction> {
        let mut plays = self.plays();
        let (mut winner, mut best) = plays.next()?;

        for (direction, card) in plays {
            let follows = card.suit == best.suit && card >= best;
            let trumps_in = card.is_trump(self.trumps) && !best.is_trump(self.trumps);
            if follows || trumps_in {
                winner = direction;
                best = card;
            }
        }

        Some(winner)
    }

    fn offset_of(&self, direction: Direction) -> usize {
        (direction.index() + 4 - self.lead.index()) % 4
    }
}

#[cfg(test)]
mod tests {
    use super::{IllegalMove, Trick};
    use crate::model::card::Card;
    use crate::model::hand::Hand;
    use crate::model::player::{Direction, Player};
    use crate::model::rank::Rank;
    use crate::model::suit::Suit;

    fn player(direction: Direction, cards: &[Card]) -> Player {
        Player::with_hand(direction, Hand::with_cards(cards.iter().copied()))
    }

    fn seven_hearts() -> Card {
        Card::new(Rank::Seven, Suit::Hearts)
    }

    #[test]
    fn empty_trick_reports_no_state() {
        let trick = Trick::new(Direction::East, Some(Suit::Spades));
        assert_eq!(trick.lead_suit(), None);
        assert!(!trick.trump_played());
        assert!(!trick.is_last_play());
        assert!(trick.cards_played().is_empty());
        assert_eq!(trick.next_to_play(), Some(Direction::East));
        assert_eq!(trick.winner(), None);
        assert_eq!(trick.card_played_by(Direction::East), None);
    }

    #[test]
    fn plays_follow_turn_order() {
        let mut trick = Trick::new(Direction::North, None);
        let mut north = player(Direction::North, &[Card::new(Rank::Two, Suit::Clubs)]);
        let mut south = player(Direction::South, &[Card::new(Rank::Three, Suit::Clubs)]);

        trick.play(&mut north, Card::new(Rank::Two, Suit::Clubs)).unwrap();
        assert_eq!(trick.next_to_play(), Some(Direction::East));
        assert!(north.hand().is_empty());

        let result = trick.play(&mut south, Card::new(Rank::Three, Suit::Clubs));
        assert_eq!(
            result,
            Err(IllegalMove::OutOfTurn {
                expected: Some(Direction::East),
                actual: Direction::South,
            })
        );
        assert_eq!(south.hand().len(), 1);
    }

    #[test]
    fn card_not_held_is_checked_before_turn() {
        let mut trick = Trick::new(Direction::North, Some(Suit::Spades));
        let before = trick.clone();
        let mut south = player(Direction::South, &[Card::new(Rank::Ace, Suit::Clubs)]);

        let result = trick.play(&mut south, seven_hearts());
        assert_eq!(
            result,
            Err(IllegalMove::CardNotHeld {
                player: Direction::South,
                card: seven_hearts(),
            })
        );
        assert_eq!(trick, before);
        assert_eq!(south.hand().len(), 1);
    }

    #[test]
    fn must_follow_lead_suit_when_able() {
        let mut trick = Trick::new(Direction::North, Some(Suit::Spades));
        let mut north = player(Direction::North, &[seven_hearts()]);
        let mut east = player(
            Direction::East,
            &[Card::new(Rank::Two, Suit::Hearts), Card::new(Rank::Ace, Suit::Spades)],
        );
        trick.play(&mut north, seven_hearts()).unwrap();

        let result = trick.play(&mut east, Card::new(Rank::Ace, Suit::Spades));
        assert_eq!(
            result,
            Err(IllegalMove::MustFollowSuit {
                player: Direction::East,
                lead: Suit::Hearts,
            })
        );
        assert_eq!(trick.cards_played().len(), 1);
        assert_eq!(east.hand().len(), 2);
    }

    #[test]
    fn void_player_may_trump_or_discard() {
        let mut trick = Trick::new(Direction::North, Some(Suit::Spades));
        let mut north = player(Direction::North, &[seven_hearts()]);
        let mut east = player(
            Direction::East,
            &[Card::new(Rank::Two, Suit::Spades), Card::new(Rank::Four, Suit::Clubs)],
        );
        trick.play(&mut north, seven_hearts()).unwrap();

        assert_eq!(
            trick.legal_cards(Direction::East, east.hand()),
            vec![Card::new(Rank::Two, Suit::Spades), Card::new(Rank::Four, Suit::Clubs)]
        );
        trick.play(&mut east, Card::new(Rank::Two, Suit::Spades)).unwrap();
        assert!(trick.trump_played());
        assert_eq!(trick.card_played_by(Direction::East), Some(Card::new(Rank::Two, Suit::Spades)));
    }

    #[test]
    fn legal_cards_restrict_to_lead_suit() {
        let mut trick = Trick::new(Direction::West, None);
        let mut west = player(Direction::West, &[seven_hearts()]);
        trick.play(&mut west, seven_hearts()).unwrap();
        let north_hand = Hand::with_cards([
            Card::new(Rank::Ace, Suit::Hearts),
            Card::new(Rank::Ace, Suit::Clubs),
            Card::new(Rank::Three, Suit::Hearts),
        ]);
        assert_eq!(
            trick.legal_cards(Direction::North, &north_hand),
            vec![Card::new(Rank::Three, Suit::Hearts), Card::new(Rank::Ace, Suit::Hearts)]
        );
        assert!(trick.legal_cards(Direction::South, &north_hand).is_empty());
    }

    #[test]
    fn trump_beats_higher_lead_suit_cards() {
        let mut trick = Trick::new(Direction::North, Some(Suit::Spades));
        let plays = [
            (Direction::North, seven_hearts()),
            (Direction::East, Card::new(Rank::King, Suit::Hearts)),
            (Direction::South, Card::new(Rank::Two, Suit::Spades)),
            (Direction::West, Card::new(Rank::Three, Suit::Hearts)),
        ];
        for (direction, card) in plays {
            let mut seat = player(direction, &[card]);
            trick.play(&mut seat, card).unwrap();
        }

        assert!(trick.is_complete());
        assert_eq!(trick.next_to_play(), None);
        assert_eq!(trick.cards_played().len(), 4);
        assert_eq!(trick.winner(), Some(Direction::South));
    }

    #[test]
    fn highest_lead_suit_wins_without_trumps() {
        let mut trick = Trick::new(Direction::East, None);
        let plays = [
            (Direction::East, Card::new(Rank::Ten, Suit::Clubs)),
            (Direction::South, Card::new(Rank::Queen, Suit::Clubs)),
            (Direction::West, Card::new(Rank::Ace, Suit::Diamonds)),
            (Direction::North, Card::new(Rank::Four, Suit::Clubs)),
        ];
        for (direction, card) in plays {
            let mut seat = player(direction, &[card]);
            trick.play(&mut seat, card).unwrap();
        }
        assert_eq!(trick.winner(), Some(Direction::South));
    }

    #[test]
    fn partial_trick_queries() {
        let mut trick = Trick::new(Direction::South, Some(Suit::Diamonds));
        let plays = [
            (Direction::South, Card::new(Rank::Five, Suit::Clubs)),
            (Direction::West, Card::new(Rank::Jack, Suit::Clubs)),
            (Direction::North, Card::new(Rank::Nine, Suit::Diamonds)),
        ];
        for (direction, card) in plays {
            let mut seat = player(direction, &[card]);
            trick.play(&mut seat, card).unwrap();
        }

        assert!(trick.is_last_play());
        assert_eq!(trick.lead_suit(), Some(Suit::Clubs));
        assert_eq!(trick.next_to_play(), Some(Direction::East));
        assert_eq!(trick.card_played_by(Direction::East), None);
        assert_eq!(trick.winner(), Some(Direction::North));
        assert_eq!(
            trick.highest_of_suit_played(Suit::Clubs),
            Card::new(Rank::Jack, Suit::Clubs)
        );
        assert_eq!(trick.highest_played_in_suit(Suit::Spades), None);
        assert_eq!(trick.highest_of_suit_played(Suit::Spades), Card::lowest_of(Suit::Spades));
    }

    #[test]
    fn clone_does_not_share_slots() {
        let mut trick = Trick::new(Direction::North, Some(Suit::Hearts));
        let copy = trick.clone();
        let mut north = player(Direction::North, &[seven_hearts()]);
        trick.play(&mut north, seven_hearts()).unwrap();
        assert!(copy.is_empty());
        assert_eq!(copy.trumps(), Some(Suit::Hearts));
        assert_eq!(copy.lead(), Direction::North);
        assert_eq!(trick.cards_played(), vec![seven_hearts()]);
    }
}
