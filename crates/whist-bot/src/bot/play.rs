use whist_core::model::card::Card;
use whist_core::model::hand::{Hand, HandError};
use whist_core::model::suit::Suit;
use whist_core::model::trick::Trick;

/// Reason the planner settled on a card, carried into decision logs.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PlayReason {
    Lead,
    FollowCheapestWinner,
    FollowHighest,
    FollowLowest,
    TrumpCheapestWinner,
    TrumpHighest,
    Discard,
}

impl PlayReason {
    pub const fn as_str(self) -> &'static str {
        match self {
            PlayReason::Lead => "lead_best",
            PlayReason::FollowCheapestWinner => "follow_cheapest_winner",
            PlayReason::FollowHighest => "follow_highest",
            PlayReason::FollowLowest => "follow_lowest",
            PlayReason::TrumpCheapestWinner => "trump_cheapest_winner",
            PlayReason::TrumpHighest => "trump_highest",
            PlayReason::Discard => "discard_worst",
        }
    }
}

/// Plays the strongest card while the trick can still be won and the cheapest
/// one otherwise. On the last play of a trick it spends only what it needs.
pub struct PlayPlanner;

impl PlayPlanner {
    pub fn choose(hand: &Hand, trick: &Trick) -> Result<Card, HandError> {
        Self::choose_with_reason(hand, trick).map(|(card, _)| card)
    }

    pub fn choose_with_reason(hand: &Hand, trick: &Trick) -> Result<(Card, PlayReason), HandError> {
        let trumps = trick.trumps();

        let Some(lead) = trick.lead_suit() else {
            return Ok((hand.best_card(trumps, true)?, PlayReason::Lead));
        };

        if hand.contains_suit(lead) {
            if !can_win_trick(hand, trick) {
                return Ok((hand.lowest_in_suit(lead)?, PlayReason::FollowLowest));
            }
            if trick.is_last_play() {
                let card = cheapest_winner(hand, trick, lead)?;
                return Ok((card, PlayReason::FollowCheapestWinner));
            }
            return Ok((hand.highest_in_suit(lead)?, PlayReason::FollowHighest));
        }

        if let Some(trump) = trumps.filter(|&suit| hand.contains_suit(suit)) {
            if !can_win_trick(hand, trick) {
                return Ok((hand.worst_card()?, PlayReason::Discard));
            }
            if trick.is_last_play() {
                let card = cheapest_winner(hand, trick, trump)?;
                return Ok((card, PlayReason::TrumpCheapestWinner));
            }
            return Ok((hand.highest_in_suit(trump)?, PlayReason::TrumpHighest));
        }

        Ok((hand.worst_card()?, PlayReason::Discard))
    }
}

/// Whether `hand` holds a card that would currently take the trick.
pub fn can_win_trick(hand: &Hand, trick: &Trick) -> bool {
    let Some(lead) = trick.lead_suit() else {
        return false;
    };
    let trumps = trick.trumps();

    if hand.contains_suit(lead) {
        if trick.trump_played() && trumps != Some(lead) {
            return false;
        }
        return hand.max_of_suit_beats(trick.highest_of_suit_played(lead));
    }

    match trumps.filter(|&suit| hand.contains_suit(suit)) {
        Some(trump) if trick.trump_played() => {
            hand.max_of_suit_beats(trick.highest_of_suit_played(trump))
        }
        Some(_) => true,
        None => false,
    }
}

// Lowest card of `suit` above everything of `suit` already played. With
// nothing of `suit` down yet any card of it will do.
fn cheapest_winner(hand: &Hand, trick: &Trick, suit: Suit) -> Result<Card, HandError> {
    match trick.highest_played_in_suit(suit) {
        Some(top) => hand.higher_in_suit_than(top),
        None => hand.lowest_in_suit(suit),
    }
}
