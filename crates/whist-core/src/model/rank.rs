use core::fmt;
use serde::{Deserialize, Serialize};

/// Card rank, deuce low and ace high. The discriminant is the pip value used
/// when ranks are compared or built from numbers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Ord, PartialOrd, Serialize, Deserialize)]
#[repr(u8)]
pub enum Rank {
    Two = 2,
    Three,
    Four,
    Five,
    Six,
    Seven,
    Eight,
    Nine,
    Ten,
    Jack,
    Queen,
    King,
    Ace,
}

impl Rank {
    /// Ascending, so the index of a rank is `value() - 2`.
    pub const ORDERED: [Rank; 13] = [
        Rank::Two,
        Rank::Three,
        Rank::Four,
        Rank::Five,
        Rank::Six,
        Rank::Seven,
        Rank::Eight,
        Rank::Nine,
        Rank::Ten,
        Rank::Jack,
        Rank::Queen,
        Rank::King,
        Rank::Ace,
    ];

    /// Every other card of a suit beats a card of this rank.
    pub const LOWEST: Rank = Rank::ORDERED[0];

    pub fn from_value(value: u8) -> Option<Self> {
        let offset = value.checked_sub(Rank::LOWEST.value())?;
        Rank::ORDERED.get(usize::from(offset)).copied()
    }

    pub const fn value(self) -> u8 {
        self as u8
    }

    /// Single-character symbol, `T` for ten, so every card prints as two characters.
    pub const fn symbol(self) -> char {
        match self {
            Rank::Ten => 'T',
            Rank::Jack => 'J',
            Rank::Queen => 'Q',
            Rank::King => 'K',
            Rank::Ace => 'A',
            pip => (b'0' + pip.value()) as char,
        }
    }
}

impl fmt::Display for Rank {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.symbol())
    }
}
