//! Cards: suits, ranks, and the standard 52-card deck.
//!
//! ## Key Types
//!
//! - `Suit`: the four French suits
//! - `Rank`: 1-13, where 1 is the ace and 11/12/13 are the face cards
//! - `Card`: an immutable (suit, rank) pair
//!
//! `standard_deck` builds the full deck in a fixed order; shuffling is a
//! separate state transition so deck construction stays deterministic.

use im::Vector;
use serde::{Deserialize, Serialize};

/// One of the four suits.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Suit {
    Hearts,
    Diamonds,
    Clubs,
    Spades,
}

impl Suit {
    /// All suits, in deck-construction order.
    pub const ALL: [Suit; 4] = [Suit::Hearts, Suit::Diamonds, Suit::Clubs, Suit::Spades];
}

impl std::fmt::Display for Suit {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            Suit::Hearts => "hearts",
            Suit::Diamonds => "diamonds",
            Suit::Clubs => "clubs",
            Suit::Spades => "spades",
        };
        write!(f, "{}", name)
    }
}

/// Card rank: 1 (ace) through 13 (king).
///
/// Serialized as a plain integer; deserialization rejects values outside
/// 1..=13 so a corrupted snapshot fails decoding instead of smuggling an
/// impossible card into the game.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
pub struct Rank(u8);

impl Rank {
    pub const ACE: Rank = Rank(1);
    pub const JACK: Rank = Rank(11);
    pub const QUEEN: Rank = Rank(12);
    pub const KING: Rank = Rank(13);

    /// Lowest and highest valid rank values.
    pub const MIN: u8 = 1;
    pub const MAX: u8 = 13;

    /// Create a rank, rejecting values outside 1..=13.
    #[must_use]
    pub const fn new(value: u8) -> Option<Rank> {
        if value >= Self::MIN && value <= Self::MAX {
            Some(Rank(value))
        } else {
            None
        }
    }

    /// Get the raw rank value (1-13).
    #[must_use]
    pub const fn value(self) -> u8 {
        self.0
    }

    /// Iterate over all ranks, ascending.
    pub fn all() -> impl Iterator<Item = Rank> {
        (Self::MIN..=Self::MAX).map(Rank)
    }
}

impl TryFrom<u8> for Rank {
    type Error = String;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        Rank::new(value).ok_or_else(|| format!("rank {} out of range 1..=13", value))
    }
}

impl From<Rank> for u8 {
    fn from(rank: Rank) -> u8 {
        rank.0
    }
}

impl std::fmt::Display for Rank {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match *self {
            Rank::ACE => write!(f, "ace"),
            Rank::JACK => write!(f, "jack"),
            Rank::QUEEN => write!(f, "queen"),
            Rank::KING => write!(f, "king"),
            Rank(n) => write!(f, "{}", n),
        }
    }
}

/// An immutable playing card.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct Card {
    pub suit: Suit,
    pub rank: Rank,
}

impl Card {
    /// Create a new card.
    #[must_use]
    pub const fn new(suit: Suit, rank: Rank) -> Self {
        Self { suit, rank }
    }
}

impl std::fmt::Display for Card {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} of {}", self.rank, self.suit)
    }
}

/// Build the standard 52-card deck: suit-major, rank ascending within suit.
///
/// Deterministic, no randomness involved.
#[must_use]
pub fn standard_deck() -> Vector<Card> {
    let mut deck = Vector::new();
    for suit in Suit::ALL {
        for rank in Rank::all() {
            deck.push_back(Card::new(suit, rank));
        }
    }
    deck
}
