//! Players: a display name and an ordered hand of cards.
//!
//! Seating order is the insertion order of players into the game state;
//! the turn pointer in `core::state` indexes into that order.

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use super::card::Card;

/// A player's hand, ordered as dealt.
///
/// Hands hold exactly 5 cards after a deal, so the inline capacity keeps
/// them off the heap in the common case.
pub type Hand = SmallVec<[Card; 5]>;

/// A seated player.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Player {
    /// Display name. Not required to be unique.
    pub name: String,

    /// Ordered hand, empty until cards are dealt.
    pub hand: Hand,
}

impl Player {
    /// Create a player with an empty hand.
    #[must_use]
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            hand: Hand::new(),
        }
    }

    /// Number of cards currently held.
    #[must_use]
    pub fn hand_size(&self) -> usize {
        self.hand.len()
    }
}

impl std::fmt::Display for Player {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} ({} cards)", self.name, self.hand.len())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::card::{Rank, Suit};

    #[test]
    fn test_new_player_has_empty_hand() {
        let player = Player::new("Alice");
        assert_eq!(player.name, "Alice");
        assert_eq!(player.hand_size(), 0);
    }

    #[test]
    fn test_hand_holds_cards_in_order() {
        let mut player = Player::new("Bob");
        player.hand.push(Card::new(Suit::Hearts, Rank::ACE));
        player.hand.push(Card::new(Suit::Spades, Rank::KING));

        assert_eq!(player.hand_size(), 2);
        assert_eq!(player.hand[0], Card::new(Suit::Hearts, Rank::ACE));
        assert_eq!(player.hand[1], Card::new(Suit::Spades, Rank::KING));
    }

    #[test]
    fn test_player_serialization() {
        let mut player = Player::new("Carol");
        player.hand.push(Card::new(Suit::Clubs, Rank::QUEEN));

        let json = serde_json::to_string(&player).unwrap();
        let back: Player = serde_json::from_str(&json).unwrap();
        assert_eq!(player, back);
    }

    #[test]
    fn test_display() {
        let player = Player::new("Dave");
        assert_eq!(player.to_string(), "Dave (0 cards)");
    }
}
