//! Hand representation and the soft-ace total.

extern crate alloc;

use alloc::vec::Vec;

use crate::card::Card;
use crate::error::HandError;

/// Highest total that is not a bust.
pub const BLACKJACK: u16 = 21;

fn evaluate_cards(cards: &[Card]) -> u16 {
    let mut value: u16 = 0;
    let mut has_ace = false;

    for card in cards {
        if card.is_ace() {
            has_ace = true;
        }
        value = value.saturating_add(u16::from(card.value()));
    }

    // A single ace drops to 1, no matter how many aces the hand holds.
    if has_ace && value > BLACKJACK {
        value -= 10;
    }

    value
}

/// An ordered set of dealt cards.
///
/// Hands are reused across rounds: [`Hand::clear`] empties one for the next deal.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Hand {
    cards: Vec<Card>,
}

impl Hand {
    /// Creates a new empty hand.
    #[must_use]
    pub const fn new() -> Self {
        Self { cards: Vec::new() }
    }

    /// Adds a card to the hand.
    pub fn add_card(&mut self, card: Card) {
        self.cards.push(card);
    }

    /// Calculates the total of the hand.
    ///
    /// Cards are summed at face value with aces as 11. If that sum is over 21
    /// and the hand holds an ace, 10 is subtracted once. Further aces are not
    /// reduced, so `A A K` totals 22.
    #[must_use]
    pub fn total(&self) -> u16 {
        evaluate_cards(&self.cards)
    }

    /// Returns the number of cards in the hand.
    #[must_use]
    pub fn count(&self) -> usize {
        self.cards.len()
    }

    /// Returns whether the hand is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    /// Removes every card.
    pub fn clear(&mut self) {
        self.cards.clear();
    }

    /// Returns the card at `index`.
    ///
    /// # Errors
    ///
    /// Returns [`HandError::OutOfRange`] if `index` is not below [`Hand::count`].
    pub fn card(&self, index: usize) -> Result<Card, HandError> {
        self.cards.get(index).copied().ok_or(HandError::OutOfRange {
            index,
            len: self.cards.len(),
        })
    }

    /// Returns the cards in deal order.
    #[must_use]
    pub fn cards(&self) -> &[Card] {
        &self.cards
    }

    /// Returns whether the hand is a natural: two cards, one ace and one ten-value card.
    #[must_use]
    pub fn is_blackjack(&self) -> bool {
        match self.cards.as_slice() {
            [a, b] => {
                let values = (a.value(), b.value());
                values == (10, 11) || values == (11, 10)
            }
            _ => false,
        }
    }

    /// Returns whether the hand is over 21.
    #[must_use]
    pub fn is_bust(&self) -> bool {
        self.total() > BLACKJACK
    }
}

impl FromIterator<Card> for Hand {
    fn from_iter<I: IntoIterator<Item = Card>>(iter: I) -> Self {
        Self {
            cards: iter.into_iter().collect(),
        }
    }
}
