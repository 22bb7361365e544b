//! The two seats at the table.

use alloc::string::String;

use crate::card::Card;
use crate::hand::Hand;

/// Total at or above which the dealer stops drawing.
pub const DEALER_STANDS_ON: u16 = 17;

/// The player: a name, a hand and a chip balance.
///
/// The balance is only changed by settlement, and bets are validated against
/// it before a round is dealt.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Player {
    name: String,
    hand: Hand,
    chips: usize,
}

impl Player {
    /// Creates a player with an empty hand.
    #[must_use]
    pub fn new(name: impl Into<String>, chips: usize) -> Self {
        Self {
            name: name.into(),
            hand: Hand::new(),
            chips,
        }
    }

    /// Returns the player's name.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Returns the player's hand.
    #[must_use]
    pub const fn hand(&self) -> &Hand {
        &self.hand
    }

    pub(crate) const fn hand_mut(&mut self) -> &mut Hand {
        &mut self.hand
    }

    /// Returns the chip balance.
    #[must_use]
    pub const fn chips(&self) -> usize {
        self.chips
    }

    /// Applies a signed chip delta. The balance never drops below zero.
    pub const fn change_chips(&mut self, delta: isize) {
        self.chips = self.chips.saturating_add_signed(delta);
    }
}

/// The house dealer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Dealer {
    name: String,
    hand: Hand,
}

impl Dealer {
    /// Creates a dealer with an empty hand.
    #[must_use]
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            hand: Hand::new(),
        }
    }

    /// Returns the dealer's name.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Returns the dealer's hand.
    #[must_use]
    pub const fn hand(&self) -> &Hand {
        &self.hand
    }

    pub(crate) const fn hand_mut(&mut self) -> &mut Hand {
        &mut self.hand
    }

    /// Returns the face-up card, if dealt.
    #[must_use]
    pub fn up_card(&self) -> Option<Card> {
        self.hand.cards().first().copied()
    }

    /// Returns whether the fixed house strategy draws another card.
    ///
    /// The dealer hits below 17 and stands on every 17, soft or hard.
    #[must_use]
    pub fn should_hit(&self) -> bool {
        self.hand.total() < DEALER_STANDS_ON
    }
}
