//! The shoe cards are dealt from.

use alloc::vec::Vec;

use rand::Rng;
use rand::seq::SliceRandom;

use crate::card::{Card, DECK_SIZE, Rank, Suit};
use crate::error::DealError;

/// An ordered single-deck shoe with a deal cursor.
///
/// Cards before the cursor have been dealt and are never dealt again until the
/// next [`Shoe::shuffle`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Shoe {
    cards: Vec<Card>,
    cursor: usize,
}

impl Shoe {
    /// Creates a full 52-card shoe in canonical order (clubs to spades, two to ace).
    #[must_use]
    pub fn new() -> Self {
        let mut cards = Vec::with_capacity(DECK_SIZE);

        for suit in Suit::ALL {
            for rank in Rank::ALL {
                cards.push(Card::new(rank, suit));
            }
        }

        Self { cards, cursor: 0 }
    }

    /// Creates a shoe that deals exactly `cards`, first element first.
    ///
    /// This is a seam for replaying a recorded or stacked sequence. The cards
    /// are taken as given: nothing checks for a full deck or for duplicates,
    /// so such a shoe does not hold the 52-unique-card guarantee of
    /// [`Shoe::new`].
    #[must_use]
    pub const fn from_cards(cards: Vec<Card>) -> Self {
        Self { cards, cursor: 0 }
    }

    /// Shuffles every card (dealt or not) and resets the cursor.
    pub fn shuffle<R: Rng + ?Sized>(&mut self, rng: &mut R) {
        self.cards.shuffle(rng);
        self.cursor = 0;
    }

    /// Deals the card at the cursor.
    ///
    /// # Errors
    ///
    /// Returns [`DealError::ShoeExhausted`] once every card has been dealt.
    pub fn deal(&mut self) -> Result<Card, DealError> {
        let card = *self
            .cards
            .get(self.cursor)
            .ok_or(DealError::ShoeExhausted)?;
        self.cursor += 1;
        Ok(card)
    }

    /// Returns the number of cards left to deal.
    #[must_use]
    pub fn remaining(&self) -> usize {
        self.cards.len() - self.cursor
    }

    /// Returns the number of cards dealt since the last shuffle.
    #[must_use]
    pub const fn dealt(&self) -> usize {
        self.cursor
    }

    /// Returns the total number of cards in the shoe.
    #[must_use]
    pub fn len(&self) -> usize {
        self.cards.len()
    }

    /// Returns whether the shoe holds no cards at all.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    /// Returns all cards in deal order, including those already dealt.
    #[must_use]
    pub fn cards(&self) -> &[Card] {
        &self.cards
    }
}

impl Default for Shoe {
    fn default() -> Self {
        Self::new()
    }
}
