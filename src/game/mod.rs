//! Table session and round engine.

use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use tracing::debug;

use crate::card::Card;
use crate::error::DealError;
use crate::options::TableOptions;
use crate::player::{Dealer, Player};
use crate::result::Outcome;
use crate::shoe::Shoe;
use crate::view::{HandView, TableView};

mod actions;
mod bet;
mod dealer;
mod round;
pub mod state;

pub use state::RoundState;

/// Which seat a card goes to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Seat {
    Player,
    Dealer,
}

/// A single-player blackjack table.
///
/// The table owns the shoe, the player with their chip balance, and the
/// dealer. Hands are cleared, not rebuilt, between rounds, and the balance
/// carries over. Rounds can be driven step by step ([`Table::start_round`],
/// [`Table::place_bet`], [`Table::deal`], [`Table::hit`], [`Table::stand`],
/// [`Table::dealer_play`], [`Table::settle`], [`Table::clear_round`]) or in
/// one call with [`Table::play_round`].
#[derive(Debug, Clone)]
pub struct Table {
    /// Cards in the shoe. Shuffled at the start of every round.
    pub shoe: Shoe,
    options: TableOptions,
    state: RoundState,
    player: Player,
    dealer: Dealer,
    bet: usize,
    hole_revealed: bool,
    dealer_played: bool,
    outcome: Option<Outcome>,
    rng: ChaCha8Rng,
}

impl Table {
    /// Creates a new table with the given seed.
    ///
    /// # Example
    ///
    /// ```
    /// use bjtable::{RoundState, Table, TableOptions};
    ///
    /// let table = Table::new(TableOptions::default(), 42);
    /// assert_eq!(table.chips(), 1000);
    /// assert_eq!(table.state(), RoundState::Idle);
    /// ```
    #[must_use]
    pub fn new(options: TableOptions, seed: u64) -> Self {
        Self::with_rng(options, ChaCha8Rng::seed_from_u64(seed))
    }

    /// Creates a new table shuffling with `rng`.
    #[must_use]
    pub fn with_rng(options: TableOptions, rng: ChaCha8Rng) -> Self {
        let player = Player::new(options.player_name.clone(), options.starting_chips);
        let dealer = Dealer::new(options.dealer_name.clone());

        Self {
            shoe: Shoe::new(),
            options,
            state: RoundState::Idle,
            player,
            dealer,
            bet: 0,
            hole_revealed: false,
            dealer_played: false,
            outcome: None,
            rng,
        }
    }

    /// Returns the table options.
    #[must_use]
    pub const fn options(&self) -> &TableOptions {
        &self.options
    }

    /// Returns the current round state.
    #[must_use]
    pub const fn state(&self) -> RoundState {
        self.state
    }

    /// Returns the player.
    #[must_use]
    pub const fn player(&self) -> &Player {
        &self.player
    }

    /// Returns the dealer.
    #[must_use]
    pub const fn dealer(&self) -> &Dealer {
        &self.dealer
    }

    /// Returns the player's chip balance.
    #[must_use]
    pub const fn chips(&self) -> usize {
        self.player.chips()
    }

    /// Returns the bet for the current round, zero if none has been placed.
    #[must_use]
    pub const fn bet(&self) -> usize {
        self.bet
    }

    /// Returns whether the player can afford another round.
    #[must_use]
    pub const fn can_play(&self) -> bool {
        self.player.chips() > 0
    }

    /// Returns what the player is allowed to see.
    #[must_use]
    pub fn view(&self) -> TableView<'_> {
        let player_hand = self.player.hand();
        let dealer_cards = self.dealer.hand().cards();

        let visible = if self.hole_revealed {
            dealer_cards
        } else {
            &dealer_cards[..dealer_cards.len().min(1)]
        };
        let dealer_total = if self.hole_revealed {
            self.dealer.hand().total()
        } else {
            visible.iter().map(|card| u16::from(card.value())).sum()
        };

        TableView {
            state: self.state,
            player: HandView {
                name: self.player.name(),
                cards: player_hand.cards(),
                hidden: 0,
                total: player_hand.total(),
            },
            dealer: HandView {
                name: self.dealer.name(),
                cards: visible,
                hidden: dealer_cards.len() - visible.len(),
                total: dealer_total,
            },
            chips: self.player.chips(),
            bet: self.bet,
            outcome: self.outcome,
        }
    }

    /// Clears both hands and the bet and returns the table to `Idle`.
    ///
    /// Chips are untouched, so calling this before settlement abandons the
    /// round without paying or collecting.
    pub fn clear_round(&mut self) {
        self.player.hand_mut().clear();
        self.dealer.hand_mut().clear();
        self.bet = 0;
        self.hole_revealed = false;
        self.dealer_played = false;
        self.outcome = None;
        self.state = RoundState::Idle;
    }

    /// Deals the next card from the shoe to `seat`.
    fn draw_to(&mut self, seat: Seat) -> Result<Card, DealError> {
        let card = self.shoe.deal()?;
        match seat {
            Seat::Player => self.player.hand_mut().add_card(card),
            Seat::Dealer => self.dealer.hand_mut().add_card(card),
        }
        debug!(?seat, %card, remaining = self.shoe.remaining(), "card dealt");
        Ok(card)
    }

    fn set_state(&mut self, state: RoundState) {
        debug!(from = ?self.state, to = ?state, "round state");
        self.state = state;
    }
}
