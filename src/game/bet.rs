use tracing::{debug, warn};

use crate::decision::{NoopRenderer, Renderer};
use crate::error::{BetError, DealError};

use super::{RoundState, Seat, Table};

/// Cards needed for the opening deal.
const INITIAL_CARDS: usize = 4;

impl Table {
    /// Starts a round: shuffles the shoe and opens betting.
    ///
    /// # Errors
    ///
    /// Returns an error unless the table is `Idle`.
    pub fn start_round(&mut self) -> Result<(), BetError> {
        if self.state != RoundState::Idle {
            return Err(BetError::InvalidState);
        }

        self.shoe.shuffle(&mut self.rng);
        debug!(chips = self.player.chips(), "round started");
        self.set_state(RoundState::Betting);

        Ok(())
    }

    /// Places the bet for the round, returning the accepted amount.
    ///
    /// A later call in the same betting phase replaces the bet.
    ///
    /// # Errors
    ///
    /// Returns an error if the table is not in betting state, the amount is
    /// not positive, or it exceeds the player's chips.
    pub fn place_bet(&mut self, amount: i64) -> Result<usize, BetError> {
        if self.state != RoundState::Betting {
            return Err(BetError::InvalidState);
        }

        let chips = self.player.chips();
        let bet = if amount <= 0 {
            Err(BetError::NotPositive { amount })
        } else {
            usize::try_from(amount)
                .ok()
                .filter(|&bet| bet <= chips)
                .ok_or(BetError::ExceedsBalance { amount, chips })
        }
        .inspect_err(|err| warn!(amount, chips, %err, "bet rejected"))?;

        self.bet = bet;
        debug!(bet, chips, "bet placed");

        Ok(bet)
    }

    /// Deals two cards each, alternating player and dealer.
    ///
    /// If the player is dealt a natural the round goes straight to
    /// settlement; otherwise it is the player's turn.
    ///
    /// # Errors
    ///
    /// Returns an error if the table is not in betting state, no bet has been
    /// placed, or the shoe cannot cover the deal.
    pub fn deal(&mut self) -> Result<(), DealError> {
        self.deal_rendered(&mut NoopRenderer)
    }

    pub(super) fn deal_rendered<R: Renderer + ?Sized>(
        &mut self,
        renderer: &mut R,
    ) -> Result<(), DealError> {
        if self.state != RoundState::Betting {
            return Err(DealError::InvalidState);
        }
        if self.bet == 0 {
            return Err(DealError::NoBet);
        }
        if self.shoe.remaining() < INITIAL_CARDS {
            return Err(DealError::ShoeExhausted);
        }

        self.set_state(RoundState::Dealing);
        for seat in [Seat::Player, Seat::Dealer, Seat::Player, Seat::Dealer] {
            self.draw_to(seat)?;
            renderer.render(&self.view());
        }

        if self.player.hand().is_blackjack() {
            debug!("player dealt a natural");
            self.set_state(RoundState::Settlement);
        } else {
            self.set_state(RoundState::PlayerTurn);
        }

        Ok(())
    }
}
