use alloc::vec::Vec;

use core::cmp::Ordering;

use tracing::info;

use crate::card::Card;
use crate::decision::{NoopRenderer, Renderer};
use crate::error::SettleError;
use crate::result::{Outcome, RoundResult};

use super::{RoundState, Seat, Table};

impl Table {
    /// Dealer plays their hand by the house rule.
    ///
    /// The dealer draws while below 17 and stands on any 17 or more, soft or
    /// hard. Returns the cards drawn.
    ///
    /// # Errors
    ///
    /// Returns an error if it is not the dealer's turn or the shoe runs out
    /// while the dealer must draw.
    pub fn dealer_play(&mut self) -> Result<Vec<Card>, SettleError> {
        self.dealer_play_rendered(&mut NoopRenderer)
    }

    pub(super) fn dealer_play_rendered<R: Renderer + ?Sized>(
        &mut self,
        renderer: &mut R,
    ) -> Result<Vec<Card>, SettleError> {
        if self.state != RoundState::DealerTurn {
            return Err(SettleError::InvalidState);
        }

        self.hole_revealed = true;
        let mut drawn_cards = Vec::new();

        while self.dealer.should_hit() {
            let card = self.draw_to(Seat::Dealer)?;
            drawn_cards.push(card);
            renderer.render(&self.view());
        }

        self.dealer_played = true;
        self.set_state(RoundState::Settlement);

        Ok(drawn_cards)
    }

    /// Decides the outcome from the final hands.
    fn outcome(&self) -> Outcome {
        let player = self.player.hand();
        let dealer = self.dealer.hand();

        if player.is_blackjack() {
            if self.options.dealer_natural_pushes && dealer.is_blackjack() {
                return Outcome::Push;
            }
            return Outcome::PlayerBlackjack;
        }
        if player.is_bust() {
            return Outcome::DealerWins;
        }
        if dealer.is_bust() {
            return Outcome::PlayerWins;
        }

        match player.total().cmp(&dealer.total()) {
            Ordering::Greater => Outcome::PlayerWins,
            Ordering::Less => Outcome::DealerWins,
            Ordering::Equal => Outcome::Push,
        }
    }

    /// Settles the round and moves chips.
    ///
    /// Wins pay the bet, losses take it, and a push leaves the balance alone.
    /// The hands stay on the table for display until
    /// [`Table::clear_round`].
    ///
    /// # Errors
    ///
    /// Returns an error if the round is not ready to settle.
    pub fn settle(&mut self) -> Result<RoundResult, SettleError> {
        if self.state != RoundState::Settlement {
            return Err(SettleError::InvalidState);
        }

        let outcome = self.outcome();
        let chip_delta = outcome.chip_delta(self.bet);
        self.player.change_chips(chip_delta);
        self.hole_revealed = true;
        self.outcome = Some(outcome);

        let player = self.player.hand();
        let dealer = self.dealer.hand();
        let result = RoundResult {
            outcome,
            bet: self.bet,
            chip_delta,
            chips: self.player.chips(),
            player_cards: player.cards().to_vec(),
            player_total: player.total(),
            dealer_cards: dealer.cards().to_vec(),
            dealer_total: dealer.total(),
            player_bust: player.is_bust(),
            dealer_bust: dealer.is_bust(),
            dealer_played: self.dealer_played,
        };

        info!(
            ?outcome,
            bet = result.bet,
            chip_delta,
            chips = result.chips,
            player_total = result.player_total,
            dealer_total = result.dealer_total,
            "round settled"
        );
        self.set_state(RoundState::RoundOver);

        Ok(result)
    }
}
