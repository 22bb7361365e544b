use tracing::debug;

use crate::card::Card;
use crate::decision::{NoopRenderer, Renderer};
use crate::error::ActionError;

use super::{RoundState, Seat, Table};

impl Table {
    /// Player action: Hit (draw a card).
    ///
    /// A bust ends the player turn and skips the dealer: the round moves
    /// straight to settlement.
    ///
    /// # Errors
    ///
    /// Returns an error if it is not the player's turn or the shoe is empty.
    pub fn hit(&mut self) -> Result<Card, ActionError> {
        self.hit_rendered(&mut NoopRenderer)
    }

    pub(super) fn hit_rendered<R: Renderer + ?Sized>(
        &mut self,
        renderer: &mut R,
    ) -> Result<Card, ActionError> {
        if self.state != RoundState::PlayerTurn {
            return Err(ActionError::InvalidState);
        }

        let card = self.draw_to(Seat::Player)?;

        if self.player.hand().is_bust() {
            debug!(total = self.player.hand().total(), "player busted");
            self.set_state(RoundState::Settlement);
        }
        renderer.render(&self.view());

        Ok(card)
    }

    /// Player action: Stand (keep the current hand and hand over to the dealer).
    ///
    /// # Errors
    ///
    /// Returns an error if it is not the player's turn.
    pub fn stand(&mut self) -> Result<(), ActionError> {
        if self.state != RoundState::PlayerTurn {
            return Err(ActionError::InvalidState);
        }

        debug!(total = self.player.hand().total(), "player stands");
        self.hole_revealed = true;
        self.set_state(RoundState::DealerTurn);

        Ok(())
    }
}
