use crate::decision::{Action, Decisions, Renderer};
use crate::error::{BetError, RoundError};
use crate::result::RoundResult;

use super::{RoundState, Table};

impl Table {
    /// Plays one full round against a decision source and a renderer.
    ///
    /// Asks for a bet until a valid one is given, deals, lets the player hit
    /// or stand, plays the dealer, settles, and clears the hands. The table is
    /// back to `Idle` afterwards whether or not the round finished.
    ///
    /// A table already in `Betting` (after [`Table::start_round`]) keeps its
    /// shuffled shoe and continues from there.
    ///
    /// # Errors
    ///
    /// Returns [`BetError::NoChips`] without touching the table when the player
    /// has nothing left to bet, [`RoundError::Abandoned`] if the player leaves
    /// instead of betting, or the underlying step error if the table was mid-round or
    /// the shoe ran out.
    ///
    /// # Example
    ///
    /// ```
    /// use bjtable::{Action, Decisions, NoopRenderer, Table, TableOptions, TableView};
    ///
    /// struct Cautious;
    ///
    /// impl Decisions for Cautious {
    ///     fn request_bet(&mut self, _chips: usize) -> Option<i64> {
    ///         Some(10)
    ///     }
    ///
    ///     fn request_action(&mut self, _view: &TableView<'_>) -> Action {
    ///         Action::Stand
    ///     }
    /// }
    ///
    /// let mut table = Table::new(TableOptions::default(), 7);
    /// let result = table.play_round(&mut Cautious, &mut NoopRenderer).unwrap();
    /// assert_eq!(table.chips() as isize, 1000 + result.chip_delta);
    /// ```
    pub fn play_round<D, R>(
        &mut self,
        decisions: &mut D,
        renderer: &mut R,
    ) -> Result<RoundResult, RoundError>
    where
        D: Decisions + ?Sized,
        R: Renderer + ?Sized,
    {
        if !self.can_play() {
            return Err(BetError::NoChips.into());
        }
        match self.state {
            RoundState::Idle => self.start_round()?,
            RoundState::Betting => {}
            _ => return Err(BetError::InvalidState.into()),
        }
        let result = self.run_round(decisions, renderer);
        self.clear_round();
        result
    }

    fn run_round<D, R>(
        &mut self,
        decisions: &mut D,
        renderer: &mut R,
    ) -> Result<RoundResult, RoundError>
    where
        D: Decisions + ?Sized,
        R: Renderer + ?Sized,
    {
        loop {
            let amount = decisions
                .request_bet(self.player.chips())
                .ok_or(RoundError::Abandoned)?;
            match self.place_bet(amount) {
                Ok(_) => break,
                Err(err) if err.is_invalid_bet() => renderer.bet_rejected(&err),
                Err(err) => return Err(err.into()),
            }
        }

        self.deal_rendered(renderer)?;

        while self.state == RoundState::PlayerTurn {
            match decisions.request_action(&self.view()) {
                Action::Hit => {
                    self.hit_rendered(renderer)?;
                }
                Action::Stand => self.stand()?,
            }
        }

        if self.state == RoundState::DealerTurn {
            self.dealer_play_rendered(renderer)?;
        }

        let result = self.settle()?;
        renderer.render(&self.view());

        Ok(result)
    }
}
