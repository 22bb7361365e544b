//! The boundary between the round engine and whoever is sitting at the table.
//!
//! A [`Decisions`] source answers the two questions the engine asks, and a
//! [`Renderer`] is told about every change worth showing. Neither is expected
//! to touch the table.

use crate::error::BetError;
use crate::view::TableView;

/// A player decision during the player turn.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    /// Take another card.
    Hit,
    /// Keep the current hand.
    Stand,
}

/// Supplies the player's choices.
pub trait Decisions {
    /// Asks for a bet given the current balance.
    ///
    /// Invalid amounts are rejected and asked for again. Returning `None`
    /// means the player left the table.
    fn request_bet(&mut self, chips: usize) -> Option<i64>;

    /// Asks whether to hit or stand.
    fn request_action(&mut self, view: &TableView<'_>) -> Action;
}

/// Receives table snapshots as the round progresses.
pub trait Renderer {
    /// Called after every dealt card and once more at settlement.
    fn render(&mut self, view: &TableView<'_>);

    /// Called when a bet is rejected, before it is asked for again.
    fn bet_rejected(&mut self, _error: &BetError) {}
}

/// A renderer that ignores everything.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoopRenderer;

impl Renderer for NoopRenderer {
    fn render(&mut self, _view: &TableView<'_>) {}
}

impl<T: Decisions + ?Sized> Decisions for &mut T {
    fn request_bet(&mut self, chips: usize) -> Option<i64> {
        (**self).request_bet(chips)
    }

    fn request_action(&mut self, view: &TableView<'_>) -> Action {
        (**self).request_action(view)
    }
}

impl<T: Renderer + ?Sized> Renderer for &mut T {
    fn render(&mut self, view: &TableView<'_>) {
        (**self).render(view);
    }

    fn bet_rejected(&mut self, error: &BetError) {
        (**self).bet_rejected(error);
    }
}
