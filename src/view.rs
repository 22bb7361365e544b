//! Read-only snapshots of the table handed to renderers and decision sources.

use crate::card::Card;
use crate::game::RoundState;
use crate::result::Outcome;

/// What can be seen of one hand.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HandView<'a> {
    /// Name of the seat holding the hand.
    pub name: &'a str,
    /// Face-up cards.
    pub cards: &'a [Card],
    /// Number of face-down cards following `cards`.
    pub hidden: usize,
    /// Total of the face-up cards.
    pub total: u16,
}

impl HandView<'_> {
    /// Returns whether every card is face up.
    #[must_use]
    pub const fn is_revealed(&self) -> bool {
        self.hidden == 0
    }
}

/// A snapshot of the table.
///
/// Before the dealer turn only the dealer's up-card is visible.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TableView<'a> {
    /// Current round state.
    pub state: RoundState,
    /// The player's hand, fully visible.
    pub player: HandView<'a>,
    /// The dealer's hand.
    pub dealer: HandView<'a>,
    /// Player chip balance.
    pub chips: usize,
    /// Bet for the round, zero before one is placed.
    pub bet: usize,
    /// Outcome once the round is settled.
    pub outcome: Option<Outcome>,
}
