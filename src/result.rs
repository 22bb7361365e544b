//! Round result types for settlement.

use alloc::vec::Vec;

use crate::card::Card;

/// How a round ended for the player.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    /// Player wins (dealer busts or player has the higher total).
    PlayerWins,
    /// Dealer wins (player busts or dealer has the higher total).
    DealerWins,
    /// Push (tie), no chips move.
    Push,
    /// Player was dealt a natural and is paid before the dealer plays.
    PlayerBlackjack,
}

impl Outcome {
    /// Returns whether the player is paid.
    #[must_use]
    pub const fn player_won(self) -> bool {
        matches!(self, Self::PlayerWins | Self::PlayerBlackjack)
    }

    /// Chip change for a bet of `bet`: `+bet`, `-bet` or `0`.
    #[must_use]
    #[expect(clippy::cast_possible_wrap, reason = "bets fit in isize")]
    pub const fn chip_delta(self, bet: usize) -> isize {
        match self {
            Self::PlayerWins | Self::PlayerBlackjack => bet as isize,
            Self::DealerWins => -(bet as isize),
            Self::Push => 0,
        }
    }

    /// Short message for the outcome.
    #[must_use]
    pub const fn message(self) -> &'static str {
        match self {
            Self::PlayerWins => "Player wins!",
            Self::DealerWins => "Dealer wins!",
            Self::Push => "It's a tie!",
            Self::PlayerBlackjack => "Blackjack! You win!",
        }
    }
}

/// Result of a settled round.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RoundResult {
    /// The outcome.
    pub outcome: Outcome,
    /// The bet that was settled.
    pub bet: usize,
    /// Net chip change applied to the player.
    pub chip_delta: isize,
    /// Player balance after settlement.
    pub chips: usize,
    /// The player's final cards.
    pub player_cards: Vec<Card>,
    /// The player's final total.
    pub player_total: u16,
    /// The dealer's final cards.
    pub dealer_cards: Vec<Card>,
    /// The dealer's final total.
    pub dealer_total: u16,
    /// Whether the player busted.
    pub player_bust: bool,
    /// Whether the dealer busted.
    pub dealer_bust: bool,
    /// Whether the dealer took a turn. False after a player bust or natural.
    pub dealer_played: bool,
}
