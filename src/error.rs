//! Error types for table operations.

use thiserror::Error;

/// Errors that can occur during betting.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum BetError {
    /// Invalid round state for betting.
    #[error("invalid round state for betting")]
    InvalidState,
    /// The player has no chips left to bet.
    #[error("no chips left to bet")]
    NoChips,
    /// Bet amount is zero or negative.
    #[error("bet of {amount} is not positive")]
    NotPositive {
        /// The rejected amount.
        amount: i64,
    },
    /// Bet amount is larger than the chip balance.
    #[error("bet of {amount} exceeds the balance of {chips} chips")]
    ExceedsBalance {
        /// The rejected amount.
        amount: i64,
        /// The balance at the time of the bet.
        chips: usize,
    },
}

impl BetError {
    /// Returns whether the error is about the amount itself and the bet can simply be asked again.
    #[must_use]
    pub const fn is_invalid_bet(&self) -> bool {
        matches!(self, Self::NotPositive { .. } | Self::ExceedsBalance { .. })
    }
}

/// Errors that can occur during dealing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum DealError {
    /// Invalid round state for dealing.
    #[error("invalid round state for dealing")]
    InvalidState,
    /// No bet has been placed.
    #[error("no bet has been placed")]
    NoBet,
    /// Every card in the shoe has been dealt.
    #[error("every card in the shoe has been dealt")]
    ShoeExhausted,
}

/// Errors that can occur when reading a hand.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum HandError {
    /// The index is past the last card.
    #[error("card index {index} out of range for a hand of {len}")]
    OutOfRange {
        /// The requested index.
        index: usize,
        /// Number of cards in the hand.
        len: usize,
    },
}

/// Errors that can occur during player actions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ActionError {
    /// Invalid round state for this action.
    #[error("invalid round state for this action")]
    InvalidState,
    /// Every card in the shoe has been dealt.
    #[error("every card in the shoe has been dealt")]
    ShoeExhausted,
}

/// Errors that can occur during the dealer turn and settlement.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum SettleError {
    /// Invalid round state for this step.
    #[error("invalid round state for settlement")]
    InvalidState,
    /// Every card in the shoe has been dealt.
    #[error("every card in the shoe has been dealt")]
    ShoeExhausted,
}

impl From<DealError> for ActionError {
    fn from(err: DealError) -> Self {
        match err {
            DealError::ShoeExhausted => Self::ShoeExhausted,
            DealError::InvalidState | DealError::NoBet => Self::InvalidState,
        }
    }
}

impl From<DealError> for SettleError {
    fn from(err: DealError) -> Self {
        match err {
            DealError::ShoeExhausted => Self::ShoeExhausted,
            DealError::InvalidState | DealError::NoBet => Self::InvalidState,
        }
    }
}

/// Errors that stop a whole round.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum RoundError {
    /// The player left the table instead of betting.
    #[error("player left the table")]
    Abandoned,
    /// Betting failed.
    #[error(transparent)]
    Bet(#[from] BetError),
    /// Dealing failed.
    #[error(transparent)]
    Deal(#[from] DealError),
    /// A player action failed.
    #[error(transparent)]
    Action(#[from] ActionError),
    /// Dealer play or settlement failed.
    #[error(transparent)]
    Settle(#[from] SettleError),
}
