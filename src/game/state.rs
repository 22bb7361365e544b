//! Round state types.

/// Where the table is in the current round.
///
/// A round runs `Idle → Betting → Dealing → PlayerTurn → DealerTurn →
/// Settlement → RoundOver`, and [`Table::clear_round`](super::Table::clear_round) returns it
/// to `Idle`. A dealt natural or a player bust jumps straight to `Settlement`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RoundState {
    /// Between rounds.
    Idle,
    /// Shoe shuffled, waiting for a valid bet.
    Betting,
    /// Opening cards are going out.
    Dealing,
    /// Waiting for the player to hit or stand.
    PlayerTurn,
    /// Dealer draws by the house rule.
    DealerTurn,
    /// Hands are final and can be settled.
    Settlement,
    /// Chips have moved; hands are kept for display until cleared.
    RoundOver,
}
