//! A single-table blackjack round engine with optional `no_std` support.
//!
//! The crate provides a [`Table`] that holds the player's chips across rounds
//! and runs each round: betting, the opening deal, the player's hit/stand
//! loop, the dealer's fixed strategy, and settlement. Player choices come in
//! through the [`Decisions`] trait and table snapshots go out through
//! [`Renderer`], so the engine never touches a console.
//!
//! # Example
//!
//! ```no_run
//! use bjtable::{Table, TableOptions};
//!
//! let options = TableOptions::default();
//! let table = Table::new(options, 42);
//! let _ = table;
//! ```
#![cfg_attr(not(feature = "std"), no_std)]
#![cfg_attr(docsrs, feature(doc_cfg))]

#[cfg(all(not(feature = "std"), not(feature = "alloc")))]
compile_error!(
    "`std` is disabled but `alloc` feature is not enabled. Enable `alloc` or keep `std` enabled."
);

extern crate alloc;

pub mod card;
pub mod decision;
pub mod error;
pub mod game;
pub mod hand;
pub mod options;
pub mod player;
pub mod result;
pub mod shoe;
pub mod view;

// Re-export main types
pub use card::{Card, DECK_SIZE, Rank, Suit};
pub use decision::{Action, Decisions, NoopRenderer, Renderer};
pub use error::{ActionError, BetError, DealError, HandError, RoundError, SettleError};
pub use game::{RoundState, Table};
pub use hand::{BLACKJACK, Hand};
pub use options::TableOptions;
pub use player::{DEALER_STANDS_ON, Dealer, Player};
pub use result::{Outcome, RoundResult};
pub use shoe::Shoe;
pub use view::{HandView, TableView};
