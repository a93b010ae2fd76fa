//! A single-player blackjack ("21") round engine with optional `no_std` support.
//!
//! The crate provides a [`RoundEngine`] that owns a 52-card [`Shoe`], the
//! player's and dealer's hands, and the hole-card reveal flag. A presentation
//! layer drives a round by calling the engine's operations in order:
//! deal, let the player hit, play the dealer's turn, then decide the winner.
//!
//! # Example
//!
//! ```
//! use game21::{Outcome, RoundEngine};
//!
//! let mut engine = RoundEngine::new(42);
//! engine.deal_initial();
//!
//! while engine.player_total() < 17 {
//!     engine.player_hit();
//! }
//!
//! if engine.player_total() <= 21 {
//!     engine.reveal_dealer_hole();
//!     engine.play_dealer_turn();
//! }
//!
//! let outcome: Outcome = engine.decide_winner();
//! println!("{outcome}");
//! ```
#![cfg_attr(not(feature = "std"), no_std)]
#![cfg_attr(docsrs, feature(doc_cfg))]

#[cfg(all(not(feature = "std"), not(feature = "alloc")))]
compile_error!(
    "`std` is disabled but `alloc` feature is not enabled. Enable `alloc` or keep `std` enabled."
);

extern crate alloc;

pub mod card;
pub mod error;
pub mod game;
pub mod hand;
pub mod result;
pub mod shoe;
pub mod stats;
mod sync;

// Re-export main types
pub use card::{Card, DECK_SIZE, Rank, Suit, full_deck};
pub use error::{CardError, ShoeError};
pub use game::RoundEngine;
pub use hand::{Hand, Role, card_value, hand_total};
pub use result::Outcome;
pub use shoe::Shoe;
pub use stats::Stats;
pub use sync::SharedEngine;
