//! Error types for card conversions and shoe construction.
//!
//! None of the engine's round operations can fail; these errors only come from
//! building cards or shoes out of caller-supplied values.

use thiserror::Error;

/// Errors that can occur when converting values into cards.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum CardError {
    /// Rank or suit outside the standard 13×4 domain.
    #[error("invalid card")]
    InvalidCard,
}

/// Errors that can occur when building a shoe.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ShoeError {
    /// The same card appears more than once.
    #[error("card appears more than once in the shoe")]
    DuplicateCard,
}
