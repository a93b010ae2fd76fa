//! Win/loss/push counters kept across rounds.

use crate::result::Outcome;

/// Running tally of round outcomes from the player's point of view.
///
/// The engine itself keeps no history; a front end records each decided
/// [`Outcome`] here.
///
/// ```
/// use game21::{Outcome, Stats};
///
/// let mut stats = Stats::new();
/// stats.record(Outcome::DealerBusts);
/// stats.record(Outcome::Push);
/// assert_eq!((stats.wins, stats.losses, stats.pushes), (1, 0, 1));
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Stats {
    /// Rounds the player won.
    pub wins: u32,
    /// Rounds the dealer won.
    pub losses: u32,
    /// Rounds that ended in a push.
    pub pushes: u32,
}

impl Stats {
    /// Creates an empty tally.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            wins: 0,
            losses: 0,
            pushes: 0,
        }
    }

    /// Records one decided round.
    pub const fn record(&mut self, outcome: Outcome) {
        if outcome.is_player_win() {
            self.wins += 1;
        } else if outcome.is_dealer_win() {
            self.losses += 1;
        } else {
            self.pushes += 1;
        }
    }

    /// Returns the number of rounds recorded.
    #[must_use]
    pub const fn rounds(&self) -> u32 {
        self.wins + self.losses + self.pushes
    }

    /// Clears all counters.
    pub const fn reset(&mut self) {
        *self = Self::new();
    }
}
