//! Round outcome types.

use core::fmt;

use crate::hand::Role;

/// Result of a round once both sides have finished.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Outcome {
    /// Player went over 21; dealer wins even if the dealer also busted.
    PlayerBusts,
    /// Dealer went over 21; player wins.
    DealerBusts,
    /// Player has the higher total.
    PlayerWins,
    /// Dealer has the higher total.
    DealerWins,
    /// Push (tie).
    Push,
}

impl Outcome {
    /// Returns the winning side, or `None` for a push.
    #[must_use]
    pub const fn winner(self) -> Option<Role> {
        match self {
            Self::DealerBusts | Self::PlayerWins => Some(Role::Player),
            Self::PlayerBusts | Self::DealerWins => Some(Role::Dealer),
            Self::Push => None,
        }
    }

    /// Returns whether the player won the round.
    #[must_use]
    pub const fn is_player_win(self) -> bool {
        matches!(self.winner(), Some(Role::Player))
    }

    /// Returns whether the dealer won the round.
    #[must_use]
    pub const fn is_dealer_win(self) -> bool {
        matches!(self.winner(), Some(Role::Dealer))
    }

    /// Returns the message shown to the player.
    #[must_use]
    pub const fn message(self) -> &'static str {
        match self {
            Self::PlayerBusts => "Player busts. Dealer wins!",
            Self::DealerBusts => "Dealer busts. Player wins!",
            Self::PlayerWins => "Player wins!",
            Self::DealerWins => "Dealer wins!",
            Self::Push => "Push (tie).",
        }
    }
}

impl fmt::Display for Outcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.message())
    }
}
