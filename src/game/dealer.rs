use alloc::vec::Vec;

use rand::Rng;

use crate::card::Card;
use crate::result::Outcome;

use super::RoundEngine;

/// Dealer stands on this total or higher, soft 17 included.
const DEALER_STANDS_AT: u8 = 17;

impl<R: Rng> RoundEngine<R> {
    /// Dealer plays their hand.
    ///
    /// The dealer reveals the hole card and draws until the total reaches 17
    /// or higher. The dealer stands on every 17, soft 17 included.
    ///
    /// Returns the cards drawn by the dealer (possibly none).
    pub fn play_dealer_turn(&mut self) -> Vec<Card> {
        self.hole_revealed = true;

        let mut drawn_cards = Vec::new();
        while self.dealer_total() < DEALER_STANDS_AT {
            let card = self.draw_card();
            self.dealer_hand.add_card(card);
            drawn_cards.push(card);
        }

        tracing::debug!(
            drawn = drawn_cards.len(),
            dealer_total = self.dealer_total(),
            "dealer turn finished"
        );
        drawn_cards
    }

    /// Decides the round and reveals the hole card.
    ///
    /// Rules are checked in order, first match wins:
    /// 1. Player over 21: [`Outcome::PlayerBusts`], even if the dealer busted too
    /// 2. Dealer over 21: [`Outcome::DealerBusts`]
    /// 3. Higher total wins: [`Outcome::PlayerWins`] or [`Outcome::DealerWins`]
    /// 4. Otherwise [`Outcome::Push`]
    pub fn decide_winner(&mut self) -> Outcome {
        self.hole_revealed = true;

        let player_total = self.player_total();
        let dealer_total = self.dealer_total();

        let outcome = if player_total > 21 {
            Outcome::PlayerBusts
        } else if dealer_total > 21 {
            Outcome::DealerBusts
        } else if player_total > dealer_total {
            Outcome::PlayerWins
        } else if dealer_total > player_total {
            Outcome::DealerWins
        } else {
            Outcome::Push
        };

        tracing::debug!(player_total, dealer_total, ?outcome, "round decided");
        outcome
    }
}
