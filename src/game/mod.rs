//! Round engine and state management.

use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

use crate::card::Card;
use crate::hand::{self, Hand, Role};
use crate::shoe::Shoe;

mod dealer;

/// A single-player blackjack round engine.
///
/// The engine owns the shoe, both hands, and whether the dealer's hole card
/// (the dealer's first card) has been revealed. Exactly one round is live at
/// a time; [`RoundEngine::new_round`] discards it and starts over. The engine
/// keeps no round-over flag, so callers stop hitting once the winner has been
/// decided.
///
/// The random source is injected: [`RoundEngine::new`] seeds a
/// [`ChaCha8Rng`], and [`RoundEngine::with_rng`] accepts any [`Rng`].
#[derive(Debug, Clone)]
pub struct RoundEngine<R = ChaCha8Rng> {
    /// Cards in the shoe.
    shoe: Shoe,
    /// Player's hand.
    player_hand: Hand,
    /// Dealer's hand; the first card is the hole card.
    dealer_hand: Hand,
    /// Whether the hole card is revealed.
    hole_revealed: bool,
    /// Random number generator used for every shuffle.
    rng: R,
}

impl RoundEngine<ChaCha8Rng> {
    /// Creates an engine with a fresh round, shuffled from the given seed.
    ///
    /// # Example
    ///
    /// ```
    /// use game21::RoundEngine;
    ///
    /// let a = RoundEngine::new(7);
    /// let b = RoundEngine::new(7);
    /// assert_eq!(a.shoe(), b.shoe());
    /// ```
    #[must_use]
    pub fn new(seed: u64) -> Self {
        Self::with_rng(ChaCha8Rng::seed_from_u64(seed))
    }

    /// Returns the scoring value of a card (Ace = 11).
    #[must_use]
    pub const fn card_value(card: Card) -> u8 {
        hand::card_value(card)
    }

    /// Returns the best total for a set of cards.
    #[must_use]
    pub fn hand_total(cards: &[Card]) -> u8 {
        hand::hand_total(cards)
    }
}

impl<R: Rng> RoundEngine<R> {
    /// Creates an engine with a fresh round, shuffled by `rng`.
    pub fn with_rng(mut rng: R) -> Self {
        let shoe = Shoe::shuffled(&mut rng);

        Self {
            shoe,
            player_hand: Hand::new(Role::Player),
            dealer_hand: Hand::new(Role::Dealer),
            hole_revealed: false,
            rng,
        }
    }

    /// Starts a new round: fresh shuffled shoe, empty hands, hole card hidden.
    pub fn new_round(&mut self) {
        self.shoe = Shoe::shuffled(&mut self.rng);
        self.player_hand.clear();
        self.dealer_hand.clear();
        self.hole_revealed = false;
        tracing::debug!("started new round");
    }

    /// Deals two cards to the player, then two to the dealer.
    pub fn deal_initial(&mut self) {
        for _ in 0..2 {
            let card = self.draw_card();
            self.player_hand.add_card(card);
        }
        for _ in 0..2 {
            let card = self.draw_card();
            self.dealer_hand.add_card(card);
        }
        tracing::debug!(
            player_total = self.player_total(),
            dealer_total = self.dealer_total(),
            "dealt initial cards"
        );
    }

    /// Draws the next card from the shoe.
    ///
    /// Never fails: an exhausted shoe is silently regenerated and reshuffled
    /// before the draw.
    pub fn draw_card(&mut self) -> Card {
        self.shoe.draw(&mut self.rng)
    }

    /// Draws one card into the player's hand and returns it.
    ///
    /// Check [`RoundEngine::player_total`] afterwards for a bust.
    pub fn player_hit(&mut self) -> Card {
        let card = self.draw_card();
        self.player_hand.add_card(card);
        tracing::debug!(%card, player_total = self.player_total(), "player hit");
        card
    }

    /// Replaces the shoe, e.g. with a [`Shoe::stacked`] one for a scripted round.
    pub fn set_shoe(&mut self, shoe: Shoe) {
        self.shoe = shoe;
    }
}

impl<R> RoundEngine<R> {
    /// Returns the player's hand total.
    #[must_use]
    pub fn player_total(&self) -> u8 {
        self.player_hand.total()
    }

    /// Returns the dealer's full hand total, hole card included.
    #[must_use]
    pub fn dealer_total(&self) -> u8 {
        self.dealer_hand.total()
    }

    /// Reveals the dealer's hole card. Hands and totals are unchanged.
    pub const fn reveal_dealer_hole(&mut self) {
        self.hole_revealed = true;
    }

    /// Returns the player's hand.
    #[must_use]
    pub const fn player_hand(&self) -> &Hand {
        &self.player_hand
    }

    /// Returns the dealer's hand, including the hole card.
    ///
    /// Hiding the hole card is the caller's job; see
    /// [`RoundEngine::is_hole_revealed`].
    #[must_use]
    pub const fn dealer_hand(&self) -> &Hand {
        &self.dealer_hand
    }

    /// Returns whether the hole card is revealed.
    #[must_use]
    pub const fn is_hole_revealed(&self) -> bool {
        self.hole_revealed
    }

    /// Returns the dealer's face-up card (the second card dealt).
    #[must_use]
    pub fn dealer_up_card(&self) -> Option<&Card> {
        self.dealer_hand.cards().get(1)
    }

    /// Calculates the dealer total a player can see.
    ///
    /// While the hole card is hidden it is left out of the total.
    #[must_use]
    pub fn dealer_visible_total(&self) -> u8 {
        if self.hole_revealed {
            self.dealer_hand.total()
        } else {
            self.dealer_hand
                .cards()
                .get(1..)
                .map_or(0, hand::hand_total)
        }
    }

    /// Returns the shoe.
    #[must_use]
    pub const fn shoe(&self) -> &Shoe {
        &self.shoe
    }

    /// Returns the number of cards left before the shoe is regenerated.
    #[must_use]
    pub fn cards_remaining(&self) -> usize {
        self.shoe.remaining()
    }
}
