//! The working 52-card sequence and its draw cursor.

use alloc::vec::Vec;

use rand::Rng;
use rand::seq::SliceRandom;

use crate::card::{Card, DECK_SIZE, full_deck};
use crate::error::ShoeError;

/// A single 52-card deck dealt front to back.
///
/// Dealt cards stay in place; the cursor marks the next undealt position.
/// Once every card has been dealt, the next draw regenerates and reshuffles
/// the whole deck instead of failing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Shoe {
    /// All 52 cards, dealt and undealt.
    cards: Vec<Card>,
    /// Index of the next card to deal, in `0..=DECK_SIZE`.
    cursor: usize,
}

impl Shoe {
    /// Creates a freshly shuffled shoe.
    pub fn shuffled<R: Rng + ?Sized>(rng: &mut R) -> Self {
        let mut cards = full_deck();
        cards.shuffle(rng);
        Self { cards, cursor: 0 }
    }

    /// Creates a shoe that deals `prefix` first, followed by the remaining
    /// cards of the deck in canonical order.
    ///
    /// ```
    /// use game21::{Card, Rank, Shoe, Suit};
    ///
    /// let ace = Card::new(Rank::Ace, Suit::Spades);
    /// let shoe = Shoe::stacked(&[ace]).unwrap();
    /// assert_eq!(shoe.cards()[0], ace);
    /// assert_eq!(shoe.remaining(), 52);
    /// ```
    ///
    /// # Errors
    ///
    /// Returns [`ShoeError::DuplicateCard`] if `prefix` repeats a card.
    pub fn stacked(prefix: &[Card]) -> Result<Self, ShoeError> {
        for (index, card) in prefix.iter().enumerate() {
            if prefix[..index].contains(card) {
                return Err(ShoeError::DuplicateCard);
            }
        }

        let mut cards = Vec::with_capacity(DECK_SIZE);
        cards.extend_from_slice(prefix);
        cards.extend(full_deck().into_iter().filter(|card| !prefix.contains(card)));

        Ok(Self { cards, cursor: 0 })
    }

    /// Draws the next card, regenerating the deck first if it is used up.
    pub fn draw<R: Rng + ?Sized>(&mut self, rng: &mut R) -> Card {
        if self.cursor >= self.cards.len() {
            self.regenerate(rng);
        }

        let card = self.cards[self.cursor];
        self.cursor += 1;
        tracing::trace!(%card, cursor = self.cursor, "drew card");
        card
    }

    /// Replaces every card with a fresh shuffled deck and rewinds the cursor.
    pub fn regenerate<R: Rng + ?Sized>(&mut self, rng: &mut R) {
        self.cards = full_deck();
        self.cards.shuffle(rng);
        self.cursor = 0;
        tracing::debug!("shoe exhausted, regenerated and reshuffled");
    }

    /// Returns all cards in deal order.
    #[must_use]
    pub fn cards(&self) -> &[Card] {
        &self.cards
    }

    /// Returns the cards that have already been dealt.
    #[must_use]
    pub fn dealt(&self) -> &[Card] {
        &self.cards[..self.cursor]
    }

    /// Returns the index of the next card to deal.
    #[must_use]
    pub const fn cursor(&self) -> usize {
        self.cursor
    }

    /// Returns the number of undealt cards.
    #[must_use]
    pub fn remaining(&self) -> usize {
        self.cards.len() - self.cursor
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::card::{Rank, Suit};
    use rand::SeedableRng;
    use rand_chacha::ChaCha8Rng;

    #[test]
    fn stacked_rejects_duplicates() {
        let card = Card::new(Rank::Five, Suit::Clubs);
        assert_eq!(
            Shoe::stacked(&[card, card]).unwrap_err(),
            ShoeError::DuplicateCard
        );
    }

    #[test]
    fn stacked_keeps_full_deck() {
        let prefix = [
            Card::new(Rank::King, Suit::Hearts),
            Card::new(Rank::Two, Suit::Spades),
        ];
        let shoe = Shoe::stacked(&prefix).unwrap();
        assert_eq!(shoe.cards().len(), DECK_SIZE);
        assert_eq!(&shoe.cards()[..2], &prefix);
        for card in full_deck() {
            assert_eq!(shoe.cards().iter().filter(|&&c| c == card).count(), 1);
        }
    }

    #[test]
    fn draw_advances_cursor() {
        let mut rng = ChaCha8Rng::seed_from_u64(3);
        let mut shoe = Shoe::shuffled(&mut rng);
        let first = shoe.cards()[0];

        assert_eq!(shoe.draw(&mut rng), first);
        assert_eq!(shoe.cursor(), 1);
        assert_eq!(shoe.dealt(), &[first]);
        assert_eq!(shoe.remaining(), DECK_SIZE - 1);
    }
}
