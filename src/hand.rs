//! Player and dealer hand representations.

extern crate alloc;

use alloc::vec::Vec;

use crate::card::Card;

/// Returns the scoring value of a single card.
///
/// Number cards score their face value, J/Q/K score 10 and an Ace always
/// scores 11 here. See [`hand_total`] for the Ace downgrade.
#[must_use]
pub const fn card_value(card: Card) -> u8 {
    card.rank.value()
}

fn evaluate_cards(cards: &[Card]) -> (u8, bool) {
    let mut value: u8 = 0;
    let mut aces: u8 = 0;

    for card in cards {
        if card.rank.is_ace() {
            aces += 1;
        }
        value = value.saturating_add(card_value(*card));
    }

    while value > 21 && aces > 0 {
        value -= 10;
        aces -= 1;
    }

    let is_soft = aces > 0 && value <= 21;
    (value, is_soft)
}

/// Returns the best total for a set of cards.
///
/// Every Ace starts at 11; while the total is over 21 and an Ace is still
/// counted high, 10 is subtracted. Only the number of Aces matters, so the
/// card order never changes the result. An empty hand totals 0.
///
/// ```
/// use game21::{Card, hand_total};
///
/// let cards: Vec<Card> = ["A♠", "A♥", "9♣"]
///     .iter()
///     .map(|token| token.parse().unwrap())
///     .collect();
/// assert_eq!(hand_total(&cards), 21);
/// ```
#[must_use]
pub fn hand_total(cards: &[Card]) -> u8 {
    evaluate_cards(cards).0
}

/// Which side of the table a hand belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Role {
    /// The player.
    Player,
    /// The dealer.
    Dealer,
}

/// A hand of cards in draw order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Hand {
    /// Owner of the hand.
    role: Role,
    /// Cards in the hand.
    cards: Vec<Card>,
}

impl Hand {
    /// Creates a new empty hand.
    #[must_use]
    pub const fn new(role: Role) -> Self {
        Self {
            role,
            cards: Vec::new(),
        }
    }

    /// Returns who owns the hand.
    #[must_use]
    pub const fn role(&self) -> Role {
        self.role
    }

    /// Adds a card to the hand.
    pub fn add_card(&mut self, card: Card) {
        self.cards.push(card);
    }

    /// Returns the cards in the hand.
    #[must_use]
    pub fn cards(&self) -> &[Card] {
        &self.cards
    }

    /// Calculates the value of the hand.
    #[must_use]
    pub fn total(&self) -> u8 {
        hand_total(&self.cards)
    }

    /// Returns whether the hand is soft (contains an ace counted as 11).
    #[must_use]
    pub fn is_soft(&self) -> bool {
        evaluate_cards(&self.cards).1
    }

    /// Returns whether the hand is bust.
    #[must_use]
    pub fn is_bust(&self) -> bool {
        self.total() > 21
    }

    /// Returns the number of cards in the hand.
    #[must_use]
    pub fn len(&self) -> usize {
        self.cards.len()
    }

    /// Returns whether the hand is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    /// Clears the hand for a new round.
    pub fn clear(&mut self) {
        self.cards.clear();
    }
}
