//! Round engine integration tests.

use std::collections::HashSet;

use game21::{
    Card, CardError, DECK_SIZE, Outcome, Rank, Role, RoundEngine, SharedEngine, Shoe, ShoeError,
    Stats, Suit, full_deck, hand_total,
};
use rand::RngCore;

fn cards(tokens: &[&str]) -> Vec<Card> {
    tokens.iter().map(|token| token.parse().unwrap()).collect()
}

/// Engine whose shoe deals `tokens` first.
fn scripted(tokens: &[&str]) -> RoundEngine {
    let mut engine = RoundEngine::new(0);
    engine.set_shoe(Shoe::stacked(&cards(tokens)).unwrap());
    engine
}

/// Deterministic stand-in for a real generator.
struct CountingRng(u64);

impl RngCore for CountingRng {
    fn next_u32(&mut self) -> u32 {
        (self.next_u64() >> 32) as u32
    }

    fn next_u64(&mut self) -> u64 {
        self.0 = self.0.wrapping_add(0x9E37_79B9_7F4A_7C15);
        self.0
    }

    fn fill_bytes(&mut self, dst: &mut [u8]) {
        for chunk in dst.chunks_mut(8) {
            let bytes = self.next_u64().to_le_bytes();
            chunk.copy_from_slice(&bytes[..chunk.len()]);
        }
    }
}

#[test]
fn hand_totals_with_aces() {
    assert_eq!(hand_total(&cards(&["A♠", "A♥", "9♣"])), 21);
    assert_eq!(hand_total(&cards(&["A♠", "K♥"])), 21);
    assert_eq!(hand_total(&cards(&["A♠", "9♥"])), 20);
    assert_eq!(hand_total(&cards(&["A♠", "A♥", "A♦", "8♣"])), 21);
    assert_eq!(hand_total(&cards(&["K♠", "A♥", "A♦"])), 12);
    assert_eq!(hand_total(&[]), 0);
}

#[test]
fn ace_order_does_not_matter() {
    let a = cards(&["A♠", "7♥", "A♦", "9♣"]);
    let b = cards(&["9♣", "A♦", "7♥", "A♠"]);
    assert_eq!(hand_total(&a), 18);
    assert_eq!(hand_total(&a), hand_total(&b));
}

#[test]
fn card_values() {
    assert_eq!(RoundEngine::card_value("A♣".parse().unwrap()), 11);
    assert_eq!(RoundEngine::card_value("Q♦".parse().unwrap()), 10);
    assert_eq!(RoundEngine::card_value("10♥".parse().unwrap()), 10);
    assert_eq!(RoundEngine::card_value("7♠".parse().unwrap()), 7);
    assert_eq!(RoundEngine::hand_total(&cards(&["5♠", "6♥"])), 11);
}

#[test]
fn invalid_card_tokens() {
    assert_eq!("0♠".parse::<Card>().unwrap_err(), CardError::InvalidCard);
    assert_eq!("A?".parse::<Card>().unwrap_err(), CardError::InvalidCard);
    assert_eq!(Suit::try_from('x').unwrap_err(), CardError::InvalidCard);
    assert_eq!(Rank::try_from(0).unwrap_err(), CardError::InvalidCard);
}

#[test]
fn fresh_shoe_is_full_deck() {
    let engine = RoundEngine::new(11);
    let shoe = engine.shoe();

    assert_eq!(shoe.cards().len(), DECK_SIZE);
    assert_eq!(shoe.cursor(), 0);

    let unique: HashSet<Card> = shoe.cards().iter().copied().collect();
    let expected: HashSet<Card> = full_deck().into_iter().collect();
    assert_eq!(unique, expected);
}

#[test]
fn shoe_recycles_after_fifty_two_draws() {
    let mut engine = scripted(&[]);

    let drawn: Vec<Card> = (0..DECK_SIZE).map(|_| engine.draw_card()).collect();
    let unique: HashSet<Card> = drawn.iter().copied().collect();
    assert_eq!(unique.len(), DECK_SIZE);
    assert_eq!(engine.cards_remaining(), 0);

    let card = engine.draw_card();
    assert_eq!(engine.shoe().cursor(), 1);
    assert_eq!(engine.shoe().cards()[0], card);
    assert_eq!(engine.cards_remaining(), DECK_SIZE - 1);
    // The stacked shoe was in canonical order; the regenerated one is shuffled.
    assert_ne!(engine.shoe().cards(), full_deck().as_slice());
}

#[test]
fn stacked_shoe_rejects_duplicates() {
    assert_eq!(
        Shoe::stacked(&cards(&["9♠", "9♠"])).unwrap_err(),
        ShoeError::DuplicateCard
    );
}

#[test]
fn deal_initial_order() {
    let mut engine = scripted(&["2♠", "3♠", "4♠", "5♠"]);
    engine.deal_initial();

    assert_eq!(engine.player_hand().cards(), cards(&["2♠", "3♠"]).as_slice());
    assert_eq!(engine.dealer_hand().cards(), cards(&["4♠", "5♠"]).as_slice());
    assert_eq!(engine.player_hand().role(), Role::Player);
    assert_eq!(engine.dealer_hand().role(), Role::Dealer);
    assert!(!engine.is_hole_revealed());
    assert_eq!(engine.cards_remaining(), DECK_SIZE - 4);
}

#[test]
fn hole_card_hidden_from_visible_total() {
    let mut engine = scripted(&["2♠", "3♠", "K♥", "5♣"]);
    engine.deal_initial();

    assert_eq!(engine.dealer_up_card(), Some(&"5♣".parse().unwrap()));
    assert_eq!(engine.dealer_visible_total(), 5);
    assert_eq!(engine.dealer_total(), 15);

    engine.reveal_dealer_hole();
    assert_eq!(engine.dealer_visible_total(), 15);
}

#[test]
fn player_hit_appends_card() {
    let mut engine = scripted(&["K♠", "6♠", "2♥", "3♥", "9♦"]);
    engine.deal_initial();

    let card = engine.player_hit();
    assert_eq!(card, "9♦".parse().unwrap());
    assert_eq!(engine.player_hand().len(), 3);
    assert_eq!(engine.player_total(), 25);
    assert!(engine.player_hand().is_bust());
}

#[test]
fn reveal_is_idempotent() {
    let mut engine = scripted(&["K♠", "6♠", "2♥", "3♥"]);
    engine.deal_initial();

    engine.reveal_dealer_hole();
    let once = (
        engine.is_hole_revealed(),
        engine.dealer_total(),
        engine.dealer_hand().clone(),
    );
    engine.reveal_dealer_hole();
    let twice = (
        engine.is_hole_revealed(),
        engine.dealer_total(),
        engine.dealer_hand().clone(),
    );

    assert_eq!(once, twice);
    assert!(twice.0);
}

#[test]
fn dealer_stands_on_soft_17() {
    let mut engine = scripted(&["K♠", "9♠", "A♥", "6♥"]);
    engine.deal_initial();

    assert!(engine.dealer_hand().is_soft());
    let drawn = engine.play_dealer_turn();
    assert!(drawn.is_empty());
    assert!(engine.is_hole_revealed());
    assert_eq!(engine.dealer_total(), 17);
}

#[test]
fn dealer_draws_until_seventeen() {
    let mut engine = scripted(&["K♠", "9♠", "2♥", "3♥", "4♦", "A♣", "5♦", "9♣"]);
    engine.deal_initial();

    // 5 -> 9 -> 20 (A as 11)
    let drawn = engine.play_dealer_turn();
    assert_eq!(drawn, cards(&["4♦", "A♣"]));
    assert_eq!(engine.dealer_total(), 20);
    assert_eq!(engine.dealer_hand().len(), 4);
}

#[test]
fn dealer_turn_stops_at_seventeen_for_many_shoes() {
    for seed in 0..200 {
        let mut engine = RoundEngine::new(seed);
        engine.deal_initial();
        let drawn = engine.play_dealer_turn();

        let hand = engine.dealer_hand().cards();
        assert!(engine.dealer_total() >= 17, "seed {seed}");
        if !drawn.is_empty() {
            assert!(hand_total(&hand[..hand.len() - 1]) < 17, "seed {seed}");
        }
        assert!(hand.ends_with(&drawn));
    }
}

#[test]
fn hitting_below_21_never_passes_30() {
    for seed in 0..200 {
        let mut engine = RoundEngine::new(seed);
        engine.deal_initial();
        while engine.player_total() < 21 {
            engine.player_hit();
        }
        assert!(engine.player_total() <= 30, "seed {seed}");
    }
}

#[test]
fn both_bust_goes_to_dealer() {
    let mut engine = scripted(&["K♠", "Q♠", "K♥", "3♥", "2♣", "Q♦"]);
    engine.deal_initial();
    engine.player_hit();
    engine.play_dealer_turn();

    assert_eq!(engine.player_total(), 22);
    assert_eq!(engine.dealer_total(), 23);
    let outcome = engine.decide_winner();
    assert_eq!(outcome, Outcome::PlayerBusts);
    assert_eq!(outcome.winner(), Some(Role::Dealer));
    assert_eq!(outcome.to_string(), "Player busts. Dealer wins!");
}

#[test]
fn higher_total_wins() {
    let mut engine = scripted(&["K♠", "Q♠", "K♥", "8♥"]);
    engine.deal_initial();
    engine.reveal_dealer_hole();
    assert!(engine.play_dealer_turn().is_empty());

    assert_eq!(engine.decide_winner(), Outcome::PlayerWins);

    let mut engine = scripted(&["K♠", "7♠", "K♥", "8♥"]);
    engine.deal_initial();
    engine.play_dealer_turn();
    assert_eq!(engine.decide_winner(), Outcome::DealerWins);
}

#[test]
fn equal_totals_push() {
    let mut engine = scripted(&["K♠", "9♠", "K♥", "9♥"]);
    engine.deal_initial();
    engine.play_dealer_turn();

    let outcome = engine.decide_winner();
    assert_eq!(outcome, Outcome::Push);
    assert_eq!(outcome.winner(), None);
}

#[test]
fn dealer_bust_pays_player() {
    let mut engine = scripted(&["K♠", "7♠", "K♥", "6♥", "6♣"]);
    engine.deal_initial();
    engine.play_dealer_turn();

    assert_eq!(engine.player_total(), 17);
    assert_eq!(engine.dealer_total(), 22);
    let outcome = engine.decide_winner();
    assert_eq!(outcome, Outcome::DealerBusts);
    assert!(outcome.is_player_win());
}

#[test]
fn decide_winner_reveals_hole() {
    let mut engine = scripted(&["K♠", "Q♠", "5♥", "2♥", "K♦"]);
    engine.deal_initial();
    engine.player_hit();
    assert!(!engine.is_hole_revealed());

    assert_eq!(engine.decide_winner(), Outcome::PlayerBusts);
    assert!(engine.is_hole_revealed());
    assert_eq!(engine.dealer_hand().len(), 2);
}

#[test]
fn new_round_resets_state() {
    let mut engine = RoundEngine::new(9);
    engine.deal_initial();
    engine.player_hit();
    engine.decide_winner();

    engine.new_round();
    assert!(engine.player_hand().is_empty());
    assert!(engine.dealer_hand().is_empty());
    assert!(!engine.is_hole_revealed());
    assert_eq!(engine.shoe().cursor(), 0);
    assert_eq!(engine.player_total(), 0);
    assert_eq!(engine.dealer_total(), 0);
}

#[test]
fn same_seed_same_rounds() {
    let mut a = RoundEngine::new(1234);
    let mut b = RoundEngine::new(1234);

    for _ in 0..3 {
        a.new_round();
        b.new_round();
        a.deal_initial();
        b.deal_initial();
        assert_eq!(a.player_hand(), b.player_hand());
        assert_eq!(a.dealer_hand(), b.dealer_hand());
    }
}

#[test]
fn injected_rng_drives_shuffle() {
    let mut a = RoundEngine::with_rng(CountingRng(0));
    let mut b = RoundEngine::with_rng(CountingRng(0));
    assert_eq!(a.shoe(), b.shoe());

    a.new_round();
    b.new_round();
    assert_eq!(a.shoe(), b.shoe());
    assert_eq!(a.shoe().cards().len(), DECK_SIZE);
}

#[test]
fn shared_engine_serializes_access() {
    let shared = SharedEngine::new(RoundEngine::new(77));
    shared.with(RoundEngine::deal_initial);

    std::thread::scope(|scope| {
        for _ in 0..4 {
            scope.spawn(|| {
                shared.with(|engine| {
                    engine.draw_card();
                });
            });
        }
    });

    let engine = shared.into_inner();
    assert_eq!(engine.shoe().cursor(), 8);
    assert_eq!(engine.player_hand().len(), 2);
}

#[test]
fn stats_track_outcomes() {
    let mut stats = Stats::new();
    for outcome in [
        Outcome::PlayerBusts,
        Outcome::DealerBusts,
        Outcome::PlayerWins,
        Outcome::DealerWins,
        Outcome::Push,
    ] {
        stats.record(outcome);
    }

    assert_eq!(stats.wins, 2);
    assert_eq!(stats.losses, 2);
    assert_eq!(stats.pushes, 1);
    assert_eq!(stats.rounds(), 5);

    stats.reset();
    assert_eq!(stats, Stats::default());
}
