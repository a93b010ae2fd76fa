//! CLI game of 21 example.

use std::io::{self, Write};
use std::time::{SystemTime, UNIX_EPOCH};

use game21::{Card, Outcome, RoundEngine, Stats, Suit};
use tracing_subscriber::EnvFilter;

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_target(false)
        .init();

    println!("Game of 21 (type 'q' to quit)");

    let seed = std::env::args()
        .nth(1)
        .and_then(|arg| arg.parse::<u64>().ok())
        .unwrap_or_else(|| {
            SystemTime::now()
                .duration_since(UNIX_EPOCH)
                .unwrap_or_default()
                .as_secs()
        });
    let mut engine = RoundEngine::new(seed);
    let mut stats = Stats::new();

    loop {
        engine.new_round();
        engine.deal_initial();

        let Some(outcome) = play_round(&mut engine) else {
            break;
        };

        print_table(&engine);
        println!("{}", colorize(outcome.message(), outcome_color(outcome)));
        stats.record(outcome);
        println!(
            "Wins: {} | Losses: {} | Pushes: {}",
            stats.wins, stats.losses, stats.pushes
        );

        match prompt_line("Play again? (y/n): ").as_str() {
            "" | "y" | "yes" => {}
            _ => break,
        }
    }

    println!("Goodbye.");
}

/// Plays one round to completion; `None` if the player quits.
fn play_round(engine: &mut RoundEngine) -> Option<Outcome> {
    loop {
        print_table(engine);

        if engine.player_total() > 21 {
            return Some(engine.decide_winner());
        }

        match prompt_line("Action: [h]it [s]tand [q]uit: ").as_str() {
            "h" | "hit" => {
                let card = engine.player_hit();
                println!("You draw {}.", format_card(&card));
            }
            "s" | "stand" => {
                engine.reveal_dealer_hole();
                let drawn = engine.play_dealer_turn();
                if !drawn.is_empty() {
                    println!("Dealer draws {} card(s).", drawn.len());
                }
                return Some(engine.decide_winner());
            }
            "q" | "quit" => return None,
            _ => println!("Unknown action."),
        }
    }
}

fn prompt_line(prompt: &str) -> String {
    print!("{prompt}");
    let _ = io::stdout().flush();

    let mut input = String::new();
    if io::stdin().read_line(&mut input).is_err() {
        return String::from("q");
    }
    input.trim().to_lowercase()
}

fn print_table(engine: &RoundEngine) {
    let remaining = engine.cards_remaining();
    println!("\nShoe: {remaining} cards remaining");

    println!(
        "Dealer: {} (value {})",
        format_dealer(engine),
        engine.dealer_visible_total()
    );
    println!(
        "Player: {} (value {})",
        format_cards(engine.player_hand().cards()),
        engine.player_total()
    );
    println!();
}

fn format_dealer(engine: &RoundEngine) -> String {
    let cards = engine.dealer_hand().cards();
    if cards.is_empty() {
        return "(no cards)".to_string();
    }

    if engine.is_hole_revealed() {
        format_cards(cards)
    } else {
        let mut parts = vec!["??".to_string()];
        parts.extend(cards.iter().skip(1).map(format_card));
        parts.join(" ")
    }
}

fn format_cards(cards: &[Card]) -> String {
    if cards.is_empty() {
        return "(empty)".to_string();
    }
    cards.iter().map(format_card).collect::<Vec<_>>().join(" ")
}

fn format_card(card: &Card) -> String {
    let color_code = match card.suit {
        Suit::Hearts | Suit::Diamonds => "31",
        Suit::Clubs | Suit::Spades => "34",
    };
    colorize(&card.to_string(), color_code)
}

const fn outcome_color(outcome: Outcome) -> &'static str {
    if outcome.is_player_win() {
        "32"
    } else if outcome.is_dealer_win() {
        "31"
    } else {
        "33"
    }
}

fn colorize(text: &str, code: &str) -> String {
    format!("\u{1b}[{code}m{text}\u{1b}[0m")
}
