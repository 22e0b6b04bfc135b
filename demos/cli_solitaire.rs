//! CLI poker solitaire example.
//!
//! Set `RUST_LOG=debug` to see engine logs.

use std::io::{self, Write};
use std::time::{SystemTime, UNIX_EPOCH};

use pokersol::{Card, GRID_SIZE, Game, GameOptions, GameState, Suit, SweepResult};

fn main() {
    env_logger::init();
    println!("Poker solitaire CLI example (type 'q' to quit)");

    let seed = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .unwrap_or_default()
        .as_secs();
    let game = Game::new(GameOptions::default(), seed);

    loop {
        print_board(&game);

        if game.state() == GameState::GameOver {
            println!("Game over. High score: {}", game.high_score());
            match prompt_line("Play again? (y/n): ").as_str() {
                "y" | "yes" => {
                    if let Err(err) = game.new_game() {
                        println!("New game error: {err}");
                        break;
                    }
                    continue;
                }
                _ => {
                    println!("Goodbye.");
                    break;
                }
            }
        }

        let Some(next) = game.next_card() else {
            println!("The deck is empty.");
            break;
        };
        println!("Next card: {}", format_card(&next));

        let Some(row) = prompt_index("Row (1-5): ") else {
            break;
        };
        let Some(col) = prompt_index("Column (1-5): ") else {
            break;
        };

        match game.place(row, col) {
            Ok(placement) => {
                if let Some(score) = placement.score {
                    print_scores(&score);
                }
            }
            Err(err) => println!("Cannot place card: {err}"),
        }
    }
}

fn prompt_line(prompt: &str) -> String {
    print!("{prompt}");
    let _ = io::stdout().flush();

    let mut input = String::new();
    if io::stdin().read_line(&mut input).is_err() {
        return String::new();
    }
    input.trim().to_lowercase()
}

/// Reads a 1-based index and returns it 0-based.
fn prompt_index(prompt: &str) -> Option<usize> {
    loop {
        let input = prompt_line(prompt);
        if input == "q" || input == "quit" {
            return None;
        }
        match input.parse::<usize>() {
            Ok(value) if (1..=GRID_SIZE).contains(&value) => return Some(value - 1),
            _ => println!("Please enter a number from 1 to {GRID_SIZE}."),
        }
    }
}

fn print_board(game: &Game) {
    let remaining = game.cards_remaining();
    println!("\nDeck: {remaining} cards remaining");

    let grid = game.grid();
    for row in grid.rows() {
        let cells: Vec<String> = row
            .iter()
            .map(|cell| cell.as_ref().map_or_else(|| " --".to_string(), format_card))
            .collect();
        println!("{}", cells.join(" "));
    }
    println!("Total points: {}\n", game.last_score().total);
}

fn print_scores(score: &SweepResult) {
    for line in &score.lines {
        if line.points > 0 {
            println!("{}", colorize(&line.to_string(), "32"));
        }
    }
}

fn colorize(text: &str, code: &str) -> String {
    format!("\u{1b}[{code}m{text}\u{1b}[0m")
}

fn format_card(card: &Card) -> String {
    let color_code = match card.suit() {
        Suit::Hearts | Suit::Diamonds => "31",
        Suit::Clubs => "32",
        Suit::Spades => "34",
    };
    colorize(&format!("{:>3}", card.short_name()), color_code)
}
