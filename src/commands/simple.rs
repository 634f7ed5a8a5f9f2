//! Simple interactive CLI mode
//!
//! Line-based play without the TUI: one typed candidate per row, submitted
//! to the judge, with the colored result printed after each attempt.

use crate::game::{Game, GameStatus, SubmitOutcome};
use crate::judge::Judge;
use crate::output::{colored_message, colored_row};
use std::io::{self, Write};

/// Run the line-based play mode until the game ends or the player quits
///
/// # Errors
///
/// Returns an error if reading user input or flushing stdout fails.
pub fn run_simple(mut game: Game, judge: &dyn Judge) -> Result<(), String> {
    println!("\n╔══════════════════════════════════════════════════════════════╗");
    println!("║                   wwwordle - Simple Mode                     ║");
    println!("╚══════════════════════════════════════════════════════════════╝\n");

    println!(
        "Guess the {}-letter word. You have {} tries.",
        game.word_length(),
        game.attempts_total()
    );
    println!("Type 'quit' to give up.\n");

    while let Some(active) = game.active_row_index() {
        let prompt = format!("Row {} of {}", active + 1, game.attempts_total());
        let input = get_user_input(&prompt)?;

        match input.as_str() {
            "quit" | "q" | "exit" => {
                println!("\nThanks for playing!\n");
                return Ok(());
            }
            _ => {}
        }

        // Each cell holds one letter; a longer line cannot fit the row.
        if input.chars().count() > game.word_length() {
            println!(
                "{}\n",
                colored_message(
                    &format!(
                        "Answer must be {} letters long, punk !",
                        game.word_length()
                    ),
                    GameStatus::InProgress
                )
            );
            continue;
        }

        for cell in 0..game.word_length() {
            game.erase_letter(cell);
        }
        for (cell, ch) in input.chars().enumerate() {
            game.type_letter(cell, ch);
        }

        match game.submit_active(judge) {
            SubmitOutcome::Rejected => {
                println!("{}\n", colored_message(game.message(), game.status()));
            }
            SubmitOutcome::Advanced { .. } | SubmitOutcome::Won | SubmitOutcome::Lost => {
                println!("\n  {}", colored_row(&game.rows()[active]));
                println!("\n{}\n", colored_message(game.message(), game.status()));
            }
            SubmitOutcome::NoActiveRow => break,
        }
    }

    if game.status() != GameStatus::InProgress {
        println!("  Final board:\n");
        for row in game.rows() {
            println!("  {}", colored_row(row));
        }
        println!();
    }

    Ok(())
}

/// Get user input with a prompt
fn get_user_input(prompt: &str) -> Result<String, String> {
    print!("{prompt}: ");
    io::stdout().flush().map_err(|e| e.to_string())?;

    let mut input = String::new();
    io::stdin()
        .read_line(&mut input)
        .map_err(|e| e.to_string())?;

    Ok(input.trim().to_string())
}
