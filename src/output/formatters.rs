//! Colored row and message rendering for the plain CLI mode

use crate::game::{CellColor, GameStatus, GuessRow};
use colored::Colorize;

/// Render one row as colored cells
///
/// Judged cells take their feedback color as background; unjudged cells show
/// the letter (or a dot placeholder) without coloring.
#[must_use]
pub fn colored_row(row: &GuessRow) -> String {
    let mut out = String::new();
    for cell in 0..row.word_length() {
        let letter = row
            .letter_at(cell)
            .map_or_else(|| " . ".to_string(), |ch| format!(" {} ", ch.to_ascii_uppercase()));

        let painted = match row.color_at(cell) {
            Some(CellColor::Green) => letter.black().on_green().bold().to_string(),
            Some(CellColor::Yellow) => letter.black().on_yellow().bold().to_string(),
            Some(CellColor::Grey) => letter.white().on_bright_black().to_string(),
            None => letter.bold().to_string(),
        };
        out.push_str(&painted);
    }
    out
}

/// Style a controller message according to the game state
#[must_use]
pub fn colored_message(message: &str, status: GameStatus) -> String {
    match status {
        GameStatus::Won => message.bright_green().bold().to_string(),
        GameStatus::Lost => message.bright_red().bold().to_string(),
        GameStatus::InProgress => message.bright_yellow().to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{Feedback, LetterResult, LetterStatus};

    #[test]
    fn colored_row_shows_every_cell() {
        colored::control::set_override(false);

        let mut row = GuessRow::new(0, 3);
        row.activate();
        row.set_letter(0, 'c');
        row.set_letter(2, 't');

        assert_eq!(colored_row(&row), " C  .  T ");
    }

    #[test]
    fn judged_row_keeps_letters_visible() {
        colored::control::set_override(false);

        let mut row = GuessRow::new(0, 3);
        row.activate();
        for (i, ch) in "cat".chars().enumerate() {
            row.set_letter(i, ch);
        }
        row.apply_feedback(&Feedback::new(vec![
            LetterResult {
                letter: 'c',
                status: LetterStatus::Correct,
            },
            LetterResult {
                letter: 'a',
                status: LetterStatus::Present,
            },
            LetterResult {
                letter: 't',
                status: LetterStatus::Absent,
            },
        ]));

        assert_eq!(colored_row(&row), " C  A  T ");
    }
}
