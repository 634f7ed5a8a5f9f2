//! Game controller: row orchestration, progression and messaging
//!
//! The controller builds every row up front, keeps a single integer pointer
//! to the active one, and drives the submission pipeline. Rows never call
//! back into it: [`Game::submit_active`] returns a [`SubmitOutcome`] telling
//! the caller what happened, including where input focus should move next.

use super::row::GuessRow;
use crate::judge::{Judge, JudgeError, Verdict};
use std::fmt;

const WIN_MESSAGE: &str = "Congratulations ! You found the word, Champ !";
const LOSE_MESSAGE: &str = "Game Over";

/// Game-level progression state
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameStatus {
    InProgress,
    Won,
    Lost,
}

/// Startup or precondition failure in the controller
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GameError {
    /// The attempt budget must be positive
    NoAttempts,
    /// The word length must be positive
    NoLetters,
    /// `display_message` rejects empty text
    EmptyMessage,
}

impl fmt::Display for GameError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NoAttempts => write!(f, "Number of tries must be positive and above 0"),
            Self::NoLetters => write!(f, "Word length must be positive and above 0"),
            Self::EmptyMessage => write!(f, "Message can't be empty"),
        }
    }
}

impl std::error::Error for GameError {}

/// What a submission did to the game
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SubmitOutcome {
    /// No row accepts input (game already over)
    NoActiveRow,
    /// The submission was rejected; the row is unchanged and still active
    Rejected,
    /// The row locked and the next row took over; focus belongs there now
    Advanced { next_row: usize },
    /// The guess was all-correct; the game is won
    Won,
    /// The last row was spent without a win; the game is lost
    Lost,
}

/// One game: an arena of rows, an active-row pointer and a message surface
#[derive(Debug, PartialEq, Eq)]
pub struct Game {
    rows: Vec<GuessRow>,
    active_row_index: Option<usize>,
    status: GameStatus,
    message: String,
    word_length: usize,
}

impl Game {
    /// Create a game with `attempts_total` rows of `word_length` cells
    ///
    /// Row 0 starts active, every other row locked.
    ///
    /// # Errors
    /// Returns `GameError` if either dimension is zero; this is fatal at
    /// startup.
    pub fn new(attempts_total: usize, word_length: usize) -> Result<Self, GameError> {
        if attempts_total == 0 {
            return Err(GameError::NoAttempts);
        }
        if word_length == 0 {
            return Err(GameError::NoLetters);
        }

        let mut rows: Vec<GuessRow> = (0..attempts_total)
            .map(|index| GuessRow::new(index, word_length))
            .collect();
        rows[0].activate();

        Ok(Self {
            rows,
            active_row_index: Some(0),
            status: GameStatus::InProgress,
            message: String::new(),
            word_length,
        })
    }

    #[must_use]
    pub fn status(&self) -> GameStatus {
        self.status
    }

    #[must_use]
    pub fn attempts_total(&self) -> usize {
        self.rows.len()
    }

    #[must_use]
    pub fn word_length(&self) -> usize {
        self.word_length
    }

    #[must_use]
    pub fn rows(&self) -> &[GuessRow] {
        &self.rows
    }

    /// Index of the row currently accepting input, if any
    #[must_use]
    pub fn active_row_index(&self) -> Option<usize> {
        self.active_row_index
    }

    #[must_use]
    pub fn active_row(&self) -> Option<&GuessRow> {
        self.active_row_index.map(|i| &self.rows[i])
    }

    /// Current contents of the message surface
    #[must_use]
    pub fn message(&self) -> &str {
        &self.message
    }

    /// Replace the message surface contents
    ///
    /// # Errors
    /// Returns `GameError::EmptyMessage` for empty text; the surface is left
    /// unchanged.
    pub fn display_message(&mut self, text: &str) -> Result<(), GameError> {
        if text.is_empty() {
            return Err(GameError::EmptyMessage);
        }
        self.message = text.to_string();
        Ok(())
    }

    // Internal messages are known non-empty literals or rendered errors.
    fn set_message(&mut self, text: &str) {
        self.message = text.to_string();
    }

    /// Put a character into a cell of the active row
    ///
    /// Returns false when no row is active or the cell is out of range.
    pub fn type_letter(&mut self, cell: usize, letter: char) -> bool {
        match self.active_row_index {
            Some(i) => self.rows[i].set_letter(cell, letter),
            None => false,
        }
    }

    /// Empty a cell of the active row
    pub fn erase_letter(&mut self, cell: usize) -> bool {
        match self.active_row_index {
            Some(i) => self.rows[i].clear_letter(cell),
            None => false,
        }
    }

    /// Submit the active row's candidate to the judge
    ///
    /// Runs the whole pipeline: local validation, the judge round-trip,
    /// coloring, then win/advance/lose. Every rejection leaves the row
    /// unchanged and active so the player can fix the guess and resubmit.
    ///
    /// The judge call blocks while `self` is mutably borrowed, so the row
    /// cannot be edited or resubmitted mid-flight.
    pub fn submit_active(&mut self, judge: &dyn Judge) -> SubmitOutcome {
        let Some(active) = self.active_row_index else {
            return SubmitOutcome::NoActiveRow;
        };

        let candidate = match self.rows[active].check_candidate() {
            Ok(candidate) => candidate,
            Err(err) => {
                self.set_message(&err.to_string());
                return SubmitOutcome::Rejected;
            }
        };

        let reply = match judge.judge(&candidate) {
            Ok(reply) => reply,
            Err(err) => {
                self.set_message(&err.to_string());
                return SubmitOutcome::Rejected;
            }
        };

        self.set_message(&reply.message);
        if reply.verdict == Verdict::Invalid {
            return SubmitOutcome::Rejected;
        }

        // An "ok" verdict must carry feedback aligned to the row.
        let feedback = match reply.feedback {
            Some(feedback) if feedback.len() == self.word_length => feedback,
            _ => {
                let err = JudgeError::Malformed("feedback missing or misaligned".to_string());
                self.set_message(&err.to_string());
                return SubmitOutcome::Rejected;
            }
        };

        self.rows[active].apply_feedback(&feedback);
        self.rows[active].deactivate();

        if feedback.is_all_correct() {
            self.active_row_index = None;
            self.status = GameStatus::Won;
            self.set_message(WIN_MESSAGE);
            return SubmitOutcome::Won;
        }

        self.advance_row(active)
    }

    // The submitted row is already locked; either hand over to the next row
    // or end the game on the last one.
    fn advance_row(&mut self, submitted: usize) -> SubmitOutcome {
        let next = submitted + 1;
        if next < self.rows.len() {
            self.rows[next].activate();
            self.active_row_index = Some(next);
            SubmitOutcome::Advanced { next_row: next }
        } else {
            self.active_row_index = None;
            self.status = GameStatus::Lost;
            self.set_message(LOSE_MESSAGE);
            SubmitOutcome::Lost
        }
    }
}
