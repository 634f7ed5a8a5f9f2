//! One guess row: letter cells, lock state, validation and coloring
//!
//! A row holds `word_length` single-letter cells. It starts [`LockState::Locked`]
//! and is activated by the controller when its turn comes; once submitted with
//! a scoreable guess it locks again for good. Editing is only possible while
//! the row is active.

use crate::core::{CandidateError, Feedback, LetterStatus, validate_candidate};

/// Whether a row currently accepts input
///
/// An explicit two-state enum: a row is either the one accepting input or it
/// is not. Both transitions must work (`activate` and `deactivate`).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LockState {
    Locked,
    Active,
}

/// Display color of a judged cell
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CellColor {
    Green,
    Yellow,
    Grey,
}

impl From<LetterStatus> for CellColor {
    fn from(status: LetterStatus) -> Self {
        match status {
            LetterStatus::Correct => Self::Green,
            LetterStatus::Present => Self::Yellow,
            LetterStatus::Absent => Self::Grey,
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
struct Cell {
    letter: Option<char>,
    color: Option<CellColor>,
}

/// One attempt: a fixed-length sequence of letter cells
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GuessRow {
    index: usize,
    word_length: usize,
    cells: Vec<Cell>,
    lock: LockState,
}

impl GuessRow {
    /// Create a locked, empty row at the given position
    #[must_use]
    pub fn new(index: usize, word_length: usize) -> Self {
        Self {
            index,
            word_length,
            cells: vec![Cell::default(); word_length],
            lock: LockState::Locked,
        }
    }

    /// Position of this row in the game's arena (0-based)
    #[must_use]
    pub fn index(&self) -> usize {
        self.index
    }

    #[must_use]
    pub fn word_length(&self) -> usize {
        self.word_length
    }

    #[must_use]
    pub fn lock_state(&self) -> LockState {
        self.lock
    }

    #[must_use]
    pub fn is_active(&self) -> bool {
        self.lock == LockState::Active
    }

    /// Open the row for input
    pub fn activate(&mut self) {
        self.lock = LockState::Active;
    }

    /// Close the row to input
    pub fn deactivate(&mut self) {
        self.lock = LockState::Locked;
    }

    /// Put a character into a cell
    ///
    /// Returns false (and changes nothing) while the row is locked or the
    /// cell index is out of range. Any character is accepted here; validation
    /// happens at submission, so an invalid candidate is representable.
    pub fn set_letter(&mut self, cell: usize, letter: char) -> bool {
        if !self.is_active() || cell >= self.cells.len() {
            return false;
        }
        self.cells[cell].letter = Some(letter);
        true
    }

    /// Empty a cell; returns false while locked or out of range
    pub fn clear_letter(&mut self, cell: usize) -> bool {
        if !self.is_active() || cell >= self.cells.len() {
            return false;
        }
        self.cells[cell].letter = None;
        true
    }

    #[must_use]
    pub fn letter_at(&self, cell: usize) -> Option<char> {
        self.cells.get(cell).and_then(|c| c.letter)
    }

    #[must_use]
    pub fn color_at(&self, cell: usize) -> Option<CellColor> {
        self.cells.get(cell).and_then(|c| c.color)
    }

    /// Concatenate the cell contents in index order
    ///
    /// Empty cells contribute nothing, so a partially filled row yields a
    /// candidate shorter than `word_length`.
    #[must_use]
    pub fn candidate(&self) -> String {
        self.cells.iter().filter_map(|c| c.letter).collect()
    }

    /// Assemble and validate the candidate for submission
    ///
    /// # Errors
    /// Returns `CandidateError` when the candidate contains a non-alphabetic
    /// character or is shorter than the row.
    pub fn check_candidate(&self) -> Result<String, CandidateError> {
        let candidate = self.candidate();
        validate_candidate(&candidate, self.word_length)?;
        Ok(candidate)
    }

    /// Color every cell from position-aligned feedback
    pub fn apply_feedback(&mut self, feedback: &Feedback) {
        for (cell, result) in self.cells.iter_mut().zip(feedback) {
            cell.color = Some(CellColor::from(result.status));
        }
    }
}

/// Key classification for cell-to-cell focus movement
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NavKey {
    /// An alphanumeric character was typed
    Input,
    /// Forward-navigation key (right arrow)
    Forward,
    /// Backward-navigation key (left arrow, backspace)
    Backward,
    /// Anything else
    Other,
}

/// Where focus should move after a key event in a cell
///
/// Typing or a forward key moves to the next cell when one exists; a backward
/// key moves to the previous cell when one exists; otherwise focus stays put
/// (`None`). Advisory UI behavior only — never consulted by validation or
/// submission.
#[must_use]
pub fn navigation_target(current: usize, word_length: usize, key: NavKey) -> Option<usize> {
    match key {
        NavKey::Input | NavKey::Forward => {
            let next = current + 1;
            (next < word_length).then_some(next)
        }
        NavKey::Backward => current.checked_sub(1),
        NavKey::Other => None,
    }
}
