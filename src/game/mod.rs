//! Row and game state machine
//!
//! A [`Game`] owns a fixed arena of [`GuessRow`]s and a single active-row
//! index. Rows are consumed strictly in order: exactly one row accepts input
//! while the game is in progress, and a submitted row never reopens.

mod controller;
mod row;

pub use controller::{Game, GameError, GameStatus, SubmitOutcome};
pub use row::{CellColor, GuessRow, LockState, NavKey, navigation_target};
