//! wwwordle
//!
//! Terminal client for a Wordle-style guessing game judged by a remote service.
//! The player fills a fixed grid of letter rows one at a time; each submitted
//! row is scored by the judge and colored from its per-letter feedback.
//!
//! # Quick Start
//!
//! ```rust,no_run
//! use wwwordle::game::Game;
//! use wwwordle::judge::{DEFAULT_API_URL, HttpJudge};
//!
//! let judge = HttpJudge::new(DEFAULT_API_URL);
//! let mut game = Game::new(5, 5).unwrap();
//!
//! // Fill the active row, then submit it for judging.
//! for (i, ch) in "crane".chars().enumerate() {
//!     game.type_letter(i, ch);
//! }
//! let outcome = game.submit_active(&judge);
//! println!("{outcome:?}: {}", game.message());
//! ```

// Core domain types
pub mod core;

// Row and game state machine
pub mod game;

// Remote judge protocol
pub mod judge;

// Command implementations
pub mod commands;

// Terminal output formatting
pub mod output;

// Interactive TUI interface
pub mod interactive;
