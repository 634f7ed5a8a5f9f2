//! Core domain types for the guessing game
//!
//! This module contains the fundamental domain types with no I/O: the
//! per-letter feedback returned by the judge, and candidate validation.

mod candidate;
mod feedback;

pub use candidate::{CandidateError, validate_candidate};
pub use feedback::{Feedback, LetterResult, LetterStatus};
