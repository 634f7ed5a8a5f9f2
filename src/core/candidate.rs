//! Candidate word validation
//!
//! A candidate is the concatenation of a row's cell contents. Before it is
//! sent to the judge it must be purely alphabetic and exactly one letter per
//! cell. The error messages here are the ones shown to the player verbatim.

use std::fmt;

/// Why a candidate cannot be submitted to the judge
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CandidateError {
    /// The candidate contains a character outside a-z / A-Z
    NonAlphabetic,
    /// The candidate has fewer letters than the row has cells
    TooShort { expected: usize },
}

impl fmt::Display for CandidateError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NonAlphabetic => {
                write!(f, "Answer must contain only letter, fool !")
            }
            Self::TooShort { expected } => {
                write!(f, "Answer must be {expected} letters long, punk !")
            }
        }
    }
}

impl std::error::Error for CandidateError {}

/// Validate a candidate against the row's word length
///
/// The alphabetic check runs first: a candidate that is both short and
/// contains a digit reports the non-alphabetic error. A candidate can never
/// be longer than `word_length` because each cell holds at most one letter.
///
/// # Errors
/// Returns `CandidateError` if the candidate contains a non-alphabetic
/// character or has fewer than `word_length` letters.
///
/// # Examples
/// ```
/// use wwwordle::core::{CandidateError, validate_candidate};
///
/// assert!(validate_candidate("crane", 5).is_ok());
/// assert_eq!(
///     validate_candidate("cr4ne", 5),
///     Err(CandidateError::NonAlphabetic)
/// );
/// assert_eq!(
///     validate_candidate("cat", 5),
///     Err(CandidateError::TooShort { expected: 5 })
/// );
/// ```
pub fn validate_candidate(candidate: &str, word_length: usize) -> Result<(), CandidateError> {
    if !candidate.chars().all(|c| c.is_ascii_alphabetic()) {
        return Err(CandidateError::NonAlphabetic);
    }

    if candidate.len() < word_length {
        return Err(CandidateError::TooShort {
            expected: word_length,
        });
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accepts_full_alphabetic_candidate() {
        assert!(validate_candidate("crane", 5).is_ok());
        assert!(validate_candidate("CRANE", 5).is_ok());
        assert!(validate_candidate("CrAnE", 5).is_ok());
    }

    #[test]
    fn rejects_digits_and_punctuation() {
        assert_eq!(
            validate_candidate("1BCDE", 5),
            Err(CandidateError::NonAlphabetic)
        );
        assert_eq!(
            validate_candidate("cr-ne", 5),
            Err(CandidateError::NonAlphabetic)
        );
        assert_eq!(
            validate_candidate("cran ", 5),
            Err(CandidateError::NonAlphabetic)
        );
    }

    #[test]
    fn rejects_short_candidate() {
        assert_eq!(
            validate_candidate("abc", 5),
            Err(CandidateError::TooShort { expected: 5 })
        );
    }

    #[test]
    fn empty_candidate_is_too_short() {
        assert_eq!(
            validate_candidate("", 5),
            Err(CandidateError::TooShort { expected: 5 })
        );
    }

    #[test]
    fn alphabetic_check_runs_first() {
        // Short and containing a digit: the letter rule wins.
        assert_eq!(
            validate_candidate("a1c", 5),
            Err(CandidateError::NonAlphabetic)
        );
    }

    #[test]
    fn error_messages_are_player_facing() {
        assert_eq!(
            CandidateError::NonAlphabetic.to_string(),
            "Answer must contain only letter, fool !"
        );
        assert_eq!(
            CandidateError::TooShort { expected: 5 }.to_string(),
            "Answer must be 5 letters long, punk !"
        );
    }
}
