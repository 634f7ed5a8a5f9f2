//! Per-letter feedback for a judged guess
//!
//! The judge scores a guess letter by letter: `Correct` (right letter, right
//! position), `Present` (right letter, wrong position) or `Absent`. A
//! [`Feedback`] is the full position-aligned sequence for one submitted row.

use serde::Deserialize;

/// Correctness of a single letter in a judged guess
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LetterStatus {
    Correct,
    Present,
    Absent,
}

/// One letter of a judged guess, aligned to its position in the row
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
pub struct LetterResult {
    /// The guessed letter this entry scores
    #[serde(alias = "character")]
    pub letter: char,
    pub status: LetterStatus,
}

/// Position-aligned feedback for one submitted guess
///
/// Present only on an `ok` judge reply, with one entry per letter cell.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(transparent)]
pub struct Feedback(Vec<LetterResult>);

impl Feedback {
    #[must_use]
    pub fn new(results: Vec<LetterResult>) -> Self {
        Self(results)
    }

    /// Number of scored letters
    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Iterate over the per-letter results in row order
    pub fn iter(&self) -> std::slice::Iter<'_, LetterResult> {
        self.0.iter()
    }

    /// True when every letter is `Correct` — the winning condition
    #[must_use]
    pub fn is_all_correct(&self) -> bool {
        !self.0.is_empty()
            && self
                .0
                .iter()
                .all(|result| result.status == LetterStatus::Correct)
    }
}

impl<'a> IntoIterator for &'a Feedback {
    type Item = &'a LetterResult;
    type IntoIter = std::slice::Iter<'a, LetterResult>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn result(letter: char, status: LetterStatus) -> LetterResult {
        LetterResult { letter, status }
    }

    #[test]
    fn all_correct_wins() {
        let feedback = Feedback::new(vec![
            result('c', LetterStatus::Correct),
            result('a', LetterStatus::Correct),
            result('t', LetterStatus::Correct),
        ]);
        assert!(feedback.is_all_correct());
    }

    #[test]
    fn mixed_feedback_is_not_a_win() {
        let feedback = Feedback::new(vec![
            result('c', LetterStatus::Correct),
            result('a', LetterStatus::Present),
            result('t', LetterStatus::Absent),
        ]);
        assert!(!feedback.is_all_correct());
    }

    #[test]
    fn empty_feedback_is_not_a_win() {
        assert!(!Feedback::new(vec![]).is_all_correct());
    }

    #[test]
    fn deserializes_wire_entries() {
        let feedback: Feedback = serde_json::from_str(
            r#"[
                {"letter": "c", "status": "correct"},
                {"letter": "a", "status": "present"},
                {"letter": "t", "status": "absent"}
            ]"#,
        )
        .unwrap();

        assert_eq!(feedback.len(), 3);
        let statuses: Vec<LetterStatus> = feedback.iter().map(|r| r.status).collect();
        assert_eq!(
            statuses,
            vec![
                LetterStatus::Correct,
                LetterStatus::Present,
                LetterStatus::Absent
            ]
        );
    }

    #[test]
    fn deserializes_character_field_alias() {
        let entry: LetterResult =
            serde_json::from_str(r#"{"character": "z", "status": "absent"}"#).unwrap();
        assert_eq!(entry.letter, 'z');
        assert_eq!(entry.status, LetterStatus::Absent);
    }

    #[test]
    fn rejects_unknown_status() {
        let parsed: Result<LetterResult, _> =
            serde_json::from_str(r#"{"letter": "c", "status": "maybe"}"#);
        assert!(parsed.is_err());
    }
}
