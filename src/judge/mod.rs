//! Remote judge protocol
//!
//! The judge is an external oracle: it alone knows the secret word and how to
//! score a guess. The client only speaks its request/reply contract. The
//! [`Judge`] trait is the seam — the game takes any implementation, so tests
//! can script replies without a network.

mod http;

pub use http::{DEFAULT_API_URL, HttpJudge};

use crate::core::Feedback;
use serde::Deserialize;
use std::fmt;

/// Whether the judge accepted the guess for scoring
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Verdict {
    /// The guess was scored; feedback accompanies the reply
    Ok,
    /// The guess is not a word the judge will score
    Invalid,
}

/// A judge reply, as received on the wire
///
/// `feedback` is present (and position-aligned to the guess) only when the
/// verdict is [`Verdict::Ok`].
#[derive(Debug, Clone, Deserialize)]
pub struct JudgeReply {
    #[serde(rename = "status")]
    pub verdict: Verdict,
    pub message: String,
    #[serde(default)]
    pub feedback: Option<Feedback>,
}

/// Failure to obtain a usable reply from the judge
///
/// Always recoverable: the row stays active and the player may resubmit.
/// The `Display` text is shown to the player verbatim.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum JudgeError {
    /// The judge could not be reached at all
    Transport(String),
    /// The judge replied with something the client cannot use
    Malformed(String),
}

impl fmt::Display for JudgeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Transport(detail) => {
                write!(f, "Could not reach the judge ({detail}), try again !")
            }
            Self::Malformed(detail) => {
                write!(f, "The judge sent back gibberish ({detail}), try again !")
            }
        }
    }
}

impl std::error::Error for JudgeError {}

/// Oracle that scores a guess against the secret word
pub trait Judge {
    /// Submit a guess and await the judge's reply
    ///
    /// # Errors
    /// Returns `JudgeError` if the judge cannot be reached or its reply
    /// cannot be decoded.
    fn judge(&self, guess: &str) -> Result<JudgeReply, JudgeError>;
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::LetterStatus;

    #[test]
    fn deserializes_ok_reply_with_feedback() {
        let reply: JudgeReply = serde_json::from_str(
            r#"{
                "status": "ok",
                "message": "Almost there",
                "feedback": [
                    {"letter": "c", "status": "correct"},
                    {"letter": "a", "status": "absent"},
                    {"letter": "t", "status": "present"}
                ]
            }"#,
        )
        .unwrap();

        assert_eq!(reply.verdict, Verdict::Ok);
        assert_eq!(reply.message, "Almost there");
        let feedback = reply.feedback.unwrap();
        assert_eq!(feedback.len(), 3);
        assert_eq!(
            feedback.iter().next().unwrap().status,
            LetterStatus::Correct
        );
    }

    #[test]
    fn deserializes_invalid_reply_without_feedback() {
        let reply: JudgeReply = serde_json::from_str(
            r#"{"status": "invalid", "message": "Not in word list"}"#,
        )
        .unwrap();

        assert_eq!(reply.verdict, Verdict::Invalid);
        assert_eq!(reply.message, "Not in word list");
        assert!(reply.feedback.is_none());
    }

    #[test]
    fn rejects_unknown_verdict() {
        let parsed: Result<JudgeReply, _> =
            serde_json::from_str(r#"{"status": "pending", "message": "wait"}"#);
        assert!(parsed.is_err());
    }

    #[test]
    fn error_messages_are_player_facing() {
        let transport = JudgeError::Transport("connection refused".to_string());
        assert_eq!(
            transport.to_string(),
            "Could not reach the judge (connection refused), try again !"
        );

        let malformed = JudgeError::Malformed("missing feedback".to_string());
        assert_eq!(
            malformed.to_string(),
            "The judge sent back gibberish (missing feedback), try again !"
        );
    }
}
