//! HTTP implementation of the judge protocol
//!
//! One POST per guess: `{"guess": "<word>"}` out, a [`JudgeReply`] back as
//! JSON. The call blocks for the round-trip; the game is single-threaded so
//! nothing else runs while a guess is being judged.

use super::{Judge, JudgeError, JudgeReply};
use serde::Serialize;

/// Public judging endpoint for the standard game
pub const DEFAULT_API_URL: &str = "https://progweb-wwwordle-api.onrender.com/guess";

#[derive(Serialize)]
struct GuessRequest<'a> {
    guess: &'a str,
}

/// Judge reached over HTTP with JSON payloads
pub struct HttpJudge {
    agent: ureq::Agent,
    url: String,
}

impl HttpJudge {
    /// Create a judge client for the given endpoint
    #[must_use]
    pub fn new(url: impl Into<String>) -> Self {
        Self {
            agent: ureq::agent(),
            url: url.into(),
        }
    }

    /// The endpoint this client posts guesses to
    #[must_use]
    pub fn url(&self) -> &str {
        &self.url
    }
}

impl Judge for HttpJudge {
    fn judge(&self, guess: &str) -> Result<JudgeReply, JudgeError> {
        let response = match self.agent.post(&self.url).send_json(GuessRequest { guess }) {
            Ok(response) => response,
            // The judge may carry its reply on a non-2xx status; still try
            // to decode the body before giving up.
            Err(ureq::Error::Status(_, response)) => response,
            Err(err) => return Err(JudgeError::Transport(err.to_string())),
        };

        response
            .into_json::<JudgeReply>()
            .map_err(|err| JudgeError::Malformed(err.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn request_serializes_to_wire_shape() {
        let body = serde_json::to_string(&GuessRequest { guess: "crane" }).unwrap();
        assert_eq!(body, r#"{"guess":"crane"}"#);
    }

    #[test]
    fn client_keeps_its_endpoint() {
        let judge = HttpJudge::new("http://localhost:9999/guess");
        assert_eq!(judge.url(), "http://localhost:9999/guess");
    }
}
