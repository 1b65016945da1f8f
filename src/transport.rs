//! Remote Hangman server contract and its HTTP client.

use crate::error::HangmanError;
use crate::info_log;
use serde::{Deserialize, Serialize};
use std::time::Duration;

pub const DEFAULT_SERVER_URL: &str = "http://netomedia-hangman.herokuapp.com";

const START_NEW_GAME_PATH: &str = "/startNewGame";
const GUESS_PATH: &str = "/guess";
const REQUEST_TIMEOUT_SECS: u64 = 30;

/// Game state returned by every server call.
///
/// ```json
/// { "token": "Gd7iQ4bW05FoSN8kFy6TJ", "hangman": "_o______",
///   "correct": true, "failedAttempts": 2, "gameEnded": false }
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ServerResponse {
    pub token: String,
    pub hangman: String,
    #[serde(default)]
    pub correct: bool,
    #[serde(default)]
    pub failed_attempts: u32,
    #[serde(default)]
    pub game_ended: bool,
}

impl ServerResponse {
    /// # Errors
    ///
    /// Returns `HangmanError::Deserialization` if `body` is not a valid response.
    pub fn from_json(body: &str) -> Result<Self, HangmanError> {
        Ok(serde_json::from_str(body)?)
    }
}

/// One Hangman game session on some server.
pub trait GameTransport {
    fn start_new_game(&mut self) -> Result<ServerResponse, HangmanError>;

    /// Submit a letter or a whole word. `token` comes from the previous response.
    fn guess(&mut self, token: &str, guess: &str) -> Result<ServerResponse, HangmanError>;
}

/// Blocking HTTP client for the Hangman server.
pub struct HttpTransport {
    agent: ureq::Agent,
    base_url: String,
}

impl HttpTransport {
    pub fn new(base_url: &str) -> Self {
        let agent = ureq::AgentBuilder::new()
            .timeout(Duration::from_secs(REQUEST_TIMEOUT_SECS))
            .build();
        Self {
            agent,
            base_url: base_url.trim_end_matches('/').to_string(),
        }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn send(&self, request: ureq::Request) -> Result<ServerResponse, HangmanError> {
        let response = request.set("accept", "application/json").call()?;
        if response.status() != 200 {
            return Err(HangmanError::Transport(format!(
                "HTTP error code: {}",
                response.status()
            )));
        }
        let body = response
            .into_string()
            .map_err(|e| HangmanError::Transport(e.to_string()))?;
        ServerResponse::from_json(&body)
    }
}

impl Default for HttpTransport {
    fn default() -> Self {
        Self::new(DEFAULT_SERVER_URL)
    }
}

impl GameTransport for HttpTransport {
    fn start_new_game(&mut self) -> Result<ServerResponse, HangmanError> {
        let url = format!("{}{START_NEW_GAME_PATH}", self.base_url);
        let response = self.send(self.agent.get(&url))?;
        info_log!("Initialized a new hangman game: {}", response.hangman);
        Ok(response)
    }

    fn guess(&mut self, token: &str, guess: &str) -> Result<ServerResponse, HangmanError> {
        let url = format!("{}{GUESS_PATH}", self.base_url);
        let request = self
            .agent
            .get(&url)
            .query("token", token)
            .query("guess", guess);
        let response = self.send(request)?;
        info_log!("Sent guess '{}', correct={}", guess, response.correct);
        Ok(response)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_server_response() {
        let body = r#"{"token":"Gd7iQ4bW05FoSN8kFy6TJ","hangman":"_o______","correct":true,"failedAttempts":2,"gameEnded":false}"#;
        let response = ServerResponse::from_json(body).unwrap();
        assert_eq!(response.token, "Gd7iQ4bW05FoSN8kFy6TJ");
        assert_eq!(response.hangman, "_o______");
        assert!(response.correct);
        assert_eq!(response.failed_attempts, 2);
        assert!(!response.game_ended);
    }

    #[test]
    fn test_parse_start_response_without_flags() {
        let response = ServerResponse::from_json(r#"{"token":"abc","hangman":"____"}"#).unwrap();
        assert!(!response.correct);
        assert_eq!(response.failed_attempts, 0);
        assert!(!response.game_ended);
    }

    #[test]
    fn test_parse_malformed_body() {
        let result = ServerResponse::from_json("<html>Application Error</html>");
        assert!(matches!(result, Err(HangmanError::Deserialization(_))));

        let result = ServerResponse::from_json(r#"{"hangman":"___"}"#);
        assert!(matches!(result, Err(HangmanError::Deserialization(_))));
    }

    #[test]
    fn test_base_url_trailing_slash_trimmed() {
        let transport = HttpTransport::new("http://localhost:8080/");
        assert_eq!(transport.base_url(), "http://localhost:8080");
        assert_eq!(HttpTransport::default().base_url(), DEFAULT_SERVER_URL);
    }

    #[test]
    fn test_unreachable_server_is_transport_error() {
        // Port 9 (discard) on localhost is expected to refuse connections.
        let mut transport = HttpTransport::new("http://127.0.0.1:9");
        let result = transport.start_new_game();
        assert!(matches!(result, Err(HangmanError::Transport(_))));
    }
}
