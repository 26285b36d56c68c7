//! Assistant chat transcript model and `/ask` payload.

use std::time::{SystemTime, UNIX_EPOCH};

use serde::Deserialize;
use serde_json::Value;

/// Reply from the question-answering endpoint. The backend answers even its
/// own failures with a payload carrying `error: true` and an apology string.
#[derive(Clone, Debug, Deserialize)]
pub struct AskResponse {
    #[serde(default)]
    pub question: String,
    #[serde(default)]
    pub ticker: Option<String>,
    pub answer: String,
    #[serde(default)]
    pub context: Option<Value>,
    #[serde(default)]
    pub error: Option<bool>,
}

/// Who produced a transcript entry.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ChatRole {
    User,
    Assistant,
    System,
}

/// One entry of the append-only transcript.
#[derive(Clone, Debug)]
pub struct ChatMessage {
    pub role: ChatRole,
    pub text: String,
    /// Local wall-clock time of day (UTC) when the entry was appended.
    pub timestamp: String,
}

impl ChatMessage {
    pub fn user(text: impl Into<String>) -> Self {
        Self::new(ChatRole::User, text)
    }

    pub fn assistant(text: impl Into<String>) -> Self {
        Self::new(ChatRole::Assistant, text)
    }

    pub fn system(text: impl Into<String>) -> Self {
        Self::new(ChatRole::System, text)
    }

    fn new(role: ChatRole, text: impl Into<String>) -> Self {
        Self {
            role,
            text: text.into(),
            timestamp: clock_now(),
        }
    }
}

/// Shown as the assistant's reply when the `/ask` call itself fails.
pub const FALLBACK_APOLOGY: &str =
    "Sorry, I couldn't reach the assistant. Please try again in a moment.";

/// Canned quick questions; `{ticker}` is substituted before sending.
pub const QUICK_QUESTIONS: &[&str] = &[
    "Should I buy, sell, or hold {ticker} right now?",
    "What are the risks of investing in {ticker}?",
    "What could be a realistic price target for {ticker}?",
    "How should I interpret the current volume pattern in {ticker}?",
    "How might recent news affect {ticker}'s stock price?",
];

/// Substitutes the `{ticker}` placeholder in a quick-question template.
pub fn fill_template(template: &str, ticker: &str) -> String {
    template.replace("{ticker}", ticker)
}

/// Formats the current UTC time of day as `HH:MM:SS`.
fn clock_now() -> String {
    let secs = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_secs())
        .unwrap_or(0);
    let day_secs = secs % 86_400;
    format!(
        "{:02}:{:02}:{:02}",
        day_secs / 3_600,
        (day_secs % 3_600) / 60,
        day_secs % 60
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn template_substitution() {
        assert_eq!(
            fill_template(QUICK_QUESTIONS[0], "AAPL"),
            "Should I buy, sell, or hold AAPL right now?"
        );
    }

    #[test]
    fn message_constructors_set_role() {
        assert_eq!(ChatMessage::user("hi").role, ChatRole::User);
        assert_eq!(ChatMessage::assistant("ok").role, ChatRole::Assistant);
        assert_eq!(ChatMessage::system("note").role, ChatRole::System);
    }
}
