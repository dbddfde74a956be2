use deepfake_core::{FILE_HASH_MARKER, Message};
use serde::{Deserialize, Serialize};

/// Keywords that request an analysis, matched case-insensitively.
pub const ANALYSIS_KEYWORDS: [&str; 3] = ["analyze", "detect", FILE_HASH_MARKER];

/// How a turn is answered.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Intent {
    /// Nothing has been said yet.
    Welcome,
    /// Run the mock analyzer and reply with a report.
    Analyze,
    /// Hand the conversation to the completion service.
    Converse,
}

/// Classify a conversation by its most recent message only.
pub fn classify(messages: &[Message]) -> Intent {
    match messages.last() {
        None => Intent::Welcome,
        Some(last) => classify_text(&last.content),
    }
}

/// Classify a single message text.
pub fn classify_text(text: &str) -> Intent {
    let lowered = text.to_lowercase();
    if ANALYSIS_KEYWORDS.iter().any(|kw| lowered.contains(kw)) {
        Intent::Analyze
    } else {
        Intent::Converse
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_history_is_welcome() {
        assert_eq!(classify(&[]), Intent::Welcome);
    }

    #[test]
    fn keywords_match_any_case() {
        assert_eq!(classify_text("ANALYZE this"), Intent::Analyze);
        assert_eq!(classify_text("can you Detect fakes?"), Intent::Analyze);
        assert_eq!(classify_text("File_Hash: abc"), Intent::Analyze);
        assert_eq!(classify_text("reanalyzed"), Intent::Analyze);
    }

    #[test]
    fn plain_text_is_conversation() {
        assert_eq!(classify_text("hello there"), Intent::Converse);
        assert_eq!(classify_text(""), Intent::Converse);
        assert_eq!(classify_text("file hash abc"), Intent::Converse);
    }

    #[test]
    fn only_last_message_counts() {
        let history = vec![
            Message::user("analyze file_hash: abc12345"),
            Message::assistant("report"),
            Message::user("thanks!"),
        ];
        assert_eq!(classify(&history), Intent::Converse);

        let history = vec![Message::user("hi"), Message::user("please detect")];
        assert_eq!(classify(&history), Intent::Analyze);
    }

    #[test]
    fn last_message_role_is_ignored() {
        let history = vec![Message::system("analyze everything")];
        assert_eq!(classify(&history), Intent::Analyze);
    }

    #[test]
    fn runtime_specific_roles_route_by_content() {
        let history = vec![
            Message::user("hello"),
            Message::new("tool", "detect file_hash: abc12345"),
        ];
        assert_eq!(classify(&history), Intent::Analyze);

        let history = vec![Message::new("agent", "just chatting")];
        assert_eq!(classify(&history), Intent::Converse);
    }
}
