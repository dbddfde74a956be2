use std::fmt;

use serde::{Deserialize, Deserializer, Serialize, Serializer};

/// Role tag of a conversation entry.
///
/// The hosting runtime owns the tag vocabulary; tags other than the three
/// chat roles are kept verbatim in [`Role::Other`].
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Role {
    /// Instruction that frames the assistant's behaviour.
    System,
    /// Text typed by the person talking to the agent.
    User,
    /// Text produced by the agent.
    Assistant,
    /// Any other tag, such as `tool`.
    Other(String),
}

impl Role {
    /// Wire name used by chat completion APIs.
    pub fn as_str(&self) -> &str {
        match self {
            Self::System => "system",
            Self::User => "user",
            Self::Assistant => "assistant",
            Self::Other(tag) => tag,
        }
    }
}

impl From<&str> for Role {
    fn from(tag: &str) -> Self {
        match tag {
            "system" => Self::System,
            "user" => Self::User,
            "assistant" => Self::Assistant,
            other => Self::Other(other.to_owned()),
        }
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl Serialize for Role {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_str())
    }
}

impl<'de> Deserialize<'de> for Role {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let tag = String::deserialize(deserializer)?;
        Ok(Self::from(tag.as_str()))
    }
}

/// A single entry of the conversation history, oldest first.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Message {
    pub role: Role,
    /// Missing content is treated as empty text.
    #[serde(default)]
    pub content: String,
}

impl Message {
    pub fn new(role: impl Into<Role>, content: impl Into<String>) -> Self {
        Self {
            role: role.into(),
            content: content.into(),
        }
    }

    pub fn system(content: impl Into<String>) -> Self {
        Self::new(Role::System, content)
    }

    pub fn user(content: impl Into<String>) -> Self {
        Self::new(Role::User, content)
    }

    pub fn assistant(content: impl Into<String>) -> Self {
        Self::new(Role::Assistant, content)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn roles_serialize_lowercase() {
        let msg = Message::user("hi");
        let json = serde_json::to_value(&msg).unwrap();
        assert_eq!(json, serde_json::json!({"role": "user", "content": "hi"}));
    }

    #[test]
    fn missing_content_defaults_to_empty() {
        let msg: Message = serde_json::from_str(r#"{"role": "assistant"}"#).unwrap();
        assert_eq!(msg, Message::assistant(""));
    }

    #[test]
    fn role_display_matches_wire_name() {
        assert_eq!(Role::System.to_string(), "system");
        assert_eq!(Role::Assistant.as_str(), "assistant");
    }

    #[test]
    fn unknown_tags_are_kept_verbatim() {
        let msg: Message =
            serde_json::from_str(r#"{"role": "tool", "content": "analyze"}"#).unwrap();
        assert_eq!(msg.role, Role::Other("tool".to_owned()));
        assert_eq!(
            serde_json::to_value(&msg).unwrap(),
            serde_json::json!({"role": "tool", "content": "analyze"})
        );
    }

    #[test]
    fn known_tags_map_to_named_roles() {
        assert_eq!(Role::from("system"), Role::System);
        assert_eq!(Role::from("user"), Role::User);
        assert_eq!(Role::from("Agent"), Role::Other("Agent".to_owned()));
    }
}
