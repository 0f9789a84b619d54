use serde::{Deserialize, Serialize};

use crate::errors::{AppError, AppResult};

pub const MAX_MESSAGE_CHARS: usize = 4000;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    User,
    Assistant,
}

#[derive(Clone, Debug, PartialEq, Eq, Deserialize, Serialize)]
pub struct ConversationMessage {
    pub role: Role,
    pub text: String,
}

impl ConversationMessage {
    pub fn user(text: impl Into<String>) -> Self {
        Self {
            role: Role::User,
            text: text.into(),
        }
    }

    pub fn assistant(text: impl Into<String>) -> Self {
        Self {
            role: Role::Assistant,
            text: text.into(),
        }
    }
}

/// A chat history that always ends with the user's latest message.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct Conversation {
    messages: Vec<ConversationMessage>,
}

impl Conversation {
    pub fn from_messages(messages: Vec<ConversationMessage>) -> AppResult<Self> {
        let last = messages
            .last()
            .ok_or_else(|| AppError::ValidationError("Missing history in request body".to_string()))?;

        if last.role != Role::User {
            return Err(AppError::ValidationError(
                "The last message in history must come from the user".to_string(),
            ));
        }

        for (index, message) in messages.iter().enumerate() {
            if message.text.trim().is_empty() {
                return Err(AppError::ValidationError(format!(
                    "Message {} in history is empty",
                    index
                )));
            }
            if message.text.chars().count() > MAX_MESSAGE_CHARS {
                return Err(AppError::ValidationError(format!(
                    "Message {} in history exceeds {} characters",
                    index, MAX_MESSAGE_CHARS
                )));
            }
        }

        Ok(Self { messages })
    }

    pub fn messages(&self) -> &[ConversationMessage] {
        &self.messages
    }

    pub fn len(&self) -> usize {
        self.messages.len()
    }

    pub fn is_empty(&self) -> bool {
        self.messages.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rejects_empty_history() {
        assert!(matches!(
            Conversation::from_messages(vec![]),
            Err(AppError::ValidationError(_))
        ));
    }

    #[test]
    fn rejects_history_ending_with_assistant() {
        let result = Conversation::from_messages(vec![
            ConversationMessage::user("Oi"),
            ConversationMessage::assistant("Olá!"),
        ]);
        assert!(result.is_err());
    }

    #[test]
    fn rejects_blank_messages() {
        let result = Conversation::from_messages(vec![
            ConversationMessage::assistant("   "),
            ConversationMessage::user("Oi"),
        ]);
        assert!(result.is_err());
    }

    #[test]
    fn role_serializes_lowercase() {
        let json = serde_json::to_string(&ConversationMessage::user("Oi")).unwrap();
        assert_eq!(json, r#"{"role":"user","text":"Oi"}"#);
    }
}
