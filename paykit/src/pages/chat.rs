// paykit/src/pages/chat.rs
//
// Chat page - an append-only transcript seeded with one greeting. A send
// appends the user's message, then exactly one assistant message: the reply
// or a fixed error line. Nothing is edited or removed.
//

use chrono::Utc;

use crate::chat::ChatResponder;
use crate::errors::Result;
use crate::types::{ChatMessage, Sender};

pub const GREETING: &str = "Hello! I'm your PayMind AI assistant. I can help you schedule payments, manage transactions, and automate real estate deals. Try saying something like \"Pay rent on the 1st of every month\" or \"Transfer 600 USDC after contract is signed\".";

pub const CONNECTION_ERROR_TEXT: &str = "Error: Could not connect to AI assistant";

/// Prompts shown next to the transcript, grouped by theme.
pub const EXAMPLE_PROMPTS: &[(&str, &[&str])] = &[
    (
        "Example Commands",
        &["Pay rent on the 1st of every month", "Transfer 600 USDC after contract is signed"],
    ),
    (
        "Query Balance",
        &["What's my current balance?", "Show me pending transactions"],
    ),
    (
        "Smart Automation",
        &["Schedule insurance payment monthly", "Set up automatic deposit transfers"],
    ),
];

/// A send that has been recorded and is waiting for its reply.
#[derive(Debug, Clone, PartialEq)]
pub struct PendingSend {
    pub message: String,
    /// Transcript as it stood before this message.
    pub history: Vec<ChatMessage>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct ChatSession {
    messages: Vec<ChatMessage>,
    pending: bool,
    next_id: u64,
}

impl Default for ChatSession {
    fn default() -> Self {
        Self::new()
    }
}

impl ChatSession {
    pub fn new() -> Self {
        let mut session = Self {
            messages: Vec::new(),
            pending: false,
            next_id: 1,
        };
        session.push(Sender::Assistant, GREETING.to_string());
        session
    }

    fn push(&mut self, sender: Sender, content: String) {
        self.messages.push(ChatMessage {
            id: self.next_id,
            sender,
            content,
            timestamp: Utc::now(),
        });
        self.next_id += 1;
    }

    pub fn messages(&self) -> &[ChatMessage] {
        &self.messages
    }

    pub fn is_pending(&self) -> bool {
        self.pending
    }

    /// Record the user's message. `None` for blank input or while a reply is
    /// still outstanding.
    pub fn begin(&mut self, input: &str) -> Option<PendingSend> {
        if input.trim().is_empty() || self.pending {
            return None;
        }
        let history = self.messages.clone();
        self.push(Sender::User, input.to_string());
        self.pending = true;
        Some(PendingSend {
            message: input.to_string(),
            history,
        })
    }

    /// Append the assistant's side of the exchange.
    pub fn complete(&mut self, reply: Result<String>) {
        let content = match reply {
            Ok(text) => text,
            Err(e) => {
                tracing::warn!("Chat reply failed: {}", e);
                CONNECTION_ERROR_TEXT.to_string()
            }
        };
        self.push(Sender::Assistant, content);
        self.pending = false;
    }

    /// Full round trip through a responder. Returns false if nothing was sent.
    pub async fn send<R: ChatResponder + ?Sized>(&mut self, input: &str, responder: &R) -> bool {
        let Some(pending) = self.begin(input) else {
            return false;
        };
        let reply = responder.reply(&pending.message, &pending.history).await;
        self.complete(reply);
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::chat::KeywordResponder;
    use crate::errors::PayMindError;
    use crate::mock;
    use async_trait::async_trait;

    struct Down;

    #[async_trait]
    impl ChatResponder for Down {
        async fn reply(&self, _message: &str, _history: &[ChatMessage]) -> Result<String> {
            Err(PayMindError::NetworkError("connection refused".to_string()))
        }

        fn name(&self) -> &str {
            "down"
        }
    }

    struct Echo;

    #[async_trait]
    impl ChatResponder for Echo {
        async fn reply(&self, message: &str, history: &[ChatMessage]) -> Result<String> {
            Ok(format!("{} ({} before)", message, history.len()))
        }

        fn name(&self) -> &str {
            "echo"
        }
    }

    #[test]
    fn test_session_starts_with_greeting() {
        let session = ChatSession::new();
        assert_eq!(session.messages().len(), 1);
        assert_eq!(session.messages()[0].sender, Sender::Assistant);
        assert_eq!(session.messages()[0].content, GREETING);
        assert_eq!(session.messages()[0].id, 1);
    }

    #[tokio::test]
    async fn test_send_appends_user_then_reply() {
        let mut session = ChatSession::new();
        assert!(session.send("pay rent every month", &KeywordResponder).await);

        let messages = session.messages();
        assert_eq!(messages.len(), 3);
        assert_eq!(messages[1].sender, Sender::User);
        assert_eq!(messages[1].content, "pay rent every month");
        assert_eq!(messages[2].sender, Sender::Assistant);
        assert_eq!(messages[2].content, mock::RENT_REPLY);
        assert_eq!(
            messages.iter().map(|m| m.id).collect::<Vec<_>>(),
            vec![1, 2, 3]
        );
        assert!(!session.is_pending());
    }

    #[tokio::test]
    async fn test_blank_input_is_ignored() {
        let mut session = ChatSession::new();
        assert!(!session.send("   ", &KeywordResponder).await);
        assert_eq!(session.messages().len(), 1);
    }

    #[tokio::test]
    async fn test_failure_appends_fixed_error_and_keeps_history() {
        let mut session = ChatSession::new();
        session.send("hello", &Echo).await;
        let before: Vec<_> = session.messages().to_vec();

        session.send("anyone there?", &Down).await;
        let messages = session.messages();
        assert_eq!(&messages[..before.len()], &before[..]);
        assert_eq!(messages.last().unwrap().content, CONNECTION_ERROR_TEXT);
    }

    #[tokio::test]
    async fn test_history_excludes_current_message() {
        let mut session = ChatSession::new();
        session.send("first", &Echo).await;
        assert_eq!(session.messages()[2].content, "first (1 before)");
        session.send("second", &Echo).await;
        assert_eq!(session.messages()[4].content, "second (3 before)");
    }

    #[test]
    fn test_second_send_blocked_while_pending() {
        let mut session = ChatSession::new();
        assert!(session.begin("one").is_some());
        assert!(session.begin("two").is_none());
        session.complete(Ok("done".to_string()));
        assert!(session.begin("two").is_some());
    }
}
