// paykit/src/chat.rs
//
// Chat responder strategies. The backend endpoint and the offline keyword
// fixture share one contract and are chosen by configuration, never chained.
//

use async_trait::async_trait;

use crate::api::ApiClient;
use crate::config::ClientConfig;
use crate::errors::Result;
use crate::mock;
use crate::types::ChatMessage;

/// Reply text used when the backend answers without a `reply` field.
pub const NO_REPLY_TEXT: &str = "Error: No response from AI";

#[cfg_attr(target_arch = "wasm32", async_trait(?Send))]
#[cfg_attr(not(target_arch = "wasm32"), async_trait)]
pub trait ChatResponder {
    /// Produce the assistant's reply to `message` given the prior transcript.
    async fn reply(&self, message: &str, history: &[ChatMessage]) -> Result<String>;
    fn name(&self) -> &str;
}

/// Forwards chat messages to `POST /api/chat`.
#[derive(Debug, Clone)]
pub struct BackendResponder {
    client: ApiClient,
}

impl BackendResponder {
    pub fn new(client: ApiClient) -> Self {
        Self { client }
    }
}

#[cfg_attr(target_arch = "wasm32", async_trait(?Send))]
#[cfg_attr(not(target_arch = "wasm32"), async_trait)]
impl ChatResponder for BackendResponder {
    async fn reply(&self, message: &str, history: &[ChatMessage]) -> Result<String> {
        let envelope = self.client.send_chat_message(message, history).await?;
        Ok(envelope
            .field_str("reply")
            .filter(|reply| !reply.is_empty())
            .unwrap_or(NO_REPLY_TEXT)
            .to_string())
    }

    fn name(&self) -> &str {
        "backend"
    }
}

/// Offline fixture: canned replies picked by keyword rules.
#[derive(Debug, Clone, Default)]
pub struct KeywordResponder;

#[cfg_attr(target_arch = "wasm32", async_trait(?Send))]
#[cfg_attr(not(target_arch = "wasm32"), async_trait)]
impl ChatResponder for KeywordResponder {
    async fn reply(&self, message: &str, _history: &[ChatMessage]) -> Result<String> {
        Ok(mock::respond(message))
    }

    fn name(&self) -> &str {
        "keyword-fixture"
    }
}

/// Responder selected by configuration.
pub fn responder_for(config: &ClientConfig) -> Box<dyn ChatResponder> {
    if config.offline {
        Box::new(KeywordResponder)
    } else {
        Box::new(BackendResponder::new(ApiClient::from_config(config)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_keyword_responder_uses_rules() {
        let reply = KeywordResponder.reply("pay rent every month", &[]).await.unwrap();
        assert_eq!(reply, mock::RENT_REPLY);
    }

    #[test]
    fn test_selection_follows_offline_flag() {
        let offline = ClientConfig {
            offline: true,
            ..ClientConfig::default()
        };
        assert_eq!(responder_for(&offline).name(), "keyword-fixture");
        assert_eq!(responder_for(&ClientConfig::default()).name(), "backend");
    }
}
