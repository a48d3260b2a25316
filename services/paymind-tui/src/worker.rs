// services/paymind-tui/src/worker.rs
//
// Background requests. The UI thread never awaits: it hands a Command to the
// worker, which runs it on the tokio runtime and posts an Update back.

use std::sync::Arc;

use paykit::api::DashboardBackend;
use paykit::chat::ChatResponder;
use paykit::pages::chat::PendingSend;
use paykit::pages::dashboard::{
    load_recent, load_stats, refresh_stats, submit_payment, Loaded, PaymentDraft, PaymentOutcome,
};
use paykit::types::{DashboardStats, Transaction};
use tokio::runtime::Handle;
use tokio::sync::mpsc::UnboundedSender;
use tracing::debug;

pub type SharedBackend = Arc<dyn DashboardBackend + Send + Sync>;
pub type SharedResponder = Arc<dyn ChatResponder + Send + Sync>;

#[derive(Debug, Clone, PartialEq)]
pub enum Command {
    LoadStats,
    LoadRecent { limit: usize },
    SendPayment(PaymentDraft),
    Chat(PendingSend),
}

#[derive(Debug)]
pub enum Update {
    Stats(Loaded<DashboardStats>),
    Recent(Loaded<Vec<Transaction>>),
    Payment {
        outcome: PaymentOutcome,
        refreshed: Option<DashboardStats>,
    },
    ChatReply(paykit::Result<String>),
}

pub struct Worker {
    backend: SharedBackend,
    responder: SharedResponder,
    runtime: Handle,
    updates: UnboundedSender<Update>,
}

impl Worker {
    pub fn new(
        backend: SharedBackend,
        responder: SharedResponder,
        runtime: Handle,
        updates: UnboundedSender<Update>,
    ) -> Self {
        Self { backend, responder, runtime, updates }
    }

    /// Each command runs as its own task, so results arrive in completion
    /// order rather than dispatch order.
    pub fn dispatch(&self, command: Command) {
        let backend = Arc::clone(&self.backend);
        let responder = Arc::clone(&self.responder);
        let updates = self.updates.clone();

        self.runtime.spawn(async move {
            let update = execute(command, backend.as_ref(), responder.as_ref()).await;
            if updates.send(update).is_err() {
                debug!("UI closed before update was delivered");
            }
        });
    }
}

pub async fn execute<B, R>(command: Command, backend: &B, responder: &R) -> Update
where
    B: DashboardBackend + ?Sized,
    R: ChatResponder + ?Sized,
{
    match command {
        Command::LoadStats => Update::Stats(load_stats(backend).await),
        Command::LoadRecent { limit } => Update::Recent(load_recent(backend, limit).await),
        Command::SendPayment(draft) => {
            let outcome = submit_payment(backend, &draft).await;
            let refreshed = match outcome {
                PaymentOutcome::Sent => refresh_stats(backend).await,
                PaymentOutcome::Rejected(_) => None,
            };
            Update::Payment { outcome, refreshed }
        }
        Command::Chat(pending) => {
            Update::ChatReply(responder.reply(&pending.message, &pending.history).await)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use paykit::chat::KeywordResponder;
    use paykit::mock::{self, MockBackend};
    use paykit::pages::dashboard::DEFAULT_RECIPIENT;
    use paykit::types::DashboardStats;

    #[tokio::test]
    async fn test_load_commands_against_fixtures() {
        let backend = MockBackend::new();

        match execute(Command::LoadStats, &backend, &KeywordResponder).await {
            Update::Stats(loaded) => assert_eq!(loaded.value, DashboardStats::fallback()),
            other => panic!("unexpected update: {:?}", other),
        }

        match execute(Command::LoadRecent { limit: 3 }, &backend, &KeywordResponder).await {
            Update::Recent(loaded) => assert_eq!(loaded.value, mock::recent_transactions()),
            other => panic!("unexpected update: {:?}", other),
        }
    }

    #[tokio::test]
    async fn test_payment_refreshes_stats_only_when_sent() {
        let backend = MockBackend::new();

        let draft = PaymentDraft {
            recipient: DEFAULT_RECIPIENT.to_string(),
            amount: "25".to_string(),
            note: String::new(),
        };
        match execute(Command::SendPayment(draft), &backend, &KeywordResponder).await {
            Update::Payment { outcome, refreshed } => {
                assert_eq!(outcome, PaymentOutcome::Sent);
                assert!(refreshed.is_some());
            }
            other => panic!("unexpected update: {:?}", other),
        }

        let invalid = PaymentDraft {
            recipient: DEFAULT_RECIPIENT.to_string(),
            amount: "0".to_string(),
            note: String::new(),
        };
        match execute(Command::SendPayment(invalid), &backend, &KeywordResponder).await {
            Update::Payment { outcome, refreshed } => {
                assert!(matches!(outcome, PaymentOutcome::Rejected(_)));
                assert!(refreshed.is_none());
            }
            other => panic!("unexpected update: {:?}", other),
        }
    }

    #[tokio::test]
    async fn test_chat_command_uses_responder() {
        let pending = PendingSend {
            message: "Pay rent monthly".to_string(),
            history: Vec::new(),
        };
        match execute(Command::Chat(pending), &MockBackend::new(), &KeywordResponder).await {
            Update::ChatReply(Ok(reply)) => assert_eq!(reply, mock::RENT_REPLY),
            other => panic!("unexpected update: {:?}", other),
        }
    }
}
