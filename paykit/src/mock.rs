// paykit/src/mock.rs
//
// Fixture data for offline and demo use: a fixed transaction list, a
// keyword-rule chat responder and a backend that answers from both.
//

use async_trait::async_trait;
use serde_json::json;
use tracing::debug;

use crate::api::{DashboardBackend, PaymentRequest};
use crate::errors::Result;
use crate::types::{DashboardStats, Envelope, Transaction, TransactionStatus, TransactionType};

/// Length of the fixture prefix shown as "recent" activity.
pub const RECENT_FIXTURE_LEN: usize = 3;

fn tx(
    id: &str,
    kind: TransactionType,
    amount: f64,
    status: TransactionStatus,
    date: &str,
    recipient: &str,
) -> Transaction {
    Transaction {
        id: id.to_string(),
        date: date.to_string(),
        amount,
        recipient: recipient.to_string(),
        kind,
        status,
    }
}

/// Fixed transaction list, newest first by convention.
pub fn transactions() -> Vec<Transaction> {
    use TransactionStatus::*;
    use TransactionType::*;

    vec![
        tx("TX001", Rent, 600.0, Completed, "2025-11-01", "0xABC...123"),
        tx("TX002", Deposit, 300.0, Pending, "2025-11-05", "0xDEF...456"),
        tx("TX003", Insurance, 150.0, Completed, "2025-10-28", "0xGHI...789"),
        tx("TX004", Transfer, 450.0, Failed, "2025-10-25", "0xJKL...012"),
        tx("TX005", Purchase, 2500.0, Completed, "2025-10-20", "0xMNO...345"),
        tx("TX006", Rent, 600.0, Completed, "2025-10-01", "0xABC...123"),
    ]
}

pub fn recent_transactions() -> Vec<Transaction> {
    transactions().into_iter().take(RECENT_FIXTURE_LEN).collect()
}

/// How a rule's keywords combine.
#[derive(Debug, Clone, Copy)]
pub enum Keywords {
    AllOf(&'static [&'static str]),
    AnyOf(&'static [&'static str]),
}

impl Keywords {
    fn matches(&self, lowered: &str) -> bool {
        match self {
            Keywords::AllOf(words) => words.iter().all(|w| lowered.contains(w)),
            Keywords::AnyOf(words) => words.iter().any(|w| lowered.contains(w)),
        }
    }
}

#[derive(Debug, Clone, Copy)]
pub struct ResponseRule {
    pub keywords: Keywords,
    pub reply: &'static str,
}

pub const RENT_REPLY: &str =
    "✅ Payment scheduled successfully! I'll automatically pay your rent on the 1st of every month.";
pub const CONTRACT_REPLY: &str =
    "✅ Smart contract condition set! I'll transfer 600 USDC once the contract is signed and verified.";
pub const DEPOSIT_REPLY: &str =
    "✅ Deposit payment understood. I'll process the deposit transaction and notify you when complete.";
pub const INSURANCE_REPLY: &str =
    "✅ Insurance payment scheduled. I'll handle the recurring payments automatically.";
pub const BALANCE_REPLY: &str =
    "💵 Your current USDC balance is 1,200 USDC. You have 2 pending transactions totaling 300 USDC.";
pub const STATUS_REPLY: &str =
    "📊 Transaction Status: 4 completed, 1 pending, 1 failed. Would you like details on any specific transaction?";

/// Ordered rule table; the first match wins.
pub const RULES: &[ResponseRule] = &[
    ResponseRule { keywords: Keywords::AllOf(&["rent", "month"]), reply: RENT_REPLY },
    ResponseRule { keywords: Keywords::AllOf(&["transfer", "contract"]), reply: CONTRACT_REPLY },
    ResponseRule { keywords: Keywords::AnyOf(&["deposit"]), reply: DEPOSIT_REPLY },
    ResponseRule { keywords: Keywords::AnyOf(&["insurance"]), reply: INSURANCE_REPLY },
    ResponseRule { keywords: Keywords::AnyOf(&["balance", "how much"]), reply: BALANCE_REPLY },
    ResponseRule { keywords: Keywords::AnyOf(&["status", "transaction"]), reply: STATUS_REPLY },
];

/// Case-insensitive substring matching over `RULES`, with a generic reply
/// echoing the command when nothing matches.
pub fn respond(command: &str) -> String {
    let lowered = command.to_lowercase();
    match RULES.iter().find(|rule| rule.keywords.matches(&lowered)) {
        Some(rule) => rule.reply.to_string(),
        None => format!(
            "✅ Command understood: \"{}\". I'll process this request and notify you once it's complete.",
            command
        ),
    }
}

/// Backend stand-in answering from the fixtures. Payments always succeed.
#[derive(Debug, Clone, Default)]
pub struct MockBackend;

impl MockBackend {
    pub fn new() -> Self {
        Self
    }
}

#[cfg_attr(target_arch = "wasm32", async_trait(?Send))]
#[cfg_attr(not(target_arch = "wasm32"), async_trait)]
impl DashboardBackend for MockBackend {
    async fn dashboard_stats(&self) -> Result<Envelope> {
        Ok(Envelope::ok(serde_json::to_value(DashboardStats::fallback())?))
    }

    async fn recent_transactions(&self, limit: usize) -> Result<Envelope> {
        let rows: Vec<Transaction> = transactions().into_iter().take(limit).collect();
        Ok(Envelope::ok(serde_json::to_value(rows)?))
    }

    async fn send_payment(&self, request: &PaymentRequest) -> Result<Envelope> {
        debug!(
            "Mock payment of {} to {}",
            request.amount, request.destination_address
        );
        Ok(Envelope::ok(json!({
            "status": "INITIATED",
            "amount": request.amount,
            "destinationAddress": request.destination_address,
        })))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_recent_is_fixture_prefix() {
        let all = transactions();
        let recent = recent_transactions();
        assert_eq!(recent.len(), RECENT_FIXTURE_LEN);
        assert_eq!(recent[..], all[..RECENT_FIXTURE_LEN]);
        assert_eq!(recent[0].id, "TX001");
    }

    #[test]
    fn test_fixture_ids_are_unique() {
        let all = transactions();
        let mut ids: Vec<_> = all.iter().map(|t| t.id.as_str()).collect();
        ids.sort();
        ids.dedup();
        assert_eq!(ids.len(), all.len());
    }

    #[test]
    fn test_rent_and_month_schedules_rent() {
        assert_eq!(respond("Pay RENT on the 1st of every Month"), RENT_REPLY);
    }

    #[test]
    fn test_rent_alone_does_not_match_rent_rule() {
        // "rent" without "month" falls through to the generic reply.
        let reply = respond("pay the rent");
        assert_ne!(reply, RENT_REPLY);
        assert!(reply.contains("\"pay the rent\""));
    }

    #[test]
    fn test_rule_order_is_respected() {
        // Matches both the deposit and the status rules; deposit comes first.
        assert_eq!(respond("deposit transaction status"), DEPOSIT_REPLY);
        assert_eq!(respond("Transfer 600 USDC after contract is signed"), CONTRACT_REPLY);
        assert_eq!(respond("How much do I have?"), BALANCE_REPLY);
        assert_eq!(respond("show pending transactions"), STATUS_REPLY);
        assert_eq!(respond("schedule insurance monthly"), INSURANCE_REPLY);
    }

    #[test]
    fn test_fallback_echoes_command() {
        let reply = respond("Buy Me A Coffee");
        assert_eq!(
            reply,
            "✅ Command understood: \"Buy Me A Coffee\". I'll process this request and notify you once it's complete."
        );
    }

    #[tokio::test]
    async fn test_mock_backend_serves_fixtures() {
        let backend = MockBackend::new();

        let stats = backend.dashboard_stats().await.unwrap();
        assert!(stats.success);
        assert_eq!(stats.data_as::<DashboardStats>(), Some(DashboardStats::fallback()));

        let recent = backend.recent_transactions(2).await.unwrap();
        let rows: Vec<Transaction> = recent.data_as().unwrap();
        assert_eq!(rows.len(), 2);
    }
}
