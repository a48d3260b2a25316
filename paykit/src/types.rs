// paykit/src/types.rs
//
// Domain records shared by every page: the user profile, transaction rows,
// chat messages and the backend's response envelope.
//

use std::fmt;
use std::str::FromStr;

use chrono::{DateTime, Utc};
use rand::Rng;
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};

use crate::errors::{PayMindError, Result};

pub const DEMO_NAME: &str = "John Doe";
pub const DEMO_EMAIL: &str = "john@paymind.io";
pub const DEMO_WALLET: &str = "0x742d35Cc6634C0532925a3b844Bc9e7595f0bEb";
pub const DEFAULT_BALANCE: f64 = 1200.0;
pub const DEFAULT_LANGUAGE: &str = "English";

/// Languages offered by the profile settings page.
pub const SUPPORTED_LANGUAGES: [&str; 4] = ["English", "Spanish", "French", "German"];

/// The single persisted user record.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct UserProfile {
    pub name: String,
    pub email: String,
    pub wallet: String,
    pub balance: f64,
    pub notifications: bool,
    pub language: String,
}

impl Default for UserProfile {
    fn default() -> Self {
        Self {
            name: DEMO_NAME.to_string(),
            email: DEMO_EMAIL.to_string(),
            wallet: DEMO_WALLET.to_string(),
            balance: DEFAULT_BALANCE,
            notifications: true,
            language: DEFAULT_LANGUAGE.to_string(),
        }
    }
}

impl UserProfile {
    /// Profile for an e-mail login: display name from the capitalised local
    /// part, a freshly generated wallet identifier, default preferences.
    pub fn for_email(email: &str) -> Result<Self> {
        let email = email.trim();
        let local = match email.split_once('@') {
            Some((local, domain)) if !local.is_empty() && !domain.is_empty() => local,
            _ => {
                return Err(PayMindError::ValidationError(format!(
                    "'{}' is not a valid e-mail address",
                    email
                )))
            }
        };

        let mut chars = local.chars();
        let name = match chars.next() {
            Some(first) => first.to_uppercase().chain(chars).collect(),
            None => String::new(),
        };

        Ok(Self {
            name,
            email: email.to_string(),
            wallet: random_wallet_address(),
            ..Self::default()
        })
    }
}

fn random_wallet_address() -> String {
    let mut rng = rand::thread_rng();
    let hex: String = (0..40)
        .map(|_| char::from_digit(rng.gen_range(0..16), 16).unwrap_or('0'))
        .collect();
    format!("0x{}", hex)
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum TransactionType {
    Rent,
    Purchase,
    Deposit,
    Insurance,
    Transfer,
}

impl TransactionType {
    pub const ALL: [TransactionType; 5] = [
        TransactionType::Rent,
        TransactionType::Purchase,
        TransactionType::Deposit,
        TransactionType::Insurance,
        TransactionType::Transfer,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            TransactionType::Rent => "Rent",
            TransactionType::Purchase => "Purchase",
            TransactionType::Deposit => "Deposit",
            TransactionType::Insurance => "Insurance",
            TransactionType::Transfer => "Transfer",
        }
    }
}

impl fmt::Display for TransactionType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for TransactionType {
    type Err = PayMindError;

    fn from_str(s: &str) -> Result<Self> {
        TransactionType::ALL
            .into_iter()
            .find(|t| t.as_str() == s)
            .ok_or_else(|| PayMindError::ValidationError(format!("unknown transaction type: {}", s)))
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum TransactionStatus {
    Pending,
    Completed,
    Failed,
}

impl TransactionStatus {
    /// Display order used by the filter dropdown and the summary tiles.
    pub const ALL: [TransactionStatus; 3] = [
        TransactionStatus::Completed,
        TransactionStatus::Pending,
        TransactionStatus::Failed,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            TransactionStatus::Pending => "Pending",
            TransactionStatus::Completed => "Completed",
            TransactionStatus::Failed => "Failed",
        }
    }
}

impl fmt::Display for TransactionStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for TransactionStatus {
    type Err = PayMindError;

    fn from_str(s: &str) -> Result<Self> {
        TransactionStatus::ALL
            .into_iter()
            .find(|t| t.as_str() == s)
            .ok_or_else(|| PayMindError::ValidationError(format!("unknown transaction status: {}", s)))
    }
}

/// Read-only transaction row. `date` is carried as the backend sends it.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Transaction {
    pub id: String,
    pub date: String,
    pub amount: f64,
    pub recipient: String,
    #[serde(rename = "type")]
    pub kind: TransactionType,
    pub status: TransactionStatus,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Sender {
    User,
    Assistant,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ChatMessage {
    pub id: u64,
    pub sender: Sender,
    pub content: String,
    pub timestamp: DateTime<Utc>,
}

/// Headline numbers for the dashboard cards.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct DashboardStats {
    pub balance: f64,
    pub active_payments: u32,
    pub pending_payments: u32,
    pub monthly_volume: f64,
}

impl DashboardStats {
    /// Snapshot shown whenever the stats endpoint cannot be used.
    pub fn fallback() -> Self {
        Self {
            balance: 1200.0,
            active_payments: 3,
            pending_payments: 2,
            monthly_volume: 2450.0,
        }
    }
}

/// The backend's informal `{success, data?, error?}` wrapper. Nothing about
/// its shape is enforced; unknown top-level fields are kept in `extra`.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct Envelope {
    #[serde(default)]
    pub success: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub data: Option<serde_json::Value>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
    #[serde(flatten)]
    pub extra: serde_json::Map<String, serde_json::Value>,
}

impl Envelope {
    pub fn ok(data: serde_json::Value) -> Self {
        Self {
            success: true,
            data: Some(data),
            ..Self::default()
        }
    }

    pub fn failed(error: impl Into<String>) -> Self {
        Self {
            success: false,
            error: Some(error.into()),
            ..Self::default()
        }
    }

    /// Decode `data` into a typed value, `None` when absent or malformed.
    pub fn data_as<T: DeserializeOwned>(&self) -> Option<T> {
        self.data
            .as_ref()
            .and_then(|value| serde_json::from_value(value.clone()).ok())
    }

    /// Turn a falsy `success` into a `BackendError` carrying the server's
    /// message, or `fallback` when it sent none.
    pub fn into_result(self, fallback: &str) -> Result<Envelope> {
        if self.success {
            return Ok(self);
        }
        let message = self
            .error
            .filter(|e| !e.is_empty())
            .unwrap_or_else(|| fallback.to_string());
        Err(PayMindError::BackendError(message))
    }

    /// A top-level string field outside the standard trio, such as `reply`.
    pub fn field_str(&self, key: &str) -> Option<&str> {
        self.extra.get(key).and_then(|value| value.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_envelope_into_result() {
        assert!(Envelope::ok(json!({})).into_result("x").is_ok());

        match Envelope::failed("Insufficient funds").into_result("x") {
            Err(PayMindError::BackendError(msg)) => assert_eq!(msg, "Insufficient funds"),
            other => panic!("unexpected: {:?}", other),
        }
        match Envelope::default().into_result("Payment failed") {
            Err(PayMindError::BackendError(msg)) => assert_eq!(msg, "Payment failed"),
            other => panic!("unexpected: {:?}", other),
        }
    }

    #[test]
    fn test_profile_for_email_capitalises_local_part() {
        let profile = UserProfile::for_email("alice@example.com").unwrap();
        assert_eq!(profile.name, "Alice");
        assert_eq!(profile.email, "alice@example.com");
        assert!(profile.wallet.starts_with("0x"));
        assert_eq!(profile.wallet.len(), 42);
        assert_eq!(profile.balance, DEFAULT_BALANCE);
        assert!(profile.notifications);
        assert_eq!(profile.language, "English");
    }

    #[test]
    fn test_profile_for_email_rejects_garbage() {
        assert!(matches!(
            UserProfile::for_email("not-an-email"),
            Err(PayMindError::ValidationError(_))
        ));
        assert!(UserProfile::for_email("@example.com").is_err());
        assert!(UserProfile::for_email("bob@").is_err());
    }

    #[test]
    fn test_transaction_wire_format() {
        let tx: Transaction = serde_json::from_value(json!({
            "id": "TX900",
            "date": "yesterday-ish",
            "amount": 12.5,
            "recipient": "0xFEE...001",
            "type": "Insurance",
            "status": "Pending"
        }))
        .unwrap();
        assert_eq!(tx.kind, TransactionType::Insurance);
        assert_eq!(tx.status, TransactionStatus::Pending);
        assert_eq!(tx.date, "yesterday-ish");
    }

    #[test]
    fn test_stats_use_camel_case() {
        let stats: DashboardStats = serde_json::from_value(json!({
            "balance": 10.0,
            "activePayments": 1,
            "pendingPayments": 0,
            "monthlyVolume": 99.5
        }))
        .unwrap();
        assert_eq!(stats.active_payments, 1);
        assert_eq!(stats.monthly_volume, 99.5);
    }

    #[test]
    fn test_envelope_tolerates_missing_fields() {
        let envelope: Envelope = serde_json::from_value(json!({ "reply": "hi" })).unwrap();
        assert!(!envelope.success);
        assert!(envelope.data.is_none());
        assert_eq!(envelope.field_str("reply"), Some("hi"));

        let envelope: Envelope =
            serde_json::from_value(json!({ "success": true, "data": { "balance": "lots" } })).unwrap();
        assert!(envelope.success);
        assert!(envelope.data_as::<DashboardStats>().is_none());
    }

    #[test]
    fn test_tags_parse_from_display_names() {
        for kind in TransactionType::ALL {
            assert_eq!(kind.to_string().parse::<TransactionType>().unwrap(), kind);
        }
        assert!("rent".parse::<TransactionType>().is_err());
        assert_eq!("Failed".parse::<TransactionStatus>().unwrap(), TransactionStatus::Failed);
    }
}
