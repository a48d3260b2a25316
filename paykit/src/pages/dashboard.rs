// paykit/src/pages/dashboard.rs
//
// Dashboard page - headline stats, recent activity and the send-payment
// form. Each fetch on mount is independent; a failed or unsuccessful fetch
// swaps in fixture data instead of surfacing an error.
//

use tracing::warn;

use crate::api::{DashboardBackend, PaymentRequest};
use crate::errors::{PayMindError, Result};
use crate::format::{format_amount, format_usdc};
use crate::mock;
use crate::types::{DashboardStats, Transaction, UserProfile};

/// Placeholder wallet until real wallet integration exists. Demo only.
pub const DEMO_WALLET_ID: &str = "demo_wallet_id";
/// Placeholder USDC token identifier. Demo only.
pub const DEMO_TOKEN_ID: &str = "usdc_token_id";
pub const DEFAULT_RECIPIENT: &str = "0xDCBD19eb43cD48184999e88e3fd55961322D4865";
pub const MIN_PAYMENT_AMOUNT: f64 = 0.01;

pub const PAYMENT_FAILED_TEXT: &str = "Payment failed. Please check your wallet configuration.";
pub const PAYMENT_UNREACHABLE_TEXT: &str =
    "Unable to connect to payment service. Please make sure backend is running and wallet is configured.";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DataSource {
    Live,
    Fallback,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Loaded<T> {
    pub value: T,
    pub source: DataSource,
}

impl<T> Loaded<T> {
    pub fn live(value: T) -> Self {
        Self {
            value,
            source: DataSource::Live,
        }
    }

    pub fn fallback(value: T) -> Self {
        Self {
            value,
            source: DataSource::Fallback,
        }
    }

    pub fn is_fallback(&self) -> bool {
        self.source == DataSource::Fallback
    }
}

/// Stats for the cards: server data on success, the fixed snapshot otherwise.
pub async fn load_stats<B: DashboardBackend + ?Sized>(backend: &B) -> Loaded<DashboardStats> {
    match backend.dashboard_stats().await {
        Ok(envelope) if envelope.success => match envelope.data_as::<DashboardStats>() {
            Some(stats) => Loaded::live(stats),
            None => {
                warn!("Dashboard stats payload malformed, using fallback snapshot");
                Loaded::fallback(DashboardStats::fallback())
            }
        },
        Ok(envelope) => {
            warn!(
                "Dashboard stats unsuccessful ({}), using fallback snapshot",
                envelope.error.as_deref().unwrap_or("no error given")
            );
            Loaded::fallback(DashboardStats::fallback())
        }
        Err(e) => {
            warn!("Dashboard stats unavailable: {}", e);
            Loaded::fallback(DashboardStats::fallback())
        }
    }
}

/// Recent transactions: server rows when the call succeeds with at least one
/// row, the fixture prefix otherwise.
pub async fn load_recent<B: DashboardBackend + ?Sized>(
    backend: &B,
    limit: usize,
) -> Loaded<Vec<Transaction>> {
    match backend.recent_transactions(limit).await {
        Ok(envelope) if envelope.success => match envelope.data_as::<Vec<Transaction>>() {
            Some(rows) if !rows.is_empty() => Loaded::live(rows),
            _ => Loaded::fallback(mock::recent_transactions()),
        },
        Ok(_) => Loaded::fallback(mock::recent_transactions()),
        Err(e) => {
            warn!("Recent transactions unavailable: {}", e);
            Loaded::fallback(mock::recent_transactions())
        }
    }
}

/// Post-payment refresh. Only a successful response replaces what is shown.
pub async fn refresh_stats<B: DashboardBackend + ?Sized>(backend: &B) -> Option<DashboardStats> {
    match backend.dashboard_stats().await {
        Ok(envelope) if envelope.success => envelope.data_as(),
        _ => None,
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Trend {
    Positive,
    Neutral,
    Negative,
}

#[derive(Debug, Clone, PartialEq)]
pub struct StatCard {
    pub title: &'static str,
    pub value: String,
    pub note: String,
    pub trend: Trend,
}

/// Page heading greeting the signed-in user.
pub fn welcome_title(profile: &UserProfile) -> String {
    format!("Welcome back, {}", profile.name)
}

pub fn stat_cards(stats: &DashboardStats) -> Vec<StatCard> {
    vec![
        StatCard {
            title: "USDC Balance",
            value: format_usdc(stats.balance),
            note: "+2.5%".to_string(),
            trend: Trend::Positive,
        },
        StatCard {
            title: "Active Payments",
            value: stats.active_payments.to_string(),
            note: format!("{} pending", stats.pending_payments),
            trend: Trend::Neutral,
        },
        StatCard {
            title: "Monthly Volume",
            value: format_usdc(stats.monthly_volume),
            note: "+12.3%".to_string(),
            trend: Trend::Positive,
        },
    ]
}

/// Values typed into the send-payment form.
#[derive(Debug, Clone, PartialEq)]
pub struct PaymentDraft {
    pub recipient: String,
    pub amount: String,
    /// Shown in the form only; never sent.
    pub note: String,
}

impl Default for PaymentDraft {
    fn default() -> Self {
        Self {
            recipient: DEFAULT_RECIPIENT.to_string(),
            amount: String::new(),
            note: String::new(),
        }
    }
}

impl PaymentDraft {
    /// Build the request body, rejecting drafts the form would not submit.
    pub fn to_request(&self) -> Result<PaymentRequest> {
        let recipient = self.recipient.trim();
        if recipient.is_empty() {
            return Err(PayMindError::ValidationError(
                "Recipient address is required".to_string(),
            ));
        }

        let amount = self.amount.trim();
        match amount.parse::<f64>() {
            Ok(value) if value.is_finite() && value >= MIN_PAYMENT_AMOUNT => {}
            _ => {
                return Err(PayMindError::ValidationError(format!(
                    "Amount must be at least {} USDC",
                    format_amount(MIN_PAYMENT_AMOUNT)
                )))
            }
        }

        Ok(PaymentRequest {
            destination_address: recipient.to_string(),
            amount: amount.to_string(),
            wallet_id: DEMO_WALLET_ID.to_string(),
            token_id: DEMO_TOKEN_ID.to_string(),
        })
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum PaymentOutcome {
    Sent,
    Rejected(String),
}

/// Submit a draft. Never fails: every problem becomes a message to show.
pub async fn submit_payment<B: DashboardBackend + ?Sized>(
    backend: &B,
    draft: &PaymentDraft,
) -> PaymentOutcome {
    let request = match draft.to_request() {
        Ok(request) => request,
        Err(PayMindError::ValidationError(msg)) => return PaymentOutcome::Rejected(msg),
        Err(e) => return PaymentOutcome::Rejected(e.to_string()),
    };

    let sent = backend
        .send_payment(&request)
        .await
        .and_then(|envelope| envelope.into_result(PAYMENT_FAILED_TEXT));
    match sent {
        Ok(_) => PaymentOutcome::Sent,
        Err(PayMindError::BackendError(msg)) => PaymentOutcome::Rejected(msg),
        Err(e) => {
            warn!("Payment request failed: {}", e);
            PaymentOutcome::Rejected(PAYMENT_UNREACHABLE_TEXT.to_string())
        }
    }
}

/// Visibility and progress of the send-payment modal.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct PaymentModal {
    pub open: bool,
    pub submitting: bool,
    pub succeeded: bool,
    pub error: Option<String>,
}

impl PaymentModal {
    pub fn open(&mut self) {
        self.open = true;
        self.succeeded = false;
        self.error = None;
    }

    /// Close without sending. Ignored while a submission is in flight.
    pub fn cancel(&mut self) {
        if self.submitting {
            return;
        }
        self.open = false;
        self.error = None;
    }

    /// Mark a submission as started; false if one is already running.
    pub fn begin_submit(&mut self) -> bool {
        if self.submitting {
            return false;
        }
        self.submitting = true;
        self.error = None;
        true
    }

    /// Record the outcome. Returns true when the stats should be refreshed.
    pub fn finish(&mut self, outcome: &PaymentOutcome) -> bool {
        self.submitting = false;
        match outcome {
            PaymentOutcome::Sent => {
                self.succeeded = true;
                true
            }
            PaymentOutcome::Rejected(msg) => {
                self.error = Some(msg.clone());
                false
            }
        }
    }

    /// Dismiss the success panel.
    pub fn acknowledge(&mut self) {
        self.succeeded = false;
        self.open = false;
    }
}

/// Whole-page state, for renderers that hold it in one place.
#[derive(Debug, Clone, Default)]
pub struct DashboardModel {
    pub stats: Option<Loaded<DashboardStats>>,
    pub recent: Option<Loaded<Vec<Transaction>>>,
    pub draft: PaymentDraft,
    pub payment: PaymentModal,
}

impl DashboardModel {
    pub fn new() -> Self {
        Self::default()
    }

    /// Issue both mount-time fetches concurrently.
    pub async fn mount<B: DashboardBackend + ?Sized>(&mut self, backend: &B, limit: usize) {
        let (stats, recent) = futures::join!(load_stats(backend), load_recent(backend, limit));
        self.stats = Some(stats);
        self.recent = Some(recent);
    }

    pub fn cards(&self) -> Vec<StatCard> {
        self.stats
            .as_ref()
            .map(|loaded| stat_cards(&loaded.value))
            .unwrap_or_default()
    }

    pub async fn submit_payment<B: DashboardBackend + ?Sized>(&mut self, backend: &B) -> Option<PaymentOutcome> {
        if !self.payment.begin_submit() {
            return None;
        }
        let outcome = submit_payment(backend, &self.draft).await;
        if self.payment.finish(&outcome) {
            if let Some(stats) = refresh_stats(backend).await {
                self.stats = Some(Loaded::live(stats));
            }
        }
        Some(outcome)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::mock::MockBackend;
    use crate::types::Envelope;
    use async_trait::async_trait;
    use serde_json::json;
    use std::sync::Mutex;

    /// Scripted backend: each endpoint answers from a fixed closure and
    /// records how often it was hit.
    struct Scripted {
        stats: fn() -> Result<Envelope>,
        recent: fn() -> Result<Envelope>,
        payment: fn() -> Result<Envelope>,
        stats_calls: Mutex<u32>,
        payments: Mutex<Vec<PaymentRequest>>,
    }

    impl Scripted {
        fn new(
            stats: fn() -> Result<Envelope>,
            recent: fn() -> Result<Envelope>,
            payment: fn() -> Result<Envelope>,
        ) -> Self {
            Self {
                stats,
                recent,
                payment,
                stats_calls: Mutex::new(0),
                payments: Mutex::new(Vec::new()),
            }
        }
    }

    #[async_trait]
    impl DashboardBackend for Scripted {
        async fn dashboard_stats(&self) -> Result<Envelope> {
            *self.stats_calls.lock().unwrap() += 1;
            (self.stats)()
        }

        async fn recent_transactions(&self, _limit: usize) -> Result<Envelope> {
            (self.recent)()
        }

        async fn send_payment(&self, request: &PaymentRequest) -> Result<Envelope> {
            self.payments.lock().unwrap().push(request.clone());
            (self.payment)()
        }
    }

    fn unreachable() -> Result<Envelope> {
        Err(PayMindError::NetworkError("connection refused".to_string()))
    }

    fn live_stats() -> Result<Envelope> {
        Ok(Envelope::ok(json!({
            "balance": 5000.0,
            "activePayments": 7,
            "pendingPayments": 1,
            "monthlyVolume": 9100.0
        })))
    }

    fn unsuccessful() -> Result<Envelope> {
        Ok(Envelope::failed("Insufficient funds"))
    }

    fn bare_failure() -> Result<Envelope> {
        Ok(Envelope::default())
    }

    fn empty_rows() -> Result<Envelope> {
        Ok(Envelope::ok(json!([])))
    }

    fn accepted() -> Result<Envelope> {
        Ok(Envelope::ok(json!({ "transactionId": "abc" })))
    }

    #[tokio::test]
    async fn test_stats_rejection_shows_fallback_snapshot() {
        let backend = Scripted::new(unreachable, unreachable, unreachable);
        let loaded = load_stats(&backend).await;
        assert!(loaded.is_fallback());
        assert_eq!(loaded.value.balance, 1200.0);
        assert_eq!(loaded.value.active_payments, 3);
        assert_eq!(loaded.value.pending_payments, 2);
        assert_eq!(loaded.value.monthly_volume, 2450.0);
    }

    #[tokio::test]
    async fn test_stats_falsy_success_shows_fallback_snapshot() {
        let backend = Scripted::new(unsuccessful, unreachable, unreachable);
        assert_eq!(load_stats(&backend).await.value, DashboardStats::fallback());
    }

    #[tokio::test]
    async fn test_stats_success_uses_server_data() {
        let backend = Scripted::new(live_stats, unreachable, unreachable);
        let loaded = load_stats(&backend).await;
        assert_eq!(loaded.source, DataSource::Live);
        assert_eq!(loaded.value.active_payments, 7);
    }

    #[tokio::test]
    async fn test_empty_recent_list_falls_back_to_fixtures() {
        let backend = Scripted::new(live_stats, empty_rows, unreachable);
        let loaded = load_recent(&backend, 3).await;
        assert!(loaded.is_fallback());
        assert_eq!(loaded.value, mock::recent_transactions());
    }

    #[tokio::test]
    async fn test_mount_resolves_each_fetch_independently() {
        let backend = Scripted::new(live_stats, unreachable, unreachable);
        let mut model = DashboardModel::new();
        model.mount(&backend, 3).await;

        assert_eq!(model.stats.as_ref().unwrap().source, DataSource::Live);
        assert!(model.recent.as_ref().unwrap().is_fallback());
        assert_eq!(model.cards()[0].value, "5,000 USDC");
        assert_eq!(model.cards()[1].note, "1 pending");
    }

    #[tokio::test]
    async fn test_successful_payment_shows_confirmation_and_refreshes_stats() {
        let backend = Scripted::new(live_stats, unreachable, accepted);
        let mut model = DashboardModel::new();
        model.payment.open();
        model.draft.amount = "25".to_string();

        let outcome = model.submit_payment(&backend).await;
        assert_eq!(outcome, Some(PaymentOutcome::Sent));
        assert!(model.payment.succeeded);
        assert!(model.payment.open);
        assert!(!model.payment.submitting);
        assert_eq!(*backend.stats_calls.lock().unwrap(), 1);
        assert_eq!(model.stats.as_ref().unwrap().value.balance, 5000.0);

        let sent = backend.payments.lock().unwrap();
        assert_eq!(sent[0].wallet_id, DEMO_WALLET_ID);
        assert_eq!(sent[0].token_id, DEMO_TOKEN_ID);
        assert_eq!(sent[0].destination_address, DEFAULT_RECIPIENT);
        drop(sent);

        model.payment.acknowledge();
        assert!(!model.payment.open);
    }

    #[tokio::test]
    async fn test_rejected_payment_shows_server_error_and_keeps_modal_open() {
        let backend = Scripted::new(live_stats, unreachable, unsuccessful);
        let mut model = DashboardModel::new();
        model.payment.open();
        model.draft.amount = "10".to_string();

        model.submit_payment(&backend).await;
        assert!(model.payment.open);
        assert!(!model.payment.succeeded);
        assert_eq!(model.payment.error.as_deref(), Some("Insufficient funds"));
        assert_eq!(*backend.stats_calls.lock().unwrap(), 0);
    }

    #[tokio::test]
    async fn test_rejected_payment_without_message_uses_default_text() {
        let backend = Scripted::new(live_stats, unreachable, bare_failure);
        let draft = PaymentDraft {
            amount: "10".to_string(),
            ..PaymentDraft::default()
        };
        assert_eq!(
            submit_payment(&backend, &draft).await,
            PaymentOutcome::Rejected(PAYMENT_FAILED_TEXT.to_string())
        );
    }

    #[tokio::test]
    async fn test_unreachable_payment_service() {
        let backend = Scripted::new(live_stats, unreachable, unreachable);
        let draft = PaymentDraft {
            amount: "10".to_string(),
            ..PaymentDraft::default()
        };
        assert_eq!(
            submit_payment(&backend, &draft).await,
            PaymentOutcome::Rejected(PAYMENT_UNREACHABLE_TEXT.to_string())
        );
    }

    #[tokio::test]
    async fn test_invalid_draft_never_reaches_backend() {
        let backend = Scripted::new(live_stats, unreachable, accepted);
        for amount in ["", "abc", "0", "0.001", "-5"] {
            let draft = PaymentDraft {
                amount: amount.to_string(),
                ..PaymentDraft::default()
            };
            assert!(matches!(submit_payment(&backend, &draft).await, PaymentOutcome::Rejected(_)));
        }
        let draft = PaymentDraft {
            recipient: "   ".to_string(),
            amount: "5".to_string(),
            note: String::new(),
        };
        assert!(matches!(submit_payment(&backend, &draft).await, PaymentOutcome::Rejected(_)));
        assert!(backend.payments.lock().unwrap().is_empty());
    }

    #[test]
    fn test_welcome_title_uses_profile_name() {
        assert_eq!(welcome_title(&UserProfile::default()), "Welcome back, John Doe");
        let alice = UserProfile::for_email("alice@example.com").unwrap();
        assert_eq!(welcome_title(&alice), "Welcome back, Alice");
    }

    #[test]
    fn test_modal_ignores_cancel_and_double_submit_while_sending() {
        let mut modal = PaymentModal::default();
        modal.open();
        assert!(modal.begin_submit());
        assert!(!modal.begin_submit());
        modal.cancel();
        assert!(modal.open);
        modal.finish(&PaymentOutcome::Rejected("nope".to_string()));
        modal.cancel();
        assert!(!modal.open);
        assert!(modal.error.is_none());
    }

    #[tokio::test]
    async fn test_offline_backend_renders_live_fixture_data() {
        let mut model = DashboardModel::new();
        model.mount(&MockBackend::new(), 3).await;
        let recent = model.recent.unwrap();
        assert_eq!(recent.source, DataSource::Live);
        assert_eq!(recent.value.len(), 3);
    }
}
