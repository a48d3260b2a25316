// paykit/src/api/mod.rs
//
// Thin HTTP client for the PayMind backend. Every call returns the parsed
// JSON envelope as-is: no status-code check, no retry, no timeout. Callers
// inspect `success` themselves.
//

mod requests;

pub use requests::*;

use async_trait::async_trait;
use serde::Serialize;
use tracing::debug;

use crate::config::ClientConfig;
use crate::errors::Result;
use crate::types::{ChatMessage, Envelope};

pub const DEFAULT_REVENUE_PERIOD: &str = "30d";

/// The endpoints the dashboard page depends on. Implemented by the HTTP
/// client and by the offline fixture backend.
#[cfg_attr(target_arch = "wasm32", async_trait(?Send))]
#[cfg_attr(not(target_arch = "wasm32"), async_trait)]
pub trait DashboardBackend {
    async fn dashboard_stats(&self) -> Result<Envelope>;
    async fn recent_transactions(&self, limit: usize) -> Result<Envelope>;
    async fn send_payment(&self, request: &PaymentRequest) -> Result<Envelope>;
}

#[derive(Debug, Clone)]
pub struct ApiClient {
    client: reqwest::Client,
    base_url: String,
}

impl ApiClient {
    pub fn new(base_url: &str) -> Self {
        Self {
            client: reqwest::Client::new(),
            base_url: base_url.trim_end_matches('/').to_string(),
        }
    }

    pub fn from_config(config: &ClientConfig) -> Self {
        Self::new(&config.api_base_url)
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    async fn get(&self, path: &str, query: &[(&str, &str)]) -> Result<Envelope> {
        debug!("GET {}{} {:?}", self.base_url, path, query);
        let response = self.client.get(self.url(path)).query(query).send().await?;
        let status = response.status();
        let envelope = response.json::<Envelope>().await?;
        debug!("GET {} -> {} (success={})", path, status, envelope.success);
        Ok(envelope)
    }

    async fn post<B: Serialize + ?Sized>(&self, path: &str, body: &B) -> Result<Envelope> {
        debug!("POST {}{}", self.base_url, path);
        let response = self.client.post(self.url(path)).json(body).send().await?;
        let status = response.status();
        let envelope = response.json::<Envelope>().await?;
        debug!("POST {} -> {} (success={})", path, status, envelope.success);
        Ok(envelope)
    }

    // Dashboard

    pub async fn get_dashboard_stats(&self) -> Result<Envelope> {
        self.get("/api/dashboard/stats", &[]).await
    }

    pub async fn get_recent_transactions(&self, limit: usize) -> Result<Envelope> {
        let limit = limit.to_string();
        self.get("/api/dashboard/transactions/recent", &[("limit", &limit)])
            .await
    }

    // Payments

    pub async fn send_payment(&self, request: &PaymentRequest) -> Result<Envelope> {
        self.post("/api/payments/send", request).await
    }

    pub async fn schedule_payment(&self, request: &SchedulePaymentRequest) -> Result<Envelope> {
        self.post("/api/payments/schedule", request).await
    }

    pub async fn create_conditional_payment(
        &self,
        request: &ConditionalPaymentRequest,
    ) -> Result<Envelope> {
        self.post("/api/payments/conditional", request).await
    }

    pub async fn estimate_payment_fee(&self, request: &PaymentRequest) -> Result<Envelope> {
        self.post("/api/payments/estimate-fee", request).await
    }

    // DeFi

    pub async fn execute_swap(&self, request: &SwapRequest) -> Result<Envelope> {
        self.post("/api/defi/swap", request).await
    }

    pub async fn supply_to_lending(&self, request: &LendingSupplyRequest) -> Result<Envelope> {
        self.post("/api/defi/lending/supply", request).await
    }

    pub async fn borrow_from_lending(&self, request: &LendingBorrowRequest) -> Result<Envelope> {
        self.post("/api/defi/lending/borrow", request).await
    }

    pub async fn add_liquidity(&self, request: &AddLiquidityRequest) -> Result<Envelope> {
        self.post("/api/defi/liquidity/add", request).await
    }

    pub async fn auto_rebalance(&self, request: &RebalanceRequest) -> Result<Envelope> {
        self.post("/api/defi/rebalance", request).await
    }

    // Creator payments

    pub async fn send_micropayment(&self, request: &MicropaymentRequest) -> Result<Envelope> {
        self.post("/api/creator/micropayment", request).await
    }

    pub async fn send_tip(&self, request: &TipRequest) -> Result<Envelope> {
        self.post("/api/creator/tip", request).await
    }

    pub async fn create_subscription(&self, request: &SubscriptionRequest) -> Result<Envelope> {
        self.post("/api/creator/subscription/create", request).await
    }

    pub async fn cancel_subscription(&self, subscription_id: &str) -> Result<Envelope> {
        let request = CancelSubscriptionRequest {
            subscription_id: subscription_id.to_string(),
        };
        self.post("/api/creator/subscription/cancel", &request).await
    }

    pub async fn list_subscriptions(&self, wallet_id: &str) -> Result<Envelope> {
        self.get("/api/creator/subscriptions", &[("walletId", wallet_id)])
            .await
    }

    pub async fn nft_gated_payment(&self, request: &NftPaymentRequest) -> Result<Envelope> {
        self.post("/api/creator/nft-payment", request).await
    }

    /// Revenue for a creator over `period` (defaults to 30 days).
    pub async fn get_creator_revenue(
        &self,
        creator_address: &str,
        period: Option<&str>,
    ) -> Result<Envelope> {
        let period = period.unwrap_or(DEFAULT_REVENUE_PERIOD);
        self.get(
            "/api/creator/revenue",
            &[("creatorAddress", creator_address), ("period", period)],
        )
        .await
    }

    // Wallets

    pub async fn list_wallets(&self) -> Result<Envelope> {
        self.get("/list_wallets", &[]).await
    }

    pub async fn get_wallet_balances(&self) -> Result<Envelope> {
        self.get("/list_wallets_with_balances", &[]).await
    }

    // Chat

    pub async fn send_chat_message(&self, message: &str, history: &[ChatMessage]) -> Result<Envelope> {
        let request = ChatRequest {
            message: message.to_string(),
            history: history.iter().map(ChatTurn::from).collect(),
        };
        self.post("/api/chat", &request).await
    }
}

#[cfg_attr(target_arch = "wasm32", async_trait(?Send))]
#[cfg_attr(not(target_arch = "wasm32"), async_trait)]
impl DashboardBackend for ApiClient {
    async fn dashboard_stats(&self) -> Result<Envelope> {
        self.get_dashboard_stats().await
    }

    async fn recent_transactions(&self, limit: usize) -> Result<Envelope> {
        self.get_recent_transactions(limit).await
    }

    async fn send_payment(&self, request: &PaymentRequest) -> Result<Envelope> {
        ApiClient::send_payment(self, request).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_base_url_is_normalised() {
        let client = ApiClient::new("http://localhost:5000/");
        assert_eq!(client.base_url(), "http://localhost:5000");
        assert_eq!(
            client.url("/api/dashboard/stats"),
            "http://localhost:5000/api/dashboard/stats"
        );
    }

    #[test]
    fn test_from_config() {
        let config = ClientConfig {
            api_base_url: "https://api.paymind.io//".to_string(),
            ..ClientConfig::default()
        };
        assert_eq!(ApiClient::from_config(&config).base_url(), "https://api.paymind.io");
    }
}
