// paykit/src/api/requests.rs
//
// JSON request bodies for the backend endpoints. Field names follow the
// backend's camelCase convention; optional fields are omitted when unset.
//

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::types::{ChatMessage, Sender};

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct PaymentRequest {
    pub destination_address: String,
    pub amount: String,
    pub wallet_id: String,
    pub token_id: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct SchedulePaymentRequest {
    #[serde(flatten)]
    pub payment: PaymentRequest,
    pub frequency: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub start_date: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct ConditionalPaymentRequest {
    #[serde(flatten)]
    pub payment: PaymentRequest,
    pub condition_type: String,
    pub condition_params: serde_json::Value,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct SwapRequest {
    pub wallet_id: String,
    pub from_token: String,
    pub to_token: String,
    pub amount: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub slippage: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub dex_protocol: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct LendingSupplyRequest {
    pub wallet_id: String,
    pub token_address: String,
    pub amount: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub protocol: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct LendingBorrowRequest {
    pub wallet_id: String,
    pub token_address: String,
    pub amount: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub protocol: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub interest_rate_mode: Option<u8>,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct AddLiquidityRequest {
    pub wallet_id: String,
    pub token_a: String,
    pub token_b: String,
    pub amount_a: String,
    pub amount_b: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub protocol: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct RebalanceRequest {
    pub wallet_id: String,
    pub target_allocation: BTreeMap<String, f64>,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct CreatorPaymentRequest {
    pub creator_address: String,
    pub amount: String,
    pub wallet_id: String,
    pub token_id: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct MicropaymentRequest {
    #[serde(flatten)]
    pub payment: CreatorPaymentRequest,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub content_id: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct TipRequest {
    #[serde(flatten)]
    pub payment: CreatorPaymentRequest,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct SubscriptionRequest {
    #[serde(flatten)]
    pub payment: CreatorPaymentRequest,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tier: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub billing_cycle: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct CancelSubscriptionRequest {
    pub subscription_id: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct NftPaymentRequest {
    #[serde(flatten)]
    pub payment: CreatorPaymentRequest,
    pub nft_contract: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub content_id: Option<String>,
}

/// One prior transcript entry sent along with a chat message.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ChatTurn {
    pub role: Sender,
    pub content: String,
}

impl From<&ChatMessage> for ChatTurn {
    fn from(message: &ChatMessage) -> Self {
        Self {
            role: message.sender,
            content: message.content.clone(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ChatRequest {
    pub message: String,
    pub history: Vec<ChatTurn>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn payment() -> PaymentRequest {
        PaymentRequest {
            destination_address: "0xDCBD19eb43cD48184999e88e3fd55961322D4865".to_string(),
            amount: "25.00".to_string(),
            wallet_id: "demo_wallet_id".to_string(),
            token_id: "usdc_token_id".to_string(),
        }
    }

    #[test]
    fn test_payment_body_is_camel_case() {
        let body = serde_json::to_value(payment()).unwrap();
        assert_eq!(
            body,
            json!({
                "destinationAddress": "0xDCBD19eb43cD48184999e88e3fd55961322D4865",
                "amount": "25.00",
                "walletId": "demo_wallet_id",
                "tokenId": "usdc_token_id"
            })
        );
    }

    #[test]
    fn test_schedule_body_flattens_payment_and_omits_unset_start() {
        let body = serde_json::to_value(SchedulePaymentRequest {
            payment: payment(),
            frequency: "monthly".to_string(),
            start_date: None,
        })
        .unwrap();
        assert_eq!(body["frequency"], "monthly");
        assert_eq!(body["walletId"], "demo_wallet_id");
        assert!(body.get("startDate").is_none());
    }

    #[test]
    fn test_chat_history_roles() {
        let body = serde_json::to_value(ChatRequest {
            message: "balance?".to_string(),
            history: vec![ChatTurn {
                role: Sender::Assistant,
                content: "Hello".to_string(),
            }],
        })
        .unwrap();
        assert_eq!(body["history"][0]["role"], "assistant");
    }
}
