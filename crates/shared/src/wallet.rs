//! Request/response payloads for wallet and sale-completion endpoints.
//!
//! Field names are camelCase on the wire, matching the frontend demo and the
//! simulated escrow webhook.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Wallet balance response.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct BalanceResponse {
    /// Current token balance.
    pub token_balance: i64,
    /// Current fiat balance.
    pub fiat_balance: Decimal,
}

/// Token redemption request.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RedeemRequest {
    /// Number of tokens to convert back to fiat.
    pub tokens_to_redeem: i64,
}

/// Token redemption response.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RedeemResponse {
    /// Success message.
    pub message: String,
    /// Fiat amount redeemed, as a 2-decimal string.
    pub fiat_redeemed: String,
    /// Human-readable summary of the payout.
    pub details: String,
}

/// Sale completion request, as delivered by the simulated escrow webhook.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CompleteSaleRequest {
    /// External transaction reference, echoed back if present.
    #[serde(default)]
    pub transaction_id: Option<Uuid>,
    /// Buyer, recorded for audit logging only; no money moves from them here.
    #[serde(default)]
    pub buyer_id: Option<Uuid>,
    /// Seller whose wallet is credited.
    pub seller_id: Uuid,
    /// Fiat amount the buyer paid.
    pub total_fiat_paid: Decimal,
}

/// Sale completion response.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CompleteSaleResponse {
    /// Success message.
    pub message: String,
    /// Transaction reference (caller-supplied or generated).
    pub transaction_id: Uuid,
    /// Platform fee charged, as a 2-decimal string.
    pub fee_charged: String,
    /// Tokens credited to the seller.
    pub tokens_credited: i64,
    /// Human-readable summary of the credit.
    pub details: String,
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn test_complete_sale_request_wire_format() {
        let json = r#"{
            "sellerId": "00000000-0000-0000-0000-000000000002",
            "totalFiatPaid": "100.00"
        }"#;
        let req: CompleteSaleRequest = serde_json::from_str(json).unwrap();
        assert_eq!(req.total_fiat_paid, dec!(100.00));
        assert!(req.buyer_id.is_none());
        assert!(req.transaction_id.is_none());
    }

    #[test]
    fn test_redeem_request_wire_format() {
        let req: RedeemRequest = serde_json::from_str(r#"{"tokensToRedeem": 40}"#).unwrap();
        assert_eq!(req.tokens_to_redeem, 40);
    }
}
