//! Sale completion route.
//!
//! Simulates the webhook an external escrow provider would deliver when a
//! sale completes: the platform takes its fee from the fiat amount and the
//! remainder is converted into tokens credited to the seller's wallet.

use axum::{Json, Router, extract::State, routing::post};
use rust_decimal::Decimal;
use tracing::{debug, info};
use uuid::Uuid;

use crate::{AppState, error::ApiError};
use tokenflow_db::WalletRepository;
use tokenflow_shared::AppError;
use tokenflow_shared::types::money::format_fiat;
use tokenflow_shared::wallet::{CompleteSaleRequest, CompleteSaleResponse};

/// Creates the transactions router.
pub fn routes() -> Router<AppState> {
    Router::new().route("/transactions/complete", post(complete_sale))
}

/// POST /transactions/complete - Credit a seller for a completed sale.
async fn complete_sale(
    State(state): State<AppState>,
    Json(payload): Json<CompleteSaleRequest>,
) -> Result<Json<CompleteSaleResponse>, ApiError> {
    if payload.total_fiat_paid <= Decimal::ZERO {
        return Err(AppError::InvalidInput(
            "Seller ID and positive total fiat paid are required.".to_string(),
        )
        .into());
    }

    // Price and validate before any transaction opens; the policy re-checks
    // the amount bound.
    let quote = state.policy.quote_sale(payload.total_fiat_paid)?;

    // The buyer never holds tokens here; recorded for audit logging only.
    if let Some(buyer_id) = payload.buyer_id {
        debug!(
            buyer_id = %buyer_id,
            seller_id = %payload.seller_id,
            "Sale participants recorded"
        );
    }

    let repo = WalletRepository::new((*state.db).clone());
    let outcome = repo
        .credit_sale(payload.seller_id, quote.tokens, quote.net_fiat)
        .await?;

    let fee_charged = format_fiat(quote.fee);

    // Simulated escrow payout: fee to the platform account, net fiat to the
    // seller's redemption pool.
    info!(
        seller_id = %payload.seller_id,
        fee = %fee_charged,
        tokens = quote.tokens,
        new_balance = outcome.new_balance,
        "[ESCROW] Fee paid to platform"
    );

    let transaction_id = payload.transaction_id.unwrap_or_else(Uuid::new_v4);

    Ok(Json(CompleteSaleResponse {
        message: "Transaction completed, tokens credited.".to_string(),
        transaction_id,
        details: format!(
            "Seller credited {} Tokens. Platform charged ${fee_charged} fee.",
            quote.tokens
        ),
        fee_charged,
        tokens_credited: quote.tokens,
    }))
}
