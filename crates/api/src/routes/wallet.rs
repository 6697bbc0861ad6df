//! Wallet routes: balance lookup and token redemption.

use axum::{
    Json, Router,
    extract::State,
    routing::{get, post},
};
use tracing::info;

use crate::{AppState, error::ApiError, middleware::auth::AuthUser};
use tokenflow_db::WalletRepository;
use tokenflow_shared::types::money::format_fiat;
use tokenflow_shared::wallet::{BalanceResponse, RedeemRequest, RedeemResponse};

/// Creates the wallet router. All routes require authentication.
pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/wallet/balance", get(get_balance))
        .route("/wallet/redeem", post(redeem))
}

/// GET /wallet/balance - Current token and fiat balance for the caller.
async fn get_balance(
    State(state): State<AppState>,
    user: AuthUser,
) -> Result<Json<BalanceResponse>, ApiError> {
    let repo = WalletRepository::new((*state.db).clone());
    let wallet = repo.get_balance(user.user_id()).await?;

    Ok(Json(BalanceResponse {
        token_balance: wallet.token_balance,
        fiat_balance: wallet.fiat_balance,
    }))
}

/// POST /wallet/redeem - Redeem tokens for simulated fiat payout.
///
/// The user id comes exclusively from the verified session token; the
/// request body only carries the token count.
async fn redeem(
    State(state): State<AppState>,
    user: AuthUser,
    Json(payload): Json<RedeemRequest>,
) -> Result<Json<RedeemResponse>, ApiError> {
    // Price and validate before any transaction opens.
    let quote = state.policy.quote_redemption(payload.tokens_to_redeem)?;

    let repo = WalletRepository::new((*state.db).clone());
    let outcome = repo
        .redeem(user.user_id(), quote.tokens, quote.fiat_value)
        .await?;

    let fiat_redeemed = format_fiat(quote.fiat_value);

    // Simulated payout to the user's bank; no real external call is made.
    info!(
        user_id = %user.user_id(),
        amount = %fiat_redeemed,
        new_balance = outcome.new_balance,
        "[PAYOUT] Payout initiated"
    );

    Ok(Json(RedeemResponse {
        message: "Token redemption successful. Fiat payout simulated.".to_string(),
        details: format!(
            "Successfully redeemed {} Tokens for ${fiat_redeemed}. Payout initiated.",
            quote.tokens
        ),
        fiat_redeemed,
    }))
}
