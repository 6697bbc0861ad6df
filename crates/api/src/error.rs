//! Error-to-response mapping for handlers.

use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde_json::json;
use tracing::error;

use tokenflow_core::token::TokenError;
use tokenflow_db::WalletError;
use tokenflow_shared::AppError;

/// Wrapper turning the application error taxonomy into HTTP responses.
///
/// Handlers return `Result<_, ApiError>` and use `?` on repository and
/// policy calls; the `From` impls below classify each domain error into one
/// taxonomy kind. Detail messages for transaction-layer failures are logged
/// server-side and replaced with a generic message on the wire.
#[derive(Debug)]
pub struct ApiError(pub AppError);

impl From<AppError> for ApiError {
    fn from(err: AppError) -> Self {
        Self(err)
    }
}

impl From<WalletError> for ApiError {
    fn from(err: WalletError) -> Self {
        let app = match &err {
            WalletError::WalletNotFound(user_id) => {
                AppError::NotFound(format!("Wallet not found for user {user_id}."))
            }
            WalletError::InsufficientBalance {
                available,
                requested,
            } => AppError::InsufficientBalance(format!(
                "Insufficient token balance: have {available}, requested {requested}."
            )),
            WalletError::InvalidAmount(amount) => {
                AppError::InvalidInput(format!("Invalid mutation amount: {amount}."))
            }
            WalletError::BalanceOutOfRange | WalletError::Database(_) => {
                AppError::TransactionFailed(err.to_string())
            }
        };
        Self(app)
    }
}

impl From<TokenError> for ApiError {
    fn from(err: TokenError) -> Self {
        Self(AppError::InvalidInput(err.to_string()))
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = StatusCode::from_u16(self.0.status_code())
            .unwrap_or(StatusCode::INTERNAL_SERVER_ERROR);

        let message = if self.0.detail_is_public() {
            self.0.to_string()
        } else {
            error!(detail = %self.0, "request failed; transaction rolled back");
            "Transaction failed. Funds retained in escrow.".to_string()
        };

        (
            status,
            Json(json!({
                "error": self.0.error_code(),
                "message": message
            })),
        )
            .into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_insufficient_balance_maps_to_400() {
        let err: ApiError = WalletError::InsufficientBalance {
            available: 10,
            requested: 60,
        }
        .into();
        assert_eq!(err.0.status_code(), 400);
        assert_eq!(err.0.error_code(), "INSUFFICIENT_BALANCE");
    }

    #[test]
    fn test_missing_wallet_maps_to_404() {
        let err: ApiError = WalletError::WalletNotFound(uuid::Uuid::new_v4()).into();
        assert_eq!(err.0.status_code(), 404);
    }

    #[test]
    fn test_token_error_maps_to_invalid_input() {
        let err: ApiError = TokenError::InvalidAmount.into();
        assert_eq!(err.0.status_code(), 400);
        assert_eq!(err.0.error_code(), "INVALID_INPUT");
    }

    #[test]
    fn test_storage_failure_detail_is_private() {
        let err: ApiError = WalletError::BalanceOutOfRange.into();
        assert!(!err.0.detail_is_public());
        assert_eq!(err.0.status_code(), 500);
    }
}
