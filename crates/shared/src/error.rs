//! Application-wide error types.

use thiserror::Error;

/// Result type alias using `AppError`.
pub type AppResult<T> = Result<T, AppError>;

/// Application error taxonomy.
///
/// Every error the wallet core can surface maps onto one of these kinds;
/// storage-layer failures are wrapped in `TransactionFailed` and never leak
/// raw driver errors to callers.
#[derive(Debug, Error)]
pub enum AppError {
    /// Malformed or out-of-range caller input.
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    /// Missing or invalid credential.
    #[error("Authentication failed: {0}")]
    Unauthorized(String),

    /// Referenced wallet or user is absent.
    #[error("Not found: {0}")]
    NotFound(String),

    /// Wallet balance cannot cover the requested redemption.
    #[error("Insufficient balance: {0}")]
    InsufficientBalance(String),

    /// Conflict (e.g., duplicate email).
    #[error("Conflict: {0}")]
    Conflict(String),

    /// Storage or transaction-layer failure; implies a full rollback.
    #[error("Transaction failed: {0}")]
    TransactionFailed(String),

    /// Internal server error.
    #[error("Internal error: {0}")]
    Internal(String),
}

impl AppError {
    /// Returns the HTTP status code for this error.
    #[must_use]
    pub const fn status_code(&self) -> u16 {
        match self {
            Self::InvalidInput(_) | Self::InsufficientBalance(_) => 400,
            Self::Unauthorized(_) => 401,
            Self::NotFound(_) => 404,
            Self::Conflict(_) => 409,
            Self::TransactionFailed(_) | Self::Internal(_) => 500,
        }
    }

    /// Returns the error code for API responses.
    #[must_use]
    pub const fn error_code(&self) -> &'static str {
        match self {
            Self::InvalidInput(_) => "INVALID_INPUT",
            Self::Unauthorized(_) => "UNAUTHORIZED",
            Self::NotFound(_) => "NOT_FOUND",
            Self::InsufficientBalance(_) => "INSUFFICIENT_BALANCE",
            Self::Conflict(_) => "CONFLICT",
            Self::TransactionFailed(_) => "TRANSACTION_FAILED",
            Self::Internal(_) => "INTERNAL_ERROR",
        }
    }

    /// Whether the detail message is safe to show to callers.
    ///
    /// Transaction and internal failures are logged server-side and replaced
    /// with a generic message on the wire.
    #[must_use]
    pub const fn detail_is_public(&self) -> bool {
        !matches!(self, Self::TransactionFailed(_) | Self::Internal(_))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_status_codes() {
        assert_eq!(AppError::InvalidInput(String::new()).status_code(), 400);
        assert_eq!(AppError::Unauthorized(String::new()).status_code(), 401);
        assert_eq!(AppError::NotFound(String::new()).status_code(), 404);
        assert_eq!(
            AppError::InsufficientBalance(String::new()).status_code(),
            400
        );
        assert_eq!(AppError::Conflict(String::new()).status_code(), 409);
        assert_eq!(
            AppError::TransactionFailed(String::new()).status_code(),
            500
        );
        assert_eq!(AppError::Internal(String::new()).status_code(), 500);
    }

    #[test]
    fn test_error_codes() {
        assert_eq!(
            AppError::InvalidInput(String::new()).error_code(),
            "INVALID_INPUT"
        );
        assert_eq!(
            AppError::Unauthorized(String::new()).error_code(),
            "UNAUTHORIZED"
        );
        assert_eq!(AppError::NotFound(String::new()).error_code(), "NOT_FOUND");
        assert_eq!(
            AppError::InsufficientBalance(String::new()).error_code(),
            "INSUFFICIENT_BALANCE"
        );
        assert_eq!(AppError::Conflict(String::new()).error_code(), "CONFLICT");
        assert_eq!(
            AppError::TransactionFailed(String::new()).error_code(),
            "TRANSACTION_FAILED"
        );
        assert_eq!(
            AppError::Internal(String::new()).error_code(),
            "INTERNAL_ERROR"
        );
    }

    #[test]
    fn test_detail_visibility() {
        assert!(AppError::InvalidInput("msg".into()).detail_is_public());
        assert!(AppError::InsufficientBalance("msg".into()).detail_is_public());
        assert!(AppError::NotFound("msg".into()).detail_is_public());
        assert!(!AppError::TransactionFailed("msg".into()).detail_is_public());
        assert!(!AppError::Internal("msg".into()).detail_is_public());
    }

    #[test]
    fn test_error_display() {
        assert_eq!(
            AppError::InsufficientBalance("have 10, requested 60".into()).to_string(),
            "Insufficient balance: have 10, requested 60"
        );
        assert_eq!(
            AppError::InvalidInput("msg".into()).to_string(),
            "Invalid input: msg"
        );
        assert_eq!(
            AppError::TransactionFailed("msg".into()).to_string(),
            "Transaction failed: msg"
        );
    }
}
