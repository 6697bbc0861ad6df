//! Error types for token conversion math.

use rust_decimal::Decimal;
use thiserror::Error;

/// Errors that can occur during token conversion.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum TokenError {
    /// Amount must be a positive number.
    #[error("Amount must be a positive number")]
    InvalidAmount,

    /// Fee ratio is outside the accepted range.
    #[error("Fee ratio must be at least 0 and below 1, got {0}")]
    InvalidFeeRatio(Decimal),

    /// Token value must be positive.
    #[error("Token value must be positive, got {0}")]
    InvalidTokenValue(Decimal),

    /// Converted token count does not fit the ledger's integer range.
    #[error("Token amount out of range")]
    AmountOutOfRange,
}
