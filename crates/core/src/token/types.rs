//! Quote types produced by the conversion policy.

use rust_decimal::Decimal;

/// Result of pricing a completed sale: what the platform keeps and what the
/// seller is credited.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SaleQuote {
    /// Platform fee retained from the sale, in fiat, rounded to cents.
    pub fee: Decimal,
    /// Fiat remaining for the seller after the fee.
    pub net_fiat: Decimal,
    /// Tokens to credit to the seller's wallet. May be zero when the net
    /// fiat is worth less than one token.
    pub tokens: i64,
}

/// Result of pricing a token redemption.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RedemptionQuote {
    /// Tokens being redeemed.
    pub tokens: i64,
    /// Fiat value paid out for them, rounded to cents.
    pub fiat_value: Decimal,
}
