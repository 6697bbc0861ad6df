//! Conversion policy: fee retention and token/fiat exchange.
//!
//! Rounding strategy: banker's rounding (round half to even) everywhere.
//! The fee is rounded to cents before net fiat is derived, so the reported
//! fee, the ledger's `source_fiat`, and the wallet mutation always agree.
//! Fractional fiat lost when net fiat is rounded to a whole token count is
//! accepted as drift and not tracked.

use rust_decimal::prelude::ToPrimitive;
use rust_decimal::{Decimal, RoundingStrategy};

use tokenflow_shared::types::money::round_cents;

use super::error::TokenError;
use super::types::{RedemptionQuote, SaleQuote};

/// Validated fee ratio and token exchange value.
///
/// Constructed once at startup from configuration; an out-of-range value is
/// fatal there. The policy itself is immutable and freely copyable into the
/// application state.
#[derive(Debug, Clone, Copy)]
pub struct ConversionPolicy {
    fee_ratio: Decimal,
    token_value: Decimal,
}

impl ConversionPolicy {
    /// Creates a policy, validating `0 <= fee_ratio < 1` and
    /// `token_value > 0`.
    ///
    /// # Errors
    ///
    /// Returns `TokenError::InvalidFeeRatio` or
    /// `TokenError::InvalidTokenValue` when a bound is violated.
    pub fn new(fee_ratio: Decimal, token_value: Decimal) -> Result<Self, TokenError> {
        if fee_ratio < Decimal::ZERO || fee_ratio >= Decimal::ONE {
            return Err(TokenError::InvalidFeeRatio(fee_ratio));
        }
        if token_value <= Decimal::ZERO {
            return Err(TokenError::InvalidTokenValue(token_value));
        }
        Ok(Self {
            fee_ratio,
            token_value,
        })
    }

    /// Returns the configured fee ratio.
    #[must_use]
    pub const fn fee_ratio(&self) -> Decimal {
        self.fee_ratio
    }

    /// Returns the configured fiat value of one token.
    #[must_use]
    pub const fn token_value(&self) -> Decimal {
        self.token_value
    }

    /// Prices a completed sale: fee retained, net fiat, and the token credit.
    ///
    /// A zero token credit is a valid outcome (net fiat smaller than one
    /// token's value), not an error.
    ///
    /// # Errors
    ///
    /// Returns `TokenError::InvalidAmount` if `fiat_amount` is not positive.
    /// Non-positive amounts are rejected at the request surface too; this
    /// re-check makes the core safe to call from any path.
    pub fn quote_sale(&self, fiat_amount: Decimal) -> Result<SaleQuote, TokenError> {
        if fiat_amount <= Decimal::ZERO {
            return Err(TokenError::InvalidAmount);
        }

        let fee = round_cents(fiat_amount * self.fee_ratio);
        let net_fiat = fiat_amount - fee;
        let tokens = to_whole_tokens(net_fiat / self.token_value)?;

        Ok(SaleQuote {
            fee,
            net_fiat,
            tokens,
        })
    }

    /// Prices a token redemption.
    ///
    /// # Errors
    ///
    /// Returns `TokenError::InvalidAmount` if `tokens` is not positive.
    pub fn quote_redemption(&self, tokens: i64) -> Result<RedemptionQuote, TokenError> {
        if tokens <= 0 {
            return Err(TokenError::InvalidAmount);
        }

        let fiat_value = round_cents(Decimal::from(tokens) * self.token_value);

        Ok(RedemptionQuote { tokens, fiat_value })
    }
}

/// Rounds a fractional token amount to a whole token count.
fn to_whole_tokens(amount: Decimal) -> Result<i64, TokenError> {
    amount
        .round_dp_with_strategy(0, RoundingStrategy::MidpointNearestEven)
        .to_i64()
        .ok_or(TokenError::AmountOutOfRange)
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;
    use rstest::rstest;
    use rust_decimal_macros::dec;

    fn default_policy() -> ConversionPolicy {
        ConversionPolicy::new(dec!(0.05), dec!(1.0)).unwrap()
    }

    #[test]
    fn test_sale_quote_reference_numbers() {
        // 100 fiat at 5% fee and token value 1.0
        let quote = default_policy().quote_sale(dec!(100)).unwrap();
        assert_eq!(quote.fee, dec!(5.00));
        assert_eq!(quote.net_fiat, dec!(95.00));
        assert_eq!(quote.tokens, 95);
    }

    #[test]
    fn test_sale_quote_zero_tokens_accepted() {
        // Net fiat below one token's value still quotes, with zero tokens.
        let policy = ConversionPolicy::new(dec!(0.05), dec!(10.0)).unwrap();
        let quote = policy.quote_sale(dec!(4)).unwrap();
        assert_eq!(quote.fee, dec!(0.20));
        assert_eq!(quote.net_fiat, dec!(3.80));
        assert_eq!(quote.tokens, 0);
    }

    #[rstest]
    #[case(dec!(0))]
    #[case(dec!(-1))]
    #[case(dec!(-100.50))]
    fn test_sale_quote_rejects_non_positive(#[case] amount: Decimal) {
        assert_eq!(
            default_policy().quote_sale(amount),
            Err(TokenError::InvalidAmount)
        );
    }

    #[test]
    fn test_token_rounding_half_to_even() {
        // Fee-free policy so net fiat equals the input.
        let policy = ConversionPolicy::new(dec!(0), dec!(1.0)).unwrap();
        assert_eq!(policy.quote_sale(dec!(2.5)).unwrap().tokens, 2);
        assert_eq!(policy.quote_sale(dec!(3.5)).unwrap().tokens, 4);
        assert_eq!(policy.quote_sale(dec!(2.4)).unwrap().tokens, 2);
        assert_eq!(policy.quote_sale(dec!(2.6)).unwrap().tokens, 3);
    }

    #[test]
    fn test_fee_rounded_to_cents_before_net() {
        // 10.01 * 0.0333 = 0.333333 -> fee 0.33, net 9.68
        let policy = ConversionPolicy::new(dec!(0.0333), dec!(1.0)).unwrap();
        let quote = policy.quote_sale(dec!(10.01)).unwrap();
        assert_eq!(quote.fee, dec!(0.33));
        assert_eq!(quote.net_fiat, dec!(9.68));
    }

    #[test]
    fn test_redemption_quote() {
        let quote = default_policy().quote_redemption(40).unwrap();
        assert_eq!(quote.tokens, 40);
        assert_eq!(quote.fiat_value, dec!(40.00));
    }

    #[test]
    fn test_redemption_fractional_token_value() {
        let policy = ConversionPolicy::new(dec!(0.05), dec!(0.25)).unwrap();
        let quote = policy.quote_redemption(3).unwrap();
        assert_eq!(quote.fiat_value, dec!(0.75));
    }

    #[rstest]
    #[case(0)]
    #[case(-5)]
    fn test_redemption_rejects_non_positive(#[case] tokens: i64) {
        assert_eq!(
            default_policy().quote_redemption(tokens),
            Err(TokenError::InvalidAmount)
        );
    }

    #[rstest]
    #[case(dec!(1))]
    #[case(dec!(1.5))]
    #[case(dec!(-0.01))]
    fn test_policy_rejects_bad_fee_ratio(#[case] ratio: Decimal) {
        assert!(matches!(
            ConversionPolicy::new(ratio, dec!(1.0)),
            Err(TokenError::InvalidFeeRatio(_))
        ));
    }

    #[rstest]
    #[case(dec!(0))]
    #[case(dec!(-1))]
    fn test_policy_rejects_bad_token_value(#[case] value: Decimal) {
        assert!(matches!(
            ConversionPolicy::new(dec!(0.05), value),
            Err(TokenError::InvalidTokenValue(_))
        ));
    }

    proptest! {
        #![proptest_config(ProptestConfig::with_cases(200))]

        /// For any positive fiat amount, fee + net fiat reassembles the
        /// original amount exactly, and the fee never exceeds the amount.
        #[test]
        fn prop_fee_plus_net_is_total(cents in 1i64..1_000_000_000i64) {
            let amount = Decimal::new(cents, 2);
            let quote = default_policy().quote_sale(amount).unwrap();

            prop_assert_eq!(quote.fee + quote.net_fiat, amount);
            prop_assert!(quote.fee >= Decimal::ZERO);
            prop_assert!(quote.fee < amount);
            prop_assert!(quote.tokens >= 0);
        }

        /// Redemption value scales linearly with the token count.
        #[test]
        fn prop_redemption_is_linear(tokens in 1i64..1_000_000i64) {
            let quote = default_policy().quote_redemption(tokens).unwrap();
            prop_assert_eq!(quote.fiat_value, Decimal::from(tokens));
        }

        /// Credited tokens are within one token of the exact net conversion.
        #[test]
        fn prop_rounding_error_bounded(cents in 1i64..1_000_000_000i64) {
            let amount = Decimal::new(cents, 2);
            let quote = default_policy().quote_sale(amount).unwrap();

            let exact = quote.net_fiat; // token value 1.0
            let credited = Decimal::from(quote.tokens);
            let drift = (exact - credited).abs();
            prop_assert!(drift <= dec!(0.5));
        }
    }
}
