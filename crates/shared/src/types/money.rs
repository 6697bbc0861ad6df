//! Fiat amount helpers.
//!
//! CRITICAL: Never use floating-point for money calculations.
//! All fiat amounts are `rust_decimal::Decimal`; rounding is banker's
//! rounding (round half to even) to minimize cumulative errors.

use rust_decimal::{Decimal, RoundingStrategy};

/// Rounds a fiat amount to cents using banker's rounding.
#[must_use]
pub fn round_cents(amount: Decimal) -> Decimal {
    amount.round_dp_with_strategy(2, RoundingStrategy::MidpointNearestEven)
}

/// Formats a fiat amount as a 2-decimal string, e.g. `"5.00"`.
///
/// The amount is rounded to cents first, so the string always carries
/// exactly two fractional digits.
#[must_use]
pub fn format_fiat(amount: Decimal) -> String {
    format!("{:.2}", round_cents(amount))
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn test_round_cents() {
        assert_eq!(round_cents(dec!(5)), dec!(5));
        assert_eq!(round_cents(dec!(5.005)), dec!(5.00));
        assert_eq!(round_cents(dec!(5.015)), dec!(5.02));
        assert_eq!(round_cents(dec!(5.999)), dec!(6.00));
    }

    #[test]
    fn test_format_fiat_pads_to_two_decimals() {
        assert_eq!(format_fiat(dec!(5)), "5.00");
        assert_eq!(format_fiat(dec!(40)), "40.00");
        assert_eq!(format_fiat(dec!(0.5)), "0.50");
    }

    #[test]
    fn test_format_fiat_negative() {
        assert_eq!(format_fiat(dec!(-40)), "-40.00");
    }

    #[test]
    fn test_format_fiat_bankers_rounding() {
        // round half to even: 2.125 -> 2.12, 2.135 -> 2.14
        assert_eq!(format_fiat(dec!(2.125)), "2.12");
        assert_eq!(format_fiat(dec!(2.135)), "2.14");
    }
}
