//! Tax-inclusive price calculation and wire formatting.
//!
//! All arithmetic is fixed-point (`rust_decimal`). The processor expects a
//! numeric string with exactly two fractional digits, so amounts are rounded
//! half away from zero and then rescaled, never truncated.

use rust_decimal::{Decimal, RoundingStrategy};

/// Number of fractional digits in a formatted price.
pub const PRICE_SCALE: u32 = 2;

/// Applies a tax percentage to a base price: `price * (1 + tax / 100)`.
///
/// The result is not rounded; use [`format_price`] for the wire value.
/// Returns `None` when the product does not fit in a `Decimal`.
pub fn effective_price(price: Decimal, tax_percentage: Decimal) -> Option<Decimal> {
    let multiplier = Decimal::ONE.checked_add(tax_percentage.checked_div(Decimal::ONE_HUNDRED)?)?;
    price.checked_mul(multiplier)
}

/// Renders an amount with exactly two decimal places (`9.999` -> `"10.00"`).
pub fn format_price(amount: Decimal) -> String {
    let mut rounded =
        amount.round_dp_with_strategy(PRICE_SCALE, RoundingStrategy::MidpointAwayFromZero);
    rounded.rescale(PRICE_SCALE);
    rounded.to_string()
}

/// Convenience for the payload: tax-inclusive price, formatted.
pub fn taxed_price_string(price: Decimal, tax_percentage: Decimal) -> Option<String> {
    effective_price(price, tax_percentage).map(format_price)
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;
    use std::str::FromStr;

    fn dec(s: &str) -> Decimal {
        Decimal::from_str(s).unwrap()
    }

    #[test]
    fn rounds_up_instead_of_truncating() {
        assert_eq!(taxed_price_string(dec("9.999"), Decimal::ZERO).unwrap(), "10.00");
    }

    #[test]
    fn pads_whole_amounts_to_two_places() {
        assert_eq!(format_price(dec("10")), "10.00");
        assert_eq!(format_price(dec("7.5")), "7.50");
    }

    #[test]
    fn midpoint_rounds_away_from_zero() {
        assert_eq!(format_price(dec("1.005")), "1.01");
        assert_eq!(format_price(dec("2.345")), "2.35");
    }

    #[test]
    fn applies_tax_percentage() {
        assert_eq!(taxed_price_string(dec("10.00"), dec("20")).unwrap(), "12.00");
        assert_eq!(taxed_price_string(dec("9.99"), dec("21")).unwrap(), "12.09");
    }

    #[test]
    fn fractional_tax_percentage() {
        // 100 * 1.0825 = 108.25
        assert_eq!(taxed_price_string(dec("100"), dec("8.25")).unwrap(), "108.25");
    }

    #[test]
    fn zero_tax_leaves_price_unchanged() {
        assert_eq!(effective_price(dec("42.42"), Decimal::ZERO), Some(dec("42.42")));
    }

    #[test]
    fn overflowing_price_is_none() {
        assert_eq!(effective_price(Decimal::MAX, dec("20")), None);
        assert_eq!(taxed_price_string(Decimal::MAX, dec("100")), None);
    }

    #[test]
    fn max_price_without_tax_still_fits() {
        assert_eq!(effective_price(Decimal::MAX, Decimal::ZERO), Some(Decimal::MAX));
    }

    proptest! {
        #[test]
        fn formatted_price_always_has_two_fraction_digits(
            cents in 0i64..10_000_000,
            extra in 0u32..1000,
            tax in 0u32..50,
        ) {
            let price = Decimal::new(cents, 2) + Decimal::new(extra as i64, 5);
            let formatted = taxed_price_string(price, Decimal::from(tax)).unwrap();
            let (_, fraction) = formatted.split_once('.').unwrap();
            prop_assert_eq!(fraction.len(), 2);
        }

        #[test]
        fn formatting_is_within_half_a_cent(cents in 0i64..10_000_000, extra in 0i64..1000) {
            let amount = Decimal::new(cents * 1000 + extra, 5);
            let formatted = Decimal::from_str(&format_price(amount)).unwrap();
            prop_assert!((formatted - amount).abs() <= Decimal::new(5, 3));
        }
    }
}
