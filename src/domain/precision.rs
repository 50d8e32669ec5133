//! Shared rounding policy for every monetary calculation.
//!
//! Results are precision-sensitive, so the policy is part of the public contract:
//!
//! * every division is rounded to [`DIVISION_SCALE`] decimal places using banker's
//!   rounding (midpoint to even), except the installment quotient, which rounds up
//!   so the cent rounding below never sees a truncated excess;
//! * the monthly installment is quantised to the cent rounding **up**;
//! * each interest portion of a schedule entry is quantised to the cent rounding **down**.
//!
//! Rounding the installment up while rounding interest down means the principal
//! portions of a schedule always cover the loan, so the final balance reaches zero.

use rust_decimal::{Decimal, RoundingStrategy};

/// Decimal places kept after each division.
pub const DIVISION_SCALE: u32 = 12;

/// Decimal places of a monetary amount (cents).
pub const MONEY_SCALE: u32 = 2;

/// Smallest monetary step.
pub const CENT: Decimal = Decimal::from_parts(1, 0, 0, false, MONEY_SCALE);

/// Divides under the shared policy.
///
/// Callers guarantee a non-zero divisor.
pub fn divide(dividend: Decimal, divisor: Decimal) -> Decimal {
    (dividend / divisor)
        .round_dp_with_strategy(DIVISION_SCALE, RoundingStrategy::MidpointNearestEven)
}

/// Divides at [`DIVISION_SCALE`] places, never below the exact quotient.
///
/// Callers guarantee a non-zero divisor.
pub fn divide_up(dividend: Decimal, divisor: Decimal) -> Decimal {
    (dividend / divisor)
        .round_dp_with_strategy(DIVISION_SCALE, RoundingStrategy::ToPositiveInfinity)
}

/// Quantises an installment to the cent, never below the exact value.
pub fn installment(value: Decimal) -> Decimal {
    value.round_dp_with_strategy(MONEY_SCALE, RoundingStrategy::ToPositiveInfinity)
}

/// Quantises an interest charge to the cent, never above the exact value.
pub fn interest(value: Decimal) -> Decimal {
    value.round_dp_with_strategy(MONEY_SCALE, RoundingStrategy::ToNegativeInfinity)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn test_divide_uses_bankers_rounding() {
        assert_eq!(divide(dec!(7.75), dec!(1200)), dec!(0.006458333333));
        assert_eq!(divide(dec!(11.25), dec!(1200)), dec!(0.009375));
        // 0.0000000000005 sits exactly on the midpoint at 12 places.
        assert_eq!(divide(dec!(0.000000000001), dec!(2)), dec!(0.000000000000));
        assert_eq!(divide(dec!(0.000000000003), dec!(2)), dec!(0.000000000002));
    }

    #[test]
    fn test_divide_up_never_truncates() {
        assert_eq!(divide_up(dec!(1), dec!(3)), dec!(0.333333333334));
        assert_eq!(divide_up(dec!(-1), dec!(3)), dec!(-0.333333333333));
        assert_eq!(divide_up(dec!(0.0000000000001), dec!(1)), dec!(0.000000000001));
        assert_eq!(installment(divide_up(dec!(150.0000000000001), dec!(1))), dec!(150.01));
        assert_eq!(CENT, dec!(0.01));
    }

    #[test]
    fn test_installment_rounds_up() {
        assert_eq!(installment(dec!(287.4355818776)), dec!(287.44));
        assert_eq!(installment(dec!(287.4300000001)), dec!(287.44));
        assert_eq!(installment(dec!(287.43)), dec!(287.43));
    }

    #[test]
    fn test_interest_rounds_down() {
        assert_eq!(interest(dec!(140.625)), dec!(140.62));
        assert_eq!(interest(dec!(140.6299)), dec!(140.62));
        assert_eq!(interest(dec!(-0.031)), dec!(-0.04));
    }
}
