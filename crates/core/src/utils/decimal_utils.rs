use rust_decimal::Decimal;

use crate::constants::PERCENT;

/// `part / whole` expressed in percent, zero when `whole` is zero.
///
/// A ratio too large for `Decimal` clamps to `Decimal::MAX` (or `MIN` when
/// the signs differ).
pub fn ratio_percent(part: Decimal, whole: Decimal) -> Decimal {
    if whole.is_zero() {
        return Decimal::ZERO;
    }
    part.checked_div(whole)
        .and_then(|ratio| ratio.checked_mul(PERCENT))
        .unwrap_or(if part.is_sign_negative() == whole.is_sign_negative() {
            Decimal::MAX
        } else {
            Decimal::MIN
        })
}

/// Sum that clamps at the representable range instead of overflowing.
pub fn saturating_sum(values: impl IntoIterator<Item = Decimal>) -> Decimal {
    values
        .into_iter()
        .fold(Decimal::ZERO, |acc, value| acc.saturating_add(value))
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn test_ratio_percent() {
        assert_eq!(ratio_percent(dec!(20), dec!(100)), dec!(20));
        assert_eq!(ratio_percent(dec!(-1), dec!(4)), dec!(-25));
        assert_eq!(ratio_percent(dec!(5), Decimal::ZERO), Decimal::ZERO);
    }

    #[test]
    fn test_ratio_percent_clamps_on_overflow() {
        let tiny = Decimal::new(1, 28);
        assert_eq!(ratio_percent(dec!(1000000000000), tiny), Decimal::MAX);
        assert_eq!(ratio_percent(dec!(-1000000000000), tiny), Decimal::MIN);
    }

    #[test]
    fn test_saturating_sum() {
        assert_eq!(saturating_sum([dec!(1.5), dec!(2.25)]), dec!(3.75));
        assert_eq!(saturating_sum(Vec::new()), Decimal::ZERO);
        assert_eq!(saturating_sum([Decimal::MAX, dec!(1), dec!(1)]), Decimal::MAX);
    }
}
