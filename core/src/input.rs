use std::str::FromStr;

use rust_decimal::{Decimal, RoundingStrategy};

use crate::error::PaysheetError;

/// Upper bound for one day's logged hours.
pub const MAX_HOURS_PER_DAY: Decimal = Decimal::from_parts(24, 0, 0, false, 0);

/// Upper bound for a rate. Keeps `hours * rate` sums far from `Decimal::MAX`.
pub const MAX_RATE: Decimal = Decimal::from_parts(1_000_000, 0, 0, false, 0);

/// Rounds to cents, half away from zero (same as JavaScript's `toFixed(2)`).
pub fn round_two_places(value: Decimal) -> Decimal {
    value.round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero)
}

/// Renders a value with exactly two decimals, e.g. `10` -> `"10.00"`.
pub fn format_two_places(value: Decimal) -> String {
    let mut rounded = round_two_places(value);
    rounded.rescale(2);
    rounded.to_string()
}

/// Checks an already-numeric value: not negative, not above `max`. Zero is
/// normalised so `-0` never reaches storage.
pub fn check_range(
    field: &'static str,
    value: Decimal,
    max: Decimal,
) -> Result<Decimal, PaysheetError> {
    if value.is_zero() {
        return Ok(Decimal::ZERO);
    }
    if value.is_sign_negative() {
        return Err(PaysheetError::NegativeValue {
            field,
            value: value.to_string(),
        });
    }
    if value > max {
        return Err(PaysheetError::OutOfRange {
            field,
            value: value.to_string(),
            max: max.to_string(),
        });
    }
    Ok(round_two_places(value))
}

pub fn check_rate(rate: Decimal) -> Result<Decimal, PaysheetError> {
    check_range("rate", rate, MAX_RATE)
}

pub fn check_hours(hours: Decimal) -> Result<Decimal, PaysheetError> {
    check_range("hours", hours, MAX_HOURS_PER_DAY)
}

/// Parses user-entered numeric text into a decimal. Empty, non-numeric,
/// negative and out-of-range input is rejected instead of being stored.
pub fn parse_non_negative(
    field: &'static str,
    input: &str,
    max: Decimal,
) -> Result<Decimal, PaysheetError> {
    let trimmed = input.trim();
    let invalid = || PaysheetError::InvalidNumber {
        field,
        input: input.to_string(),
    };
    if trimmed.is_empty() {
        return Err(invalid());
    }

    let value = Decimal::from_str(trimmed)
        .or_else(|_| Decimal::from_scientific(trimmed))
        .map_err(|_| invalid())?;
    check_range(field, value, max)
}

pub fn parse_rate(input: &str) -> Result<Decimal, PaysheetError> {
    parse_non_negative("rate", input, MAX_RATE)
}

pub fn parse_hours(input: &str) -> Result<Decimal, PaysheetError> {
    parse_non_negative("hours", input, MAX_HOURS_PER_DAY)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn test_parse_rate() {
        assert_eq!(parse_rate("15").unwrap(), dec!(15));
        assert_eq!(parse_rate(" 12.345 ").unwrap(), dec!(12.35));
        assert_eq!(parse_rate("0").unwrap(), Decimal::ZERO);
    }

    #[test]
    fn test_parse_hours_rounds_half_away_from_zero() {
        assert_eq!(parse_hours("2.005").unwrap(), dec!(2.01));
        assert_eq!(parse_hours("2.015").unwrap(), dec!(2.02));
    }

    #[test]
    fn test_rejects_non_numeric() {
        for bad in ["", "   ", "abc", "NaN", "1.2.3", "inf"] {
            assert_eq!(
                parse_hours(bad),
                Err(PaysheetError::InvalidNumber {
                    field: "hours",
                    input: bad.to_string()
                }),
                "input {bad:?} should be rejected"
            );
        }
    }

    #[test]
    fn test_rejects_negative() {
        assert!(matches!(
            parse_rate("-3"),
            Err(PaysheetError::NegativeValue { field: "rate", .. })
        ));
    }

    #[test]
    fn test_rejects_values_above_bounds() {
        assert_eq!(parse_hours("24").unwrap(), dec!(24));
        assert!(matches!(
            parse_hours("24.01"),
            Err(PaysheetError::OutOfRange { field: "hours", .. })
        ));
        assert!(matches!(
            parse_hours("50000000000000000000000000000"),
            Err(PaysheetError::OutOfRange { field: "hours", .. })
        ));
        assert!(matches!(
            parse_rate("5e28"),
            Err(PaysheetError::OutOfRange { field: "rate", .. })
        ));
        assert_eq!(parse_rate("1000000").unwrap(), MAX_RATE);
    }

    #[test]
    fn test_check_rate_and_hours() {
        assert_eq!(check_rate(dec!(12.345)).unwrap(), dec!(12.35));
        assert!(check_rate(dec!(-0.01)).is_err());
        assert!(check_hours(dec!(25)).is_err());
    }

    #[test]
    fn test_format_two_places() {
        assert_eq!(format_two_places(dec!(10)), "10.00");
        assert_eq!(format_two_places(dec!(0)), "0.00");
        assert_eq!(format_two_places(dec!(3.456)), "3.46");
        assert_eq!(format_two_places(dec!(1.5)), "1.50");
    }
}
