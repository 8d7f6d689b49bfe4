// ============================================================================
// Conversion to/from rust_decimal (for API boundaries)
// ============================================================================

use super::amount::Money;
use super::errors::{MoneyError, MoneyResult};
use rust_decimal::prelude::ToPrimitive;
use rust_decimal::Decimal;

/// Number of fractional digits carried by `nanos`
const NANOS_SCALE: u32 = 9;

impl Money {
    /// Convert the amount to an exact `Decimal` with nine fractional digits.
    ///
    /// The currency code is not part of the result.
    ///
    /// # Errors
    /// Returns `InvalidValue` if `self` is not valid.
    pub fn to_decimal(&self) -> MoneyResult<Decimal> {
        if !self.is_valid() {
            return Err(MoneyError::InvalidValue);
        }

        let raw = i128::from(self.units) * i128::from(Money::NANOS_MOD) + i128::from(self.nanos);
        Decimal::try_from_i128_with_scale(raw, NANOS_SCALE).map_err(|_| MoneyError::InvalidValue)
    }

    /// Build a money value from a `Decimal` amount.
    ///
    /// Units and nanos both take the sign of `amount`, so the result is
    /// always valid.
    ///
    /// # Errors
    /// Returns `InvalidValue` if `amount` has significant digits below one
    /// nano, or its integer part does not fit in `units`.
    pub fn from_decimal(amount: Decimal, currency_code: impl Into<String>) -> MoneyResult<Self> {
        if amount.round_dp(NANOS_SCALE) != amount {
            tracing::debug!(%amount, "decimal amount is finer than one nano");
            return Err(MoneyError::InvalidValue);
        }

        let raw = amount
            .checked_mul(Decimal::from(Money::NANOS_MOD))
            .and_then(|scaled| scaled.to_i128())
            .ok_or(MoneyError::InvalidValue)?;

        let modulus = i128::from(Money::NANOS_MOD);
        let units = i64::try_from(raw / modulus).map_err(|_| MoneyError::InvalidValue)?;
        let nanos = i32::try_from(raw % modulus).map_err(|_| MoneyError::InvalidValue)?;

        Ok(Self::new(units, nanos, currency_code))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_to_decimal() {
        let m = Money::new(123, 456_000_000, "USD");
        assert_eq!(m.to_decimal().unwrap(), Decimal::new(123_456, 3));
        assert_eq!(m.to_decimal().unwrap().to_string(), "123.456000000");

        let neg = Money::new(0, -1, "USD");
        assert_eq!(neg.to_decimal().unwrap(), Decimal::new(-1, 9));
    }

    #[test]
    fn test_to_decimal_extremes() {
        let max = Money::new(i64::MAX, Money::NANOS_MAX, "");
        let expected = Decimal::from(i64::MAX) + Decimal::new(999_999_999, 9);
        assert_eq!(max.to_decimal().unwrap(), expected);
    }

    #[test]
    fn test_to_decimal_invalid() {
        assert_eq!(
            Money::new(1, -1, "USD").to_decimal(),
            Err(MoneyError::InvalidValue)
        );
    }

    #[test]
    fn test_from_decimal() {
        let m = Money::from_decimal(Decimal::new(12345, 2), "EUR").unwrap(); // 123.45
        assert_eq!(m, Money::new(123, 450_000_000, "EUR"));

        let neg = Money::from_decimal(Decimal::new(-2_500, 3), "EUR").unwrap(); // -2.5
        assert_eq!(neg, Money::new(-2, -500_000_000, "EUR"));
        assert!(neg.is_valid());

        let small = Money::from_decimal(Decimal::new(-7, 9), "").unwrap();
        assert_eq!(small, Money::new(0, -7, ""));
    }

    #[test]
    fn test_from_decimal_precision_loss() {
        // 10 fractional digits
        let result = Money::from_decimal(Decimal::new(1, 10), "USD");
        assert_eq!(result, Err(MoneyError::InvalidValue));

        // Trailing zeros beyond nine digits are not significant
        let padded = Money::from_decimal(Decimal::new(1_500_000_000_000, 12), "USD").unwrap();
        assert_eq!(padded, Money::new(1, 500_000_000, "USD"));
    }

    #[test]
    fn test_from_decimal_out_of_range() {
        let huge = Decimal::from(i64::MAX) * Decimal::from(10);
        assert_eq!(
            Money::from_decimal(huge, "USD"),
            Err(MoneyError::InvalidValue)
        );
    }
}
