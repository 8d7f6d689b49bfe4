// ============================================================================
// Money Arithmetic
// Exact negation, addition and repeated-addition multiplication
// ============================================================================

use super::amount::Money;
use super::errors::{must, MoneyError, MoneyResult};
use std::ops::{Add, Neg};

impl Money {
    /// Return the same amount with the sign flipped.
    ///
    /// # Errors
    /// Returns `InvalidValue` if `self` is not valid.
    pub fn negate(&self) -> MoneyResult<Self> {
        if !self.is_valid() {
            tracing::debug!(value = ?self, "negate rejected invalid money value");
            return Err(MoneyError::InvalidValue);
        }

        // nanos is in range here; only units can overflow, and it wraps
        Ok(Self {
            units: self.units.wrapping_neg(),
            nanos: -self.nanos,
            currency_code: self.currency_code.clone(),
        })
    }

    /// Add two amounts exactly.
    ///
    /// Currency codes are compared as plain strings, so two amounts without a
    /// currency code can be summed even though
    /// [`Money::are_same_currency`] reports them as different.
    ///
    /// # Errors
    /// - `InvalidValue` if either operand is not valid (checked first)
    /// - `MismatchingCurrency` if the currency codes differ
    ///
    /// # Example
    /// ```
    /// use checkout_money::money::Money;
    ///
    /// let a = Money::new(1, 800_000_000, "USD");
    /// let b = Money::new(0, 500_000_000, "USD");
    /// assert_eq!(a.sum(&b).unwrap(), Money::new(2, 300_000_000, "USD"));
    /// ```
    pub fn sum(&self, other: &Self) -> MoneyResult<Self> {
        if !self.is_valid() || !other.is_valid() {
            tracing::debug!(lhs = ?self, rhs = ?other, "sum rejected invalid money value");
            return Err(MoneyError::InvalidValue);
        }
        if self.currency_code != other.currency_code {
            tracing::debug!(
                lhs = %self.currency_code,
                rhs = %other.currency_code,
                "sum rejected mismatching currency codes"
            );
            return Err(MoneyError::MismatchingCurrency);
        }

        // Two valid nanos values sum to less than 2 * NANOS_MOD, within i32
        let (units, nanos) = normalize(
            self.units.wrapping_add(other.units),
            self.nanos + other.nanos,
        );

        Ok(Self {
            units,
            nanos,
            currency_code: self.currency_code.clone(),
        })
    }

    /// Multiply by a natural number by summing the value onto itself `n - 1`
    /// times.
    ///
    /// `n == 0` yields zero in this currency and `n == 1` yields the value
    /// unchanged.
    ///
    /// # Errors
    /// Returns `InvalidValue` if `self` is not valid, or any error from the
    /// intermediate sums.
    pub fn multiply_slow(&self, n: u32) -> MoneyResult<Self> {
        if !self.is_valid() {
            tracing::debug!(value = ?self, n, "multiply_slow rejected invalid money value");
            return Err(MoneyError::InvalidValue);
        }

        match n {
            0 => Ok(Self::zero(self.currency_code.clone())),
            1 => Ok(self.clone()),
            _ => (1..n).try_fold(self.clone(), |product, _| product.sum(self)),
        }
    }
}

/// Bring a raw units/nanos sum back into canonical form.
///
/// When the raw signs agree (a zero `units` agrees with either sign) the nanos
/// carry is moved into units with truncating division. Otherwise exactly one
/// unit is borrowed toward the sign of `units`; the raw nanos are nonzero and
/// below one unit in magnitude in that case.
///
/// Overflow of `units` wraps and is not reported.
#[inline]
fn normalize(units: i64, nanos: i32) -> (i64, i32) {
    if units == 0 || (units > 0 && nanos >= 0) || (units < 0 && nanos <= 0) {
        (
            units.wrapping_add(i64::from(nanos / Money::NANOS_MOD)),
            nanos % Money::NANOS_MOD,
        )
    } else if units > 0 {
        (units - 1, nanos + Money::NANOS_MOD)
    } else {
        (units + 1, nanos - Money::NANOS_MOD)
    }
}

// ============================================================================
// Operators
// ============================================================================

// Panicking operators for operands already known to be valid and of one
// currency - use sum/negate when that is not established
impl Add<&Money> for &Money {
    type Output = Money;

    #[inline]
    fn add(self, rhs: &Money) -> Self::Output {
        must(self.sum(rhs))
    }
}

impl Add for Money {
    type Output = Money;

    #[inline]
    fn add(self, rhs: Money) -> Self::Output {
        &self + &rhs
    }
}

impl Neg for &Money {
    type Output = Money;

    #[inline]
    fn neg(self) -> Self::Output {
        must(self.negate())
    }
}

impl Neg for Money {
    type Output = Money;

    #[inline]
    fn neg(self) -> Self::Output {
        -&self
    }
}
