// ============================================================================
// Money Errors
// Error types for money validation and arithmetic
// ============================================================================

use std::fmt;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Errors that can occur during money arithmetic.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum MoneyError {
    /// An operand has out-of-range nanos or inconsistent units/nanos signs
    InvalidValue,
    /// Operands carry different currency codes
    MismatchingCurrency,
}

impl fmt::Display for MoneyError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MoneyError::InvalidValue => {
                write!(f, "one of the specified money values is invalid")
            },
            MoneyError::MismatchingCurrency => write!(f, "mismatching currency codes"),
        }
    }
}

impl std::error::Error for MoneyError {}

/// Result type alias for money operations
pub type MoneyResult<T> = Result<T, MoneyError>;

/// Unwrap a money result, panicking with the error if there is one.
///
/// Only meant for call sites that have already established the operands are
/// valid and share a currency:
///
/// ```
/// use checkout_money::money::{must, Money};
///
/// let a = Money::new(1, 500_000_000, "USD");
/// let b = Money::new(2, 0, "USD");
/// let total = must(a.sum(&b));
/// assert_eq!(total, Money::new(3, 500_000_000, "USD"));
/// ```
///
/// # Panics
/// Panics if `result` is an `Err`.
#[track_caller]
pub fn must<T>(result: MoneyResult<T>) -> T {
    match result {
        Ok(value) => value,
        Err(err) => {
            tracing::error!(error = %err, "money operation failed where success was required");
            panic!("{}", err)
        },
    }
}
