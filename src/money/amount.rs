// ============================================================================
// Money Value Type
// Units/nanos amount tagged with a currency code
// ============================================================================

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// A monetary amount: whole `units` plus `nanos` (10^-9 units) in a currency.
///
/// The fields are public and construction does not validate, so a `Money`
/// can hold values that violate the invariants. Call [`Money::is_valid`]
/// before trusting a value from outside; every fallible operation does so
/// itself and fails with `InvalidValue`.
///
/// # Invariants
/// - `nanos` lies in `NANOS_MIN..=NANOS_MAX`
/// - if `units` and `nanos` are both nonzero they have the same sign
///
/// # Example
/// ```
/// use checkout_money::money::Money;
///
/// // -1.75 USD
/// let m = Money::new(-1, -750_000_000, "USD");
/// assert!(m.is_valid());
/// assert!(m.is_negative());
///
/// // Mixed signs are representable but invalid
/// assert!(!Money::new(1, -750_000_000, "USD").is_valid());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(default, rename_all = "camelCase"))]
pub struct Money {
    /// Whole currency units
    pub units: i64,

    /// Fractional units in billionths
    pub nanos: i32,

    /// ISO 4217 code, empty when unspecified
    pub currency_code: String,
}

impl Money {
    /// Smallest valid `nanos` value
    pub const NANOS_MIN: i32 = -999_999_999;

    /// Largest valid `nanos` value
    pub const NANOS_MAX: i32 = 999_999_999;

    /// Nanos per unit
    pub const NANOS_MOD: i32 = 1_000_000_000;

    // ========================================================================
    // Construction
    // ========================================================================

    /// Create a money value without validating it.
    #[inline]
    pub fn new(units: i64, nanos: i32, currency_code: impl Into<String>) -> Self {
        Self {
            units,
            nanos,
            currency_code: currency_code.into(),
        }
    }

    /// Zero amount in the given currency.
    #[inline]
    pub fn zero(currency_code: impl Into<String>) -> Self {
        Self::new(0, 0, currency_code)
    }

    // ========================================================================
    // Validation
    // ========================================================================

    /// Check that the nanos range and units/nanos sign invariants hold.
    #[inline]
    pub fn is_valid(&self) -> bool {
        self.signs_match() && Self::nanos_in_range(self.nanos)
    }

    #[inline]
    fn signs_match(&self) -> bool {
        self.nanos == 0 || self.units == 0 || (self.nanos < 0) == (self.units < 0)
    }

    #[inline]
    fn nanos_in_range(nanos: i32) -> bool {
        (Self::NANOS_MIN..=Self::NANOS_MAX).contains(&nanos)
    }

    /// Check if both units and nanos are zero. Does not require validity.
    #[inline]
    pub fn is_zero(&self) -> bool {
        self.units == 0 && self.nanos == 0
    }

    /// Check if the value is valid and strictly greater than zero.
    #[inline]
    pub fn is_positive(&self) -> bool {
        self.is_valid() && (self.units > 0 || (self.units == 0 && self.nanos > 0))
    }

    /// Check if the value is valid and strictly less than zero.
    #[inline]
    pub fn is_negative(&self) -> bool {
        self.is_valid() && (self.units < 0 || (self.units == 0 && self.nanos < 0))
    }

    // ========================================================================
    // Comparison
    // ========================================================================

    /// Check that both values carry the same, non-empty currency code.
    ///
    /// Two amounts without a currency code are never the same currency.
    #[inline]
    pub fn are_same_currency(&self, other: &Self) -> bool {
        !self.currency_code.is_empty() && self.currency_code == other.currency_code
    }

    /// Compare the amounts only, ignoring currency codes.
    ///
    /// Only meaningful when both values are of the same currency (or both
    /// have none); combine with [`Money::are_same_currency`] when that matters.
    /// `==` on `Money` also compares the currency code.
    #[inline]
    pub fn are_equals(&self, other: &Self) -> bool {
        self.units == other.units && self.nanos == other.nanos
    }
}
