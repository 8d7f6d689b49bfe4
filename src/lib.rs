// ============================================================================
// Checkout Money Library
// Exact decimal money arithmetic for checkout and pricing services
// ============================================================================

//! # Checkout Money
//!
//! Exact money arithmetic on amounts stored as whole `units`, fractional
//! `nanos` (billionths of a unit) and a currency code.
//!
//! ## Features
//!
//! - **No floating point**: sums carry and borrow between units and nanos
//! - **Explicit validation**: invalid values are representable and rejected
//!   by every operation with [`MoneyError::InvalidValue`](money::MoneyError)
//! - **Currency safety**: sums across different currency codes fail
//! - **Decimal bridge**: exact conversion to and from `rust_decimal::Decimal`
//!
//! ## Example
//!
//! ```rust
//! use checkout_money::prelude::*;
//!
//! let price = Money::new(19, 990_000_000, "USD"); // 19.99
//! let shipping = Money::new(4, 500_000_000, "USD"); // 4.50
//!
//! let items = price.multiply_slow(3)?;
//! let total = items.sum(&shipping)?;
//! assert_eq!(total, Money::new(64, 470_000_000, "USD"));
//!
//! let refund = total.negate()?;
//! assert!(refund.is_negative());
//! assert!(total.sum(&refund)?.is_zero());
//!
//! let eur = Money::new(1, 0, "EUR");
//! assert_eq!(total.sum(&eur), Err(MoneyError::MismatchingCurrency));
//! # Ok::<(), MoneyError>(())
//! ```

pub mod money;

// Re-exports for convenience
pub mod prelude {
    pub use crate::money::{must, Money, MoneyError, MoneyResult};
}

#[cfg(test)]
mod integration_tests {
    use super::prelude::*;

    #[test]
    fn test_end_to_end_order_total() {
        let item_prices = [
            (Money::new(12, 500_000_000, "USD"), 2u32),
            (Money::new(0, 990_000_000, "USD"), 3),
            (Money::new(100, 0, "USD"), 0),
        ];

        let subtotal = item_prices
            .iter()
            .map(|(price, quantity)| price.multiply_slow(*quantity))
            .try_fold(Money::zero("USD"), |acc, line| acc.sum(&line?))
            .unwrap();
        assert_eq!(subtotal, Money::new(27, 970_000_000, "USD"));

        let discount = must(Money::new(2, 970_000_000, "USD").negate());
        let total = must(subtotal.sum(&discount));
        assert_eq!(total, Money::new(25, 0, "USD"));
        assert!(total.is_positive());
    }

    #[test]
    fn test_errors_propagate_through_question_mark() {
        fn total(a: &Money, b: &Money) -> MoneyResult<Money> {
            a.sum(b)?.multiply_slow(2)
        }

        let usd = Money::new(1, 0, "USD");
        assert_eq!(total(&usd, &usd), Ok(Money::new(4, 0, "USD")));
        assert_eq!(
            total(&usd, &Money::new(1, 0, "GBP")),
            Err(MoneyError::MismatchingCurrency)
        );
        assert_eq!(
            total(&usd, &Money::new(1, -1, "USD")),
            Err(MoneyError::InvalidValue)
        );
    }
}
