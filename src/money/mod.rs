// ============================================================================
// Money Module
// Exact decimal money arithmetic on units/nanos pairs
// ============================================================================
//
// This module provides:
// - Money: units + nanos + currency code value type with validity predicates
// - MoneyError: Error types for invalid operands and currency mismatches
// - must: panic adapter for results whose success is already established
// - rust_decimal conversions for API boundaries
//
// Design principles:
// - No floating-point operations
// - Validity is checked by operations, never enforced by construction
// - Inputs are never mutated; every operation returns a new value

mod amount;
mod arithmetic;
mod decimal;
mod errors;

pub use amount::Money;
pub use errors::{must, MoneyError, MoneyResult};
