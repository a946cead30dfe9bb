// ============================================================================
// Fixed Decimal Library
// Floating-point-safe decimal values for money and scores
// ============================================================================

//! # Fixed Decimal
//!
//! An immutable fixed-point decimal with three fractional digits, for
//! monetary and score values that must not drift the way binary doubles do.
//!
//! ## Features
//!
//! - **Stored / Display tagging**: every value knows whether its magnitude is
//!   the scaled integer kept in storage or the human-facing decimal
//! - **Floor rounding** toward negative infinity at the third digit
//! - **Exact arithmetic** on the decimal value of each operand, re-validated on every result
//! - **Serialization** as a `{value, state}` record (serde behind the `serde` feature)
//!
//! ## Example
//!
//! ```rust
//! use fixed_decimal::prelude::*;
//!
//! let price = FixedDecimal::from_display_number(1.234).unwrap();
//! let stored = price.to_stored();
//! assert_eq!(stored.serialize(), SerializedDecimal::new(1234.0, Representation::Stored));
//!
//! let total = price.add(FixedDecimal::from_display_number(2.345).unwrap()).unwrap();
//! assert_eq!(total.to_text(), "3.579");
//! assert!(total.is_display());
//! ```

pub mod numeric;

// Re-exports for convenience
pub mod prelude {
    pub use crate::numeric::{
        Amount, FixedDecimal, NumericError, NumericResult, Operand, Representation, Score,
        SerializedDecimal, MAX_VALUE, MIN_VALUE, PRECISION, SCALE,
    };
}
