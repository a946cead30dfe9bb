// ============================================================================
// Numeric Module
// Fixed-point decimals for money and score values
// ============================================================================
//
// This module provides:
// - FixedDecimal: three-digit fixed-point value tagged stored or display
// - Representation: the stored/display tag
// - SerializedDecimal: the {value, state} boundary record
// - Operand: right-hand side of comparisons (number or value)
// - NumericError: error types for construction and arithmetic
//
// Design principles:
// - Magnitudes kept as constructed, arithmetic on exact decimals
// - All fallible operations return Result (no panics)
// - Values are Copy and never mutated

mod errors;
mod fixed_decimal;
mod operand;
mod representation;
mod serialization;

pub use errors::{NumericError, NumericResult};
pub use fixed_decimal::{Amount, FixedDecimal, Score, MAX_VALUE, MIN_VALUE, PRECISION, SCALE};
pub use operand::Operand;
pub use representation::Representation;
pub use serialization::SerializedDecimal;
