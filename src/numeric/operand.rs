// ============================================================================
// Comparison Operand
// Right-hand side accepted by FixedDecimal comparisons
// ============================================================================

use super::fixed_decimal::FixedDecimal;
use rust_decimal::Decimal;

/// Either a raw number or another fixed decimal (any representation).
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Operand {
    /// Raw binary double, compared in f64 space
    Number(f64),
    /// Exact decimal
    Decimal(Decimal),
    /// Another fixed decimal, compared by its display value
    Value(FixedDecimal),
}

impl From<f64> for Operand {
    fn from(value: f64) -> Self {
        Operand::Number(value)
    }
}

impl From<i64> for Operand {
    fn from(value: i64) -> Self {
        Operand::Decimal(Decimal::from(value))
    }
}

impl From<Decimal> for Operand {
    fn from(value: Decimal) -> Self {
        Operand::Decimal(value)
    }
}

impl From<FixedDecimal> for Operand {
    fn from(value: FixedDecimal) -> Self {
        Operand::Value(value)
    }
}

impl From<&FixedDecimal> for Operand {
    fn from(value: &FixedDecimal) -> Self {
        Operand::Value(*value)
    }
}
