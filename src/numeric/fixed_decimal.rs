// ============================================================================
// Fixed-Point Decimal
// Three-digit fixed-point values tagged as stored or display
// ============================================================================

use super::errors::{NumericError, NumericResult};
use super::operand::Operand;
use super::representation::Representation;
use rust_decimal::prelude::ToPrimitive;
use rust_decimal::Decimal;
use std::cmp::Ordering;
use std::fmt;
use std::hash::{Hash, Hasher};
use std::ops::Neg;
use std::str::FromStr;

#[cfg(feature = "serde")]
use super::serialization::SerializedDecimal;
#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Number of fractional digits carried by every value.
pub const PRECISION: u32 = 3;

/// Scale factor between display and stored magnitudes (10^PRECISION).
pub const SCALE: i64 = 1_000;

/// Smallest accepted magnitude.
pub const MIN_VALUE: i64 = -999_999_999;

/// Largest accepted magnitude.
pub const MAX_VALUE: i64 = 999_999_999;

/// Immutable decimal with three fractional digits.
///
/// Holds a finite magnitude next to a [`Representation`] tag:
/// - `Stored`: the magnitude is the scaled integer (`1234`)
/// - `Display`: the magnitude is the human-facing decimal (`1.234`)
///
/// The magnitude is kept exactly as constructed, so a deserialized record
/// comes back unchanged. Rounding happens in `from_display_number`,
/// `to_stored` and arithmetic, always toward negative infinity at the third
/// fractional digit. Arithmetic runs on the exact decimal value of each
/// magnitude and always yields a `Display` value.
///
/// # Example
/// ```
/// use fixed_decimal::numeric::FixedDecimal;
///
/// let a = FixedDecimal::from_display_number(1.234)?;
/// let b = FixedDecimal::from_display_number(2.345)?;
/// assert_eq!(a.add(b)?.to_text(), "3.579");
/// assert_eq!(a.multiply(b)?.to_text(), "2.893");
/// # Ok::<(), fixed_decimal::numeric::NumericError>(())
/// ```
#[derive(Clone, Copy)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(
    feature = "serde",
    serde(into = "SerializedDecimal", try_from = "SerializedDecimal")
)]
pub struct FixedDecimal {
    magnitude: f64,
    representation: Representation,
}

/// Exact decimal value of a double, from its shortest round-trip digits.
///
/// Magnitudes below the 28-digit resolution of `Decimal` read as zero.
fn exact_decimal(value: f64) -> Decimal {
    Decimal::from_str(&value.to_string()).unwrap_or(Decimal::ZERO)
}

/// Floor of a decimal at the third fractional digit, in thousandths.
fn floor_thousandths(value: Decimal) -> Option<i64> {
    value
        .checked_mul(Decimal::from(SCALE))
        .and_then(|scaled| scaled.floor().to_i64())
}

impl FixedDecimal {
    // ========================================================================
    // Validation
    // ========================================================================

    /// Check that a number is finite and within [MIN_VALUE, MAX_VALUE].
    ///
    /// # Errors
    /// - `InvalidValue` for NaN or infinities
    /// - `OutOfRange` outside the accepted range
    pub fn validate(value: f64) -> NumericResult<()> {
        if !value.is_finite() {
            tracing::debug!(value, "rejected non-finite value");
            return Err(NumericError::InvalidValue);
        }
        if value > MAX_VALUE as f64 || value < MIN_VALUE as f64 {
            tracing::debug!(value, "rejected out-of-range value");
            return Err(NumericError::OutOfRange);
        }
        Ok(())
    }

    #[inline]
    pub(crate) const fn new(magnitude: f64, representation: Representation) -> Self {
        Self {
            magnitude,
            representation,
        }
    }

    /// Display value for a count of thousandths.
    #[inline]
    fn display_from_thousandths(thousandths: i64) -> Self {
        Self::new(thousandths as f64 / SCALE as f64, Representation::Display)
    }

    // ========================================================================
    // Construction
    // ========================================================================

    /// Create a display value from a binary double.
    ///
    /// Rounds toward negative infinity at the third fractional digit:
    /// `1.2345 -> 1.234`, `-1.2345 -> -1.235`. The floor is applied to the
    /// double product `x * 1000`, so doubles that sit just below a decimal
    /// boundary (`1.005` is `1.00499...` in binary) land on the lower step.
    /// Use [`FixedDecimal::from_display_decimal`] or `str::parse` for exact
    /// decimal input.
    pub fn from_display_number(value: f64) -> NumericResult<Self> {
        Self::validate(value)?;
        let scaled = (value * SCALE as f64).floor();
        Ok(Self::display_from_thousandths(scaled as i64))
    }

    /// Create a stored value from an already scaled integer (no scaling applied).
    pub fn from_stored_integer(value: i64) -> NumericResult<Self> {
        if !(MIN_VALUE..=MAX_VALUE).contains(&value) {
            tracing::debug!(value, "rejected out-of-range stored integer");
            return Err(NumericError::OutOfRange);
        }
        Ok(Self::new(value as f64, Representation::Stored))
    }

    /// Display-tagged zero.
    #[inline]
    pub const fn zero() -> Self {
        Self::new(0.0, Representation::Display)
    }

    /// Create a display value from an exact decimal, flooring at three digits.
    pub fn from_display_decimal(value: Decimal) -> NumericResult<Self> {
        if value > Decimal::from(MAX_VALUE) || value < Decimal::from(MIN_VALUE) {
            tracing::debug!(%value, "rejected out-of-range decimal");
            return Err(NumericError::OutOfRange);
        }
        let thousandths = floor_thousandths(value).ok_or(NumericError::OutOfRange)?;
        Ok(Self::display_from_thousandths(thousandths))
    }

    // ========================================================================
    // Accessors
    // ========================================================================

    /// Current representation tag.
    #[inline]
    pub const fn representation(&self) -> Representation {
        self.representation
    }

    #[inline]
    pub const fn is_stored(&self) -> bool {
        matches!(self.representation, Representation::Stored)
    }

    #[inline]
    pub const fn is_display(&self) -> bool {
        matches!(self.representation, Representation::Display)
    }

    /// Untransformed magnitude: the scaled integer for `Stored`, the decimal
    /// for `Display`.
    #[inline]
    pub const fn magnitude(&self) -> f64 {
        self.magnitude
    }

    /// Display value floored to whole thousandths.
    pub fn thousandths(&self) -> i64 {
        // Magnitudes are bounded by validation, so the floor fits in i64
        floor_thousandths(self.to_number()).unwrap_or_default()
    }

    #[inline]
    pub fn is_zero(&self) -> bool {
        self.magnitude == 0.0
    }

    #[inline]
    pub fn is_positive(&self) -> bool {
        self.magnitude > 0.0
    }

    #[inline]
    pub fn is_negative(&self) -> bool {
        self.magnitude < 0.0
    }

    // ========================================================================
    // Representation Conversion
    // ========================================================================

    /// Convert to the display representation (no-op when already display).
    pub fn to_display(self) -> Self {
        match self.representation {
            Representation::Display => self,
            Representation::Stored => Self::new(self.to_f64(), Representation::Display),
        }
    }

    /// Convert to the stored representation (no-op when already stored).
    ///
    /// The stored magnitude is `floor(display * 1000)`. It is not
    /// range-checked: a display value above 999,999.999 has a stored
    /// magnitude beyond MAX_VALUE.
    pub fn to_stored(self) -> Self {
        match self.representation {
            Representation::Stored => self,
            Representation::Display => {
                Self::new(self.thousandths() as f64, Representation::Stored)
            },
        }
    }

    /// Display-equivalent value, whatever the tag.
    pub fn to_number(&self) -> Decimal {
        let exact = exact_decimal(self.magnitude);
        match self.representation {
            Representation::Stored => exact / Decimal::from(SCALE),
            Representation::Display => exact,
        }
    }

    /// Display-equivalent value as a double.
    pub fn to_f64(&self) -> f64 {
        match self.representation {
            Representation::Stored => self.magnitude / SCALE as f64,
            Representation::Display => self.magnitude,
        }
    }

    /// Display-equivalent value with exactly three fractional digits.
    pub fn to_text(&self) -> String {
        self.to_string()
    }

    // ========================================================================
    // Arithmetic
    // ========================================================================

    /// Sum of both display values, floored at three digits.
    ///
    /// Operands are added as exact decimals, not as doubles:
    /// `0.3 - 0.1` is `0.200` here where the double pipeline gives `0.199`.
    ///
    /// # Errors
    /// Returns `OutOfRange` if the result leaves the accepted range.
    #[allow(clippy::should_implement_trait)]
    pub fn add(self, rhs: Self) -> NumericResult<Self> {
        let sum = self
            .to_number()
            .checked_add(rhs.to_number())
            .ok_or(NumericError::OutOfRange)?;
        Self::from_display_decimal(sum)
    }

    /// Difference of both display values, floored at three digits.
    pub fn subtract(self, rhs: Self) -> NumericResult<Self> {
        let difference = self
            .to_number()
            .checked_sub(rhs.to_number())
            .ok_or(NumericError::OutOfRange)?;
        Self::from_display_decimal(difference)
    }

    /// Product of both display values, floored at three digits.
    ///
    /// The exact product is floored, never a rounded one:
    /// `1.234 * 2.345 = 2.89373 -> 2.893`.
    pub fn multiply(self, rhs: Self) -> NumericResult<Self> {
        let product = self
            .to_number()
            .checked_mul(rhs.to_number())
            .ok_or(NumericError::OutOfRange)?;
        Self::from_display_decimal(product)
    }

    /// Quotient of both display values, floored at three digits.
    ///
    /// # Errors
    /// - `DivisionByZero` if the divisor is zero, whatever its tag
    /// - `OutOfRange` if the quotient leaves the accepted range
    pub fn divide(self, rhs: Self) -> NumericResult<Self> {
        let divisor = rhs.to_number();
        if divisor.is_zero() {
            tracing::debug!(dividend = %self, "rejected division by zero");
            return Err(NumericError::DivisionByZero);
        }
        let quotient = self
            .to_number()
            .checked_div(divisor)
            .ok_or(NumericError::OutOfRange)?;
        Self::from_display_decimal(quotient)
    }

    /// Absolute value as a display value.
    pub fn absolute_value(self) -> NumericResult<Self> {
        Self::from_display_decimal(self.to_number().abs())
    }

    /// Sum a sequence of values, starting from zero.
    pub fn checked_sum<I>(values: I) -> NumericResult<Self>
    where
        I: IntoIterator<Item = Self>,
    {
        values
            .into_iter()
            .try_fold(Self::zero(), |acc, value| acc.add(value))
    }

    // ========================================================================
    // Comparison
    // ========================================================================

    fn compare(&self, other: Operand) -> Option<Ordering> {
        match other {
            Operand::Number(number) => self.to_f64().partial_cmp(&number),
            Operand::Decimal(decimal) => Some(self.to_number().cmp(&decimal)),
            Operand::Value(value) => Some(self.to_number().cmp(&value.to_number())),
        }
    }

    /// Numeric equality against a raw number or another value of any tag.
    pub fn equals(&self, other: impl Into<Operand>) -> bool {
        self.compare(other.into()) == Some(Ordering::Equal)
    }

    pub fn greater_than(&self, other: impl Into<Operand>) -> bool {
        self.compare(other.into()) == Some(Ordering::Greater)
    }

    pub fn less_than(&self, other: impl Into<Operand>) -> bool {
        self.compare(other.into()) == Some(Ordering::Less)
    }

    /// Returns the smaller of two values.
    #[inline]
    pub fn min(self, other: Self) -> Self {
        if other < self {
            other
        } else {
            self
        }
    }

    /// Returns the larger of two values.
    #[inline]
    pub fn max(self, other: Self) -> Self {
        if other > self {
            other
        } else {
            self
        }
    }
}

// ============================================================================
// Trait Implementations
// ============================================================================

impl Default for FixedDecimal {
    #[inline]
    fn default() -> Self {
        Self::zero()
    }
}

// Equality, ordering and hashing follow the numeric value and ignore the tag.
impl PartialEq for FixedDecimal {
    #[inline]
    fn eq(&self, other: &Self) -> bool {
        self.to_number() == other.to_number()
    }
}

impl Eq for FixedDecimal {}

impl PartialOrd for FixedDecimal {
    #[inline]
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for FixedDecimal {
    #[inline]
    fn cmp(&self, other: &Self) -> Ordering {
        self.to_number().cmp(&other.to_number())
    }
}

impl Hash for FixedDecimal {
    #[inline]
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.to_number().normalize().hash(state);
    }
}

impl PartialEq<f64> for FixedDecimal {
    fn eq(&self, other: &f64) -> bool {
        self.equals(*other)
    }
}

impl PartialOrd<f64> for FixedDecimal {
    fn partial_cmp(&self, other: &f64) -> Option<Ordering> {
        self.compare(Operand::Number(*other))
    }
}

// The range is symmetric, so negation cannot leave it.
impl Neg for FixedDecimal {
    type Output = Self;

    #[inline]
    fn neg(self) -> Self::Output {
        Self::new(-self.magnitude, self.representation)
    }
}

impl TryFrom<f64> for FixedDecimal {
    type Error = NumericError;

    fn try_from(value: f64) -> Result<Self, Self::Error> {
        Self::from_display_number(value)
    }
}

impl TryFrom<Decimal> for FixedDecimal {
    type Error = NumericError;

    fn try_from(value: Decimal) -> Result<Self, Self::Error> {
        Self::from_display_decimal(value)
    }
}

// ============================================================================
// Display and Debug
// ============================================================================

impl fmt::Debug for FixedDecimal {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "FixedDecimal({}, {}, magnitude={})",
            self, self.representation, self.magnitude
        )
    }
}

/// Floors at the third digit, so `1.2345` prints as `1.234`.
impl fmt::Display for FixedDecimal {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let thousandths = self.thousandths();
        let int_part = thousandths / SCALE;
        let frac_part = (thousandths % SCALE).unsigned_abs();

        if thousandths < 0 && int_part == 0 {
            // Handle -0.xxx case
            write!(f, "-0.{:03}", frac_part)
        } else {
            write!(f, "{}.{:03}", int_part, frac_part)
        }
    }
}

// ============================================================================
// String Parsing
// ============================================================================

impl FromStr for FixedDecimal {
    type Err = NumericError;

    /// Parse exact decimal text into a display value.
    ///
    /// # Examples
    /// - "1.005" -> 1.005
    /// - "-1.2345" -> -1.235
    /// - "42" -> 42.000
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        if s.is_empty() {
            return Err(NumericError::InvalidInput);
        }

        let decimal = Decimal::from_str(s).map_err(|_| NumericError::InvalidInput)?;
        Self::from_display_decimal(decimal)
    }
}

/// Monetary amount.
pub type Amount = FixedDecimal;

/// Game or ranking score.
pub type Score = FixedDecimal;

// ============================================================================
// Tests
// ============================================================================


#[cfg(test)]
mod proptests {
    use super::*;
    use proptest::prelude::*;

    fn thousandths_are_integral(value: Decimal) -> bool {
        (value * Decimal::from(SCALE)).fract().is_zero()
    }

    proptest! {
        #[test]
        fn stored_round_trip_matches_floor(x in -999_999_999.0f64..=999_999_999.0f64) {
            let expected = Decimal::new((x * SCALE as f64).floor() as i64, PRECISION);
            let value = FixedDecimal::from_display_number(x).unwrap();
            prop_assert_eq!(value.to_stored().to_display().to_number(), expected);
        }

        #[test]
        fn arithmetic_yields_display_with_three_digits(
            a in -1_000_000i64..=1_000_000,
            b in -1_000_000i64..=1_000_000,
        ) {
            let lhs = FixedDecimal::from_stored_integer(a).unwrap();
            let rhs = FixedDecimal::from_stored_integer(b).unwrap().to_display();

            let mut results = vec![
                lhs.add(rhs).unwrap(),
                lhs.subtract(rhs).unwrap(),
                lhs.multiply(rhs).unwrap(),
            ];
            if b != 0 {
                results.push(lhs.divide(rhs).unwrap());
            }

            for result in results {
                prop_assert!(result.is_display());
                prop_assert!(thousandths_are_integral(result.to_number()));
            }
        }

        #[test]
        fn multiply_is_floor_of_exact_product(
            a in -10_000_000i64..=10_000_000,
            b in -10_000_000i64..=10_000_000,
        ) {
            let lhs = FixedDecimal::from_stored_integer(a).unwrap();
            let rhs = FixedDecimal::from_stored_integer(b).unwrap();
            let scale = Decimal::from(SCALE);
            let exact = lhs.to_number() * rhs.to_number();
            let expected = (exact * scale).floor() / scale;

            prop_assert_eq!(lhs.multiply(rhs).unwrap().to_number(), expected);
        }

        #[test]
        fn divide_by_zero_always_fails(a in -999_999_999i64..=999_999_999, stored in any::<bool>()) {
            let zero = if stored {
                FixedDecimal::from_stored_integer(0).unwrap()
            } else {
                FixedDecimal::zero()
            };
            let lhs = FixedDecimal::from_stored_integer(a).unwrap();
            prop_assert_eq!(lhs.divide(zero), Err(NumericError::DivisionByZero));
        }

        #[test]
        fn out_of_range_numbers_rejected(x in 1_000_000_000.0f64..1e300) {
            prop_assert_eq!(FixedDecimal::from_display_number(x), Err(NumericError::OutOfRange));
            prop_assert_eq!(FixedDecimal::from_display_number(-x), Err(NumericError::OutOfRange));
        }
    }
}
