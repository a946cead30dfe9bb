// ============================================================================
// Serialized Record
// The {value, state} boundary shape of a FixedDecimal
// ============================================================================

use super::errors::{NumericError, NumericResult};
use super::fixed_decimal::FixedDecimal;
use super::representation::Representation;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Boundary record for persisting or transmitting a [`FixedDecimal`].
///
/// `value` is the untransformed magnitude: the scaled integer for a stored
/// value, the decimal for a display value.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct SerializedDecimal {
    pub value: f64,
    pub state: Representation,
}

impl SerializedDecimal {
    pub fn new(value: f64, state: Representation) -> Self {
        Self { value, state }
    }
}

impl FixedDecimal {
    /// Record holding the untransformed magnitude and the representation tag.
    ///
    /// `from_serialized` restores any record whose value lies within
    /// [MIN_VALUE, MAX_VALUE]. A stored value produced by `to_stored` from a
    /// display value above 999,999.999 has a magnitude beyond MAX_VALUE, so
    /// its record is rejected with `OutOfRange`.
    pub fn serialize(&self) -> SerializedDecimal {
        SerializedDecimal::new(self.magnitude(), self.representation())
    }

    /// Rebuild a value from its record, keeping the tag and magnitude unchanged.
    ///
    /// # Errors
    /// - `InvalidValue` if the value is NaN or infinite
    /// - `OutOfRange` if the value lies outside [MIN_VALUE, MAX_VALUE]
    pub fn from_serialized(record: SerializedDecimal) -> NumericResult<Self> {
        Self::validate(record.value)?;
        Ok(Self::new(record.value, record.state))
    }
}

impl From<FixedDecimal> for SerializedDecimal {
    fn from(value: FixedDecimal) -> Self {
        value.serialize()
    }
}

impl TryFrom<SerializedDecimal> for FixedDecimal {
    type Error = NumericError;

    fn try_from(record: SerializedDecimal) -> Result<Self, Self::Error> {
        Self::from_serialized(record)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use quickcheck::{quickcheck, TestResult};
    use rust_decimal::Decimal;

    #[test]
    fn test_serialize_stored() {
        let x = FixedDecimal::from_stored_integer(1234).unwrap();
        assert_eq!(
            x.serialize(),
            SerializedDecimal::new(1234.0, Representation::Stored)
        );
    }

    #[test]
    fn test_serialize_display() {
        let x = FixedDecimal::from_display_number(1.234).unwrap();
        assert_eq!(
            x.serialize(),
            SerializedDecimal::new(1.234, Representation::Display)
        );
    }

    #[test]
    fn test_from_serialized_keeps_tag() {
        let stored =
            FixedDecimal::from_serialized(SerializedDecimal::new(-42.0, Representation::Stored))
                .unwrap();
        assert!(stored.is_stored());
        assert_eq!(stored.to_text(), "-0.042");

        let display =
            FixedDecimal::from_serialized(SerializedDecimal::new(-42.0, Representation::Display))
                .unwrap();
        assert!(display.is_display());
        assert_eq!(display.to_text(), "-42.000");
    }

    #[test]
    fn test_from_serialized_validates() {
        assert_eq!(
            FixedDecimal::from_serialized(SerializedDecimal::new(f64::NAN, Representation::Stored)),
            Err(NumericError::InvalidValue)
        );
        assert_eq!(
            FixedDecimal::from_serialized(SerializedDecimal::new(1e10, Representation::Display)),
            Err(NumericError::OutOfRange)
        );
    }

    #[test]
    fn test_display_with_extra_digits_round_trips() {
        let record = SerializedDecimal::new(1.2345, Representation::Display);
        let x = FixedDecimal::from_serialized(record).unwrap();
        assert_eq!(x.serialize(), record);
        assert_eq!(x.to_text(), "1.234");
        assert_eq!(x.to_stored().magnitude(), 1234.0);
    }

    #[test]
    fn test_fractional_stored_round_trips() {
        let record = SerializedDecimal::new(1234.5, Representation::Stored);
        let x = FixedDecimal::from_serialized(record).unwrap();
        assert_eq!(x.serialize(), record);
        assert_eq!(x.to_number(), Decimal::new(12345, 4));
        assert_eq!(x.to_display().magnitude(), 1.2345);
    }

    #[test]
    fn test_large_stored_record_out_of_range() {
        let stored = FixedDecimal::from_display_number(1_000_000.0)
            .unwrap()
            .to_stored();
        assert_eq!(stored.magnitude(), 1_000_000_000.0);
        assert_eq!(
            FixedDecimal::from_serialized(stored.serialize()),
            Err(NumericError::OutOfRange)
        );
    }

    #[test]
    fn test_round_trip_extremes() {
        for value in [999_999_999.0, -999_999_999.0, 0.001, -0.001, 0.0] {
            let x = FixedDecimal::from_display_number(value).unwrap();
            let back = FixedDecimal::from_serialized(x.serialize()).unwrap();
            assert_eq!(back.serialize(), x.serialize());
            assert_eq!(back.representation(), Representation::Display);
        }
    }

    fn tag(stored: bool) -> Representation {
        if stored {
            Representation::Stored
        } else {
            Representation::Display
        }
    }

    quickcheck! {
        fn prop_stored_round_trip(raw: i32) -> bool {
            let raw = i64::from(raw) % 1_000_000_000;
            let value = FixedDecimal::from_stored_integer(raw).unwrap();
            let back = FixedDecimal::from_serialized(value.serialize()).unwrap();
            back.serialize() == value.serialize()
        }

        fn prop_any_valid_record_round_trips(value: f64, stored: bool) -> TestResult {
            if FixedDecimal::validate(value).is_err() {
                return TestResult::discard();
            }
            let record = SerializedDecimal::new(value, tag(stored));
            match FixedDecimal::from_serialized(record) {
                Ok(x) => TestResult::from_bool(x.serialize() == record),
                Err(_) => TestResult::failed(),
            }
        }
    }

    #[cfg(feature = "serde")]
    mod serde_tests {
        use super::*;

        #[test]
        fn test_json_shape() {
            let x = FixedDecimal::from_display_number(1.234).unwrap();
            let json = serde_json::to_string(&x).unwrap();
            assert_eq!(json, r#"{"value":1.234,"state":"display"}"#);

            let stored = FixedDecimal::from_stored_integer(1234).unwrap();
            let json = serde_json::to_string(&stored).unwrap();
            assert_eq!(json, r#"{"value":1234.0,"state":"stored"}"#);
        }

        #[test]
        fn test_json_round_trip() {
            let x: FixedDecimal = serde_json::from_str(r#"{"value":1234,"state":"stored"}"#).unwrap();
            assert!(x.is_stored());
            assert_eq!(x.to_text(), "1.234");

            let y: FixedDecimal =
                serde_json::from_str(r#"{"value":-3.579,"state":"display"}"#).unwrap();
            assert_eq!(y.to_text(), "-3.579");
            assert_eq!(serde_json::to_string(&y).unwrap(), r#"{"value":-3.579,"state":"display"}"#);
        }

        #[test]
        fn test_json_keeps_extra_digits() {
            let json = r#"{"value":1.2345,"state":"display"}"#;
            let x: FixedDecimal = serde_json::from_str(json).unwrap();
            assert_eq!(serde_json::to_string(&x).unwrap(), json);
        }

        #[test]
        fn test_json_rejects_invalid_records() {
            let err = serde_json::from_str::<FixedDecimal>(r#"{"value":1e10,"state":"display"}"#)
                .unwrap_err();
            assert!(err.to_string().contains("out of range"));

            assert!(
                serde_json::from_str::<FixedDecimal>(r#"{"value":1,"state":"scaled"}"#).is_err()
            );
        }
    }
}
