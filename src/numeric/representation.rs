// ============================================================================
// Representation Tag
// Distinguishes scaled-integer values from human-facing decimals
// ============================================================================

use super::errors::NumericError;
use std::fmt;
use std::str::FromStr;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Which form a [`FixedDecimal`](super::FixedDecimal) magnitude is held in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum Representation {
    /// Scaled integer (display value × 1000), suitable for storage
    Stored,
    /// Human-facing decimal with at most 3 fractional digits
    Display,
}

impl Representation {
    /// Wire literal for this tag.
    pub const fn as_str(&self) -> &'static str {
        match self {
            Representation::Stored => "stored",
            Representation::Display => "display",
        }
    }
}

impl fmt::Display for Representation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Representation {
    type Err = NumericError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "stored" => Ok(Representation::Stored),
            "display" => Ok(Representation::Display),
            _ => Err(NumericError::InvalidInput),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_literals() {
        assert_eq!(Representation::Stored.to_string(), "stored");
        assert_eq!(Representation::Display.to_string(), "display");
    }

    #[test]
    fn test_parse() {
        assert_eq!("stored".parse(), Ok(Representation::Stored));
        assert_eq!("display".parse(), Ok(Representation::Display));
        assert_eq!(
            "Display".parse::<Representation>(),
            Err(NumericError::InvalidInput)
        );
    }

    #[cfg(feature = "serde")]
    #[test]
    fn test_serde_lowercase() {
        let json = serde_json::to_string(&Representation::Stored).unwrap();
        assert_eq!(json, "\"stored\"");
        let tag: Representation = serde_json::from_str("\"display\"").unwrap();
        assert_eq!(tag, Representation::Display);
    }
}
