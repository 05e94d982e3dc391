//! # VIN Value Object
//!
//! Validated 17-character Vehicle Identification Number.
//!
//! A VIN uses a restricted alphanumeric alphabet: the letters I, O, and Q
//! are excluded to avoid confusion with 1 and 0. Input is trimmed and
//! uppercased before validation, so two VINs that differ only in case or
//! surrounding whitespace compare equal.
//!
//! # Examples
//!
//! ```
//! use collateral_valuation::domain::value_objects::vin::Vin;
//!
//! let vin = Vin::new("1hgcm82633a004352").unwrap();
//! assert_eq!(vin.as_str(), "1HGCM82633A004352");
//!
//! // I, O, and Q are never valid
//! assert!(Vin::new("1HGCM82633A00435O").is_err());
//! ```

use crate::domain::errors::{DomainError, DomainResult};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Required VIN length.
const VIN_LENGTH: usize = 17;

/// A validated Vehicle Identification Number.
///
/// # Invariants
///
/// - Exactly 17 characters after trimming.
/// - Uppercase-normalized.
/// - Alphabet `[A-HJ-NPR-Z0-9]` (no I, O, or Q).
///
/// Both invariants hold for the lifetime of the value; construction is the
/// only validation point.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String")]
#[serde(into = "String")]
pub struct Vin(String);

impl Vin {
    /// Creates a VIN from a raw string, normalizing and validating it.
    ///
    /// The input is trimmed and uppercased before validation.
    ///
    /// # Errors
    ///
    /// Returns [`DomainError::InvalidVin`] when the input is empty, is not
    /// exactly 17 characters, contains I/O/Q, or contains characters outside
    /// the VIN alphabet.
    ///
    /// # Examples
    ///
    /// ```
    /// use collateral_valuation::domain::value_objects::vin::Vin;
    ///
    /// assert!(Vin::new(" 1HGCM82633A004352 ").is_ok());
    /// assert!(Vin::new("TOOSHORT").is_err());
    /// ```
    pub fn new(raw: impl AsRef<str>) -> DomainResult<Self> {
        let normalized = raw.as_ref().trim().to_uppercase();

        if normalized.is_empty() {
            return Err(DomainError::invalid_vin("VIN cannot be empty"));
        }

        if normalized.chars().count() != VIN_LENGTH {
            return Err(DomainError::invalid_vin(
                "VIN must be exactly 17 characters",
            ));
        }

        if normalized.chars().any(|c| matches!(c, 'I' | 'O' | 'Q')) {
            return Err(DomainError::invalid_vin(
                "VIN cannot contain the letters I, O, or Q",
            ));
        }

        if !normalized.chars().all(is_vin_char) {
            return Err(DomainError::invalid_vin(
                "VIN must contain only valid characters",
            ));
        }

        Ok(Self(normalized))
    }

    /// Returns the normalized VIN string.
    #[inline]
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

/// Returns true for characters in the VIN alphabet `[A-HJ-NPR-Z0-9]`.
const fn is_vin_char(c: char) -> bool {
    matches!(c, 'A'..='H' | 'J'..='N' | 'P' | 'R'..='Z' | '0'..='9')
}

impl fmt::Display for Vin {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl TryFrom<String> for Vin {
    type Error = DomainError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl TryFrom<&str> for Vin {
    type Error = DomainError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<Vin> for String {
    fn from(vin: Vin) -> Self {
        vin.0
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    const VALID_VIN: &str = "1HGCM82633A004352";

    mod construction {
        use super::*;

        #[test]
        fn accepts_valid_vin() {
            let vin = Vin::new(VALID_VIN).unwrap();
            assert_eq!(vin.as_str(), VALID_VIN);
        }

        #[test]
        fn uppercases_mixed_case_input() {
            let vin = Vin::new("1hgcm82633a004352").unwrap();
            assert_eq!(vin.as_str(), VALID_VIN);
        }

        #[test]
        fn trims_whitespace() {
            let vin = Vin::new("  1HGCM82633A004352\n").unwrap();
            assert_eq!(vin.as_str(), VALID_VIN);
        }

        #[test]
        fn rejects_empty() {
            let err = Vin::new("").unwrap_err();
            assert!(err.to_string().contains("empty"));
        }

        #[test]
        fn rejects_whitespace_only() {
            assert!(Vin::new("   ").is_err());
        }

        #[test]
        fn rejects_short() {
            assert!(Vin::new("1HGCM82633A00435").is_err());
        }

        #[test]
        fn rejects_long() {
            assert!(Vin::new("1HGCM82633A0043521").is_err());
        }

        #[test]
        fn rejects_i_o_q() {
            assert!(Vin::new("IHGCM82633A004352").is_err());
            assert!(Vin::new("1HGCM82633A00435O").is_err());
            assert!(Vin::new("1HGCM8Q633A004352").is_err());
        }

        #[test]
        fn rejects_lowercase_excluded_letters() {
            assert!(Vin::new("1HGCM82633A00435o").is_err());
        }

        #[test]
        fn rejects_non_alphanumeric() {
            assert!(Vin::new("1HGCM82633A00435!").is_err());
            assert!(Vin::new("1HGCM-82633A04352").is_err());
        }
    }

    mod equality {
        use super::*;

        #[test]
        fn compares_by_normalized_value() {
            let a = Vin::new("1hgcm82633a004352").unwrap();
            let b = Vin::new(" 1HGCM82633A004352 ").unwrap();
            assert_eq!(a, b);
        }
    }

    mod serde_support {
        use super::*;

        #[test]
        fn serializes_as_plain_string() {
            let vin = Vin::new(VALID_VIN).unwrap();
            let json = serde_json::to_string(&vin).unwrap();
            assert_eq!(json, format!("\"{VALID_VIN}\""));
        }

        #[test]
        fn deserialization_validates() {
            let ok: Result<Vin, _> = serde_json::from_str("\"1HGCM82633A004352\"");
            assert!(ok.is_ok());

            let bad: Result<Vin, _> = serde_json::from_str("\"NOT-A-VIN\"");
            assert!(bad.is_err());
        }
    }

    proptest! {
        #[test]
        fn accepts_any_17_chars_from_the_vin_alphabet(vin in "[A-HJ-NPR-Z0-9]{17}") {
            prop_assert!(Vin::new(&vin).is_ok());
        }

        #[test]
        fn rejects_any_other_length(vin in "[A-HJ-NPR-Z0-9]{1,16}") {
            prop_assert!(Vin::new(&vin).is_err());
        }
    }
}
