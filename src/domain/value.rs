use once_cell::sync::Lazy;
use regex::Regex;

use crate::domain::validation::ValidationError;

static MSISDN_PATTERN: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^(0|62)8[1-9][0-9]+$").expect("msisdn pattern is a valid regex")
});

/// Returns `true` if `number` is an Indonesian mobile number in the form the
/// gateway accepts: a `0` or `62` prefix, then `8`, then a non-zero digit and
/// at least one more digit.
///
/// The input is checked as-is. Spaces, dashes and a leading `+` are rejected.
pub fn is_valid_msisdn(number: &str) -> bool {
    MSISDN_PATTERN.is_match(number)
}

#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
/// Destination phone number sent to the gateway (`hp`).
///
/// Invariant: matches [`is_valid_msisdn`]. The value is never normalized.
pub struct Msisdn(String);

impl Msisdn {
    /// Form field name used by the gateway (`hp`).
    pub const FIELD: &'static str = "hp";

    /// Create a validated [`Msisdn`].
    pub fn new(value: impl Into<String>) -> Result<Self, ValidationError> {
        let value = value.into();
        if !is_valid_msisdn(&value) {
            return Err(ValidationError::InvalidMsisdn { input: value });
        }
        Ok(Self(value))
    }

    /// Borrow the number exactly as provided.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl AsRef<str> for Msisdn {
    fn as_ref(&self) -> &str {
        &self.0
    }
}
