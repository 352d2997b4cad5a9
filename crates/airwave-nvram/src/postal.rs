//! Postal code validation and its persisted digits-only form.

use std::fmt;
use std::str::FromStr;
use std::sync::LazyLock;

use regex::Regex;
use thiserror::Error;

/// Expected display format, `DDD-DDDD`.
pub const POSTAL_CODE_PATTERN: &str = r"^[0-9]{3}-[0-9]{4}$";

/// Byte offset of the separator in the display form.
const SEPARATOR_OFFSET: usize = 3;

static POSTAL_CODE_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(POSTAL_CODE_PATTERN).expect("postal code pattern compiles"));

/// Postal code input rejected by validation.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum PostalCodeError {
    /// Value is not empty and does not match `DDD-DDDD`.
    #[error("postal code '{value}' must use the 000-0000 format")]
    Format {
        /// Offending input.
        value: String,
    },
}

/// Validated, non-empty postal code in display form (`123-4567`).
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct PostalCode(String);

impl PostalCode {
    /// Parse a display-form postal code.
    ///
    /// # Errors
    /// Returns [`PostalCodeError::Format`] unless the input matches `DDD-DDDD`.
    pub fn parse(value: &str) -> Result<Self, PostalCodeError> {
        if POSTAL_CODE_RE.is_match(value) {
            Ok(Self(value.to_string()))
        } else {
            Err(PostalCodeError::Format {
                value: value.to_string(),
            })
        }
    }

    /// Rebuild a postal code from its persisted digits-only form.
    ///
    /// # Errors
    /// Returns [`PostalCodeError::Format`] when the digits do not form a valid code
    /// once the separator is reinserted.
    pub fn from_digits(digits: &str) -> Result<Self, PostalCodeError> {
        if digits.len() < SEPARATOR_OFFSET || !digits.is_char_boundary(SEPARATOR_OFFSET) {
            return Err(PostalCodeError::Format {
                value: digits.to_string(),
            });
        }
        let (head, tail) = digits.split_at(SEPARATOR_OFFSET);
        Self::parse(&format!("{head}-{tail}"))
    }

    /// Display form with the separator.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Persisted form with the separator stripped.
    #[must_use]
    pub fn digits(&self) -> String {
        self.0.replace('-', "")
    }
}

impl fmt::Display for PostalCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl FromStr for PostalCode {
    type Err = PostalCodeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

/// Validate raw form input. The empty string is valid and means "unset".
///
/// # Errors
/// Returns [`PostalCodeError::Format`] for any other value not matching `DDD-DDDD`.
pub fn validate_postal_code(value: &str) -> Result<Option<PostalCode>, PostalCodeError> {
    if value.is_empty() {
        Ok(None)
    } else {
        PostalCode::parse(value).map(Some)
    }
}
