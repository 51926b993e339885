//! Location identifier primitives.
//!
//! A location identifier is the literal prefix `L` followed by a decimal
//! number, e.g. `L42`. This crate is the single place that knows how such
//! identifiers are spelled, parsed, and incremented; the scanner and the CLI
//! build on it.

use std::fmt;
use std::str::FromStr;

use serde::{Serialize, Serializer};
use thiserror::Error;

/// The literal prefix of every location identifier.
pub const LOC_PREFIX: &str = "L";

/// Errors from location identifier parsing and arithmetic.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum LocIdError {
    /// The string does not start with [`LOC_PREFIX`].
    #[error("Invalid location ID '{id}': missing 'L' prefix")]
    MissingPrefix {
        /// The raw string that failed to parse.
        id: String,
    },

    /// The prefix is not followed by a digit run, or the run is followed by other text.
    #[error("Invalid location ID '{id}': expected decimal digits after 'L'")]
    InvalidNumber {
        /// The raw string that failed to parse.
        id: String,
    },

    /// The digit run does not fit in a `u64`.
    #[error("Invalid location ID '{id}': number is too large")]
    TooLarge {
        /// The raw string that failed to parse.
        id: String,
    },

    /// Incrementing the identifier would overflow.
    #[error("No location ID follows {0}")]
    Overflow(LocationId),
}

/// A location identifier `L<N>`.
///
/// Ordering follows the numeric value, so `L9 < L10`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct LocationId(u64);

impl LocationId {
    /// The identifier handed out when no identifiers exist yet.
    pub const FIRST: Self = Self(1);

    /// Create an identifier from its numeric value.
    #[must_use]
    pub const fn new(value: u64) -> Self {
        Self(value)
    }

    /// Numeric value of the identifier.
    #[must_use]
    pub const fn value(self) -> u64 {
        self.0
    }

    /// The identifier immediately after this one.
    ///
    /// # Errors
    /// Returns [`LocIdError::Overflow`] if the value is `u64::MAX`.
    pub fn next(self) -> Result<Self, LocIdError> {
        self.0
            .checked_add(1)
            .map(Self)
            .ok_or(LocIdError::Overflow(self))
    }

    /// Extract the identifier at the start of `text`, ignoring anything after
    /// the leading digit run.
    ///
    /// `"L12"`, `"L12b"` and `"L12 # comment"` all yield `L12`; `"L"`, `"Lx"`
    /// and `"M3"` yield `None`, as does a digit run that overflows `u64`.
    #[must_use]
    pub fn from_prefix_of(text: &str) -> Option<Self> {
        let rest = text.strip_prefix(LOC_PREFIX)?;
        parse_leading_digits(rest).map(Self)
    }
}

impl fmt::Display for LocationId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{LOC_PREFIX}{}", self.0)
    }
}

impl FromStr for LocationId {
    type Err = LocIdError;

    /// Strict parse: the whole string must be `L` followed by digits.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let Some(digits) = s.strip_prefix(LOC_PREFIX) else {
            return Err(LocIdError::MissingPrefix { id: s.to_owned() });
        };
        if digits.is_empty() || !digits.bytes().all(|b| b.is_ascii_digit()) {
            return Err(LocIdError::InvalidNumber { id: s.to_owned() });
        }
        digits
            .parse::<u64>()
            .map(Self)
            .map_err(|_| LocIdError::TooLarge { id: s.to_owned() })
    }
}

impl Serialize for LocationId {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

/// Parse the leading run of ASCII digits in `text` as a `u64`.
///
/// Returns `None` if `text` does not start with a digit or the run overflows.
#[inline]
#[must_use]
pub fn parse_leading_digits(text: &str) -> Option<u64> {
    let end = text
        .bytes()
        .position(|b| !b.is_ascii_digit())
        .unwrap_or(text.len());
    if end == 0 {
        return None;
    }
    text[..end].parse().ok()
}

/// The identifier to hand out next, given the highest one currently in use.
///
/// # Errors
/// Returns [`LocIdError::Overflow`] if `highest` is the largest representable identifier.
pub fn next_after(highest: Option<LocationId>) -> Result<LocationId, LocIdError> {
    highest.map_or(Ok(LocationId::FIRST), LocationId::next)
}
