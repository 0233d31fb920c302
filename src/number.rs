use crate::error::{LuhnError, Result};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// A validated, immutable sequence of decimal digits.
///
/// This is a wrapper around `String` that enforces the "one or more
/// ASCII digits" rule at construction, so every instance is safe to
/// feed to the checksum routines without re-checking.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct DigitSequence(String);

impl DigitSequence {
    pub fn new(value: impl Into<String>) -> Result<Self> {
        let value = value.into();
        if Self::is_valid(&value) {
            Ok(Self(value))
        } else {
            Err(LuhnError::InvalidInput(value))
        }
    }

    /// Returns true iff `value` is non-empty and every character is '0'-'9'.
    ///
    /// Signs, whitespace and any other characters invalidate the whole
    /// string; there is no partial acceptance.
    pub fn is_valid(value: &str) -> bool {
        !value.is_empty() && value.bytes().all(|b| b.is_ascii_digit())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Number of digits in the sequence. Always at least 1.
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Always false; construction rejects empty sequences.
    pub fn is_empty(&self) -> bool {
        false
    }

    /// Luhn checksum of the sequence.
    ///
    /// The rightmost digit has position 0. Digits at odd positions are
    /// doubled, doubled values above 9 are reduced by 9, and the total
    /// is taken modulo 10.
    pub fn checksum(&self) -> u32 {
        self.weighted_sum(0) % 10
    }

    /// The digit that, appended to this sequence, makes it Luhn-valid.
    pub fn check_digit(&self) -> u8 {
        // Equivalent to the checksum with a placeholder '0' appended:
        // the placeholder contributes nothing and shifts every
        // position's parity by one.
        ((10 - self.weighted_sum(1) % 10) % 10) as u8
    }

    /// Whether the sequence, check digit included, satisfies the Luhn
    /// checksum.
    pub fn is_luhn_valid(&self) -> bool {
        self.checksum() == 0
    }

    /// Returns a new sequence with the check digit appended. The
    /// original sequence is left untouched.
    pub fn complete(&self) -> DigitSequence {
        let mut completed = String::with_capacity(self.0.len() + 1);
        completed.push_str(&self.0);
        completed.push(char::from(b'0' + self.check_digit()));
        Self(completed)
    }

    // Walks the digits right to left in place; `parity` offsets the
    // position index so the check-digit derivation can reuse the same
    // pass without building an augmented copy of the input.
    fn weighted_sum(&self, parity: usize) -> u32 {
        self.0
            .bytes()
            .rev()
            .enumerate()
            .map(|(position, byte)| {
                let mut digit = u32::from(byte - b'0');
                if (position + parity) % 2 == 1 {
                    digit *= 2;
                    if digit > 9 {
                        digit -= 9;
                    }
                }
                digit
            })
            .sum()
    }
}

impl TryFrom<String> for DigitSequence {
    type Error = LuhnError;

    fn try_from(value: String) -> Result<Self> {
        Self::new(value)
    }
}

impl TryFrom<&str> for DigitSequence {
    type Error = LuhnError;

    fn try_from(value: &str) -> Result<Self> {
        Self::new(value)
    }
}

impl FromStr for DigitSequence {
    type Err = LuhnError;

    fn from_str(s: &str) -> Result<Self> {
        Self::new(s)
    }
}

impl From<DigitSequence> for String {
    fn from(number: DigitSequence) -> Self {
        number.0
    }
}

impl fmt::Display for DigitSequence {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}
