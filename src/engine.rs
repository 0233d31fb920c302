use crate::error::{LuhnError, Result};
use crate::number::DigitSequence;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

/// The entry point for check-digit operations.
///
/// `LuhnEngine` owns the random source used by [`LuhnEngine::random`].
/// The generator is seeded exactly once, at construction; callers that
/// need reproducible output or control over thread placement inject
/// their own generator through [`LuhnEngine::with_rng`].
pub struct LuhnEngine<R: Rng = StdRng> {
    rng: R,
}

impl Default for LuhnEngine {
    fn default() -> Self {
        Self::new()
    }
}

impl LuhnEngine {
    pub fn new() -> Self {
        Self {
            rng: StdRng::from_entropy(),
        }
    }
}

impl<R: Rng> LuhnEngine<R> {
    pub fn with_rng(rng: R) -> Self {
        Self { rng }
    }

    /// Computes the check digit for a partial number (one without its
    /// check digit yet).
    ///
    /// Returns `InvalidInput` if `number` is not a non-empty sequence
    /// of decimal digits.
    pub fn check_digit(&self, number: &str) -> Result<u8> {
        Ok(DigitSequence::new(number)?.check_digit())
    }

    /// Evaluates whether a complete number, check digit included,
    /// satisfies the Luhn checksum.
    ///
    /// A malformed input is an `InvalidInput` error, not `Ok(false)`,
    /// so callers can tell "not a number" apart from a failed checksum.
    pub fn verify(&self, number: &str) -> Result<bool> {
        Ok(DigitSequence::new(number)?.is_luhn_valid())
    }

    /// Appends the check digit to a partial number and returns the
    /// completed sequence.
    pub fn complete(&self, number: &str) -> Result<DigitSequence> {
        Ok(DigitSequence::new(number)?.complete())
    }

    /// Generates a random Luhn-valid number of exactly `length` digits.
    ///
    /// The leading digit is drawn from [1, 9] so the number never
    /// starts with a zero, the middle digits from [0, 9], and the last
    /// digit is the derived check digit. `length` must be at least 1;
    /// a length of 1 yields `"0"`, the only single-digit number that
    /// satisfies the checksum.
    pub fn random(&mut self, length: usize) -> Result<DigitSequence> {
        if length < 1 {
            return Err(LuhnError::InvalidLength(length));
        }
        if length == 1 {
            return DigitSequence::new("0");
        }

        let mut digits = String::with_capacity(length);
        digits.push(char::from(b'0' + self.rng.gen_range(1..=9)));
        for _ in 0..length - 2 {
            digits.push(char::from(b'0' + self.rng.gen_range(0..=9)));
        }

        Ok(DigitSequence::new(digits)?.complete())
    }
}
