// Guess validation
//
// The server owns all scoring; the client only guarantees that what it
// sends is syntactically a guess.

use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// Number of symbols in a code.
pub const CODE_LENGTH: usize = 4;

/// Rejected guess syntax. The loop reprompts on this; nothing is sent.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum GuessError {
    #[error("must be exactly 4 digits from 1 to 6")]
    InvalidFormat,
}

/// A validated guess: exactly four symbols, each a digit from '1' to '6'.
///
/// Constructed via `str::parse`; the inner string is exactly what the
/// player typed, so encoding it for submission preserves the sequence.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Guess(String);

impl Guess {
    /// The validated digit string, as submitted to the server.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl FromStr for Guess {
    type Err = GuessError;

    /// Callers trim surrounding whitespace before parsing.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let valid = s.chars().count() == CODE_LENGTH && s.chars().all(|c| ('1'..='6').contains(&c));
        if valid {
            Ok(Self(s.to_string()))
        } else {
            Err(GuessError::InvalidFormat)
        }
    }
}

impl fmt::Display for Guess {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}
