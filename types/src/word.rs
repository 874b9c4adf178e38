//! The 4-bit word held by the register.

use std::fmt;
use std::str::FromStr;

use thiserror::Error;

use crate::WIDTH;
use crate::bit::{Bit, BitPosition};

/// Exactly four binary digits, MSB-first (`[Q3, Q2, Q1, Q0]`).
///
/// Length and binary-ness are carried by the type, so a `Word` can never
/// hold a partial or non-binary value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Word([Bit; WIDTH]);

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseWordError {
    #[error("word must have exactly 4 digits, got {0}")]
    Length(usize),
    #[error("invalid digit {0:?}: expected '0' or '1'")]
    Digit(char),
}

impl Word {
    pub const ZERO: Word = Word([Bit::Zero; WIDTH]);

    #[must_use]
    pub const fn from_bits(bits: [Bit; WIDTH]) -> Self {
        Self(bits)
    }

    /// Build a word from the low nibble of `value`.
    #[must_use]
    pub fn from_value(value: u8) -> Self {
        let mut bits = [Bit::Zero; WIDTH];
        for position in BitPosition::ALL {
            bits[position.index()] = Bit::from(value & position.weight() != 0);
        }
        Self(bits)
    }

    #[must_use]
    pub const fn bits(&self) -> &[Bit; WIDTH] {
        &self.0
    }

    #[must_use]
    pub const fn bit(&self, position: BitPosition) -> Bit {
        self.0[position.index()]
    }

    /// Digits as plain `0`/`1` integers, MSB-first.
    #[must_use]
    pub fn to_digits(&self) -> [u8; WIDTH] {
        self.0.map(Bit::as_u8)
    }

    /// Unsigned value of the word, `0..=15`.
    #[must_use]
    pub fn value(&self) -> u8 {
        BitPosition::ALL
            .iter()
            .filter(|position| self.bit(**position).is_set())
            .map(|position| position.weight())
            .sum()
    }
}

impl From<[Bit; WIDTH]> for Word {
    fn from(bits: [Bit; WIDTH]) -> Self {
        Self(bits)
    }
}

impl fmt::Display for Word {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for bit in &self.0 {
            write!(f, "{bit}")?;
        }
        Ok(())
    }
}

impl FromStr for Word {
    type Err = ParseWordError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let count = s.chars().count();
        if count != WIDTH {
            return Err(ParseWordError::Length(count));
        }
        let mut bits = [Bit::Zero; WIDTH];
        for (slot, c) in bits.iter_mut().zip(s.chars()) {
            *slot = match c {
                '0' => Bit::Zero,
                '1' => Bit::One,
                other => return Err(ParseWordError::Digit(other)),
            };
        }
        Ok(Self(bits))
    }
}
