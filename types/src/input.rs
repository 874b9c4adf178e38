//! Pending parallel inputs (D3..D0).

use std::fmt;

use crate::WIDTH;
use crate::bit::{Bit, BitPosition};
use crate::word::Word;

/// Pending input bits, MSB-first (`[D3, D2, D1, D0]`).
///
/// Owned by the presentation layer. The register only sees these bits as the
/// argument to a load.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct InputVector([Bit; WIDTH]);

impl InputVector {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    pub fn toggle(&mut self, position: BitPosition) -> Bit {
        let slot = &mut self.0[position.index()];
        *slot = slot.toggled();
        *slot
    }

    pub fn clear(&mut self) {
        self.0 = [Bit::Zero; WIDTH];
    }

    #[must_use]
    pub const fn get(&self, position: BitPosition) -> Bit {
        self.0[position.index()]
    }

    #[must_use]
    pub const fn bits(&self) -> &[Bit; WIDTH] {
        &self.0
    }

    #[must_use]
    pub const fn as_word(&self) -> Word {
        Word::from_bits(self.0)
    }
}

impl From<Word> for InputVector {
    fn from(word: Word) -> Self {
        Self(*word.bits())
    }
}

impl fmt::Display for InputVector {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.as_word(), f)
    }
}
