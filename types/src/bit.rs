//! Binary digits, input signal coercion, and bit positions.

use std::fmt;

/// A single binary digit.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Bit {
    #[default]
    Zero,
    One,
}

impl Bit {
    /// Normalize an arbitrary signal to a binary digit.
    ///
    /// Any high signal becomes `One`, anything else `Zero`. Values are never
    /// rejected here: a `7` or a `-1` latches as `1`.
    #[must_use]
    pub fn coerce<S: Signal + ?Sized>(signal: &S) -> Self {
        if signal.is_high() { Bit::One } else { Bit::Zero }
    }

    #[must_use]
    pub const fn as_u8(self) -> u8 {
        match self {
            Bit::Zero => 0,
            Bit::One => 1,
        }
    }

    #[must_use]
    pub const fn as_char(self) -> char {
        match self {
            Bit::Zero => '0',
            Bit::One => '1',
        }
    }

    #[must_use]
    pub const fn is_set(self) -> bool {
        matches!(self, Bit::One)
    }

    #[must_use]
    pub const fn toggled(self) -> Self {
        match self {
            Bit::Zero => Bit::One,
            Bit::One => Bit::Zero,
        }
    }
}

impl From<bool> for Bit {
    fn from(value: bool) -> Self {
        if value { Bit::One } else { Bit::Zero }
    }
}

impl From<Bit> for u8 {
    fn from(bit: Bit) -> Self {
        bit.as_u8()
    }
}

impl fmt::Display for Bit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_char())
    }
}

/// A value that can drive a register input.
///
/// Truthiness is the only thing that matters: `false` and zero are low,
/// everything else is high.
pub trait Signal {
    fn is_high(&self) -> bool;
}

impl Signal for bool {
    fn is_high(&self) -> bool {
        *self
    }
}

impl Signal for Bit {
    fn is_high(&self) -> bool {
        self.is_set()
    }
}

impl<T: Signal + ?Sized> Signal for &T {
    fn is_high(&self) -> bool {
        (**self).is_high()
    }
}

macro_rules! integer_signal {
    ($($ty:ty),* $(,)?) => {
        $(
            impl Signal for $ty {
                fn is_high(&self) -> bool {
                    *self != 0
                }
            }
        )*
    };
}

integer_signal!(u8, u16, u32, u64, u128, usize, i8, i16, i32, i64, i128, isize);

// NaN is high: only an exact zero reads as low.
macro_rules! float_signal {
    ($($ty:ty),* $(,)?) => {
        $(
            impl Signal for $ty {
                fn is_high(&self) -> bool {
                    *self != 0.0
                }
            }
        )*
    };
}

float_signal!(f32, f64);

/// Position of a bit within the 4-bit word.
///
/// Storage order is MSB-first: `B3` lives at index 0, `B0` at index 3.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum BitPosition {
    B3,
    B2,
    B1,
    B0,
}

impl BitPosition {
    /// All positions in storage (and display) order.
    pub const ALL: [BitPosition; 4] = [
        BitPosition::B3,
        BitPosition::B2,
        BitPosition::B1,
        BitPosition::B0,
    ];

    /// Index into an MSB-first array.
    #[must_use]
    pub const fn index(self) -> usize {
        match self {
            BitPosition::B3 => 0,
            BitPosition::B2 => 1,
            BitPosition::B1 => 2,
            BitPosition::B0 => 3,
        }
    }

    #[must_use]
    pub const fn from_index(index: usize) -> Option<Self> {
        match index {
            0 => Some(BitPosition::B3),
            1 => Some(BitPosition::B2),
            2 => Some(BitPosition::B1),
            3 => Some(BitPosition::B0),
            _ => None,
        }
    }

    /// Bit significance, 3 for the MSB down to 0 for the LSB.
    #[must_use]
    pub const fn significance(self) -> u8 {
        3 - self.index() as u8
    }

    #[must_use]
    pub const fn weight(self) -> u8 {
        1 << self.significance()
    }

    #[must_use]
    pub const fn input_label(self) -> &'static str {
        match self {
            BitPosition::B3 => "D3",
            BitPosition::B2 => "D2",
            BitPosition::B1 => "D1",
            BitPosition::B0 => "D0",
        }
    }

    #[must_use]
    pub const fn output_label(self) -> &'static str {
        match self {
            BitPosition::B3 => "Q3",
            BitPosition::B2 => "Q2",
            BitPosition::B1 => "Q1",
            BitPosition::B0 => "Q0",
        }
    }
}
