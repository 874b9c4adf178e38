//! Core domain types for the PIPO register.
//!
//! This crate contains pure domain types with no IO and minimal dependencies.
//! Everything here can be used from any layer of the application.

mod bit;
mod input;
mod settings;
pub mod ui;
mod word;

pub use bit::{Bit, BitPosition, Signal};
pub use input::InputVector;
pub use settings::LengthPolicy;
pub use word::{ParseWordError, Word};

use thiserror::Error;

/// Number of bits held by the register.
pub const WIDTH: usize = 4;

/// Errors raised by register transitions.
///
/// A failed transition never mutates register state.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum RegisterError {
    #[error("expected {expected} input bits, got {actual}")]
    InvalidInputLength { expected: usize, actual: usize },
}
