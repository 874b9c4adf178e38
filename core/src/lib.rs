//! Core domain logic for the PIPO register.
//!
//! The register is the only stateful piece of the simulator: it owns the
//! latched output word and the load counter, and exposes exactly two
//! transitions, `load` and `reset`. Everything else reads it.

mod register;

pub use register::{Register, RegisterState, normalize};

pub use pipo_types::{
    Bit, BitPosition, InputVector, LengthPolicy, RegisterError, Signal, WIDTH, Word,
};
