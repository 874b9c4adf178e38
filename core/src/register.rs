//! The 4-bit parallel-in/parallel-out register.

use pipo_types::{Bit, LengthPolicy, RegisterError, Signal, WIDTH, Word};
use tracing::{debug, warn};

/// Latched output plus the number of loads since the last reset.
///
/// Both fields are only ever replaced together.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct RegisterState {
    output: Word,
    load_count: u64,
}

impl RegisterState {
    #[must_use]
    pub const fn output(&self) -> Word {
        self.output
    }

    #[must_use]
    pub const fn load_count(&self) -> u64 {
        self.load_count
    }
}

/// Normalize raw input signals into a word.
///
/// Fewer than `WIDTH` values is an error. Extra values are dropped under
/// `LengthPolicy::Truncate` and rejected under `LengthPolicy::Reject`. Each
/// kept value is coerced to a bit on its own (non-zero is `1`).
pub fn normalize<S: Signal>(inputs: &[S], policy: LengthPolicy) -> Result<Word, RegisterError> {
    let too_short = inputs.len() < WIDTH;
    let too_long = inputs.len() > WIDTH && policy == LengthPolicy::Reject;
    if too_short || too_long {
        return Err(RegisterError::InvalidInputLength {
            expected: WIDTH,
            actual: inputs.len(),
        });
    }

    let mut bits = [Bit::Zero; WIDTH];
    for (slot, input) in bits.iter_mut().zip(inputs) {
        *slot = Bit::coerce(input);
    }
    Ok(Word::from_bits(bits))
}

/// A single PIPO register.
///
/// Each instance is independent; there is no shared or static register.
#[derive(Debug, Clone, Default)]
pub struct Register {
    state: RegisterState,
    policy: LengthPolicy,
}

impl Register {
    /// A zeroed register with the default (truncating) length policy.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn with_policy(policy: LengthPolicy) -> Self {
        Self {
            state: RegisterState::default(),
            policy,
        }
    }

    /// Latch `inputs` (D3..D0) into the output in one step.
    ///
    /// On error the register is left exactly as it was.
    pub fn load<S: Signal>(&mut self, inputs: &[S]) -> Result<&RegisterState, RegisterError> {
        let word = match normalize(inputs, self.policy) {
            Ok(word) => word,
            Err(err) => {
                warn!(policy = self.policy.as_str(), %err, "Load rejected");
                return Err(err);
            }
        };

        self.state = RegisterState {
            output: word,
            load_count: self.state.load_count.saturating_add(1),
        };
        debug!(
            word = %self.state.output,
            value = self.state.output.value(),
            loads = self.state.load_count,
            "Register latched"
        );
        Ok(&self.state)
    }

    /// Clear the output to `0000` and the load count to zero.
    pub fn reset(&mut self) -> &RegisterState {
        self.state = RegisterState::default();
        debug!("Register reset");
        &self.state
    }

    #[must_use]
    pub fn state(&self) -> &RegisterState {
        &self.state
    }

    #[must_use]
    pub fn word(&self) -> Word {
        self.state.output
    }

    /// Latched digits, MSB-first (`[Q3, Q2, Q1, Q0]`).
    #[must_use]
    pub fn output_bits(&self) -> [u8; WIDTH] {
        self.state.output.to_digits()
    }

    #[must_use]
    pub fn load_count(&self) -> u64 {
        self.state.load_count
    }

    /// The latched word as `0`/`1` characters, Q3 first.
    #[must_use]
    pub fn rendered_word(&self) -> String {
        self.state.output.to_string()
    }

    #[must_use]
    pub fn policy(&self) -> LengthPolicy {
        self.policy
    }
}

#[cfg(test)]
mod tests {
    use insta::assert_snapshot;
    use pipo_types::BitPosition;

    use super::*;

    fn word(value: u8) -> Word {
        Word::from_value(value)
    }

    #[test]
    fn fresh_register_is_zeroed() {
        let register = Register::new();
        assert_eq!(register.output_bits(), [0, 0, 0, 0]);
        assert_eq!(register.load_count(), 0);
        assert_eq!(register.rendered_word(), "0000");
        assert_eq!(register.policy(), LengthPolicy::Truncate);
    }

    #[test]
    fn load_then_reset_walkthrough() {
        let mut register = Register::new();

        register.load(&[1, 0, 1, 1]).expect("four bits load");
        assert_eq!(register.output_bits(), [1, 0, 1, 1]);
        assert_snapshot!(register.rendered_word(), @"1011");
        assert_eq!(register.load_count(), 1);

        register.reset();
        assert_eq!(register.output_bits(), [0, 0, 0, 0]);
        assert_eq!(register.load_count(), 0);
    }

    #[test]
    fn every_nibble_latches_exactly() {
        let mut register = Register::new();
        for value in 0..16u8 {
            let digits = word(value).to_digits();
            let before = register.load_count();
            let state = *register.load(&digits).expect("four bits load");
            assert_eq!(state.output(), word(value));
            assert_eq!(state.load_count(), before + 1);
        }
        assert_eq!(register.load_count(), 16);
    }

    #[test]
    fn load_ignores_prior_state() {
        let mut register = Register::new();
        register.load(&[1, 1, 1, 1]).expect("load");
        register.load(&[0, 1, 0, 0]).expect("load");
        assert_eq!(register.rendered_word(), "0100");
    }

    #[test]
    fn values_are_coerced_by_truthiness() {
        let mut register = Register::new();
        register.load(&[7, 0, -1, 0]).expect("load");
        assert_eq!(register.rendered_word(), "1010");

        register.load(&[false, true, true, false]).expect("load");
        assert_eq!(register.rendered_word(), "0110");

        register
            .load(&[Bit::One, Bit::One, Bit::Zero, Bit::One])
            .expect("load");
        assert_eq!(register.rendered_word(), "1101");

        register.load(&[0.5, 0.0, 1.0, 0.0]).expect("load");
        assert_eq!(register.rendered_word(), "1010");

        register.load(&[f64::NAN, -0.0, 0.0, -3.25]).expect("load");
        assert_eq!(register.rendered_word(), "1001");
    }

    #[test]
    fn over_length_is_truncated_by_default() {
        let mut long = Register::new();
        let mut exact = Register::new();
        long.load(&[1, 0, 1, 1, 1]).expect("truncating load");
        exact.load(&[1, 0, 1, 1]).expect("exact load");
        assert_eq!(long.state(), exact.state());
    }

    #[test]
    fn over_length_is_rejected_under_reject_policy() {
        let mut register = Register::with_policy(LengthPolicy::Reject);
        let err = register.load(&[1, 0, 1, 1, 1]).unwrap_err();
        assert_eq!(
            err,
            RegisterError::InvalidInputLength {
                expected: 4,
                actual: 5
            }
        );
        assert_eq!(register.load_count(), 0);
    }

    #[test]
    fn short_input_is_rejected_and_state_unchanged() {
        let mut register = Register::new();
        register.load(&[0, 1, 1, 0]).expect("load");
        let before = *register.state();

        let err = register.load(&[1, 0, 1]).unwrap_err();
        assert_eq!(
            err,
            RegisterError::InvalidInputLength {
                expected: 4,
                actual: 3
            }
        );
        assert_eq!(*register.state(), before);

        let empty: [u8; 0] = [];
        assert!(register.load(&empty).is_err());
        assert_eq!(*register.state(), before);
    }

    #[test]
    fn short_input_is_rejected_under_both_policies() {
        for policy in [LengthPolicy::Truncate, LengthPolicy::Reject] {
            assert!(normalize(&[1, 1], policy).is_err());
        }
    }

    #[test]
    fn reset_is_idempotent() {
        let mut register = Register::new();
        register.load(&[1, 1, 0, 1]).expect("load");
        let once = *register.reset();
        let twice = *register.reset();
        assert_eq!(once, twice);
        assert_eq!(twice.output(), Word::ZERO);
        assert_eq!(twice.load_count(), 0);
    }

    #[test]
    fn counter_restarts_after_reset() {
        let mut register = Register::new();
        for _ in 0..3 {
            register.load(&[1, 0, 0, 0]).expect("load");
        }
        assert_eq!(register.load_count(), 3);
        register.reset();
        register.load(&[0, 0, 0, 1]).expect("load");
        assert_eq!(register.load_count(), 1);
    }

    #[test]
    fn counter_never_decreases_across_loads() {
        let mut register = Register::new();
        let mut last = register.load_count();
        for value in [3u8, 3, 0, 15, 9] {
            register.load(&word(value).to_digits()).expect("load");
            assert!(register.load_count() > last);
            last = register.load_count();
        }
    }

    #[test]
    fn rendered_word_is_pure() {
        let mut register = Register::new();
        register.load(&[0, 0, 1, 1]).expect("load");
        let before = *register.state();
        for _ in 0..5 {
            assert_eq!(register.rendered_word(), "0011");
        }
        assert_eq!(*register.state(), before);
    }

    #[test]
    fn rendered_word_matches_stored_order() {
        let mut register = Register::new();
        register.load(&[1, 0, 0, 0]).expect("load");
        assert_eq!(register.word().bit(BitPosition::B3), Bit::One);
        let expected: String = register
            .output_bits()
            .iter()
            .map(ToString::to_string)
            .collect();
        assert_eq!(register.rendered_word(), expected);
    }

    #[test]
    fn registers_are_independent() {
        let mut a = Register::new();
        let b = Register::new();
        a.load(&[1, 1, 1, 1]).expect("load");
        assert_eq!(a.rendered_word(), "1111");
        assert_eq!(b.rendered_word(), "0000");
    }
}
