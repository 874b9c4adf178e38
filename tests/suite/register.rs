//! Register behavior through the public `pipo-core` API.

use pipo_core::{LengthPolicy, Register, RegisterError, Word, normalize};

#[test]
fn walkthrough_load_then_reset() {
    let mut register = Register::new();
    assert_eq!(register.output_bits(), [0, 0, 0, 0]);
    assert_eq!(register.load_count(), 0);

    register.load(&[1, 0, 1, 1]).expect("load");
    assert_eq!(register.output_bits(), [1, 0, 1, 1]);
    assert_eq!(register.rendered_word(), "1011");
    assert_eq!(register.load_count(), 1);

    register.reset();
    assert_eq!(register.output_bits(), [0, 0, 0, 0]);
    assert_eq!(register.load_count(), 0);
}

#[test]
fn rejected_load_leaves_state_untouched() {
    let mut register = Register::new();
    register.load(&[1, 1, 0, 0]).expect("load");
    let before = *register.state();

    assert_eq!(
        register.load(&[1, 0, 1]),
        Err(RegisterError::InvalidInputLength {
            expected: 4,
            actual: 3
        })
    );
    assert_eq!(*register.state(), before);
    assert_eq!(register.rendered_word(), "1100");
}

#[test]
fn truncation_and_rejection_are_explicit_choices() {
    let five = [1, 0, 1, 1, 1];
    assert_eq!(
        normalize(&five, LengthPolicy::Truncate),
        Ok(Word::from_value(0b1011))
    );
    assert!(normalize(&five, LengthPolicy::Reject).is_err());
}

#[test]
fn load_then_reset_then_load_counts_from_one() {
    let mut register = Register::new();
    register.load(&[true, true, true, true]).expect("load");
    register.load(&[false, false, false, true]).expect("load");
    register.reset();
    register.reset();
    register.load(&[0u8, 1, 0, 1]).expect("load");
    assert_eq!(register.load_count(), 1);
    assert_eq!(register.rendered_word(), "0101");
}
