//! Formal rules for the bitwise adder.

use crate::{add, negate, overflowing_add};

use cvlr::prelude::*;

/// Verifies that `add` computes the wrapping sum of two numbers.
#[rule]
pub fn rule_add_is_correct() {
    let x: u64 = nondet();
    let y: u64 = nondet();
    let result = add(x, y);
    cvlr_assert_eq!(result, x.wrapping_add(y));
}

/// Verifies that the signed sum matches native two's-complement addition.
#[rule]
pub fn rule_add_is_correct_signed() {
    let x = nondet::<u64>() as i64;
    let y = nondet::<u64>() as i64;
    let result = add(x, y);
    cvlr_assert_eq!(result, x.wrapping_add(y));
}

#[rule]
pub fn rule_add_is_commutative() {
    let x: u64 = nondet();
    let y: u64 = nondet();
    cvlr_assert_eq!(add(x, y), add(y, x));
}

#[rule]
pub fn rule_add_zero_is_identity() {
    let x: u64 = nondet();
    cvlr_assert_eq!(add(x, 0), x);
    cvlr_assert_eq!(add(0, x), x);
}

#[rule]
pub fn rule_add_inverse_is_zero() {
    let x = nondet::<u64>() as i64;
    cvlr_assert_eq!(add(x, negate(x)), 0);
}

/// Verifies that overflow is flagged exactly when the native add flags it.
#[rule]
pub fn rule_overflow_flag_is_correct() {
    let x: u64 = nondet();
    let y: u64 = nondet();
    let (_, overflowed) = overflowing_add(x, y);
    cvlr_assert_eq!(overflowed, x.checked_add(y).is_none());
}
