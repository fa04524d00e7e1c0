//! Addition built from XOR, AND and shift-left only.
//!
//! `a ^ b` keeps the bits set in exactly one operand (the unique terms), which
//! never need carrying. `a & b` keeps the bits set in both (the like terms);
//! each of those carries one position left. Adding the unique terms to the
//! shifted carry is the same problem again, and it ends once no carry is left.

use crate::bits::BitInt;
use crate::error::{AddError, Result};

/// Adds two integers without the native addition operator.
///
/// Wraps on overflow exactly like `wrapping_add`: a carry shifted past the
/// top bit is dropped. Recursion depth is at most `T::BITS + 1`.
pub fn add<T: BitInt>(a: T, b: T) -> T {
    if b.is_zero() {
        return a;
    }

    let unique_terms = a ^ b;
    let like_terms = a & b;
    let carry = like_terms << 1;

    add(unique_terms, carry)
}

/// Same recurrence as [`add`], unrolled into a loop.
pub fn add_iterative<T: BitInt>(mut a: T, mut b: T) -> T {
    while !b.is_zero() {
        let carry = (a & b) << 1;
        a = a ^ b;
        b = carry;
    }
    a
}

/// Adds two integers and reports whether the result wrapped.
///
/// Mirrors the std `overflowing_add`. For unsigned types a carry out of the
/// top bit is an overflow. For signed types the operands sharing a sign that
/// the result lacks is an overflow.
pub fn overflowing_add<T: BitInt>(a: T, b: T) -> (T, bool) {
    let mut unique_terms = a;
    let mut carry = b;
    let mut carried_out = false;

    while !carry.is_zero() {
        let like_terms = unique_terms & carry;
        // At most one carry can leave the top bit: a + b < 2^(N+1).
        carried_out |= like_terms.top_bit_set();
        unique_terms = unique_terms ^ carry;
        carry = like_terms << 1;
    }

    let sum = unique_terms;
    let overflowed = if T::SIGNED {
        ((a ^ sum) & (b ^ sum)).top_bit_set()
    } else {
        carried_out
    };

    (sum, overflowed)
}

/// Adds two integers, failing instead of wrapping.
pub fn checked_add<T: BitInt>(a: T, b: T) -> Result<T> {
    match overflowing_add(a, b) {
        (sum, false) => Ok(sum),
        (sum, true) => {
            tracing::debug!(%a, %b, wrapped = %sum, ty = T::NAME, "addition overflowed");
            Err(AddError::Overflow {
                lhs: a.to_string(),
                rhs: b.to_string(),
                type_name: T::NAME,
            })
        }
    }
}

/// Two's-complement negation: `!a + 1`.
///
/// `negate(MIN) == MIN` for signed types, and `negate(a) == 2^N - a` for
/// unsigned ones, both matching `wrapping_neg`.
pub fn negate<T: BitInt>(a: T) -> T {
    add(!a, T::ONE)
}

/// `a - b` as `a + (-b)`, wrapping like `wrapping_sub`.
pub fn sub<T: BitInt>(a: T, b: T) -> T {
    add(a, negate(b))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_add_basic() {
        assert_eq!(add(2, 3), 5);
        assert_eq!(add(5i32, 7), 12);
    }

    #[test]
    fn test_add_zero() {
        assert_eq!(add(0, 0), 0);
        assert_eq!(add(42, 0), 42);
        assert_eq!(add(0, 42), 42);
    }

    #[test]
    fn test_add_negative() {
        assert_eq!(add(-1i32, 1), 0);
        assert_eq!(add(-5i32, -7), -12);
        assert_eq!(add(-128i8, 127), -1);
    }

    #[test]
    fn test_add_large_numbers() {
        assert_eq!(add(u64::MAX - 1, 1), u64::MAX);
    }

    #[test]
    fn test_add_wraps() {
        assert_eq!(add(i32::MAX, 1), i32::MIN);
        assert_eq!(add(i64::MIN, -1), i64::MAX);
        assert_eq!(add(u8::MAX, 1), 0);
        assert_eq!(add(u128::MAX, u128::MAX), u128::MAX - 1);
    }

    #[test]
    fn test_iterative_matches_recursive() {
        for a in i8::MIN..=i8::MAX {
            for b in [i8::MIN, -37, -1, 0, 1, 64, i8::MAX] {
                assert_eq!(add_iterative(a, b), add(a, b));
            }
        }
    }

    #[test]
    fn test_overflowing_add_exhaustive_i8_u8() {
        for a in i8::MIN..=i8::MAX {
            for b in i8::MIN..=i8::MAX {
                assert_eq!(overflowing_add(a, b), a.overflowing_add(b), "{a} + {b}");
            }
        }
        for a in 0..=u8::MAX {
            for b in 0..=u8::MAX {
                assert_eq!(overflowing_add(a, b), a.overflowing_add(b), "{a} + {b}");
            }
        }
    }

    #[test]
    fn test_checked_add() {
        assert_eq!(checked_add(40i32, 2), Ok(42));
        assert_eq!(
            checked_add(i32::MAX, 1),
            Err(AddError::Overflow {
                lhs: "2147483647".to_string(),
                rhs: "1".to_string(),
                type_name: "i32",
            })
        );
        assert!(checked_add(u16::MAX, 1).is_err());
        assert!(checked_add(-1i16, 1).is_ok());
    }

    #[test]
    fn test_negate() {
        assert_eq!(negate(5i32), -5);
        assert_eq!(negate(-5i32), 5);
        assert_eq!(negate(0i32), 0);
        assert_eq!(negate(i32::MIN), i32::MIN);
        assert_eq!(negate(1u8), u8::MAX);
    }

    #[test]
    fn test_sub() {
        assert_eq!(sub(12i32, 7), 5);
        assert_eq!(sub(7i32, 12), -5);
        assert_eq!(sub(0u32, 1), u32::MAX);
        assert_eq!(sub(i64::MIN, 1), i64::MAX);
    }
}
