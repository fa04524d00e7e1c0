//! Fixed-width integer operations used by the adder.

use std::fmt::{Binary, Debug, Display};
use std::ops::{BitAnd, BitXor, Not, Shl};
use std::str::FromStr;

/// A fixed-width, two's-complement integer the adder can work on.
///
/// Only bitwise operations are exposed here; nothing in this crate reaches
/// for the native `+` on a `BitInt`.
pub trait BitInt:
    Copy
    + Eq
    + Debug
    + Display
    + Binary
    + FromStr
    + BitXor<Output = Self>
    + BitAnd<Output = Self>
    + Not<Output = Self>
    + Shl<u32, Output = Self>
{
    const ZERO: Self;
    const ONE: Self;
    /// Only the most significant bit set.
    const TOP_BIT: Self;
    const BITS: u32;
    const SIGNED: bool;
    /// Rust name of the type, used in error messages.
    const NAME: &'static str;

    fn is_zero(self) -> bool {
        self == Self::ZERO
    }

    /// True if the most significant bit is set.
    fn top_bit_set(self) -> bool {
        !(self & Self::TOP_BIT).is_zero()
    }
}

macro_rules! impl_bit_int {
    ($signed:expr => $($t:ty),*) => {
        $(
            impl BitInt for $t {
                const ZERO: Self = 0;
                const ONE: Self = 1;
                const TOP_BIT: Self = (1 as $t) << (<$t>::BITS - 1);
                const BITS: u32 = <$t>::BITS;
                const SIGNED: bool = $signed;
                const NAME: &'static str = stringify!($t);
            }
        )*
    };
}

impl_bit_int!(true => i8, i16, i32, i64, i128, isize);
impl_bit_int!(false => u8, u16, u32, u64, u128, usize);
