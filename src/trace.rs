//! Step-by-step walkthrough of a bitwise addition.

use std::fmt;

use crate::bits::BitInt;

/// One level of the carry recursion.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CarryStep<T> {
    pub a: T,
    pub b: T,
    /// `a ^ b`
    pub unique: T,
    /// `a & b`
    pub like: T,
    /// `like << 1`, the `b` of the next step.
    pub carry: T,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Trace<T> {
    pub lhs: T,
    pub rhs: T,
    pub steps: Vec<CarryStep<T>>,
    pub sum: T,
    /// A carry was shifted out of the top bit at some step.
    pub carried_out: bool,
}

impl<T: BitInt> Trace<T> {
    pub fn depth(&self) -> usize {
        self.steps.len()
    }
}

/// Runs the adder and records every level until the carry runs out.
pub fn trace_add<T: BitInt>(lhs: T, rhs: T) -> Trace<T> {
    let mut steps = Vec::new();
    let mut carried_out = false;
    let (mut a, mut b) = (lhs, rhs);

    while !b.is_zero() {
        let unique = a ^ b;
        let like = a & b;
        let carry = like << 1;
        carried_out |= like.top_bit_set();

        tracing::trace!(
            step = steps.len(),
            unique = %Bits(unique),
            like = %Bits(like),
            carry = %Bits(carry),
            "carry step"
        );

        steps.push(CarryStep {
            a,
            b,
            unique,
            like,
            carry,
        });
        a = unique;
        b = carry;
    }

    Trace {
        lhs,
        rhs,
        steps,
        sum: a,
        carried_out,
    }
}

/// Zero-padded binary rendering at the type's full width.
struct Bits<T>(T);

impl<T: BitInt> fmt::Display for Bits<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:0width$b}", self.0, width = T::BITS as usize)
    }
}

impl<T: BitInt> fmt::Display for Trace<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = 8;
        writeln!(f, "{:>label$}  {}  ({})", "a", Bits(self.lhs), self.lhs)?;
        writeln!(f, "{:>label$}  {}  ({})", "b", Bits(self.rhs), self.rhs)?;

        for (i, step) in self.steps.iter().enumerate() {
            writeln!(f, "step {}", i + 1)?;
            writeln!(f, "{:>label$}  {}", "a ^ b", Bits(step.unique))?;
            writeln!(f, "{:>label$}  {}", "a & b", Bits(step.like))?;
            writeln!(f, "{:>label$}  {}", "carry", Bits(step.carry))?;
        }

        write!(f, "{:>label$}  {}  ({})", "sum", Bits(self.sum), self.sum)?;
        if self.carried_out {
            write!(f, "  [carry dropped past bit {}]", T::BITS - 1)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adder::add;

    #[test]
    fn test_trace_five_plus_seven() {
        let trace = trace_add(5u8, 7);
        assert_eq!(trace.sum, 12);
        assert_eq!(
            trace.steps[0],
            CarryStep {
                a: 5,
                b: 7,
                unique: 0b010,
                like: 0b101,
                carry: 0b1010,
            }
        );
        assert_eq!(trace.steps.last().map(|s| s.carry), Some(0));
        assert!(!trace.carried_out);
    }

    #[test]
    fn test_trace_zero_rhs_has_no_steps() {
        let trace = trace_add(3i32, 0);
        assert_eq!(trace.depth(), 0);
        assert_eq!(trace.sum, 3);
    }

    #[test]
    fn test_trace_depth_bounded_by_width() {
        for a in 0..=u8::MAX {
            for b in 0..=u8::MAX {
                let trace = trace_add(a, b);
                assert!(trace.depth() <= 9);
                assert_eq!(trace.sum, add(a, b));
                assert_eq!(trace.carried_out, a.checked_add(b).is_none());
            }
        }
    }

    #[test]
    fn test_display() {
        let rendered = trace_add(1u8, 1).to_string();
        let expected = concat!(
            "       a  00000001  (1)\n",
            "       b  00000001  (1)\n",
            "step 1\n",
            "   a ^ b  00000000\n",
            "   a & b  00000001\n",
            "   carry  00000010\n",
            "step 2\n",
            "   a ^ b  00000010\n",
            "   a & b  00000000\n",
            "   carry  00000000\n",
            "     sum  00000010  (2)",
        );
        assert_eq!(rendered, expected);
    }

    #[test]
    fn test_display_marks_dropped_carry() {
        let rendered = trace_add(-1i8, 1).to_string();
        assert!(rendered.ends_with("(0)  [carry dropped past bit 7]"));
    }
}
