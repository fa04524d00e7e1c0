//! Integer addition from XOR, AND and shift-left alone.
//!
//! [`add`] is the core: it wraps on overflow exactly like the native
//! `wrapping_add` of the chosen width. [`checked_add`] and
//! [`overflowing_add`] surface the overflow instead, and [`trace_add`]
//! records each carry step for display.

pub mod adder;
pub mod bits;
pub mod error;
pub mod trace;

#[cfg(feature = "cli")]
pub mod cli;
#[cfg(feature = "cli")]
pub mod logger;

#[cfg(feature = "certora")]
mod certora;

pub use adder::{add, add_iterative, checked_add, negate, overflowing_add, sub};
pub use bits::BitInt;
pub use error::{AddError, Result};
pub use trace::{trace_add, CarryStep, Trace};
