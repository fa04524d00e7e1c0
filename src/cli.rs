use std::fmt::Display;
use std::str::FromStr;

use clap::{Parser, ValueEnum};

use crate::bits::BitInt;
use crate::error::{AddError, Result};
use crate::{add, checked_add, trace_add};

#[derive(Parser, Debug, Clone)]
#[command(name = "bitadd")]
#[command(about = "Add two integers using only XOR, AND and shift-left")]
#[command(version, allow_negative_numbers = true)]
pub struct CliConfig {
    /// Left operand (decimal)
    pub a: String,

    /// Right operand (decimal)
    pub b: String,

    /// Integer width in bits
    #[arg(short, long, value_enum, default_value_t = Width::W32)]
    pub width: Width,

    /// Treat operands as unsigned
    #[arg(short, long)]
    pub unsigned: bool,

    /// Fail on overflow instead of wrapping
    #[arg(short, long)]
    pub checked: bool,

    /// Print every carry step in binary
    #[arg(short, long)]
    pub steps: bool,

    /// Enable verbose logging
    #[arg(short, long)]
    pub verbose: bool,
}

#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
pub enum Width {
    #[value(name = "8")]
    W8,
    #[value(name = "16")]
    W16,
    #[value(name = "32")]
    W32,
    #[value(name = "64")]
    W64,
    #[value(name = "128")]
    W128,
}

impl CliConfig {
    /// Computes what `bitadd` prints for this configuration.
    pub fn run(&self) -> Result<String> {
        match (self.width, self.unsigned) {
            (Width::W8, false) => self.evaluate::<i8>(),
            (Width::W16, false) => self.evaluate::<i16>(),
            (Width::W32, false) => self.evaluate::<i32>(),
            (Width::W64, false) => self.evaluate::<i64>(),
            (Width::W128, false) => self.evaluate::<i128>(),
            (Width::W8, true) => self.evaluate::<u8>(),
            (Width::W16, true) => self.evaluate::<u16>(),
            (Width::W32, true) => self.evaluate::<u32>(),
            (Width::W64, true) => self.evaluate::<u64>(),
            (Width::W128, true) => self.evaluate::<u128>(),
        }
    }

    fn evaluate<T>(&self) -> Result<String>
    where
        T: BitInt,
        <T as FromStr>::Err: Display,
    {
        let a = parse_operand::<T>(&self.a)?;
        let b = parse_operand::<T>(&self.b)?;
        tracing::debug!(%a, %b, ty = T::NAME, "parsed operands");

        if self.steps {
            if self.checked {
                checked_add(a, b)?;
            }
            return Ok(trace_add(a, b).to_string());
        }

        let sum = if self.checked {
            checked_add(a, b)?
        } else {
            add(a, b)
        };
        Ok(sum.to_string())
    }
}

fn parse_operand<T>(input: &str) -> Result<T>
where
    T: BitInt,
    <T as FromStr>::Err: Display,
{
    input
        .trim()
        .parse::<T>()
        .map_err(|e| AddError::InvalidOperand {
            input: input.to_string(),
            type_name: T::NAME,
            reason: e.to_string(),
        })
}
