use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum AddError {
    #[error("{lhs} + {rhs} overflows {type_name}")]
    Overflow {
        lhs: String,
        rhs: String,
        type_name: &'static str,
    },

    #[error("Invalid {type_name} operand '{input}': {reason}")]
    InvalidOperand {
        input: String,
        type_name: &'static str,
        reason: String,
    },
}

pub type Result<T> = std::result::Result<T, AddError>;
