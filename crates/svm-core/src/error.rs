//! Runtime Faults
//!
//! Classified, non-fatal failures of a single execution step.
//! A fault halts the run loop; malformed instructions are not faults.

use thiserror::Error;

use crate::bytecode::opcode::Opcode;
use crate::vm::value::Value;

/// Fault raised by a single step
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Fault {
    #[error("stack underflow: {opcode} needs {needed} operand(s), {available} available")]
    StackUnderflow {
        opcode: Opcode,
        needed: usize,
        available: usize,
    },

    #[error("type mismatch: {opcode} expects {expected}, found {} {found}", .found.type_name())]
    TypeMismatch {
        opcode: Opcode,
        expected: &'static str,
        found: Value,
    },

    #[error("division by zero: {dividend} mod 0")]
    DivisionByZero { dividend: i64 },

    /// `top` was on top of the stack, `next` just below it
    #[error("integer overflow: {top} {opcode} {next}")]
    Overflow { opcode: Opcode, top: i64, next: i64 },

    /// No instructions left. The run loop treats this as normal completion.
    #[error("instruction stream is empty")]
    EmptyInstructionStream,
}

impl Fault {
    /// Whether this is the end-of-program signal rather than an error
    pub fn is_completion(&self) -> bool {
        matches!(self, Fault::EmptyInstructionStream)
    }
}

pub type FaultResult<T> = Result<T, Fault>;
