//! Instruction Representation
//!
//! Defines the instruction set consumed by the machine.
//! This layer contains no execution semantics.

use std::fmt;

use super::opcode::Opcode;
use crate::vm::value::Value;

/// A single instruction
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Instruction {
    /// Push a value
    Const(Value),
    Add,
    Mod,
    Eq,
    Print,
    /// Consumed without effect
    Exit,

    /// Unrecognized authoring token.
    ///
    /// Executing this is a defect in the program, not a runtime fault.
    Malformed(String),
}

impl Instruction {
    /// Opcode of this instruction, `None` for malformed tokens
    pub fn opcode(&self) -> Option<Opcode> {
        match self {
            Instruction::Const(_) => Some(Opcode::Const),
            Instruction::Add => Some(Opcode::Add),
            Instruction::Mod => Some(Opcode::Mod),
            Instruction::Eq => Some(Opcode::Eq),
            Instruction::Print => Some(Opcode::Print),
            Instruction::Exit => Some(Opcode::Exit),
            Instruction::Malformed(_) => None,
        }
    }

    /// Build the payload-free instruction for `opcode`.
    ///
    /// Returns `None` for `Opcode::Const`, which needs a value.
    pub fn from_opcode(opcode: Opcode) -> Option<Self> {
        match opcode {
            Opcode::Const => None,
            Opcode::Add => Some(Instruction::Add),
            Opcode::Mod => Some(Instruction::Mod),
            Opcode::Eq => Some(Instruction::Eq),
            Opcode::Print => Some(Instruction::Print),
            Opcode::Exit => Some(Instruction::Exit),
        }
    }
}

impl From<Value> for Instruction {
    fn from(value: Value) -> Self {
        Instruction::Const(value)
    }
}

impl From<i64> for Instruction {
    fn from(n: i64) -> Self {
        Instruction::Const(Value::Int(n))
    }
}

impl From<bool> for Instruction {
    fn from(b: bool) -> Self {
        Instruction::Const(Value::Bool(b))
    }
}

impl fmt::Display for Instruction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Instruction::Const(v) => write!(f, "const {}", v),
            Instruction::Malformed(token) => write!(f, "<malformed: {}>", token),
            other => match other.opcode() {
                Some(op) => f.write_str(op.mnemonic()),
                None => Ok(()),
            },
        }
    }
}
