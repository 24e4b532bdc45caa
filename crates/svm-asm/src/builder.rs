//! Fluent program builder

use svm_core::{Instruction, Machine, Value};

use crate::token::Token;

/// Accumulates instructions in order
#[derive(Debug, Clone, Default)]
pub struct ProgramBuilder {
    instructions: Vec<Instruction>,
}

impl ProgramBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(mut self, value: impl Into<Value>) -> Self {
        self.instructions.push(Instruction::Const(value.into()));
        self
    }

    pub fn int(self, n: i64) -> Self {
        self.push(n)
    }

    pub fn bool(self, b: bool) -> Self {
        self.push(b)
    }

    pub fn add(self) -> Self {
        self.instruction(Instruction::Add)
    }

    /// `mod` is a keyword
    pub fn modulo(self) -> Self {
        self.instruction(Instruction::Mod)
    }

    pub fn eq(self) -> Self {
        self.instruction(Instruction::Eq)
    }

    pub fn print(self) -> Self {
        self.instruction(Instruction::Print)
    }

    pub fn exit(self) -> Self {
        self.instruction(Instruction::Exit)
    }

    pub fn instruction(mut self, instruction: Instruction) -> Self {
        self.instructions.push(instruction);
        self
    }

    /// Append any token; unrecognized words become `Malformed`
    pub fn token(self, token: impl Into<Token>) -> Self {
        self.instruction(token.into().into_instruction())
    }

    pub fn len(&self) -> usize {
        self.instructions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.instructions.is_empty()
    }

    pub fn build(self) -> Vec<Instruction> {
        self.instructions
    }

    /// Fresh machine loaded with the built program
    pub fn machine(self) -> Machine {
        Machine::new(self.instructions)
    }
}
