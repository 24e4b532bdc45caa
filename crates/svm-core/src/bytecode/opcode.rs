//! Opcode Definitions
//!
//! Payload-free kinds of the instruction set and their mnemonics.
//! This file contains no execution semantics.

use std::fmt;

/// Instruction kinds
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Opcode {
    // Stack
    Const,

    // Arithmetic
    Add,
    Mod,

    // Comparison
    Eq,

    // System
    Print,
    Exit,
}

impl Opcode {
    /// Every opcode, in declaration order
    pub const ALL: [Opcode; 6] = [
        Opcode::Const,
        Opcode::Add,
        Opcode::Mod,
        Opcode::Eq,
        Opcode::Print,
        Opcode::Exit,
    ];

    /// Lowercase mnemonic
    pub fn mnemonic(self) -> &'static str {
        match self {
            Opcode::Const => "const",
            Opcode::Add => "add",
            Opcode::Mod => "mod",
            Opcode::Eq => "eq",
            Opcode::Print => "print",
            Opcode::Exit => "exit",
        }
    }

    /// Resolve a mnemonic (case-insensitive) to an opcode
    pub fn from_mnemonic(word: &str) -> Option<Self> {
        Self::ALL
            .into_iter()
            .find(|op| op.mnemonic().eq_ignore_ascii_case(word))
    }

    /// Number of stack operands the opcode pops
    pub fn arity(self) -> usize {
        match self {
            Opcode::Add | Opcode::Mod | Opcode::Eq => 2,
            Opcode::Const | Opcode::Print | Opcode::Exit => 0,
        }
    }
}

impl fmt::Display for Opcode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.mnemonic())
    }
}
