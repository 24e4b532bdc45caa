//! svm-asm: program authoring helpers for the SVM core
//!
//! Turns heterogeneous tokens (instructions, bare literals, mnemonic words)
//! into the ordered instruction sequence the machine consumes. Nothing here
//! executes code.

pub use svm_core::{Instruction, Machine, Value};

pub mod builder;
pub mod token;

pub use builder::ProgramBuilder;
pub use token::Token;

use thiserror::Error;
use tracing::debug;

/// Authoring error
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum AsmError {
    #[error("unknown token `{token}` at position {index}")]
    UnknownToken { index: usize, token: String },
}

/// Map tokens to instructions; unrecognized words become `Instruction::Malformed`
pub fn assemble<I, T>(tokens: I) -> Vec<Instruction>
where
    I: IntoIterator<Item = T>,
    T: Into<Token>,
{
    tokens
        .into_iter()
        .map(|token| token.into().into_instruction())
        .collect()
}

/// Map tokens to instructions, rejecting the first unrecognized word
pub fn assemble_strict<I, T>(tokens: I) -> Result<Vec<Instruction>, AsmError>
where
    I: IntoIterator<Item = T>,
    T: Into<Token>,
{
    let mut instructions = Vec::new();
    for (index, token) in tokens.into_iter().enumerate() {
        match token.into() {
            Token::Word(token) => {
                debug!(index, %token, "rejecting unknown token");
                return Err(AsmError::UnknownToken { index, token });
            }
            other => instructions.push(other.into_instruction()),
        }
    }
    Ok(instructions)
}

/// Build an instruction sequence from a heterogeneous literal list.
///
/// ```
/// use svm_asm::{program, Instruction};
///
/// let code = program![3, 4, Instruction::Add, "print", true];
/// assert_eq!(code.len(), 5);
/// ```
#[macro_export]
macro_rules! program {
    ($($token:expr),* $(,)?) => {
        $crate::assemble::<::std::vec::Vec<$crate::Token>, $crate::Token>(
            ::std::vec![$($crate::Token::from($token)),*],
        )
    };
}
