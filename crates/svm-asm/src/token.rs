//! Authoring tokens
//!
//! A token is anything a program author may write in a program listing:
//! an instruction, a bare literal, or a word still to be classified.

use svm_core::{Instruction, Opcode, Value};

/// Heterogeneous program token
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Token {
    Instr(Instruction),
    Int(i64),
    Bool(bool),
    /// Word that is neither a mnemonic nor a literal
    Word(String),
}

impl Token {
    /// Classify a single word.
    ///
    /// Mnemonics map to their instruction (`const` needs an operand and stays
    /// a word), integer and boolean literals map to literals.
    pub fn classify(word: &str) -> Self {
        let trimmed = word.trim();
        let instruction = Opcode::from_mnemonic(trimmed).and_then(Instruction::from_opcode);
        if let Some(instruction) = instruction {
            return Token::Instr(instruction);
        }
        if let Ok(n) = trimmed.parse::<i64>() {
            return Token::Int(n);
        }
        match trimmed {
            "true" => Token::Bool(true),
            "false" => Token::Bool(false),
            _ => Token::Word(word.to_owned()),
        }
    }

    /// Map to an instruction; unrecognized words become `Malformed`
    pub fn into_instruction(self) -> Instruction {
        match self {
            Token::Instr(instruction) => instruction,
            Token::Int(n) => Instruction::Const(Value::Int(n)),
            Token::Bool(b) => Instruction::Const(Value::Bool(b)),
            Token::Word(word) => Instruction::Malformed(word),
        }
    }
}

impl From<Instruction> for Token {
    fn from(instruction: Instruction) -> Self {
        Token::Instr(instruction)
    }
}

impl From<Value> for Token {
    fn from(value: Value) -> Self {
        match value {
            Value::Int(n) => Token::Int(n),
            Value::Bool(b) => Token::Bool(b),
        }
    }
}

impl From<i64> for Token {
    fn from(n: i64) -> Self {
        Token::Int(n)
    }
}

impl From<i32> for Token {
    fn from(n: i32) -> Self {
        Token::Int(i64::from(n))
    }
}

impl From<bool> for Token {
    fn from(b: bool) -> Self {
        Token::Bool(b)
    }
}

impl From<&str> for Token {
    fn from(word: &str) -> Self {
        Token::classify(word)
    }
}

impl From<String> for Token {
    fn from(word: String) -> Self {
        Token::classify(&word)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn classifies_words() {
        assert_eq!(Token::classify("add"), Token::Instr(Instruction::Add));
        assert_eq!(Token::classify("MOD"), Token::Instr(Instruction::Mod));
        assert_eq!(Token::classify("-12"), Token::Int(-12));
        assert_eq!(Token::classify("true"), Token::Bool(true));
        assert_eq!(Token::classify("false"), Token::Bool(false));
        assert_eq!(Token::classify("True"), Token::Word("True".into()));
        assert_eq!(Token::classify("const"), Token::Word("const".into()));
        assert_eq!(Token::classify("jmp"), Token::Word("jmp".into()));
    }

    #[test]
    fn literal_conversions() {
        assert_eq!(Token::from(3), Token::Int(3));
        assert_eq!(Token::from(3i64), Token::Int(3));
        assert_eq!(Token::from(false), Token::Bool(false));
        assert_eq!(Token::from(Value::Int(8)), Token::Int(8));
        assert_eq!(Token::from(Instruction::Print), Token::Instr(Instruction::Print));
    }

    #[test]
    fn unknown_word_becomes_malformed() {
        assert_eq!(
            Token::from("?!").into_instruction(),
            Instruction::Malformed("?!".into())
        );
        assert_eq!(Token::Int(2).into_instruction(), Instruction::from(2));
    }
}
