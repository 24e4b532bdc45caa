//! Operand Stack
//!
//! Stack data structure for VM execution.
//! No execution semantics.

use crate::bytecode::opcode::Opcode;
use crate::error::{Fault, FaultResult};
use super::value::Value;

/// Operand stack
///
/// Stored bottom-first internally; every observer sees it top-first.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Stack {
    values: Vec<Value>,
}

impl Stack {
    /// Create an empty stack
    pub fn new() -> Self {
        Stack { values: Vec::new() }
    }

    /// Build a stack from values listed top-first
    pub fn from_top_first(values: impl IntoIterator<Item = Value>) -> Self {
        let mut values: Vec<Value> = values.into_iter().collect();
        values.reverse();
        Stack { values }
    }

    /// Push value onto stack
    pub fn push(&mut self, value: Value) {
        self.values.push(value);
    }

    /// Pop exactly `count` values, returned top-first.
    ///
    /// Nothing is removed unless all `count` values are present.
    pub fn pop_n(&mut self, opcode: Opcode, count: usize) -> FaultResult<Vec<Value>> {
        let available = self.values.len();
        if available < count {
            return Err(Fault::StackUnderflow {
                opcode,
                needed: count,
                available,
            });
        }
        let mut popped = self.values.split_off(available - count);
        popped.reverse();
        Ok(popped)
    }

    /// Peek at top of stack without removing
    pub fn peek(&self) -> Option<&Value> {
        self.values.last()
    }

    /// Iterate values top-first
    pub fn iter(&self) -> impl Iterator<Item = &Value> + '_ {
        self.values.iter().rev()
    }

    /// Copy the values out top-first
    pub fn to_vec(&self) -> Vec<Value> {
        self.iter().copied().collect()
    }

    /// Get current stack size
    pub fn len(&self) -> usize {
        self.values.len()
    }

    /// Check if stack is empty
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }
}
