//! Machine Core
//!
//! Defines the machine state, single-step execution and the run loop.
//! Every step produces a new snapshot; the machine it was called on is
//! never modified.

use std::sync::Arc;

use tracing::{debug, trace, warn};

use crate::bytecode::instruction::Instruction;
use crate::bytecode::opcode::Opcode;
use crate::error::{Fault, FaultResult};
use crate::output::{Output, StdoutOutput};

use super::memory::{Registers, REGISTER_COUNT};
use super::stack::Stack;
use super::value::Value;

/// Text printed by `Print` when the stack is empty
pub const EMPTY_STACK_TEXT: &str = "<empty>";

/// Interpreter state
///
/// The instruction buffer is immutable and shared between snapshots;
/// `remaining` is the suffix after the cursor.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Machine {
    stack: Stack,
    registers: Registers,
    program: Arc<[Instruction]>,
    cursor: usize,
}

/// Why the run loop stopped
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Halt {
    /// The instruction stream was exhausted
    Completed,
    /// A step faulted; its effect was not applied
    Faulted(Fault),
}

/// Terminal machine plus the reason execution stopped
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Execution {
    pub machine: Machine,
    pub halt: Halt,
}

impl Execution {
    pub fn is_completed(&self) -> bool {
        matches!(self.halt, Halt::Completed)
    }

    pub fn fault(&self) -> Option<&Fault> {
        match &self.halt {
            Halt::Completed => None,
            Halt::Faulted(fault) => Some(fault),
        }
    }

    pub fn into_machine(self) -> Machine {
        self.machine
    }
}

impl Machine {
    /// Machine with an empty stack and zeroed registers
    pub fn new(instructions: impl IntoIterator<Item = Instruction>) -> Self {
        Machine {
            stack: Stack::new(),
            registers: Registers::new(),
            program: instructions.into_iter().collect(),
            cursor: 0,
        }
    }

    /// Machine with an explicit initial stack (listed top-first) and registers
    pub fn with_state(
        instructions: impl IntoIterator<Item = Instruction>,
        stack: impl IntoIterator<Item = Value>,
        registers: [i64; REGISTER_COUNT],
    ) -> Self {
        Machine {
            stack: Stack::from_top_first(stack),
            registers: Registers::from(registers),
            program: instructions.into_iter().collect(),
            cursor: 0,
        }
    }

    pub fn stack(&self) -> &Stack {
        &self.stack
    }

    pub fn registers(&self) -> &Registers {
        &self.registers
    }

    /// Instructions not yet executed, in order
    pub fn remaining(&self) -> &[Instruction] {
        &self.program[self.cursor..]
    }

    /// Number of instructions consumed so far
    pub fn steps_taken(&self) -> usize {
        self.cursor
    }

    pub fn is_terminal(&self) -> bool {
        self.remaining().is_empty()
    }

    /// Run to completion, printing to standard output
    pub fn run(self) -> Machine {
        self.run_with(&mut StdoutOutput)
    }

    /// Run to completion against `out`
    pub fn run_with(self, out: &mut dyn Output) -> Machine {
        self.execute(out).into_machine()
    }

    /// Run until the stream is exhausted or a step faults.
    ///
    /// On a fault the returned machine is the state before the failing
    /// step, and a description is written to `out`.
    pub fn execute(self, out: &mut dyn Output) -> Execution {
        let mut current = self;
        loop {
            match current.step(out) {
                Ok(next) => current = next,
                Err(fault) if fault.is_completion() => {
                    debug!(
                        steps = current.cursor,
                        depth = current.stack.len(),
                        "program completed"
                    );
                    return Execution {
                        machine: current,
                        halt: Halt::Completed,
                    };
                }
                Err(fault) => {
                    warn!(%fault, step = current.cursor, "halting on fault");
                    out.emit(&format!("fault: {}", fault));
                    return Execution {
                        machine: current,
                        halt: Halt::Faulted(fault),
                    };
                }
            }
        }
    }

    /// Execute a single instruction, producing the successor state.
    ///
    /// # Panics
    ///
    /// Panics on `Instruction::Malformed`: the program itself is defective.
    pub fn step(&self, out: &mut dyn Output) -> FaultResult<Machine> {
        let (instruction, next) = self.fetch()?;
        trace!(step = self.cursor, %instruction, depth = self.stack.len(), "step");
        next.dispatch(instruction, out)
    }

    /// Split off the next instruction; the returned machine has the cursor past it
    fn fetch(&self) -> FaultResult<(&Instruction, Machine)> {
        let instruction = self
            .program
            .get(self.cursor)
            .ok_or(Fault::EmptyInstructionStream)?;
        let mut next = self.clone();
        next.cursor += 1;
        Ok((instruction, next))
    }

    fn dispatch(mut self, instruction: &Instruction, out: &mut dyn Output) -> FaultResult<Machine> {
        match instruction {
            Instruction::Const(value) => {
                self.stack.push(*value);
                Ok(self)
            }
            Instruction::Exit => Ok(self),
            Instruction::Print => {
                match self.stack.peek() {
                    Some(top) => out.emit(&top.to_string()),
                    None => out.emit(EMPTY_STACK_TEXT),
                }
                Ok(self)
            }
            Instruction::Add => {
                let (top, below, mut next) = self.pop_ints(Opcode::Add)?;
                let sum = top.checked_add(below).ok_or(Fault::Overflow {
                    opcode: Opcode::Add,
                    top,
                    next: below,
                })?;
                next.stack.push(Value::Int(sum));
                Ok(next)
            }
            Instruction::Mod => {
                // top of stack is the dividend
                let (dividend, divisor, mut next) = self.pop_ints(Opcode::Mod)?;
                if divisor == 0 {
                    return Err(Fault::DivisionByZero { dividend });
                }
                next.stack.push(Value::Int(dividend.wrapping_rem(divisor)));
                Ok(next)
            }
            Instruction::Eq => {
                let (operands, mut next) = self.pop(Opcode::Eq, 2)?;
                next.stack.push(Value::Bool(operands[0] == operands[1]));
                Ok(next)
            }
            Instruction::Malformed(token) => panic!(
                "malformed instruction `{}` at position {}: \
                 the program was built from an unrecognized token",
                token,
                self.cursor - 1
            ),
        }
    }

    /// Pop `count` values (top-first) alongside the updated machine
    fn pop(mut self, opcode: Opcode, count: usize) -> FaultResult<(Vec<Value>, Machine)> {
        let values = self.stack.pop_n(opcode, count)?;
        Ok((values, self))
    }

    /// Pop two integers: (top, next down)
    fn pop_ints(self, opcode: Opcode) -> FaultResult<(i64, i64, Machine)> {
        let (operands, next) = self.pop(opcode, opcode.arity())?;
        let int = |value: Value| {
            value.as_int().ok_or(Fault::TypeMismatch {
                opcode,
                expected: "int",
                found: value,
            })
        };
        Ok((int(operands[0])?, int(operands[1])?, next))
    }
}
