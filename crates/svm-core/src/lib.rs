//! SVM - Core Library
//!
//! Public API surface for the stack machine core: values, the instruction
//! set, and the step/run engine.

pub mod error;
pub mod output;
pub mod bytecode;
pub mod vm;

// Re-export commonly used types
pub use error::{Fault, FaultResult};
pub use output::{BufferOutput, Output, StdoutOutput};
pub use bytecode::{Instruction, Opcode};
pub use vm::memory::{Registers, REGISTER_COUNT};
pub use vm::value::Value;
pub use vm::vm::{Execution, Halt, Machine, EMPTY_STACK_TEXT};
