pub mod instruction;
pub mod opcode;

pub use instruction::Instruction;
pub use opcode::Opcode;
