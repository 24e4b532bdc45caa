pub mod memory;
pub mod stack;
pub mod value;
pub mod vm;

pub use memory::Registers;
pub use stack::Stack;
pub use value::Value;
pub use vm::Machine;
