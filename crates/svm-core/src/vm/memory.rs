//! Register Bank
//!
//! Fixed bank of integer registers carried in machine state.
//! No opcode addresses it; hosts may seed and inspect it.

/// Number of register slots
pub const REGISTER_COUNT: usize = 10;

/// Fixed-size integer register bank
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Registers {
    slots: [i64; REGISTER_COUNT],
}

impl Registers {
    /// All slots zeroed
    pub fn new() -> Self {
        Self::default()
    }

    pub fn as_array(&self) -> &[i64; REGISTER_COUNT] {
        &self.slots
    }
}

impl From<[i64; REGISTER_COUNT]> for Registers {
    fn from(slots: [i64; REGISTER_COUNT]) -> Self {
        Registers { slots }
    }
}
