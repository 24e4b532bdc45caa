//! Diagnostic Output
//!
//! The single external channel `Print` and fault reports write to.
//! Destination is the host's choice; the machine only emits lines.

use std::io::{self, Write};

/// Line-oriented diagnostic sink
pub trait Output {
    fn emit(&mut self, line: &str);
}

/// Writes each line to standard output
#[derive(Debug, Default, Clone, Copy)]
pub struct StdoutOutput;

impl Output for StdoutOutput {
    fn emit(&mut self, line: &str) {
        let mut out = io::stdout().lock();
        if let Err(e) = writeln!(out, "{}", line) {
            tracing::warn!(error = %e, "failed to write diagnostic line");
        }
    }
}

/// Collects lines in memory
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct BufferOutput {
    lines: Vec<String>,
}

impl BufferOutput {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn lines(&self) -> &[String] {
        &self.lines
    }

    pub fn into_lines(self) -> Vec<String> {
        self.lines
    }
}

impl Output for BufferOutput {
    fn emit(&mut self, line: &str) {
        self.lines.push(line.to_owned());
    }
}
