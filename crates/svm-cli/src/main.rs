//! SVM - CLI
//!
//! Minimal command-line runner: each argument is one program word
//! (`svm 3 4 add print`).

use std::process::ExitCode;

use clap::Parser;
use thiserror::Error;
use tracing::{debug, error, info};
use tracing_subscriber::EnvFilter;

use svm_asm::{assemble_strict, AsmError};
use svm_core::{Execution, Halt, Machine, Output, StdoutOutput};

#[derive(Parser, Debug)]
#[command(name = "svm")]
#[command(about = "Run a program on the SVM stack machine")]
struct Cli {
    /// Program words: integers, true/false, add, mod, eq, print, exit
    #[arg(allow_negative_numbers = true)]
    tokens: Vec<String>,

    /// Log filter used when RUST_LOG is unset
    #[arg(long, env = "SVM_LOG", default_value = "warn")]
    log: String,

    /// Print the final stack (top first) and halt status
    #[arg(long)]
    dump: bool,
}

#[derive(Debug, Error)]
enum CliError {
    #[error("no program given")]
    EmptyProgram,

    #[error(transparent)]
    Asm(#[from] AsmError),
}

fn init_logging(default_filter: &str) {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_filter));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();
}

fn execute(tokens: &[String], out: &mut dyn Output) -> Result<Execution, CliError> {
    if tokens.is_empty() {
        return Err(CliError::EmptyProgram);
    }
    let code = assemble_strict(tokens.iter().map(String::as_str))?;
    info!(instructions = code.len(), "program assembled");
    Ok(Machine::new(code).execute(out))
}

/// Final state summary for `--dump`
fn dump(execution: &Execution) -> Vec<String> {
    let stack: Vec<String> = execution
        .machine
        .stack()
        .iter()
        .map(ToString::to_string)
        .collect();
    let status = match &execution.halt {
        Halt::Completed => "completed".to_string(),
        Halt::Faulted(fault) => format!(
            "faulted after {} step(s): {}",
            execution.machine.steps_taken(),
            fault
        ),
    };
    vec![format!("stack: [{}]", stack.join(", ")), format!("status: {}", status)]
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    init_logging(&cli.log);

    let mut out = StdoutOutput;
    let execution = match execute(&cli.tokens, &mut out) {
        Ok(execution) => execution,
        Err(e) => {
            error!("{}", e);
            eprintln!("Error: {}", e);
            return ExitCode::from(2);
        }
    };

    if cli.dump {
        for line in dump(&execution) {
            out.emit(&line);
        }
    }

    debug!(steps = execution.machine.steps_taken(), "run finished");
    if execution.is_completed() {
        ExitCode::SUCCESS
    } else {
        ExitCode::from(1)
    }
}
