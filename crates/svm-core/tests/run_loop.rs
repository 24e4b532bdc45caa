use svm_asm::program;
use svm_core::{BufferOutput, Fault, Halt, Instruction, Machine, Opcode, Value};

fn run(code: Vec<Instruction>) -> (svm_core::Execution, Vec<String>) {
    let mut out = BufferOutput::new();
    let execution = Machine::new(code).execute(&mut out);
    (execution, out.into_lines())
}

#[test]
fn single_literal() {
    let (execution, _) = run(program![5]);
    assert_eq!(execution.machine.stack().to_vec(), vec![Value::Int(5)]);
}

#[test]
fn second_literal_on_top() {
    let (execution, _) = run(program![3, 4]);
    assert_eq!(
        execution.machine.stack().to_vec(),
        vec![Value::Int(4), Value::Int(3)]
    );
}

#[test]
fn three_plus_four() {
    let (execution, _) = run(program![3, 4, Instruction::Add]);
    assert!(execution.is_completed());
    assert_eq!(execution.machine.stack().to_vec(), vec![Value::Int(7)]);
}

#[test]
fn add_on_empty_stack_underflows() {
    let (execution, lines) = run(program![Instruction::Add]);
    assert_eq!(
        execution.halt,
        Halt::Faulted(Fault::StackUnderflow {
            opcode: Opcode::Add,
            needed: 2,
            available: 0,
        })
    );
    assert!(execution.machine.stack().is_empty());
    assert_eq!(execution.machine.remaining(), &[Instruction::Add]);
    assert_eq!(lines.len(), 1);
    assert!(lines[0].starts_with("fault: stack underflow"));
}

#[test]
fn bool_operand_to_add_is_type_mismatch() {
    let (execution, _) = run(program![true, 1, Instruction::Add]);
    assert!(matches!(
        execution.fault(),
        Some(Fault::TypeMismatch { opcode: Opcode::Add, .. })
    ));
    // state before the failing Add
    assert_eq!(
        execution.machine.stack().to_vec(),
        vec![Value::Int(1), Value::Bool(true)]
    );
    assert_eq!(execution.machine.steps_taken(), 2);
}

#[test]
fn bool_operand_to_mod_is_type_mismatch() {
    let (execution, lines) = run(program![true, 4, Instruction::Mod]);
    assert!(matches!(
        execution.fault(),
        Some(Fault::TypeMismatch {
            opcode: Opcode::Mod,
            found: Value::Bool(true),
            ..
        })
    ));
    assert_eq!(
        execution.machine.stack().to_vec(),
        vec![Value::Int(4), Value::Bool(true)]
    );
    assert_eq!(execution.machine.remaining(), &[Instruction::Mod]);
    assert_eq!(
        lines,
        vec!["fault: type mismatch: mod expects int, found bool true".to_string()]
    );
}

#[test]
fn mod_by_zero_faults_and_preserves_stack() {
    // top of stack (0) is the dividend, 5 the divisor: fine
    let (ok, _) = run(program![5, 0, Instruction::Mod]);
    assert_eq!(ok.machine.stack().to_vec(), vec![Value::Int(0)]);

    let (execution, _) = run(program![0, 5, Instruction::Mod]);
    assert_eq!(
        execution.halt,
        Halt::Faulted(Fault::DivisionByZero { dividend: 5 })
    );
    assert_eq!(
        execution.machine.stack().to_vec(),
        vec![Value::Int(5), Value::Int(0)]
    );
}

#[test]
fn eq_underflow_with_one_operand() {
    let (execution, _) = run(program![1, Instruction::Eq]);
    assert_eq!(
        execution.fault(),
        Some(&Fault::StackUnderflow {
            opcode: Opcode::Eq,
            needed: 2,
            available: 1,
        })
    );
    assert_eq!(execution.machine.stack().to_vec(), vec![Value::Int(1)]);
}

#[test]
fn halts_on_first_fault() {
    let (execution, lines) = run(program![Instruction::Add, 1, Instruction::Print]);
    assert!(!execution.is_completed());
    assert_eq!(lines.len(), 1);
    assert_eq!(execution.machine.remaining().len(), 3);
}

#[test]
fn run_on_terminal_machine_is_identity() {
    let done = Machine::new(program![2, 2, "eq"]).run_with(&mut BufferOutput::new());
    assert!(done.is_terminal());
    let mut out = BufferOutput::new();
    let again = done.clone().run_with(&mut out);
    assert_eq!(again, done);
    assert!(out.lines().is_empty());
}

#[test]
fn remaining_reproduces_construction_order() {
    let code = program![1, true, "add", "mod", "eq", "print", "exit"];
    let machine = Machine::new(code.clone());
    assert_eq!(machine.remaining(), code.as_slice());
}

#[test]
fn exit_does_not_truncate() {
    let (execution, lines) = run(program![1, "exit", 2, "print"]);
    assert!(execution.is_completed());
    assert_eq!(lines, vec!["2".to_string()]);
}
