use super::*;
use crate::lang::ErrorCode;
use crate::mach::STACK_CAPACITY;

fn error_code(runtime: &mut Runtime) -> Option<ErrorCode> {
    loop {
        match runtime.execute() {
            Event::Stopped => return None,
            Event::Error(error) => return Some(error.code()),
            _ => {}
        }
    }
}

#[test]
fn test_underflow() {
    let mut r = Runtime::default();
    r.enter("5 +");
    assert_eq!(error_code(&mut r), Some(ErrorCode::StackUnderflow));
    assert_eq!(r.len(), 1);
    assert_eq!(enter(&mut r, "*"), "Stack underflow\n");
}

#[test]
fn test_overflow() {
    let mut r = Runtime::default();
    for n in 0..STACK_CAPACITY {
        r.enter(&n.to_string());
    }
    assert_eq!(run(&mut r), "");
    assert_eq!(enter(&mut r, "99"), "Stack overflow.\n");
    assert_eq!(r.len(), STACK_CAPACITY);
    assert_eq!(r.peek(), Some(STACK_CAPACITY as i32 - 1));
}

#[test]
fn test_divide_by_zero() {
    let mut r = Runtime::default();
    assert_eq!(enter(&mut r, "11 0 /"), "Divide by 0.\n");
    assert_eq!(r.len(), 2);
    assert_eq!(enter(&mut r, "d"), "0\n11\n");
}

#[test]
fn test_modulus_by_zero() {
    let mut r = Runtime::default();
    assert_eq!(enter(&mut r, "11 0 %"), "Divide by 0.\n");
    assert_eq!(r.len(), 2);
}

#[test]
fn test_underflow_before_divide_by_zero() {
    let mut r = Runtime::default();
    assert_eq!(enter(&mut r, "0 /"), "Stack underflow\n");
}

#[test]
fn test_stack_empty() {
    let mut r = Runtime::default();
    assert_eq!(enter(&mut r, "="), "Stack empty.\n");
}

#[test]
fn test_unrecognised() {
    let mut r = Runtime::default();
    assert_eq!(
        enter(&mut r, "5+5test"),
        concat!(
            "Unrecognised operator or operand \"t\"\n",
            "Unrecognised operator or operand \"e\"\n",
            "Unrecognised operator or operand \"s\"\n",
            "Unrecognised operator or operand \"t\"\n",
        )
    );
    assert_eq!(r.peek(), Some(10));
}

#[test]
fn test_errors_do_not_stop_line() {
    let mut r = Runtime::default();
    assert_eq!(enter(&mut r, "+ x 3 ="), "Stack underflow\nUnrecognised operator or operand \"x\"\n3\n");
}
