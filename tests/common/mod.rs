#![allow(dead_code)]
use srpn::mach::{Event, Runtime};

pub fn exec(runtime: &mut Runtime) -> String {
    let mut s = String::new();
    loop {
        match runtime.execute() {
            Event::Stopped => break,
            Event::Print(ps) => s.push_str(&ps),
            Event::Value(n) => s.push_str(&format!("{}\n", n)),
            Event::Error(error) => s.push_str(&format!("{}\n", error)),
        }
    }
    s
}

/// Enters each line, discarding output, and returns the session.
pub fn session(lines: &[&str]) -> Runtime {
    let mut r = Runtime::default();
    for line in lines {
        r.enter(line);
        exec(&mut r);
    }
    r
}

/// What `=` reports next.
pub fn equals(runtime: &mut Runtime) -> Option<i32> {
    runtime.enter("=");
    let mut value = None;
    loop {
        match runtime.execute() {
            Event::Stopped => return value,
            Event::Value(n) => value = Some(n),
            _ => {}
        }
    }
}

pub fn result(lines: &[&str]) -> Option<i32> {
    equals(&mut session(lines))
}
