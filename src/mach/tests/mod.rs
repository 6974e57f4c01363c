use crate::mach::{Event, Runtime};

mod error_test;

fn run(runtime: &mut Runtime) -> String {
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

fn enter(runtime: &mut Runtime, s: &str) -> String {
    runtime.enter(s);
    run(runtime)
}
