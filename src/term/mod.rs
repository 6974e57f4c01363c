extern crate ansi_term;
extern crate ctrlc;
extern crate linefeed;
use crate::mach::{Event, Runtime};
use ansi_term::Style;
use clap::Parser;
use linefeed::{Interface, ReadResult, Signal};
use std::fs::File;
use std::io::{self, BufRead, BufReader, IsTerminal, Write};
use std::path::PathBuf;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

/// Saturated Reverse Polish Notation calculator
#[derive(Parser, Debug)]
#[command(name = "srpn", version)]
struct Args {
    /// Read input lines from this file instead of the terminal
    script: Option<PathBuf>,
    /// Never style diagnostics
    #[arg(long)]
    plain: bool,
}

pub fn main() {
    let args = Args::parse();
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();
    let interrupted = Arc::new(AtomicBool::new(false));
    let int_moved = interrupted.clone();
    ctrlc::set_handler(move || {
        int_moved.store(true, Ordering::SeqCst);
    })
    .expect("Error setting Ctrl-C handler");
    if let Err(error) = main_loop(&args, interrupted) {
        eprintln!("{}", error);
    }
}

fn main_loop(args: &Args, interrupted: Arc<AtomicBool>) -> io::Result<()> {
    let mut runtime = Runtime::default();
    match &args.script {
        Some(path) => {
            let reader = BufReader::new(File::open(path)?);
            script_loop(&mut runtime, reader, &interrupted)
        }
        None if io::stdin().is_terminal() => {
            interactive_loop(&mut runtime, &interrupted, !args.plain)
        }
        None => {
            let stdin = io::stdin();
            let reader = stdin.lock();
            script_loop(&mut runtime, reader, &interrupted)
        }
    }
}

fn interactive_loop(
    runtime: &mut Runtime,
    interrupted: &AtomicBool,
    styled: bool,
) -> io::Result<()> {
    let interface = Interface::new("SRPN")?;
    interface.set_report_signal(Signal::Interrupt, true);
    loop {
        match interface.read_line()? {
            ReadResult::Input(string) => {
                runtime.enter(&string);
                if !string.trim().is_empty() {
                    interface.add_history_unique(string);
                }
            }
            ReadResult::Signal(Signal::Interrupt) => {
                interface.set_buffer("")?;
                continue;
            }
            ReadResult::Signal(_) | ReadResult::Eof => break,
        }
        drain(runtime, interrupted, styled, |s| {
            interface.write_fmt(format_args!("{}", s))
        })?;
    }
    Ok(())
}

fn script_loop<R: BufRead>(
    runtime: &mut Runtime,
    reader: R,
    interrupted: &AtomicBool,
) -> io::Result<()> {
    let stdout = io::stdout();
    let mut out = stdout.lock();
    for line in reader.lines() {
        runtime.enter(&line?);
        drain(runtime, interrupted, false, |s| out.write_all(s.as_bytes()))?;
        out.flush()?;
    }
    Ok(())
}

fn drain<F>(
    runtime: &mut Runtime,
    interrupted: &AtomicBool,
    styled: bool,
    mut write: F,
) -> io::Result<()>
where
    F: FnMut(&str) -> io::Result<()>,
{
    loop {
        if interrupted.swap(false, Ordering::SeqCst) {
            runtime.interrupt();
        }
        match runtime.execute() {
            Event::Stopped => return Ok(()),
            Event::Print(s) => write(&s)?,
            Event::Value(n) => write(&format!("{}\n", n))?,
            Event::Error(error) => {
                if styled {
                    write(&format!("{}\n", Style::new().bold().paint(error.to_string())))?
                } else {
                    write(&format!("{}\n", error))?
                }
            }
        }
    }
}
