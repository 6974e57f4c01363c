//! # SRPN
//!
//! A Saturated Reverse Polish Notation calculator, as it behaved on the
//! legacy desk tool: 32-bit saturating arithmetic, a 23 entry stack, a
//! fixed random sequence and its own idea of infix.
//!
//! Run the executable and type numbers and operators. Lines may also be
//! piped in or read from a script file given as the only argument.
//! ```text
//! 10
//! 2
//! +
//! =
//! 12
//! ```
//!
//! The library drives the same machine without a terminal.
//! ```
//! use srpn::mach::{Event, Runtime};
//!
//! let mut runtime = Runtime::default();
//! runtime.enter("2^8");
//! runtime.enter("=");
//! assert_eq!(runtime.execute(), Event::Value(256));
//! assert_eq!(runtime.execute(), Event::Stopped);
//! ```

#[path = "doc/introduction.rs"]
#[allow(non_snake_case)]
pub mod _Introduction;

pub mod lang;
pub mod mach;
pub mod term;
