/*!
## Rust Machine Module

This Rust module is the saturating stack machine that executes SRPN tokens.

*/

mod operation;
mod random;
mod runtime;
mod stack;
mod val;

pub use operation::Operation;
pub use random::Random;
pub use runtime::Event;
pub use runtime::Runtime;
pub use runtime::STACK_CAPACITY;
pub use stack::Stack;
pub use val::Val;

#[cfg(test)]
mod tests;
