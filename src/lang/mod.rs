/*!
# Rust Language Module

This Rust module turns SRPN input text into tokens in execution order:
comment removal, lexical analysis and the infix reordering pass.

*/

#[macro_use]
mod error;
mod comment;
mod lex;
mod line;
mod parse;
mod token;

pub use comment::Comment;
pub use error::Error;
pub use error::ErrorCode;
pub use lex::lex;
pub use line::Line;
pub use parse::parse;
pub use token::{Operator, Token, Word};

#[cfg(test)]
mod tests;
