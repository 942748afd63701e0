pub mod error;
pub mod format;
pub mod lexer;
pub mod parser;

pub use error::SyntaxError;
pub use format::{format_json, format_json_with, render};
pub use lexer::{Token, tokenize};
pub use parser::{Member, Node, Parser, parse};

#[cfg(test)]
mod tests;
