//! Command parsing and execution.

mod engine;
mod parser;

pub use engine::CommandEngine;
pub use parser::{Command, parse_line};
