//! Command tokenizing and verb resolution.

mod alias;
mod command;

pub use alias::{ALIASES, Verb, resolve_alias};
pub use command::{Command, Direction};
