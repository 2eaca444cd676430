//! Command interpreter and turn loop for Grueworks.
//!
//! Turns lines of player input into commands, resolves verb aliases,
//! dispatches to the handlers of a [`WorldSession`], and reports each
//! result as an [`Outcome`]. [`run_loop`] drives a session from any
//! `BufRead` to any `Write`.

/// Session configuration.
pub mod config;
/// Error types and user-facing failure kinds.
pub mod error;
/// Item-use extension point.
pub mod hook;
/// Command results.
pub mod outcome;
/// Tokenizing and verb resolution.
pub mod parser;
/// Save stores.
pub mod persist;
/// Player-facing text.
pub mod render;
/// The turn loop.
pub mod runner;
/// The running game and its handlers.
pub mod session;

pub use config::SessionConfig;
pub use error::{ErrorKind, FictionError, FictionResult};
pub use hook::{ItemUseHook, NoUseEffect};
pub use outcome::Outcome;
pub use parser::{ALIASES, Command, Direction, Verb, resolve_alias};
pub use persist::{DEFAULT_SLOT, InMemoryStore, PersistError, SaveStore};
pub use runner::{OutputStyle, Plain, RunSummary, StopReason, run_loop};
pub use session::{CombatContext, WorldSession};
