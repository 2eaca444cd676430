//! Terminal colouring of outcomes. `NO_COLOR` turns it off.

use colored::Colorize;
use gw_fiction::{ErrorKind, Outcome, OutputStyle};

/// Failures in red, persistence trouble in yellow, the rest plain.
pub struct Terminal;

impl OutputStyle for Terminal {
    fn paint(&self, outcome: &Outcome) -> String {
        match outcome.error {
            None => outcome.message.clone(),
            Some(ErrorKind::PersistenceFailure) => outcome.message.yellow().to_string(),
            Some(_) => outcome.message.red().to_string(),
        }
    }
}
