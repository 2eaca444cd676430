//! The turn loop: read a line, process it, write the reply.

use std::io::{BufRead, Write};

use log::{info, warn};

use crate::outcome::Outcome;
use crate::session::WorldSession;

/// Printed before each line of input.
pub const PROMPT: &str = "> ";

/// The loop gives up after this many I/O errors in a row.
pub const MAX_CONSECUTIVE_IO_ERRORS: u32 = 5;

/// Turns an outcome into the text written to the output.
pub trait OutputStyle {
    /// Format the outcome's message.
    fn paint(&self, outcome: &Outcome) -> String;
}

/// Messages as they are.
#[derive(Debug, Default, Clone, Copy)]
pub struct Plain;

impl OutputStyle for Plain {
    fn paint(&self, outcome: &Outcome) -> String {
        outcome.message.clone()
    }
}

/// Why the loop stopped.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StopReason {
    /// The player quit.
    Quit,
    /// The player died.
    GameOver,
    /// Input ran out.
    EndOfInput,
    /// Too many I/O errors in a row.
    IoFailure,
}

/// What happened during a run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RunSummary {
    /// Lines processed.
    pub commands: u32,
    /// Commands that were rejected.
    pub failures: u32,
    /// Final score.
    pub score: u32,
    /// Final move count.
    pub moves: u32,
    /// Why the loop stopped.
    pub reason: StopReason,
}

/// Drive a session from `input` until it ends or input runs out.
///
/// I/O errors on a line are logged and the loop moves on to the next one.
pub fn run_loop<R: BufRead, W: Write>(
    session: &mut WorldSession,
    mut input: R,
    output: &mut W,
    style: &dyn OutputStyle,
) -> RunSummary {
    let mut commands = 0;
    let mut failures = 0;
    let mut errors = 0;
    let mut line = String::new();

    let reason = loop {
        if errors >= MAX_CONSECUTIVE_IO_ERRORS {
            warn!("giving up after {errors} consecutive I/O errors");
            break StopReason::IoFailure;
        }
        if let Err(err) = write!(output, "{PROMPT}").and_then(|()| output.flush()) {
            warn!("failed to write prompt: {err}");
            errors += 1;
        }

        line.clear();
        match input.read_line(&mut line) {
            Ok(0) => break StopReason::EndOfInput,
            Ok(_) => {}
            Err(err) => {
                warn!("failed to read input: {err}");
                errors += 1;
                continue;
            }
        }

        let outcome = session.process(&line);
        commands += 1;
        if outcome.is_failure() {
            failures += 1;
        }
        if !outcome.message.is_empty() {
            match writeln!(output, "{}", style.paint(&outcome)) {
                Ok(()) => errors = 0,
                Err(err) => {
                    warn!("failed to write output: {err}");
                    errors += 1;
                }
            }
        } else {
            errors = 0;
        }

        if !outcome.continue_session || !session.is_running() {
            break if session.player().is_alive() {
                StopReason::Quit
            } else {
                StopReason::GameOver
            };
        }
    };

    info!("turn loop stopped after {commands} commands ({failures} rejected): {reason:?}");
    RunSummary {
        commands,
        failures,
        score: session.score(),
        moves: session.moves(),
        reason,
    }
}
