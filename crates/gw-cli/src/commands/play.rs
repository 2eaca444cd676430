//! Interactive play on stdin/stdout.

use std::io::{self, BufRead, Write};
use std::path::PathBuf;

use gw_fiction::{SessionConfig, StopReason, WorldSession, run_loop};

use crate::store::JsonFileStore;
use crate::style::Terminal;

/// Flags of `gw play`.
pub struct PlayOptions {
    pub world: Option<PathBuf>,
    pub name: Option<String>,
    pub seed: Option<u64>,
    pub save_dir: Option<PathBuf>,
    pub max_items: Option<usize>,
    pub max_weight: Option<u32>,
}

impl PlayOptions {
    fn config(&self) -> SessionConfig {
        let mut config = SessionConfig::default();
        if let Some(name) = &self.name {
            config = config.with_player_name(name.as_str());
        }
        if let Some(seed) = self.seed {
            config = config.with_seed(seed);
        }
        if let Some(max_items) = self.max_items {
            config = config.with_inventory_limit(max_items);
        }
        if let Some(max_weight) = self.max_weight {
            config = config.with_carry_limit(max_weight);
        }
        config
    }
}

pub fn run(options: PlayOptions) -> Result<(), String> {
    let world = super::load_world(options.world.as_deref())?;
    let world_name = world.name().to_string();
    let mut session = WorldSession::new(world, options.config()).map_err(|e| e.to_string())?;
    if let Some(dir) = &options.save_dir {
        session = session.with_store(JsonFileStore::new(dir, world_name));
    }

    let stdout = io::stdout();
    drive(&mut session, io::stdin().lock(), &mut stdout.lock())
}

/// Print the opening, run the turn loop, and finish the last line on EOF.
fn drive<R: BufRead, W: Write>(
    session: &mut WorldSession,
    input: R,
    out: &mut W,
) -> Result<(), String> {
    writeln!(out, "{}\n", session.opening()).map_err(|e| e.to_string())?;

    let summary = run_loop(session, input, out, &Terminal);
    match summary.reason {
        StopReason::EndOfInput => writeln!(out).map_err(|e| e.to_string()),
        StopReason::Quit | StopReason::GameOver => Ok(()),
        StopReason::IoFailure => Err("giving up after repeated I/O errors".into()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use gw_fiction::runner::PROMPT;
    use std::io::Cursor;

    /// Accepts `budget` bytes, then refuses every write.
    struct Cramped {
        written: Vec<u8>,
        budget: usize,
    }

    impl Write for Cramped {
        fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
            if self.written.len() + buf.len() > self.budget {
                return Err(io::Error::other("device full"));
            }
            self.written.extend_from_slice(buf);
            Ok(buf.len())
        }

        fn flush(&mut self) -> io::Result<()> {
            Ok(())
        }
    }

    fn session() -> WorldSession {
        WorldSession::starter(SessionConfig::default().with_seed(3)).unwrap()
    }

    #[test]
    fn end_of_input_adds_newline() {
        let mut s = session();
        let mut out = Vec::new();
        drive(&mut s, Cursor::new(""), &mut out).unwrap();
        assert!(String::from_utf8(out).unwrap().ends_with("> \n"));
    }

    #[test]
    fn failed_final_newline_is_reported() {
        let mut s = session();
        // Room for the opening, its blank line, and one prompt.
        let budget = s.opening().len() + 2 + PROMPT.len();
        let mut out = Cramped {
            written: Vec::new(),
            budget,
        };
        let err = drive(&mut s, Cursor::new(""), &mut out).unwrap_err();
        assert!(err.contains("device full"), "{err}");
    }
}
