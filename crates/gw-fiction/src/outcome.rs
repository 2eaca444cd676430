//! The result of processing one command.

use crate::error::ErrorKind;

/// What a command did, what to tell the player, and whether to keep going.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Outcome {
    /// Whether the command did what was asked.
    pub success: bool,
    /// Text for the player; may be empty.
    pub message: String,
    /// `false` once the session should stop reading input.
    pub continue_session: bool,
    /// Why the command failed, if it did.
    pub error: Option<ErrorKind>,
}

impl Outcome {
    /// A successful command with a message.
    pub fn ok(message: impl Into<String>) -> Self {
        Self {
            success: true,
            message: message.into(),
            continue_session: true,
            error: None,
        }
    }

    /// A successful command with nothing to say.
    pub fn silent() -> Self {
        Self::ok(String::new())
    }

    /// A failed command. The session continues.
    pub fn fail(kind: ErrorKind, message: impl Into<String>) -> Self {
        Self {
            success: false,
            message: message.into(),
            continue_session: true,
            error: Some(kind),
        }
    }

    /// A successful command that ends the session.
    pub fn finish(message: impl Into<String>) -> Self {
        Self {
            continue_session: false,
            ..Self::ok(message)
        }
    }

    /// Whether the command failed.
    pub fn is_failure(&self) -> bool {
        !self.success
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn constructors() {
        let ok = Outcome::ok("Done.");
        assert!(ok.success && ok.continue_session && ok.error.is_none());

        let silent = Outcome::silent();
        assert!(silent.success && silent.message.is_empty());

        let fail = Outcome::fail(ErrorKind::MissingArgument, "Take what?");
        assert!(fail.is_failure());
        assert!(fail.continue_session);
        assert_eq!(fail.error, Some(ErrorKind::MissingArgument));

        let quit = Outcome::finish("Bye.");
        assert!(quit.success);
        assert!(!quit.continue_session);
    }
}
