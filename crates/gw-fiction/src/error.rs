//! Error types for the interpreter.

use gw_core::CoreError;
use thiserror::Error;

use crate::persist::PersistError;

/// Result type for session operations.
pub type FictionResult<T> = Result<T, FictionError>;

/// Errors that can occur outside the command handlers.
///
/// Handler failures are reported through [`crate::Outcome`], never through
/// this type.
#[derive(Debug, Error)]
pub enum FictionError {
    /// The world model rejected an operation.
    #[error(transparent)]
    Core(#[from] CoreError),

    /// The save store failed.
    #[error(transparent)]
    Persist(#[from] PersistError),
}

/// Categories of user-facing failure, recorded on a failed outcome.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    /// The verb is not understood, or the action makes no sense here.
    InvalidCommand,
    /// The verb needs a target and none was given.
    MissingArgument,
    /// The named item, creature or exit is not present.
    TargetNotFound,
    /// The inventory has no room or weight left.
    CapacityExceeded,
    /// The way or the item is blocked.
    BlockedTransition,
    /// Saving or loading failed.
    PersistenceFailure,
}

impl From<&CoreError> for ErrorKind {
    fn from(err: &CoreError) -> Self {
        match err {
            CoreError::NoExit(_) | CoreError::Locked(_) | CoreError::NotTakeable(_) => {
                Self::BlockedTransition
            }
            CoreError::InventoryFull { .. } | CoreError::TooHeavy { .. } => Self::CapacityExceeded,
            CoreError::ItemNotFound(_)
            | CoreError::NotCarried(_)
            | CoreError::RoomNotFound(_)
            | CoreError::UnknownExitTarget { .. } => Self::TargetNotFound,
            CoreError::InvalidSnapshot(_) | CoreError::Json(_) => Self::PersistenceFailure,
            CoreError::DuplicateRoom(_) | CoreError::EmptyWorld => Self::InvalidCommand,
        }
    }
}

impl From<&FictionError> for ErrorKind {
    fn from(err: &FictionError) -> Self {
        match err {
            FictionError::Core(core) => core.into(),
            FictionError::Persist(_) => Self::PersistenceFailure,
        }
    }
}
