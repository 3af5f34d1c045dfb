//! Failure kinds reported by use-cases and the messages shown for them.

use thiserror::Error;

/// Why a use-case did not complete.
///
/// Validation problems never reach this type: screens reject bad input
/// before any use-case runs.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ErrorKind {
    /// The addressed entity does not exist (or no longer exists).
    #[error("Requested item not found")]
    NotFound,

    /// The store could not persist or load data.
    #[error("Storage failure: {0}")]
    Storage(String),

    /// The operation could not run at all (runtime shut down, task aborted).
    #[error("Operation unavailable")]
    Unavailable,
}

/// User-facing error descriptor, shown as a transient banner.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ErrorUi {
    pub message: String,
}

impl ErrorUi {
    /// Map a failure kind to its fixed message. Details carried by the kind
    /// (such as I/O error text) are for logs only.
    pub fn from_kind(kind: &ErrorKind) -> Self {
        let message = match kind {
            ErrorKind::NotFound => "The requested item no longer exists",
            ErrorKind::Storage(_) => "Changes could not be saved",
            ErrorKind::Unavailable => "Something went wrong, try again",
        };
        Self {
            message: message.to_string(),
        }
    }
}

impl From<&ErrorKind> for ErrorUi {
    fn from(kind: &ErrorKind) -> Self {
        Self::from_kind(kind)
    }
}
