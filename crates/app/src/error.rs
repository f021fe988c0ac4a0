//! App-level error taxonomy.
//!
//! Nothing here retries: every surfaced failure is reported synchronously to
//! the user and the initiating form state is left intact for manual
//! correction. Validation failures are not errors at all: the action
//! silently aborts before any write is attempted.

use thiserror::Error;

use clinicdesk_core::StaffId;
use clinicdesk_infra::store::StoreError;

pub type AppResult<T> = Result<T, AppError>;

#[derive(Debug, Error)]
pub enum AppError {
    /// Bad credentials. Surfaced as a modal, never retried.
    #[error("invalid credentials")]
    Authentication,

    /// The authenticated identity has no usable profile document; the
    /// session is force-closed.
    #[error("no staff record found for {0}")]
    MissingRecord(StaffId),

    /// A create/update was rejected. Carries the raw error text for the
    /// modal.
    #[error("{0}")]
    Write(String),
}

impl From<StoreError> for AppError {
    fn from(err: StoreError) -> Self {
        AppError::Write(err.to_string())
    }
}

/// Result of a user-triggered action.
///
/// `Aborted` is the silent path: a validation failure (empty field,
/// cancelled prompt) drops the action without a write and without a dialog.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ActionOutcome<T> {
    Done(T),
    Aborted,
}

impl<T> ActionOutcome<T> {
    pub fn is_aborted(&self) -> bool {
        matches!(self, ActionOutcome::Aborted)
    }

    pub fn done(self) -> Option<T> {
        match self {
            ActionOutcome::Done(value) => Some(value),
            ActionOutcome::Aborted => None,
        }
    }
}
