//! Collaborator boundaries.
//!
//! Credential verification, PDF rasterization, and dialog widgets are owned
//! by external collaborators; these traits are the minimal contract the
//! dashboard requires of them. Implementations live in the embedding shell;
//! tests use recording fakes.

use chrono::{DateTime, Utc};

use clinicdesk_core::StaffId;
use clinicdesk_invoicing::Receipt;

use crate::error::AppError;

/// The authenticated account as the auth provider reports it.
///
/// This is not yet an identity: the staff profile document supplies name
/// and role after a separate lookup.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AuthUser {
    pub id: StaffId,
    pub email: String,
}

/// Hosted credential provider.
pub trait AuthGateway {
    /// Verify credentials. Fails with [`AppError::Authentication`] on bad
    /// credentials; no other failure mode is distinguished.
    fn sign_in(&self, email: &str, password: &str) -> Result<AuthUser, AppError>;

    fn sign_out(&self);
}

/// PDF sink: takes structured receipt fields, produces a downloadable
/// artifact. Layout is the collaborator's concern.
pub trait ReceiptRenderer {
    fn render(&self, receipt: &Receipt) -> anyhow::Result<()>;
}

/// Modal notification and single-field amount prompt.
pub trait Dialog {
    fn success(&self, title: &str, message: &str);

    fn error(&self, title: &str, message: &str);

    /// Prompt for a billing amount, `suggested` pre-filled.
    /// `None` when the user cancels.
    fn prompt_amount(&self, title: &str, suggested: f64) -> Option<f64>;
}

/// Wall-clock seam so view recomputation is testable at a fixed instant.
pub trait Clock {
    fn now(&self) -> DateTime<Utc>;
}

/// The real clock.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> DateTime<Utc> {
        Utc::now()
    }
}
