//! `clinicdesk-app` — dashboard orchestration.
//!
//! Wires the session lifecycle, the front-desk and consultation actions, and
//! the live view state together against the collaborator boundaries (auth
//! provider, document store, dialog widget, receipt renderer). Everything
//! here is single-threaded and event-driven: each handler runs to completion
//! before yielding, and the only cross-handler state is the session and the
//! dashboard views.

pub mod consultation;
pub mod dashboard;
pub mod error;
pub mod front_desk;
pub mod gateway;
pub mod session_flow;

#[cfg(test)]
mod test_support;

pub use dashboard::Dashboard;
pub use error::{ActionOutcome, AppError, AppResult};
pub use gateway::{AuthGateway, AuthUser, Clock, Dialog, ReceiptRenderer, SystemClock};
pub use session_flow::SessionFlow;

/// Initialize process-wide observability for the embedding shell.
///
/// Safe to call multiple times; subsequent calls become no-ops.
pub fn init() {
    clinicdesk_observability::init();
}
