//! Shared test fakes for the collaborator boundaries.

use std::sync::Mutex;

use chrono::{DateTime, Utc};

use clinicdesk_core::StaffId;
use clinicdesk_invoicing::Receipt;

use crate::error::AppError;
use crate::gateway::{AuthGateway, AuthUser, Clock, Dialog, ReceiptRenderer};

/// Clock pinned to one instant.
pub struct FixedClock(pub DateTime<Utc>);

impl Clock for FixedClock {
    fn now(&self) -> DateTime<Utc> {
        self.0
    }
}

/// Dialog that records traffic and answers the amount prompt from a script.
#[derive(Default)]
pub struct RecordingDialog {
    events: Mutex<Vec<String>>,
    prompt_answer: Option<f64>,
}

impl RecordingDialog {
    /// A dialog whose amount prompt answers with `amount`.
    /// The default dialog cancels every prompt.
    pub fn answering(amount: f64) -> Self {
        Self {
            events: Mutex::new(Vec::new()),
            prompt_answer: Some(amount),
        }
    }

    pub fn events(&self) -> Vec<String> {
        self.events.lock().unwrap().clone()
    }

    pub fn saw_success(&self) -> bool {
        self.events().iter().any(|e| e.starts_with("success"))
    }

    pub fn saw_error(&self) -> bool {
        self.events().iter().any(|e| e.starts_with("error"))
    }

    fn record(&self, entry: String) {
        self.events.lock().unwrap().push(entry);
    }
}

impl Dialog for RecordingDialog {
    fn success(&self, title: &str, message: &str) {
        self.record(format!("success: {title}: {message}"));
    }

    fn error(&self, title: &str, message: &str) {
        self.record(format!("error: {title}: {message}"));
    }

    fn prompt_amount(&self, title: &str, _suggested: f64) -> Option<f64> {
        self.record(format!("prompt: {title}"));
        self.prompt_answer
    }
}

/// Receipt renderer that captures instead of rasterizing.
#[derive(Default)]
pub struct CapturingRenderer {
    receipts: Mutex<Vec<Receipt>>,
}

impl CapturingRenderer {
    pub fn receipts(&self) -> Vec<Receipt> {
        self.receipts.lock().unwrap().clone()
    }
}

impl ReceiptRenderer for CapturingRenderer {
    fn render(&self, receipt: &Receipt) -> anyhow::Result<()> {
        self.receipts.lock().unwrap().push(receipt.clone());
        Ok(())
    }
}

/// Single-account credential provider.
pub struct StaticAuth {
    user: AuthUser,
    password: String,
    signed_out: Mutex<bool>,
}

impl StaticAuth {
    pub fn new(id: StaffId, email: &str, password: &str) -> Self {
        Self {
            user: AuthUser {
                id,
                email: email.to_string(),
            },
            password: password.to_string(),
            signed_out: Mutex::new(false),
        }
    }

    pub fn was_signed_out(&self) -> bool {
        *self.signed_out.lock().unwrap()
    }
}

impl AuthGateway for StaticAuth {
    fn sign_in(&self, email: &str, password: &str) -> Result<AuthUser, AppError> {
        if email == self.user.email && password == self.password {
            *self.signed_out.lock().unwrap() = false;
            Ok(self.user.clone())
        } else {
            Err(AppError::Authentication)
        }
    }

    fn sign_out(&self) {
        *self.signed_out.lock().unwrap() = true;
    }
}
