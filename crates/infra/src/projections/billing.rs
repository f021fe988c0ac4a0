//! Billing worklist projection.
//!
//! Completed consultations waiting for the receptionist to bill them.

use clinicdesk_feed::{Projector, Snapshot};
use clinicdesk_tokens::{Token, TokenId, TokenStatus};

/// One actionable billing row.
///
/// Keeps the token id so the billing action can address the record directly.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BillingRow {
    pub token_id: TokenId,
    pub patient_name: String,
    pub diagnosis: String,
}

/// Projects completed tokens into billing rows.
///
/// The feed usually delivers the set pre-filtered to completed status; the
/// projector filters again so its output is correct for any snapshot. No
/// aggregation: one row per completed token, sorted by ascending token
/// number (record id as tie-break).
#[derive(Debug, Clone, Copy, Default)]
pub struct BillingProjector;

impl BillingProjector {
    pub fn new() -> Self {
        Self
    }
}

impl Projector for BillingProjector {
    type Doc = Token;
    type View = Vec<BillingRow>;

    fn project(&self, snapshot: &Snapshot<Token>) -> Vec<BillingRow> {
        let mut tokens: Vec<&Token> = snapshot
            .iter()
            .filter(|t| t.status == TokenStatus::Completed)
            .collect();
        tokens.sort_by_key(|t| (t.token_number, t.id));

        tokens
            .into_iter()
            .map(|token| BillingRow {
                token_id: token.id,
                patient_name: token.patient_name.clone(),
                diagnosis: token.diagnosis_label().to_string(),
            })
            .collect()
    }
}
