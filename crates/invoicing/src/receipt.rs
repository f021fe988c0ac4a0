use chrono::{DateTime, Utc};
use serde::Serialize;

use clinicdesk_tokens::Token;

use crate::Amount;

/// Structured receipt handed to the PDF renderer after a billing action.
///
/// The renderer owns layout and rasterization; this is only the field set the
/// printed receipt carries.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Receipt {
    pub patient_name: String,
    pub issued_at: DateTime<Utc>,
    /// Printed payment status. Receipts are only produced for paid visits.
    pub status: &'static str,
    pub diagnosis: String,
    pub prescription: String,
    pub amount: Amount,
}

impl Receipt {
    pub const PAID: &'static str = "PAID";

    /// Build the receipt for a billed visit.
    ///
    /// Clinical notes default to "N/A" when the token somehow reached billing
    /// without them.
    pub fn for_visit(token: &Token, amount: Amount, issued_at: DateTime<Utc>) -> Self {
        Self {
            patient_name: token.patient_name.clone(),
            issued_at,
            status: Self::PAID,
            diagnosis: token.diagnosis_label().to_string(),
            prescription: token.prescription_label().to_string(),
            amount,
        }
    }

    /// Download file name: `Bill_<patient>.pdf`, whitespace collapsed to `_`.
    pub fn file_name(&self) -> String {
        let safe: String = self
            .patient_name
            .split_whitespace()
            .collect::<Vec<_>>()
            .join("_");
        format!("Bill_{safe}.pdf")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clinicdesk_core::{RecordId, StaffId};
    use clinicdesk_tokens::{TokenId, TokenNumber};

    fn billed_token() -> Token {
        let mut token = Token::new_waiting(
            TokenId::new(RecordId::new()),
            "Asha Verma",
            StaffId::new(),
            TokenNumber::new(1234).unwrap(),
            Some(Utc::now()),
        );
        token.complete("Migraine", "Rest + hydration").unwrap();
        token.bill().unwrap();
        token
    }

    #[test]
    fn receipt_carries_the_visit_notes_and_amount() {
        let token = billed_token();
        let receipt = Receipt::for_visit(&token, Amount::new(50.0).unwrap(), Utc::now());
        assert_eq!(receipt.patient_name, "Asha Verma");
        assert_eq!(receipt.status, Receipt::PAID);
        assert_eq!(receipt.diagnosis, "Migraine");
        assert_eq!(receipt.amount.to_string(), "$50");
    }

    #[test]
    fn missing_notes_fall_back_to_na() {
        let token = Token::new_waiting(
            TokenId::new(RecordId::new()),
            "Asha Verma",
            StaffId::new(),
            TokenNumber::new(4321).unwrap(),
            None,
        );
        let receipt = Receipt::for_visit(&token, Amount::ZERO, Utc::now());
        assert_eq!(receipt.diagnosis, "N/A");
        assert_eq!(receipt.prescription, "N/A");
    }

    #[test]
    fn file_name_replaces_whitespace() {
        let token = billed_token();
        let receipt = Receipt::for_visit(&token, Amount::ZERO, Utc::now());
        assert_eq!(receipt.file_name(), "Bill_Asha_Verma.pdf");
    }
}
