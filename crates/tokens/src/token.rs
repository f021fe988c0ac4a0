use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use clinicdesk_core::{DomainError, DomainResult, Entity, RecordId, StaffId};

use crate::TokenNumber;

/// Token identifier (the backing document's record id).
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TokenId(pub RecordId);

impl TokenId {
    pub fn new(id: RecordId) -> Self {
        Self(id)
    }
}

impl core::fmt::Display for TokenId {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        core::fmt::Display::fmt(&self.0, f)
    }
}

/// Token status lifecycle.
///
/// Transitions run strictly forward; the variant order here is the lifecycle
/// order, so `<` on statuses means "earlier in the visit".
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TokenStatus {
    Waiting,
    Completed,
    Billed,
}

impl TokenStatus {
    /// Forward-only transition check: `waiting → completed → billed`.
    pub fn can_transition_to(self, next: TokenStatus) -> bool {
        matches!(
            (self, next),
            (TokenStatus::Waiting, TokenStatus::Completed)
                | (TokenStatus::Completed, TokenStatus::Billed)
        )
    }
}

impl core::fmt::Display for TokenStatus {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            TokenStatus::Waiting => write!(f, "waiting"),
            TokenStatus::Completed => write!(f, "completed"),
            TokenStatus::Billed => write!(f, "billed"),
        }
    }
}

/// One patient visit tracked through the front desk.
///
/// Stored in the `tokens` collection (camelCase field names; the document
/// format is owned by the store). `created_at` is written as a server
/// timestamp and may be absent on documents observed before the write
/// commits, hence the `Option`.
///
/// # Invariants
/// - Status only moves forward (`waiting → completed → billed`).
/// - Clinical notes are attached exactly when the visit completes.
/// - Tokens are never deleted.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Token {
    pub id: TokenId,
    pub patient_name: String,
    pub doctor_id: StaffId,
    pub status: TokenStatus,
    pub token_number: TokenNumber,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub diagnosis: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub prescription: Option<String>,
    #[serde(default)]
    pub created_at: Option<DateTime<Utc>>,
}

impl Token {
    /// A freshly registered token, waiting for its doctor.
    pub fn new_waiting(
        id: TokenId,
        patient_name: impl Into<String>,
        doctor_id: StaffId,
        token_number: TokenNumber,
        created_at: Option<DateTime<Utc>>,
    ) -> Self {
        Self {
            id,
            patient_name: patient_name.into(),
            doctor_id,
            status: TokenStatus::Waiting,
            token_number,
            diagnosis: None,
            prescription: None,
            created_at,
        }
    }

    /// Doctor finishes the consultation: `waiting → completed`, notes attached.
    pub fn complete(
        &mut self,
        diagnosis: impl Into<String>,
        prescription: impl Into<String>,
    ) -> DomainResult<()> {
        self.transition_to(TokenStatus::Completed)?;
        self.diagnosis = Some(diagnosis.into());
        self.prescription = Some(prescription.into());
        Ok(())
    }

    /// Receptionist bills the visit: `completed → billed`.
    pub fn bill(&mut self) -> DomainResult<()> {
        self.transition_to(TokenStatus::Billed)
    }

    fn transition_to(&mut self, next: TokenStatus) -> DomainResult<()> {
        if !self.status.can_transition_to(next) {
            return Err(DomainError::invariant(format!(
                "token {} cannot move {} -> {}",
                self.id, self.status, next
            )));
        }
        self.status = next;
        Ok(())
    }

    /// Diagnosis text for display, defaulting to "N/A" before completion.
    pub fn diagnosis_label(&self) -> &str {
        self.diagnosis.as_deref().unwrap_or("N/A")
    }

    /// Prescription text for display, defaulting to "N/A".
    pub fn prescription_label(&self) -> &str {
        self.prescription.as_deref().unwrap_or("N/A")
    }
}

impl Entity for Token {
    type Id = TokenId;

    fn id(&self) -> &Self::Id {
        &self.id
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn test_token() -> Token {
        Token::new_waiting(
            TokenId::new(RecordId::new()),
            "Asha Verma",
            StaffId::new(),
            TokenNumber::new(1234).unwrap(),
            Some(Utc::now()),
        )
    }

    #[test]
    fn new_token_is_waiting_with_no_notes() {
        let token = test_token();
        assert_eq!(token.status, TokenStatus::Waiting);
        assert_eq!(token.diagnosis, None);
        assert_eq!(token.diagnosis_label(), "N/A");
    }

    #[test]
    fn complete_attaches_notes_and_advances_status() {
        let mut token = test_token();
        token.complete("Migraine", "Rest + hydration").unwrap();
        assert_eq!(token.status, TokenStatus::Completed);
        assert_eq!(token.diagnosis_label(), "Migraine");
        assert_eq!(token.prescription_label(), "Rest + hydration");
    }

    #[test]
    fn bill_requires_a_completed_token() {
        let mut token = test_token();
        assert!(token.bill().is_err());
        assert_eq!(token.status, TokenStatus::Waiting);

        token.complete("Flu", "Fluids").unwrap();
        token.bill().unwrap();
        assert_eq!(token.status, TokenStatus::Billed);
    }

    #[test]
    fn completed_token_cannot_complete_again() {
        let mut token = test_token();
        token.complete("Flu", "Fluids").unwrap();
        let err = token.complete("Cold", "Tea").unwrap_err();
        assert!(matches!(err, DomainError::InvariantViolation(_)));
        assert_eq!(token.diagnosis_label(), "Flu");
    }

    #[test]
    fn token_decodes_from_store_field_names() {
        let doc = serde_json::json!({
            "id": "018f2f0a-1111-7000-8000-000000000001",
            "patientName": "Asha Verma",
            "doctorId": "018f2f0a-2222-7000-8000-000000000002",
            "status": "waiting",
            "tokenNumber": 1234,
        });
        let token: Token = serde_json::from_value(doc).unwrap();
        assert_eq!(token.patient_name, "Asha Verma");
        assert_eq!(token.status, TokenStatus::Waiting);
        assert_eq!(token.created_at, None);
    }

    mod proptest_tests {
        use super::*;
        use proptest::prelude::*;

        /// Visit actions a random interleaving can attempt.
        #[derive(Debug, Clone, Copy)]
        enum Action {
            Diagnose,
            Bill,
        }

        fn action_strategy() -> impl Strategy<Value = Action> {
            prop_oneof![Just(Action::Diagnose), Just(Action::Bill)]
        }

        proptest! {
            #![proptest_config(ProptestConfig {
                cases: 1000,
                ..ProptestConfig::default()
            })]

            /// Property: no sequence of actions ever moves status backward.
            #[test]
            fn status_is_monotonic_under_any_action_sequence(
                actions in proptest::collection::vec(action_strategy(), 0..20)
            ) {
                let mut token = test_token();
                let mut previous = token.status;

                for action in actions {
                    let _ = match action {
                        Action::Diagnose => token.complete("Observation", "Rest"),
                        Action::Bill => token.bill(),
                    };
                    prop_assert!(token.status >= previous);
                    previous = token.status;
                }
            }

            /// Property: a rejected transition leaves the token untouched.
            #[test]
            fn failed_transitions_do_not_mutate_state(
                actions in proptest::collection::vec(action_strategy(), 1..20)
            ) {
                let mut token = test_token();
                for action in actions {
                    let before = token.clone();
                    let result = match action {
                        Action::Diagnose => token.complete("Observation", "Rest"),
                        Action::Bill => token.bill(),
                    };
                    if result.is_err() {
                        prop_assert_eq!(&token, &before);
                    }
                }
            }
        }
    }
}
