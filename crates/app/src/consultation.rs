//! Doctor action: finishing a consultation.

use serde_json::json;

use clinicdesk_core::RecordId;
use clinicdesk_infra::store::{DocumentStore, collections};
use clinicdesk_tokens::{Token, TokenStatus};

use crate::error::{ActionOutcome, AppError, AppResult};
use crate::gateway::Dialog;

/// Diagnosis form state, as submitted.
///
/// `token_id` is the raw hidden-field text; it may be empty or malformed if
/// the form was opened without a selected patient.
#[derive(Debug, Clone, Default)]
pub struct DiagnosisForm {
    pub token_id: String,
    pub diagnosis: String,
    pub prescription: String,
}

/// Record the diagnosis: `waiting → completed` with notes attached.
///
/// An empty or unparsable token id aborts silently with no write attempted.
/// The decoded token gates the transition, so re-diagnosing a completed or
/// billed visit is rejected rather than silently rewinding its status.
pub fn submit_diagnosis<S>(
    store: &S,
    dialog: &dyn Dialog,
    form: &DiagnosisForm,
) -> AppResult<ActionOutcome<()>>
where
    S: DocumentStore,
{
    let raw_id = form.token_id.trim();
    if raw_id.is_empty() {
        return Ok(ActionOutcome::Aborted);
    }
    let Ok(record_id) = raw_id.parse::<RecordId>() else {
        return Ok(ActionOutcome::Aborted);
    };

    match write_diagnosis(store, record_id, form) {
        Ok(()) => {
            dialog.success("Success", "Consultation Finished!");
            Ok(ActionOutcome::Done(()))
        }
        Err(err) => {
            dialog.error("Error", &err.to_string());
            Err(err)
        }
    }
}

fn write_diagnosis<S>(store: &S, record_id: RecordId, form: &DiagnosisForm) -> AppResult<()>
where
    S: DocumentStore,
{
    let doc = store
        .get_one(collections::TOKENS, record_id)?
        .ok_or_else(|| AppError::Write(format!("token {record_id} not found")))?;
    let mut token: Token =
        serde_json::from_value(doc).map_err(|err| AppError::Write(err.to_string()))?;
    token
        .complete(form.diagnosis.clone(), form.prescription.clone())
        .map_err(|err| AppError::Write(err.to_string()))?;

    store.update_one(
        collections::TOKENS,
        record_id,
        json!({
            "status": TokenStatus::Completed,
            "diagnosis": form.diagnosis,
            "prescription": form.prescription,
        }),
    )?;
    Ok(())
}
