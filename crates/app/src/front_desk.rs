//! Receptionist actions: patient registration and billing.

use rand::Rng;
use serde_json::json;

use clinicdesk_core::{RecordId, StaffId};
use clinicdesk_infra::store::{DocumentStore, collections, server_timestamp};
use clinicdesk_invoicing::{Amount, InvoiceId, Receipt};
use clinicdesk_tokens::{Token, TokenId, TokenNumber, TokenStatus};

use crate::error::{ActionOutcome, AppError, AppResult};
use crate::gateway::{Clock, Dialog, ReceiptRenderer};

/// Pre-filled amount in the billing prompt.
pub const SUGGESTED_BILL_AMOUNT: f64 = 50.0;

/// New patient registration form state.
#[derive(Debug, Clone, Default)]
pub struct NewPatientForm {
    pub patient_name: String,
    /// Selected doctor, `None` while the dropdown still shows the
    /// placeholder.
    pub doctor_id: Option<StaffId>,
}

/// Generate a token for a new patient.
///
/// Validation failures (blank name, no doctor selected) abort silently with
/// no write. A rejected write surfaces as an error modal and leaves the form
/// untouched for manual retry.
pub fn register_patient<S, R>(
    store: &S,
    dialog: &dyn Dialog,
    rng: &mut R,
    form: &NewPatientForm,
) -> AppResult<ActionOutcome<TokenId>>
where
    S: DocumentStore,
    R: Rng,
{
    let name = form.patient_name.trim();
    if name.is_empty() {
        return Ok(ActionOutcome::Aborted);
    }
    let Some(doctor_id) = form.doctor_id else {
        return Ok(ActionOutcome::Aborted);
    };

    let number = TokenNumber::random(rng);
    match store.add_one(
        collections::TOKENS,
        json!({
            "patientName": name,
            "doctorId": doctor_id,
            "status": TokenStatus::Waiting,
            "tokenNumber": number,
            "createdAt": server_timestamp(),
        }),
    ) {
        Ok(id) => {
            dialog.success("Success", "Token Generated!");
            Ok(ActionOutcome::Done(TokenId::new(id)))
        }
        Err(err) => {
            let text = err.to_string();
            dialog.error("Error", &text);
            Err(AppError::Write(text))
        }
    }
}

/// Bill a completed consultation.
///
/// Prompts for the amount (cancelling, or entering a non-amount, aborts
/// silently), then reads the token for its clinical notes, writes exactly one
/// invoice, advances the token to billed, and hands the receipt to the PDF
/// sink.
pub fn bill_patient<S, C>(
    store: &S,
    dialog: &dyn Dialog,
    renderer: &dyn ReceiptRenderer,
    clock: &C,
    token_id: TokenId,
    patient_name: &str,
) -> AppResult<ActionOutcome<InvoiceId>>
where
    S: DocumentStore,
    C: Clock,
{
    let title = format!("Generate Bill for {patient_name}");
    let Some(raw) = dialog.prompt_amount(&title, SUGGESTED_BILL_AMOUNT) else {
        return Ok(ActionOutcome::Aborted);
    };
    let Ok(amount) = Amount::new(raw) else {
        return Ok(ActionOutcome::Aborted);
    };

    match write_bill(store, token_id, patient_name, amount) {
        Ok((token, invoice_id)) => {
            let receipt = Receipt::for_visit(&token, amount, clock.now());
            if let Err(err) = renderer.render(&receipt) {
                let text = format!("Could not generate bill: {err}");
                dialog.error("Error", &text);
                return Err(AppError::Write(text));
            }
            dialog.success("Success", "Invoice generated and PDF downloaded!");
            Ok(ActionOutcome::Done(invoice_id))
        }
        Err(err) => {
            dialog.error("Error", &format!("Could not generate bill: {err}"));
            Err(err)
        }
    }
}

/// The write half of billing: invoice first, then the status advance.
///
/// The decoded token also gates the transition: billing a token that is not
/// completed is a backward or skipped transition and is rejected before any
/// write happens.
fn write_bill<S>(
    store: &S,
    token_id: TokenId,
    patient_name: &str,
    amount: Amount,
) -> AppResult<(Token, InvoiceId)>
where
    S: DocumentStore,
{
    let record_id: RecordId = token_id.0;
    let doc = store
        .get_one(collections::TOKENS, record_id)?
        .ok_or_else(|| AppError::Write(format!("token {token_id} not found")))?;
    let mut token: Token =
        serde_json::from_value(doc).map_err(|err| AppError::Write(err.to_string()))?;
    token.bill().map_err(|err| AppError::Write(err.to_string()))?;

    let invoice_id = store.add_one(
        collections::INVOICES,
        json!({
            "patientName": patient_name,
            "amount": amount,
            "date": server_timestamp(),
        }),
    )?;

    store.update_one(
        collections::TOKENS,
        record_id,
        json!({ "status": TokenStatus::Billed }),
    )?;

    Ok((token, InvoiceId::new(invoice_id)))
}
