use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use clinicdesk_core::{Entity, RecordId};

use crate::Amount;

/// Invoice identifier (the backing document's record id).
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct InvoiceId(pub RecordId);

impl InvoiceId {
    pub fn new(id: RecordId) -> Self {
        Self(id)
    }
}

impl core::fmt::Display for InvoiceId {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        core::fmt::Display::fmt(&self.0, f)
    }
}

/// One billed visit. Created exactly once per billing action, immutable
/// thereafter.
///
/// `date` is written as a server timestamp; a document observed before the
/// write commits may not have it yet. `amount` decodes leniently, see
/// [`Amount`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Invoice {
    pub id: InvoiceId,
    pub patient_name: String,
    #[serde(default)]
    pub amount: Amount,
    #[serde(default)]
    pub date: Option<DateTime<Utc>>,
}

impl Invoice {
    pub fn new(
        id: InvoiceId,
        patient_name: impl Into<String>,
        amount: Amount,
        date: Option<DateTime<Utc>>,
    ) -> Self {
        Self {
            id,
            patient_name: patient_name.into(),
            amount,
            date,
        }
    }
}

impl Entity for Invoice {
    type Id = InvoiceId;

    fn id(&self) -> &Self::Id {
        &self.id
    }
}
