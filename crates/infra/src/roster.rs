//! Doctor roster for assignment dropdowns.

use clinicdesk_auth::{Identity, Role};
use clinicdesk_core::StaffId;

use crate::store::{DocumentStore, Filter, StoreError, collections, decode_all};

/// One selectable doctor.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DoctorOption {
    pub id: StaffId,
    pub name: String,
}

/// One-shot query of all doctor-role profiles.
///
/// No caching and no live updates: every call re-queries the store, so the
/// dropdown reflects whatever the roster was at the moment the form opened.
/// Result order is query order.
pub fn list_doctors<S: DocumentStore + ?Sized>(store: &S) -> Result<Vec<DoctorOption>, StoreError> {
    let docs = store.query(
        collections::USERS,
        &Filter::field_eq("role", Role::Doctor.as_str()),
    )?;
    let profiles: Vec<Identity> = decode_all(collections::USERS, &docs);

    Ok(profiles
        .into_iter()
        .map(|profile| DoctorOption {
            id: profile.id,
            name: profile.name,
        })
        .collect())
}
