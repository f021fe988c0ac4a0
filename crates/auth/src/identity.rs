use serde::{Deserialize, Serialize};

use clinicdesk_core::StaffId;

use crate::Role;

/// Identity of an authenticated staff member.
///
/// Backed by the staff profile document in the `users` collection; cached in
/// the [`Session`](crate::Session) for the lifetime of a login. The identity
/// is immutable once established; role changes take effect at the next
/// login.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Identity {
    pub id: StaffId,
    pub name: String,
    pub role: Role,
}

impl Identity {
    pub fn new(id: StaffId, name: impl Into<String>, role: Role) -> Self {
        Self {
            id,
            name: name.into(),
            role,
        }
    }

    pub fn is_doctor(&self) -> bool {
        self.role == Role::Doctor
    }

    pub fn is_receptionist(&self) -> bool {
        self.role == Role::Receptionist
    }
}
