use tracing::info;

use crate::{Identity, Role};

/// Session context: the authenticated identity for the current login.
///
/// Explicit lifecycle, no ambient globals: the session is established once
/// after a successful profile lookup and cleared at logout. Everything that
/// needs the viewer (projectors, action handlers) takes it as an argument,
/// so multiple simulated viewers can coexist in tests without shared-state
/// leakage.
///
/// Calling view-producing components before `establish` is a caller error;
/// they are gated on [`Session::viewer`] returning `Some`.
#[derive(Debug, Default)]
pub struct Session {
    current: Option<Identity>,
}

impl Session {
    pub fn new() -> Self {
        Self::default()
    }

    /// Store the identity for the duration of the login session.
    ///
    /// Re-establishing replaces the previous identity (the auth provider
    /// fires a fresh state transition on every sign-in).
    pub fn establish(&mut self, identity: Identity) {
        info!(staff_id = %identity.id, role = %identity.role, "session established");
        self.current = Some(identity);
    }

    /// Reset identity and role to unset.
    pub fn clear(&mut self) {
        if let Some(identity) = self.current.take() {
            info!(staff_id = %identity.id, "session cleared");
        }
    }

    pub fn is_established(&self) -> bool {
        self.current.is_some()
    }

    pub fn viewer(&self) -> Option<&Identity> {
        self.current.as_ref()
    }

    pub fn role(&self) -> Option<Role> {
        self.current.as_ref().map(|i| i.role)
    }
}
