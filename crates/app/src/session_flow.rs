//! Login/logout orchestration.
//!
//! Authentication gates everything: the dashboard only exists between a
//! successful profile lookup and the matching logout. The auth provider
//! verifies credentials; the staff profile document supplies the identity the
//! session caches.

use tracing::warn;

use clinicdesk_auth::{Identity, Session};
use clinicdesk_core::StaffId;
use clinicdesk_infra::store::{DocumentStore, collections};

use crate::dashboard::Dashboard;
use crate::error::{AppError, AppResult};
use crate::gateway::{AuthGateway, AuthUser, Clock};

/// Session lifecycle driver for one browser-tab-equivalent process.
pub struct SessionFlow<S, A> {
    store: S,
    auth: A,
    session: Session,
}

impl<S, A> SessionFlow<S, A>
where
    S: DocumentStore + Clone,
    A: AuthGateway,
{
    pub fn new(store: S, auth: A) -> Self {
        Self {
            store,
            auth,
            session: Session::new(),
        }
    }

    pub fn session(&self) -> &Session {
        &self.session
    }

    /// Login form submission: verify credentials, load the staff profile,
    /// establish the session, and attach the live dashboard.
    ///
    /// Returning the dashboard from here is what ties subscription lifetime
    /// to session lifetime: it cannot outlive the login that produced it
    /// without the caller explicitly keeping it past [`SessionFlow::logout`].
    pub fn login<C: Clock>(
        &mut self,
        email: &str,
        password: &str,
        clock: C,
    ) -> AppResult<Dashboard<S, C>> {
        let user = self.auth.sign_in(email, password)?;
        let identity = self.establish_from_profile(user.id)?;
        Ok(Dashboard::attach(self.store.clone(), identity, clock))
    }

    /// Auth-state transition handler.
    ///
    /// The provider fires this once at subscribe time with the current state,
    /// then on every transition. `None` means signed out.
    pub fn handle_auth_state(&mut self, user: Option<AuthUser>) -> AppResult<Option<Identity>> {
        match user {
            Some(user) => self.establish_from_profile(user.id).map(Some),
            None => {
                self.session.clear();
                Ok(None)
            }
        }
    }

    /// End the session. The dashboard is consumed here: its subscriptions
    /// and views die with the login that created them.
    pub fn logout<C>(&mut self, dashboard: Dashboard<S, C>) {
        drop(dashboard);
        self.auth.sign_out();
        self.session.clear();
    }

    fn establish_from_profile(&mut self, staff_id: StaffId) -> AppResult<Identity> {
        let doc = self.store.get_one(collections::USERS, staff_id.into())?;
        let profile = doc.and_then(|doc| match serde_json::from_value::<Identity>(doc) {
            Ok(profile) => Some(profile),
            Err(err) => {
                warn!(%staff_id, %err, "staff profile document is unusable");
                None
            }
        });

        let Some(profile) = profile else {
            // An authenticated account without a backing profile must not
            // keep a half-open session.
            self.auth.sign_out();
            self.session.clear();
            return Err(AppError::MissingRecord(staff_id));
        };

        self.session.establish(profile.clone());
        Ok(profile)
    }
}
