//! Live dashboard state.
//!
//! One [`Dashboard`] exists per established session. It owns the three feed
//! subscriptions and the latest derived views; dropping it (at logout) tears
//! the subscriptions down with it, so stale feeds can never leak into a
//! later session's UI.

use serde_json::Value as JsonValue;
use tracing::warn;

use clinicdesk_auth::Identity;
use clinicdesk_feed::{Projector, Snapshot, Subscription};
use clinicdesk_infra::projections::{
    BillingProjector, BillingRow, QueueProjector, QueueView, RevenueStats, total_revenue,
    weekly_visit_series,
};
use clinicdesk_infra::store::{DocumentStore, Filter, collections, decode_all};
use clinicdesk_invoicing::Invoice;
use clinicdesk_tokens::Token;

use crate::gateway::Clock;

/// The three live views plus the subscriptions that drive them.
///
/// The projector subscriptions are independent and unordered relative to each
/// other; each view reacts only to its own feed, and transient inconsistency
/// between views (revenue updated before the queue count) is permitted. Every
/// delivery fully replaces the affected view.
pub struct Dashboard<S, C> {
    store: S,
    clock: C,
    queue_projector: QueueProjector,
    billing_projector: BillingProjector,
    queue_sub: Subscription<Snapshot<JsonValue>>,
    billing_sub: Subscription<Snapshot<JsonValue>>,
    invoice_sub: Subscription<Snapshot<JsonValue>>,
    queue_view: QueueView,
    billing_rows: Vec<BillingRow>,
    revenue: RevenueStats,
}

impl<S, C> std::fmt::Debug for Dashboard<S, C> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Dashboard").finish_non_exhaustive()
    }
}

impl<S, C> Dashboard<S, C>
where
    S: DocumentStore,
    C: Clock,
{
    /// Attach the session's subscriptions and build the initial views.
    ///
    /// Each watch fires once at subscribe time with current state, so the
    /// views are populated before this returns.
    pub fn attach(store: S, viewer: Identity, clock: C) -> Self {
        let queue_sub = store.watch(collections::TOKENS, Filter::all());
        let billing_sub =
            store.watch(collections::TOKENS, Filter::field_eq("status", "completed"));
        let invoice_sub = store.watch(collections::INVOICES, Filter::all());

        let mut dashboard = Self {
            store,
            clock,
            queue_projector: QueueProjector::new(viewer),
            billing_projector: BillingProjector::new(),
            queue_sub,
            billing_sub,
            invoice_sub,
            queue_view: QueueView::default(),
            billing_rows: Vec::new(),
            revenue: RevenueStats::default(),
        };
        dashboard.pump();
        dashboard
    }

    /// Drain pending deliveries and fully recompute the affected views.
    ///
    /// Intermediate snapshots are skipped; only the newest delivery per feed
    /// matters, since each one is a complete replacement set. Returns whether
    /// any view changed.
    pub fn pump(&mut self) -> bool {
        let mut changed = false;

        if let Some(snap) = self.queue_sub.latest() {
            let tokens: Vec<Token> = decode_all(collections::TOKENS, snap.iter());
            self.queue_view = self.queue_projector.project(&tokens.into());
            changed = true;
        }

        if let Some(snap) = self.billing_sub.latest() {
            let tokens: Vec<Token> = decode_all(collections::TOKENS, snap.iter());
            self.billing_rows = self.billing_projector.project(&tokens.into());
            changed = true;
        }

        if let Some(snap) = self.invoice_sub.latest() {
            let invoices: Vec<Invoice> = decode_all(collections::INVOICES, snap.iter());
            self.refresh_revenue(&invoices);
            changed = true;
        }

        changed
    }

    /// Recompute revenue from the invoice snapshot and the visit series from
    /// a fresh authoritative token query (never from cached state).
    fn refresh_revenue(&mut self, invoices: &[Invoice]) {
        self.revenue.revenue = total_revenue(invoices);

        match self.store.query(
            collections::TOKENS,
            &Filter::field_in("status", ["completed", "billed"]),
        ) {
            Ok(docs) => {
                let seen: Vec<Token> = decode_all(collections::TOKENS, &docs);
                self.revenue.series = weekly_visit_series(&seen, self.clock.now());
            }
            // Keep the previous series; the next invoice delivery recomputes.
            Err(err) => warn!(%err, "visit series re-query failed"),
        }
    }

    pub fn viewer(&self) -> &Identity {
        self.queue_projector.viewer()
    }

    pub fn queue(&self) -> &QueueView {
        &self.queue_view
    }

    pub fn billing(&self) -> &[BillingRow] {
        &self.billing_rows
    }

    pub fn revenue(&self) -> &RevenueStats {
        &self.revenue
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;
    use serde_json::json;

    use clinicdesk_auth::Role;
    use clinicdesk_core::StaffId;
    use clinicdesk_infra::store::{InMemoryDocumentStore, server_timestamp};

    use crate::test_support::FixedClock;
    use std::sync::Arc;

    fn receptionist() -> Identity {
        Identity::new(StaffId::new(), "Front Desk", Role::Receptionist)
    }

    fn store_with_waiting_token() -> Arc<InMemoryDocumentStore> {
        let store = Arc::new(InMemoryDocumentStore::new());
        store
            .add_one(
                collections::TOKENS,
                json!({
                    "patientName": "Asha Verma",
                    "doctorId": StaffId::new(),
                    "status": "waiting",
                    "tokenNumber": 1234,
                    "createdAt": server_timestamp(),
                }),
            )
            .unwrap();
        store
    }

    #[test]
    fn attach_populates_views_from_current_state() {
        let store = store_with_waiting_token();
        let dashboard = Dashboard::attach(store.clone(), receptionist(), FixedClock(Utc::now()));

        assert_eq!(dashboard.queue().waiting_count, 1);
        assert_eq!(dashboard.queue().rows.len(), 1);
        assert!(dashboard.billing().is_empty());
        assert_eq!(dashboard.revenue().revenue.value(), 0.0);
    }

    #[test]
    fn pump_picks_up_later_mutations() {
        let store = store_with_waiting_token();
        let mut dashboard =
            Dashboard::attach(store.clone(), receptionist(), FixedClock(Utc::now()));

        assert!(!dashboard.pump(), "no deliveries pending after attach");

        store
            .add_one(
                collections::INVOICES,
                json!({ "patientName": "Asha Verma", "amount": 50, "date": server_timestamp() }),
            )
            .unwrap();

        assert!(dashboard.pump());
        assert_eq!(dashboard.revenue().revenue.value(), 50.0);
    }

    #[test]
    fn revenue_series_counts_only_seen_visits() {
        let store = store_with_waiting_token();
        let doctor = StaffId::new();
        let completed_id = store
            .add_one(
                collections::TOKENS,
                json!({
                    "patientName": "Ravi Nair",
                    "doctorId": doctor,
                    "status": "waiting",
                    "tokenNumber": 2001,
                    "createdAt": server_timestamp(),
                }),
            )
            .unwrap();
        store
            .update_one(
                collections::TOKENS,
                completed_id,
                json!({"status": "completed"}),
            )
            .unwrap();
        store
            .add_one(
                collections::INVOICES,
                json!({ "patientName": "Ravi Nair", "amount": 50, "date": server_timestamp() }),
            )
            .unwrap();

        let dashboard = Dashboard::attach(store.clone(), receptionist(), FixedClock(Utc::now()));
        assert_eq!(dashboard.revenue().series[6], 1);
        assert_eq!(dashboard.revenue().series.iter().sum::<u32>(), 1);
    }
}
