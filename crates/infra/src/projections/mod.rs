//! Read-model projectors.
//!
//! Each projector is a pure function from a full feed snapshot (plus the
//! viewer context it was built with) to derived view state. Views are
//! recomputed in their entirety on every delivery and discarded on the next;
//! there is no accumulation to drift out of sync with the store.

pub mod billing;
pub mod queue;
pub mod revenue;

pub use billing::{BillingProjector, BillingRow};
pub use queue::{QueueProjector, QueueRow, QueueView};
pub use revenue::{RevenueStats, SERIES_DAYS, total_revenue, weekly_visit_series};
