//! `clinicdesk-auth` — authenticated identity, roles, and session context.
//!
//! This crate is intentionally decoupled from the credential provider and the
//! document store: it holds what the rest of the dashboard needs to know about
//! *who is looking* (identity + role) and *what they may see* (sections).

pub mod identity;
pub mod role;
pub mod sections;
pub mod session;

pub use identity::Identity;
pub use role::Role;
pub use sections::{Section, visible_sections};
pub use session::Session;
