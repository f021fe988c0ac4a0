//! `clinicdesk-tokens` — patient visit tokens.
//!
//! A token tracks one patient visit through the front desk:
//! `waiting → completed → billed`, forward only. Tokens are created by the
//! receptionist, completed by the assigned doctor (adding clinical notes),
//! and billed by the receptionist.

pub mod number;
pub mod token;

pub use number::TokenNumber;
pub use token::{Token, TokenId, TokenStatus};
