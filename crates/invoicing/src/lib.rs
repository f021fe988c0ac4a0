//! `clinicdesk-invoicing` — invoices, amounts, and receipts.
//!
//! An invoice is written exactly once per billing action and never mutated.
//! Amounts are lenient on the way in (the store may hold anything) and the
//! receipt is the structured document handed to the PDF sink.

pub mod amount;
pub mod invoice;
pub mod receipt;

pub use amount::Amount;
pub use invoice::{Invoice, InvoiceId};
pub use receipt::Receipt;
