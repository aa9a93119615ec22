//! Service layer for smsledger
//!
//! The service layer provides business logic on top of the storage layer:
//! validation, derived totals, notifications and SMS detection.

pub mod ledger;
pub mod sms;

pub use ledger::{Ledger, NewTransaction, Observer, TransactionFilter};
pub use sms::{ScanReport, SmsService};
