//! Display formatting for terminal output
//!
//! Provides utilities for formatting ledger data for terminal display.

pub mod summary;
pub mod transaction;

pub use summary::{format_scan_report, format_summary};
pub use transaction::{
    format_signed_amount, format_transaction_details, format_transaction_register,
    format_transaction_row,
};
