//! Core data models for smsledger
//!
//! This module contains the data structures that represent the ledger domain:
//! transactions, money amounts, identifiers and derived summaries.

pub mod ids;
pub mod money;
pub mod summary;
pub mod transaction;

pub use ids::TransactionId;
pub use money::Money;
pub use summary::TransactionSummary;
pub use transaction::{Transaction, TransactionSource, TransactionType, TransactionValidationError};
