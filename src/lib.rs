//! smsledger - Personal ledger fed by bank and UPI SMS notifications
//!
//! This library turns the free-form text of transaction SMS messages into
//! structured ledger entries and keeps a persistent record of income and
//! expenses with derived totals.
//!
//! # Architecture
//!
//! The crate is organized into the following modules:
//!
//! - `config`: Configuration and path management
//! - `error`: Custom error types
//! - `models`: Core data models (transactions, money, summaries)
//! - `sms`: Detection engine (amount, type and counterparty extraction, dedup)
//! - `storage`: Key-value persistence over JSON files
//! - `services`: Ledger and SMS detection services
//! - `audit`: Audit logging system
//! - `notify`: User-facing notifications
//!
//! # Example
//!
//! ```rust,ignore
//! use smsledger::notify::ConsoleNotifier;
//! use smsledger::services::{Ledger, SmsService};
//! use smsledger::storage::MemoryStore;
//!
//! let store = MemoryStore::new();
//! let notifier = ConsoleNotifier;
//! let mut ledger = Ledger::open(&store, &notifier)?;
//! let mut sms = SmsService::open(&store, &notifier)?;
//! sms.process_message(&mut ledger, "UPI: Rs. 500.00 paid to CAFE COFFEE DAY. UPI Ref: 123456789.");
//! ```

pub mod audit;
pub mod cli;
pub mod config;
pub mod display;
pub mod error;
pub mod models;
pub mod notify;
pub mod services;
pub mod sms;
pub mod storage;

pub use error::{LedgerError, LedgerResult};
