//! SMS transaction detection
//!
//! A heuristic pipeline over free-text bank and UPI notifications:
//!
//! - `amount`: finds the monetary amount
//! - `classify`: decides income vs expense
//! - `entity`: derives the counterparty description
//! - `dedup`: normalizes message text into a stable key
//! - `engine`: composes the above into a single accept/reject decision
//!
//! Accuracy is approximate by nature; the rules favour recall across the many
//! message templates in use.

pub mod amount;
pub mod classify;
pub mod dedup;
pub mod engine;
pub mod entity;
pub mod markers;

pub use amount::{extract_amount, AmountForm, ExtractedAmount};
pub use classify::classify_type;
pub use dedup::{message_key, DedupIndex};
pub use engine::{analyze, Detection, ProcessOutcome, RejectReason, SmsEngine};
pub use entity::{extract_entity, find_counterparty, Counterparty};
