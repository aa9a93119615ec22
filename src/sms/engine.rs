//! SMS transaction engine
//!
//! Turns one message into at most one transaction. The engine owns the
//! deduplication index but never touches the ledger; accepted transactions are
//! handed back to the caller.

use std::fmt;

use super::amount::{extract_amount, ExtractedAmount};
use super::classify::classify_type;
use super::dedup::{message_key, DedupIndex};
use super::entity::extract_entity;
use super::markers;
use crate::models::{Money, Transaction, TransactionType};

/// Why a message did not produce a transaction
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RejectReason {
    /// Empty or whitespace-only input
    EmptyMessage,
    /// No UPI marker, reference marker or transaction vocabulary
    NotFinancial,
    /// No positive amount could be extracted
    NoAmount,
    /// Neither income nor expense could be inferred
    NoType,
}

impl fmt::Display for RejectReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::EmptyMessage => write!(f, "message is empty"),
            Self::NotFinancial => write!(f, "message doesn't look like a financial transaction"),
            Self::NoAmount => write!(f, "no valid amount found"),
            Self::NoType => write!(f, "couldn't determine transaction type"),
        }
    }
}

/// Result of processing one message
#[derive(Debug, Clone, PartialEq)]
pub enum ProcessOutcome {
    Accepted(Transaction),
    /// Same normalized text as a previously accepted message
    Duplicate,
    Rejected(RejectReason),
}

impl ProcessOutcome {
    pub fn is_success(&self) -> bool {
        matches!(self, Self::Accepted(_))
    }

    pub fn is_duplicate(&self) -> bool {
        matches!(self, Self::Duplicate)
    }

    pub fn transaction(&self) -> Option<&Transaction> {
        match self {
            Self::Accepted(txn) => Some(txn),
            _ => None,
        }
    }

    pub fn into_transaction(self) -> Option<Transaction> {
        match self {
            Self::Accepted(txn) => Some(txn),
            _ => None,
        }
    }
}

/// What the extractors found in a message, before any state is touched
#[derive(Debug, Clone, PartialEq)]
pub struct Detection {
    pub amount: Money,
    pub raw_amount: ExtractedAmount,
    pub kind: TransactionType,
    pub description: String,
}

/// Run the pre-filter and extractors over a message without recording anything
pub fn analyze(message: &str) -> Result<Detection, RejectReason> {
    if message.trim().is_empty() {
        return Err(RejectReason::EmptyMessage);
    }

    if !markers::is_upi_context(message) && !markers::has_transaction_vocabulary(message) {
        return Err(RejectReason::NotFinancial);
    }

    let raw_amount = extract_amount(message).ok_or(RejectReason::NoAmount)?;
    let amount = Money::from_decimal(raw_amount.value)
        .filter(Money::is_positive)
        .ok_or(RejectReason::NoAmount)?;

    let kind = classify_type(message).ok_or(RejectReason::NoType)?;
    let description = extract_entity(message, kind);

    Ok(Detection {
        amount,
        raw_amount,
        kind,
        description,
    })
}

/// Stateful engine: extraction plus the deduplication gate
#[derive(Debug, Clone, Default)]
pub struct SmsEngine {
    index: DedupIndex,
}

impl SmsEngine {
    pub fn new() -> Self {
        Self::default()
    }

    /// Resume with keys recorded in an earlier session
    pub fn with_index(index: DedupIndex) -> Self {
        Self { index }
    }

    pub fn index(&self) -> &DedupIndex {
        &self.index
    }

    /// Process one message
    ///
    /// A message whose key was already recorded is rejected as a duplicate
    /// before any extraction runs. The key is recorded only when a
    /// transaction is produced.
    pub fn process(&mut self, message: &str) -> ProcessOutcome {
        if message.trim().is_empty() {
            tracing::debug!("Rejected SMS: {}", RejectReason::EmptyMessage);
            return ProcessOutcome::Rejected(RejectReason::EmptyMessage);
        }

        let key = message_key(message);
        if self.index.seen(&key) {
            tracing::warn!(key = %key, "SMS already processed");
            return ProcessOutcome::Duplicate;
        }

        match analyze(message) {
            Ok(detection) => {
                tracing::info!(
                    kind = %detection.kind,
                    amount = %detection.amount,
                    description = %detection.description,
                    "Detected SMS transaction"
                );
                let txn = Transaction::from_sms(detection.kind, detection.amount, detection.description);
                self.index.record(key);
                ProcessOutcome::Accepted(txn)
            }
            Err(reason) => {
                tracing::debug!("Rejected SMS: {}", reason);
                ProcessOutcome::Rejected(reason)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::TransactionSource;

    const CAFE: &str = "UPI: Rs. 500.00 paid to CAFE COFFEE DAY. UPI Ref: 123456789.";
    const JOHN: &str =
        "You have received Rs. 1000.00 from JOHN DOE via UPI. Reference: UPI987654321.";

    #[test]
    fn test_expense_scenario() {
        let mut engine = SmsEngine::new();
        let txn = engine.process(CAFE).into_transaction().unwrap();

        assert_eq!(txn.amount, Money::from_cents(50000));
        assert_eq!(txn.kind, TransactionType::Expense);
        assert_eq!(txn.description, "To CAFE COFFEE DAY (UPI)");
        assert_eq!(txn.source, TransactionSource::Sms);
        assert!(txn.category.is_none());
    }

    #[test]
    fn test_income_scenario() {
        let mut engine = SmsEngine::new();
        let txn = engine.process(JOHN).into_transaction().unwrap();

        assert_eq!(txn.amount, Money::from_cents(100000));
        assert_eq!(txn.kind, TransactionType::Income);
        assert_eq!(txn.description, "From JOHN DOE (UPI)");
    }

    #[test]
    fn test_empty_message_records_nothing() {
        let mut engine = SmsEngine::new();
        assert_eq!(
            engine.process(""),
            ProcessOutcome::Rejected(RejectReason::EmptyMessage)
        );
        assert_eq!(
            engine.process(" \t\n"),
            ProcessOutcome::Rejected(RejectReason::EmptyMessage)
        );
        assert!(engine.index().is_empty());
    }

    #[test]
    fn test_duplicate_message() {
        let mut engine = SmsEngine::new();
        assert!(engine.process(CAFE).is_success());

        assert_eq!(engine.process(CAFE), ProcessOutcome::Duplicate);
        let variant = format!("  {}  ", CAFE.to_uppercase().replace(' ', "   "));
        assert!(engine.process(&variant).is_duplicate());
        assert_eq!(engine.index().len(), 1);
    }

    #[test]
    fn test_rejected_message_is_not_recorded() {
        let mut engine = SmsEngine::new();
        let text = "UPI transaction of Rs 50 successful";
        assert_eq!(engine.process(text), ProcessOutcome::Rejected(RejectReason::NoType));
        // Not a duplicate the second time either
        assert_eq!(engine.process(text), ProcessOutcome::Rejected(RejectReason::NoType));
        assert!(engine.index().is_empty());
    }

    #[test]
    fn test_non_financial_message() {
        let mut engine = SmsEngine::new();
        assert_eq!(
            engine.process("Hello, are we still meeting at 5?"),
            ProcessOutcome::Rejected(RejectReason::NotFinancial)
        );
    }

    #[test]
    fn test_zero_amount_rejected() {
        assert_eq!(
            analyze("Rs. 0.00 debited from your account"),
            Err(RejectReason::NoAmount)
        );
        assert_eq!(
            analyze("Payment received, thank you"),
            Err(RejectReason::NoAmount)
        );
    }

    #[test]
    fn test_sub_paisa_amount_rejected() {
        assert_eq!(analyze("Rs.0.001 credited"), Err(RejectReason::NoAmount));
    }

    #[test]
    fn test_oversized_amount_rejected() {
        assert_eq!(
            analyze("Rs.90000000000000000 credited from A"),
            Err(RejectReason::NoAmount)
        );
        assert_eq!(
            analyze("Rs.100000000000 credited from A").unwrap().amount,
            Money::MAX
        );
    }

    #[test]
    fn test_bank_template_with_reference() {
        let text = "Dear ABC User, your A/c X6161-credited by Rs.150 on 30Mar25 transfer from John Doe R Ref No 12345678900 -ABC";
        let detection = analyze(text).unwrap();
        assert_eq!(detection.amount, Money::from_cents(15000));
        assert_eq!(detection.kind, TransactionType::Income);
    }

    #[test]
    fn test_resume_with_index() {
        let mut first = SmsEngine::new();
        first.process(JOHN);

        let mut second = SmsEngine::with_index(first.index().clone());
        assert!(second.process(JOHN).is_duplicate());
        assert!(second.process(CAFE).is_success());
    }
}
