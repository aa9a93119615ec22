//! Income/expense classification of message text
//!
//! Direct credit/debit vocabulary decides first. Only when neither side is
//! present does the classifier fall back to UPI-specific phrasing, and only
//! for messages that look like they came from the UPI ecosystem.

use regex::Regex;
use std::sync::OnceLock;

use super::markers;
use crate::models::TransactionType;

fn credit_re() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| {
        Regex::new(r"(?i)credited|received|added|deposited|sent to you|paid to you|transferred to you")
            .expect("invalid credit regex")
    })
}

fn debit_re() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| {
        Regex::new(r"(?i)debited|paid|sent|deducted|withdrawn|spent").expect("invalid debit regex")
    })
}

fn inferred_credit_re() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| {
        Regex::new(r"(?i)received|from|credited to|added to").expect("invalid inferred credit regex")
    })
}

fn inferred_debit_re() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| {
        Regex::new(r"(?i)paid to|sent to|payment to|spent at").expect("invalid inferred debit regex")
    })
}

fn received_or_credited_re() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"(?i)received|credited").expect("invalid received regex"))
}

fn mentions_credit_phrase(text: &str) -> bool {
    inferred_credit_re().is_match(text)
}

fn mentions_debit_phrase(text: &str) -> bool {
    inferred_debit_re().is_match(text)
}

fn starts_with_payment(text: &str) -> bool {
    text.trim_start()
        .get(..7)
        .is_some_and(|head| head.eq_ignore_ascii_case("payment"))
}

fn mentions_received_or_credited(text: &str) -> bool {
    received_or_credited_re().is_match(text)
}

type Inference = (fn(&str) -> bool, TransactionType);

/// UPI-context rules, tried in order
const UPI_INFERENCES: [Inference; 4] = [
    (mentions_credit_phrase, TransactionType::Income),
    (mentions_debit_phrase, TransactionType::Expense),
    (starts_with_payment, TransactionType::Expense),
    (mentions_received_or_credited, TransactionType::Income),
];

/// Decide whether a message describes money coming in or going out
///
/// Returns `None` when nothing in the text indicates a direction. When both
/// credit and debit vocabulary appear (e.g. "sent to you" also contains
/// "sent"), the credit reading wins.
pub fn classify_type(text: &str) -> Option<TransactionType> {
    let is_credit = credit_re().is_match(text);
    let is_debit = debit_re().is_match(text);

    match (is_credit, is_debit) {
        (true, _) => Some(TransactionType::Income),
        (false, true) => Some(TransactionType::Expense),
        (false, false) => infer_from_upi_context(text),
    }
}

fn infer_from_upi_context(text: &str) -> Option<TransactionType> {
    if !markers::is_upi_context(text) {
        return None;
    }

    UPI_INFERENCES
        .iter()
        .find(|(applies, _)| applies(text))
        .map(|(_, kind)| *kind)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_direct_credit() {
        assert_eq!(
            classify_type("Your a/c is credited with INR 500"),
            Some(TransactionType::Income)
        );
        assert_eq!(
            classify_type("You have RECEIVED Rs. 1000.00"),
            Some(TransactionType::Income)
        );
    }

    #[test]
    fn test_direct_debit() {
        assert_eq!(
            classify_type("UPI: Rs. 500.00 paid to CAFE COFFEE DAY"),
            Some(TransactionType::Expense)
        );
        assert_eq!(classify_type("Rs.200 withdrawn at ATM"), Some(TransactionType::Expense));
    }

    #[test]
    fn test_both_sides_prefers_credit() {
        // "sent to you" contains "sent"
        assert_eq!(
            classify_type("Rs 300 sent to you by Ravi"),
            Some(TransactionType::Income)
        );
    }

    #[test]
    fn test_upi_context_inference() {
        assert_eq!(
            classify_type("GPay transfer of Rs 100 from Anil"),
            Some(TransactionType::Income)
        );
        assert_eq!(
            classify_type("PhonePe payment to Zomato Rs 250"),
            Some(TransactionType::Expense)
        );
        assert_eq!(
            classify_type("Payment of Rs 99 via UPI successful"),
            Some(TransactionType::Expense)
        );
    }

    #[test]
    fn test_upi_context_without_direction() {
        assert_eq!(classify_type("UPI transaction of Rs 50 successful"), None);
    }

    #[test]
    fn test_no_upi_context_no_inference() {
        // "from" would imply income, but only inside a UPI message
        assert_eq!(classify_type("Transfer of Rs 100 from Anil"), None);
        assert_eq!(classify_type("Hello, are we still meeting at 5?"), None);
    }

    #[test]
    fn test_deterministic() {
        let text = "Rs.150 transfer from John Doe Ref No 123";
        assert_eq!(classify_type(text), classify_type(text));
    }

    #[test]
    fn test_starts_with_payment() {
        assert!(starts_with_payment("  PAYMENT of Rs 10"));
        assert!(!starts_with_payment("pay"));
        assert!(!starts_with_payment("Your payment"));
    }
}
