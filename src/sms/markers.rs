//! Vocabulary shared by the pre-filter and the type classifier

use regex::Regex;
use std::sync::OnceLock;

fn upi_ecosystem_re() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"(?i)upi|paytm|phonepe|googlepay|gpay").expect("invalid upi regex"))
}

fn upi_reference_re() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| {
        Regex::new(r"(?i)upi ref|upi id|txn id|ref no|upi-p2p").expect("invalid upi ref regex")
    })
}

fn transaction_vocabulary_re() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| {
        Regex::new(r"(?i)credited|debited|paid|received|transferred|payment")
            .expect("invalid vocabulary regex")
    })
}

/// Mentions a UPI app or the UPI rail itself
pub fn mentions_upi(text: &str) -> bool {
    upi_ecosystem_re().is_match(text)
}

/// Carries a UPI/transaction reference marker such as `UPI Ref` or `Txn ID`
pub fn has_upi_reference(text: &str) -> bool {
    upi_reference_re().is_match(text)
}

pub fn is_upi_context(text: &str) -> bool {
    mentions_upi(text) || has_upi_reference(text)
}

/// Uses any of the words banks put in transaction alerts
pub fn has_transaction_vocabulary(text: &str) -> bool {
    transaction_vocabulary_re().is_match(text)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_upi_markers() {
        assert!(mentions_upi("Paid via PhonePe"));
        assert!(mentions_upi("gpay transfer"));
        assert!(!mentions_upi("NEFT transfer"));
        assert!(has_upi_reference("Txn ID 1234"));
        assert!(has_upi_reference("UPI-P2P/992"));
        assert!(!has_upi_reference("reference 1234"));
    }

    #[test]
    fn test_transaction_vocabulary() {
        assert!(has_transaction_vocabulary("Salary CREDITED"));
        assert!(has_transaction_vocabulary("payment due"));
        assert!(!has_transaction_vocabulary("Hello, are we still meeting at 5?"));
    }
}
