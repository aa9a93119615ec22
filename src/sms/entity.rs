//! Counterparty and description extraction
//!
//! Builds the human-readable description stored on an SMS-derived transaction:
//! `From JOHN DOE (UPI)`, `To CAFE COFFEE DAY (UPI)`, `To Ref: 123456 (UPI)`,
//! or the generic `UPI Income (UPI)` when nothing usable is found.

use regex::Regex;
use std::sync::OnceLock;

use crate::models::TransactionType;

/// Suffix appended to every SMS-derived description
pub const UPI_TAG: &str = " (UPI)";

/// What the extractor found to describe the other side of a transaction
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Counterparty {
    /// A name or UPI handle
    Named(String),
    /// A reference token, used when no name is present
    Reference(String),
}

impl Counterparty {
    fn label(&self) -> String {
        match self {
            Self::Named(name) => name.clone(),
            Self::Reference(token) => format!("Ref: {}", token),
        }
    }
}

fn sender_re() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| {
        Regex::new(
            r"(?i)(?:from|by|received from)\s+([A-Za-z0-9\s&.]+?)(?:\s+via|\s+through|\s+using|\s+to|\s+on|$|\.|,)",
        )
        .expect("invalid sender regex")
    })
}

fn recipient_re() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| {
        Regex::new(
            r"(?i)(?:to|at|for)\s+([A-Za-z0-9\s&.]+?)(?:\s+via|\s+through|\s+using|\s+from|\s+on|$|\.|,)",
        )
        .expect("invalid recipient regex")
    })
}

fn upi_id_re() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"(?i)UPI ID:\s+([a-zA-Z0-9@.]+)").expect("invalid upi id regex"))
}

fn reference_re() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| {
        Regex::new(r"(?i)(?:ref|reference|txn|transaction|upi ref).*?([A-Za-z0-9]+)")
            .expect("invalid reference regex")
    })
}

fn captured_name(re: &Regex, text: &str) -> Option<String> {
    let name = re.captures(text)?.get(1)?.as_str().trim();
    (!name.is_empty()).then(|| name.to_string())
}

fn sender(text: &str) -> Option<String> {
    captured_name(sender_re(), text)
}

fn recipient(text: &str) -> Option<String> {
    captured_name(recipient_re(), text)
}

fn upi_id(text: &str) -> Option<String> {
    captured_name(upi_id_re(), text)
}

/// Name patterns, tried in order
const NAME_MATCHERS: [fn(&str) -> Option<String>; 3] = [sender, recipient, upi_id];

/// Find the counterparty name, or failing that a reference token
pub fn find_counterparty(text: &str) -> Option<Counterparty> {
    if let Some(name) = NAME_MATCHERS.iter().find_map(|matcher| matcher(text)) {
        return Some(Counterparty::Named(name));
    }

    captured_name(reference_re(), text).map(Counterparty::Reference)
}

/// Build the display description for an SMS-derived transaction
pub fn extract_entity(text: &str, kind: TransactionType) -> String {
    let base = match find_counterparty(text) {
        Some(counterparty) => match kind {
            TransactionType::Income => format!("From {}", counterparty.label()),
            TransactionType::Expense => format!("To {}", counterparty.label()),
        },
        None => match kind {
            TransactionType::Income => "UPI Income".to_string(),
            TransactionType::Expense => "UPI Expense".to_string(),
        },
    };

    format!("{}{}", base, UPI_TAG)
}
