//! Transaction model
//!
//! A ledger entry is immutable once created. It is either entered manually or
//! derived from an SMS notification by the detection engine.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use super::ids::TransactionId;
use super::money::Money;

/// Direction of a transaction
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TransactionType {
    Income,
    Expense,
}

impl TransactionType {
    pub fn is_income(&self) -> bool {
        matches!(self, Self::Income)
    }
}

impl fmt::Display for TransactionType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Income => write!(f, "Income"),
            Self::Expense => write!(f, "Expense"),
        }
    }
}

impl FromStr for TransactionType {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "income" | "in" | "credit" => Ok(Self::Income),
            "expense" | "out" | "debit" => Ok(Self::Expense),
            other => Err(format!("Unknown transaction type: '{}'", other)),
        }
    }
}

/// Where a transaction came from
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum TransactionSource {
    #[default]
    Manual,
    Sms,
}

impl fmt::Display for TransactionSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Manual => write!(f, "Manual"),
            Self::Sms => write!(f, "SMS"),
        }
    }
}

impl FromStr for TransactionSource {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "manual" => Ok(Self::Manual),
            "sms" => Ok(Self::Sms),
            other => Err(format!("Unknown transaction source: '{}'", other)),
        }
    }
}

/// A financial transaction
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Transaction {
    /// Unique identifier
    pub id: TransactionId,

    /// Always positive; direction is carried by `kind`
    pub amount: Money,

    /// Display string (counterparty, reference or user text)
    pub description: String,

    #[serde(rename = "type")]
    pub kind: TransactionType,

    /// Free-text category (manual entries only)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub category: Option<String>,

    /// When the transaction was recorded
    pub date: DateTime<Utc>,

    #[serde(default)]
    pub source: TransactionSource,
}

impl Transaction {
    /// Create a new transaction dated now
    pub fn new(
        kind: TransactionType,
        amount: Money,
        description: impl Into<String>,
        source: TransactionSource,
    ) -> Self {
        Self {
            id: TransactionId::new(),
            amount,
            description: description.into(),
            kind,
            category: None,
            date: Utc::now(),
            source,
        }
    }

    /// Create a manually entered transaction
    pub fn manual(
        kind: TransactionType,
        amount: Money,
        description: impl Into<String>,
        category: Option<String>,
    ) -> Self {
        let mut txn = Self::new(kind, amount, description, TransactionSource::Manual);
        txn.category = category;
        txn
    }

    /// Create a transaction detected in an SMS message
    pub fn from_sms(kind: TransactionType, amount: Money, description: impl Into<String>) -> Self {
        Self::new(kind, amount, description, TransactionSource::Sms)
    }

    pub fn is_income(&self) -> bool {
        self.kind.is_income()
    }

    pub fn is_from_sms(&self) -> bool {
        self.source == TransactionSource::Sms
    }

    /// Amount with the sign of its direction (expenses negative)
    pub fn signed_amount(&self) -> Money {
        match self.kind {
            TransactionType::Income => self.amount,
            TransactionType::Expense => -self.amount,
        }
    }

    /// Validate the transaction
    pub fn validate(&self) -> Result<(), TransactionValidationError> {
        if !self.amount.is_positive() {
            return Err(TransactionValidationError::NonPositiveAmount(self.amount));
        }

        if self.amount > Money::MAX {
            return Err(TransactionValidationError::AmountTooLarge(self.amount));
        }

        if self.description.trim().is_empty() {
            return Err(TransactionValidationError::EmptyDescription);
        }

        Ok(())
    }
}

impl fmt::Display for Transaction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} {} {}",
            self.date.format("%Y-%m-%d"),
            self.description,
            self.signed_amount()
        )
    }
}

/// Validation errors for transactions
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TransactionValidationError {
    NonPositiveAmount(Money),
    AmountTooLarge(Money),
    EmptyDescription,
}

impl fmt::Display for TransactionValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NonPositiveAmount(amount) => {
                write!(f, "Amount must be greater than zero (got {})", amount)
            }
            Self::AmountTooLarge(amount) => {
                write!(f, "Amount {} exceeds the maximum of {}", amount, Money::MAX)
            }
            Self::EmptyDescription => write!(f, "Description cannot be empty"),
        }
    }
}

impl std::error::Error for TransactionValidationError {}
