//! Transaction ledger
//!
//! Holds every confirmed transaction, newest first, persisted through a
//! `KeyValueStore`. Transactions are never edited; they are only added or
//! deleted. Totals are always folded from the current collection.
//!
//! Persistence failures during `add`/`delete` are logged and swallowed: the
//! in-memory collection stays authoritative for the session. Use `flush` to
//! observe the save result directly.

use crate::audit::{AuditEntry, AuditLogger, EntityType};
use crate::error::{LedgerError, LedgerResult};
use crate::models::{
    Money, Transaction, TransactionId, TransactionSource, TransactionSummary, TransactionType,
};
use crate::notify::Notifier;
use crate::storage::{load_as, save_as, KeyValueStore, TRANSACTIONS_KEY};

/// Called after every change with the full collection and its totals
pub type Observer<'a> = Box<dyn Fn(&[Transaction], &TransactionSummary) + 'a>;

/// Options for filtering transactions
#[derive(Debug, Clone, Default)]
pub struct TransactionFilter {
    pub kind: Option<TransactionType>,
    pub source: Option<TransactionSource>,
    /// Maximum number of transactions to return
    pub limit: Option<usize>,
}

impl TransactionFilter {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn kind(mut self, kind: TransactionType) -> Self {
        self.kind = Some(kind);
        self
    }

    pub fn source(mut self, source: TransactionSource) -> Self {
        self.source = Some(source);
        self
    }

    pub fn limit(mut self, limit: usize) -> Self {
        self.limit = Some(limit);
        self
    }

    fn matches(&self, txn: &Transaction) -> bool {
        self.kind.map_or(true, |kind| txn.kind == kind)
            && self.source.map_or(true, |source| txn.source == source)
    }
}

/// Input for a manually entered transaction
#[derive(Debug, Clone)]
pub struct NewTransaction {
    pub kind: TransactionType,
    pub amount: Money,
    pub description: String,
    pub category: Option<String>,
}

/// The transaction collection and its persistence
pub struct Ledger<'a> {
    store: &'a dyn KeyValueStore,
    notifier: &'a dyn Notifier,
    audit: Option<AuditLogger>,
    currency_symbol: String,
    transactions: Vec<Transaction>,
    observers: Vec<Observer<'a>>,
}

impl<'a> Ledger<'a> {
    /// Load the ledger from the store
    ///
    /// A missing key is an empty ledger; unreadable data, or a stored entry
    /// that fails validation, is an error.
    pub fn open(store: &'a dyn KeyValueStore, notifier: &'a dyn Notifier) -> LedgerResult<Self> {
        let transactions: Vec<Transaction> = load_as(store, TRANSACTIONS_KEY)?.unwrap_or_default();
        for txn in &transactions {
            txn.validate().map_err(|e| {
                LedgerError::Storage(format!("Invalid stored transaction {}: {}", txn.id, e))
            })?;
        }
        tracing::debug!(count = transactions.len(), "Loaded ledger");

        Ok(Self {
            store,
            notifier,
            audit: None,
            currency_symbol: "₹".to_string(),
            transactions,
            observers: Vec::new(),
        })
    }

    /// Record creates and deletes in an audit log
    pub fn with_audit(mut self, logger: AuditLogger) -> Self {
        self.audit = Some(logger);
        self
    }

    pub fn with_currency_symbol(mut self, symbol: impl Into<String>) -> Self {
        self.currency_symbol = symbol.into();
        self
    }

    pub fn currency_symbol(&self) -> &str {
        &self.currency_symbol
    }

    /// Register a callback run after every change
    pub fn subscribe(&mut self, observer: impl Fn(&[Transaction], &TransactionSummary) + 'a) {
        self.observers.push(Box::new(observer));
    }

    /// All transactions, newest first
    pub fn transactions(&self) -> &[Transaction] {
        &self.transactions
    }

    pub fn len(&self) -> usize {
        self.transactions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.transactions.is_empty()
    }

    /// Totals over the current collection
    pub fn summary(&self) -> TransactionSummary {
        TransactionSummary::from_transactions(&self.transactions)
    }

    /// Transactions matching a filter, newest first
    pub fn list(&self, filter: &TransactionFilter) -> Vec<&Transaction> {
        let matching = self.transactions.iter().filter(|txn| filter.matches(txn));
        match filter.limit {
            Some(limit) => matching.take(limit).collect(),
            None => matching.collect(),
        }
    }

    pub fn get(&self, id: TransactionId) -> Option<&Transaction> {
        self.transactions.iter().find(|txn| txn.id == id)
    }

    /// Find a transaction by full ID or by its short `txn-xxxxxxxx` form
    pub fn find(&self, identifier: &str) -> Option<&Transaction> {
        if let Ok(id) = identifier.parse::<TransactionId>() {
            return self.get(id);
        }

        let identifier = identifier.trim();
        self.transactions
            .iter()
            .find(|txn| txn.id.short() == identifier)
    }

    /// Prepend a transaction, persist, and notify observers
    pub fn add(&mut self, txn: Transaction) {
        self.log_audit(AuditEntry::create(
            EntityType::Transaction,
            txn.id.to_string(),
            Some(txn.description.clone()),
            &txn,
        ));
        self.transactions.insert(0, txn);
        self.changed();
    }

    /// Validate and add a manually entered transaction
    pub fn add_manual(&mut self, input: NewTransaction) -> LedgerResult<Transaction> {
        let category = input
            .category
            .map(|c| c.trim().to_string())
            .filter(|c| !c.is_empty());
        let txn = Transaction::manual(input.kind, input.amount, input.description.trim(), category);

        txn.validate()
            .map_err(|e| LedgerError::Validation(e.to_string()))?;

        self.add(txn.clone());

        let title = match txn.kind {
            TransactionType::Income => "Income Added",
            TransactionType::Expense => "Expense Added",
        };
        self.notifier.notify(
            title,
            &format!(
                "{}: {}",
                txn.description,
                txn.amount.format_with_symbol(&self.currency_symbol)
            ),
            false,
        );

        Ok(txn)
    }

    /// Remove a transaction by ID
    ///
    /// Returns the removed transaction, or `None` (and changes nothing) when
    /// the ID is not in the ledger.
    pub fn delete(&mut self, id: TransactionId) -> Option<Transaction> {
        let position = self.transactions.iter().position(|txn| txn.id == id)?;
        let txn = self.transactions.remove(position);

        self.log_audit(AuditEntry::delete(
            EntityType::Transaction,
            txn.id.to_string(),
            Some(txn.description.clone()),
            &txn,
        ));
        self.changed();
        self.notifier
            .notify("Transaction Deleted", "The transaction has been removed", false);

        Some(txn)
    }

    /// Save the current collection, reporting failure
    pub fn flush(&self) -> LedgerResult<()> {
        save_as(self.store, TRANSACTIONS_KEY, &self.transactions)
    }

    fn changed(&self) {
        if let Err(e) = self.flush() {
            tracing::error!(error = %e, "Failed to save transactions");
        }

        if !self.observers.is_empty() {
            let summary = self.summary();
            for observer in &self.observers {
                observer(&self.transactions, &summary);
            }
        }
    }

    fn log_audit(&self, entry: AuditEntry) {
        if let Some(audit) = &self.audit {
            if let Err(e) = audit.log(&entry) {
                tracing::error!(error = %e, "Failed to write audit entry");
            }
        }
    }
}
