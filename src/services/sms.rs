//! SMS detection service
//!
//! Connects the detection engine to the ledger: accepted messages become
//! ledger entries, every outcome is reported through the notifier, and the
//! dedup index is persisted after each newly seen message.

use crate::error::LedgerResult;
use crate::models::Transaction;
use crate::notify::Notifier;
use crate::sms::{DedupIndex, ProcessOutcome, SmsEngine};
use crate::storage::{load_as, save_as, KeyValueStore, SMS_HASHES_KEY};

use super::ledger::Ledger;

/// Counts from processing a batch of messages
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ScanReport {
    pub scanned: usize,
    pub detected: usize,
    pub duplicates: usize,
    pub rejected: usize,
}

/// Service for turning SMS text into ledger transactions
pub struct SmsService<'a> {
    engine: SmsEngine,
    store: &'a dyn KeyValueStore,
    notifier: &'a dyn Notifier,
}

impl<'a> SmsService<'a> {
    /// Restore the dedup index from the store
    pub fn open(store: &'a dyn KeyValueStore, notifier: &'a dyn Notifier) -> LedgerResult<Self> {
        let index: DedupIndex = load_as(store, SMS_HASHES_KEY)?.unwrap_or_default();
        tracing::debug!(keys = index.len(), "Loaded SMS dedup index");

        Ok(Self {
            engine: SmsEngine::with_index(index),
            store,
            notifier,
        })
    }

    pub fn index(&self) -> &DedupIndex {
        self.engine.index()
    }

    /// Process one message, recording and announcing the outcome
    pub fn process_message(&mut self, ledger: &mut Ledger<'_>, message: &str) -> ProcessOutcome {
        let outcome = self.process_quietly(ledger, message);

        match &outcome {
            ProcessOutcome::Accepted(txn) => self.announce(ledger, txn),
            ProcessOutcome::Duplicate => self.notifier.notify(
                "Already Processed",
                "This SMS has already been processed.",
                true,
            ),
            ProcessOutcome::Rejected(_) => self.notifier.notify(
                "No Transaction Found",
                "The SMS doesn't contain recognizable transaction information.",
                false,
            ),
        }

        outcome
    }

    /// Process a batch of messages
    ///
    /// Each detected transaction is announced. Duplicates and rejections
    /// are only counted; when nothing new is found a single completion
    /// notice is sent instead.
    pub fn scan<'m, I>(&mut self, ledger: &mut Ledger<'_>, messages: I) -> ScanReport
    where
        I: IntoIterator<Item = &'m str>,
    {
        let mut report = ScanReport::default();

        for message in messages {
            report.scanned += 1;
            match self.process_quietly(ledger, message) {
                ProcessOutcome::Accepted(txn) => {
                    report.detected += 1;
                    self.announce(ledger, &txn);
                }
                ProcessOutcome::Duplicate => report.duplicates += 1,
                ProcessOutcome::Rejected(_) => report.rejected += 1,
            }
        }

        tracing::info!(
            scanned = report.scanned,
            detected = report.detected,
            duplicates = report.duplicates,
            "SMS scan complete"
        );

        if report.detected == 0 {
            self.notifier
                .notify("Scan Complete", "No new transactions found.", false);
        }

        report
    }

    fn process_quietly(&mut self, ledger: &mut Ledger<'_>, message: &str) -> ProcessOutcome {
        let outcome = self.engine.process(message);

        if let ProcessOutcome::Accepted(txn) = &outcome {
            ledger.add(txn.clone());
            self.persist_index();
        }

        outcome
    }

    fn announce(&self, ledger: &Ledger<'_>, txn: &Transaction) {
        self.notifier.notify(
            "SMS Transaction Detected",
            &format!(
                "{}: {}",
                txn.description,
                txn.amount.format_with_symbol(ledger.currency_symbol())
            ),
            false,
        );
    }

    fn persist_index(&self) {
        if let Err(e) = save_as(self.store, SMS_HASHES_KEY, self.engine.index()) {
            tracing::error!(error = %e, "Failed to save SMS dedup index");
        }
    }
}
