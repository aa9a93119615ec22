//! Derived ledger totals

use serde::Serialize;

use super::money::Money;
use super::transaction::{Transaction, TransactionType};

/// Income, expense and balance across a set of transactions
///
/// Never stored; always recomputed from the transactions it describes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
pub struct TransactionSummary {
    pub total_income: Money,
    pub total_expense: Money,
    pub balance: Money,
}

impl TransactionSummary {
    /// Fold a collection of transactions into totals
    pub fn from_transactions<'a, I>(transactions: I) -> Self
    where
        I: IntoIterator<Item = &'a Transaction>,
    {
        let (total_income, total_expense) = transactions.into_iter().fold(
            (Money::zero(), Money::zero()),
            |(income, expense), txn| match txn.kind {
                TransactionType::Income => (income + txn.amount, expense),
                TransactionType::Expense => (income, expense + txn.amount),
            },
        );

        Self {
            total_income,
            total_expense,
            balance: total_income - total_expense,
        }
    }
}
