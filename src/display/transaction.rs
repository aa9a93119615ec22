//! Transaction display formatting
//!
//! Provides utilities for formatting transactions for terminal display,
//! including register views and detail blocks.

use chrono::Local;

use crate::models::{Transaction, TransactionType};

/// Signed amount with currency symbol: income positive, expense negative
pub fn format_signed_amount(txn: &Transaction, symbol: &str) -> String {
    match txn.kind {
        TransactionType::Income => format!("+{}", txn.amount.format_with_symbol(symbol)),
        TransactionType::Expense => format!("-{}", txn.amount.format_with_symbol(symbol)),
    }
}

/// Format a single transaction for display (register row)
pub fn format_transaction_row(txn: &Transaction, symbol: &str, date_format: &str) -> String {
    format!(
        "{:12} {:16} {:30} {:>14} {}",
        txn.id.short(),
        txn.date.with_timezone(&Local).format(date_format),
        truncate(&txn.description, 30),
        format_signed_amount(txn, symbol),
        txn.source
    )
}

/// Format a list of transactions as a register
pub fn format_transaction_register<'a, I>(transactions: I, symbol: &str, date_format: &str) -> String
where
    I: IntoIterator<Item = &'a Transaction>,
{
    let mut rows = transactions.into_iter().peekable();
    if rows.peek().is_none() {
        return "No transactions found.\n".to_string();
    }

    let mut output = String::new();
    output.push_str(&format!(
        "{:12} {:16} {:30} {:>14} {}\n",
        "ID", "Date", "Description", "Amount", "Source"
    ));
    output.push_str(&"-".repeat(82));
    output.push('\n');

    for txn in rows {
        output.push_str(&format_transaction_row(txn, symbol, date_format));
        output.push('\n');
    }

    output
}

/// Format transaction details for display
pub fn format_transaction_details(txn: &Transaction, symbol: &str, date_format: &str) -> String {
    let mut output = String::new();

    output.push_str(&format!("Transaction: {}\n", txn.id));
    output.push_str(&format!(
        "Date:        {}\n",
        txn.date.with_timezone(&Local).format(date_format)
    ));
    output.push_str(&format!("Type:        {}\n", txn.kind));
    output.push_str(&format!("Amount:      {}\n", txn.amount.format_with_symbol(symbol)));
    output.push_str(&format!("Description: {}\n", txn.description));

    if let Some(category) = &txn.category {
        output.push_str(&format!("Category:    {}\n", category));
    }

    output.push_str(&format!("Source:      {}\n", txn.source));

    output
}

/// Truncate a string to a maximum number of characters
fn truncate(s: &str, max_len: usize) -> String {
    if s.chars().count() <= max_len {
        s.to_string()
    } else {
        let kept: String = s.chars().take(max_len.saturating_sub(3)).collect();
        format!("{}...", kept)
    }
}
