//! Transaction CLI commands
//!
//! Implements CLI commands for manual entry and ledger inspection.

use clap::Subcommand;

use crate::config::Settings;
use crate::display::{format_summary, format_transaction_details, format_transaction_register};
use crate::error::{LedgerError, LedgerResult};
use crate::models::{Money, TransactionSource, TransactionType};
use crate::services::{Ledger, NewTransaction, TransactionFilter};

/// Ledger subcommands
#[derive(Subcommand)]
pub enum TransactionCommands {
    /// Add a transaction by hand
    Add {
        /// income or expense
        kind: TransactionType,
        /// Amount (e.g., "250", "1,500.50", "₹99")
        amount: String,
        /// What the transaction was for
        description: String,
        /// Optional category label
        #[arg(short, long)]
        category: Option<String>,
    },
    /// List transactions, newest first
    List {
        /// Number of transactions to show
        #[arg(short, long, default_value = "20")]
        limit: usize,
        /// Filter by type (income, expense)
        #[arg(short = 't', long = "type")]
        kind: Option<TransactionType>,
        /// Filter by source (manual, sms)
        #[arg(short, long)]
        source: Option<TransactionSource>,
    },
    /// Show transaction details
    Show {
        /// Transaction ID (full or txn-xxxxxxxx)
        id: String,
    },
    /// Delete a transaction
    Delete {
        /// Transaction ID (full or txn-xxxxxxxx)
        id: String,
    },
    /// Show income, expense and balance
    Summary,
}

/// Handle a transaction command
pub fn handle_transaction_command(
    ledger: &mut Ledger<'_>,
    settings: &Settings,
    cmd: TransactionCommands,
) -> LedgerResult<()> {
    let symbol = settings.currency_symbol.as_str();
    let date_format = settings.date_format.as_str();

    match cmd {
        TransactionCommands::Add {
            kind,
            amount,
            description,
            category,
        } => {
            let amount = Money::parse(&amount).map_err(|e| {
                LedgerError::Validation(format!(
                    "Invalid amount format: '{}'. Use format like '250' or '1,500.50'. Error: {}",
                    amount, e
                ))
            })?;

            let txn = ledger.add_manual(NewTransaction {
                kind,
                amount,
                description,
                category,
            })?;

            println!("  ID: {}", txn.id.short());
        }

        TransactionCommands::List {
            limit,
            kind,
            source,
        } => {
            let mut filter = TransactionFilter::new().limit(limit);
            if let Some(kind) = kind {
                filter = filter.kind(kind);
            }
            if let Some(source) = source {
                filter = filter.source(source);
            }

            let transactions = ledger.list(&filter);
            print!(
                "{}",
                format_transaction_register(transactions.iter().copied(), symbol, date_format)
            );
            println!("\nShowing {} of {} transactions", transactions.len(), ledger.len());
        }

        TransactionCommands::Show { id } => {
            let txn = ledger
                .find(&id)
                .ok_or_else(|| LedgerError::transaction_not_found(&id))?;

            print!("{}", format_transaction_details(txn, symbol, date_format));
        }

        TransactionCommands::Delete { id } => {
            let txn_id = ledger
                .find(&id)
                .map(|txn| txn.id)
                .ok_or_else(|| LedgerError::transaction_not_found(&id))?;

            if let Some(deleted) = ledger.delete(txn_id) {
                println!(
                    "  {} {} {}",
                    deleted.id.short(),
                    deleted.description,
                    deleted.amount.format_with_symbol(symbol)
                );
            }
        }

        TransactionCommands::Summary => {
            print!("{}", format_summary(&ledger.summary(), ledger.len(), symbol));
        }
    }

    Ok(())
}
