//! Summary display formatting

use crate::models::TransactionSummary;
use crate::services::ScanReport;

/// Format ledger totals
pub fn format_summary(summary: &TransactionSummary, count: usize, symbol: &str) -> String {
    let mut output = String::new();

    output.push_str(&format!("Transactions: {}\n", count));
    output.push_str(&format!(
        "Income:       {:>14}\n",
        summary.total_income.format_with_symbol(symbol)
    ));
    output.push_str(&format!(
        "Expense:      {:>14}\n",
        summary.total_expense.format_with_symbol(symbol)
    ));
    output.push_str(&"-".repeat(28));
    output.push('\n');
    output.push_str(&format!(
        "Balance:      {:>14}\n",
        summary.balance.format_with_symbol(symbol)
    ));

    output
}

/// Format the result of a batch import
pub fn format_scan_report(report: &ScanReport) -> String {
    format!(
        "Scanned {} messages: {} detected, {} duplicates, {} without a transaction\n",
        report.scanned, report.detected, report.duplicates, report.rejected
    )
}
