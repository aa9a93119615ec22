//! SMS CLI commands
//!
//! Implements CLI commands for granting SMS detection and feeding messages
//! through the detection engine.

use std::fs;
use std::path::PathBuf;

use clap::Subcommand;

use crate::config::{LedgerPaths, Settings};
use crate::display::format_scan_report;
use crate::error::{LedgerError, LedgerResult};
use crate::notify::Notifier;
use crate::services::{Ledger, SmsService};
use crate::sms::analyze;
use crate::storage::KeyValueStore;

/// SMS subcommands
#[derive(Subcommand)]
pub enum SmsCommands {
    /// Allow smsledger to read SMS messages
    Enable,
    /// Detect a transaction in one message and add it to the ledger
    Process {
        /// Full SMS text (quote it)
        message: String,
    },
    /// Process a file of messages, one per line
    Import {
        /// Path to the message file
        file: PathBuf,
    },
    /// Show what would be detected, without recording anything
    Check {
        /// Full SMS text (quote it)
        message: String,
    },
}

/// Everything an SMS command needs from the running application
pub struct SmsContext<'a, 'l> {
    pub paths: &'a LedgerPaths,
    pub settings: &'a mut Settings,
    pub store: &'a dyn KeyValueStore,
    pub notifier: &'a dyn Notifier,
    pub ledger: &'a mut Ledger<'l>,
}

/// Handle an SMS command
pub fn handle_sms_command(ctx: SmsContext<'_, '_>, cmd: SmsCommands) -> LedgerResult<()> {
    if let SmsCommands::Enable = cmd {
        if !ctx.settings.sms_detection_enabled {
            ctx.settings.sms_detection_enabled = true;
            ctx.settings.save(ctx.paths)?;
            tracing::info!("SMS detection enabled");
        }
        ctx.notifier
            .notify("Permission Granted", "SMS detection is now enabled.", false);
        return Ok(());
    }

    if !ctx.settings.sms_detection_enabled {
        return Err(LedgerError::Sms(
            "SMS detection is not enabled. Run 'smsledger sms enable' first.".into(),
        ));
    }

    match cmd {
        SmsCommands::Enable => {}

        SmsCommands::Process { message } => {
            let mut service = SmsService::open(ctx.store, ctx.notifier)?;
            if let Some(txn) = service.process_message(ctx.ledger, &message).transaction() {
                println!("  ID: {}", txn.id.short());
            }
        }

        SmsCommands::Import { file } => {
            let contents = fs::read_to_string(&file).map_err(|e| {
                LedgerError::Io(format!("Failed to read {}: {}", file.display(), e))
            })?;
            let messages = contents.lines().map(str::trim).filter(|line| !line.is_empty());

            let mut service = SmsService::open(ctx.store, ctx.notifier)?;
            let report = service.scan(ctx.ledger, messages);
            print!("{}", format_scan_report(&report));
        }

        SmsCommands::Check { message } => match analyze(&message) {
            Ok(detection) => {
                println!("Transaction detected:");
                println!("  Type:        {}", detection.kind);
                println!(
                    "  Amount:      {}",
                    detection.amount.format_with_symbol(&ctx.settings.currency_symbol)
                );
                println!("  Matched:     {}", detection.raw_amount.raw);
                println!("  Description: {}", detection.description);
            }
            Err(reason) => println!("No transaction: {}", reason),
        },
    }

    Ok(())
}
