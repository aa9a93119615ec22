use anyhow::Result;
use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use smsledger::audit::AuditLogger;
use smsledger::cli::{
    handle_sms_command, handle_transaction_command, SmsCommands, SmsContext, TransactionCommands,
};
use smsledger::config::{LedgerPaths, Settings};
use smsledger::notify::ConsoleNotifier;
use smsledger::services::Ledger;
use smsledger::storage::JsonFileStore;

#[derive(Parser)]
#[command(
    name = "smsledger",
    version,
    about = "Personal ledger fed by bank and UPI SMS notifications",
    long_about = "smsledger keeps a ledger of income and expenses. Transactions can be \
                  entered by hand or detected in the text of bank and UPI SMS \
                  notifications, with repeated messages recognised and skipped."
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    #[command(flatten)]
    Transaction(TransactionCommands),

    /// SMS detection commands
    #[command(subcommand)]
    Sms(SmsCommands),

    /// Show recent additions and deletions from the audit log
    History {
        /// Number of entries to show
        #[arg(short, long, default_value = "20")]
        limit: usize,
    },

    /// Initialize the data directory
    Init,

    /// Show current configuration and paths
    Config,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Initialize paths and settings
    let paths = LedgerPaths::new()?;
    let mut settings = Settings::load_or_create(&paths)?;
    init_tracing(&settings.log_level);

    let store = JsonFileStore::from_paths(&paths)?;
    let notifier = ConsoleNotifier;

    let mut ledger = Ledger::open(&store, &notifier)?.with_currency_symbol(&settings.currency_symbol);
    if settings.audit_enabled {
        ledger = ledger.with_audit(AuditLogger::new(paths.audit_log()));
    }

    match cli.command {
        Some(Commands::Transaction(cmd)) => {
            handle_transaction_command(&mut ledger, &settings, cmd)?;
        }
        Some(Commands::Sms(cmd)) => {
            let ctx = SmsContext {
                paths: &paths,
                settings: &mut settings,
                store: &store,
                notifier: &notifier,
                ledger: &mut ledger,
            };
            handle_sms_command(ctx, cmd)?;
        }
        Some(Commands::History { limit }) => {
            let entries = AuditLogger::new(paths.audit_log()).read_recent(limit)?;
            if entries.is_empty() {
                println!("No audit entries found.");
            }
            for entry in entries {
                println!("{}", entry.format_human_readable());
            }
        }
        Some(Commands::Init) => {
            println!("Initializing smsledger at: {}", paths.base_dir().display());
            paths.ensure_directories()?;
            settings.save(&paths)?;
            ledger.flush()?;
            println!("Initialization complete!");
            println!();
            println!("Run 'smsledger sms enable' to turn on SMS detection.");
        }
        Some(Commands::Config) => {
            println!("smsledger Configuration");
            println!("=======================");
            println!("Base directory:   {}", paths.base_dir().display());
            println!("Data directory:   {}", paths.data_dir().display());
            println!("Settings file:    {}", paths.settings_file().display());
            println!("Audit log:        {}", paths.audit_log().display());
            println!();
            println!("Settings:");
            println!("  Currency symbol: {}", settings.currency_symbol);
            println!("  Date format:     {}", settings.date_format);
            println!("  Log level:       {}", settings.log_level);
            println!("  Audit enabled:   {}", settings.audit_enabled);
            println!("  SMS detection:   {}", settings.sms_detection_enabled);
        }
        None => {
            println!("smsledger - Personal ledger fed by transaction SMS");
            println!();
            println!("Run 'smsledger --help' for usage information.");
        }
    }

    Ok(())
}

/// Log to stderr, filtered by RUST_LOG or the configured level
fn init_tracing(default_level: &str) {
    let env_filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));
    let _ = tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_target(true)
        .with_writer(std::io::stderr)
        .try_init();
}
