use std::path::PathBuf;

use anyhow::Result;
use clap::{Parser, Subcommand};

use budget_ledger::cli::{
    handle_analyze_command, handle_audit, handle_backup_command, handle_balance, handle_export,
    handle_income, handle_list, handle_load, handle_purchase, handle_save, AnalyzeCommands,
    BackupCommands, Session,
};
use budget_ledger::config::paths::{LedgerPaths, DATA_DIR_ENV};
use budget_ledger::config::settings::Settings;
use budget_ledger::export::ExportFormat;
use budget_ledger::models::Category;

#[derive(Parser)]
#[command(
    name = "budget",
    author = "Kaylee Beyene",
    version,
    about = "Categorized personal expense ledger",
    long_about = "budget keeps a running balance and a list of categorized purchases \
                  (Food, Clothes, Entertainment, Other), saves them to a plain text \
                  file and sorts your spending by price or by category."
)]
struct Cli {
    /// Directory holding the ledger, settings, backups and audit log
    #[arg(long, global = true, env = DATA_DIR_ENV)]
    data_dir: Option<PathBuf>,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Add income to the balance
    Income {
        /// Amount, e.g. 100 or 12.50
        #[arg(allow_hyphen_values = true)]
        amount: String,
    },

    /// Record a purchase
    #[command(alias = "buy")]
    Purchase {
        /// Category code (1-4) or name
        category: String,
        /// What was bought
        name: String,
        /// Price, e.g. 9.99 or $9.99
        price: String,
    },

    /// Show the balance
    Balance,

    /// List purchases in the order they were added
    #[command(alias = "ls")]
    List {
        /// Only list one category (code 1-4 or name)
        category: Option<String>,
    },

    /// Sorted views over the recorded purchases
    #[command(subcommand, alias = "sort")]
    Analyze(AnalyzeCommands),

    /// Save the ledger to a file
    Save {
        /// Target file
        file: PathBuf,
    },

    /// Merge a saved ledger file into the current one
    Load {
        /// Source file
        file: PathBuf,
        /// Skip malformed lines instead of stopping at the first one
        #[arg(long)]
        lenient: bool,
    },

    /// Backup management commands
    #[command(subcommand)]
    Backup(BackupCommands),

    /// Export the ledger as csv, json or yaml
    Export {
        /// Export format (csv, json, yaml)
        format: String,
        /// Output file (stdout if omitted)
        #[arg(short, long)]
        output: Option<PathBuf>,
        /// Write into the export directory with a timestamped name
        #[arg(long, conflicts_with = "output")]
        save: bool,
    },

    /// Show recent audit log entries
    Audit {
        /// Number of entries to show
        #[arg(short, long, default_value = "20")]
        limit: usize,
    },

    /// Show current configuration and paths
    Config,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let paths = match cli.data_dir {
        Some(dir) => LedgerPaths::with_base_dir(dir),
        None => LedgerPaths::new()?,
    };
    let settings = Settings::load_or_create(&paths)?;

    let Some(command) = cli.command else {
        println!("budget - categorized personal expense ledger");
        println!();
        println!("Run 'budget --help' for usage information.");
        return Ok(());
    };

    match command {
        Commands::Audit { limit } => handle_audit(&paths, limit)?,
        Commands::Backup(cmd) => handle_backup_command(&paths, &settings, cmd)?,
        Commands::Config => print_config(&paths, &settings),
        command => {
            let mut session = Session::open(paths, settings)?;
            run(&mut session, command)?;
        }
    }

    Ok(())
}

fn run(session: &mut Session, command: Commands) -> Result<()> {
    match command {
        Commands::Income { amount } => handle_income(session, &amount)?,
        Commands::Purchase {
            category,
            name,
            price,
        } => handle_purchase(session, &category, &name, &price)?,
        Commands::Balance => handle_balance(session)?,
        Commands::List { category } => handle_list(session, category.as_deref())?,
        Commands::Analyze(cmd) => handle_analyze_command(session, cmd)?,
        Commands::Save { file } => handle_save(session, &file)?,
        Commands::Load { file, lenient } => handle_load(session, &file, lenient)?,
        Commands::Export {
            format,
            output,
            save,
        } => {
            let format: ExportFormat = format.parse()?;
            handle_export(session, format, output, save)?;
        }
        Commands::Audit { .. } | Commands::Backup(_) | Commands::Config => {}
    }

    Ok(())
}

fn print_config(paths: &LedgerPaths, settings: &Settings) {
    println!("budget-ledger Configuration");
    println!("===========================");
    println!("Base directory:   {}", paths.base_dir().display());
    println!("Ledger file:      {}", paths.ledger_file().display());
    println!("Backup directory: {}", paths.backup_dir().display());
    println!("Export directory: {}", paths.export_dir().display());
    println!("Audit log:        {}", paths.audit_log().display());
    println!();
    println!("Settings:");
    println!("  Currency symbol:  {}", settings.currency_symbol);
    println!("  Load mode:        {:?}", settings.load_mode);
    println!("  Backups kept:     {}", settings.backup_retention.keep);
    println!("  Audit enabled:    {}", settings.audit_enabled);
    println!();
    println!("Categories:");
    for category in Category::all() {
        println!("  {}. {}", category.code(), category.display_name());
    }
}
