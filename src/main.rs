use std::path::PathBuf;

use anyhow::Result;
use clap::{Parser, Subcommand};
use log::debug;

use readlog::cli::{
    handle_audit_command, handle_config_command, handle_entry_command, handle_export_command,
    handle_import_command, handle_prompt_command, handle_vocab_command, print_dashboard,
    ConfigCommands, EntryCommands, ExportFormat, VocabCommands,
};
use readlog::config::paths::{ReadlogPaths, DATA_DIR_ENV};
use readlog::config::settings::Settings;
use readlog::storage::Storage;

#[derive(Parser)]
#[command(
    name = "readlog",
    version,
    about = "Daily foreign-language news reading log",
    long_about = "readlog keeps one entry per article you read: the excerpt, your own \
                  translation, the corrected version from an assistant, summaries and \
                  the vocabulary you picked up. It builds the assistant prompt for you."
)]
struct Cli {
    /// Show debug logging (RUST_LOG overrides)
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Directory holding settings, entries and the audit log
    #[arg(long, global = true, env = DATA_DIR_ENV)]
    data_dir: Option<PathBuf>,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    #[command(flatten)]
    Entry(EntryCommands),

    /// Manage vocabulary terms
    #[command(subcommand)]
    Vocab(VocabCommands),

    /// Print the assistant prompt for an entry
    Prompt {
        /// Entry ID or unique prefix
        id: String,
        /// Copy to the clipboard instead of printing
        #[arg(short, long)]
        copy: bool,
    },

    /// Export all entries to a file
    Export {
        /// Output format
        #[arg(value_enum)]
        format: ExportFormat,
        /// Output file path
        output: PathBuf,
        /// Pretty-print JSON output
        #[arg(long)]
        pretty: bool,
    },

    /// Import entries from a JSON or YAML export
    Import {
        /// Export file (.json, .yaml or .yml)
        file: PathBuf,
    },

    /// Show recent changes
    Audit {
        /// Number of records to show
        #[arg(short = 'n', long, default_value = "20")]
        limit: usize,
    },

    /// Show or change settings
    #[command(subcommand)]
    Config(ConfigCommands),

    /// Create the data directory and settings file
    Init,
}

fn initialize_logger(verbose: bool) {
    let default_level = if verbose { "debug" } else { "warn" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(default_level))
        .format_timestamp(None)
        .format_module_path(verbose)
        .init();
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    initialize_logger(cli.verbose);

    let paths = match cli.data_dir {
        Some(dir) => ReadlogPaths::with_base_dir(dir),
        None => ReadlogPaths::new()?,
    };
    let settings = Settings::load_or_create(&paths)?;
    debug!("Using base directory {}", paths.base_dir().display());

    let storage = Storage::new(paths.clone(), &settings)?;

    match cli.command {
        Some(Commands::Entry(cmd)) => handle_entry_command(&storage, &settings, cmd)?,
        Some(Commands::Vocab(cmd)) => handle_vocab_command(&storage, cmd)?,
        Some(Commands::Prompt { id, copy }) => {
            handle_prompt_command(&storage, &settings, &id, copy)?
        }
        Some(Commands::Export {
            format,
            output,
            pretty,
        }) => handle_export_command(&storage, format, &output, pretty)?,
        Some(Commands::Import { file }) => handle_import_command(&storage, &file)?,
        Some(Commands::Audit { limit }) => handle_audit_command(&storage, limit)?,
        Some(Commands::Config(cmd)) => handle_config_command(&storage, &settings, cmd)?,
        Some(Commands::Init) => {
            if paths.is_initialized() {
                println!("readlog is already initialized at: {}", paths.base_dir().display());
                return Ok(());
            }
            paths.ensure_directories()?;
            settings.save(&paths)?;
            println!("Initialized readlog at: {}", paths.base_dir().display());
            println!();
            println!("Run 'readlog new --title \"...\"' to record your first article.");
        }
        None => {
            print_dashboard(&storage, &settings)?;
            println!();
            println!("Run 'readlog --help' for usage information.");
        }
    }

    Ok(())
}
