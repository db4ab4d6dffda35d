//! ezlog: insert and remove tagged console.log statements
//!
//! Editors call this with the document path, the selection and optionally a
//! saved symbol outline; it can also be used directly from a shell.

use anyhow::Result;
use clap::{Parser, Subcommand};
use owo_colors::OwoColorize;
use std::path::PathBuf;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use ezlog::logline::{Position, Range};

mod commands;

#[derive(Parser)]
#[command(name = "ezlog")]
#[command(about = "Insert and remove tagged console.log statements", long_about = None)]
#[command(version)]
struct Cli {
    /// Settings file (defaults to the platform config directory)
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// Print debug diagnostics to stderr
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Insert a log statement for the selected expression
    Insert {
        /// File to edit
        file: String,

        /// Selected range, 1-based: LINE:COL-LINE:COL
        #[arg(long, short, conflicts_with_all = ["line", "expr"])]
        selection: Option<Range>,

        /// Cursor line (1-based), used with --expr
        #[arg(long, short, requires = "expr")]
        line: Option<Position>,

        /// Expression to log, used with --line
        #[arg(long, short, requires = "line")]
        expr: Option<String>,

        /// Symbol outline as JSON (LSP DocumentSymbol array)
        #[arg(long, short)]
        outline: Option<PathBuf>,

        /// Workspace label (defaults to the enclosing repository name)
        #[arg(long)]
        label: Option<String>,

        /// Identifier to use instead of the configured one
        #[arg(long, short)]
        tag: Option<String>,

        /// Show what would be inserted without changing the file
        #[arg(short = 'n', long)]
        dry_run: bool,

        /// Print the statement and insertion line as JSON without changing the file
        #[arg(long, conflicts_with = "dry_run")]
        json: bool,
    },

    /// Remove all tagged log statements from a file
    Remove {
        /// File to edit
        file: String,

        /// Identifier to use instead of the configured one
        #[arg(long, short)]
        tag: Option<String>,

        /// Show what would be removed without changing the file
        #[arg(short = 'n', long)]
        dry_run: bool,

        /// Print the result as JSON without changing the file
        #[arg(long, conflicts_with = "dry_run")]
        json: bool,
    },

    /// Show the innermost symbol containing a position
    Locate {
        /// Symbol outline as JSON (LSP DocumentSymbol array)
        #[arg(long, short)]
        outline: PathBuf,

        /// Position, 1-based: LINE[:COL]
        #[arg(long, short)]
        line: Position,
    },

    /// Show or set the log identifier
    Tag {
        /// New identifier (at most 10 characters)
        new_tag: Option<String>,

        /// Restore the default identifier
        #[arg(long, conflicts_with = "new_tag")]
        reset: bool,
    },
}

fn init_tracing(verbose: bool) {
    let default_filter = if verbose { "ezlog=debug,warn" } else { "warn" };
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| default_filter.into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    match cli.command {
        Commands::Insert {
            file,
            selection,
            line,
            expr,
            outline,
            label,
            tag,
            dry_run,
            json,
        } => {
            let target = match (selection, line, expr) {
                (Some(range), _, _) => commands::insert::Target::Selection(range),
                (None, Some(line), Some(text)) => commands::insert::Target::Expression {
                    line: line.line,
                    text,
                },
                _ => anyhow::bail!("Either --selection or --line with --expr must be provided"),
            };

            if dry_run {
                println!("{}", "(DRY-RUN MODE - no changes will be made)".blue());
            }
            let options = commands::insert::InsertOptions {
                outline,
                label,
                tag,
                config: cli.config,
                dry_run,
                json,
            };
            commands::insert::execute(&file, &target, &options)?;
        }

        Commands::Remove {
            file,
            tag,
            dry_run,
            json,
        } => {
            if dry_run {
                println!("{}", "(DRY-RUN MODE - no changes will be made)".blue());
            }
            let options = commands::remove::RemoveOptions {
                tag,
                config: cli.config,
                dry_run,
                json,
            };
            commands::remove::execute(&file, &options)?;
        }

        Commands::Locate { outline, line } => {
            commands::locate::execute(&outline, line)?;
        }

        Commands::Tag { new_tag, reset } => {
            commands::tag::execute(new_tag.as_deref(), reset, cli.config.as_deref())?;
        }
    }

    Ok(())
}
