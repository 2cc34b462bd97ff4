//! readtime CLI - Estimated reading time for text and HTML files.

use anyhow::Result;
use clap::{CommandFactory, Parser, Subcommand};
use std::path::PathBuf;

mod commands;
mod display;
mod logging;

use commands::estimate::EstimateFlags;
use display::Format;

#[derive(Parser)]
#[command(name = "readtime")]
#[command(about = "Estimated reading time for text and HTML files", long_about = None)]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Verbosity level (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    /// Quiet mode (only log errors)
    #[arg(short, long, global = true)]
    quiet: bool,

    /// Settings file. Defaults to the platform configuration directory.
    #[arg(long, global = true)]
    config: Option<PathBuf>,
}

#[derive(Subcommand)]
enum Commands {
    /// Estimate the reading time of files or stdin
    Estimate {
        /// Files to read. Several files are estimated as one document. Reads stdin when omitted.
        files: Vec<PathBuf>,

        /// Average words read per minute
        #[arg(short, long)]
        wpm: Option<u32>,

        /// Include seconds in the estimate
        #[arg(short, long)]
        seconds: bool,

        /// Print only the time, without the trailing "read"
        #[arg(short, long)]
        time_only: bool,

        /// Abbreviate minute/second as min/sec
        #[arg(short, long)]
        abbreviated: bool,

        /// Render right to left
        #[arg(long, conflicts_with = "ltr")]
        rtl: bool,

        /// Render left to right, even for a right-to-left locale
        #[arg(long)]
        ltr: bool,

        /// Locale for unit words and reading direction (e.g., en, es, ar)
        #[arg(short, long)]
        locale: Option<String>,

        /// Output format
        #[arg(short, long, value_enum, default_value = "text")]
        format: Format,
    },

    /// List available locales
    Locales,

    /// Show or initialize the settings file
    Config {
        /// Print only the settings file path
        #[arg(long)]
        path: bool,

        /// Write the default settings to the settings file
        #[arg(long)]
        init: bool,

        /// Overwrite an existing settings file with --init
        #[arg(long, requires = "init")]
        force: bool,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    logging::init(cli.verbose, cli.quiet);

    // Show help if no command provided
    let Some(command) = cli.command else {
        Cli::command().print_help()?;
        return Ok(());
    };

    match command {
        Commands::Estimate {
            files,
            wpm,
            seconds,
            time_only,
            abbreviated,
            rtl,
            ltr,
            locale,
            format,
        } => {
            let flags = EstimateFlags {
                words_per_minute: wpm,
                seconds,
                time_only,
                abbreviated,
                rtl,
                ltr,
                locale,
            };
            commands::estimate::estimate(&files, &flags, format, cli.config.as_deref())
        }
        Commands::Locales => commands::locales::list_locales(),
        Commands::Config { path, init, force } => {
            commands::config::config(cli.config.as_deref(), path, init, force)
        }
    }
}
