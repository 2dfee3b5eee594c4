//! Doc Diff Studio CLI
//!
//! Compares DOCX, HTML and plain text documents and produces highlighted
//! HTML pages, JSON reports and terminal summaries.

use anyhow::Result;
use clap::{Parser, Subcommand};
use env_logger::Env;
use std::path::PathBuf;

use doc_diff_studio::commands::{
    display_version, execute_compare, execute_convert, validate_args, validate_report_file,
    CompareArgs, ConvertArgs,
};
use doc_diff_studio::diff::{DiffAlgorithm, Granularity};

/// Doc Diff Studio - visual diffs for documents
#[derive(Parser, Debug)]
#[command(name = "doc-diff")]
#[command(version, about, long_about = None)]
struct Cli {
    /// Subcommand to execute
    #[command(subcommand)]
    command: Commands,

    /// Enable verbose logging
    #[arg(short, long, global = true)]
    verbose: bool,
}

/// Available commands
#[derive(Subcommand, Debug)]
enum Commands {
    /// Compare two documents
    Compare {
        /// Original (old) document
        #[arg(short, long)]
        original: PathBuf,

        /// Modified (new) document
        #[arg(short, long)]
        modified: PathBuf,

        /// Unit of comparison [default: words]
        #[arg(short, long, value_enum)]
        granularity: Option<Granularity>,

        /// Sequence diff algorithm [default: myers]
        #[arg(short, long, value_enum)]
        algorithm: Option<DiffAlgorithm>,

        /// Output path for the HTML page
        #[arg(long)]
        html: Option<PathBuf>,

        /// Output path for the JSON report
        #[arg(long)]
        json: Option<PathBuf>,

        /// TOML comparison config
        #[arg(short, long)]
        config: Option<PathBuf>,

        /// Report title
        #[arg(long)]
        title: Option<String>,

        /// Compare case-insensitively
        #[arg(long)]
        ignore_case: bool,

        /// Treat whitespace differences as changes
        #[arg(long)]
        strict_whitespace: bool,

        /// Show replaced blocks as removed + added instead of modified
        #[arg(long)]
        no_inline: bool,

        /// Print text summary to stdout
        #[arg(long)]
        summary: bool,

        /// Exit with an error when the documents differ
        #[arg(long)]
        fail_on_changes: bool,
    },

    /// Convert a document to HTML and/or plain text
    Convert {
        /// Input document
        #[arg(short, long)]
        input: PathBuf,

        /// Output path for converted HTML
        #[arg(long)]
        html: Option<PathBuf>,

        /// Output path for extracted text
        #[arg(long)]
        text: Option<PathBuf>,
    },

    /// Validate a JSON diff report
    Validate {
        /// Path to report JSON file
        #[arg(short, long)]
        file: PathBuf,
    },

    /// Display version information
    Version,
}

fn main() -> Result<()> {
    // Parse CLI arguments
    let cli = Cli::parse();

    // Setup logging
    let log_level = if cli.verbose { "debug" } else { "info" };
    env_logger::Builder::from_env(Env::default().default_filter_or(log_level)).init();

    // Execute command
    match cli.command {
        Commands::Compare {
            original,
            modified,
            granularity,
            algorithm,
            html,
            json,
            config,
            title,
            ignore_case,
            strict_whitespace,
            no_inline,
            summary,
            fail_on_changes,
        } => {
            let args = CompareArgs {
                original,
                modified,
                granularity,
                algorithm,
                output_html: html,
                output_json: json,
                config,
                title,
                ignore_case,
                strict_whitespace,
                no_inline,
                print_summary: summary,
                fail_on_changes,
            };

            // Validate args first
            validate_args(&args)?;

            execute_compare(args)?;
        }

        Commands::Convert { input, html, text } => {
            execute_convert(ConvertArgs {
                input,
                output_html: html,
                output_text: text,
            })?;
        }

        Commands::Validate { file } => {
            validate_report_file(&file)?;
        }

        Commands::Version => {
            display_version();
        }
    }

    Ok(())
}
