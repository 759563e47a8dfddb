mod commands;
mod output;

use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser)]
#[command(
    name = "covscan",
    version,
    about = "Batch PDF processing and control-coverage analysis"
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Process a directory of PDFs: partition, extract, cache, analyze coverage
    Process {
        /// Directory containing PDF documents
        directory: PathBuf,

        /// Page ceiling per batch
        #[arg(short, long, default_value_t = covscan_core::DEFAULT_MAX_PAGES_PER_BATCH)]
        max_pages: usize,

        /// Custom taxonomy JSON file (overrides --preset)
        #[arg(short, long, value_name = "FILE")]
        controls: Option<PathBuf>,

        /// Predefined taxonomy: iso27001
        #[arg(short, long, default_value = covscan_core::controls::builtin::DEFAULT_PRESET)]
        preset: String,

        /// Write the content cache to FILE
        #[arg(long, value_name = "FILE")]
        cache: Option<PathBuf>,

        /// Write the run/coverage analysis to FILE
        #[arg(long, value_name = "FILE")]
        analysis: Option<PathBuf>,

        /// Output format: table (default) or json
        #[arg(short, long, default_value = "table")]
        output: String,
    },
    /// Show the batch plan for a directory without extracting anything
    Plan {
        /// Directory containing PDF documents
        directory: PathBuf,

        /// Page ceiling per batch
        #[arg(short, long, default_value_t = covscan_core::DEFAULT_MAX_PAGES_PER_BATCH)]
        max_pages: usize,

        /// Output format: table (default) or json
        #[arg(short, long, default_value = "table")]
        output: String,
    },
    /// Manage and inspect control taxonomies
    Controls {
        #[command(subcommand)]
        action: ControlsAction,
    },
}

#[derive(Subcommand)]
enum ControlsAction {
    /// List predefined taxonomies
    List,
    /// Print the controls of a predefined taxonomy
    Show {
        /// Preset name (e.g., "iso27001")
        preset: String,
    },
    /// Validate a custom taxonomy file
    Validate {
        /// Path to JSON taxonomy file
        file: PathBuf,
    },
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    let result = match cli.command {
        Commands::Process {
            directory,
            max_pages,
            controls,
            preset,
            cache,
            analysis,
            output,
        } => commands::process::run(directory, max_pages, controls, &preset, cache, analysis, &output),
        Commands::Plan {
            directory,
            max_pages,
            output,
        } => commands::plan::run(directory, max_pages, &output),
        Commands::Controls { action } => match action {
            ControlsAction::List => commands::controls::list(),
            ControlsAction::Show { preset } => commands::controls::show(&preset),
            ControlsAction::Validate { file } => commands::controls::validate(&file),
        },
    };

    if let Err(e) = result {
        eprintln!("Error: {e}");
        std::process::exit(1);
    }
}
