mod commands;
mod logging;
mod manifest;

use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};

/// Output format for CLI responses.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub(crate) enum OutputFormat {
    Text,
    Json,
}

/// Seasonal calendar document builder.
#[derive(Parser)]
#[command(name = "palmtree", version, about = "Seasonal calendar document builder")]
struct Cli {
    /// Output format (text or json)
    #[arg(long, global = true, default_value = "text", value_enum)]
    output: OutputFormat,

    /// Suppress non-essential output
    #[arg(long, global = true)]
    quiet: bool,

    /// Increase verbosity (-v info, -vv debug, -vvv trace).
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    verbose: u8,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Build a calendar JSON document from a TOML manifest
    Build {
        /// Path to the calendar manifest (.toml)
        manifest: PathBuf,
        /// Write the calendar here instead of stdout
        #[arg(long)]
        out: Option<PathBuf>,
    },

    /// Read a calendar (or any JSON object) and summarise its top-level keys
    Read {
        /// Path to the JSON document
        file: PathBuf,
    },

    /// Convert a GeoJSON feature collection into the calendar `sites` tree
    /// (printed with --output json; text mode summarises the features)
    Sites {
        /// Path to the GeoJSON file
        file: PathBuf,
    },
}

fn main() {
    let cli = Cli::parse();
    logging::init(cli.verbose);

    match cli.command {
        Commands::Build { manifest, out } => {
            commands::build::cmd_build(&manifest, out.as_deref(), cli.output, cli.quiet);
        }
        Commands::Read { file } => {
            commands::read::cmd_read(&file, cli.output, cli.quiet);
        }
        Commands::Sites { file } => {
            commands::sites::cmd_sites(&file, cli.output, cli.quiet);
        }
    }
}

pub(crate) fn report_error(msg: &str, output: OutputFormat, quiet: bool) {
    if quiet {
        return;
    }
    match output {
        OutputFormat::Text => eprintln!("{}", msg),
        OutputFormat::Json => {
            eprintln!("{}", serde_json::json!({ "error": msg }));
        }
    }
}
