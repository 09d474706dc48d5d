//! MeDF CLI - canonicalization, stamping, and verification for MeDF documents.

use clap::{Parser, Subcommand};

mod commands;
mod output;

use commands::{canonicalize, cite, stamp, verify};

#[derive(Parser)]
#[command(name = "medf")]
#[command(about = "MeDF document canonicalization and verification CLI")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Show the canonical form of input JSON
    Canonicalize {
        /// Input JSON file (or stdin if not provided)
        input: Option<String>,
    },
    /// Stamp fresh block and document hashes onto a document
    Stamp {
        /// Input document JSON file (or stdin if not provided)
        input: Option<String>,
        /// Output a summary object instead of the canonical document
        #[arg(long)]
        json: bool,
    },
    /// Verify a document's hash claims
    Verify {
        /// Input document JSON file (or stdin if not provided)
        input: Option<String>,
        /// Exit with error code if verification fails
        #[arg(long)]
        strict: bool,
        /// Output as JSON
        #[arg(long)]
        json: bool,
    },
    /// Extract citations from text
    Cite {
        /// Input text file (or stdin if not provided)
        input: Option<String>,
        /// Output as JSON
        #[arg(long)]
        json: bool,
    },
}

fn main() {
    let cli = Cli::parse();

    let result = match cli.command {
        Commands::Canonicalize { input } => canonicalize::run(input),
        Commands::Stamp { input, json } => stamp::run(input, json),
        Commands::Verify {
            input,
            strict,
            json,
        } => verify::run(input, strict, json),
        Commands::Cite { input, json } => cite::run(input, json),
    };

    if let Err(e) = result {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}
