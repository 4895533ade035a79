//! CLI for inspecting LankaQR payloads
//!
//! This tool allows:
//! - Parsing a scanned or uploaded payload into its payment record
//! - Dumping the raw TLV structure, including nested templates

use anyhow::{bail, Context};
use clap::{Args, Parser, Subcommand};
use lankaqr_core::{tlv, LankaQrParser, ParserConfig};
use lankaqr_params::tags;
use std::path::{Path, PathBuf};
use tracing::{debug, info};

#[derive(Parser)]
#[command(name = "qr-inspect")]
#[command(about = "LankaQR payload inspection tool", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Args)]
struct Source {
    /// Payload text as read from the QR code
    code: Option<String>,

    /// Read the payload from a file instead
    #[arg(short, long, conflicts_with = "code")]
    file: Option<PathBuf>,
}

#[derive(Subcommand)]
enum Commands {
    /// Parse a payload and print the payment record as JSON
    Parse {
        #[command(flatten)]
        source: Source,

        /// Parser config file (JSON)
        #[arg(short, long)]
        config: Option<PathBuf>,

        /// Pretty-print the JSON output
        #[arg(short, long)]
        pretty: bool,
    },

    /// Print the TLV fields of a payload
    Dump {
        #[command(flatten)]
        source: Source,
    },
}

fn main() -> anyhow::Result<()> {
    // Initialize tracing
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Parse {
            source,
            config,
            pretty,
        } => {
            let code = read_code(&source)?;
            println!("{}", run_parse(&code, config.as_deref(), pretty)?);
        }
        Commands::Dump { source } => {
            let code = read_code(&source)?;
            print!("{}", render_dump(&code));
        }
    }

    Ok(())
}

fn read_code(source: &Source) -> anyhow::Result<String> {
    let code = match (&source.code, &source.file) {
        (Some(code), _) => code.clone(),
        (None, Some(path)) => {
            debug!("Reading payload from {}", path.display());
            std::fs::read_to_string(path)
                .with_context(|| format!("failed to read {}", path.display()))?
        }
        (None, None) => bail!("provide a payload or --file"),
    };
    Ok(code.trim().to_string())
}

fn run_parse(code: &str, config: Option<&Path>, pretty: bool) -> anyhow::Result<String> {
    let parser = match config {
        Some(path) => {
            info!("Using parser config {}", path.display());
            let config = ParserConfig::load(path)
                .with_context(|| format!("failed to load config {}", path.display()))?;
            LankaQrParser::with_config(config)?
        }
        None => LankaQrParser::new(),
    };

    let record = match parser.try_parse(code) {
        Ok(record) => record,
        Err(e) => bail!("{} ({})", e.user_message(), e),
    };

    info!(
        "Parsed payment to {} ({}, {})",
        record.merchant_name,
        if record.is_static() { "static" } else { "dynamic" },
        if record.has_reference() {
            "with reference"
        } else {
            "no reference"
        }
    );

    let json = if pretty {
        serde_json::to_string_pretty(&record)?
    } else {
        serde_json::to_string(&record)?
    };
    Ok(json)
}

fn render_dump(code: &str) -> String {
    let mut out = String::new();
    for entry in tlv::entries(code) {
        out.push_str(&format!("[{}] {}\n", entry.tag, entry.value));

        if entry.tag == tags::MERCHANT_ACCOUNT || entry.tag == tags::ADDITIONAL_DATA {
            for nested in tlv::entries(&entry.value) {
                out.push_str(&format!("  [{}] {}\n", nested.tag, nested.value));
            }
        }
    }
    out
}
