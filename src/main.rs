//! Contract signature scanner (v1)
//!
//! Counts the distinct senders that called a contract over the most recent
//! blocks of an Ethereum chain.
//!
//! # Flow
//!
//! ```text
//!   CLI args ──▶ config (TOML + defaults) ──▶ logging
//!                      │
//!                      ▼
//!   INFURA_PROJECT_ID ──▶ endpoint URL ──▶ BlockchainClient::connect
//!                                                  │
//!                                                  ▼
//!   --known registry ───────────────────▶ ScanEngine::scan ──▶ Report ──▶ stdout
//! ```
//!
//! Any configuration, connection or address error stops the run before the
//! first block is fetched. Failed blocks are skipped and counted.

use std::path::PathBuf;
use std::process::ExitCode;

use clap::Parser;

use signature_scanner::blockchain::BlockchainClient;
use signature_scanner::config::load_or_default;
use signature_scanner::lifecycle::{prepare, Prepared, StartupOptions};
use signature_scanner::observability::init_logging;
use signature_scanner::scanner::{EmptyRegistry, KnownSignatures, Report, ScanEngine};

#[derive(Parser)]
#[command(name = "signature-scanner")]
#[command(
    about = "Scan recent blocks for new signatures interacting with a contract",
    long_about = None
)]
struct Cli {
    /// Address of the contract to scan.
    contract: String,

    /// Scan depth in blocks [default: 1000, or scan.default_blocks from the config file]
    #[arg(short, long, value_parser = clap::value_parser!(u64).range(1..))]
    blocks: Option<u64>,

    /// TOML configuration file.
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// JSON array of already known signature addresses.
    #[arg(short, long)]
    known: Option<PathBuf>,
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> ExitCode {
    let cli = Cli::parse();

    match run(cli).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {}", e);
            ExitCode::FAILURE
        }
    }
}

async fn run(cli: Cli) -> Result<(), Box<dyn std::error::Error>> {
    let config = load_or_default(cli.config.as_deref())?;
    init_logging(&config.logging);

    tracing::info!("signature-scanner v0.1.0 starting");

    let block_count = cli.blocks.unwrap_or(config.scan.default_blocks);
    let options = StartupOptions {
        contract: &cli.contract,
        known: cli.known.as_deref(),
    };
    let Prepared { client, registry } =
        prepare(&config.node, options, |name| std::env::var(name).ok()).await?;

    match registry {
        Some(registry) => {
            let engine = ScanEngine::with_registry(registry);
            scan_and_report(&client, engine, &cli.contract, block_count).await
        }
        None => {
            let engine = ScanEngine::<EmptyRegistry>::new();
            scan_and_report(&client, engine, &cli.contract, block_count).await
        }
    }
}

async fn scan_and_report<R: KnownSignatures>(
    client: &BlockchainClient,
    engine: ScanEngine<R>,
    contract: &str,
    block_count: u64,
) -> Result<(), Box<dyn std::error::Error>> {
    let result = engine.scan(client, contract, block_count).await?;
    println!("{}", Report(&result));
    Ok(())
}
