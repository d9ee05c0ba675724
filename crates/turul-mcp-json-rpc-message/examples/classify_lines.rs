//! # Classify JSON-RPC Lines
//!
//! Reads newline-delimited JSON-RPC payloads from stdin and prints the tagged
//! classification of each one as a JSON line on stdout.
//!
//! ```text
//! echo '{"jsonrpc":"2.0","id":1,"method":"ping"}' | cargo run --example classify_lines
//! RUST_LOG=debug cargo run --example classify_lines -- --strict < messages.jsonl
//! ```

use std::io::{self, BufRead, Write};
use std::path::PathBuf;

use anyhow::Context;
use clap::Parser as ClapParser;
use tracing::info;
use tracing_subscriber::EnvFilter;
use turul_mcp_json_rpc_message::{AmbiguityPolicy, Parser, ParserConfig};

#[derive(ClapParser)]
#[command(name = "classify_lines", about = "Classify newline-delimited JSON-RPC messages")]
struct Args {
    /// Reject ambiguous messages and empty batches
    #[arg(long)]
    strict: bool,

    /// Largest batch to classify element by element
    #[arg(long)]
    max_batch_size: Option<usize>,

    /// Parser configuration as a JSON file
    #[arg(long)]
    config: Option<PathBuf>,
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .with_writer(io::stderr)
        .init();

    let args = Args::parse();

    let mut config = match &args.config {
        Some(path) => {
            let text = std::fs::read_to_string(path)
                .with_context(|| format!("reading {}", path.display()))?;
            ParserConfig::from_json_str(&text)?
        }
        None => ParserConfig::default(),
    };
    if args.strict {
        config = config
            .with_ambiguity(AmbiguityPolicy::Reject)
            .with_reject_empty_batch(true);
    }
    if let Some(max) = args.max_batch_size {
        config = config.with_max_batch_size(max);
    }

    info!(?config, "classifying stdin");
    let parser = Parser::new(config);

    let stdout = io::stdout();
    let mut out = stdout.lock();
    for line in io::stdin().lock().lines() {
        let line = line.context("reading stdin")?;
        if line.trim().is_empty() {
            continue;
        }
        let result = parser.parse(line.as_str());
        writeln!(out, "{}", result.to_value()?)?;
    }

    Ok(())
}
