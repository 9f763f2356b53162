use std::fs;
use std::io::Read;
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use serde::Serialize;

use msgchunk::{chunk, DEFAULT_MAX_LENGTH};

/// Split a message into delivery-sized chunks.
#[derive(Parser)]
#[command(name = "msgchunk", version, about)]
struct Cli {
    /// Input file; reads stdin when omitted
    file: Option<PathBuf>,

    /// Maximum length of one chunk, ordinal prefix included
    #[arg(long, default_value_t = DEFAULT_MAX_LENGTH)]
    max_length: usize,

    /// Emit the chunks as JSON records instead of plain text
    #[arg(long)]
    json: bool,
}

#[derive(Serialize)]
struct ChunkRecord<'a> {
    ordinal: usize,
    total: usize,
    content: &'a str,
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    let cli = Cli::parse();
    let text = match &cli.file {
        Some(path) => fs::read_to_string(path)
            .with_context(|| format!("failed to read {}", path.display()))?,
        None => {
            let mut buf = String::new();
            std::io::stdin()
                .read_to_string(&mut buf)
                .context("failed to read stdin")?;
            buf
        }
    };

    let chunks = chunk(&text, cli.max_length);
    if cli.json {
        let total = chunks.len();
        let records: Vec<ChunkRecord> = chunks
            .iter()
            .enumerate()
            .map(|(i, content)| ChunkRecord {
                ordinal: i + 1,
                total,
                content,
            })
            .collect();
        println!("{}", serde_json::to_string_pretty(&records)?);
    } else {
        for (i, piece) in chunks.iter().enumerate() {
            if i > 0 {
                println!("---");
            }
            println!("{piece}");
        }
    }
    Ok(())
}
