use anyhow::Result;
use clap::Parser;
use memegen::{config::Config, logging, Ingestor, Quote};
use serde::Serialize;
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "meme-quotes")]
#[command(about = "List the quotes ingested from quote files")]
#[command(version)]
struct Cli {
    /// Quote files to ingest (defaults to the configured sources)
    #[arg(value_name = "FILE")]
    files: Vec<PathBuf>,

    /// Print the result as JSON
    #[arg(long)]
    json: bool,

    /// Configuration file (defaults to config/settings.toml)
    #[arg(long, value_name = "FILE")]
    config: Option<PathBuf>,

    /// Enable debug logging
    #[arg(short, long)]
    verbose: bool,
}

#[derive(Serialize)]
struct SourceReport {
    file: PathBuf,
    quotes: Vec<Quote>,
    #[serde(skip_serializing_if = "Option::is_none")]
    error: Option<String>,
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    logging::init(cli.verbose);

    let files = if cli.files.is_empty() {
        let config = match &cli.config {
            Some(path) => Config::from_file(path)?,
            None => Config::load().unwrap_or_default(),
        };
        config.sources.quote_files
    } else {
        cli.files
    };

    let ingestor = Ingestor::new();
    let reports: Vec<SourceReport> = files
        .into_iter()
        .map(|file| match ingestor.parse(&file) {
            Ok(quotes) => SourceReport { file, quotes, error: None },
            Err(e) => SourceReport {
                file,
                quotes: Vec::new(),
                error: Some(e.to_string()),
            },
        })
        .collect();

    if cli.json {
        println!("{}", serde_json::to_string_pretty(&reports)?);
        return Ok(());
    }

    let mut total = 0;
    for report in &reports {
        match &report.error {
            Some(error) => println!("{}: {}", report.file.display(), error),
            None => println!("{} ({} quotes)", report.file.display(), report.quotes.len()),
        }
        for quote in &report.quotes {
            println!("  {}", quote);
        }
        total += report.quotes.len();
    }
    println!("\nTotal: {} quotes", total);

    Ok(())
}
