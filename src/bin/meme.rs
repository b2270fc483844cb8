use anyhow::{Context, Result};
use clap::Parser;
use memegen::{
    config::Config,
    input::{self, ImageInput},
    logging, sources, Ingestor, MemeEngine, MemeError, Quote,
};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "meme")]
#[command(about = "Generate a meme from an image and a quote")]
#[command(version)]
struct Cli {
    /// Path to an image file (local path or http(s) URL)
    #[arg(long, value_name = "PATH")]
    path: Option<String>,

    /// Quote body to add to the image
    #[arg(long)]
    body: Option<String>,

    /// Quote author to add to the image (required with --body)
    #[arg(long)]
    author: Option<String>,

    /// Directory the meme is written to (overrides config)
    #[arg(long)]
    output_dir: Option<PathBuf>,

    /// Maximum width of the meme (overrides config)
    #[arg(long)]
    width: Option<u32>,

    /// Configuration file (defaults to config/settings.toml)
    #[arg(long, value_name = "FILE")]
    config: Option<PathBuf>,

    /// Enable debug logging
    #[arg(short, long)]
    verbose: bool,
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();
    logging::init(cli.verbose);

    let config = match &cli.config {
        Some(path) => Config::from_file(path)?,
        None => Config::load().unwrap_or_default(),
    };

    let explicit_quote = match (cli.body, cli.author) {
        (Some(body), Some(author)) => Some(
            Quote::new(body, author).context("Quote body and author must not be blank")?,
        ),
        (Some(_), None) => return Err(MemeError::AuthorRequired.into()),
        (None, _) => None,
    };

    let image = match &cli.path {
        Some(path) => input::resolve_image(path, config.sources.download_timeout_secs).await?,
        None => ImageInput::Local(sources::random_image(&config.sources.image_dir)?),
    };

    let mut meme_config = config.meme.clone();
    if let Some(dir) = cli.output_dir {
        meme_config.output_dir = dir;
    }
    let width = cli.width.unwrap_or(meme_config.target_width);
    let engine = MemeEngine::from_config(&meme_config);
    let quote_files = config.sources.quote_files.clone();
    let image_path = image.path().to_path_buf();

    let output = tokio::task::spawn_blocking(move || -> Result<PathBuf> {
        let quote = match explicit_quote {
            Some(quote) => quote,
            None => {
                let quotes = sources::load_quotes(&Ingestor::new(), &quote_files);
                sources::random_quote(&quotes)?.clone()
            }
        };

        engine
            .make_meme(&image_path, quote.body(), quote.author(), width)
            .with_context(|| format!("Failed to generate meme from {}", image_path.display()))
    })
    .await??;

    // Removes the temporary download, if any
    drop(image);

    println!("Meme generated successfully at: {}", output.display());
    Ok(())
}
