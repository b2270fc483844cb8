use crate::error::{MemeError, Result};
use crate::ingest::Ingestor;
use crate::quote::Quote;
use crate::utils;
use rand::seq::IndexedRandom;
use std::path::{Path, PathBuf};
use tracing::{info, warn};
use walkdir::WalkDir;

/// Image extensions picked up from the image directory
pub const IMAGE_EXTENSIONS: &[&str] = &["jpg", "jpeg", "png"];

/// Ingest every file, skipping the ones that fail
///
/// A broken source must not cost the quotes from the others.
pub fn load_quotes<P: AsRef<Path>>(ingestor: &Ingestor, files: &[P]) -> Vec<Quote> {
    let mut quotes = Vec::new();

    for file in files {
        let file = file.as_ref();
        match ingestor.parse(file) {
            Ok(parsed) => {
                info!("Loaded {} quotes from {}", parsed.len(), file.display());
                quotes.extend(parsed);
            }
            Err(e) => warn!("Could not parse {}: {}", file.display(), e),
        }
    }

    quotes
}

/// Recursively list the images under `dir`, sorted by path
pub fn find_images(dir: &Path) -> Vec<PathBuf> {
    if !dir.exists() {
        warn!("Image directory not found: {}", dir.display());
        return Vec::new();
    }

    let mut images: Vec<PathBuf> = WalkDir::new(dir)
        .into_iter()
        .filter_map(|entry| entry.ok())
        .filter(|entry| entry.file_type().is_file())
        .map(|entry| entry.into_path())
        .filter(|path| {
            utils::get_extension(path).is_some_and(|ext| IMAGE_EXTENSIONS.contains(&ext.as_str()))
        })
        .collect();

    images.sort();
    images
}

/// Pick a random quote
pub fn random_quote(quotes: &[Quote]) -> Result<&Quote> {
    quotes.choose(&mut rand::rng()).ok_or(MemeError::NoQuotes)
}

/// Pick a random image under `dir`
pub fn random_image(dir: &Path) -> Result<PathBuf> {
    find_images(dir)
        .choose(&mut rand::rng())
        .cloned()
        .ok_or_else(|| MemeError::NoImages {
            dir: dir.to_path_buf(),
        })
}
