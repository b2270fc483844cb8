//! Resolve the image argument to a local file.
//!
//! Remote images are downloaded into a `TempDir` that lives as long as the
//! [`ImageInput`], so the copy is removed once the meme has been written.

use crate::error::{MemeError, Result};
use crate::utils;
use std::path::{Path, PathBuf};
use std::time::Duration;
use tempfile::TempDir;
use tracing::{debug, info};

/// A local image, possibly a temporary download
#[derive(Debug)]
pub enum ImageInput {
    Local(PathBuf),
    Downloaded { path: PathBuf, _temp_dir: TempDir },
}

impl ImageInput {
    pub fn path(&self) -> &Path {
        match self {
            ImageInput::Local(p) => p,
            ImageInput::Downloaded { path, .. } => path,
        }
    }
}

/// Turn a path or `http(s)://` URL into a local image
pub async fn resolve_image(input: &str, timeout_secs: u64) -> Result<ImageInput> {
    if utils::is_url(input) {
        download(input, timeout_secs).await
    } else {
        debug!("Using local image: {}", input);
        Ok(ImageInput::Local(PathBuf::from(input)))
    }
}

async fn download(url: &str, timeout_secs: u64) -> Result<ImageInput> {
    info!("Downloading image from: {}", url);

    let failed = |reason: String| MemeError::DownloadFailed {
        url: url.to_string(),
        reason,
    };

    let client = reqwest::Client::builder()
        .timeout(Duration::from_secs(timeout_secs))
        .build()
        .map_err(|e| failed(e.to_string()))?;

    let response = client
        .get(url)
        .send()
        .await
        .map_err(|e| failed(e.to_string()))?;

    if !response.status().is_success() {
        return Err(failed(format!("HTTP {}", response.status())));
    }

    let bytes = response.bytes().await.map_err(|e| failed(e.to_string()))?;

    let temp_dir = TempDir::new().map_err(|e| failed(e.to_string()))?;
    let path = temp_dir.path().join(file_name_from_url(url));
    tokio::fs::write(&path, &bytes)
        .await
        .map_err(|e| failed(format!("Failed to write temp file: {}", e)))?;

    info!("Downloaded to: {}", path.display());
    Ok(ImageInput::Downloaded {
        path,
        _temp_dir: temp_dir,
    })
}

/// Last path segment of the URL, or a generic name
fn file_name_from_url(url: &str) -> String {
    reqwest::Url::parse(url)
        .ok()
        .and_then(|parsed| {
            parsed
                .path_segments()
                .and_then(|mut segments| segments.next_back().map(str::to_string))
        })
        .filter(|last| !last.is_empty() && last.contains('.'))
        .unwrap_or_else(|| "downloaded.jpg".to_string())
}
