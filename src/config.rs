use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Application configuration loaded from settings.toml
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub meme: MemeConfig,
    #[serde(default)]
    pub sources: SourcesConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MemeConfig {
    /// Directory generated memes are written to
    #[serde(default = "default_output_dir")]
    pub output_dir: PathBuf,
    /// Images wider than this are scaled down to it
    #[serde(default = "default_target_width")]
    pub target_width: u32,
    /// TrueType/OpenType font used for captions
    #[serde(default = "default_font_path")]
    pub font_path: PathBuf,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SourcesConfig {
    /// Quote files ingested when no quote is given explicitly
    #[serde(default = "default_quote_files")]
    pub quote_files: Vec<PathBuf>,
    /// Directory searched for images when no image is given explicitly
    #[serde(default = "default_image_dir")]
    pub image_dir: PathBuf,
    #[serde(default = "default_download_timeout")]
    pub download_timeout_secs: u64,
}

fn default_output_dir() -> PathBuf {
    PathBuf::from("./tmp")
}

fn default_target_width() -> u32 {
    crate::meme::DEFAULT_TARGET_WIDTH
}

fn default_font_path() -> PathBuf {
    PathBuf::from("arial.ttf")
}

fn default_quote_files() -> Vec<PathBuf> {
    [
        "./_data/DogQuotes/DogQuotesTXT.txt",
        "./_data/DogQuotes/DogQuotesDOCX.docx",
        "./_data/DogQuotes/DogQuotesPDF.pdf",
        "./_data/DogQuotes/DogQuotesCSV.csv",
    ]
    .into_iter()
    .map(PathBuf::from)
    .collect()
}

fn default_image_dir() -> PathBuf {
    PathBuf::from("./_data/photos/dog/")
}

fn default_download_timeout() -> u64 {
    30
}

impl Config {
    /// Load configuration from a TOML file
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(path.as_ref())
            .with_context(|| format!("Failed to read config file: {}", path.as_ref().display()))?;

        let config: Config = toml::from_str(&content).context("Failed to parse config file")?;

        Ok(config)
    }

    /// Load configuration from default location or return defaults
    pub fn load() -> Result<Self> {
        let default_paths = [
            "config/settings.toml",
            "./config/settings.toml",
            "~/.config/memegen/settings.toml",
        ];

        for path in default_paths {
            let path = PathBuf::from(shellexpand::tilde(path).into_owned());
            if path.exists() {
                return Self::from_file(path);
            }
        }

        Ok(Self::default())
    }
}

impl Default for MemeConfig {
    fn default() -> Self {
        Self {
            output_dir: default_output_dir(),
            target_width: default_target_width(),
            font_path: default_font_path(),
        }
    }
}

impl Default for SourcesConfig {
    fn default() -> Self {
        Self {
            quote_files: default_quote_files(),
            image_dir: default_image_dir(),
            download_timeout_secs: default_download_timeout(),
        }
    }
}
