//! Caption images with a quote.
//!
//! The engine shrinks wide images to a target width, sizes the font from the
//! resulting height, draws the body and `- author` as two white lines at the
//! bottom-left, and writes the result as `meme_<n>.png`.

pub mod font;
pub mod layout;

pub use font::{Typeface, FALLBACK_FONT_SIZE};
pub use layout::{font_size_for, scaled_dimensions, TextLayout};

use crate::config::MemeConfig;
use crate::error::{MemeError, Result};
use image::imageops::FilterType;
use image::{DynamicImage, ImageFormat, ImageReader, Rgba};
use rand::Rng;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};
use tracing::{debug, info};

/// Default width images are scaled down to
pub const DEFAULT_TARGET_WIDTH: u32 = 500;

/// Output names are `meme_<n>.png` with `n` below this
pub const MAX_NAME_NUMBER: u32 = 1_000_000;

/// How many names to draw before accepting one that already exists
const MAX_NAME_ATTEMPTS: usize = 8;

const TEXT_COLOR: Rgba<u8> = Rgba([255, 255, 255, 255]);

/// Composes quotes onto images
#[derive(Debug, Clone)]
pub struct MemeEngine {
    output_dir: PathBuf,
    font_path: PathBuf,
}

impl MemeEngine {
    /// Create an engine writing into `output_dir`
    ///
    /// The directory is created on first use.
    pub fn new(output_dir: impl Into<PathBuf>) -> Self {
        Self {
            output_dir: output_dir.into(),
            font_path: MemeConfig::default().font_path,
        }
    }

    pub fn from_config(config: &MemeConfig) -> Self {
        Self::new(&config.output_dir).with_font(&config.font_path)
    }

    /// Use a different TrueType/OpenType font for captions
    pub fn with_font(mut self, font_path: impl Into<PathBuf>) -> Self {
        self.font_path = font_path.into();
        self
    }

    pub fn output_dir(&self) -> &Path {
        &self.output_dir
    }

    /// Caption the image at `image_path` and return the path of the new file
    pub fn make_meme(
        &self,
        image_path: &Path,
        body: &str,
        author: &str,
        target_width: u32,
    ) -> Result<PathBuf> {
        let image = load_image(image_path)?;
        let image = fit_width(image, target_width.max(1));

        let mut canvas = image.to_rgba8();
        let height = canvas.height();

        let typeface = Typeface::load(&self.font_path, font_size_for(height));
        let layout = TextLayout::compute(height, typeface.size());
        debug!(
            "Captioning {}x{} image at font size {}",
            canvas.width(),
            height,
            typeface.size()
        );

        typeface.draw(&mut canvas, layout.x, layout.body_y, TEXT_COLOR, body);
        typeface.draw(
            &mut canvas,
            layout.x,
            layout.author_y,
            TEXT_COLOR,
            &format!("- {}", author),
        );

        let output_path = self.next_output_path()?;
        canvas
            .save_with_format(&output_path, ImageFormat::Png)
            .map_err(|e| MemeError::ImageSaveError {
                path: output_path.clone(),
                detail: e.to_string(),
            })?;

        info!("Meme written to {}", output_path.display());
        Ok(output_path)
    }

    /// Pick a fresh `meme_<n>.png` path, creating the output directory
    fn next_output_path(&self) -> Result<PathBuf> {
        std::fs::create_dir_all(&self.output_dir).map_err(|e| MemeError::ImageSaveError {
            path: self.output_dir.clone(),
            detail: format!("Failed to create output directory: {}", e),
        })?;

        let mut rng = rand::rng();
        let mut candidate = self
            .output_dir
            .join(output_file_name(rng.random_range(0..MAX_NAME_NUMBER)));

        for _ in 1..MAX_NAME_ATTEMPTS {
            if !candidate.exists() {
                break;
            }
            candidate = self
                .output_dir
                .join(output_file_name(rng.random_range(0..MAX_NAME_NUMBER)));
        }

        Ok(candidate)
    }
}

/// File name for the `n`th meme
pub fn output_file_name(n: u32) -> String {
    format!("meme_{}.png", n)
}

fn load_image(path: &Path) -> Result<DynamicImage> {
    if !path.exists() {
        return Err(MemeError::ImageNotFound {
            path: path.to_path_buf(),
        });
    }

    let decode_error = |detail: String| MemeError::ImageDecodeError {
        path: path.to_path_buf(),
        detail,
    };

    let reader = ImageReader::open(path).map_err(|e| match e.kind() {
        ErrorKind::NotFound => MemeError::ImageNotFound {
            path: path.to_path_buf(),
        },
        _ => decode_error(e.to_string()),
    })?;

    reader
        .with_guessed_format()
        .map_err(|e| decode_error(e.to_string()))?
        .decode()
        .map_err(|e| decode_error(e.to_string()))
}

fn fit_width(image: DynamicImage, target_width: u32) -> DynamicImage {
    let (width, height) = (image.width(), image.height());
    let (new_width, new_height) = scaled_dimensions(width, height, target_width);

    if (new_width, new_height) == (width, height) {
        return image;
    }

    debug!(
        "Resizing {}x{} to {}x{}",
        width, height, new_width, new_height
    );
    image.resize_exact(new_width, new_height, FilterType::Lanczos3)
}
