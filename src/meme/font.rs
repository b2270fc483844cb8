use ab_glyph::{FontVec, PxScale};
use font8x8::{UnicodeFonts, BASIC_FONTS};
use image::{Rgba, RgbaImage};
use std::path::Path;
use tracing::{debug, warn};

/// Nominal size of the built-in bitmap font
pub const FALLBACK_FONT_SIZE: u32 = 15;

/// Glyph grid of the built-in font
const BITMAP_GLYPH_SIZE: u32 = 8;

/// The font captions are drawn with
pub enum Typeface {
    /// A TrueType/OpenType font rendered at `size` pixels
    Scalable { font: FontVec, size: u32 },
    /// The built-in 8x8 font, drawn on a [`FALLBACK_FONT_SIZE`] cell
    Bitmap,
}

impl Typeface {
    /// Load the font at `path` for the given pixel size
    ///
    /// Falls back to the bitmap font when the file can't be used or the size
    /// is zero.
    pub fn load(path: &Path, size: u32) -> Self {
        if size == 0 {
            debug!("Font size rounds to zero, using built-in bitmap font");
            return Self::Bitmap;
        }

        let bytes = match std::fs::read(path) {
            Ok(bytes) => bytes,
            Err(e) => {
                warn!(
                    "Font {} unavailable ({}), using built-in bitmap font",
                    path.display(),
                    e
                );
                return Self::Bitmap;
            }
        };

        match FontVec::try_from_vec(bytes) {
            Ok(font) => Self::Scalable { font, size },
            Err(e) => {
                warn!(
                    "Font {} is not a valid font ({}), using built-in bitmap font",
                    path.display(),
                    e
                );
                Self::Bitmap
            }
        }
    }

    /// The size actually realized, which layout must use
    pub fn size(&self) -> u32 {
        match self {
            Self::Scalable { size, .. } => *size,
            Self::Bitmap => FALLBACK_FONT_SIZE,
        }
    }

    /// Draw `text` with its top-left corner at (`x`, `y`), clipped to the canvas
    pub fn draw(&self, canvas: &mut RgbaImage, x: i32, y: i32, color: Rgba<u8>, text: &str) {
        match self {
            Self::Scalable { font, size } => imageproc::drawing::draw_text_mut(
                canvas,
                color,
                x,
                y,
                PxScale::from(*size as f32),
                font,
                text,
            ),
            Self::Bitmap => draw_bitmap_text(canvas, x, y, color, text),
        }
    }
}

fn draw_bitmap_text(canvas: &mut RgbaImage, x: i32, y: i32, color: Rgba<u8>, text: &str) {
    let cell = FALLBACK_FONT_SIZE as i32;
    let (width, height) = (canvas.width() as i32, canvas.height() as i32);

    for (i, ch) in text.chars().enumerate() {
        let glyph = BASIC_FONTS
            .get(ch)
            .or_else(|| BASIC_FONTS.get('?'))
            .unwrap_or([0; 8]);
        let origin_x = x + i as i32 * cell;

        for dy in 0..cell {
            let py = y + dy;
            if py < 0 || py >= height {
                continue;
            }
            let row = glyph[(dy as u32 * BITMAP_GLYPH_SIZE / FALLBACK_FONT_SIZE) as usize];

            for dx in 0..cell {
                let px = origin_x + dx;
                if px < 0 || px >= width {
                    continue;
                }
                // Bit 0 is the leftmost pixel
                let bit = dx as u32 * BITMAP_GLYPH_SIZE / FALLBACK_FONT_SIZE;
                if (row >> bit) & 1 == 1 {
                    canvas.put_pixel(px as u32, py as u32, color);
                }
            }
        }
    }
}
