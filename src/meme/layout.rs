/// Gap between the author line and the bottom edge
pub const TEXT_MARGIN: u32 = 10;

/// Left offset of both caption lines
pub const TEXT_X: i32 = 10;

/// Font size is the image height divided by this
pub const FONT_SIZE_DIVISOR: u32 = 15;

/// Dimensions after fitting `width` x `height` into `target_width`
///
/// Only shrinks: images already within the target keep their size. The new
/// height is rounded down but never reaches zero.
pub fn scaled_dimensions(width: u32, height: u32, target_width: u32) -> (u32, u32) {
    if width <= target_width {
        return (width, height);
    }

    let scaled = u64::from(target_width) * u64::from(height) / u64::from(width);
    (target_width, (scaled as u32).max(1))
}

/// Font size for an image of the given height
pub fn font_size_for(height: u32) -> u32 {
    height / FONT_SIZE_DIVISOR
}

/// Where the two caption lines go
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TextLayout {
    pub x: i32,
    pub body_y: i32,
    pub author_y: i32,
}

impl TextLayout {
    /// Stack body above author at the bottom of an image `height` tall
    ///
    /// `font_size` must be the size actually realized by the font.
    pub fn compute(height: u32, font_size: u32) -> Self {
        let height = height as i32;
        let size = font_size as i32;
        let margin = TEXT_MARGIN as i32;

        Self {
            x: TEXT_X,
            body_y: height - 2 * size - margin,
            author_y: height - size - margin,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_scaled_dimensions_downscales() {
        assert_eq!(scaled_dimensions(1000, 800, 500), (500, 400));
        assert_eq!(scaled_dimensions(1024, 768, 500), (500, 375));
        assert_eq!(scaled_dimensions(999, 500, 500), (500, 250));
    }

    #[test]
    fn test_scaled_dimensions_keeps_small_images() {
        assert_eq!(scaled_dimensions(300, 900, 500), (300, 900));
        assert_eq!(scaled_dimensions(500, 20, 500), (500, 20));
    }

    #[test]
    fn test_scaled_dimensions_never_zero_height() {
        assert_eq!(scaled_dimensions(5000, 3, 500), (500, 1));
    }

    #[test]
    fn test_font_size_for() {
        assert_eq!(font_size_for(400), 26);
        assert_eq!(font_size_for(14), 0);
    }

    #[test]
    fn test_layout_compute() {
        let layout = TextLayout::compute(400, 26);
        assert_eq!(layout, TextLayout { x: 10, body_y: 338, author_y: 364 });
    }

    #[test]
    fn test_layout_lines_do_not_overlap() {
        let layout = TextLayout::compute(200, 15);
        assert_eq!(layout.author_y - layout.body_y, 15);
        assert_eq!(layout.author_y + 15 + TEXT_MARGIN as i32, 200);
    }
}
