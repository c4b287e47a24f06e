//! How much of the DC a glyph run will touch
//!
//! Before drawing, the hook needs the rectangle that encloses every glyph
//! bitmap of a run so it can size its scratch bitmap and clip the
//! background. Runs may flow right-to-left or bottom-to-top, so the first
//! and last glyphs decide which end is which.
//!
//! Only the two end glyphs are inspected. A run whose interior glyphs
//! reach past either end (reordered bidi fragments, for instance) gets a
//! rectangle that is too small.

use crate::error::{GdiError, Result};
use crate::types::{Point, Rect};

/// Pixel layouts produced by the outline rasterizer
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum PixelMode {
    /// 1 bit per pixel
    Mono,
    /// 8-bit coverage
    Gray,
    Gray2,
    Gray4,
    /// Horizontal subpixel: three samples per pixel, width is tripled
    Lcd,
    /// Vertical subpixel: three samples per pixel, rows are tripled
    LcdV,
    Bgra,
}

/// A rasterized glyph image
///
/// `width` and `rows` are in samples, exactly as the rasterizer reports
/// them. For [`PixelMode::Lcd`] that means three samples per device pixel.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct GlyphBitmap {
    pub width: u32,
    pub rows: u32,
    /// Bytes per row, negative for bottom-up buffers
    pub pitch: i32,
    pub pixel_mode: PixelMode,
    pub buffer: Vec<u8>,
}

impl GlyphBitmap {
    /// An image with no pixel data, for callers that only care about geometry
    pub fn empty(width: u32, rows: u32, pixel_mode: PixelMode) -> Self {
        Self {
            width,
            rows,
            pitch: 0,
            pixel_mode,
            buffer: Vec::new(),
        }
    }

    /// Width in device pixels
    pub fn visible_width(&self) -> u32 {
        match self.pixel_mode {
            PixelMode::Lcd => self.width / 3,
            _ => self.width,
        }
    }
}

/// `start + extent`, clamped to `i32::MAX`
fn far_edge(start: i32, extent: u32) -> i32 {
    start.saturating_add(i32::try_from(extent).unwrap_or(i32::MAX))
}

/// Bounding rectangle of a laid-out run
///
/// `positions[i]` is where `glyphs[i]` is placed. Both slices must be the
/// same non-zero length.
///
/// The left edge never sits right of the origin: a run that starts at a
/// positive x still reports `left = 0`, leaving room for the pen's origin.
pub fn glyph_run_rect(glyphs: &[GlyphBitmap], positions: &[Point]) -> Result<Rect> {
    if glyphs.is_empty() || positions.is_empty() {
        return Err(GdiError::invariant("glyph run is empty"));
    }
    if glyphs.len() != positions.len() {
        return Err(GdiError::invariant(format!(
            "glyph run has {} glyphs but {} positions",
            glyphs.len(),
            positions.len()
        )));
    }

    let last = positions.len() - 1;
    let (first_pos, last_pos) = (positions[0], positions[last]);
    let (first_glyph, last_glyph) = (&glyphs[0], &glyphs[last]);

    let (left, right) = if last_pos.x >= first_pos.x {
        // left to right
        (first_pos.x.min(0), far_edge(last_pos.x, last_glyph.visible_width()))
    } else {
        // right to left
        (last_pos.x.min(0), far_edge(first_pos.x, first_glyph.visible_width()))
    };

    let (top, bottom) = if last_pos.y >= first_pos.y {
        // top to bottom
        (first_pos.y, far_edge(last_pos.y, last_glyph.rows))
    } else {
        // bottom to top
        (last_pos.y, far_edge(first_pos.y, first_glyph.rows))
    };

    Ok(Rect {
        left,
        top,
        right,
        bottom,
    })
}
