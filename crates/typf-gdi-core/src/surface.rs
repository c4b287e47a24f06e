//! The narrow window we need into a device context
//!
//! The helpers in [`crate::device`] never touch GDI directly. They talk to
//! a [`DeviceContext`], which exposes exactly the handful of platform calls
//! the hook relies on. `typf-gdi-win` implements it for a real `HDC`; tests
//! implement it with plain structs.

use crate::render_mode::FontQuality;
use crate::types::{ColorRef, Rect};

/// Pixel format of the bitmap currently selected into a DC
///
/// A snapshot: reselecting a bitmap or resizing the surface makes it stale.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct BitmapInfo {
    pub width: i32,
    /// Positive for bottom-up DIBs, negative for top-down
    pub height: i32,
    pub planes: u16,
    pub bits_per_pixel: u16,
    /// `BI_RGB`, `BI_BITFIELDS`, ...
    pub compression: u32,
    pub size_image: u32,
}

/// The `LOGFONTW` of the font selected into a DC
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct LogicalFont {
    pub height: i32,
    pub width: i32,
    pub escapement: i32,
    pub orientation: i32,
    pub weight: i32,
    pub italic: bool,
    pub underline: bool,
    pub strike_out: bool,
    pub char_set: u8,
    pub out_precision: u8,
    pub clip_precision: u8,
    pub quality: u8,
    pub pitch_and_family: u8,
    pub face_name: String,
}

impl LogicalFont {
    /// The antialiasing the application asked for
    pub fn font_quality(&self) -> FontQuality {
        FontQuality::from(self.quality)
    }
}

/// The classic `TEXTMETRICW` part of the outline metrics
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct TextMetrics {
    pub height: i32,
    pub ascent: i32,
    pub descent: i32,
    pub internal_leading: i32,
    pub external_leading: i32,
    pub ave_char_width: i32,
    pub max_char_width: i32,
    pub weight: i32,
    pub italic: bool,
}

/// What `GetOutlineTextMetricsW` tells us about a scalable font
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct OutlineMetrics {
    pub text: TextMetrics,
    pub em_square: u32,
    pub ascent: i32,
    pub descent: i32,
    pub line_gap: u32,
    pub cap_height: u32,
    pub x_height: u32,
    pub family_name: String,
    pub face_name: String,
    pub style_name: String,
    pub full_name: String,
}

/// Platform calls the helpers are built on
///
/// Implementations report failure the way GDI does: `None`, `false` or a
/// zero size. The helpers in [`crate::device`] turn those into errors.
pub trait DeviceContext {
    /// A solid brush handle
    type Brush;

    /// Header of the selected bitmap, or `None` when no bitmap is selected
    /// or its header can't be read
    fn bitmap_info(&self) -> Option<BitmapInfo>;

    /// Bytes needed for the outline metrics, 0 if the font has none
    fn outline_metrics_size(&self) -> u32;

    /// Fill `buf` with outline metrics, returning the bytes written (0 on failure)
    fn read_outline_metrics(&self, buf: &mut [u8]) -> u32;

    /// Interpret a buffer filled by [`DeviceContext::read_outline_metrics`]
    fn decode_outline_metrics(&self, buf: &[u8]) -> Option<OutlineMetrics>;

    /// Descriptor of the selected font, or `None` when no font is selected
    fn logical_font(&self) -> Option<LogicalFont>;

    fn create_solid_brush(&self, color: ColorRef) -> Option<Self::Brush>;

    fn fill_rect(&self, rect: &Rect, brush: &Self::Brush) -> bool;

    /// Give a brush back to the system
    fn delete_brush(&self, brush: Self::Brush);
}
