//! Monochrome, grayscale or subpixel: picking how to rasterize
//!
//! Two inputs decide. The application's requested quality can force
//! aliased text, unless the font's settings say to antialias anyway. After
//! that, the depth of the target bitmap limits what makes sense: a 1 bpp
//! surface can only take monochrome, an 8 bpp one grayscale, and only true
//! color surfaces can carry subpixel coverage.

use crate::error::{GdiError, Result};
use crate::settings::FontSettingsLookup;

/// How the rasterizer should render glyph outlines
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum RenderMode {
    /// 1 bit per pixel, no antialiasing
    Mono,
    /// 8-bit grayscale antialiasing
    Normal,
    /// Horizontal subpixel (LCD) antialiasing
    Lcd,
}

/// The `lfQuality` byte of a logical font
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum FontQuality {
    Default,
    Draft,
    Proof,
    NonAntialiased,
    Antialiased,
    ClearType,
    ClearTypeNatural,
    Other(u8),
}

impl From<u8> for FontQuality {
    fn from(quality: u8) -> Self {
        match quality {
            0 => FontQuality::Default,
            1 => FontQuality::Draft,
            2 => FontQuality::Proof,
            3 => FontQuality::NonAntialiased,
            4 => FontQuality::Antialiased,
            5 => FontQuality::ClearType,
            6 => FontQuality::ClearTypeNatural,
            other => FontQuality::Other(other),
        }
    }
}

impl From<FontQuality> for u8 {
    fn from(quality: FontQuality) -> u8 {
        match quality {
            FontQuality::Default => 0,
            FontQuality::Draft => 1,
            FontQuality::Proof => 2,
            FontQuality::NonAntialiased => 3,
            FontQuality::Antialiased => 4,
            FontQuality::ClearType => 5,
            FontQuality::ClearTypeNatural => 6,
            FontQuality::Other(other) => other,
        }
    }
}

/// Choose a render mode for `font_name` drawn at `quality` into a
/// `bits_per_pixel` surface
///
/// Returns [`GdiError::UnsupportedBitDepth`] for surfaces other than 1, 8,
/// 24 and 32 bpp; the caller should let GDI draw those itself.
pub fn select_render_mode<S: FontSettingsLookup + ?Sized>(
    settings: &S,
    font_name: &str,
    quality: FontQuality,
    bits_per_pixel: u16,
) -> Result<RenderMode> {
    let font_settings = settings.lookup(font_name);

    if quality == FontQuality::NonAntialiased && !font_settings.render_non_aa {
        log::debug!("'{font_name}' requested non-antialiased, rendering mono");
        return Ok(RenderMode::Mono);
    }

    let mode = match bits_per_pixel {
        1 => RenderMode::Mono,
        8 => RenderMode::Normal,
        24 | 32 => {
            if font_settings.subpixel_render {
                RenderMode::Lcd
            } else {
                RenderMode::Normal
            }
        }
        other => {
            log::debug!("no render mode for {other} bpp surface");
            return Err(GdiError::UnsupportedBitDepth(other));
        }
    };

    log::debug!("'{font_name}' at {bits_per_pixel} bpp renders as {mode:?}");
    Ok(mode)
}
