//! Typf GDI Core: the arithmetic behind re-rasterized GDI text
//!
//! A text hook sits between an application and `ExtTextOut`, takes the
//! glyphs GDI was about to draw, renders them with an outline rasterizer
//! and blends the result back into the device context. This crate holds
//! the small pieces every such draw needs, none of which care how the
//! hook was installed or which rasterizer does the drawing.
//!
//! ## One Draw, Step by Step
//!
//! 1. **Inspect the DC** - [`device::dc_bitmap_info`], [`device::logical_font`]
//!    and [`device::dc_metrics`] read the target bitmap and the selected font
//! 2. **Pick a mode** - [`render_mode::select_render_mode`] combines the
//!    font's [`settings`] with the surface depth
//! 3. **Rasterize** - outside this crate, producing [`glyph_run::GlyphBitmap`]s
//! 4. **Place** - [`align::baseline`] finds the pen origin,
//!    [`glyph_run::glyph_run_rect`] the area the run covers
//! 5. **Paint** - [`device::draw_background`] fills opaque backgrounds and
//!    [`pitch::bitmap_pitch`] sizes scratch bitmaps
//!
//! ```rust
//! use std::collections::HashMap;
//! use typf_gdi_core::render_mode::{select_render_mode, FontQuality, RenderMode};
//! use typf_gdi_core::settings::FontSettings;
//!
//! let mut settings = HashMap::new();
//! settings.insert("Tahoma".to_string(), FontSettings::default());
//!
//! let mode = select_render_mode(&settings, "Tahoma", FontQuality::ClearType, 32)?;
//! assert_eq!(mode, RenderMode::Lcd);
//! # Ok::<(), typf_gdi_core::GdiError>(())
//! ```
//!
//! Platform access goes through the [`DeviceContext`] trait; `typf-gdi-win`
//! implements it for a real `HDC`.

pub mod align;
pub mod device;
pub mod error;
pub mod fixed;
pub mod glyph_run;
pub mod pitch;
pub mod render_mode;
pub mod settings;
pub mod settings_config;
pub mod surface;

#[cfg(test)]
mod proptests;

pub use error::{GdiError, Result};
pub use render_mode::{FontQuality, RenderMode};
pub use settings::{FontSettings, FontSettingsCache, FontSettingsLookup};
pub use surface::DeviceContext;
pub use types::{ColorRef, Point, Rect};

/// Geometry and color in GDI's integer device units
pub mod types {
    /// A point in device coordinates
    #[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
    pub struct Point {
        pub x: i32,
        pub y: i32,
    }

    impl Point {
        pub const fn new(x: i32, y: i32) -> Self {
            Self { x, y }
        }
    }

    /// An edge-exclusive rectangle, laid out like `RECT`
    #[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
    pub struct Rect {
        pub left: i32,
        pub top: i32,
        pub right: i32,
        pub bottom: i32,
    }

    impl Rect {
        pub const fn new(left: i32, top: i32, right: i32, bottom: i32) -> Self {
            Self {
                left,
                top,
                right,
                bottom,
            }
        }

        pub const fn width(&self) -> i32 {
            self.right - self.left
        }

        pub const fn height(&self) -> i32 {
            self.bottom - self.top
        }

        pub const fn is_empty(&self) -> bool {
            self.right <= self.left || self.bottom <= self.top
        }
    }

    /// A `COLORREF`: `0x00BBGGRR`
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
    pub struct ColorRef(pub u32);

    impl ColorRef {
        /// `CLR_INVALID`, what `GetBkColor` returns on failure
        pub const INVALID: ColorRef = ColorRef(0xFFFF_FFFF);

        pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
            ColorRef(r as u32 | (g as u32) << 8 | (b as u32) << 16)
        }

        pub const fn r(self) -> u8 {
            self.0 as u8
        }

        pub const fn g(self) -> u8 {
            (self.0 >> 8) as u8
        }

        pub const fn b(self) -> u8 {
            (self.0 >> 16) as u8
        }
    }

}
