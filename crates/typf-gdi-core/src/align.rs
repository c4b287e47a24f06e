//! From the point GDI was given to the baseline we draw on
//!
//! `ExtTextOut` receives a reference point whose meaning depends on the
//! DC's text alignment: it can be the left, right or center of the string
//! horizontally, and its top, bottom or baseline vertically. Glyph bitmaps
//! are always placed relative to the left end of the baseline, so the
//! reference point has to be moved there first.

use crate::types::Point;

/// The `TA_*` bitfield returned by `GetTextAlign`
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
pub struct TextAlign(pub u32);

impl TextAlign {
    pub const UPDATECP: u32 = 1;
    pub const LEFT: u32 = 0;
    pub const RIGHT: u32 = 2;
    pub const CENTER: u32 = 6;
    pub const TOP: u32 = 0;
    pub const BOTTOM: u32 = 8;
    pub const BASELINE: u32 = 24;
    pub const RTLREADING: u32 = 256;

    const HORIZONTAL_MASK: u32 = Self::LEFT | Self::RIGHT | Self::CENTER;
    const VERTICAL_MASK: u32 = Self::TOP | Self::BOTTOM | Self::BASELINE;

    pub const fn new(bits: u32) -> Self {
        Self(bits)
    }

    /// Which horizontal anchor the flags name
    ///
    /// `LEFT` is zero, so an empty group means left.
    pub const fn horizontal(self) -> HorizontalAlign {
        match self.0 & Self::HORIZONTAL_MASK {
            Self::LEFT => HorizontalAlign::Left,
            Self::RIGHT => HorizontalAlign::Right,
            Self::CENTER => HorizontalAlign::Center,
            _ => HorizontalAlign::Unspecified,
        }
    }

    /// Which vertical anchor the flags name
    ///
    /// `TOP` is zero, so an empty group means top.
    pub const fn vertical(self) -> VerticalAlign {
        match self.0 & Self::VERTICAL_MASK {
            Self::TOP => VerticalAlign::Top,
            Self::BOTTOM => VerticalAlign::Bottom,
            Self::BASELINE => VerticalAlign::Baseline,
            _ => VerticalAlign::Unspecified,
        }
    }
}

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum HorizontalAlign {
    Left,
    Right,
    Center,
    /// Mask bits that match no single flag; the x coordinate is left alone
    Unspecified,
}

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum VerticalAlign {
    Top,
    Bottom,
    Baseline,
    /// Mask bits that match no single flag; the y coordinate is left alone
    Unspecified,
}

/// Move a reference point to the left end of the text baseline
///
/// * `width` - advance width of the whole string
/// * `ascent`, `descent` - font metrics in device units, both positive
///
/// Centering halves the width with integer division, truncating toward zero.
pub fn baseline(align: TextAlign, x: i32, y: i32, width: i32, ascent: i32, descent: i32) -> Point {
    let mut origin = Point::new(x, y);

    match align.horizontal() {
        HorizontalAlign::Left | HorizontalAlign::Unspecified => {}
        HorizontalAlign::Right => origin.x -= width,
        HorizontalAlign::Center => origin.x -= width / 2,
    }

    match align.vertical() {
        VerticalAlign::Top => origin.y += ascent,
        VerticalAlign::Bottom => origin.y -= descent,
        VerticalAlign::Baseline | VerticalAlign::Unspecified => {}
    }

    origin
}
