//! Row stride for DIB-compatible bitmaps
//!
//! Every scanline of a device-independent bitmap starts on a `LONG`
//! boundary, so the byte width of a row is rounded up twice: once to whole
//! bytes, then to whole words.

/// Row alignment of a DIB scanline, the size of the platform `LONG`
pub const ROW_ALIGNMENT: u32 = 4;

/// Bytes per row for a bitmap `width` pixels wide at `bits_per_pixel`
///
/// `None` when the padded row doesn't fit in a `u32`.
///
/// ```rust
/// use typf_gdi_core::pitch::bitmap_pitch;
///
/// assert_eq!(bitmap_pitch(1, 1), Some(4));
/// assert_eq!(bitmap_pitch(33, 1), Some(8));
/// assert_eq!(bitmap_pitch(3, 24), Some(12));
/// assert_eq!(bitmap_pitch(u32::MAX, 32), None);
/// ```
pub fn bitmap_pitch(width: u32, bits_per_pixel: u16) -> Option<u32> {
    let bits = width as u64 * bits_per_pixel as u64;
    let bytes = bits.div_ceil(8);
    u32::try_from(bytes.next_multiple_of(ROW_ALIGNMENT as u64)).ok()
}
