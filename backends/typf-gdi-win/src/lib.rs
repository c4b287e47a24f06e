//! GDI device contexts, seen through `typf-gdi-core`
//!
//! The hook receives a raw `HDC` from whatever `ExtTextOut` call it
//! intercepted. Wrap it in a [`GdiDc`] and the helpers in
//! `typf_gdi_core::device` can read its bitmap, font and metrics, and
//! paint its background.
//!
//! ```ignore
//! use typf_gdi_core::device::{dc_bitmap_info, logical_font};
//! use typf_gdi_win::GdiDc;
//!
//! let dc = GdiDc::new(hdc);
//! let depth = dc_bitmap_info(&dc)?.bits_per_pixel;
//! let font = logical_font(&dc)?;
//! ```

#![cfg(windows)]
#![allow(unsafe_code)]

use std::ffi::c_void;
use std::mem::size_of;

use typf_gdi_core::surface::{BitmapInfo, LogicalFont, OutlineMetrics, TextMetrics};
use typf_gdi_core::{ColorRef, DeviceContext, GdiError, Rect, Result};

use windows::Win32::Foundation::{COLORREF, RECT};
use windows::Win32::Graphics::Gdi::{
    CreateCompatibleDC, CreateSolidBrush, DeleteDC, DeleteObject, FillRect, GetCurrentObject,
    GetDIBits, GetObjectW, GetOutlineTextMetricsW, BITMAPINFO, BITMAPINFOHEADER, DIB_RGB_COLORS,
    HBITMAP, HBRUSH, HDC, LOGFONTW, OBJ_BITMAP, OBJ_FONT, OUTLINETEXTMETRICW,
};

/// A borrowed `HDC`
///
/// The handle stays owned by whoever created it; dropping a `GdiDc`
/// releases nothing.
#[derive(Clone, Copy, Debug)]
pub struct GdiDc {
    hdc: HDC,
}

/// A solid brush created for one fill
#[derive(Debug)]
pub struct GdiBrush(HBRUSH);

impl GdiDc {
    pub fn new(hdc: HDC) -> Self {
        Self { hdc }
    }

    pub fn hdc(&self) -> HDC {
        self.hdc
    }
}

fn to_rect(rect: &Rect) -> RECT {
    RECT {
        left: rect.left,
        top: rect.top,
        right: rect.right,
        bottom: rect.bottom,
    }
}

/// Read a NUL-terminated UTF-16 string starting `offset` bytes into `buf`
///
/// `OUTLINETEXTMETRICW` stores its names this way, with offset 0 meaning
/// the name is absent.
fn wide_string_at(buf: &[u8], offset: usize) -> String {
    if offset == 0 {
        return String::new();
    }
    let Some(tail) = buf.get(offset..) else {
        return String::new();
    };
    let units: Vec<u16> = tail
        .chunks_exact(2)
        .map(|pair| u16::from_le_bytes([pair[0], pair[1]]))
        .take_while(|&unit| unit != 0)
        .collect();
    String::from_utf16_lossy(&units)
}

fn face_name(raw: &[u16]) -> String {
    let len = raw.iter().position(|&unit| unit == 0).unwrap_or(raw.len());
    String::from_utf16_lossy(&raw[..len])
}

impl DeviceContext for GdiDc {
    type Brush = GdiBrush;

    fn bitmap_info(&self) -> Option<BitmapInfo> {
        unsafe {
            let object = GetCurrentObject(self.hdc, OBJ_BITMAP);
            if object.is_invalid() {
                return None;
            }
            let bitmap = HBITMAP(object.0);

            let mut bmi = BITMAPINFO::default();
            bmi.bmiHeader.biSize = size_of::<BITMAPINFOHEADER>() as u32;
            // Zero scan lines and no buffer: only the header gets filled
            let lines = GetDIBits(self.hdc, bitmap, 0, 0, None, &mut bmi, DIB_RGB_COLORS);
            if lines == 0 {
                log::debug!("GetDIBits could not describe the selected bitmap");
                return None;
            }

            let header = &bmi.bmiHeader;
            Some(BitmapInfo {
                width: header.biWidth,
                height: header.biHeight,
                planes: header.biPlanes,
                bits_per_pixel: header.biBitCount,
                compression: header.biCompression,
                size_image: header.biSizeImage,
            })
        }
    }

    fn outline_metrics_size(&self) -> u32 {
        unsafe { GetOutlineTextMetricsW(self.hdc, 0, None) }
    }

    fn read_outline_metrics(&self, buf: &mut [u8]) -> u32 {
        if buf.len() < size_of::<OUTLINETEXTMETRICW>() {
            return 0;
        }
        unsafe {
            GetOutlineTextMetricsW(
                self.hdc,
                buf.len() as u32,
                Some(buf.as_mut_ptr().cast::<OUTLINETEXTMETRICW>()),
            )
        }
    }

    fn decode_outline_metrics(&self, buf: &[u8]) -> Option<OutlineMetrics> {
        if buf.len() < size_of::<OUTLINETEXTMETRICW>() {
            return None;
        }
        // The byte buffer has no alignment guarantee
        let otm: OUTLINETEXTMETRICW =
            unsafe { std::ptr::read_unaligned(buf.as_ptr().cast::<OUTLINETEXTMETRICW>()) };
        let tm = &otm.otmTextMetrics;

        Some(OutlineMetrics {
            text: TextMetrics {
                height: tm.tmHeight,
                ascent: tm.tmAscent,
                descent: tm.tmDescent,
                internal_leading: tm.tmInternalLeading,
                external_leading: tm.tmExternalLeading,
                ave_char_width: tm.tmAveCharWidth,
                max_char_width: tm.tmMaxCharWidth,
                weight: tm.tmWeight,
                italic: tm.tmItalic != 0,
            },
            em_square: otm.otmEMSquare,
            ascent: otm.otmAscent,
            descent: otm.otmDescent,
            line_gap: otm.otmLineGap,
            cap_height: otm.otmsCapEmHeight,
            x_height: otm.otmsXHeight,
            family_name: wide_string_at(buf, otm.otmpFamilyName.0 as usize),
            face_name: wide_string_at(buf, otm.otmpFaceName.0 as usize),
            style_name: wide_string_at(buf, otm.otmpStyleName.0 as usize),
            full_name: wide_string_at(buf, otm.otmpFullName.0 as usize),
        })
    }

    fn logical_font(&self) -> Option<LogicalFont> {
        unsafe {
            let font = GetCurrentObject(self.hdc, OBJ_FONT);
            if font.is_invalid() {
                return None;
            }

            let mut lf = LOGFONTW::default();
            let copied = GetObjectW(
                font,
                size_of::<LOGFONTW>() as i32,
                Some((&mut lf as *mut LOGFONTW).cast::<c_void>()),
            );
            if copied == 0 {
                log::debug!("GetObjectW could not read the selected font");
                return None;
            }

            Some(LogicalFont {
                height: lf.lfHeight,
                width: lf.lfWidth,
                escapement: lf.lfEscapement,
                orientation: lf.lfOrientation,
                weight: lf.lfWeight,
                italic: lf.lfItalic != 0,
                underline: lf.lfUnderline != 0,
                strike_out: lf.lfStrikeOut != 0,
                char_set: lf.lfCharSet.0,
                out_precision: lf.lfOutPrecision.0,
                clip_precision: lf.lfClipPrecision.0,
                quality: lf.lfQuality.0,
                pitch_and_family: lf.lfPitchAndFamily,
                face_name: face_name(&lf.lfFaceName),
            })
        }
    }

    fn create_solid_brush(&self, color: ColorRef) -> Option<GdiBrush> {
        let brush = unsafe { CreateSolidBrush(COLORREF(color.0)) };
        if brush.is_invalid() {
            None
        } else {
            Some(GdiBrush(brush))
        }
    }

    fn fill_rect(&self, rect: &Rect, brush: &GdiBrush) -> bool {
        let rect = to_rect(rect);
        unsafe { FillRect(self.hdc, &rect, brush.0) != 0 }
    }

    fn delete_brush(&self, brush: GdiBrush) {
        let deleted = unsafe { DeleteObject(brush.0) };
        if !deleted.as_bool() {
            log::warn!("DeleteObject failed for brush {:?}", brush.0);
        }
    }
}

/// A memory DC compatible with the screen, deleted on drop
///
/// Fresh memory DCs come with GDI's stock 1x1 monochrome bitmap and the
/// system font selected.
#[derive(Debug)]
pub struct MemoryDc {
    hdc: HDC,
}

impl MemoryDc {
    pub fn new() -> Result<Self> {
        let hdc = unsafe { CreateCompatibleDC(HDC::default()) };
        if hdc.is_invalid() {
            return Err(GdiError::Platform("CreateCompatibleDC failed".to_string()));
        }
        Ok(Self { hdc })
    }

    pub fn dc(&self) -> GdiDc {
        GdiDc::new(self.hdc)
    }
}

impl Drop for MemoryDc {
    fn drop(&mut self) {
        unsafe {
            let _ = DeleteDC(self.hdc);
        }
    }
}
