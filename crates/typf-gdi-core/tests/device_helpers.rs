use std::cell::{Cell, RefCell};

use typf_gdi_core::device::{dc_bitmap_info, dc_metrics, draw_background, logical_font};
use typf_gdi_core::surface::{BitmapInfo, DeviceContext, LogicalFont, OutlineMetrics, TextMetrics};
use typf_gdi_core::{ColorRef, FontQuality, GdiError, Rect};

fn init_logging() {
    let _ = env_logger::builder().is_test(true).try_init();
}

/// A memory DC stand-in that records what was drawn
///
/// Outline metrics are stored as a little header (em square, ascent,
/// descent) followed by the UTF-8 family name, so the two-phase read has
/// real bytes to move around.
#[derive(Default)]
struct FakeDc {
    bitmap: Option<BitmapInfo>,
    font: Option<LogicalFont>,
    metrics: Option<(u32, i32, i32, String)>,
    /// Size reported by the second metrics call, when it disagrees with the first
    shrink_metrics_to: Option<u32>,
    fail_brush: bool,
    fail_fill: bool,
    fills: RefCell<Vec<(Rect, ColorRef)>>,
    live_brushes: Cell<i32>,
}

impl FakeDc {
    fn memory_dc(bits_per_pixel: u16) -> Self {
        Self {
            bitmap: Some(BitmapInfo {
                width: 64,
                height: -32,
                planes: 1,
                bits_per_pixel,
                compression: 0,
                size_image: 0,
            }),
            font: Some(LogicalFont {
                height: -16,
                weight: 400,
                quality: 5,
                face_name: "Tahoma".to_string(),
                ..Default::default()
            }),
            metrics: Some((2048, 2059, 430, "Tahoma".to_string())),
            ..Default::default()
        }
    }

    fn encoded_metrics(&self) -> Option<Vec<u8>> {
        let (em, ascent, descent, family) = self.metrics.as_ref()?;
        let mut buf = Vec::new();
        buf.extend_from_slice(&em.to_le_bytes());
        buf.extend_from_slice(&ascent.to_le_bytes());
        buf.extend_from_slice(&descent.to_le_bytes());
        buf.extend_from_slice(family.as_bytes());
        Some(buf)
    }
}

impl DeviceContext for FakeDc {
    type Brush = ColorRef;

    fn bitmap_info(&self) -> Option<BitmapInfo> {
        self.bitmap
    }

    fn outline_metrics_size(&self) -> u32 {
        self.encoded_metrics().map_or(0, |buf| buf.len() as u32)
    }

    fn read_outline_metrics(&self, buf: &mut [u8]) -> u32 {
        let Some(encoded) = self.encoded_metrics() else {
            return 0;
        };
        if buf.len() < encoded.len() {
            return 0;
        }
        buf[..encoded.len()].copy_from_slice(&encoded);
        self.shrink_metrics_to.unwrap_or(encoded.len() as u32)
    }

    fn decode_outline_metrics(&self, buf: &[u8]) -> Option<OutlineMetrics> {
        let word = |i: usize| -> Option<[u8; 4]> { buf.get(i..i + 4)?.try_into().ok() };
        let em_square = u32::from_le_bytes(word(0)?);
        let ascent = i32::from_le_bytes(word(4)?);
        let descent = i32::from_le_bytes(word(8)?);
        let family_name = String::from_utf8(buf.get(12..)?.to_vec()).ok()?;
        Some(OutlineMetrics {
            text: TextMetrics {
                ascent,
                descent,
                height: ascent + descent,
                ..Default::default()
            },
            em_square,
            ascent,
            descent: -descent,
            face_name: family_name.clone(),
            family_name,
            ..Default::default()
        })
    }

    fn logical_font(&self) -> Option<LogicalFont> {
        self.font.clone()
    }

    fn create_solid_brush(&self, color: ColorRef) -> Option<ColorRef> {
        if self.fail_brush {
            return None;
        }
        self.live_brushes.set(self.live_brushes.get() + 1);
        Some(color)
    }

    fn fill_rect(&self, rect: &Rect, brush: &ColorRef) -> bool {
        if self.fail_fill {
            return false;
        }
        self.fills.borrow_mut().push((*rect, *brush));
        true
    }

    fn delete_brush(&self, _brush: ColorRef) {
        self.live_brushes.set(self.live_brushes.get() - 1);
    }
}

#[test]
fn background_fills_rect_and_releases_brush() {
    init_logging();
    let dc = FakeDc::memory_dc(32);
    let rect = Rect::new(0, 0, 40, 18);
    let color = ColorRef::rgb(255, 255, 224);

    draw_background(&dc, &rect, color).unwrap();

    assert_eq!(dc.fills.borrow().as_slice(), &[(rect, color)]);
    assert_eq!(dc.live_brushes.get(), 0, "brush must be released");
}

#[test]
fn background_fill_failure_still_releases_brush() {
    init_logging();
    let dc = FakeDc {
        fail_fill: true,
        ..FakeDc::memory_dc(32)
    };

    let err = draw_background(&dc, &Rect::new(0, 0, 1, 1), ColorRef::rgb(0, 0, 0)).unwrap_err();

    assert!(matches!(err, GdiError::FillRect));
    assert!(!err.is_fatal());
    assert_eq!(dc.live_brushes.get(), 0);
}

#[test]
fn background_brush_failure_is_recoverable() {
    init_logging();
    let dc = FakeDc {
        fail_brush: true,
        ..FakeDc::memory_dc(32)
    };

    let err = draw_background(&dc, &Rect::new(0, 0, 1, 1), ColorRef::rgb(0, 0, 0)).unwrap_err();

    assert!(matches!(err, GdiError::BrushCreation));
    assert!(dc.fills.borrow().is_empty());
}

#[test]
fn background_rejects_invalid_color() {
    init_logging();
    let dc = FakeDc::memory_dc(32);

    let err = draw_background(&dc, &Rect::new(0, 0, 1, 1), ColorRef::INVALID).unwrap_err();

    assert!(err.is_fatal());
    assert!(dc.fills.borrow().is_empty());
    assert_eq!(dc.live_brushes.get(), 0);
}

#[test]
fn bitmap_info_reports_selected_bitmap() {
    let dc = FakeDc::memory_dc(24);
    let info = dc_bitmap_info(&dc).unwrap();
    assert_eq!(info.bits_per_pixel, 24);
    assert_eq!(info.width, 64);
}

#[test]
fn bitmap_info_without_bitmap_is_fatal() {
    init_logging();
    let dc = FakeDc {
        bitmap: None,
        ..FakeDc::memory_dc(24)
    };
    assert!(dc_bitmap_info(&dc).unwrap_err().is_fatal());
}

#[test]
fn bitmap_info_with_zero_depth_is_fatal() {
    init_logging();
    let dc = FakeDc::memory_dc(0);
    assert!(matches!(
        dc_bitmap_info(&dc).unwrap_err(),
        GdiError::InvariantViolated(_)
    ));
}

#[test]
fn metrics_are_read_in_one_call() {
    init_logging();
    let dc = FakeDc::memory_dc(32);

    let metrics = dc_metrics(&dc).unwrap();

    assert_eq!(metrics.raw().len(), 12 + "Tahoma".len());
    assert_eq!(metrics.metrics().em_square, 2048);
    assert_eq!(metrics.metrics().text.ascent, 2059);
    assert_eq!(metrics.metrics().descent, -430);
    assert_eq!(metrics.into_metrics().family_name, "Tahoma");
}

#[test]
fn metrics_missing_for_bitmap_fonts() {
    init_logging();
    let dc = FakeDc {
        metrics: None,
        ..FakeDc::memory_dc(32)
    };

    let err = dc_metrics(&dc).unwrap_err();

    assert!(matches!(err, GdiError::NoOutlineMetrics));
    assert!(!err.is_fatal());
}

#[test]
fn metrics_size_change_is_fatal() {
    init_logging();
    let dc = FakeDc {
        shrink_metrics_to: Some(4),
        ..FakeDc::memory_dc(32)
    };
    assert!(dc_metrics(&dc).unwrap_err().is_fatal());

    let dc = FakeDc {
        shrink_metrics_to: Some(0),
        ..FakeDc::memory_dc(32)
    };
    assert!(dc_metrics(&dc).unwrap_err().is_fatal());
}

#[test]
fn logical_font_reads_selected_font() {
    let dc = FakeDc::memory_dc(32);
    let font = logical_font(&dc).unwrap();
    assert_eq!(font.face_name, "Tahoma");
    assert_eq!(font.font_quality(), FontQuality::ClearType);
}

#[test]
fn logical_font_without_font_is_fatal() {
    init_logging();
    let dc = FakeDc {
        font: None,
        ..FakeDc::memory_dc(32)
    };
    assert!(logical_font(&dc).unwrap_err().is_fatal());
}
