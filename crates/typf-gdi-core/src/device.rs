//! Reading the DC the hook was handed, and painting its background
//!
//! These run once per intercepted `ExtTextOut`: find out what kind of
//! bitmap we're drawing into, which font is selected and how it measures,
//! and fill the opaque background when the caller asked for one.

use crate::error::{GdiError, Result};
use crate::surface::{BitmapInfo, DeviceContext, LogicalFont, OutlineMetrics};
use crate::types::{ColorRef, Rect};

/// Owns a brush and returns it to the DC when dropped
struct BrushGuard<'a, D: DeviceContext + ?Sized> {
    dc: &'a D,
    brush: Option<D::Brush>,
}

impl<'a, D: DeviceContext + ?Sized> BrushGuard<'a, D> {
    fn create(dc: &'a D, color: ColorRef) -> Option<Self> {
        let brush = dc.create_solid_brush(color)?;
        Some(Self {
            dc,
            brush: Some(brush),
        })
    }

    fn brush(&self) -> Option<&D::Brush> {
        self.brush.as_ref()
    }
}

impl<D: DeviceContext + ?Sized> Drop for BrushGuard<'_, D> {
    fn drop(&mut self) {
        if let Some(brush) = self.brush.take() {
            self.dc.delete_brush(brush);
        }
    }
}

/// Fill `rect` with a solid `color`
///
/// The brush is released whether or not the fill succeeds.
pub fn draw_background<D: DeviceContext + ?Sized>(dc: &D, rect: &Rect, color: ColorRef) -> Result<()> {
    if color == ColorRef::INVALID {
        return Err(GdiError::invariant("background color is CLR_INVALID"));
    }

    let guard = BrushGuard::create(dc, color).ok_or_else(|| {
        log::warn!("CreateSolidBrush failed for color {color:?}");
        GdiError::BrushCreation
    })?;

    let filled = guard.brush().is_some_and(|brush| dc.fill_rect(rect, brush));
    if !filled {
        log::warn!("FillRect failed for {rect:?}");
        return Err(GdiError::FillRect);
    }

    Ok(())
}

/// Pixel format of the bitmap selected into `dc`
///
/// Memory DCs always have a bitmap selected, and it always has a depth. If
/// either is missing the hook was handed something it can't draw into.
pub fn dc_bitmap_info<D: DeviceContext + ?Sized>(dc: &D) -> Result<BitmapInfo> {
    let info = dc
        .bitmap_info()
        .ok_or_else(|| GdiError::invariant("no readable bitmap selected into the DC"))?;

    if info.bits_per_pixel == 0 {
        return Err(GdiError::invariant("selected bitmap reports 0 bits per pixel"));
    }

    Ok(info)
}

/// Outline metrics together with the buffer they were read from
///
/// The name strings of `OUTLINETEXTMETRICW` live past the end of the
/// struct, so the whole buffer stays alive alongside the decoded view.
#[derive(Clone, Debug)]
pub struct DcMetrics {
    buffer: Vec<u8>,
    metrics: OutlineMetrics,
}

impl DcMetrics {
    pub fn metrics(&self) -> &OutlineMetrics {
        &self.metrics
    }

    pub fn raw(&self) -> &[u8] {
        &self.buffer
    }

    pub fn into_metrics(self) -> OutlineMetrics {
        self.metrics
    }
}

/// Outline metrics of the font selected into `dc`
///
/// Fails with [`GdiError::NoOutlineMetrics`] for bitmap and vector fonts,
/// which the hook leaves to GDI.
pub fn dc_metrics<D: DeviceContext + ?Sized>(dc: &D) -> Result<DcMetrics> {
    let size = dc.outline_metrics_size();
    if size == 0 {
        log::debug!("selected font has no outline metrics");
        return Err(GdiError::NoOutlineMetrics);
    }

    let mut buffer = vec![0u8; size as usize];
    let written = dc.read_outline_metrics(&mut buffer);
    if written == 0 {
        return Err(GdiError::invariant(format!(
            "outline metrics vanished between size query ({size} bytes) and read"
        )));
    }
    if written != size {
        return Err(GdiError::invariant(format!(
            "outline metrics size changed from {size} to {written} bytes"
        )));
    }

    let metrics = dc
        .decode_outline_metrics(&buffer)
        .ok_or_else(|| GdiError::invariant("outline metrics buffer could not be decoded"))?;

    log::debug!(
        "outline metrics for '{}': {} bytes, em {}",
        metrics.family_name,
        size,
        metrics.em_square
    );

    Ok(DcMetrics { buffer, metrics })
}

/// The logical font selected into `dc`
pub fn logical_font<D: DeviceContext + ?Sized>(dc: &D) -> Result<LogicalFont> {
    dc.logical_font()
        .ok_or_else(|| GdiError::invariant("no font selected into the DC"))
}
