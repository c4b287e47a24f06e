//! Error types for the GDI helpers
//!
//! Two kinds of failure live here. Contract violations (no bitmap selected,
//! an invalid color, a glyph run with no glyphs) surface as
//! [`GdiError::InvariantViolated`]: the caller broke a promise and the draw
//! must not continue. Everything else is recoverable, and the hook decides
//! whether to skip the draw or hand it back to GDI.

use thiserror::Error;

pub type Result<T> = std::result::Result<T, GdiError>;

/// Main error type for the GDI helpers
#[derive(Debug, Error)]
pub enum GdiError {
    #[error("Invariant violated: {0}")]
    InvariantViolated(String),

    #[error("Failed to create solid brush")]
    BrushCreation,

    #[error("Failed to fill background rectangle")]
    FillRect,

    #[error("Selected font has no outline metrics")]
    NoOutlineMetrics,

    #[error("Unsupported surface bit depth: {0} bpp")]
    UnsupportedBitDepth(u16),

    #[error("Platform call failed: {0}")]
    Platform(String),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Settings parse error: {0}")]
    Json(#[from] serde_json::Error),
}

impl GdiError {
    /// Build an invariant violation and log it on the way out
    pub(crate) fn invariant(msg: impl Into<String>) -> Self {
        let msg = msg.into();
        log::error!("typf-gdi invariant violated: {msg}");
        GdiError::InvariantViolated(msg)
    }

    /// Did the caller (or the platform) break a contract?
    ///
    /// Fatal errors mean the draw path is in an impossible state. Recoverable
    /// ones mean this surface or font simply can't be handled here.
    pub fn is_fatal(&self) -> bool {
        matches!(self, GdiError::InvariantViolated(_))
    }
}
