//! Fixed-point bridges between GDI and the outline rasterizer
//!
//! GDI hands us transforms as `FIXED` (16.16 split into two words) and
//! floats. The rasterizer wants 26.6 for positions and 16.16 for scale
//! factors. Every conversion here is a plain shift or multiply with
//! truncation, no range checks: callers keep their values in range.

/// The platform `FIXED` struct: a 16.16 value split into fraction and integer words
///
/// The fraction word sits in the low half, so reading both words as one
/// little-endian `i32` gives the ordinary 16.16 bit pattern.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
pub struct GdiFixed {
    pub fract: u16,
    pub value: i16,
}

impl GdiFixed {
    /// Raw 16.16 bit pattern
    #[inline]
    pub const fn to_bits(self) -> i32 {
        ((self.value as i32) << 16) | self.fract as i32
    }

    /// Split a raw 16.16 bit pattern into its two words
    #[inline]
    pub const fn from_bits(bits: i32) -> Self {
        Self {
            fract: bits as u16,
            value: (bits >> 16) as i16,
        }
    }

    /// Build a `FIXED` from a float, truncating below 1/65536
    #[inline]
    pub fn from_f64(x: f64) -> Self {
        Self::from_bits((x * 65536.0) as i32)
    }
}

/// 26.6 fixed point: 26 integer bits, 6 fractional bits
///
/// ```rust
/// use typf_gdi_core::fixed::{F26Dot6, GdiFixed};
///
/// let one = GdiFixed { fract: 0, value: 1 };
/// assert_eq!(F26Dot6::from_gdi_fixed(one), F26Dot6::ONE);
/// ```
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[repr(transparent)]
pub struct F26Dot6(i32);

impl F26Dot6 {
    pub const FRAC_BITS: u32 = 6;
    pub const ONE: F26Dot6 = F26Dot6(1 << Self::FRAC_BITS);

    #[inline]
    pub const fn from_int(x: i32) -> Self {
        F26Dot6(x << Self::FRAC_BITS)
    }

    /// Reinterpret a `FIXED` as 26.6 by dropping 10 fractional bits
    ///
    /// The shift is arithmetic, so negative values round toward negative
    /// infinity. Values past the 26-bit integer range wrap like the
    /// underlying two's-complement shift.
    #[inline]
    pub const fn from_gdi_fixed(x: GdiFixed) -> Self {
        F26Dot6(x.to_bits() >> 10)
    }

    /// Scale a float by 32 and truncate toward zero
    ///
    /// This is the factor the hook has always applied to float text
    /// transforms: half a 26.6 unit per 1/64. Out-of-range inputs saturate
    /// at the `i32` bounds and NaN becomes zero.
    #[inline]
    pub fn from_half_scaled(x: f32) -> Self {
        F26Dot6((x * 32.0) as i32)
    }

    /// Whole pixels, rounding toward negative infinity
    #[inline]
    pub const fn to_int(self) -> i32 {
        self.0 >> Self::FRAC_BITS
    }

    #[inline]
    pub const fn raw(self) -> i32 {
        self.0
    }

    #[inline]
    pub const fn from_raw(raw: i32) -> Self {
        F26Dot6(raw)
    }
}

impl From<GdiFixed> for F26Dot6 {
    #[inline]
    fn from(x: GdiFixed) -> Self {
        Self::from_gdi_fixed(x)
    }
}

/// 16.16 fixed point, the rasterizer's format for scale factors and matrices
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[repr(transparent)]
pub struct F16Dot16(i32);

impl F16Dot16 {
    pub const FRAC_BITS: u32 = 16;
    pub const ONE: F16Dot16 = F16Dot16(1 << Self::FRAC_BITS);

    #[inline]
    pub const fn from_int(x: i32) -> Self {
        F16Dot16(x << Self::FRAC_BITS)
    }

    /// Scale by 65536 and truncate
    ///
    /// No overflow check: anything outside roughly ±32768 saturates at the
    /// `i32` bounds instead of producing a meaningful value.
    #[inline]
    pub fn from_f64(x: f64) -> Self {
        F16Dot16((x * 65536.0) as i32)
    }

    /// Drop the fraction with an arithmetic shift (floor for negatives)
    #[inline]
    pub const fn to_int(self) -> i32 {
        self.0 >> Self::FRAC_BITS
    }

    #[inline]
    pub fn to_f64(self) -> f64 {
        self.0 as f64 / 65536.0
    }

    #[inline]
    pub const fn raw(self) -> i32 {
        self.0
    }

    #[inline]
    pub const fn from_raw(raw: i32) -> Self {
        F16Dot16(raw)
    }
}

impl From<GdiFixed> for F16Dot16 {
    #[inline]
    fn from(x: GdiFixed) -> Self {
        F16Dot16(x.to_bits())
    }
}

/// `FIXED` to raw 26.6
#[inline]
pub const fn to_26dot6_fixed(x: GdiFixed) -> i32 {
    F26Dot6::from_gdi_fixed(x).raw()
}

/// Float to raw 26.6 using the half-scale factor (`x * 32`)
#[inline]
pub fn to_26dot6(x: f32) -> i32 {
    F26Dot6::from_half_scaled(x).raw()
}

/// Raw 16.16 to whole units
#[inline]
pub const fn from_16dot16(x: i32) -> i32 {
    F16Dot16::from_raw(x).to_int()
}

/// Float to raw 16.16
#[inline]
pub fn to_16dot16(x: f64) -> i32 {
    F16Dot16::from_f64(x).raw()
}
