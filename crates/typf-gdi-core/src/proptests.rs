use crate::align::{baseline, TextAlign};
use crate::fixed::{from_16dot16, to_16dot16, F26Dot6, GdiFixed};
use crate::glyph_run::{glyph_run_rect, GlyphBitmap, PixelMode};
use crate::pitch::{bitmap_pitch, ROW_ALIGNMENT};
use crate::render_mode::{select_render_mode, FontQuality, RenderMode};
use crate::settings::FontSettings;
use crate::types::{Point, Rect};
use proptest::prelude::*;
use std::collections::HashMap;

fn alignments() -> impl Strategy<Value = u32> {
    (
        prop::sample::select(vec![TextAlign::LEFT, TextAlign::RIGHT, TextAlign::CENTER]),
        prop::sample::select(vec![TextAlign::TOP, TextAlign::BOTTOM, TextAlign::BASELINE]),
        any::<bool>(),
    )
        .prop_map(|(h, v, cp)| h | v | if cp { TextAlign::UPDATECP } else { 0 })
}

// Property: each axis moves by exactly the amount its flag names
proptest! {
    #[test]
    fn prop_baseline_offsets(
        bits in alignments(),
        x in -10_000i32..10_000,
        y in -10_000i32..10_000,
        width in 0i32..10_000,
        ascent in 0i32..1_000,
        descent in 0i32..1_000,
    ) {
        let origin = baseline(TextAlign::new(bits), x, y, width, ascent, descent);

        let expected_x = match bits & (TextAlign::RIGHT | TextAlign::CENTER) {
            TextAlign::RIGHT => x - width,
            TextAlign::CENTER => x - width / 2,
            _ => x,
        };
        let expected_y = match bits & TextAlign::BASELINE {
            TextAlign::BOTTOM => y - descent,
            TextAlign::BASELINE => y,
            _ => y + ascent,
        };

        prop_assert_eq!(origin, Point::new(expected_x, expected_y));
    }
}

// Property: whole numbers survive a trip through 16.16
proptest! {
    #[test]
    fn prop_16dot16_integer_round_trip(n in -32_768i32..=32_767) {
        prop_assert_eq!(from_16dot16(to_16dot16(n as f64)), n);
    }
}

// Property: FIXED to 26.6 keeps the integer part intact
proptest! {
    #[test]
    fn prop_fixed_integer_part(value in any::<i16>(), fract in any::<u16>()) {
        let f = F26Dot6::from_gdi_fixed(GdiFixed { fract, value });
        prop_assert_eq!(f.to_int(), value as i32);
    }
}

// Property: pitch is word aligned and never smaller than the packed row
proptest! {
    #[test]
    fn prop_pitch_aligned_and_sufficient(
        width in any::<u32>(),
        bpp in prop::sample::select(vec![1u16, 4, 8, 16, 24, 32]),
    ) {
        let packed = (width as u64 * bpp as u64).div_ceil(8);
        match bitmap_pitch(width, bpp) {
            Some(pitch) => {
                let pitch = pitch as u64;
                prop_assert_eq!(pitch % ROW_ALIGNMENT as u64, 0);
                prop_assert!(pitch >= packed);
                prop_assert!(pitch < packed + ROW_ALIGNMENT as u64);
            }
            None => prop_assert!(packed.next_multiple_of(ROW_ALIGNMENT as u64) > u32::MAX as u64),
        }
    }
}

// Property: a lone glyph's rectangle hugs it, with the left edge clamped to the origin
proptest! {
    #[test]
    fn prop_single_glyph_rect(
        x in -500i32..500,
        y in -500i32..500,
        width in 0u32..200,
        rows in 0u32..200,
    ) {
        let glyph = GlyphBitmap::empty(width, rows, PixelMode::Gray);
        let rect = glyph_run_rect(&[glyph], &[Point::new(x, y)]).unwrap();
        prop_assert_eq!(rect, Rect::new(x.min(0), y, x + width as i32, y + rows as i32));
    }
}

// Property: reversing a run's order doesn't change its rectangle
proptest! {
    #[test]
    fn prop_run_direction_symmetry(
        x0 in 0i32..500,
        dx in 1i32..500,
        y in -100i32..100,
        w0 in 1u32..50,
        w1 in 1u32..50,
        rows in 1u32..50,
    ) {
        let a = GlyphBitmap::empty(w0, rows, PixelMode::Mono);
        let b = GlyphBitmap::empty(w1, rows, PixelMode::Mono);
        let (pa, pb) = (Point::new(x0, y), Point::new(x0 + dx, y));

        let ltr = glyph_run_rect(&[a.clone(), b.clone()], &[pa, pb]).unwrap();
        let rtl = glyph_run_rect(&[b, a], &[pb, pa]).unwrap();
        prop_assert_eq!(ltr, rtl);
    }
}

// Property: 1 bpp surfaces are monochrome whatever the settings say
proptest! {
    #[test]
    fn prop_one_bpp_always_mono(
        render_non_aa in any::<bool>(),
        subpixel_render in any::<bool>(),
        quality in 0u8..8,
    ) {
        let mut settings = HashMap::new();
        settings.insert("F".to_string(), FontSettings { render_non_aa, subpixel_render });
        let mode = select_render_mode(&settings, "F", FontQuality::from(quality), 1).unwrap();
        prop_assert_eq!(mode, RenderMode::Mono);
    }
}
