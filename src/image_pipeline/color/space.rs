//! Integer RGB <-> HSV conversion on 8-bit channels.
//!
//! The two functions are inverses only up to 8-bit truncation: gray colors
//! round-trip exactly, saturated colors can drift by a few units per channel.

use crate::image_pipeline::color::types::{HsvColor, RgbColor};

/// Width of one hue sector on the 0-255 wheel.
const SECTOR: i32 = 43;

/// Converts RGB to HSV with hue, saturation and value all on 0-255.
///
/// Pure black maps to `(0, 0, 0)` and any gray to `(0, 0, v)`. Hue is computed
/// in `i32` and then truncated to 8 bits, so negative sector offsets wrap
/// around the top of the wheel (e.g. a red leaning toward magenta lands near 255).
#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
pub fn rgb_to_hsv(rgb: RgbColor) -> HsvColor {
    let (r, g, b) = (i32::from(rgb.r), i32::from(rgb.g), i32::from(rgb.b));
    let max = r.max(g).max(b);
    let min = r.min(g).min(b);

    if max == 0 {
        return HsvColor::new(0, 0, 0);
    }

    let v = max as u8;
    let delta = max - min;
    let s = (255 * delta / max) as u8;
    if s == 0 {
        return HsvColor::new(0, 0, v);
    }

    let h = if max == r {
        SECTOR * (g - b) / delta
    } else if max == g {
        85 + SECTOR * (b - r) / delta
    } else {
        171 + SECTOR * (r - g) / delta
    };

    HsvColor::new(h as u8, s, v)
}

/// Converts HSV (all components 0-255) back to RGB.
#[allow(clippy::cast_possible_truncation)]
pub fn hsv_to_rgb(hsv: HsvColor) -> RgbColor {
    if hsv.s == 0 {
        return RgbColor::new(hsv.v, hsv.v, hsv.v);
    }

    let h = u32::from(hsv.h);
    let s = u32::from(hsv.s);
    let v = u32::from(hsv.v);

    let region = h / SECTOR as u32;
    let remainder = ((h - region * SECTOR as u32) * 6) & 0xff;

    // 8.8 fixed point: multiply, then drop the fractional byte
    let p = ((v * (255 - s)) >> 8) as u8;
    let q = ((v * (255 - ((s * remainder) >> 8))) >> 8) as u8;
    let t = ((v * (255 - ((s * (255 - remainder)) >> 8))) >> 8) as u8;
    let v = hsv.v;

    match region {
        0 => RgbColor::new(v, t, p),
        1 => RgbColor::new(q, v, p),
        2 => RgbColor::new(p, v, t),
        3 => RgbColor::new(p, q, v),
        4 => RgbColor::new(t, p, v),
        _ => RgbColor::new(v, p, q),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_black_is_all_zero() {
        assert_eq!(rgb_to_hsv(RgbColor::new(0, 0, 0)), HsvColor::new(0, 0, 0));
    }

    #[test]
    fn test_grays_round_trip_exactly() {
        for v in 0..=255u8 {
            let hsv = rgb_to_hsv(RgbColor::new(v, v, v));
            assert_eq!(hsv, HsvColor::new(0, 0, v));
            assert_eq!(hsv_to_rgb(hsv), RgbColor::new(v, v, v));
        }
    }

    #[test]
    fn test_primary_hues() {
        assert_eq!(rgb_to_hsv(RgbColor::new(255, 0, 0)), HsvColor::new(0, 255, 255));
        assert_eq!(rgb_to_hsv(RgbColor::new(0, 255, 0)), HsvColor::new(85, 255, 255));
        assert_eq!(rgb_to_hsv(RgbColor::new(0, 0, 255)), HsvColor::new(171, 255, 255));
    }

    #[test]
    fn test_negative_hue_wraps_to_top_of_wheel() {
        // 43 * (0 - 10) / 255 truncates to -1
        assert_eq!(rgb_to_hsv(RgbColor::new(255, 0, 10)).h, 255);
        // 43 * (0 - 255) / 255 = -43
        assert_eq!(rgb_to_hsv(RgbColor::new(255, 0, 255)).h, 213);
    }

    #[test]
    fn test_saturation_truncates() {
        // 255 * 35 / 199 = 44.8
        let hsv = rgb_to_hsv(RgbColor::new(0xa4, 0xb6, 0xc7));
        assert_eq!(hsv, HsvColor::new(149, 44, 199));
    }

    #[test]
    fn test_hsv_to_rgb_sectors() {
        assert_eq!(hsv_to_rgb(HsvColor::new(0, 255, 255)), RgbColor::new(255, 0, 0));
        assert_eq!(hsv_to_rgb(HsvColor::new(0, 180, 255)), RgbColor::new(255, 75, 74));
        assert_eq!(hsv_to_rgb(HsvColor::new(149, 180, 255)), RgbColor::new(74, 170, 255));
        // region 5 absorbs the top of the wheel
        assert_eq!(hsv_to_rgb(HsvColor::new(255, 255, 255)), RgbColor::new(255, 0, 15));
    }

    #[test]
    fn test_saturated_round_trip_is_approximate() {
        let green = RgbColor::new(0, 255, 0);
        let back = hsv_to_rgb(rgb_to_hsv(green));
        assert_eq!(back, RgbColor::new(3, 255, 0));

        for rgb in [
            RgbColor::new(200, 40, 90),
            RgbColor::new(12, 140, 230),
            RgbColor::new(250, 250, 10),
        ] {
            let back = hsv_to_rgb(rgb_to_hsv(rgb));
            for (a, b) in [(rgb.r, back.r), (rgb.g, back.g), (rgb.b, back.b)] {
                assert!(a.abs_diff(b) <= 8, "{:?} -> {:?}", rgb, back);
            }
        }
    }
}
