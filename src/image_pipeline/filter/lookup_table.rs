use tracing::debug;

use crate::image_pipeline::color::{HsvColor, RgbColor, TintColor, hsv_to_rgb, rgb_to_hsv};

/// Number of entries: 256 brightness levels with four sub-steps each.
pub const TABLE_LEN: usize = 256 * 4;

/// Bytes per entry. Only R, G and B are meaningful; the fourth keeps entries
/// aligned with the 4-byte pixel stride.
const ENTRY_STRIDE: usize = 4;

/// Saturation and value every tint is normalized to before the table is built.
const REFERENCE_SATURATION: u8 = 180;
const REFERENCE_VALUE: u8 = 255;

/// Floor added to every brightness level so dark pixels never go fully black.
const BRIGHTNESS_FLOOR: usize = 30;

/// Maps a luminance index to a tinted RGB triple.
///
/// Built once from a tint color and only read afterwards.
#[derive(Clone, PartialEq, Eq)]
pub struct LookupTable {
    tint: RgbColor,
    entries: Box<[[u8; ENTRY_STRIDE]; TABLE_LEN]>,
}

/// Keeps the hue of `tint` and replaces its saturation and value with the
/// fixed reference levels, yielding the full-intensity color the table scales.
pub fn reference_tint(tint: TintColor) -> RgbColor {
    let hsv = rgb_to_hsv(tint.to_rgb());
    hsv_to_rgb(HsvColor::new(hsv.h, REFERENCE_SATURATION, REFERENCE_VALUE))
}

impl LookupTable {
    #[allow(clippy::cast_possible_truncation)]
    pub fn build(tint: TintColor) -> Self {
        let reference = reference_tint(tint);
        debug!(tint = %tint, ?reference, "Building lookup table");

        let scale = |brightness: usize, channel: u8| -> u8 {
            // brightness <= 255, so the product fits in a byte after / 256
            ((brightness * usize::from(channel)) / 256) as u8
        };

        let mut entries = Box::new([[0u8; ENTRY_STRIDE]; TABLE_LEN]);
        for (i, entry) in entries.iter_mut().enumerate() {
            let brightness = (i / 4 + BRIGHTNESS_FLOOR).min(255);
            entry[0] = scale(brightness, reference.r);
            entry[1] = scale(brightness, reference.g);
            entry[2] = scale(brightness, reference.b);
        }

        Self {
            tint: reference,
            entries,
        }
    }

    /// The normalized tint the table was scaled from.
    pub fn tint(&self) -> RgbColor {
        self.tint
    }

    /// Panics if `index >= TABLE_LEN`.
    #[inline]
    pub fn entry(&self, index: usize) -> RgbColor {
        let [r, g, b, _] = self.entries[index];
        RgbColor::new(r, g, b)
    }

    /// Flat view, `TABLE_LEN * 4` bytes, addressed as `index * 4 + channel`.
    pub fn as_bytes(&self) -> &[u8] {
        self.entries.as_flattened()
    }
}

impl std::fmt::Debug for LookupTable {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("LookupTable")
            .field("tint", &self.tint)
            .field("darkest", &self.entry(0))
            .field("brightest", &self.entry(TABLE_LEN - 1))
            .finish()
    }
}
