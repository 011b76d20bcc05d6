use crate::image_pipeline::common::error::{ConversionError, Result};

const EDGE_ALPHA: u8 = 127;
const OPAQUE: u8 = 255;
const RAMP: usize = 128;

/// Vertical alpha fade over three bands of `height / 3` rows.
///
/// The top band ramps from 127 up toward 255, the middle band is opaque and the
/// bottom band (which also takes any remainder rows) ramps back down. Remainder
/// rows keep descending past 127; the fade saturates at 0 instead of wrapping.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AlphaGradient {
    height: usize,
    band: usize,
}

impl AlphaGradient {
    /// Fails with `DegenerateDimensions` when the image has fewer than three rows.
    pub fn new(height: usize) -> Result<Self> {
        let band = height / 3;
        if band == 0 {
            return Err(ConversionError::DegenerateDimensions { height });
        }
        Ok(Self { height, band })
    }

    pub fn height(&self) -> usize {
        self.height
    }

    #[allow(clippy::cast_possible_truncation)]
    pub fn alpha_at(&self, row: usize) -> u8 {
        let band = self.band;
        if row < band {
            return EDGE_ALPHA + ((row * RAMP) / band) as u8;
        }
        if row < band * 2 {
            return OPAQUE;
        }
        // the last band can be up to two rows longer than the others
        let fade = (row - band * 2) * RAMP / band;
        usize::from(OPAQUE).saturating_sub(fade) as u8
    }
}

/// Alpha for `row` of an image `height` rows tall.
pub fn alpha_at(row: usize, height: usize) -> Result<u8> {
    Ok(AlphaGradient::new(height)?.alpha_at(row))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_reference_height() {
        assert_eq!(alpha_at(0, 1136).unwrap(), 127);
        assert_eq!(alpha_at(377, 1136).unwrap(), 254);
        assert_eq!(alpha_at(378, 1136).unwrap(), 255);
        assert_eq!(alpha_at(568, 1136).unwrap(), 255);
        assert_eq!(alpha_at(755, 1136).unwrap(), 255);
        assert_eq!(alpha_at(756, 1136).unwrap(), 255);
        assert_eq!(alpha_at(1135, 1136).unwrap(), 127);
    }

    #[test]
    fn test_three_rows_one_per_band() {
        let gradient = AlphaGradient::new(3).unwrap();
        let alphas: Vec<u8> = (0..3).map(|y| gradient.alpha_at(y)).collect();
        assert_eq!(alphas, vec![127, 255, 255]);
    }

    #[test]
    fn test_bands_are_monotonic() {
        let height = 1136;
        let gradient = AlphaGradient::new(height).unwrap();
        let band = height / 3;

        for row in 1..band {
            assert!(gradient.alpha_at(row - 1) <= gradient.alpha_at(row));
        }
        for row in band..band * 2 {
            assert_eq!(gradient.alpha_at(row), 255);
        }
        for row in band * 2 + 1..height {
            assert!(gradient.alpha_at(row - 1) >= gradient.alpha_at(row));
        }
    }

    #[test]
    fn test_remainder_rows_keep_fading() {
        let gradient = AlphaGradient::new(8).unwrap();
        let alphas: Vec<u8> = (0..8).map(|y| gradient.alpha_at(y)).collect();
        assert_eq!(alphas, vec![127, 191, 255, 255, 255, 191, 127, 63]);

        assert_eq!(alpha_at(10, 11).unwrap(), 85);
        assert_eq!(alpha_at(16, 17).unwrap(), 102);
    }

    #[test]
    fn test_last_band_matches_formula() {
        for height in 3..400usize {
            let band = height / 3;
            for row in band * 2..height {
                let fade = (row - band * 2) * 128 / band;
                let expected = 255usize.saturating_sub(fade) as u8;
                assert_eq!(alpha_at(row, height).unwrap(), expected, "row {} of {}", row, height);
            }
        }
    }

    #[test]
    fn test_fade_saturates_instead_of_wrapping() {
        // band = 1, row 4 would fade by 256
        let gradient = AlphaGradient::new(5).unwrap();
        assert_eq!(gradient.alpha_at(2), 255);
        assert_eq!(gradient.alpha_at(3), 127);
        assert_eq!(gradient.alpha_at(4), 0);
    }

    #[test]
    fn test_degenerate_heights() {
        for height in 0..3 {
            assert!(matches!(
                AlphaGradient::new(height),
                Err(ConversionError::DegenerateDimensions { height: h }) if h == height
            ));
            assert!(alpha_at(0, height).is_err());
        }
    }
}
