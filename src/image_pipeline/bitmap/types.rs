//! Pixel buffer types

use crate::image_pipeline::common::error::{ConversionError, Result};

/// Bytes per pixel: one alpha/unused slot followed by R, G, B.
pub const BYTES_PER_PIXEL: usize = 4;

/// Row-major, top-down image with four bytes per pixel.
///
/// Freshly read buffers hold `[unused, R, G, B]`; after the filter runs they
/// hold `[A, R, G, B]`. The length is always `width * height * 4`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PixelBuffer {
    width: usize,
    height: usize,
    data: Vec<u8>,
}

impl PixelBuffer {
    /// Wraps `data`, rejecting any length other than `width * height * 4`.
    pub fn from_raw(width: usize, height: usize, data: Vec<u8>) -> Result<Self> {
        let expected = Self::byte_len(width, height)?;
        if data.len() != expected {
            return Err(ConversionError::BufferSizeMismatch {
                expected,
                actual: data.len(),
            });
        }
        Ok(Self { width, height, data })
    }

    /// Packs `[R, G, B]` triples into `[0xFF, R, G, B]` pixels.
    pub fn from_rgb(width: usize, height: usize, rgb: &[u8]) -> Result<Self> {
        let expected = width
            .checked_mul(height)
            .and_then(|n| n.checked_mul(3))
            .ok_or(ConversionError::InvalidDimensions(width, height))?;
        if rgb.len() != expected {
            return Err(ConversionError::BufferSizeMismatch {
                expected,
                actual: rgb.len(),
            });
        }

        let data = rgb
            .chunks_exact(3)
            .flat_map(|px| [0xff, px[0], px[1], px[2]])
            .collect();
        Ok(Self { width, height, data })
    }

    fn byte_len(width: usize, height: usize) -> Result<usize> {
        width
            .checked_mul(height)
            .and_then(|n| n.checked_mul(BYTES_PER_PIXEL))
            .ok_or(ConversionError::InvalidDimensions(width, height))
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }

    /// Bytes in one row.
    pub fn stride(&self) -> usize {
        self.width * BYTES_PER_PIXEL
    }

    pub fn as_bytes(&self) -> &[u8] {
        &self.data
    }

    pub fn as_bytes_mut(&mut self) -> &mut [u8] {
        &mut self.data
    }

    pub fn into_bytes(self) -> Vec<u8> {
        self.data
    }

    /// The four bytes of pixel `(x, y)`, or `None` when out of bounds.
    pub fn pixel(&self, x: usize, y: usize) -> Option<[u8; 4]> {
        if x >= self.width || y >= self.height {
            return None;
        }
        let i = (y * self.width + x) * BYTES_PER_PIXEL;
        Some([self.data[i], self.data[i + 1], self.data[i + 2], self.data[i + 3]])
    }

    /// Reorders `[A, R, G, B]` pixels into the `[R, G, B, A]` layout encoders expect.
    pub fn to_rgba(&self) -> Vec<u8> {
        self.data
            .chunks_exact(BYTES_PER_PIXEL)
            .flat_map(|px| [px[1], px[2], px[3], px[0]])
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_raw_checks_length() {
        assert!(PixelBuffer::from_raw(2, 3, vec![0; 24]).is_ok());
        assert!(matches!(
            PixelBuffer::from_raw(2, 3, vec![0; 23]),
            Err(ConversionError::BufferSizeMismatch { expected: 24, actual: 23 })
        ));
        assert!(matches!(
            PixelBuffer::from_raw(usize::MAX, 2, Vec::new()),
            Err(ConversionError::InvalidDimensions(_, _))
        ));
    }

    #[test]
    fn test_from_rgb_packs_unused_slot_first() {
        let buffer = PixelBuffer::from_rgb(2, 1, &[1, 2, 3, 4, 5, 6]).unwrap();
        assert_eq!(buffer.as_bytes(), &[0xff, 1, 2, 3, 0xff, 4, 5, 6]);
        assert_eq!(buffer.pixel(1, 0), Some([0xff, 4, 5, 6]));
        assert_eq!(buffer.pixel(2, 0), None);
        assert_eq!(buffer.pixel(0, 1), None);
    }

    #[test]
    fn test_from_rgb_rejects_overflowing_dimensions() {
        // width * height fits in usize, the byte count does not
        let width = usize::MAX / 2;
        assert!(matches!(
            PixelBuffer::from_rgb(width, 2, &[]),
            Err(ConversionError::InvalidDimensions(w, 2)) if w == width
        ));
        assert!(matches!(
            PixelBuffer::from_rgb(2, 3, &[0; 17]),
            Err(ConversionError::BufferSizeMismatch { expected: 18, actual: 17 })
        ));
    }

    #[test]
    fn test_to_rgba_moves_alpha_last() {
        let buffer = PixelBuffer::from_raw(1, 1, vec![9, 1, 2, 3]).unwrap();
        assert_eq!(buffer.to_rgba(), vec![1, 2, 3, 9]);
    }
}
