//! BMP reader implementation using the image library.
//!
//! The decoder handles the container header and the bottom-up row order of
//! uncompressed bitmaps, so the buffer it hands back is already top-down.

use image::ImageFormat;
use tracing::debug;

use crate::image_pipeline::bitmap::reader::PixelReader;
use crate::image_pipeline::bitmap::types::PixelBuffer;
use crate::image_pipeline::common::error::{ConversionError, Result};

/// Reader for Windows bitmap files.
pub struct BmpReader;

impl PixelReader for BmpReader {
    /// Decodes BMP bytes into a `[0xFF, R, G, B]` pixel buffer.
    ///
    /// Any decoder failure, including a file cut short inside the pixel array,
    /// is reported as `DecodeError`.
    fn read_pixels(&self, data: &[u8]) -> Result<PixelBuffer> {
        debug!("Decoding BMP image, {} bytes", data.len());

        let decoded = image::load_from_memory_with_format(data, ImageFormat::Bmp)
            .map_err(|e| ConversionError::DecodeError(e.to_string()))?;

        let rgb = decoded.into_rgb8();
        let (width, height) = (rgb.width() as usize, rgb.height() as usize);

        debug!("Decoded image: {}x{}", width, height);

        PixelBuffer::from_rgb(width, height, rgb.as_raw())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use image::{ExtendedColorType, ImageEncoder, codecs::bmp::BmpEncoder};

    fn encode_rgb_bmp(width: u32, height: u32, rgb: &[u8]) -> Vec<u8> {
        let mut bytes = Vec::new();
        BmpEncoder::new(&mut bytes)
            .write_image(rgb, width, height, ExtendedColorType::Rgb8)
            .unwrap();
        bytes
    }

    #[test]
    fn test_reads_top_down() {
        // top row red, bottom row blue
        let bytes = encode_rgb_bmp(1, 2, &[255, 0, 0, 0, 0, 255]);
        let buffer = BmpReader.read_pixels(&bytes).unwrap();

        assert_eq!(buffer.width(), 1);
        assert_eq!(buffer.height(), 2);
        assert_eq!(buffer.pixel(0, 0), Some([0xff, 255, 0, 0]));
        assert_eq!(buffer.pixel(0, 1), Some([0xff, 0, 0, 255]));
    }

    #[test]
    fn test_truncated_file_is_a_decode_error() {
        let rgb: Vec<u8> = (0..4 * 4 * 3).map(|i| i as u8).collect();
        let bytes = encode_rgb_bmp(4, 4, &rgb);
        let truncated = &bytes[..bytes.len() - 10];

        assert!(matches!(
            BmpReader.read_pixels(truncated),
            Err(ConversionError::DecodeError(_))
        ));
    }

    #[test]
    fn test_not_a_bitmap() {
        assert!(matches!(
            BmpReader.read_pixels(b"definitely not a bitmap"),
            Err(ConversionError::DecodeError(_))
        ));
    }
}
