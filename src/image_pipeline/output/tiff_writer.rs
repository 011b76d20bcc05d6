use std::io::{Cursor, Write};

use tiff::encoder::{Compression, TiffEncoder, colortype::RGBA8, compression::DeflateLevel};
use tracing::debug;

use crate::image_pipeline::bitmap::types::PixelBuffer;
use crate::image_pipeline::common::error::{ConversionError, Result};
use crate::image_pipeline::config::FilterConfig;
use crate::image_pipeline::output::types::TiffCompression;
use crate::image_pipeline::output::writer::{PixelWriter, encoder_dimensions};

pub struct TiffImageWriter;

impl PixelWriter for TiffImageWriter {
    fn write_pixels(&self, image: &PixelBuffer, output: &mut dyn Write, config: &FilterConfig) -> Result<()> {
        debug!("Encoding TIFF image: {}x{}", image.width(), image.height());
        let (width, height) = encoder_dimensions(image)?;

        let compression = match config.compression {
            TiffCompression::None => Compression::Uncompressed,
            TiffCompression::Lzw => Compression::Lzw,
            TiffCompression::DeflateFast => Compression::Deflate(DeflateLevel::Fast),
            TiffCompression::DeflateBalanced => Compression::Deflate(DeflateLevel::Balanced),
            TiffCompression::DeflateBest => Compression::Deflate(DeflateLevel::Best),
        };

        let mut buffer = Vec::new();
        TiffEncoder::new(Cursor::new(&mut buffer))
            .map_err(|e| ConversionError::EncodeError(e.to_string()))?
            .with_compression(compression)
            .write_image::<RGBA8>(width, height, &image.to_rgba())
            .map_err(|e| ConversionError::EncodeError(e.to_string()))?;

        output.write_all(&buffer)?;

        debug!("TIFF encoding complete, {} bytes", buffer.len());
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tiff::decoder::{Decoder, DecodingResult};

    fn decode(bytes: Vec<u8>) -> ((u32, u32), Vec<u8>) {
        let mut decoder = Decoder::new(Cursor::new(bytes)).unwrap();
        let dimensions = decoder.dimensions().unwrap();
        match decoder.read_image().unwrap() {
            DecodingResult::U8(data) => (dimensions, data),
            _ => panic!("expected 8-bit samples"),
        }
    }

    #[test]
    fn test_every_compression_decodes_to_rgba() {
        let pixels = PixelBuffer::from_raw(
            1,
            3,
            vec![127, 1, 2, 3, 255, 4, 5, 6, 127, 7, 8, 9],
        )
        .unwrap();

        for compression in [
            TiffCompression::None,
            TiffCompression::Lzw,
            TiffCompression::DeflateFast,
            TiffCompression::DeflateBalanced,
            TiffCompression::DeflateBest,
        ] {
            let config = FilterConfig::builder().compression(compression).build();
            let mut bytes = Vec::new();
            TiffImageWriter.write_pixels(&pixels, &mut bytes, &config).unwrap();

            let (dimensions, data) = decode(bytes);
            assert_eq!(dimensions, (1, 3));
            assert_eq!(data, vec![1, 2, 3, 127, 4, 5, 6, 255, 7, 8, 9, 127]);
        }
    }
}
