use std::io::Write;

use image::{ExtendedColorType, ImageEncoder, codecs::bmp::BmpEncoder};
use tracing::debug;

use crate::image_pipeline::bitmap::types::PixelBuffer;
use crate::image_pipeline::common::error::{ConversionError, Result};
use crate::image_pipeline::config::FilterConfig;
use crate::image_pipeline::output::writer::{PixelWriter, encoder_dimensions};

/// Writes 32-bit bitmaps; the encoder takes care of bottom-up row order.
pub struct BmpWriter;

impl PixelWriter for BmpWriter {
    fn write_pixels(&self, image: &PixelBuffer, output: &mut dyn Write, _config: &FilterConfig) -> Result<()> {
        debug!("Encoding BMP image: {}x{}", image.width(), image.height());
        let (width, height) = encoder_dimensions(image)?;

        let mut buffer = Vec::new();
        BmpEncoder::new(&mut buffer)
            .write_image(&image.to_rgba(), width, height, ExtendedColorType::Rgba8)
            .map_err(|e| ConversionError::EncodeError(e.to_string()))?;

        output.write_all(&buffer)?;

        debug!("BMP encoding complete, {} bytes", buffer.len());
        Ok(())
    }
}
