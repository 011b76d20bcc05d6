use std::io::Write;
use crate::image_pipeline::bitmap::types::PixelBuffer;
use crate::image_pipeline::common::error::{ConversionError, Result};
use crate::image_pipeline::config::FilterConfig;

pub trait PixelWriter {
    fn write_pixels(&self, image: &PixelBuffer, output: &mut dyn Write, config: &FilterConfig) -> Result<()>;
}

/// Image dimensions as the `u32`s both encoders take.
pub(crate) fn encoder_dimensions(image: &PixelBuffer) -> Result<(u32, u32)> {
    let invalid = || ConversionError::InvalidDimensions(image.width(), image.height());
    let width = u32::try_from(image.width()).map_err(|_| invalid())?;
    let height = u32::try_from(image.height()).map_err(|_| invalid())?;
    Ok((width, height))
}
