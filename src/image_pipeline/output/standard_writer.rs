use std::io::Write;

use crate::image_pipeline::bitmap::types::PixelBuffer;
use crate::image_pipeline::common::error::Result;
use crate::image_pipeline::config::FilterConfig;
use crate::image_pipeline::output::{BmpWriter, OutputFormat, PixelWriter, TiffImageWriter};

/// Picks the encoder from `config.output_format`.
pub struct StandardWriter;

impl PixelWriter for StandardWriter {
    fn write_pixels(&self, image: &PixelBuffer, output: &mut dyn Write, config: &FilterConfig) -> Result<()> {
        match config.output_format {
            OutputFormat::Bmp => BmpWriter.write_pixels(image, output, config),
            OutputFormat::Tiff => TiffImageWriter.write_pixels(image, output, config),
        }
    }
}
