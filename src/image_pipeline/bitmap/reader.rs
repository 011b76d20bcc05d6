use crate::image_pipeline::common::error::Result;
use crate::image_pipeline::bitmap::types::PixelBuffer;

pub trait PixelReader {
    /// Decodes an encoded image into a top-down `[unused, R, G, B]` buffer.
    fn read_pixels(&self, data: &[u8]) -> Result<PixelBuffer>;
}
