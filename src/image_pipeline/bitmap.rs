//! Bitmap reading module
//!
//! This module decodes source bitmaps into top-down pixel buffers.

mod bmp_reader;
mod reader;
pub mod types;

pub use bmp_reader::BmpReader;
pub use reader::PixelReader;
pub use types::{BYTES_PER_PIXEL, PixelBuffer};
