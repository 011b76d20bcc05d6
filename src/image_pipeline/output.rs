//! Output writing module
//!
//! This module encodes filtered `[A, R, G, B]` buffers as 32-bit BMP or RGBA TIFF.

mod bmp_writer;
mod standard_writer;
mod tiff_writer;
pub mod types;
mod writer;

pub use bmp_writer::BmpWriter;
pub use standard_writer::StandardWriter;
pub use tiff_writer::TiffImageWriter;
pub use types::{OutputFormat, TiffCompression};
pub use writer::PixelWriter;
