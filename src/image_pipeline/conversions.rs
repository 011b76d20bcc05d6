//! Pipeline conversions module
//!
//! This module contains the orchestration that ties reading, filtering and writing together.

mod bmp_to_tinted;


pub use bmp_to_tinted::TintPipeline;
