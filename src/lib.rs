//! Tinted monochrome bitmap filter.
//!
//! Loads a bitmap, maps every pixel's luminance onto a single tint hue through a
//! precomputed lookup table, applies a vertical alpha fade and writes the result.

pub mod image_pipeline;
pub mod logger;
