//! Image processing pipeline module
//!
//! This module provides a structured approach to the tint filter, with separate
//! modules for color math, bitmap reading, the filter core, output writing and
//! the orchestration that ties them together.

pub mod bitmap;
pub mod color;
pub mod common;
pub mod config;
pub mod conversions;
pub mod filter;
pub mod output;

pub use common::{
    ConversionError,
    PipelineTimings,
    Result,
};

pub use color::{
    HsvColor,
    RgbColor,
    TintColor,
    hsv_to_rgb,
    rgb_to_hsv,
};

pub use bitmap::{
    BmpReader,
    PixelBuffer,
    PixelReader,
};

pub use filter::{
    AlphaGradient,
    LookupTable,
    alpha_at,
};

pub use output::{
    BmpWriter,
    OutputFormat,
    PixelWriter,
    StandardWriter,
    TiffCompression,
    TiffImageWriter,
};

pub use config::{
    FilterConfig,
    FilterConfigBuilder,
};

pub use conversions::{
    TintPipeline,
};
