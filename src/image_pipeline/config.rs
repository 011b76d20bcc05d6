//! Filter run configuration

use crate::image_pipeline::color::TintColor;
use crate::image_pipeline::output::types::{OutputFormat, TiffCompression};

/// Configuration for one tint filter run
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FilterConfig {
    /// Color whose hue drives the output
    pub tint: TintColor,
    /// Container the result is written as
    pub output_format: OutputFormat,
    /// Compression method, used for TIFF output only
    pub compression: TiffCompression,
    /// Whether to validate image dimensions before filtering
    pub validate_dimensions: bool,
    /// When set, the decoded image must be exactly `(width, height)`
    pub expected_dimensions: Option<(usize, usize)>,
    /// Spread rows over the rayon thread pool
    pub parallel: bool,
}

impl Default for FilterConfig {
    fn default() -> Self {
        Self {
            tint: TintColor::DEFAULT,
            output_format: OutputFormat::Bmp,
            compression: TiffCompression::None,
            validate_dimensions: true,
            expected_dimensions: None,
            parallel: false,
        }
    }
}

impl FilterConfig {
    pub fn builder() -> FilterConfigBuilder {
        FilterConfigBuilder::default()
    }
}

/// Builder for FilterConfig
#[derive(Default)]
pub struct FilterConfigBuilder {
    tint: Option<TintColor>,
    output_format: Option<OutputFormat>,
    compression: Option<TiffCompression>,
    validate_dimensions: Option<bool>,
    expected_dimensions: Option<Option<(usize, usize)>>,
    parallel: Option<bool>,
}

impl FilterConfigBuilder {
    pub fn tint(mut self, tint: TintColor) -> Self {
        self.tint = Some(tint);
        self
    }

    pub fn output_format(mut self, format: OutputFormat) -> Self {
        self.output_format = Some(format);
        self
    }

    pub fn compression(mut self, compression: TiffCompression) -> Self {
        self.compression = Some(compression);
        self
    }

    pub fn validate_dimensions(mut self, validate: bool) -> Self {
        self.validate_dimensions = Some(validate);
        self
    }

    pub fn expected_dimensions(mut self, dimensions: Option<(usize, usize)>) -> Self {
        self.expected_dimensions = Some(dimensions);
        self
    }

    pub fn parallel(mut self, enable: bool) -> Self {
        self.parallel = Some(enable);
        self
    }

    pub fn build(self) -> FilterConfig {
        let default = FilterConfig::default();
        FilterConfig {
            tint: self.tint.unwrap_or(default.tint),
            output_format: self.output_format.unwrap_or(default.output_format),
            compression: self.compression.unwrap_or(default.compression),
            validate_dimensions: self.validate_dimensions.unwrap_or(default.validate_dimensions),
            expected_dimensions: self.expected_dimensions.unwrap_or(default.expected_dimensions),
            parallel: self.parallel.unwrap_or(default.parallel),
        }
    }
}
