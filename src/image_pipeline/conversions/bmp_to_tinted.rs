use tracing::{info, instrument, warn};
use std::io::Write;
use std::path::Path;

use crate::image_pipeline::{
    bitmap::{BmpReader, PixelBuffer, PixelReader},
    common::error::{ConversionError, Result},
    common::timing::PipelineTimings,
    config::FilterConfig,
    filter::{self, LookupTable},
    output::{PixelWriter, StandardWriter},
};

/// Reads a bitmap, applies the tinted monochrome filter and writes the result.
///
/// The lookup table is built once from the configured tint and reused for
/// every conversion the pipeline runs.
pub struct TintPipeline<R: PixelReader, W: PixelWriter> {
    reader: R,
    writer: W,
    config: FilterConfig,
    table: LookupTable,
}

impl TintPipeline<BmpReader, StandardWriter> {
    pub fn new(config: FilterConfig) -> Self {
        Self::with_custom(BmpReader, StandardWriter, config)
    }
}

impl<R: PixelReader, W: PixelWriter> TintPipeline<R, W> {
    pub fn with_custom(reader: R, writer: W, config: FilterConfig) -> Self {
        let table = LookupTable::build(config.tint);
        Self {
            reader,
            writer,
            config,
            table,
        }
    }

    fn validate_dimensions(&self, width: usize, height: usize) -> Result<()> {
        if !self.config.validate_dimensions {
            return Ok(());
        }

        if width == 0 || height == 0 {
            return Err(ConversionError::InvalidDimensions(width, height));
        }

        if let Some((expected_width, expected_height)) = self.config.expected_dimensions {
            if width != expected_width || height != expected_height {
                warn!(
                    "Image dimensions {}x{} do not match expected {}x{}",
                    width, height, expected_width, expected_height
                );
                return Err(ConversionError::InvalidDimensions(width, height));
            }
        }

        if height < 3 {
            return Err(ConversionError::DegenerateDimensions { height });
        }

        Ok(())
    }

    fn apply_filter(&self, pixels: &mut PixelBuffer) -> Result<()> {
        if self.config.parallel {
            filter::apply_parallel(pixels, &self.table)
        } else {
            filter::apply(pixels, &self.table)
        }
    }

    /// Runs the filter in place on an already decoded buffer.
    pub fn filter(&self, pixels: &mut PixelBuffer) -> Result<()> {
        self.validate_dimensions(pixels.width(), pixels.height())?;
        self.apply_filter(pixels)
    }

    #[instrument(skip(self, input_data, output), fields(input_size = input_data.len()))]
    pub fn convert(&self, input_data: &[u8], output: &mut dyn Write) -> Result<()> {
        self.convert_with_timings(input_data, output).map(|_| ())
    }

    /// Like [`convert`](Self::convert), also returning how long each step took.
    ///
    /// Nothing reaches `output` unless decoding, filtering and encoding all succeed.
    pub fn convert_with_timings(
        &self,
        input_data: &[u8],
        output: &mut dyn Write,
    ) -> Result<PipelineTimings> {
        let mut timings = PipelineTimings::new();
        info!(tint = %self.config.tint, "Starting tint filter");

        let mut pixels = timings.measure("decode_bitmap", || {
            let _span = tracing::info_span!("decode_bitmap").entered();
            self.reader.read_pixels(input_data)
        })?;

        timings.measure("validate_dimensions", || {
            let _span = tracing::info_span!("validate_dimensions",
                width = pixels.width(),
                height = pixels.height()
            ).entered();
            self.validate_dimensions(pixels.width(), pixels.height())
        })?;

        timings.measure("apply_filter", || {
            let _span = tracing::info_span!("apply_filter", parallel = self.config.parallel).entered();
            self.apply_filter(&mut pixels)
        })?;

        let encoded = timings.measure("encode_output", || {
            let _span = tracing::info_span!("encode_output", format = ?self.config.output_format).entered();
            let mut encoded = Vec::new();
            self.writer
                .write_pixels(&pixels, &mut encoded, &self.config)
                .map(|()| encoded)
        })?;

        timings.measure("write_output", || output.write_all(&encoded))?;

        info!(
            width = pixels.width(),
            height = pixels.height(),
            "Filter complete"
        );
        Ok(timings)
    }

    #[instrument(skip(self, input_path, output_path))]
    pub fn convert_file<P: AsRef<Path>, Q: AsRef<Path>>(
        &self,
        input_path: P,
        output_path: Q,
    ) -> Result<()> {
        self.convert_file_with_timings(input_path, output_path).map(|_| ())
    }

    /// Filters `input_path` into `output_path`.
    ///
    /// The output file is only created once the whole image has been filtered
    /// and encoded, so a failed run leaves no file behind.
    pub fn convert_file_with_timings<P: AsRef<Path>, Q: AsRef<Path>>(
        &self,
        input_path: P,
        output_path: Q,
    ) -> Result<PipelineTimings> {
        let mut timings = PipelineTimings::new();
        let input_path = input_path.as_ref();
        let output_path = output_path.as_ref();

        info!(
            input = %input_path.display(),
            output = %output_path.display(),
            "Converting file"
        );

        let input_data = timings.measure("read_input_file", || {
            let _span = tracing::info_span!("read_input_file").entered();
            std::fs::read(input_path).map_err(|e| {
                ConversionError::InputReadError(format!("{}: {}", input_path.display(), e))
            })
        })?;

        let mut encoded = Vec::new();
        let conversion_timings = self.convert_with_timings(&input_data, &mut encoded)?;
        timings.extend(conversion_timings);

        timings.measure("write_output_file", || {
            let _span = tracing::info_span!("write_output_file").entered();
            std::fs::write(output_path, &encoded).map_err(|e| {
                ConversionError::OutputWriteError(format!("{}: {}", output_path.display(), e))
            })
        })?;

        Ok(timings)
    }

    pub fn config(&self) -> &FilterConfig {
        &self.config
    }

    /// Replaces the configuration, rebuilding the lookup table if the tint changed.
    pub fn set_config(&mut self, config: FilterConfig) {
        if config.tint != self.config.tint {
            self.table = LookupTable::build(config.tint);
        }
        self.config = config;
    }

    pub fn table(&self) -> &LookupTable {
        &self.table
    }
}
