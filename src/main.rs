use std::path::PathBuf;

use anyhow::Context;
use clap::{Parser, ValueEnum};
use tintmono::image_pipeline::{
    FilterConfig, OutputFormat, TiffCompression, TintColor, TintPipeline,
};
use tintmono::logger;

use tracing::info;

#[derive(Parser)]
#[command(name = "tintmono")]
#[command(version, about = "Tinted monochrome bitmap filter with a vertical alpha fade", long_about = None)]
struct Cli {
    /// Input bitmap
    #[arg(value_name = "INPUT", default_value = "pic.bmp")]
    input: PathBuf,

    /// Output file
    #[arg(value_name = "OUTPUT", default_value = "result.bmp")]
    output: PathBuf,

    /// Tint color as six hex digits (a4b6c7, #a4b6c7 or 0xa4b6c7)
    #[arg(short, long, value_name = "HEX", default_value = "a4b6c7")]
    tint: TintColor,

    /// Output container
    #[arg(short, long, value_enum, default_value_t = FormatArg::Bmp)]
    format: FormatArg,

    /// TIFF compression
    #[arg(long, value_enum, default_value_t = CompressionArg::None)]
    compression: CompressionArg,

    /// Required input width in pixels
    #[arg(long, requires = "height")]
    width: Option<usize>,

    /// Required input height in pixels
    #[arg(long, requires = "width")]
    height: Option<usize>,

    /// Filter rows on all cores
    #[arg(short, long)]
    parallel: bool,

    /// Log a per-step timing summary
    #[arg(long)]
    timings: bool,

    /// Log at debug level, including span durations
    #[arg(short, long)]
    verbose: bool,
}

#[derive(Clone, Copy, ValueEnum)]
enum FormatArg {
    Bmp,
    Tiff,
}

#[derive(Clone, Copy, ValueEnum)]
enum CompressionArg {
    None,
    Lzw,
    DeflateFast,
    DeflateBalanced,
    DeflateBest,
}

impl From<FormatArg> for OutputFormat {
    fn from(arg: FormatArg) -> Self {
        match arg {
            FormatArg::Bmp => OutputFormat::Bmp,
            FormatArg::Tiff => OutputFormat::Tiff,
        }
    }
}

impl From<CompressionArg> for TiffCompression {
    fn from(arg: CompressionArg) -> Self {
        match arg {
            CompressionArg::None => TiffCompression::None,
            CompressionArg::Lzw => TiffCompression::Lzw,
            CompressionArg::DeflateFast => TiffCompression::DeflateFast,
            CompressionArg::DeflateBalanced => TiffCompression::DeflateBalanced,
            CompressionArg::DeflateBest => TiffCompression::DeflateBest,
        }
    }
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    logger::init(cli.verbose);

    info!("Starting tintmono...");

    let config = FilterConfig::builder()
        .tint(cli.tint)
        .output_format(cli.format.into())
        .compression(cli.compression.into())
        .expected_dimensions(cli.width.zip(cli.height))
        .parallel(cli.parallel)
        .build();
    let pipeline = TintPipeline::new(config);

    info!("Tint: {} (normalized to {:?})", pipeline.config().tint, pipeline.table().tint());
    info!("Output format: {:?}", pipeline.config().output_format);
    info!(
        "Row processing: {}",
        if pipeline.config().parallel {
            "parallel"
        } else {
            "sequential"
        }
    );

    let timings = pipeline
        .convert_file_with_timings(&cli.input, &cli.output)
        .with_context(|| {
            format!("filtering {} into {}", cli.input.display(), cli.output.display())
        })?;

    info!("Conversion successful!");
    if cli.timings {
        info!("Pipeline timing summary:\n{}", timings.summary());
    }
    Ok(())
}
