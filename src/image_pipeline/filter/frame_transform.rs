use rayon::prelude::*;
use tracing::{debug, instrument};

use crate::image_pipeline::bitmap::types::{BYTES_PER_PIXEL, PixelBuffer};
use crate::image_pipeline::common::error::{ConversionError, Result};
use crate::image_pipeline::filter::alpha_gradient::AlphaGradient;
use crate::image_pipeline::filter::lookup_table::{LookupTable, TABLE_LEN};

/// Luminance index of an RGB triple.
///
/// `3r + 11g + b` approximates the Rec. 709 luma weights using shifts and adds;
/// the sum is divided by 16 for the 256 brightness levels and multiplied by 4
/// for the table's sub-steps, hence the net shift of 2.
#[inline]
pub const fn luma_index(r: u8, g: u8, b: u8) -> usize {
    let (r, g, b) = (r as usize, g as usize, b as usize);
    let luma = (r + r + r) + ((g << 3) + g + g + g) + b;
    luma >> (4 - 2)
}

/// Largest index `luma_index` can produce (white).
pub const MAX_LUMA_INDEX: usize = luma_index(255, 255, 255);

const _: () = assert!(MAX_LUMA_INDEX < TABLE_LEN);

fn check_dimensions(buffer: &PixelBuffer) -> Result<AlphaGradient> {
    if buffer.width() == 0 {
        return Err(ConversionError::InvalidDimensions(buffer.width(), buffer.height()));
    }
    AlphaGradient::new(buffer.height())
}

#[inline]
fn transform_row(row: &mut [u8], alpha: u8, table: &LookupTable) {
    for px in row.chunks_exact_mut(BYTES_PER_PIXEL) {
        // px[0] is unused on input
        let tinted = table.entry(luma_index(px[1], px[2], px[3]));
        px[0] = alpha;
        px[1] = tinted.r;
        px[2] = tinted.g;
        px[3] = tinted.b;
    }
}

/// Rewrites every pixel in place as `[alpha, R, G, B]`, with the color taken
/// from `table` by luminance and the alpha from the row's gradient band.
///
/// The buffer is left untouched if its dimensions are rejected.
#[instrument(skip_all, fields(width = buffer.width(), height = buffer.height()))]
pub fn apply(buffer: &mut PixelBuffer, table: &LookupTable) -> Result<()> {
    let gradient = check_dimensions(buffer)?;
    let stride = buffer.stride();

    for (y, row) in buffer.as_bytes_mut().chunks_exact_mut(stride).enumerate() {
        transform_row(row, gradient.alpha_at(y), table);
    }

    debug!("Frame transform complete");
    Ok(())
}

/// Same result as [`apply`], with rows spread over the rayon thread pool.
#[instrument(skip_all, fields(width = buffer.width(), height = buffer.height()))]
pub fn apply_parallel(buffer: &mut PixelBuffer, table: &LookupTable) -> Result<()> {
    let gradient = check_dimensions(buffer)?;
    let stride = buffer.stride();

    buffer
        .as_bytes_mut()
        .par_chunks_exact_mut(stride)
        .enumerate()
        .for_each(|(y, row)| transform_row(row, gradient.alpha_at(y), table));

    debug!("Parallel frame transform complete");
    Ok(())
}
