//! Tinted monochrome filter
//!
//! This module holds the pixel-transformation core: the brightness-to-tint lookup
//! table, the vertical alpha gradient and the in-place frame transform.

mod alpha_gradient;
mod frame_transform;
mod lookup_table;

pub use alpha_gradient::{AlphaGradient, alpha_at};
pub use frame_transform::{apply, apply_parallel, luma_index, MAX_LUMA_INDEX};
pub use lookup_table::{LookupTable, TABLE_LEN, reference_tint};
