//! Color types and 8-bit RGB/HSV conversion.

pub mod space;
pub mod types;

pub use space::{hsv_to_rgb, rgb_to_hsv};
pub use types::{HsvColor, RgbColor, TintColor};
