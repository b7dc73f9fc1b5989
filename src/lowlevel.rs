//! Low-level building blocks for custom processing flows.
//!
//! These expose the sampling taps, histogram helpers and stroke geometry used
//! by the high-level `resample`, `compute_histograms` and `render` functions.
//! Most users should prefer those or `pipeline::process_image`.

pub use crate::chart::ChartLayout;
pub use crate::histogram::{compute_histograms_with, normalize_all, ChannelSet, BINS};
pub use crate::image::CHANNELS;
pub use crate::resample::{
    axis_taps, output_dimensions, AxisTap, MAX_OUTPUT_DIMENSION, MAX_OUTPUT_PIXELS,
};
