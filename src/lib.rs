//! ChromaScale resizes RGB images and charts their channel distributions.
//!
//! The crate provides a nearest-neighbor or bilinear resampler, exact
//! per-channel histograms with peak normalization, and a fixed-size chart
//! rasterizer. Every operation is a pure function of its inputs; optional
//! parallelism is available via the `rayon` feature.

pub mod chart;
pub mod histogram;
pub mod image;
pub mod lowlevel;
pub mod pipeline;
pub mod resample;
mod trace;
pub mod util;

#[cfg(feature = "image-io")]
pub use crate::image::io;

pub use chart::{render, render_with, ChartImage, ChartLayout};
pub use histogram::{
    compute_histograms, normalize, Channel, ChannelHistogram, NormalizedHistogram, RgbHistograms,
};
pub use crate::image::PixelGrid;
pub use pipeline::{histogram_chart, process_image, PipelineConfig, PipelineOutput};
pub use resample::{
    resample, resample_with, Interpolation, IntoScaleFactor, ResampleConfig, ScaleFactor,
};
pub use util::{ChromaError, ChromaResult};
