//! Geometric resampling of RGB grids by a scale factor.
//!
//! Output dimensions are `floor(width * scale)` by `floor(height * scale)`.
//! Each output pixel `(x, y)` maps to the source coordinate
//! `(x / scale, y / scale)`; coordinates past the last source index clamp to
//! it. Resizes whose output would have zero width or height are rejected with
//! `ChromaError::DegenerateResize` instead of being clamped to one pixel.

mod sample;

pub use sample::{axis_taps, AxisTap};

use crate::image::PixelGrid;
use crate::trace::{trace_event, trace_span};
use crate::util::{ChromaError, ChromaResult};
use std::fmt;
use std::str::FromStr;

/// Positive finite scale factor applied to both image axes.
#[derive(Clone, Copy, Debug, PartialEq, PartialOrd)]
pub struct ScaleFactor(f64);

impl ScaleFactor {
    /// Validates `scale`, rejecting zero, negative, NaN and infinite values.
    pub fn new(scale: f64) -> ChromaResult<Self> {
        if !scale.is_finite() || scale <= 0.0 {
            return Err(ChromaError::InvalidScale { scale });
        }
        Ok(Self(scale))
    }

    /// Returns the raw factor.
    pub fn get(self) -> f64 {
        self.0
    }
}

impl Default for ScaleFactor {
    fn default() -> Self {
        Self(1.0)
    }
}

impl TryFrom<f64> for ScaleFactor {
    type Error = ChromaError;

    fn try_from(value: f64) -> ChromaResult<Self> {
        Self::new(value)
    }
}

impl FromStr for ScaleFactor {
    type Err = ChromaError;

    /// Parses a decimal string; text that is not a number is `InvalidScale`
    /// with a NaN payload.
    fn from_str(s: &str) -> ChromaResult<Self> {
        let value = s
            .trim()
            .parse::<f64>()
            .map_err(|_| ChromaError::InvalidScale { scale: f64::NAN })?;
        Self::new(value)
    }
}

impl fmt::Display for ScaleFactor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Sampling method used to compute output pixels.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Interpolation {
    /// Copies the source pixel at `floor(x / scale)`.
    #[default]
    Nearest,
    /// Blends the four surrounding source pixels, rounding to nearest.
    Bilinear,
}

/// Configuration for [`resample_with`].
#[derive(Clone, Debug, Default)]
pub struct ResampleConfig {
    /// Sampling method.
    pub interpolation: Interpolation,
    /// Fill output rows in parallel (requires the `rayon` feature).
    pub parallel: bool,
}

/// Largest width or height a resize may produce.
pub const MAX_OUTPUT_DIMENSION: usize = 1 << 16;

/// Largest pixel count a resize may produce (about 805 MB of RGB samples).
pub const MAX_OUTPUT_PIXELS: usize = 1 << 28;

/// Accepted forms of a scale argument: a validated [`ScaleFactor`] or a raw
/// `f64` that is validated on entry.
pub trait IntoScaleFactor {
    /// Converts into a validated factor, failing with `InvalidScale`.
    fn into_scale_factor(self) -> ChromaResult<ScaleFactor>;
}

impl IntoScaleFactor for ScaleFactor {
    fn into_scale_factor(self) -> ChromaResult<ScaleFactor> {
        Ok(self)
    }
}

impl IntoScaleFactor for f64 {
    fn into_scale_factor(self) -> ChromaResult<ScaleFactor> {
        ScaleFactor::new(self)
    }
}

/// Computes the resized dimensions for a `width` x `height` grid.
///
/// Fails with `DegenerateResize` when either dimension rounds down to zero
/// and with `InvalidDimensions` when the result exceeds
/// [`MAX_OUTPUT_DIMENSION`] or [`MAX_OUTPUT_PIXELS`].
pub fn output_dimensions(
    width: usize,
    height: usize,
    scale: ScaleFactor,
) -> ChromaResult<(usize, usize)> {
    let scaled_w = (width as f64 * scale.get()).floor();
    let scaled_h = (height as f64 * scale.get()).floor();
    // `as` saturates, so oversized results stay oversized.
    let (out_w, out_h) = (scaled_w as usize, scaled_h as usize);
    if out_w == 0 || out_h == 0 {
        return Err(ChromaError::DegenerateResize {
            width: out_w,
            height: out_h,
            scale: scale.get(),
        });
    }
    let too_large = out_w > MAX_OUTPUT_DIMENSION
        || out_h > MAX_OUTPUT_DIMENSION
        || out_w * out_h > MAX_OUTPUT_PIXELS;
    if too_large {
        return Err(ChromaError::InvalidDimensions {
            width: out_w,
            height: out_h,
        });
    }
    Ok((out_w, out_h))
}

/// Resamples `grid` by `scale` using nearest-neighbor sampling.
pub fn resample(grid: &PixelGrid, scale: impl IntoScaleFactor) -> ChromaResult<PixelGrid> {
    resample_with(grid, scale, &ResampleConfig::default())
}

/// Resamples `grid` by `scale` with an explicit configuration.
///
/// Errors are checked in order: `InvalidScale`, `EmptyGrid`, then
/// `DegenerateResize` / `InvalidDimensions`. The input is never modified.
pub fn resample_with(
    grid: &PixelGrid,
    scale: impl IntoScaleFactor,
    cfg: &ResampleConfig,
) -> ChromaResult<PixelGrid> {
    let scale = scale.into_scale_factor()?;
    if grid.is_empty() {
        return Err(ChromaError::EmptyGrid {
            width: grid.width(),
            height: grid.height(),
        });
    }
    let (out_w, out_h) = output_dimensions(grid.width(), grid.height(), scale)?;

    let _span = trace_span!(
        "resample",
        src_width = grid.width(),
        src_height = grid.height(),
        scale = scale.get(),
        parallel = cfg.parallel
    )
    .entered();

    let mut out = PixelGrid::zeroed(out_w, out_h)?;
    let x_taps = axis_taps(out_w, grid.width(), scale);
    let y_taps = axis_taps(out_h, grid.height(), scale);

    let fill = |(y, dst): (usize, &mut [u8])| {
        sample::fill_row(grid, &x_taps, y_taps[y], cfg.interpolation, dst);
    };

    #[cfg(feature = "rayon")]
    {
        if cfg.parallel {
            use rayon::prelude::*;
            out.par_rows_mut().enumerate().for_each(fill);
            trace_event!("resampled", width = out_w, height = out_h);
            return Ok(out);
        }
    }

    out.rows_mut().enumerate().for_each(fill);
    trace_event!("resampled", width = out_w, height = out_h);
    Ok(out)
}
