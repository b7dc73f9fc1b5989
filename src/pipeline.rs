//! End-to-end processing of one uploaded image.
//!
//! The "original" chart is built from the input grid; the "resized" chart is
//! built from the resampled grid. The two branches share no mutable state, so
//! with `parallel` set (and the `rayon` feature on) they run under
//! `rayon::join`. Errors are reported in a fixed order regardless of
//! scheduling: scale validation, then the original branch, then the resized
//! branch.

use crate::chart::{render_with, ChartImage, ChartLayout};
use crate::histogram::{compute_histograms_with, normalize_all};
use crate::image::PixelGrid;
use crate::resample::{resample_with, Interpolation, IntoScaleFactor, ResampleConfig};
use crate::trace::{trace_event, trace_span};
use crate::util::ChromaResult;

/// Configuration for [`process_image`].
#[derive(Clone, Debug, Default)]
pub struct PipelineConfig {
    /// Sampling method for the resize step.
    pub interpolation: Interpolation,
    /// Chart canvas and stroke layout.
    pub layout: ChartLayout,
    /// Run branches and per-row work in parallel (requires `rayon`).
    pub parallel: bool,
}

/// Outputs of [`process_image`].
#[derive(Clone, Debug)]
pub struct PipelineOutput {
    /// The resampled grid.
    pub resized: PixelGrid,
    /// Histogram chart of the input grid.
    pub original_chart: ChartImage,
    /// Histogram chart of the resampled grid.
    pub resized_chart: ChartImage,
}

/// Computes, normalizes and renders the RGB histograms of `grid`.
pub fn histogram_chart(
    grid: &PixelGrid,
    layout: &ChartLayout,
    parallel: bool,
) -> ChromaResult<ChartImage> {
    let histograms = compute_histograms_with(grid, parallel)?;
    let normalized = normalize_all(&histograms, layout.drawing_height)?;
    render_with(&normalized, layout)
}

/// Resizes `grid` by `scale` and charts both the input and the result.
pub fn process_image(
    grid: &PixelGrid,
    scale: impl IntoScaleFactor,
    cfg: &PipelineConfig,
) -> ChromaResult<PipelineOutput> {
    let scale = scale.into_scale_factor()?;
    let _span = trace_span!(
        "process_image",
        width = grid.width(),
        height = grid.height(),
        scale = scale.get()
    )
    .entered();

    let resample_cfg = ResampleConfig {
        interpolation: cfg.interpolation,
        parallel: cfg.parallel,
    };
    let original = || histogram_chart(grid, &cfg.layout, cfg.parallel);
    let resized = || -> ChromaResult<(PixelGrid, ChartImage)> {
        let resized = resample_with(grid, scale, &resample_cfg)?;
        let chart = histogram_chart(&resized, &cfg.layout, cfg.parallel)?;
        Ok((resized, chart))
    };

    let (original, resized) = run_branches(cfg.parallel, original, resized);
    let original_chart = original?;
    let (resized, resized_chart) = resized?;

    trace_event!(
        "image_processed",
        resized_width = resized.width(),
        resized_height = resized.height()
    );
    Ok(PipelineOutput {
        resized,
        original_chart,
        resized_chart,
    })
}

fn run_branches<A, B, RA, RB>(parallel: bool, a: A, b: B) -> (RA, RB)
where
    A: FnOnce() -> RA + Send,
    B: FnOnce() -> RB + Send,
    RA: Send,
    RB: Send,
{
    #[cfg(feature = "rayon")]
    {
        if parallel {
            return rayon::join(a, b);
        }
    }
    #[cfg(not(feature = "rayon"))]
    let _ = parallel;

    (a(), b())
}
