//! Tracing hooks that vanish when the `tracing` feature is off.
//!
//! The crate opens one info span per public operation: `resample` (source
//! size, scale, parallel flag), `compute_histograms` (grid size),
//! `render_chart` (canvas size) and `process_image`, which encloses the other
//! three for a full request. Events inside them report results:
//! `resampled` (output size), `histograms` (peak count per channel),
//! `chart_rendered` (painted pixels) and `image_processed`.
//!
//! Call sites write `let _span = trace_span!("resample", ...).entered();` and
//! `trace_event!("resampled", width = w)` without any `cfg` of their own.

/// Opens an operation span such as `resample` or `render_chart`.
///
/// Without the `tracing` feature the field expressions are not evaluated.
#[cfg(feature = "tracing")]
macro_rules! trace_span {
    ($name:expr $(, $($field:tt)*)?) => {
        tracing::info_span!($name $(, $($field)*)?)
    };
}

#[cfg(not(feature = "tracing"))]
macro_rules! trace_span {
    ($name:expr $(, $($field:tt)*)?) => {
        $crate::trace::NoopSpan
    };
}

/// Records a result inside the current span, e.g. output dimensions after
/// `resample` or per-channel peaks after `compute_histograms`.
///
/// Without the `tracing` feature the values are still evaluated and dropped.
#[cfg(feature = "tracing")]
macro_rules! trace_event {
    ($name:expr, $($key:ident = $value:expr),+ $(,)?) => {
        tracing::info!(name: $name, $($key = $value),+)
    };
    ($name:expr) => {
        tracing::info!(name: $name)
    };
}

#[cfg(not(feature = "tracing"))]
macro_rules! trace_event {
    ($name:expr, $($key:ident = $value:expr),+ $(,)?) => {
        let _ = ($($value,)+);
    };
    ($name:expr) => {};
}

pub(crate) use trace_event;
pub(crate) use trace_span;

/// Guard returned by `trace_span!` when tracing is compiled out; `entered`
/// hands it back so the `let _span = ...entered();` idiom still compiles.
#[cfg(not(feature = "tracing"))]
pub struct NoopSpan;

#[cfg(not(feature = "tracing"))]
impl NoopSpan {
    #[inline]
    pub fn entered(self) -> Self {
        self
    }
}
