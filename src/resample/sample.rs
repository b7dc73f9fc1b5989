//! Per-axis source taps and row sampling kernels.

use super::{Interpolation, ScaleFactor};
use crate::image::{PixelGrid, CHANNELS};

/// Source sampling position for one output coordinate along an axis.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct AxisTap {
    /// Source index at or below the mapped coordinate.
    pub i0: usize,
    /// Next source index, clamped to the last valid one.
    pub i1: usize,
    /// Fractional distance from `i0` toward `i1` in `[0, 1)`.
    pub frac: f32,
}

/// Maps each of `dst_len` output coordinates to source taps.
///
/// The source coordinate is `d / scale`, clamped to `[0, src_len - 1]`.
/// `src_len` must be non-zero.
pub fn axis_taps(dst_len: usize, src_len: usize, scale: ScaleFactor) -> Vec<AxisTap> {
    let max = src_len.saturating_sub(1);
    let max_f = max as f64;
    (0..dst_len)
        .map(|d| {
            let src = (d as f64 / scale.get()).clamp(0.0, max_f);
            let i0 = (src.floor() as usize).min(max);
            let i1 = (i0 + 1).min(max);
            AxisTap {
                i0,
                i1,
                frac: (src - i0 as f64) as f32,
            }
        })
        .collect()
}

/// Fills one interleaved output row of `dst` from `src`.
pub(super) fn fill_row(
    src: &PixelGrid,
    x_taps: &[AxisTap],
    y_tap: AxisTap,
    interpolation: Interpolation,
    dst: &mut [u8],
) {
    let stride = src.width() * CHANNELS;
    let data = src.as_raw();
    let row0 = &data[y_tap.i0 * stride..(y_tap.i0 + 1) * stride];

    match interpolation {
        Interpolation::Nearest => {
            for (px, tap) in dst.chunks_exact_mut(CHANNELS).zip(x_taps) {
                let s = tap.i0 * CHANNELS;
                px.copy_from_slice(&row0[s..s + CHANNELS]);
            }
        }
        Interpolation::Bilinear => {
            let row1 = &data[y_tap.i1 * stride..(y_tap.i1 + 1) * stride];
            let fy = y_tap.frac;
            for (px, tap) in dst.chunks_exact_mut(CHANNELS).zip(x_taps) {
                let fx = tap.frac;
                let w00 = (1.0 - fx) * (1.0 - fy);
                let w10 = fx * (1.0 - fy);
                let w01 = (1.0 - fx) * fy;
                let w11 = fx * fy;
                let s0 = tap.i0 * CHANNELS;
                let s1 = tap.i1 * CHANNELS;
                for (c, out) in px.iter_mut().enumerate() {
                    let a = row0[s0 + c] as f32;
                    let b = row0[s1 + c] as f32;
                    let cc = row1[s0 + c] as f32;
                    let d = row1[s1 + c] as f32;
                    let value = a * w00 + b * w10 + cc * w01 + d * w11;
                    *out = value.round().clamp(0.0, 255.0) as u8;
                }
            }
        }
    }
}
