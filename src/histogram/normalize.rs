//! Peak normalization of channel histograms.
//!
//! Each bin `v` becomes `v / max * target_height`, so the most frequent
//! intensity always reaches the full drawing height. Heights therefore compare
//! shapes, not absolute frequencies across images.

use super::{Channel, ChannelHistogram, ChannelSet, RgbHistograms, BINS};
use crate::util::{ChromaError, ChromaResult};

/// Histogram bins rescaled to drawing heights in `[0, target_height]`.
#[derive(Clone, Debug, PartialEq)]
pub struct NormalizedHistogram {
    channel: Channel,
    target_height: f32,
    bins: [f32; BINS],
}

impl NormalizedHistogram {
    /// Returns the channel these heights belong to.
    pub fn channel(&self) -> Channel {
        self.channel
    }

    /// Returns the height the peak bin was scaled to.
    pub fn target_height(&self) -> f32 {
        self.target_height
    }

    /// Returns all 256 scaled heights indexed by intensity.
    pub fn bins(&self) -> &[f32; BINS] {
        &self.bins
    }

    /// Returns the scaled height for `value`.
    pub fn get(&self, value: u8) -> f32 {
        self.bins[value as usize]
    }
}

/// Scales `histogram` so its largest bin equals `target_height`.
///
/// Fails with `DegenerateHistogram` when every bin is zero.
pub fn normalize(
    histogram: &ChannelHistogram,
    target_height: f32,
) -> ChromaResult<NormalizedHistogram> {
    if !target_height.is_finite() || target_height <= 0.0 {
        return Err(ChromaError::InvalidInput(
            "target height must be positive and finite",
        ));
    }
    let max = histogram.max_count();
    if max == 0 {
        return Err(ChromaError::DegenerateHistogram {
            channel: histogram.channel(),
        });
    }

    let max = max as f64;
    let height = f64::from(target_height);
    let mut bins = [0.0f32; BINS];
    for (dst, &count) in bins.iter_mut().zip(histogram.counts()) {
        *dst = (count as f64 / max * height) as f32;
    }
    Ok(NormalizedHistogram {
        channel: histogram.channel(),
        target_height,
        bins,
    })
}

/// Normalizes all three channels to the same `target_height`.
pub fn normalize_all(
    histograms: &RgbHistograms,
    target_height: f32,
) -> ChromaResult<ChannelSet<NormalizedHistogram>> {
    Ok(ChannelSet {
        red: normalize(&histograms.red, target_height)?,
        green: normalize(&histograms.green, target_height)?,
        blue: normalize(&histograms.blue, target_height)?,
    })
}
