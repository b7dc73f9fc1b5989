//! Per-channel intensity histograms.
//!
//! A histogram holds 256 counts, one per 8-bit intensity. Counts are exact
//! integers, so the bins of each channel sum to `width * height`.

mod normalize;

pub use normalize::{normalize, normalize_all, NormalizedHistogram};

use crate::image::{PixelGrid, CHANNELS};
use crate::trace::{trace_event, trace_span};
use crate::util::{ChromaError, ChromaResult};

/// Number of intensity bins per channel.
pub const BINS: usize = 256;

/// One of the three RGB intensity planes.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Channel {
    Red,
    Green,
    Blue,
}

impl Channel {
    /// All channels in interleaved order.
    pub const ALL: [Channel; 3] = [Channel::Red, Channel::Green, Channel::Blue];

    /// Returns the interleaved sample offset of this channel.
    pub fn index(self) -> usize {
        match self {
            Channel::Red => 0,
            Channel::Green => 1,
            Channel::Blue => 2,
        }
    }

    /// Returns the stroke color used when charting this channel.
    pub fn color(self) -> [u8; 3] {
        match self {
            Channel::Red => [255, 0, 0],
            Channel::Green => [0, 255, 0],
            Channel::Blue => [0, 0, 255],
        }
    }
}

/// A value per RGB channel.
#[derive(Clone, Debug, PartialEq)]
pub struct ChannelSet<T> {
    pub red: T,
    pub green: T,
    pub blue: T,
}

impl<T> ChannelSet<T> {
    /// Returns the entry for `channel`.
    pub fn get(&self, channel: Channel) -> &T {
        match channel {
            Channel::Red => &self.red,
            Channel::Green => &self.green,
            Channel::Blue => &self.blue,
        }
    }

    /// Iterates entries in R, G, B order.
    pub fn iter(&self) -> impl Iterator<Item = (Channel, &T)> {
        Channel::ALL.into_iter().map(move |c| (c, self.get(c)))
    }
}

/// Intensity counts for a single channel.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ChannelHistogram {
    channel: Channel,
    counts: [u64; BINS],
}

impl ChannelHistogram {
    /// Creates a histogram from raw counts.
    pub fn from_counts(channel: Channel, counts: [u64; BINS]) -> Self {
        Self { channel, counts }
    }

    /// Returns the channel these counts belong to.
    pub fn channel(&self) -> Channel {
        self.channel
    }

    /// Returns all 256 counts indexed by intensity.
    pub fn counts(&self) -> &[u64; BINS] {
        &self.counts
    }

    /// Returns the count for `value`.
    pub fn get(&self, value: u8) -> u64 {
        self.counts[value as usize]
    }

    /// Returns the number of samples counted.
    pub fn total(&self) -> u64 {
        self.counts.iter().sum()
    }

    /// Returns the largest bin count.
    pub fn max_count(&self) -> u64 {
        self.counts.iter().copied().max().unwrap_or(0)
    }

    /// Returns the most frequent intensity (lowest on ties), or `None` if all
    /// bins are zero.
    pub fn peak_value(&self) -> Option<u8> {
        let max = self.max_count();
        if max == 0 {
            return None;
        }
        self.counts
            .iter()
            .position(|&c| c == max)
            .map(|idx| idx as u8)
    }
}

/// Histograms for the R, G and B channels of one grid.
pub type RgbHistograms = ChannelSet<ChannelHistogram>;

type RawCounts = [[u64; BINS]; CHANNELS];

/// Counts intensity occurrences per channel over every pixel of `grid`.
///
/// Fails with `EmptyGrid` when the grid has zero area.
pub fn compute_histograms(grid: &PixelGrid) -> ChromaResult<RgbHistograms> {
    compute_histograms_with(grid, false)
}

/// Like [`compute_histograms`], optionally splitting rows across threads
/// (requires the `rayon` feature, sequential otherwise).
pub fn compute_histograms_with(grid: &PixelGrid, parallel: bool) -> ChromaResult<RgbHistograms> {
    if grid.is_empty() {
        return Err(ChromaError::EmptyGrid {
            width: grid.width(),
            height: grid.height(),
        });
    }
    let _span = trace_span!(
        "compute_histograms",
        width = grid.width(),
        height = grid.height(),
        parallel = parallel
    )
    .entered();

    let counts = count_samples(grid, parallel);
    let [red, green, blue] = counts;
    let out = ChannelSet {
        red: ChannelHistogram::from_counts(Channel::Red, red),
        green: ChannelHistogram::from_counts(Channel::Green, green),
        blue: ChannelHistogram::from_counts(Channel::Blue, blue),
    };
    trace_event!(
        "histograms",
        red_max = out.red.max_count(),
        green_max = out.green.max_count(),
        blue_max = out.blue.max_count()
    );
    Ok(out)
}

fn count_samples(grid: &PixelGrid, parallel: bool) -> RawCounts {
    #[cfg(feature = "rayon")]
    {
        if parallel {
            use rayon::prelude::*;
            let stride = grid.width() * CHANNELS;
            return grid
                .as_raw()
                .par_chunks(stride)
                .fold(
                    || [[0u64; BINS]; CHANNELS],
                    |mut acc, row| {
                        accumulate(&mut acc, row);
                        acc
                    },
                )
                .reduce(|| [[0u64; BINS]; CHANNELS], merge);
        }
    }
    #[cfg(not(feature = "rayon"))]
    let _ = parallel;

    let mut acc = [[0u64; BINS]; CHANNELS];
    accumulate(&mut acc, grid.as_raw());
    acc
}

fn accumulate(acc: &mut RawCounts, samples: &[u8]) {
    for px in samples.chunks_exact(CHANNELS) {
        acc[0][px[0] as usize] += 1;
        acc[1][px[1] as usize] += 1;
        acc[2][px[2] as usize] += 1;
    }
}

#[cfg(feature = "rayon")]
fn merge(mut a: RawCounts, b: RawCounts) -> RawCounts {
    for (dst, src) in a.iter_mut().zip(b.iter()) {
        for (d, s) in dst.iter_mut().zip(src.iter()) {
            *d += s;
        }
    }
    a
}
