//! Rasterization of normalized RGB histograms into a fixed-size chart.
//!
//! Each intensity `x` of channel `c` becomes a vertical stroke in column
//! `x * spacing + c.index() * channel_offset` that runs from the bottom edge
//! up to row `round(height - value)`. With the default layout (spacing 3,
//! offset 1) the red, green and blue strokes of one intensity occupy three
//! adjacent columns and never overlap; the 768 drawn columns leave a blank
//! margin on the right of the 800 pixel canvas.

use crate::histogram::{Channel, ChannelSet, NormalizedHistogram, BINS};
use crate::image::{PixelGrid, CHANNELS};
use crate::trace::{trace_event, trace_span};
use crate::util::{ChromaError, ChromaResult};

/// Canvas geometry and stroke placement for chart rendering.
#[derive(Clone, Debug, PartialEq)]
pub struct ChartLayout {
    /// Canvas width in pixels.
    pub width: usize,
    /// Canvas height in pixels.
    pub height: usize,
    /// Height that the peak bin of each histogram is normalized to.
    pub drawing_height: f32,
    /// Horizontal distance between consecutive intensities.
    pub spacing: usize,
    /// Horizontal shift between channels of the same intensity.
    pub channel_offset: usize,
    /// Background fill color.
    pub background: [u8; 3],
}

impl Default for ChartLayout {
    fn default() -> Self {
        Self {
            width: 800,
            height: 400,
            drawing_height: 300.0,
            spacing: 3,
            channel_offset: 1,
            background: [255, 255, 255],
        }
    }
}

impl ChartLayout {
    /// Checks that the canvas is non-empty and every stroke column fits.
    pub fn validate(&self) -> ChromaResult<()> {
        if self.width == 0 || self.height == 0 {
            return Err(ChromaError::InvalidDimensions {
                width: self.width,
                height: self.height,
            });
        }
        if !self.drawing_height.is_finite() || self.drawing_height <= 0.0 {
            return Err(ChromaError::InvalidInput(
                "drawing height must be positive and finite",
            ));
        }
        let last = (BINS - 1)
            .checked_mul(self.spacing)
            .and_then(|v| {
                self.channel_offset
                    .checked_mul(2)
                    .and_then(|offset| v.checked_add(offset))
            });
        match last {
            Some(last) if last < self.width => Ok(()),
            _ => Err(ChromaError::InvalidInput(
                "chart strokes do not fit the canvas width",
            )),
        }
    }

    /// Returns the canvas column for `value` of `channel`.
    pub fn stroke_column(&self, channel: Channel, value: u8) -> usize {
        value as usize * self.spacing + channel.index() * self.channel_offset
    }

    /// Returns the first (topmost) row covered by a stroke of `height`.
    ///
    /// A result equal to `self.height` means the stroke is empty.
    pub fn stroke_top(&self, height: f32) -> usize {
        let canvas = self.height as f32;
        let top = (canvas - height).round().clamp(0.0, canvas);
        top as usize
    }
}

/// Rendered histogram chart.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ChartImage {
    grid: PixelGrid,
}

impl ChartImage {
    /// Returns the chart width in pixels.
    pub fn width(&self) -> usize {
        self.grid.width()
    }

    /// Returns the chart height in pixels.
    pub fn height(&self) -> usize {
        self.grid.height()
    }

    /// Returns the pixel at `(x, y)` if it is within bounds.
    pub fn get(&self, x: usize, y: usize) -> Option<[u8; 3]> {
        self.grid.get(x, y)
    }

    /// Returns the chart pixels.
    pub fn as_grid(&self) -> &PixelGrid {
        &self.grid
    }

    /// Consumes the chart and returns its pixels.
    pub fn into_grid(self) -> PixelGrid {
        self.grid
    }
}

/// Renders the three histograms onto the default 800x400 canvas.
pub fn render(histograms: &ChannelSet<NormalizedHistogram>) -> ChromaResult<ChartImage> {
    render_with(histograms, &ChartLayout::default())
}

/// Renders the three histograms using `layout`.
///
/// Heights above the canvas are clipped to the top edge.
pub fn render_with(
    histograms: &ChannelSet<NormalizedHistogram>,
    layout: &ChartLayout,
) -> ChromaResult<ChartImage> {
    layout.validate()?;
    let _span = trace_span!("render_chart", width = layout.width, height = layout.height).entered();

    let mut grid = PixelGrid::filled(layout.width, layout.height, layout.background)?;
    let mut painted = 0usize;
    for (channel, hist) in histograms.iter() {
        let color = channel.color();
        for (value, &h) in hist.bins().iter().enumerate() {
            let x = layout.stroke_column(channel, value as u8);
            let top = layout.stroke_top(h);
            let s = x * CHANNELS;
            for row in grid.rows_mut().skip(top) {
                row[s..s + CHANNELS].copy_from_slice(&color);
            }
            painted += layout.height - top;
        }
    }
    trace_event!("chart_rendered", painted = painted);
    Ok(ChartImage { grid })
}
