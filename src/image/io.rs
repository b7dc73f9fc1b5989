//! Conversions between `PixelGrid` and the `image` crate, plus file helpers.
//!
//! Available when the `image-io` feature is enabled.

use crate::chart::ChartImage;
use crate::image::PixelGrid;
use crate::util::{ChromaError, ChromaResult};
use std::path::Path;

/// Prefix prepended to the file name of a resized upload.
pub const RESIZED_PREFIX: &str = "resized_";

/// Creates a grid from an RGB image buffer.
pub fn grid_from_rgb_image(img: &image::RgbImage) -> ChromaResult<PixelGrid> {
    PixelGrid::new(
        img.as_raw().clone(),
        img.width() as usize,
        img.height() as usize,
    )
}

/// Creates a grid from a decoded image of any color type, dropping alpha.
pub fn grid_from_dynamic_image(img: &image::DynamicImage) -> ChromaResult<PixelGrid> {
    grid_from_rgb_image(&img.to_rgb8())
}

/// Converts a grid into an RGB image buffer.
pub fn grid_to_rgb_image(grid: &PixelGrid) -> ChromaResult<image::RgbImage> {
    let width = u32::try_from(grid.width()).map_err(|_| ChromaError::InvalidDimensions {
        width: grid.width(),
        height: grid.height(),
    })?;
    let height = u32::try_from(grid.height()).map_err(|_| ChromaError::InvalidDimensions {
        width: grid.width(),
        height: grid.height(),
    })?;
    image::RgbImage::from_raw(width, height, grid.as_raw().to_vec()).ok_or(
        ChromaError::BufferSizeMismatch {
            expected: grid.width() * grid.height() * 3,
            got: grid.as_raw().len(),
        },
    )
}

/// Loads an image from disk and converts it to an RGB grid.
pub fn load_rgb_image<P: AsRef<Path>>(path: P) -> ChromaResult<PixelGrid> {
    let img = image::open(path).map_err(|err| ChromaError::ImageIo {
        reason: err.to_string(),
    })?;
    grid_from_dynamic_image(&img)
}

/// Writes `grid` to `path`, choosing the format from the extension.
pub fn save_grid<P: AsRef<Path>>(grid: &PixelGrid, path: P) -> ChromaResult<()> {
    grid_to_rgb_image(grid)?
        .save(path)
        .map_err(|err| ChromaError::ImageIo {
            reason: err.to_string(),
        })
}

/// Writes a chart to `path` (typically PNG).
pub fn save_chart<P: AsRef<Path>>(chart: &ChartImage, path: P) -> ChromaResult<()> {
    save_grid(chart.as_grid(), path)
}

/// Returns the file name a resized copy of `file_name` is stored under.
pub fn resized_file_name(file_name: &str) -> String {
    format!("{RESIZED_PREFIX}{file_name}")
}

/// Returns the file name of the chart tagged `tag` (`original`, `resized`).
pub fn chart_file_name(tag: &str) -> String {
    format!("{tag}_color_distribution.png")
}

#[cfg(test)]
mod tests {
    use super::{chart_file_name, grid_from_rgb_image, grid_to_rgb_image, resized_file_name};
    use crate::image::PixelGrid;

    #[test]
    fn file_names_follow_upload_conventions() {
        assert_eq!(resized_file_name("cat.jpg"), "resized_cat.jpg");
        assert_eq!(chart_file_name("original"), "original_color_distribution.png");
    }

    #[test]
    fn rgb_image_conversion_keeps_pixels() {
        let grid = PixelGrid::from_rows(&[vec![[1u8, 2, 3], [4, 5, 6]]]).unwrap();
        let img = grid_to_rgb_image(&grid).unwrap();
        assert_eq!(img.get_pixel(1, 0).0, [4, 5, 6]);
        assert_eq!(grid_from_rgb_image(&img).unwrap(), grid);
    }
}
