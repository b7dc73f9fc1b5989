#![cfg(feature = "rayon")]

use chromascale::lowlevel::compute_histograms_with;
use chromascale::{
    process_image, resample_with, ChromaError, Interpolation, PipelineConfig, PixelGrid,
    ResampleConfig,
};

fn make_grid(width: usize, height: usize) -> PixelGrid {
    let mut data = Vec::with_capacity(width * height * 3);
    for y in 0..height {
        for x in 0..width {
            data.push(((x * 13) ^ (y * 7)) as u8);
            data.push(((x * y) & 0xFF) as u8);
            data.push(((x + 3 * y) & 0xFF) as u8);
        }
    }
    PixelGrid::new(data, width, height).unwrap()
}

#[test]
fn parallel_resample_matches_sequential() {
    let grid = make_grid(123, 77);
    for interpolation in [Interpolation::Nearest, Interpolation::Bilinear] {
        for scale in [0.37, 1.0, 2.6] {
            let seq = resample_with(
                &grid,
                scale,
                &ResampleConfig {
                    interpolation,
                    parallel: false,
                },
            )
            .unwrap();
            let par = resample_with(
                &grid,
                scale,
                &ResampleConfig {
                    interpolation,
                    parallel: true,
                },
            )
            .unwrap();
            assert_eq!(seq, par);
        }
    }
}

#[test]
fn parallel_histograms_match_sequential() {
    let grid = make_grid(200, 150);
    let seq = compute_histograms_with(&grid, false).unwrap();
    let par = compute_histograms_with(&grid, true).unwrap();
    assert_eq!(seq, par);
}

#[test]
fn parallel_pipeline_matches_sequential() {
    let grid = make_grid(96, 64);
    let seq_cfg = PipelineConfig {
        interpolation: Interpolation::Bilinear,
        ..PipelineConfig::default()
    };
    let par_cfg = PipelineConfig {
        parallel: true,
        ..seq_cfg.clone()
    };
    let seq = process_image(&grid, 0.75, &seq_cfg).unwrap();
    let par = process_image(&grid, 0.75, &par_cfg).unwrap();
    assert_eq!(seq.resized, par.resized);
    assert_eq!(seq.original_chart, par.original_chart);
    assert_eq!(seq.resized_chart, par.resized_chart);
}

fn parallel_config() -> PipelineConfig {
    PipelineConfig {
        parallel: true,
        ..PipelineConfig::default()
    }
}

#[test]
fn parallel_pipeline_reports_original_branch_error_first() {
    // Both branches fail here; the original branch error must win.
    let grid = PixelGrid::new(Vec::new(), 4, 0).unwrap();
    let seq = process_image(&grid, 2.0, &PipelineConfig::default()).unwrap_err();
    let par = process_image(&grid, 2.0, &parallel_config()).unwrap_err();
    assert_eq!(
        par,
        ChromaError::EmptyGrid {
            width: 4,
            height: 0,
        }
    );
    assert_eq!(seq, par);
}

#[test]
fn parallel_pipeline_reports_degenerate_resize() {
    let grid = PixelGrid::filled(1, 1, [10, 20, 30]).unwrap();
    let seq = process_image(&grid, 0.1, &PipelineConfig::default()).unwrap_err();
    let par = process_image(&grid, 0.1, &parallel_config()).unwrap_err();
    assert_eq!(
        par,
        ChromaError::DegenerateResize {
            width: 0,
            height: 0,
            scale: 0.1,
        }
    );
    assert_eq!(seq, par);
}

#[test]
fn parallel_pipeline_rejects_invalid_scale() {
    let grid = PixelGrid::filled(2, 2, [0, 0, 0]).unwrap();
    let err = process_image(&grid, 0.0, &parallel_config()).unwrap_err();
    assert_eq!(err, ChromaError::InvalidScale { scale: 0.0 });
}
