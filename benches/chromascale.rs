use chromascale::lowlevel::normalize_all;
use chromascale::{
    compute_histograms, process_image, render, resample_with, Interpolation, PipelineConfig,
    PixelGrid, ResampleConfig,
};
use criterion::{criterion_group, criterion_main, Criterion};
use std::hint::black_box;

fn make_grid(width: usize, height: usize) -> PixelGrid {
    let mut data = Vec::with_capacity(width * height * 3);
    for y in 0..height {
        for x in 0..width {
            data.push(((x * 13) ^ (y * 7) ^ (x * y)) as u8);
            data.push(((x * 5 + y) & 0xFF) as u8);
            data.push(((y * 3) & 0xFF) as u8);
        }
    }
    PixelGrid::new(data, width, height).unwrap()
}

fn bench_resample(c: &mut Criterion) {
    let grid = make_grid(1024, 768);
    for (name, interpolation) in [
        ("resample_nearest_0.5x", Interpolation::Nearest),
        ("resample_bilinear_0.5x", Interpolation::Bilinear),
    ] {
        let cfg = ResampleConfig {
            interpolation,
            parallel: false,
        };
        c.bench_function(name, |b| {
            b.iter(|| black_box(resample_with(&grid, 0.5, &cfg).unwrap()));
        });
    }
}

fn bench_histogram(c: &mut Criterion) {
    let grid = make_grid(1024, 768);
    c.bench_function("compute_histograms_1024x768", |b| {
        b.iter(|| black_box(compute_histograms(&grid).unwrap()));
    });

    let normalized = normalize_all(&compute_histograms(&grid).unwrap(), 300.0).unwrap();
    c.bench_function("render_chart_800x400", |b| {
        b.iter(|| black_box(render(&normalized).unwrap()));
    });
}

fn bench_pipeline(c: &mut Criterion) {
    let grid = make_grid(1024, 768);
    let cfg = PipelineConfig::default();
    c.bench_function("process_image_0.75x", |b| {
        b.iter(|| black_box(process_image(&grid, 0.75, &cfg).unwrap()));
    });

    #[cfg(feature = "rayon")]
    {
        let par_cfg = PipelineConfig {
            parallel: true,
            ..PipelineConfig::default()
        };
        c.bench_function("process_image_0.75x_parallel", |b| {
            b.iter(|| black_box(process_image(&grid, 0.75, &par_cfg).unwrap()));
        });
    }
}

criterion_group!(benches, bench_resample, bench_histogram, bench_pipeline);
criterion_main!(benches);
