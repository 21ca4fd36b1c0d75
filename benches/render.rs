//! Benchmarks for heatmap transform, scale resolution, and frame drawing.
//!
//! Run with: cargo bench
//!
//! Results are saved to `target/criterion/` with HTML reports.
#![allow(
    clippy::expect_used,
    clippy::unwrap_used,
    clippy::cast_precision_loss
)]

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};

use heatview::cells::transform;
use heatview::layout::PlotLayout;
use heatview::plot::{resolve, ColorConfig, PlotSpec};
use heatview::render::{draw_frame, Surface, TextAlign};
use heatview::scale::ColorScale;

/// A surface that counts operations, isolating the frame-walk cost from
/// any real drawing backend.
struct CountingSurface {
    width: f32,
    height: f32,
    ops: usize,
}

impl Surface for CountingSurface {
    fn size(&self) -> (f32, f32) {
        (self.width, self.height)
    }
    fn clear(&mut self) {
        self.ops += 1;
    }
    fn fill_rect(&mut self, _x: f32, _y: f32, _w: f32, _h: f32, _color: &str) {
        self.ops += 1;
    }
    fn stroke_rect(&mut self, _x: f32, _y: f32, _w: f32, _h: f32, _color: &str) {
        self.ops += 1;
    }
    fn draw_text(&mut self, _text: &str, _x: f32, _y: f32, _align: TextAlign) {
        self.ops += 1;
    }
}

fn square_matrix(n: usize) -> Vec<Vec<f64>> {
    (0..n)
        .map(|i| (0..n).map(|j| ((i * n + j) % 97) as f64).collect())
        .collect()
}

fn bench_transform(c: &mut Criterion) {
    let mut group = c.benchmark_group("transform");
    for n in [10usize, 100, 300] {
        let matrix = square_matrix(n);
        group.throughput(Throughput::Elements((n * n) as u64));
        group.bench_with_input(BenchmarkId::from_parameter(n), &matrix, |b, m| {
            b.iter(|| transform(black_box(m)).expect("rectangular matrix"))
        });
    }
    group.finish();
}

fn bench_resolve(c: &mut Criterion) {
    let mut group = c.benchmark_group("resolve");
    for n in [10usize, 100, 300] {
        let spec = PlotSpec {
            matrix: square_matrix(n),
            color: ColorConfig::Depth {
                base: "#ff0000".to_string(),
                depth: 0.8,
            },
        };
        group.throughput(Throughput::Elements((n * n) as u64));
        group.bench_with_input(BenchmarkId::from_parameter(n), &spec, |b, s| {
            b.iter(|| resolve(black_box(s)).expect("valid spec"))
        });
    }
    group.finish();
}

fn bench_draw_frame(c: &mut Criterion) {
    let mut group = c.benchmark_group("draw_frame");
    for n in [10usize, 100] {
        let cells = transform(&square_matrix(n)).expect("rectangular matrix");
        let scale = ColorScale::depth("#ff0000", 0.8, Some((0.0, 96.0))).expect("valid scale");
        let layout = PlotLayout::compute(
            836.0,
            624.0,
            cells.iter().map(|c| c.row),
            cells.iter().map(|c| c.col),
        );
        group.throughput(Throughput::Elements((n * n) as u64));
        group.bench_with_input(BenchmarkId::from_parameter(n), &cells, |b, cells| {
            b.iter(|| {
                let mut surface = CountingSurface {
                    width: 836.0,
                    height: 624.0,
                    ops: 0,
                };
                draw_frame(&mut surface, &layout, black_box(cells), &scale);
                surface.ops
            })
        });
    }
    group.finish();
}

criterion_group!(benches, bench_transform, bench_resolve, bench_draw_frame);
criterion_main!(benches);
