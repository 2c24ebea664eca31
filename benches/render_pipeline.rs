//! Benchmarks for the full-view render and a deep zoom.
//!
//! Run with: cargo bench --bench render_pipeline

use criterion::{BenchmarkId, Criterion, black_box, criterion_group, criterion_main};
use mandelbrot_viewer::{EngineConfig, EngineRequest, FractalEngine, Point, RenderStrategy};

fn config(render_strategy: RenderStrategy, max_iterations: u32) -> EngineConfig {
    EngineConfig {
        max_iterations,
        render_strategy,
        ..EngineConfig::default()
    }
}

fn bench_full_view(c: &mut Criterion) {
    let mut group = c.benchmark_group("full_view");
    group.sample_size(10);

    for strategy in [RenderStrategy::Serial, RenderStrategy::Rayon] {
        group.bench_with_input(
            BenchmarkId::new(format!("{:?}", strategy), 100),
            &strategy,
            |b, &strategy| {
                b.iter(|| FractalEngine::new(black_box(config(strategy, 100))));
            },
        );
    }

    group.finish();
}

fn bench_zoom(c: &mut Criterion) {
    let mut group = c.benchmark_group("zoom");
    group.sample_size(10);

    group.bench_function("seahorse_valley_rayon", |b| {
        b.iter_batched(
            || {
                FractalEngine::new(config(RenderStrategy::Rayon, 250))
                    .expect("engine should render the full view")
            },
            |mut engine| {
                engine
                    .handle(black_box(EngineRequest::Zoom {
                        press: Point::new(300, 300),
                        release: Point::new(400, 380),
                    }))
                    .expect("zoom should render")
            },
            criterion::BatchSize::LargeInput,
        );
    });

    group.finish();
}

criterion_group!(benches, bench_full_view, bench_zoom);
criterion_main!(benches);
