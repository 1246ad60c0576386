use criterion::{criterion_group, criterion_main, BatchSize, BenchmarkId, Criterion, black_box};
use fig_core::{optimize, Canvas, ColorbarRegistry, InsetMeasurer, OptimizeOptions};

fn gen_grid_canvas(n: usize) -> Canvas {
    let mut canvas = Canvas::new(12.0, 9.0);
    canvas.add_panel_grid(n, n).expect("grid");
    canvas
}

fn bench_optimize(c: &mut Criterion) {
    let registry = ColorbarRegistry::new();
    let measurer = InsetMeasurer::uniform(0.2);
    let mut group = c.benchmark_group("optimize");
    for &n in &[2usize, 4usize, 8usize] {
        let canvas = gen_grid_canvas(n);
        for &iters in &[1usize, 2usize, 4usize] {
            let options = OptimizeOptions { iterations: iters, ..OptimizeOptions::default() };
            group.bench_with_input(BenchmarkId::from_parameter(format!("g{n}_i{iters}")), &options, |b, opts| {
                b.iter_batched(
                    || canvas.clone(),
                    |mut cv| {
                        optimize(&mut cv, &registry, &measurer, opts).expect("optimize");
                        black_box(cv.size());
                    },
                    BatchSize::SmallInput,
                );
            });
        }
    }
    group.finish();
}

criterion_group!(benches, bench_optimize);
criterion_main!(benches);
