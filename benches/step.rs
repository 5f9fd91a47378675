use criterion::{BatchSize, BenchmarkId, Criterion, criterion_group, criterion_main};
use rand::{SeedableRng, rngs::StdRng};
use torus_life::{Grid, Preset};

fn bench_step(c: &mut Criterion) {
    let mut group = c.benchmark_group("step");
    for preset in [Preset::Random, Preset::Pulsar] {
        let grid = Grid::from_preset(preset, &mut StdRng::seed_from_u64(0));

        group.bench_with_input(BenchmarkId::new("serial", preset), &grid, |b, grid| {
            b.iter_batched(|| grid.clone(), |grid| grid.step(), BatchSize::SmallInput);
        });

        group.bench_with_input(BenchmarkId::new("parallel", preset), &grid, |b, grid| {
            b.iter_batched(
                || grid.clone(),
                |grid| grid.step_parallel(),
                BatchSize::SmallInput,
            );
        });
    }
    group.finish();
}

criterion_group!(benches, bench_step);
criterion_main!(benches);
