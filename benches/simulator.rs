use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use std::hint::black_box;
use vasicek_sde::models::ModelParameters;
use vasicek_sde::rng::RngFactory;
use vasicek_sde::simulation::PathSimulator;

fn bench_serial_vs_parallel(c: &mut Criterion) {
    let mut group = c.benchmark_group("vasicek_paths");
    group.sample_size(20);

    for &paths in &[1_000usize, 10_000] {
        let params = ModelParameters::new(0.03, 0.5, 0.04, 0.01, 1.0, 252, paths);
        let simulator = PathSimulator::new(params).expect("Valid parameters");
        let factory = RngFactory::new(42);

        group.throughput(Throughput::Elements((paths * params.n) as u64));
        group.bench_with_input(BenchmarkId::new("serial", paths), &simulator, |b, s| {
            b.iter(|| black_box(s.simulate_seeded(black_box(42))))
        });
        group.bench_with_input(BenchmarkId::new("parallel", paths), &simulator, |b, s| {
            b.iter(|| black_box(s.simulate_parallel(black_box(&factory))))
        });
    }

    group.finish();
}

criterion_group!(benches, bench_serial_vs_parallel);
criterion_main!(benches);
