use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};

use sm_matrix::{MatMul, Matrix, MultiplyConfig, NaiveMultiplier, StrassenMultiplier};

fn bench_multiply(c: &mut Criterion) {
    let mut group = c.benchmark_group("multiply");
    group.sample_size(10);

    let naive = NaiveMultiplier::new();
    let strassen = StrassenMultiplier::new(MultiplyConfig::default());
    let eager = StrassenMultiplier::new(MultiplyConfig::new().with_naive_threshold(4));

    for &side in &[64usize, 200, 256, 300] {
        let a = Matrix::filled(side, side, 2.0);
        let b = Matrix::filled(side, side, 2.0);
        let backends: [(&str, &dyn MatMul); 3] = [
            ("naive", &naive),
            ("strassen", &strassen),
            ("strassen-threshold-4", &eager),
        ];
        for (label, backend) in backends {
            group.bench_with_input(BenchmarkId::new(label, side), &side, |bench, _| {
                bench.iter(|| backend.multiply(black_box(&a), black_box(&b)))
            });
        }
    }

    group.finish();
}

criterion_group!(benches, bench_multiply);
criterion_main!(benches);
