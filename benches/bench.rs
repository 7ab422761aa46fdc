use criterion::{black_box, criterion_group, criterion_main, Criterion};
use rlifepred::{ancestors_of_alive, ancestors_of_dead, shift_intersect, Classification, Side};
use rlifepred::rules::Life;

fn criterion_benchmark(c: &mut Criterion) {
    let mut group = c.benchmark_group("All tests");

    group
        .bench_function("classify-b3s23", |b| {
            b.iter(|| Classification::new(black_box(&Life::conway())))
        })
        .bench_function("shift-intersect-alive-dead", |b| {
            let alive = ancestors_of_alive();
            let dead = ancestors_of_dead();
            b.iter(|| shift_intersect(black_box(&alive), black_box(&dead), Side::E))
        })
        .bench_function("shift-intersect-alive-alive-diagonal", |b| {
            let alive = ancestors_of_alive();
            b.iter(|| shift_intersect(black_box(&alive), black_box(&alive), Side::SE))
        });

    group.finish();
}

criterion_group!(benches, criterion_benchmark);
criterion_main!(benches);
