use criterion::{
    BenchmarkId,
    Criterion,
    Throughput,
    criterion_group,
    criterion_main,
};

use bevy_meadow::{
    random_clouds,
    random_trees,
};


const POPULATION_COUNTS: [usize; 3] = [
    15,
    200,
    2_000,
];

fn scatter_benchmark(c: &mut Criterion) {
    let mut group = c.benchmark_group("sample scatter specs");
    for count in POPULATION_COUNTS.iter() {
        group.throughput(Throughput::Elements(*count as u64));
        group.bench_with_input(
            BenchmarkId::new("clouds", count),
            count,
            |b, &count| {
                b.iter(|| random_clouds(count));
            },
        );
        group.bench_with_input(
            BenchmarkId::new("trees", count),
            count,
            |b, &count| {
                b.iter(|| random_trees(count));
            },
        );
    }
}

criterion_group!{
    name = scatter_benches;
    config = Criterion::default().sample_size(20);
    targets = scatter_benchmark
}
criterion_main!(scatter_benches);
