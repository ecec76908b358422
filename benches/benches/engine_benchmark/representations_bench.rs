use std::{hint::black_box, time::Duration};

use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use datebench::{
    AnyEngine, CalendarDate, DateDataset, DateEngine, HashSetEngine, PriorityQueueEngine,
    Representation, SortedArrayEngine,
};
use rand::{rngs::SmallRng, Rng, SeedableRng};

const SIZES: [usize; 3] = [1_000, 10_000, 100_000];

/// Случайные даты за ~50 лет: дубликаты есть, но их немного.
fn make_dataset(size: usize) -> DateDataset {
    let mut rng = SmallRng::seed_from_u64(0xDA7E);
    (0..size)
        .map(|_| {
            CalendarDate::from_ymd(
                rng.gen_range(1990..=2040),
                rng.gen_range(1..=12),
                rng.gen_range(1..=28),
            )
            .expect("day <= 28 is always valid")
        })
        .collect()
}

fn make_target(dataset: &DateDataset) -> CalendarDate {
    dataset[dataset.len() / 2]
}

fn bench_search(c: &mut Criterion) {
    let mut group = c.benchmark_group("search");
    group.warm_up_time(Duration::from_secs(1));
    group.measurement_time(Duration::from_secs(3));

    for &size in &SIZES {
        let dataset = make_dataset(size);
        let target = make_target(&dataset);

        for representation in Representation::ALL {
            let mut engine = AnyEngine::build(representation, &dataset);
            engine.reorder();

            group.bench_with_input(
                BenchmarkId::new(representation.as_str(), size),
                &target,
                |b, &t| b.iter(|| black_box(engine.search(black_box(t)))),
            );
        }
    }
    group.finish();
}

fn bench_min_max(c: &mut Criterion) {
    let mut group = c.benchmark_group("min_max");

    for &size in &SIZES {
        let dataset = make_dataset(size);
        group.throughput(Throughput::Elements(size as u64));

        for representation in Representation::ALL {
            let engine = AnyEngine::build(representation, &dataset);
            group.bench_function(BenchmarkId::new(representation.as_str(), size), |b| {
                b.iter(|| black_box(engine.min_max()))
            });
        }
    }
    group.finish();
}

fn bench_sort(c: &mut Criterion) {
    let mut group = c.benchmark_group("sort");
    group.sample_size(30);

    for &size in &SIZES {
        let dataset = make_dataset(size);
        group.throughput(Throughput::Elements(size as u64));

        for representation in [Representation::Array, Representation::List] {
            group.bench_with_input(
                BenchmarkId::new(representation.as_str(), size),
                &dataset,
                |b, d| {
                    b.iter_batched(
                        || AnyEngine::build(representation, d),
                        |mut engine| black_box(engine.reorder()),
                        criterion::BatchSize::LargeInput,
                    )
                },
            );
        }
    }
    group.finish();
}

fn bench_build(c: &mut Criterion) {
    let mut group = c.benchmark_group("build");

    let dataset = make_dataset(10_000);
    group.throughput(Throughput::Elements(dataset.len() as u64));

    group.bench_function("array", |b| {
        b.iter(|| black_box(SortedArrayEngine::from_dataset(&dataset)))
    });
    group.bench_function("priority queue", |b| {
        b.iter(|| black_box(PriorityQueueEngine::from_dataset(&dataset)))
    });
    group.bench_function("hash set", |b| {
        b.iter(|| black_box(HashSetEngine::from_dataset(&dataset)))
    });
    group.finish();
}

fn bench_queue_head(c: &mut Criterion) {
    let dataset = make_dataset(10_000);

    c.bench_function("priority queue head operations", |b| {
        b.iter_batched(
            || PriorityQueueEngine::from_dataset(&dataset),
            |mut queue| black_box(queue.head_operations()),
            criterion::BatchSize::LargeInput,
        )
    });
}

fn bench_cross_check(c: &mut Criterion) {
    let dataset = make_dataset(10_000);
    let set = HashSetEngine::from_dataset(&dataset);

    c.bench_function("hash set cross check", |b| {
        b.iter(|| black_box(set.cross_check(&dataset)))
    });
}

criterion_group!(
    benches,
    bench_search,
    bench_min_max,
    bench_sort,
    bench_build,
    bench_queue_head,
    bench_cross_check
);
criterion_main!(benches);
