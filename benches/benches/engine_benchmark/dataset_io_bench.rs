use std::{hint::black_box, io::Cursor};

use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use datebench::{CalendarDate, DataFileHandler};
use rand::{rngs::SmallRng, Rng, SeedableRng};

fn make_dates(size: usize) -> Vec<CalendarDate> {
    let mut rng = SmallRng::seed_from_u64(42);
    let mut dates: Vec<CalendarDate> = (0..size)
        .map(|_| {
            CalendarDate::from_ymd(
                rng.gen_range(1990..=2040),
                rng.gen_range(1..=12),
                rng.gen_range(1..=28),
            )
            .expect("day <= 28 is always valid")
        })
        .collect();
    dates.sort_unstable();
    dates
}

fn encode(dates: &[CalendarDate]) -> Vec<u8> {
    let mut buf = Vec::with_capacity(dates.len() * 11);
    DataFileHandler::write_to(&mut buf, dates).expect("writing to Vec never fails");
    buf
}

fn bench_parse(c: &mut Criterion) {
    let mut group = c.benchmark_group("dataset_parse");
    let handler = DataFileHandler::new("in-memory");

    for size in [1_000usize, 10_000, 100_000] {
        let bytes = encode(&make_dates(size));
        group.throughput(Throughput::Bytes(bytes.len() as u64));

        group.bench_with_input(BenchmarkId::from_parameter(size), &bytes, |b, bytes| {
            b.iter(|| black_box(handler.read_from(Cursor::new(bytes.as_slice()))))
        });
    }
    group.finish();
}

fn bench_write_file(c: &mut Criterion) {
    let dir = tempfile::tempdir().expect("tempdir");
    let handler = DataFileHandler::new(dir.path().join("bench.sorted"));
    let dates = make_dates(10_000);

    c.bench_function("dataset_write_file/10000", |b| {
        b.iter(|| black_box(handler.write_sorted(&dates)))
    });
}

criterion_group!(benches, bench_parse, bench_write_file);
criterion_main!(benches);
