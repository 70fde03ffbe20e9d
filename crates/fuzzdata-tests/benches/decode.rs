use criterion::{BenchmarkId, Criterion, Throughput, criterion_group, criterion_main};
use fuzzdata::DataCursor;
use fuzzdata_tests::{Call, SEED, random_input};

fn bench_integers(c: &mut Criterion) {
    let input = vec![0xa5; 4096];
    let mut group = c.benchmark_group("integers");

    group.bench_function("u64_full_range", |b| {
        b.iter(|| {
            let mut data = DataCursor::new(input.as_slice());
            while !data.is_empty() {
                std::hint::black_box(data.consume_u64());
            }
        });
    });
    group.bench_function("i32_narrow_range", |b| {
        b.iter(|| {
            let mut data = DataCursor::new(input.as_slice());
            while !data.is_empty() {
                std::hint::black_box(data.consume_i32_in_range(-100, 100));
            }
        });
    });

    group.finish();
}

fn bench_floats(c: &mut Criterion) {
    let input = vec![0x5a; 4096];

    c.bench_function("f64_full_range", |b| {
        b.iter(|| {
            let mut data = DataCursor::new(input.as_slice());
            while !data.is_empty() {
                std::hint::black_box(data.consume_f64());
            }
        });
    });
}

fn bench_strings(c: &mut Criterion) {
    let mut group = c.benchmark_group("random_length_string");

    for size_kb in [1, 10, 100] {
        let input = b"plain text with an escaped \\\\ slash ".repeat(size_kb * 1024 / 36);

        group.throughput(Throughput::Bytes(input.len() as u64));
        group.bench_with_input(
            BenchmarkId::new("consume", format!("{size_kb}kb")),
            &input,
            |b, input| {
                b.iter(|| {
                    let mut data = DataCursor::new(input.as_slice());
                    data.consume_remaining_random_length_string()
                });
            },
        );
    }

    group.finish();
}

fn bench_mixed(c: &mut Criterion) {
    let mut rng = fastrand::Rng::with_seed(SEED);
    let input = random_input(&mut rng, 512);
    let calls: Vec<Call> = (0..64).map(|_| Call::random(&mut rng)).collect();

    c.bench_function("mixed_calls", |b| {
        b.iter(|| {
            let mut data = DataCursor::new(input.as_slice());
            calls.iter().map(|call| call.apply(&mut data)).count()
        });
    });
}

criterion_group!(benches, bench_integers, bench_floats, bench_strings, bench_mixed);
criterion_main!(benches);
