//! Benchmarks for timeline recording and replay lookup
//!
//! Run with: cargo bench

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use rewind_rs::{Exact, Recorder, Timeline, Tolerance};

fn bench_record(c: &mut Criterion) {
    let mut group = c.benchmark_group("record");

    for capacity in [1000usize, 10_000, 100_000].iter() {
        group.throughput(Throughput::Elements(1));
        group.bench_with_input(
            BenchmarkId::new("bounded", capacity),
            capacity,
            |b, &capacity| {
                let mut timeline = Timeline::new(capacity, Tolerance(0.0f32));
                let mut i = 0u64;
                b.iter(|| {
                    timeline.record(black_box(i as f64 * 0.01), black_box(i as f32));
                    i = i.wrapping_add(1);
                });
            },
        );
    }

    group.finish();
}

fn bench_record_suppressed(c: &mut Criterion) {
    let mut group = c.benchmark_group("record_suppressed");
    group.throughput(Throughput::Elements(1));

    // A slowly drifting signal under a wide tolerance: most samples are
    // suppressed, so this measures the similarity check itself
    group.bench_function("wide_tolerance", |b| {
        let mut timeline = Timeline::new(10_000, Tolerance(10.0f32));
        let mut i = 0u64;
        b.iter(|| {
            let value = (i as f32 * 0.001).sin();
            timeline.record(black_box(i as f64 * 0.01), black_box(value));
            i = i.wrapping_add(1);
        });
    });

    group.finish();
}

fn bench_replay_lookup(c: &mut Criterion) {
    let mut group = c.benchmark_group("replay_lookup");

    for size in [1000usize, 10_000, 100_000].iter() {
        let mut timeline = Timeline::new(0, Exact);
        for i in 0..*size {
            timeline.record(i as f64 * 0.01, i as f32);
        }
        let span = *size as f64 * 0.01;

        group.throughput(Throughput::Elements(1));
        group.bench_with_input(BenchmarkId::new("value_at", size), &timeline, |b, timeline| {
            let mut query = 0.0f64;
            b.iter(|| {
                let value = timeline.value_at(black_box(query));
                query = (query + 0.37) % span;
                black_box(value)
            });
        });
    }

    group.finish();
}

fn bench_replay_delivery(c: &mut Criterion) {
    let mut group = c.benchmark_group("replay_delivery");
    group.throughput(Throughput::Elements(1));

    // Full recorder path including the change-suppression cursor
    group.bench_function("recorder", |b| {
        let mut recorder = Recorder::new(10_000, Tolerance(0.0f32), 0.0f32);
        for i in 0..10_000 {
            recorder.record_value(i as f64 * 0.01, i as f32);
        }
        let mut query = 0.0f64;
        b.iter(|| {
            let delivered = recorder.replay_value(black_box(query));
            query = (query + 0.37) % 100.0;
            black_box(delivered)
        });
    });

    group.finish();
}

criterion_group!(
    benches,
    bench_record,
    bench_record_suppressed,
    bench_replay_lookup,
    bench_replay_delivery
);
criterion_main!(benches);
