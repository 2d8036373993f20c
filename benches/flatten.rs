use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use jflat::{get_jpaths, get_jpaths_as_object, FlattenOptions};
use serde_json::{json, Value};

fn create_record_batch(count: usize) -> Value {
    let events: Vec<Value> = (0..count)
        .map(|i| {
            json!({
                "id": i,
                "user": format!("user{}", i % 50),
                "timestamp": 1600000000 + i,
                "payload": {
                    "level": if i % 3 == 0 { "info" } else if i % 3 == 1 { "warn" } else { "error" },
                    "ms": i * 2,
                },
            })
        })
        .collect();

    json!({"events": events, "source": "bench"})
}

fn create_deep_value(depth: usize) -> Value {
    let mut value = json!({"leaf": true});
    for i in 0..depth {
        value = json!({(format!("level{}", i)): value, "sibling": i});
    }
    value
}

fn bench_wide_batches(c: &mut Criterion) {
    let mut group = c.benchmark_group("wide_batches");

    for count in [100, 1000, 10000] {
        let batch = create_record_batch(count);
        let options = FlattenOptions {
            max_array_elements: count,
            max_depth: 4,
            ..FlattenOptions::default()
        };

        group.bench_with_input(
            BenchmarkId::from_parameter(format!("{}records", count)),
            &batch,
            |b, batch| {
                b.iter(|| black_box(get_jpaths(black_box(batch), &options)));
            },
        );
    }

    group.finish();
}

fn bench_depth_caps(c: &mut Criterion) {
    let mut group = c.benchmark_group("depth_caps");

    let deep = create_deep_value(64);
    for max_depth in [3, 16, 64] {
        let options = FlattenOptions {
            max_depth,
            ..FlattenOptions::default()
        };

        group.bench_with_input(
            BenchmarkId::from_parameter(format!("depth{}", max_depth)),
            &deep,
            |b, deep| {
                b.iter(|| black_box(get_jpaths(black_box(deep), &options)));
            },
        );
    }

    group.finish();
}

fn bench_filters(c: &mut Criterion) {
    let mut group = c.benchmark_group("filters");

    let batch = create_record_batch(1000);
    let unfiltered = FlattenOptions {
        max_array_elements: 1000,
        max_depth: 4,
        ..FlattenOptions::default()
    };
    let filtered = FlattenOptions {
        max_array_elements: 1000,
        max_depth: 4,
        ..FlattenOptions::default()
    }
    .with_include_patterns(["\\.user$", "\\.payload\\."])
    .unwrap()
    .with_exclude_patterns(["level"])
    .unwrap();

    group.bench_function("no_filters", |b| {
        b.iter(|| black_box(get_jpaths(black_box(&batch), &unfiltered)));
    });

    group.bench_function("include_and_exclude", |b| {
        b.iter(|| black_box(get_jpaths(black_box(&batch), &filtered)));
    });

    group.bench_function("projection", |b| {
        b.iter(|| black_box(get_jpaths_as_object(black_box(&batch), &unfiltered)));
    });

    group.finish();
}

criterion_group!(benches, bench_wide_batches, bench_depth_caps, bench_filters);
criterion_main!(benches);
