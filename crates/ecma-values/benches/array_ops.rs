//! Array algorithm benchmarks
//!
//! Default vs custom comparator sorting and splice shifting.

use std::hint::black_box;

use criterion::{Criterion, criterion_group, criterion_main};
use ecma_values::{JsArray, Value};

fn shuffled(len: u32) -> JsArray {
    // Deterministic scramble so runs are comparable
    (0..len).map(|i| Value::from(i.wrapping_mul(2_654_435_761) % len)).collect()
}

fn bench_sort(c: &mut Criterion) {
    c.bench_function("sort_default_1000", |b| {
        b.iter(|| {
            let arr = shuffled(1000);
            arr.sort().ok();
            black_box(arr)
        });
    });

    c.bench_function("sort_numeric_1000", |b| {
        b.iter(|| {
            let arr = shuffled(1000);
            arr.sort_by(|a, b| {
                let a = a.as_number().unwrap_or(0.0);
                let b = b.as_number().unwrap_or(0.0);
                a.total_cmp(&b)
            })
            .ok();
            black_box(arr)
        });
    });
}

fn bench_splice(c: &mut Criterion) {
    c.bench_function("splice_front_insert_1000", |b| {
        let items = [Value::from("x"), Value::from("y")];
        b.iter(|| {
            let arr = shuffled(1000);
            for _ in 0..100 {
                arr.splice(0, 1, &items).ok();
            }
            black_box(arr)
        });
    });

    c.bench_function("copy_within_overlap_1000", |b| {
        let arr = shuffled(1000);
        b.iter(|| {
            arr.copy_within(1, 0, -1).ok();
            black_box(&arr);
        });
    });
}

criterion_group!(benches, bench_sort, bench_splice);
criterion_main!(benches);
