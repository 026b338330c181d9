//! String algorithm benchmarks

use std::hint::black_box;

use criterion::{Criterion, criterion_group, criterion_main};
use ecma_values::{JsArray, JsString, Value};

fn csv_line(fields: usize) -> JsString {
    let arr: JsArray = (0..fields).map(|i| Value::from(format!("field{i}"))).collect();
    arr.join(Some(","))
}

fn bench_split(c: &mut Criterion) {
    let line = csv_line(500);

    c.bench_function("split_literal_500", |b| {
        b.iter(|| black_box(line.split(",", None)));
    });

    c.bench_function("split_units_limit_100", |b| {
        b.iter(|| black_box(line.split("", Some(100))));
    });

    #[cfg(feature = "regexp")]
    {
        let splitter = ecma_values::RegExpSplitter::new(",\\s*", "").ok();
        if let Some(splitter) = splitter {
            c.bench_function("split_regexp_500", |b| {
                b.iter(|| black_box(line.split(&splitter, None)));
            });
        }
    }
}

fn bench_search_and_pad(c: &mut Criterion) {
    let line = csv_line(500);

    c.bench_function("index_of_tail", |b| {
        b.iter(|| black_box(line.index_of("field499", None)));
    });

    c.bench_function("pad_start_4096", |b| {
        let s = JsString::from("abc");
        b.iter(|| black_box(s.pad_start(4096, "-=")));
    });
}

criterion_group!(benches, bench_split, bench_search_and_pad);
criterion_main!(benches);
