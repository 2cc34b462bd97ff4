//! Estimation benchmarks over generated HTML documents.
//!
//! Run with: `cargo bench --package readtime-bench`

use criterion::{BenchmarkId, Criterion, Throughput, criterion_group, criterion_main};
use readtime_bench::{benchmark_configs, generate_html, generate_pieces};
use readtime_lib::{ReadTime, count_words, strip_tags};
use std::hint::black_box;

fn estimate_benchmark(c: &mut Criterion) {
    let mut group = c.benchmark_group("estimate");

    for config in benchmark_configs() {
        let html = generate_html(&config);
        group.throughput(Throughput::Bytes(html.len() as u64));

        group.bench_with_input(BenchmarkId::new("new_and_render", config.name), &html, |b, html| {
            b.iter(|| {
                let read_time = ReadTime::new(black_box(html.as_str()))
                    .abbreviated(true)
                    .omit_seconds(false);
                black_box(read_time.render())
            });
        });

        let pieces = generate_pieces(&config);
        group.bench_with_input(BenchmarkId::new("sequence", config.name), &pieces, |b, pieces| {
            b.iter(|| black_box(ReadTime::new(black_box(pieces.clone())).word_count()));
        });
    }

    group.finish();
}

fn normalize_benchmark(c: &mut Criterion) {
    let mut group = c.benchmark_group("normalize");

    for config in benchmark_configs() {
        let html = generate_html(&config);
        let text = strip_tags(&html);
        group.throughput(Throughput::Bytes(html.len() as u64));

        group.bench_with_input(BenchmarkId::new("strip_tags", config.name), &html, |b, html| {
            b.iter(|| black_box(strip_tags(black_box(html))));
        });

        group.bench_with_input(BenchmarkId::new("count_words", config.name), &text, |b, text| {
            b.iter(|| black_box(count_words(black_box(text))));
        });
    }

    group.finish();
}

fn render_benchmark(c: &mut Criterion) {
    let read_time = ReadTime::new(generate_html(&benchmark_configs()[1])).omit_seconds(false);

    c.bench_function("render_rtl", |b| {
        let rtl = read_time.clone().rtl(true);
        b.iter(|| black_box(rtl.render()));
    });
    c.bench_function("to_json", |b| {
        b.iter(|| black_box(read_time.to_json()));
    });
}

criterion_group!(
    benches,
    estimate_benchmark,
    normalize_benchmark,
    render_benchmark
);
criterion_main!(benches);
