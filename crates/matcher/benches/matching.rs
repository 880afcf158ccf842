//! Benchmarks for matcher crate scoring and ranking.

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use quickfind_matcher::{is_subsequence_match, rank_candidates, score_match};

fn create_test_corpus(count: usize) -> Vec<String> {
    let stems = [
        "foo_bar_baz",
        "getTextContent",
        "set_window_title",
        "openFileDialog",
        "parse_config_entry",
        "renderFrameBuffer",
    ];
    (0..count)
        .map(|i| format!("{}_{}", stems[i % stems.len()], i))
        .collect()
}

fn bench_single_calls(c: &mut Criterion) {
    c.bench_function("subsequence_single", |b| {
        b.iter(|| is_subsequence_match(black_box("gtc"), black_box("getTextContent")))
    });

    c.bench_function("score_single", |b| {
        b.iter(|| score_match(black_box("gtc"), black_box("getTextContent")))
    });

    c.bench_function("score_single_miss", |b| {
        b.iter(|| score_match(black_box("zzz"), black_box("getTextContent")))
    });
}

fn bench_rank_corpus(c: &mut Criterion) {
    let mut group = c.benchmark_group("rank_corpus");

    for size in [100, 1000, 10000].iter() {
        let corpus = create_test_corpus(*size);

        group.bench_with_input(BenchmarkId::new("rank", size), size, |b, _| {
            b.iter(|| rank_candidates(black_box("fbb"), black_box(&corpus)))
        });
    }

    group.finish();
}

criterion_group!(benches, bench_single_calls, bench_rank_corpus);
criterion_main!(benches);
