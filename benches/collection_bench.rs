//! Benchmarks for traversal, search and sorting over dynamic values.
//!
//! Compares the identity fast path against callable and property iteratees,
//! and linear against binary search.

use criterion::{BenchmarkId, Criterion, criterion_group, criterion_main};
use std::hint::black_box;
use underbar::collection::{filter, map, sort_by, uniq};
use underbar::iteratee::IterateeSpec;
use underbar::search::{SearchMode, index_of, sorted_index};
use underbar::value::Value;
use underbar::object;

fn numbers(size: i32) -> Value {
    (0..size).collect()
}

fn records(size: i32) -> Value {
    (0..size).map(|index| object! { "id" => index, "score" => (index * 7919) % 1000 }).collect()
}

// =============================================================================
// map
// =============================================================================

fn benchmark_map(criterion: &mut Criterion) {
    let mut group = criterion.benchmark_group("map");

    for size in [100, 1000, 10000] {
        let collection = numbers(size);
        let people = records(size);

        group.bench_with_input(BenchmarkId::new("identity", size), &collection, |bencher, collection| {
            bencher.iter(|| black_box(map(collection, IterateeSpec::Identity)));
        });

        group.bench_with_input(BenchmarkId::new("callable", size), &collection, |bencher, collection| {
            let double = IterateeSpec::unary(|value| Value::from(value.to_number() * 2.0));
            bencher.iter(|| black_box(map(collection, double.clone())));
        });

        group.bench_with_input(BenchmarkId::new("property", size), &people, |bencher, people| {
            bencher.iter(|| black_box(map(people, "score")));
        });
    }

    group.finish();
}

// =============================================================================
// filter
// =============================================================================

fn benchmark_filter(criterion: &mut Criterion) {
    let mut group = criterion.benchmark_group("filter");

    for size in [100, 1000, 10000] {
        let people = records(size);

        group.bench_with_input(BenchmarkId::new("matcher", size), &people, |bencher, people| {
            bencher.iter(|| black_box(filter(people, object! { "score" => 500 })));
        });
    }

    group.finish();
}

// =============================================================================
// Search
// =============================================================================

fn benchmark_search(criterion: &mut Criterion) {
    let mut group = criterion.benchmark_group("index_of");

    for size in [100, 1000, 10000] {
        let collection = numbers(size);
        let target = Value::from(size - 1);

        group.bench_with_input(BenchmarkId::new("linear", size), &collection, |bencher, collection| {
            bencher.iter(|| black_box(index_of(collection, &target, SearchMode::Default)));
        });

        group.bench_with_input(BenchmarkId::new("sorted", size), &collection, |bencher, collection| {
            bencher.iter(|| black_box(index_of(collection, &target, SearchMode::AssumeSorted)));
        });

        group.bench_with_input(BenchmarkId::new("sorted_index", size), &collection, |bencher, collection| {
            bencher.iter(|| black_box(sorted_index(collection, &target, IterateeSpec::Identity)));
        });
    }

    group.finish();
}

// =============================================================================
// Sorting and deduplication
// =============================================================================

fn benchmark_sort(criterion: &mut Criterion) {
    let mut group = criterion.benchmark_group("sort");

    for size in [100, 1000, 10000] {
        let people = records(size);
        let scores = Value::array(map(&people, "score"));

        group.bench_with_input(BenchmarkId::new("sort_by_property", size), &people, |bencher, people| {
            bencher.iter(|| black_box(sort_by(people, "score")));
        });

        group.bench_with_input(BenchmarkId::new("uniq_unsorted", size), &scores, |bencher, scores| {
            bencher.iter(|| black_box(uniq(scores, false, IterateeSpec::Identity)));
        });
    }

    group.finish();
}

criterion_group!(
    benches,
    benchmark_map,
    benchmark_filter,
    benchmark_search,
    benchmark_sort
);
criterion_main!(benches);
