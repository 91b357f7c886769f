//! Duplicate-detection benchmarks

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use packmate_core::deduplication::{
    find_potential_duplicates, group_similar_items, levenshtein, DEFAULT_EDIT_DISTANCE,
    DEFAULT_GROUPING_THRESHOLD,
};
use packmate_domain::PackingItem;

fn generate_items(count: usize) -> Vec<PackingItem> {
    let base = [
        "Hiking Boots",
        "Rain Jacket",
        "Sunscreen SPF 50",
        "Wool Socks",
        "Travel Towel",
        "First Aid Kit",
        "Water Bottle",
        "Tent Pegs",
    ];
    (0..count)
        .map(|i| PackingItem::new(&format!("{} {}", base[i % base.len()], i / base.len())))
        .collect()
}

fn bench_levenshtein(c: &mut Criterion) {
    c.bench_function("levenshtein_short_names", |b| {
        b.iter(|| levenshtein(black_box("hiking boots"), black_box("hiking boot")))
    });
}

fn bench_find_potential_duplicates(c: &mut Criterion) {
    let mut group = c.benchmark_group("find_potential_duplicates");
    for size in [10, 100, 250] {
        let items = generate_items(size);
        group.bench_with_input(BenchmarkId::from_parameter(size), &items, |b, items| {
            b.iter(|| {
                find_potential_duplicates(
                    black_box(items),
                    black_box("Hiking Boot"),
                    DEFAULT_EDIT_DISTANCE,
                )
            })
        });
    }
    group.finish();
}

fn bench_group_similar_items(c: &mut Criterion) {
    let mut group = c.benchmark_group("group_similar_items");
    for size in [10, 100, 250] {
        let items = generate_items(size);
        group.bench_with_input(BenchmarkId::from_parameter(size), &items, |b, items| {
            b.iter(|| group_similar_items(black_box(items), DEFAULT_GROUPING_THRESHOLD).unwrap())
        });
    }
    group.finish();
}

criterion_group!(
    benches,
    bench_levenshtein,
    bench_find_potential_duplicates,
    bench_group_similar_items
);
criterion_main!(benches);
