//! 图库分类过滤性能基准测试

use criterion::{BenchmarkId, Criterion, criterion_group, criterion_main};
use emasmetal::models::GalleryItem;
use emasmetal::services::{GALLERY_CATEGORIES, filter_by_category};
use std::hint::black_box;

fn items(count: usize) -> Vec<GalleryItem> {
    (0..count)
        .map(|i| GalleryItem {
            id: i.to_string(),
            title: format!("Item {}", i),
            category: Some(GALLERY_CATEGORIES[1 + i % 4].to_string()),
            image_url: Some(format!("/uploads/{}.jpg", i)),
            description: None,
            created_at: None,
        })
        .collect()
}

fn bench_filter_by_category(c: &mut Criterion) {
    let mut group = c.benchmark_group("gallery/filter_by_category");

    for size in [6usize, 100, 1000] {
        let data = items(size);

        group.bench_with_input(BenchmarkId::new("all", size), &data, |b, data| {
            b.iter(|| filter_by_category(black_box(data), "All").len());
        });

        group.bench_with_input(BenchmarkId::new("milling", size), &data, |b, data| {
            b.iter(|| filter_by_category(black_box(data), "Milling").len());
        });

        group.bench_with_input(BenchmarkId::new("absent", size), &data, |b, data| {
            b.iter(|| filter_by_category(black_box(data), "Welding").len());
        });
    }

    group.finish();
}

criterion_group!(benches, bench_filter_by_category);
criterion_main!(benches);
