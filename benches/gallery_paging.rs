// SPDX-License-Identifier: MPL-2.0
use criterion::{criterion_group, criterion_main, Criterion};
use society_hub::domain::gallery::{CategoryFilter, GalleryBrowser, GalleryImage};
use std::hint::black_box;

fn collection(size: usize) -> Vec<GalleryImage> {
    let categories = ["Festivals", "Sports", "Maintenance", "Meetings"];
    (0..size)
        .map(|n| GalleryImage {
            id: format!("p{n:05}"),
            title: format!("Photo {n}"),
            category: categories[n % categories.len()].to_string(),
            date: "2026-01-15".to_string(),
            public_id: format!("society/p{n:05}"),
            url: String::new(),
            created_at: None,
        })
        .collect()
}

fn gallery_paging_benchmark(c: &mut Criterion) {
    let mut group = c.benchmark_group("gallery_paging");

    for size in [100, 1_000, 10_000] {
        let mut browser = GalleryBrowser::new();
        browser.begin_load(false);
        browser.finish_load(Ok(collection(size)), false);

        group.bench_function(format!("visible_page_{size}"), |b| {
            b.iter(|| {
                let _ = black_box(browser.visible_page());
            });
        });

        group.bench_function(format!("facet_switch_{size}"), |b| {
            b.iter(|| {
                browser.set_category(CategoryFilter::Named("Sports".to_string()));
                let _ = black_box(browser.visible_page());
                browser.set_category(CategoryFilter::All);
            });
        });

        group.bench_function(format!("categories_{size}"), |b| {
            b.iter(|| {
                let _ = black_box(browser.categories());
            });
        });
    }

    group.finish();
}

criterion_group!(benches, gallery_paging_benchmark);
criterion_main!(benches);
