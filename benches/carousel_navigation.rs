// SPDX-License-Identifier: MPL-2.0
//! Benchmarks for the page's per-frame state updates.
//!
//! Measures the performance of:
//! - Gallery navigation (next/previous/jump)
//! - Section tracking while scrolling through the whole page

use criterion::{criterion_group, criterion_main, Criterion};
use std::hint::black_box;
use yadadri360::carousel::GalleryNavigator;
use yadadri360::domain::ui::VisibilityThreshold;
use yadadri360::ui::layout::PageLayout;
use yadadri360::visibility::{SectionTracker, Span};

/// Benchmark gallery navigation without rendering.
fn bench_gallery_navigation(c: &mut Criterion) {
    let mut group = c.benchmark_group("carousel_navigation");

    group.bench_function("gallery_next_previous", |b| {
        let mut gallery = GalleryNavigator::new(9);
        b.iter(|| {
            gallery.next();
            gallery.next();
            gallery.previous();
            black_box(gallery.current());
        });
    });

    group.bench_function("gallery_jump", |b| {
        let mut gallery = GalleryNavigator::new(9);
        let mut target = 0;
        b.iter(|| {
            target = (target + 4) % 9;
            gallery.jump_to(target);
            black_box(gallery.thumbnails());
        });
    });

    group.finish();
}

/// Benchmark a full top-to-bottom scroll in 40px steps.
fn bench_section_tracking(c: &mut Criterion) {
    let mut group = c.benchmark_group("section_tracking");

    for (name, width) in [("desktop", 1280.0), ("compact", 420.0)] {
        let layout = PageLayout::for_width(width);
        group.bench_function(format!("scroll_page_{name}"), |b| {
            b.iter(|| {
                let mut tracker = SectionTracker::new();
                tracker.observe(layout.regions(), VisibilityThreshold::default());
                let mut offset = 0.0;
                while offset < layout.content_height() {
                    black_box(tracker.on_viewport(layout.viewport(offset, 800.0)));
                    offset += 40.0;
                }
                black_box(tracker.active_section());
            });
        });
    }

    group.finish();
}

criterion_group!(benches, bench_gallery_navigation, bench_section_tracking);
criterion_main!(benches);
