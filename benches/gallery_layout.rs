// SPDX-License-Identifier: MPL-2.0
//! Benchmarks for per-frame gallery work.
//!
//! Measures the performance of:
//! - Building tile descriptions for a large grid
//! - Resolving the column layout for a viewport width
//! - Computing modal reveal frames during the entrance

use criterion::{criterion_group, criterion_main, Criterion};
use iced_folio::config::RevealTimings;
use iced_folio::gallery::GalleryItem;
use iced_folio::ui::{grid, modal};
use std::hint::black_box;
use std::path::PathBuf;
use std::time::{Duration, Instant};

fn sample_items(count: usize) -> Vec<GalleryItem> {
    (0..count)
        .map(|index| {
            GalleryItem::new(
                PathBuf::from(format!("/gallery/{index:04}.jpg")),
                format!("Photo {index}"),
                format!("Item {index}"),
            )
        })
        .collect()
}

/// Benchmark tile building, which runs on every view call.
fn bench_tiles(c: &mut Criterion) {
    let mut group = c.benchmark_group("gallery_layout");

    let mut state = grid::State::new(sample_items(500));
    let now = Instant::now();
    state.update(grid::Message::TileHovered(3), now);

    group.bench_function("tiles_500", |b| {
        b.iter(|| {
            black_box(state.tiles());
        });
    });

    group.bench_function("layout_for_width", |b| {
        b.iter(|| {
            for width in [320.0_f32, 640.0, 767.0, 768.0, 1920.0] {
                black_box(grid::layout_for_width(black_box(width)));
            }
        });
    });

    group.finish();
}

/// Benchmark reveal frame computation across a full entrance.
fn bench_reveal(c: &mut Criterion) {
    let mut group = c.benchmark_group("gallery_layout");
    let timings = RevealTimings::default();

    group.bench_function("reveal_frame_sweep", |b| {
        b.iter(|| {
            for millis in (0..=1000).step_by(16) {
                black_box(modal::RevealFrame::at(
                    Duration::from_millis(millis),
                    &timings,
                ));
            }
        });
    });

    group.finish();
}

criterion_group!(benches, bench_tiles, bench_reveal);
criterion_main!(benches);
