use std::hint::black_box;

use criterion::{criterion_group, criterion_main, Criterion};
use hydrogrid_foundation::viewport::{ResizeEvents, Viewport};
use hydrogrid_testing::sample_projects;
use hydrogrid_ui::{ProjectGrid, ProjectGridSpec};

fn window_bench(c: &mut Criterion) {
    let events = ResizeEvents::new();
    let grid = ProjectGrid::new(sample_projects(3000), "stp", ProjectGridSpec::default())
        .attach(&events, Viewport::new(1280.0, 720.0));

    c.bench_function("window_3k_items_scrolling", |b| {
        let mut row = 0;
        b.iter(|| {
            grid.scroll_to_row(row % 1000);
            row += 7;
            black_box(grid.window())
        })
    });

    c.bench_function("window_3k_items_at_rest", |b| {
        grid.scroll_to_row(0);
        b.iter(|| black_box(grid.window()))
    });
}

criterion_group!(benches, window_bench);
criterion_main!(benches);
