//! Benchmark tests for shelf layout operations.

use criterion::{black_box, criterion_group, criterion_main, Criterion};
use estante_core::{EdgeInsets, FixedHeight, Size};
use estante_layout::{ShelfConfig, ShelfDataSource, ShelfLayout};

/// Data source with uniform per-section counts.
struct UniformShelves {
    sections: usize,
    items: usize,
}

impl ShelfDataSource for UniformShelves {
    fn section_count(&self) -> usize {
        self.sections
    }

    fn item_count(&self, _section: usize) -> usize {
        self.items
    }
}

fn bench_config() -> ShelfConfig {
    ShelfConfig::new()
        .with_cell_size(Size::new(100.0, 100.0))
        .with_cell_inset(EdgeInsets::uniform(4.0))
        .with_section_header_height(30.0)
        .with_header(FixedHeight::new(44.0))
}

const BOUNDS: Size = Size::new(320.0, 480.0);

fn bench_full_layout(c: &mut Criterion) {
    let source = UniformShelves {
        sections: 20,
        items: 50,
    };

    c.bench_function("full_layout_20x50", |b| {
        let mut layout = ShelfLayout::new(bench_config());
        b.iter(|| {
            layout.prepare(black_box(&source), BOUNDS);
            black_box(layout.content_size())
        });
    });
}

fn bench_pan_invalidation(c: &mut Criterion) {
    let source = UniformShelves {
        sections: 20,
        items: 50,
    };

    c.bench_function("pan_invalidation_one_section", |b| {
        let mut layout = ShelfLayout::new(bench_config());
        layout.prepare(&source, BOUNDS);
        let mut offset = 0.0;
        b.iter(|| {
            offset += 1.0;
            layout.set_pan_offset(black_box(7), black_box(offset));
        });
    });
}

fn bench_visible_query(c: &mut Criterion) {
    let source = UniformShelves {
        sections: 20,
        items: 50,
    };

    c.bench_function("attributes_in_viewport", |b| {
        let mut layout = ShelfLayout::new(bench_config());
        layout.prepare(&source, BOUNDS);
        let viewport = estante_core::Rect::new(0.0, 400.0, 320.0, 480.0);
        b.iter(|| black_box(layout.attributes_in_rect(black_box(&viewport))).len());
    });
}

criterion_group!(
    benches,
    bench_full_layout,
    bench_pan_invalidation,
    bench_visible_query
);
criterion_main!(benches);
