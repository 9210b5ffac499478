//! Criterion benchmarks for the full-redraw path
//!
//! Every mutation in the lab regenerates the whole canvas, so these cover:
//! - Renderer: compositing the full animal
//! - Shapes: row spans, and traits far larger than the canvas
//! - Session: a click that triggers a redraw

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use genelab::catalog::default_body;
use genelab::color::WHITE;
use genelab::config::LabConfig;
use genelab::lab::Lab;
use genelab::models::{Shape, Trait};
use genelab::renderer::{draw_trait, flatten, render_animal, DEFAULT_CANVAS_SIZE};
use genelab::shapes::{ellipse_span, rasterize_polygon};
use genelab::ui::Session;
use image::RgbaImage;

fn full_lab() -> Lab {
    let mut lab = Lab::default();
    for name in ["Wings", "Tail", "Ears"] {
        lab.add_by_name(name);
    }
    lab
}

fn bench_render(c: &mut Criterion) {
    let mut group = c.benchmark_group("render");
    let lab = full_lab();

    for size in [200u32, DEFAULT_CANVAS_SIZE, 800] {
        group.bench_with_input(BenchmarkId::new("render_animal", size), &size, |b, &size| {
            b.iter(|| render_animal(black_box(lab.animal()), size, size))
        });
    }

    let image = render_animal(lab.animal(), DEFAULT_CANVAS_SIZE, DEFAULT_CANVAS_SIZE);
    group.bench_function("flatten", |b| b.iter(|| flatten(black_box(&image), WHITE)));
    group.finish();
}

fn bench_shapes(c: &mut Criterion) {
    let mut group = c.benchmark_group("shapes");
    let bounds = default_body().bounds();

    group.bench_function("ellipse_body_rows", |b| {
        b.iter(|| {
            (bounds.1..=bounds.3)
                .filter_map(|y| ellipse_span(black_box(bounds), y))
                .count()
        })
    });
    group.bench_function("huge_oval_clipped", |b| {
        let huge = Trait::new("Moon", Shape::Oval, WHITE, (60_000, 60_000), (-30_000, -30_000));
        let mut canvas = RgbaImage::new(DEFAULT_CANVAS_SIZE, DEFAULT_CANVAS_SIZE);
        b.iter(|| draw_trait(black_box(&mut canvas), black_box(&huge)))
    });
    group.bench_function("triangle_ears", |b| {
        b.iter(|| rasterize_polygon(black_box(&[(140, 100), (120, 140), (160, 140)])))
    });
    group.finish();
}

fn bench_session(c: &mut Criterion) {
    let config = LabConfig::default();

    c.bench_function("session_add_click_and_paint", |b| {
        b.iter(|| {
            let mut session = Session::from_config(&config);
            let add = session.layout().add_button;
            session.click(add.x + 1, add.y + 1);
            let layout = session.layout();
            let mut frame = RgbaImage::new(layout.width as u32, layout.height as u32);
            session.paint(&mut frame);
            black_box(frame)
        })
    });
}

criterion_group!(benches, bench_render, bench_shapes, bench_session);
criterion_main!(benches);
