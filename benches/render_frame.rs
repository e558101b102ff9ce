use criterion::{black_box, criterion_group, criterion_main, Criterion};
use click_chess::assets::AssetStore;
use click_chess::core::{BoardGeometry, Placement, RulesEngine, SelectionState};
use click_chess::engine::StandardRules;
use click_chess::term::{present_into, BoardRenderer, FrameBuffer, PixelFrame, Viewport};
use click_chess::types::BoardCoordinate;

fn shipped_renderer() -> BoardRenderer {
    let geometry = BoardGeometry::default();
    let dir = concat!(env!("CARGO_MANIFEST_DIR"), "/assets/sprites");
    let assets = AssetStore::load(dir, geometry.square_px()).expect("shipped sprites load");
    BoardRenderer::new(assets, geometry)
}

fn bench_render(c: &mut Criterion) {
    let renderer = shipped_renderer();
    let board = Placement::standard();
    let mut frame = PixelFrame::new(512, 512);

    c.bench_function("render_standard_position", |b| {
        b.iter(|| {
            renderer.render(&mut frame, black_box(&board), &[], SelectionState::Empty);
        })
    });
}

fn bench_render_with_highlights(c: &mut Criterion) {
    let renderer = shipped_renderer();
    let rules = StandardRules::new();
    let knight = BoardCoordinate::new(7, 1).expect("on board");
    let destinations = rules.valid_moves(knight);
    let mut frame = PixelFrame::new(512, 512);

    c.bench_function("render_with_highlights", |b| {
        b.iter(|| {
            renderer.render(
                &mut frame,
                black_box(&rules),
                &destinations,
                SelectionState::OneSquareSelected(knight),
            );
        })
    });
}

fn bench_present(c: &mut Criterion) {
    let renderer = shipped_renderer();
    let mut frame = PixelFrame::new(512, 512);
    renderer.render(&mut frame, &Placement::standard(), &[], SelectionState::Empty);
    let mut fb = FrameBuffer::new(0, 0);

    c.bench_function("present_160x50", |b| {
        b.iter(|| {
            present_into(black_box(&frame), 512, "white to move", Viewport::new(160, 50), &mut fb);
        })
    });
}

criterion_group!(benches, bench_render, bench_render_with_highlights, bench_present);
criterion_main!(benches);
