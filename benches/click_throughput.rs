//! Click-processing throughput: an optimal 8-disk solve, by peg and by pixel.

use criterion::{black_box, criterion_group, criterion_main, Criterion};
use rust_hanoi::core::{PegId, PuzzleState};
use rust_hanoi::interaction::{BoardLayout, InteractionController, LayoutConfig, Point};

fn optimal_clicks(n: usize, from: PegId, to: PegId, via: PegId, out: &mut Vec<PegId>) {
    if n == 0 {
        return;
    }
    optimal_clicks(n - 1, from, via, to, out);
    out.push(from);
    out.push(to);
    optimal_clicks(n - 1, via, to, from, out);
}

fn bench_solve(c: &mut Criterion) {
    let mut clicks = Vec::new();
    optimal_clicks(8, PegId::LEFT, PegId::RIGHT, PegId::MIDDLE, &mut clicks);

    c.bench_function("solve_8_by_peg", |b| {
        b.iter(|| {
            let mut state = PuzzleState::with_disks(8).unwrap();
            for &peg in &clicks {
                black_box(state.on_peg_clicked(peg).unwrap());
            }
            assert!(state.is_solved());
        });
    });

    let layout = BoardLayout::new(LayoutConfig::default(), 8).unwrap();
    let points: Vec<Point> = clicks
        .iter()
        .map(|&peg| {
            let region = layout.peg_region(peg);
            Point::new(region.x + region.width / 2, region.y + region.height / 2)
        })
        .collect();
    let controller = InteractionController::new(layout);

    c.bench_function("solve_8_by_pixel", |b| {
        b.iter(|| {
            let mut state = PuzzleState::with_disks(8).unwrap();
            for &point in &points {
                black_box(controller.on_click(&mut state, point).unwrap());
            }
            assert!(state.is_solved());
        });
    });
}

criterion_group!(benches, bench_solve);
criterion_main!(benches);
