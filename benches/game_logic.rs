use criterion::{black_box, criterion_group, criterion_main, Criterion};
use treasure_quest::core::{Board, GameRng, GameState, TemplateSet};
use treasure_quest::term::{BoardView, FrameBuffer};
use treasure_quest::types::Direction;

fn bench_scatter(c: &mut Criterion) {
    let templates = TemplateSet::builtin();
    let mut rng = GameRng::seeded(12345);

    c.bench_function("scatter_template", |b| {
        b.iter(|| {
            let template = templates.choose(&mut rng);
            black_box(template.scatter(&mut rng).ok());
        })
    });
}

fn bench_generate_board(c: &mut Criterion) {
    let templates = TemplateSet::builtin();
    let mut rng = GameRng::seeded(12345);

    c.bench_function("generate_board", |b| {
        b.iter(|| {
            let template = templates.choose(&mut rng);
            black_box(Board::generate(template, &mut rng).ok());
        })
    });
}

fn bench_step(c: &mut Criterion) {
    let layout = concat!("x.....", "......", "......", "......", "O....O", ".....!");
    let board = Board::from_layout(layout).unwrap();
    let mut rng = GameRng::seeded(12345);
    let mut wager = |max: u32| max;

    c.bench_function("step_north_and_back", |b| {
        b.iter(|| {
            let mut state = GameState::new(board.clone(), 30);
            state.step(black_box(Direction::North), &mut rng, &mut wager).ok();
            state.step(black_box(Direction::South), &mut rng, &mut wager).ok();
        })
    });
}

fn bench_render(c: &mut Criterion) {
    let mut rng = GameRng::seeded(12345);
    let state = GameState::from_templates(&TemplateSet::builtin(), &mut rng, 30).unwrap();
    let snap = state.snapshot();
    let view = BoardView::default();
    let mut fb = FrameBuffer::new(0, 0);

    c.bench_function("render_board_view", |b| {
        b.iter(|| {
            view.render_into(black_box(&snap), &mut fb);
        })
    });
}

criterion_group!(
    benches,
    bench_scatter,
    bench_generate_board,
    bench_step,
    bench_render
);
criterion_main!(benches);
