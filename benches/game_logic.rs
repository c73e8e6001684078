use criterion::{black_box, criterion_group, criterion_main, Criterion};
use tui_snake::core::{GridGeometry, NullRenderer, Snake};
use tui_snake::engine::GameLoop;
use tui_snake::types::{Cell, Direction};

fn bench_tick(c: &mut Criterion) {
    let mut game = GameLoop::new(GridGeometry::default(), 12345);

    c.bench_function("game_tick", |b| {
        b.iter(|| {
            if game.score().is_game_over() {
                game.restart();
            }
            black_box(game.tick(&mut NullRenderer));
        })
    });
}

fn bench_move_step(c: &mut Criterion) {
    let mut snake = Snake::new(GridGeometry::default());

    c.bench_function("snake_move_step", |b| {
        b.iter(|| {
            snake.move_step();
        })
    });
}

fn bench_hit_itself(c: &mut Criterion) {
    // A long straight snake: the worst case with no repeat.
    let geometry = GridGeometry::default();
    let cells = (0..geometry.width()).map(|x| Cell::new(x, 5));
    let snake = Snake::with_body(cells, Direction::Right, geometry).unwrap();

    c.bench_function("snake_hit_itself_32", |b| {
        b.iter(|| black_box(&snake).hit_itself())
    });
}

criterion_group!(benches, bench_tick, bench_move_step, bench_hit_itself);
criterion_main!(benches);
