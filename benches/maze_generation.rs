use criterion::{Criterion, black_box, criterion_group, criterion_main};
use rand::SeedableRng;
use rand::rngs::StdRng;

use kube_game::core::connectivity::is_reachable;
use kube_game::core::die::Direction;
use kube_game::core::level::Level;
use kube_game::core::maze::generate;
use kube_game::core::player::Pos;
use kube_game::core::size::LevelSize;

fn corner(size: LevelSize) -> Pos {
    Pos::new(size.width() as i32 - 1, size.height() as i32 - 1)
}

fn bench_generate_default(c: &mut Criterion) {
    let size = LevelSize::default();
    let mut rng = StdRng::seed_from_u64(12345);

    c.bench_function("generate_15x10", |b| {
        b.iter(|| generate(black_box(size), corner(size), &mut rng))
    });
}

fn bench_generate_largest(c: &mut Criterion) {
    let size = LevelSize::new(50, 40).unwrap();
    let mut rng = StdRng::seed_from_u64(12345);

    c.bench_function("generate_50x40", |b| {
        b.iter(|| generate(black_box(size), corner(size), &mut rng))
    });
}

fn bench_reachability(c: &mut Criterion) {
    let size = LevelSize::new(50, 40).unwrap();
    let grid = generate(size, corner(size), &mut StdRng::seed_from_u64(7));

    c.bench_function("bfs_50x40", |b| {
        b.iter(|| is_reachable(black_box(&grid), Pos::new(0, 0), corner(size)))
    });
}

fn bench_try_move(c: &mut Criterion) {
    let mut level = Level::classic(&mut StdRng::seed_from_u64(12345));
    let mut dir = Direction::Right;

    c.bench_function("try_move", |b| {
        b.iter(|| {
            level.try_move(black_box(dir));
            dir = dir.opposite();
        })
    });
}

criterion_group!(
    benches,
    bench_generate_default,
    bench_generate_largest,
    bench_reachability,
    bench_try_move
);
criterion_main!(benches);
