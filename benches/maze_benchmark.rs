use env_logger::Env;

use criterion::{black_box, criterion_group, criterion_main, Criterion};

use maze_pathfinding::prelude::*;
use nanorand::{Rng, WyRand};

/// A maze where every pixel is a wall with a chance of `wall_percent`
fn random_maze(width: usize, height: usize, wall_percent: u32) -> TileGrid {
    let mut rng = WyRand::new_seed(4);
    let mut grid = TileGrid::open(width, height).unwrap();
    for y in 0..height {
        for x in 0..width {
            if rng.generate_range(0u32..100) < wall_percent {
                grid.set_tile((x, y), Tile::Wall);
            }
        }
    }
    grid.set_tile((0, 0), Tile::Entry);
    grid.set_tile((width - 1, height - 1), Tile::Exit);
    grid
}

/// Horizontal walls on every other row, with the gap alternating between the left and right
/// edge, so the only Path visits every row
fn serpentine_maze(width: usize, height: usize) -> TileGrid {
    let mut grid = TileGrid::open(width, height).unwrap();
    for y in (1..height).step_by(2) {
        let gap = if y % 4 == 1 { width - 1 } else { 0 };
        for x in (0..width).filter(|&x| x != gap) {
            grid.set_tile((x, y), Tile::Wall);
        }
    }
    grid.set_tile((0, 0), Tile::Entry);
    grid.set_tile((0, height - 1), Tile::Exit);
    grid
}

#[allow(unused)]
// Setup logging output
fn init() {
    let env = Env::default()
        .filter_or("MAZE_LOG", "info") // Change this to debug to see the result of every search.
        .write_style_or("MAZE_LOG_STYLE", "always");

    let _ = env_logger::Builder::from_env(env).is_test(true).try_init();
}

fn bench_build_graph(c: &mut Criterion) {
    let mut group = c.benchmark_group("Build Graph");
    group.sample_size(10);

    init();

    for size in [128, 1024] {
        let grid = random_maze(size, size, 25);

        let id = format!("Random maze, Single Threaded, Size: ({}, {})", size, size);
        group.bench_function(&id, |b| b.iter(|| Graph::build(black_box(&grid))));

        #[cfg(feature = "parallel")]
        {
            let id = format!("Random maze, Parallel, Size: ({}, {})", size, size);
            group.bench_function(&id, |b| {
                b.iter(|| Graph::build_parallel(black_box(&grid)))
            });
        }
    }
}

fn bench_search(c: &mut Criterion) {
    let mut group = c.benchmark_group("Dijkstra Search");
    group.sample_size(10);

    init();

    let config = SearchConfig::default();
    let size = 512;

    let mut open = TileGrid::open(size, size).unwrap();
    open.set_tile((0, 0), Tile::Entry);
    open.set_tile((size - 1, size - 1), Tile::Exit);

    let mazes = [
        ("Open", open),
        ("Random", random_maze(size, size, 25)),
        ("Serpentine", serpentine_maze(size, size)),
    ];

    for (name, grid) in mazes {
        let graph = Graph::build(&grid).unwrap();
        let id = format!("{} maze, Size: ({}, {})", name, size, size);
        group.bench_function(&id, |b| {
            b.iter(|| dijkstra_search(black_box(&graph), &config))
        });
    }
}

criterion_group!(benches, bench_build_graph, bench_search);
criterion_main!(benches);
