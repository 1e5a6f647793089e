use std::hint::black_box;
use std::time::Instant;

use cubefield_scene::SceneGroup;

fn bench_populate(count: usize, iterations: usize) {
    let start = Instant::now();
    for _ in 0..iterations {
        let group = SceneGroup::populate(black_box(count), 5.0, 200.0);
        black_box(group.cube_count());
    }
    let elapsed = start.elapsed();
    let per_iter = elapsed / iterations as u32;
    println!("  populate ({count} cubes, {iterations} iters): {per_iter:?}/iter, total {elapsed:?}");
}

fn bench_rotation_matrix(iterations: usize) {
    let mut group = SceneGroup::populate(1, 5.0, 200.0);
    let start = Instant::now();
    for _ in 0..iterations {
        group.rotate(0.005, 0.005);
        let _ = black_box(group.rotation_matrix());
    }
    let elapsed = start.elapsed();
    let per_iter = elapsed / iterations as u32;
    println!("  rotation matrix ({iterations} iters): {per_iter:?}/iter, total {elapsed:?}");
}

fn main() {
    println!("=== Scene Population Benchmarks ===\n");

    println!("Populate:");
    bench_populate(1_000, 100);
    bench_populate(10_000, 10);
    bench_populate(50_000, 5);

    println!("\nPer-frame group transform:");
    bench_rotation_matrix(100_000);

    println!("\n=== Done ===");
}
