use glam::I64Vec3;

use aoc2025_day_8::kdtree::KdTree;
use aoc2025_day_8::solver::Solver;

fn main() {
    divan::main();
}

/// Deterministic xorshift point cloud, no input file needed.
fn point_cloud(count: usize) -> Vec<I64Vec3> {
    let mut state = 0x2545f4914f6cdd1d_u64;
    let mut next = move || {
        state ^= state << 13;
        state ^= state >> 7;
        state ^= state << 17;
        (state % 4096) as i64
    };
    (0..count)
        .map(|_| I64Vec3::new(next(), next(), next()))
        .collect()
}

#[divan::bench]
fn build_tree(bencher: divan::Bencher) {
    let points = point_cloud(2000);
    bencher.bench(|| KdTree::new(points.clone()));
}

#[divan::bench]
fn nearest_neighbor_queries(bencher: divan::Bencher) {
    let points = point_cloud(2000);
    let tree = KdTree::new(points);
    bencher.bench(|| {
        (0..2000)
            .filter_map(|idx| tree.closest_point(idx, |_| true))
            .sum::<usize>()
    });
}

#[divan::bench]
fn solve_budget_500(bencher: divan::Bencher) {
    let points = point_cloud(600);
    bencher.bench(|| {
        let mut solver = Solver::new(points.clone());
        solver.solve(Some(500));
        solver.circuit_sizes()
    });
}
