use glam::I64Vec3;

/// Maximum number of points a node may hold before it is subdivided.
pub const DEFAULT_LEAF_SIZE: usize = 10;

const NO_CHILD: usize = usize::MAX;

#[derive(Debug)]
struct Node {
    split_dim: usize,
    split_value: i64,
    left: usize,
    right: usize,
    start: usize,
    len: usize,
}

impl Default for Node {
    fn default() -> Self {
        Self {
            split_dim: 0,
            split_value: 0,
            left: NO_CHILD,
            right: NO_CHILD,
            start: 0,
            len: 0,
        }
    }
}

/// Static 3D point index supporting nearest-neighbor queries with a
/// caller-supplied admissibility predicate.
///
/// Built once from a fixed point set; nodes partition a permutation array
/// of point indices, splitting each range at its median along the axis of
/// largest extent. Never mutated after construction — admissibility changes
/// happen entirely in the filter passed at query time.
#[derive(Debug)]
pub struct KdTree {
    points: Vec<I64Vec3>,
    indices: Vec<usize>,
    nodes: Vec<Node>,
}

impl KdTree {
    pub fn new(points: Vec<I64Vec3>) -> Self {
        Self::with_leaf_size(points, DEFAULT_LEAF_SIZE)
    }

    pub fn with_leaf_size(points: Vec<I64Vec3>, leaf_size: usize) -> Self {
        let indices = (0..points.len()).collect();
        let mut tree = Self {
            points,
            indices,
            nodes: vec![Node::default()],
        };
        let count = tree.points.len();
        tree.build(0, 0, count, leaf_size.max(1));
        tree
    }

    pub fn points(&self) -> &[I64Vec3] {
        &self.points
    }

    /// Returns the index of the nearest point to `query_idx` (excluding the
    /// query point itself) for which `filter` returns true, or `None` when
    /// every candidate is rejected.
    pub fn closest_point<F>(&self, query_idx: usize, filter: F) -> Option<usize>
    where
        F: Fn(usize) -> bool,
    {
        let query = self.points[query_idx];
        let mut best = None;
        let mut best_dist = i64::MAX;
        self.search(0, query_idx, query, &filter, &mut best, &mut best_dist);
        best
    }

    fn search<F>(
        &self,
        node_idx: usize,
        query_idx: usize,
        query: I64Vec3,
        filter: &F,
        best: &mut Option<usize>,
        best_dist: &mut i64,
    ) where
        F: Fn(usize) -> bool,
    {
        let node = &self.nodes[node_idx];

        if node.left == NO_CHILD {
            for &candidate in &self.indices[node.start..node.start + node.len] {
                if candidate == query_idx || !filter(candidate) {
                    continue;
                }
                let dist = query.distance_squared(self.points[candidate]);
                if dist < *best_dist {
                    *best_dist = dist;
                    *best = Some(candidate);
                }
            }
            return;
        }

        let diff = query[node.split_dim] - node.split_value;
        let (near, far) = if diff <= 0 {
            (node.left, node.right)
        } else {
            (node.right, node.left)
        };

        self.search(near, query_idx, query, filter, best, best_dist);
        // The far subtree can only hold a closer point if the ball around
        // the current best crosses the split plane.
        if diff * diff <= *best_dist {
            self.search(far, query_idx, query, filter, best, best_dist);
        }
    }

    fn build(&mut self, node_idx: usize, start: usize, len: usize, leaf_size: usize) {
        if len == 0 {
            return;
        }

        let points = &self.points;
        let slice = &mut self.indices[start..start + len];

        let mut min = I64Vec3::MAX;
        let mut max = I64Vec3::MIN;
        for &idx in slice.iter() {
            min = min.min(points[idx]);
            max = max.max(points[idx]);
        }
        let extents = max - min;
        let split_dim = (0..3).max_by_key(|&dim| extents[dim]).unwrap_or(0);

        // Median split via linear-time selection, not a full sort.
        let mid = len / 2;
        slice.select_nth_unstable_by_key(mid, |&idx| points[idx][split_dim]);
        let split_value = points[slice[mid]][split_dim];

        {
            let node = &mut self.nodes[node_idx];
            node.start = start;
            node.len = len;
            node.split_dim = split_dim;
            node.split_value = split_value;
        }

        if len <= leaf_size {
            return;
        }

        let left = self.nodes.len();
        self.nodes.push(Node::default());
        let right = self.nodes.len();
        self.nodes.push(Node::default());
        self.nodes[node_idx].left = left;
        self.nodes[node_idx].right = right;

        self.build(left, start, mid, leaf_size);
        self.build(right, start + mid, len - mid, leaf_size);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Deterministic xorshift so tests never depend on an RNG crate.
    fn point_cloud(count: usize, seed: u64) -> Vec<I64Vec3> {
        let mut state = seed | 1;
        let mut next = move || {
            state ^= state << 13;
            state ^= state >> 7;
            state ^= state << 17;
            (state % 2048) as i64
        };
        (0..count)
            .map(|_| I64Vec3::new(next(), next(), next()))
            .collect()
    }

    fn brute_force<F>(points: &[I64Vec3], query_idx: usize, filter: F) -> Option<usize>
    where
        F: Fn(usize) -> bool,
    {
        let query = points[query_idx];
        points
            .iter()
            .enumerate()
            .filter(|&(idx, _)| idx != query_idx && filter(idx))
            .min_by_key(|&(idx, p)| (query.distance_squared(*p), idx))
            .map(|(idx, _)| idx)
    }

    fn assert_matches_oracle(points: Vec<I64Vec3>) {
        let tree = KdTree::new(points.clone());
        for query_idx in 0..points.len() {
            let expected_dist = brute_force(&points, query_idx, |_| true)
                .map(|idx| points[query_idx].distance_squared(points[idx]));
            let found_dist = tree
                .closest_point(query_idx, |_| true)
                .map(|idx| points[query_idx].distance_squared(points[idx]));
            // Equal distances may pick either point; the distance itself
            // must match the oracle exactly.
            assert_eq!(found_dist, expected_dist, "query {query_idx}");
        }
    }

    #[test]
    fn matches_linear_scan_on_small_set() {
        assert_matches_oracle(point_cloud(7, 0x9e3779b9));
    }

    #[test]
    fn matches_linear_scan_on_large_set() {
        assert_matches_oracle(point_cloud(1500, 0x5deece66d));
    }

    #[test]
    fn respects_candidate_filter() {
        let points = point_cloud(300, 42);
        let tree = KdTree::new(points.clone());
        // Only even indices are admissible.
        let filter = |idx: usize| idx % 2 == 0;
        for query_idx in 0..points.len() {
            let expected_dist = brute_force(&points, query_idx, filter)
                .map(|idx| points[query_idx].distance_squared(points[idx]));
            let found = tree.closest_point(query_idx, filter);
            if let Some(idx) = found {
                assert!(idx % 2 == 0);
            }
            let found_dist = found.map(|idx| points[query_idx].distance_squared(points[idx]));
            assert_eq!(found_dist, expected_dist, "query {query_idx}");
        }
    }

    #[test]
    fn returns_none_when_everything_is_rejected() {
        let points = point_cloud(50, 7);
        let tree = KdTree::new(points);
        assert_eq!(tree.closest_point(0, |_| false), None);
    }

    #[test]
    fn single_point_has_no_neighbor() {
        let tree = KdTree::new(vec![I64Vec3::new(1, 2, 3)]);
        assert_eq!(tree.closest_point(0, |_| true), None);
    }
}
