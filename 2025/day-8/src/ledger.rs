/// An unordered pair of point indices, canonicalized so `a <= b`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Edge {
    pub a: usize,
    pub b: usize,
}

impl Edge {
    pub fn new(a: usize, b: usize) -> Self {
        Self {
            a: a.min(b),
            b: a.max(b),
        }
    }
}

/// Per-edge bookkeeping for the solver.
///
/// Edges are addressed through the pairing function `b² + a` (with
/// `a <= b`), which is injective for index pairs below the point count.
/// Both flags are monotone: set once, never cleared, and never both set for
/// the same edge.
#[derive(Debug)]
pub struct EdgeLedger {
    connected: Vec<bool>,
    blacklisted: Vec<bool>,
}

impl EdgeLedger {
    pub fn new(point_count: usize) -> Self {
        // b <= point_count - 1, so b² + a < point_count².
        let capacity = point_count * point_count;
        Self {
            connected: vec![false; capacity],
            blacklisted: vec![false; capacity],
        }
    }

    fn key(edge: Edge) -> usize {
        edge.b * edge.b + edge.a
    }

    pub fn is_connected(&self, a: usize, b: usize) -> bool {
        self.connected[Self::key(Edge::new(a, b))]
    }

    pub fn is_blacklisted(&self, a: usize, b: usize) -> bool {
        self.blacklisted[Self::key(Edge::new(a, b))]
    }

    /// True when the pair is still eligible: neither connected nor
    /// blacklisted.
    pub fn is_open(&self, a: usize, b: usize) -> bool {
        let key = Self::key(Edge::new(a, b));
        !self.connected[key] && !self.blacklisted[key]
    }

    pub fn connect(&mut self, a: usize, b: usize) {
        let key = Self::key(Edge::new(a, b));
        debug_assert!(!self.blacklisted[key], "edge is already blacklisted");
        self.connected[key] = true;
    }

    pub fn blacklist(&mut self, a: usize, b: usize) {
        let key = Self::key(Edge::new(a, b));
        debug_assert!(!self.connected[key], "edge is already a connection");
        self.blacklisted[key] = true;
    }
}
