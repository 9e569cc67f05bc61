use std::collections::HashSet;

/// Connected-component tracking via explicit member sets.
///
/// Every point belongs to exactly one circuit at all times. Merging moves
/// the smaller circuit's members into the larger and retires the smaller
/// id; ids are never reused.
#[derive(Debug)]
pub struct Circuits {
    circuit_of: Vec<usize>,
    members: Vec<HashSet<usize>>,
}

impl Circuits {
    /// Starts with each point in its own singleton circuit.
    pub fn new(point_count: usize) -> Self {
        Self {
            circuit_of: (0..point_count).collect(),
            members: (0..point_count).map(|idx| HashSet::from([idx])).collect(),
        }
    }

    pub fn circuit_of(&self, point: usize) -> usize {
        self.circuit_of[point]
    }

    pub fn same_circuit(&self, a: usize, b: usize) -> bool {
        a == b || self.circuit_of[a] == self.circuit_of[b]
    }

    /// Unions two distinct circuits. The caller must have checked
    /// `same_circuit` first; merging a circuit with itself is a bug.
    pub fn merge(&mut self, circuit_a: usize, circuit_b: usize) {
        assert_ne!(circuit_a, circuit_b, "merge requires distinct circuits");

        let (keep, absorb) = if self.members[circuit_a].len() >= self.members[circuit_b].len() {
            (circuit_a, circuit_b)
        } else {
            (circuit_b, circuit_a)
        };

        let moved = std::mem::take(&mut self.members[absorb]);
        for point in moved {
            self.circuit_of[point] = keep;
            self.members[keep].insert(point);
        }
    }

    /// Member counts of all non-empty circuits, unordered.
    pub fn sizes(&self) -> Vec<usize> {
        self.members
            .iter()
            .filter(|set| !set.is_empty())
            .map(HashSet::len)
            .collect()
    }
}
