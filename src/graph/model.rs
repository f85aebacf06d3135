use std::collections::HashMap;

/// Sentinel distance for vertices not yet reached by the algorithm.
pub const INFINITY: i32 = i32::MAX;

/// A vertex of the graph, stored in the [`Graph`](crate::graph::Graph) arena.
///
/// Vertices carry the per-run Prim state (distance to the growing tree and
/// the predecessor that achieved it) alongside the static adjacency built
/// during graph construction. All cross-references are arena indices rather
/// than owning pointers, so the vertex/edge back-references form no cycle.
#[derive(Debug, Clone)]
pub struct Vertex {
    number: usize,
    distance: i32,
    predecessor: Option<usize>,
    edges: Vec<usize>,
    neighbors: HashMap<usize, usize>,
}

impl Vertex {
    /// Creates an unconnected vertex with the given 1-based number, at
    /// infinite distance and with no predecessor, as it stands before a run
    /// of the algorithm.
    pub fn new(number: usize) -> Self {
        Self {
            number,
            distance: INFINITY,
            predecessor: None,
            edges: Vec::new(),
            neighbors: HashMap::new(),
        }
    }

    /// 1-based vertex number, assigned in matrix row order.
    pub fn number(&self) -> usize {
        self.number
    }

    /// Current distance to the growing tree.
    pub fn distance(&self) -> i32 {
        self.distance
    }

    pub fn set_distance(&mut self, distance: i32) {
        self.distance = distance;
    }

    /// Arena index of the vertex that last improved this one, if any.
    pub fn predecessor(&self) -> Option<usize> {
        self.predecessor
    }

    pub fn set_predecessor(&mut self, predecessor: usize) {
        self.predecessor = Some(predecessor);
    }

    /// Registers an incident edge, keyed in the neighbor map by the opposite
    /// endpoint for O(1) vertex-to-edge lookup.
    pub fn add_edge(&mut self, edge_index: usize, neighbor: usize) {
        self.edges.push(edge_index);
        self.neighbors.insert(neighbor, edge_index);
    }

    /// Incident edge indices in insertion order.
    pub fn edges(&self) -> &[usize] {
        &self.edges
    }

    /// The edge connecting this vertex to `neighbor`, if they are adjacent.
    pub fn edge_to(&self, neighbor: usize) -> Option<usize> {
        self.neighbors.get(&neighbor).copied()
    }

    /// Arena indices of all adjacent vertices.
    pub fn adjacent_vertices(&self) -> impl Iterator<Item = usize> + '_ {
        self.neighbors.keys().copied()
    }

    /// Resets the per-run algorithm state.
    pub fn reset(&mut self) {
        self.distance = INFINITY;
        self.predecessor = None;
    }
}

/// An undirected weighted edge between two vertices of the arena.
#[derive(Debug, Clone)]
pub struct Edge {
    first: usize,
    second: usize,
    weight: i32,
    in_tree: bool,
}

impl Edge {
    pub fn new(first: usize, second: usize, weight: i32) -> Self {
        Self {
            first,
            second,
            weight,
            in_tree: false,
        }
    }

    /// Returns the endpoint opposite to `vertex`, or `None` when `vertex`
    /// is not incident to this edge.
    pub fn other_endpoint(&self, vertex: usize) -> Option<usize> {
        if vertex == self.first {
            Some(self.second)
        } else if vertex == self.second {
            Some(self.first)
        } else {
            None
        }
    }

    /// Both endpoints as stored, lower-triangular order.
    pub fn endpoints(&self) -> (usize, usize) {
        (self.first, self.second)
    }

    pub fn weight(&self) -> i32 {
        self.weight
    }

    /// Whether the edge was selected into the spanning tree or forest.
    pub fn in_tree(&self) -> bool {
        self.in_tree
    }

    pub fn set_in_tree(&mut self, in_tree: bool) {
        self.in_tree = in_tree;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_vertex_is_unreached() {
        let vertex = Vertex::new(1);
        assert_eq!(vertex.number(), 1);
        assert_eq!(vertex.distance(), INFINITY);
        assert!(vertex.predecessor().is_none());
        assert!(vertex.edges().is_empty());
    }

    #[test]
    fn test_vertex_edge_lookup() {
        let mut vertex = Vertex::new(1);
        vertex.add_edge(0, 1);
        vertex.add_edge(3, 4);

        assert_eq!(vertex.edges(), &[0, 3]);
        assert_eq!(vertex.edge_to(4), Some(3));
        assert_eq!(vertex.edge_to(2), None);

        let mut adjacent: Vec<usize> = vertex.adjacent_vertices().collect();
        adjacent.sort_unstable();
        assert_eq!(adjacent, vec![1, 4]);
    }

    #[test]
    fn test_vertex_reset_clears_run_state() {
        let mut vertex = Vertex::new(2);
        vertex.set_distance(7);
        vertex.set_predecessor(0);

        vertex.reset();
        assert_eq!(vertex.distance(), INFINITY);
        assert!(vertex.predecessor().is_none());
    }

    #[test]
    fn test_edge_other_endpoint() {
        let edge = Edge::new(2, 5, 9);
        assert_eq!(edge.other_endpoint(2), Some(5));
        assert_eq!(edge.other_endpoint(5), Some(2));
        assert_eq!(edge.other_endpoint(3), None);
    }

    #[test]
    fn test_edge_starts_outside_tree() {
        let mut edge = Edge::new(0, 1, 4);
        assert!(!edge.in_tree());
        assert_eq!(edge.weight(), 4);

        edge.set_in_tree(true);
        assert!(edge.in_tree());
    }
}
