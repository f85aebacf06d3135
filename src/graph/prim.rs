use std::collections::HashSet;

use log::debug;
use rand::Rng;

use crate::error::{GraphError, Result};
use crate::graph::frontier::FrontierQueue;
use crate::graph::matrix::Graph;

/// Prim's algorithm over a matrix-built [`Graph`].
///
/// The runner borrows the graph mutably for the duration of a run: it seeds
/// the frontier with every vertex, forces the start vertex's distance to
/// zero, then repeatedly extracts the nearest frontier vertex and relaxes
/// its incident edges. Settling a vertex records the edge to its
/// predecessor; once the frontier drains, the recorded edges are committed
/// onto the graph as tree membership flags.
///
/// A disconnected graph is handled by the same loop: a vertex extracted
/// with no predecessor starts a new component and records no edge, so the
/// committed result is a spanning forest.
///
/// # Examples
/// ```
/// use prim_mst::graph::{Graph, Prim};
///
/// let mut graph = Graph::new(vec![
///     vec![0, 1, 3],
///     vec![1, 0, 2],
///     vec![3, 2, 0],
/// ]);
/// Prim::new(&mut graph).run_from(0);
///
/// let (_, total_weight) = graph.result_matrix().unwrap();
/// assert_eq!(total_weight, 3);
/// ```
///
/// # Complexity
/// * Time: O(V² log V) with the re-sorting frontier (V sorts of V entries)
/// * Space: O(V + E)
pub struct Prim<'a> {
    graph: &'a mut Graph,
    frontier: FrontierQueue,
    tree_edges: HashSet<usize>,
}

impl<'a> Prim<'a> {
    pub fn new(graph: &'a mut Graph) -> Self {
        Self {
            graph,
            frontier: FrontierQueue::new(),
            tree_edges: HashSet::new(),
        }
    }

    /// Runs the algorithm from a uniformly random start vertex.
    ///
    /// Returns `false` without doing anything when the graph is invalid.
    pub fn run(&mut self) -> bool {
        self.run_with_rng(&mut rand::thread_rng())
    }

    /// Runs from a random start vertex drawn from the given source.
    ///
    /// The random source is injectable so tests can seed it and get a
    /// reproducible start selection.
    pub fn run_with_rng<R: Rng + ?Sized>(&mut self, rng: &mut R) -> bool {
        if !self.graph.is_valid() {
            return false;
        }
        let start = rng.gen_range(0..self.graph.vertex_count());
        self.execute(start);
        true
    }

    /// Runs the algorithm from the given start vertex.
    ///
    /// An out-of-range index means "no preference" rather than an error:
    /// a uniformly random valid start is chosen instead. The start vertex
    /// only affects which equal-weight tree is found, never the total
    /// weight. Returns `false` without doing anything when the graph is
    /// invalid.
    pub fn run_from(&mut self, start: usize) -> bool {
        if !self.graph.is_valid() {
            return false;
        }
        if start >= self.graph.vertex_count() {
            return self.run();
        }
        self.execute(start);
        true
    }

    fn execute(&mut self, start: usize) {
        self.graph.reset_run_state();
        self.tree_edges.clear();

        self.graph.vertices_mut()[start].set_distance(0);
        self.frontier.seed(self.graph.vertices());

        // Zero distance makes the start vertex the guaranteed first
        // extraction; it has no predecessor, so no edge is recorded for it.
        let mut current = self.frontier.extract_min();

        while !self.frontier.is_empty() {
            self.relax_neighbors(current);
            self.frontier.resort(self.graph.vertices());
            current = self.frontier.extract_min();
            self.record_tree_edge(current);
        }
        self.commit();
    }

    /// Lowers frontier neighbors of `current` to the connecting edge's
    /// weight where that improves on their recorded distance. Raw edge
    /// weight is compared, not cumulative path length: Prim's invariant is
    /// the cheapest edge crossing the frontier boundary.
    fn relax_neighbors(&mut self, current: usize) {
        let incident = self.graph.vertices()[current].edges().to_vec();
        for edge_index in incident {
            let edge = &self.graph.edges()[edge_index];
            let weight = edge.weight();
            let Some(neighbor) = edge.other_endpoint(current) else {
                continue;
            };
            if self.frontier.contains(neighbor)
                && weight < self.graph.vertices()[neighbor].distance()
            {
                let vertex = &mut self.graph.vertices_mut()[neighbor];
                vertex.set_distance(weight);
                vertex.set_predecessor(current);
            }
        }
    }

    /// Records the edge connecting a freshly settled vertex to its
    /// predecessor. A settled vertex without a predecessor was never
    /// relaxed, which marks a disconnected component boundary; that is a
    /// normal condition, not an error, and no edge is recorded.
    fn record_tree_edge(&mut self, vertex: usize) {
        match self.graph.vertices()[vertex].predecessor() {
            Some(predecessor) => {
                if let Some(edge_index) = self.graph.vertices()[predecessor].edge_to(vertex) {
                    self.tree_edges.insert(edge_index);
                }
            }
            None => debug!(
                "Vertex {} is unreachable from the settled set, starting a new component",
                self.graph.vertices()[vertex].number()
            ),
        }
    }

    fn commit(&mut self) {
        for &edge_index in &self.tree_edges {
            self.graph.edge_mut(edge_index).set_in_tree(true);
        }
    }
}

/// Computes the minimum spanning tree (or forest) of the graph described by
/// a weight matrix, using Prim's algorithm.
///
/// # Arguments
/// * `matrix` - Square, symmetric, zero-diagonal weight matrix; a nonzero
///   entry is an undirected edge of that weight
/// * `start` - Start vertex index; any out-of-range value selects a random
///   valid start instead
///
/// # Returns
/// * `Ok((total_weight, result_matrix))` - The total tree/forest weight and
///   the weight matrix restricted to the selected edges
/// * `Err(GraphError::InvalidInput)` - If the matrix fails validation
///
/// # Examples
/// ```
/// use prim_mst::graph::prim;
///
/// let (weight, matrix) = prim::minimum_spanning_tree(
///     vec![vec![0, 1, 3], vec![1, 0, 2], vec![3, 2, 0]],
///     0,
/// )
/// .unwrap();
/// assert_eq!(weight, 3);
/// assert_eq!(matrix[0][2], 0);
/// ```
pub fn minimum_spanning_tree(matrix: Vec<Vec<i32>>, start: usize) -> Result<(i32, Vec<Vec<i32>>)> {
    let mut graph = Graph::new(matrix);
    Prim::new(&mut graph).run_from(start);
    match graph.result_matrix() {
        Some((result, total_weight)) => Ok((total_weight, result)),
        None => Err(GraphError::invalid_input(
            "weight matrix must be non-empty, square, symmetric, and loop-free",
        )),
    }
}
