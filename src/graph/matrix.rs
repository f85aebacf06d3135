use log::{error, warn};

use crate::graph::model::{Edge, Vertex};

/// An undirected weighted graph built from a square weight matrix.
///
/// The graph is the sole owner of its vertex and edge arenas; vertices and
/// edges reference each other by arena index. Construction validates the
/// matrix and absorbs any structural problem into the validity flag instead
/// of returning an error, so every derived operation must check
/// [`is_valid`](Graph::is_valid) before computing.
///
/// # Examples
/// ```
/// use prim_mst::graph::Graph;
///
/// let graph = Graph::new(vec![
///     vec![0, 2, 0],
///     vec![2, 0, 3],
///     vec![0, 3, 0],
/// ]);
/// assert!(graph.is_valid());
/// assert!(graph.is_connected());
/// assert_eq!(graph.vertex_count(), 3);
/// assert_eq!(graph.edge_count(), 2);
/// ```
#[derive(Debug, Clone)]
pub struct Graph {
    init_matrix: Vec<Vec<i32>>,
    vertices: Vec<Vertex>,
    edges: Vec<Edge>,
    valid: bool,
    connected: bool,
}

impl Graph {
    /// Builds a graph from a weight matrix.
    ///
    /// The matrix must be non-empty, square, symmetric, and have a zero
    /// diagonal; a nonzero entry `matrix[i][j]` becomes one undirected edge
    /// of that weight between vertices `i` and `j`. A matrix that fails
    /// validation produces an invalid graph with empty vertex and edge sets
    /// rather than an error. A disconnected matrix is accepted: the
    /// algorithm then yields a forest of per-component spanning trees, and
    /// the condition is logged as a warning.
    pub fn new(init_matrix: Vec<Vec<i32>>) -> Self {
        let mut graph = Self {
            init_matrix,
            vertices: Vec::new(),
            edges: Vec::new(),
            valid: true,
            connected: true,
        };

        if !graph.validate() {
            graph.valid = false;
            error!("Incorrect size of weight matrix or incorrect type of graph");
            return graph;
        }

        graph.init_vertices();
        graph.init_edges();
        graph.connected = graph.check_connected();
        if !graph.connected {
            warn!(
                "Graph is not connected. In the end of algorithm you'll retrieve \
                 a forest of minimum spanning trees"
            );
        }
        graph
    }

    /// A square, symmetric, loop-free matrix describes an undirected graph.
    fn validate(&self) -> bool {
        if self.init_matrix.is_empty() {
            error!("Empty weight matrix is unacceptable");
            return false;
        }
        if self.init_matrix.iter().any(|row| row.len() != self.init_matrix.len()) {
            return false;
        }
        if self.is_oriented() || self.contains_loops() {
            return false;
        }
        true
    }

    /// An asymmetric matrix would describe a directed graph.
    fn is_oriented(&self) -> bool {
        for i in 0..self.init_matrix.len() {
            for j in 0..i {
                if self.init_matrix[i][j] != self.init_matrix[j][i] {
                    error!("Oriented graph is unacceptable");
                    return true;
                }
            }
        }
        false
    }

    /// A nonzero diagonal entry would be a self-loop.
    fn contains_loops(&self) -> bool {
        for (i, row) in self.init_matrix.iter().enumerate() {
            if row[i] != 0 {
                error!("Loops are unacceptable");
                return true;
            }
        }
        false
    }

    fn init_vertices(&mut self) {
        // Vertices are numbered 1..=N in matrix row order.
        self.vertices = (0..self.init_matrix.len()).map(|i| Vertex::new(i + 1)).collect();
    }

    fn init_edges(&mut self) {
        for i in 0..self.init_matrix.len() {
            for j in 0..i {
                if self.init_matrix[i][j] != 0 {
                    let edge_index = self.edges.len();
                    self.edges.push(Edge::new(i, j, self.init_matrix[i][j]));
                    self.vertices[i].add_edge(edge_index, j);
                    self.vertices[j].add_edge(edge_index, i);
                }
            }
        }
    }

    /// Depth-first traversal from vertex 0; the graph is undirected, so one
    /// traversal reaching every vertex is equivalent to connectivity.
    fn check_connected(&self) -> bool {
        let mut visited = vec![false; self.vertices.len()];
        let mut stack = vec![0];
        visited[0] = true;
        let mut reached = 1;

        while let Some(current) = stack.pop() {
            for neighbor in self.vertices[current].adjacent_vertices() {
                if !visited[neighbor] {
                    visited[neighbor] = true;
                    reached += 1;
                    stack.push(neighbor);
                }
            }
        }
        reached == self.vertices.len()
    }

    /// Projects the current tree membership flags back into a weight matrix.
    ///
    /// Entry `(i, j)` keeps the original weight when the edge between `i`
    /// and `j` exists and was selected into the tree, and is zero otherwise;
    /// the matrix is symmetric by construction. Also returns the total
    /// weight of the selected edges. The projection is recomputed from the
    /// current flags on every call, so calling it repeatedly without an
    /// intervening run yields identical output.
    ///
    /// # Returns
    /// * `Some((matrix, total_weight))` for a valid graph
    /// * `None` for an invalid graph
    pub fn result_matrix(&self) -> Option<(Vec<Vec<i32>>, i32)> {
        if !self.valid {
            return None;
        }

        let n = self.vertices.len();
        let mut matrix = vec![vec![0; n]; n];
        let mut total_weight = 0;
        for (edge_index, edge) in self.edges.iter().enumerate() {
            if edge.in_tree() {
                let (i, j) = edge.endpoints();
                debug_assert_eq!(self.vertices[i].edge_to(j), Some(edge_index));
                matrix[i][j] = edge.weight();
                matrix[j][i] = edge.weight();
                total_weight += edge.weight();
            }
        }
        Some((matrix, total_weight))
    }

    /// Total weight of the currently selected tree or forest edges.
    pub fn tree_weight(&self) -> Option<i32> {
        self.result_matrix().map(|(_, weight)| weight)
    }

    pub fn is_valid(&self) -> bool {
        self.valid
    }

    /// False means a run produces a spanning forest instead of a tree.
    pub fn is_connected(&self) -> bool {
        self.connected
    }

    pub fn vertex_count(&self) -> usize {
        self.vertices.len()
    }

    pub fn edge_count(&self) -> usize {
        self.edges.len()
    }

    pub fn vertices(&self) -> &[Vertex] {
        &self.vertices
    }

    pub fn edges(&self) -> &[Edge] {
        &self.edges
    }

    /// The weight matrix the graph was built from.
    pub fn init_matrix(&self) -> &[Vec<i32>] {
        &self.init_matrix
    }

    pub(crate) fn vertices_mut(&mut self) -> &mut [Vertex] {
        &mut self.vertices
    }

    pub(crate) fn edge_mut(&mut self, edge_index: usize) -> &mut Edge {
        &mut self.edges[edge_index]
    }

    /// Clears per-run state so the algorithm can be re-run on the same graph.
    pub(crate) fn reset_run_state(&mut self) {
        for vertex in &mut self.vertices {
            vertex.reset();
        }
        for edge in &mut self.edges {
            edge.set_in_tree(false);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn triangle() -> Vec<Vec<i32>> {
        vec![vec![0, 1, 3], vec![1, 0, 2], vec![3, 2, 0]]
    }

    #[test]
    fn test_valid_matrix_builds_arenas() {
        let graph = Graph::new(triangle());
        assert!(graph.is_valid());
        assert!(graph.is_connected());
        assert_eq!(graph.vertex_count(), 3);
        assert_eq!(graph.edge_count(), 3);

        let numbers: Vec<usize> = graph.vertices().iter().map(|v| v.number()).collect();
        assert_eq!(numbers, vec![1, 2, 3]);
    }

    #[test]
    fn test_adjacency_is_registered_on_both_endpoints() {
        let graph = Graph::new(triangle());
        let edge_index = graph.vertices()[0].edge_to(2).unwrap();
        assert_eq!(graph.vertices()[2].edge_to(0), Some(edge_index));
        assert_eq!(graph.edges()[edge_index].weight(), 3);
        assert_eq!(graph.edges()[edge_index].other_endpoint(0), Some(2));
    }

    #[test]
    fn test_non_square_matrix_is_invalid() {
        // 5x6, the classic rejection scenario.
        let graph = Graph::new(vec![vec![0; 6]; 5]);
        assert!(!graph.is_valid());
        assert_eq!(graph.vertex_count(), 0);
        assert_eq!(graph.edge_count(), 0);
        assert!(graph.result_matrix().is_none());
    }

    #[test]
    fn test_ragged_matrix_is_invalid() {
        let graph = Graph::new(vec![vec![0, 1], vec![1, 0, 2]]);
        assert!(!graph.is_valid());
    }

    #[test]
    fn test_asymmetric_matrix_is_invalid() {
        let graph = Graph::new(vec![vec![0, 1, 0], vec![2, 0, 0], vec![0, 0, 0]]);
        assert!(!graph.is_valid());
        assert!(graph.result_matrix().is_none());
    }

    #[test]
    fn test_nonzero_diagonal_is_invalid() {
        let graph = Graph::new(vec![vec![0, 1], vec![1, 5]]);
        assert!(!graph.is_valid());
    }

    #[test]
    fn test_empty_matrix_is_invalid() {
        let graph = Graph::new(Vec::new());
        assert!(!graph.is_valid());
    }

    #[test]
    fn test_single_vertex_is_connected() {
        let graph = Graph::new(vec![vec![0]]);
        assert!(graph.is_valid());
        assert!(graph.is_connected());
        assert_eq!(graph.edge_count(), 0);
    }

    #[test]
    fn test_disconnected_matrix_is_accepted() {
        let graph = Graph::new(vec![
            vec![0, 1, 0, 0],
            vec![1, 0, 0, 0],
            vec![0, 0, 0, 2],
            vec![0, 0, 2, 0],
        ]);
        assert!(graph.is_valid());
        assert!(!graph.is_connected());
        assert_eq!(graph.edge_count(), 2);
    }

    #[test]
    fn test_result_matrix_before_run_is_zero() {
        let graph = Graph::new(triangle());
        let (matrix, weight) = graph.result_matrix().unwrap();
        assert_eq!(matrix, vec![vec![0; 3]; 3]);
        assert_eq!(weight, 0);
    }

    #[test]
    fn test_result_matrix_reflects_current_flags() {
        let mut graph = Graph::new(triangle());
        let edge_index = graph.vertices()[1].edge_to(0).unwrap();
        graph.edge_mut(edge_index).set_in_tree(true);

        let (matrix, weight) = graph.result_matrix().unwrap();
        assert_eq!(matrix[0][1], 1);
        assert_eq!(matrix[1][0], 1);
        assert_eq!(weight, 1);
        assert_eq!(graph.tree_weight(), Some(1));

        // Pure projection: a second call sees the same flags, same totals.
        assert_eq!(graph.result_matrix().unwrap(), (matrix, weight));
    }
}
