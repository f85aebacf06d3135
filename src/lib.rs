pub mod error;
pub mod graph;
pub mod report;

pub use error::{GraphError, Result};
pub use graph::{minimum_spanning_tree, Edge, FrontierQueue, Graph, Prim, Vertex};
