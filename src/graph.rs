pub mod frontier;
pub mod matrix;
pub mod model;
pub mod prim;

pub use frontier::FrontierQueue;
pub use matrix::Graph;
pub use model::{Edge, Vertex, INFINITY};
pub use prim::{minimum_spanning_tree, Prim};
