//! Graph algorithms
//!
//! Free functions over [`crate::graph::Graph`], re-exported here and
//! wrapped by the corresponding `Graph` methods.

pub mod bfs;
pub mod dfs;
pub mod dijkstra;

pub use bfs::{breadth_first, breadth_first_order};
pub use dfs::{depth_first, depth_first_order};
pub use dijkstra::shortest_paths;
