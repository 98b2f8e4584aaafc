//! Shortest paths over the working graph.
//!
//! - [`ShortestPathTree`] — one Dijkstra run, reusable for every destination
//! - [`PathMatrix`] — dense table of paths between two vertex sets

mod dijkstra;
mod matrix;

pub use dijkstra::{shortest_path, Path, ShortestPathTree};
pub use matrix::PathMatrix;
