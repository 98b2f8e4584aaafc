//! Domain model types for route inspection.
//!
//! Provides the multigraph the engine works on, the caller-facing problem
//! description, and the resulting tour.

mod edge;
mod graph;
mod problem;
mod solution;

pub use edge::Edge;
pub use graph::Graph;
pub use problem::{EdgeSpec, PostmanProblem};
pub use solution::{PostmanTour, Violation, ViolationType};
