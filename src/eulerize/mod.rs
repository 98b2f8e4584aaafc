//! Eulerization: duplicating edges until every vertex is balanced.
//!
//! - [`eulerize_undirected`] — one-shot minimum-weight perfect matching of
//!   odd-degree vertices
//! - [`eulerize_directed`] — iterative greedy matching of in/out surplus
//!   vertices
//!
//! Both strategies require the graph to be connected (strongly connected
//! when directed) and fail with
//! [`PostmanError::DisconnectedGraph`](crate::PostmanError::DisconnectedGraph)
//! when a needed path does not exist.

mod directed;
mod undirected;

pub use directed::{augmentation_weight, eulerize_directed};
pub use undirected::eulerize_undirected;

use tracing::trace;

use crate::distance::Path;
use crate::error::Result;
use crate::models::Graph;

/// Summary of the edges added by eulerization.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Augmentation {
    /// Number of edge copies appended to the graph.
    pub added_edges: usize,
    /// Total weight of the copies.
    pub added_cost: f64,
    /// Number of matched vertex pairs whose connecting path was duplicated.
    pub matched_pairs: usize,
    /// Matching rounds performed (0 when the graph was already balanced).
    pub rounds: usize,
}

impl Augmentation {
    /// Duplicates every edge of `path` in `graph` and records it.
    fn apply(&mut self, graph: &mut Graph, path: &Path) {
        trace!(
            from = path.source(),
            to = path.target(),
            edges = path.edges.len(),
            cost = path.cost,
            "duplicating path"
        );
        for &pos in &path.edges {
            graph.duplicate_edge(pos);
        }
        self.added_edges += path.edges.len();
        self.added_cost += path.cost;
        self.matched_pairs += 1;
    }
}

/// Makes `graph` Eulerian in place, choosing the strategy from
/// [`Graph::is_directed`].
///
/// # Examples
///
/// ```
/// use u_postman::models::Graph;
/// use u_postman::eulerize::eulerize;
///
/// let mut g = Graph::from_edges(false, 3, &[(0, 1, 1.0), (1, 2, 1.0)]).unwrap();
/// let aug = eulerize(&mut g).unwrap();
/// assert_eq!(aug.added_edges, 2);
/// assert!(g.odd_vertices().is_empty());
/// ```
pub fn eulerize(graph: &mut Graph) -> Result<Augmentation> {
    if graph.is_directed() {
        eulerize_directed(graph)
    } else {
        eulerize_undirected(graph)
    }
}
