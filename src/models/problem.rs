//! Route inspection problem instance.

use serde::{Deserialize, Serialize};

use crate::error::InvalidInput;

use super::Graph;

/// A link the postman must traverse.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct EdgeSpec {
    /// Tail vertex.
    pub src: usize,
    /// Head vertex.
    pub dst: usize,
    /// Traversal cost (non-negative).
    pub weight: f64,
}

impl EdgeSpec {
    /// Creates a link specification.
    pub fn new(src: usize, dst: usize, weight: f64) -> Self {
        Self { src, dst, weight }
    }
}

impl From<(usize, usize, f64)> for EdgeSpec {
    fn from((src, dst, weight): (usize, usize, f64)) -> Self {
        Self::new(src, dst, weight)
    }
}

/// A route inspection instance: a network whose every link must be covered.
///
/// Edge indices in a tour refer to positions in [`edges`](Self::edges).
/// The network must be connected (undirected) or strongly connected
/// (directed); extracting the largest component is the caller's job.
///
/// # Examples
///
/// ```
/// use u_postman::models::PostmanProblem;
///
/// let problem = PostmanProblem::new(false, 3)
///     .with_edge(0, 1, 1.0)
///     .with_edge(1, 2, 1.0);
/// assert_eq!(problem.num_edges(), 2);
/// assert_eq!(problem.endpoints(), vec![(0, 1), (1, 2)]);
/// assert!(problem.build_graph().is_ok());
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PostmanProblem {
    /// Whether links are one-way.
    pub directed: bool,
    /// Number of vertices; valid ids are `0..vertex_count`.
    pub vertex_count: usize,
    /// Links in caller order.
    #[serde(default)]
    pub edges: Vec<EdgeSpec>,
}

impl PostmanProblem {
    /// Creates a problem with no links.
    pub fn new(directed: bool, vertex_count: usize) -> Self {
        Self {
            directed,
            vertex_count,
            edges: Vec::new(),
        }
    }

    /// Creates a problem from `(src, dst, weight)` tuples.
    pub fn from_tuples(directed: bool, vertex_count: usize, edges: &[(usize, usize, f64)]) -> Self {
        Self {
            directed,
            vertex_count,
            edges: edges.iter().copied().map(EdgeSpec::from).collect(),
        }
    }

    /// Appends a link.
    pub fn with_edge(mut self, src: usize, dst: usize, weight: f64) -> Self {
        self.edges.push(EdgeSpec::new(src, dst, weight));
        self
    }

    /// Number of links.
    pub fn num_edges(&self) -> usize {
        self.edges.len()
    }

    /// `(src, dst)` of every link, in caller order.
    pub fn endpoints(&self) -> Vec<(usize, usize)> {
        self.edges.iter().map(|e| (e.src, e.dst)).collect()
    }

    /// Sum of all link weights (the cost of covering each link once).
    pub fn required_cost(&self) -> f64 {
        self.edges.iter().map(|e| e.weight).sum()
    }

    /// Validates the links and builds the working graph.
    pub fn build_graph(&self) -> Result<Graph, InvalidInput> {
        let mut graph = Graph::new(self.vertex_count, self.directed);
        for (id, e) in self.edges.iter().enumerate() {
            graph.add_edge(e.src, e.dst, e.weight, id)?;
        }
        Ok(graph)
    }
}
