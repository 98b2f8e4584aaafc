//! Eulerian circuit extraction and mapping back to caller edge indices.
//!
//! - [`eulerian_circuit`] / [`eulerian_path`] — Hierholzer's algorithm
//! - [`map_to_original_indices`] — orientation-aware index mapping

mod hierholzer;
mod mapper;

pub use hierholzer::{eulerian_circuit, eulerian_path};
pub use mapper::map_to_original_indices;

/// One step of a walk: an edge traversed from `from` to `to`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Traversal {
    /// Position of the edge in the working graph.
    pub edge: usize,
    /// Caller-visible id of the edge.
    pub id: usize,
    /// Vertex the step leaves.
    pub from: usize,
    /// Vertex the step enters.
    pub to: usize,
}

/// A walk that uses every edge of a graph exactly once.
///
/// # Examples
///
/// ```
/// use u_postman::models::Graph;
/// use u_postman::circuit::eulerian_circuit;
///
/// let g = Graph::from_edges(false, 3, &[(0, 1, 1.0), (1, 2, 1.0), (2, 0, 1.0)]).unwrap();
/// let c = eulerian_circuit(&g, Some(1)).unwrap();
/// assert_eq!(c.len(), 3);
/// assert!(c.is_closed());
/// assert_eq!(c.vertices()[0], 1);
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Circuit {
    steps: Vec<Traversal>,
}

impl Circuit {
    /// Wraps a sequence of steps.
    pub fn new(steps: Vec<Traversal>) -> Self {
        Self { steps }
    }

    /// Steps in walk order.
    pub fn steps(&self) -> &[Traversal] {
        &self.steps
    }

    /// Number of steps.
    pub fn len(&self) -> usize {
        self.steps.len()
    }

    /// `true` for the empty walk.
    pub fn is_empty(&self) -> bool {
        self.steps.is_empty()
    }

    /// `true` if the walk ends where it starts (the empty walk is closed).
    pub fn is_closed(&self) -> bool {
        match (self.steps.first(), self.steps.last()) {
            (Some(first), Some(last)) => first.from == last.to,
            _ => true,
        }
    }

    /// Vertex sequence of the walk: the start, then each step's head.
    pub fn vertices(&self) -> Vec<usize> {
        let mut out = Vec::with_capacity(self.steps.len() + 1);
        if let Some(first) = self.steps.first() {
            out.push(first.from);
        }
        out.extend(self.steps.iter().map(|t| t.to));
        out
    }

    /// Caller-visible edge ids in walk order.
    pub fn edge_ids(&self) -> Vec<usize> {
        self.steps.iter().map(|t| t.id).collect()
    }
}
