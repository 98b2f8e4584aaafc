//! Tour and violation types.

use serde::{Deserialize, Serialize};

/// A walk covering every link of a [`PostmanProblem`](super::PostmanProblem).
///
/// # Examples
///
/// ```
/// use u_postman::models::PostmanProblem;
/// use u_postman::solver::PostmanSolver;
///
/// let problem = PostmanProblem::from_tuples(false, 3, &[(0, 1, 1.0), (1, 2, 1.0)]);
/// let tour = PostmanSolver::default().solve(&problem).unwrap();
/// assert_eq!(tour.len(), 4);
/// assert!(tour.is_closed());
/// assert!((tour.deadhead_cost() - 2.0).abs() < 1e-10);
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PostmanTour {
    edge_indices: Vec<usize>,
    vertices: Vec<usize>,
    total_cost: f64,
    deadhead_cost: f64,
    duplicated_edges: usize,
}

impl PostmanTour {
    /// Assembles a tour.
    ///
    /// `vertices` holds the walk's vertex sequence (one more than the number
    /// of steps, or empty for an empty walk).
    pub fn new(
        edge_indices: Vec<usize>,
        vertices: Vec<usize>,
        total_cost: f64,
        deadhead_cost: f64,
        duplicated_edges: usize,
    ) -> Self {
        Self {
            edge_indices,
            vertices,
            total_cost,
            deadhead_cost,
            duplicated_edges,
        }
    }

    /// Original edge indices in traversal order (with repeats).
    pub fn edge_indices(&self) -> &[usize] {
        &self.edge_indices
    }

    /// Vertices visited, starting vertex first.
    pub fn vertices(&self) -> &[usize] {
        &self.vertices
    }

    /// Number of traversals.
    pub fn len(&self) -> usize {
        self.edge_indices.len()
    }

    /// `true` if the walk has no steps.
    pub fn is_empty(&self) -> bool {
        self.edge_indices.is_empty()
    }

    /// Cost of every traversal.
    pub fn total_cost(&self) -> f64 {
        self.total_cost
    }

    /// Cost of traversals beyond the first pass over each link.
    pub fn deadhead_cost(&self) -> f64 {
        self.deadhead_cost
    }

    /// Number of links added during eulerization.
    pub fn duplicated_edges(&self) -> usize {
        self.duplicated_edges
    }

    /// `true` if the walk ends where it started.
    pub fn is_closed(&self) -> bool {
        match (self.vertices.first(), self.vertices.last()) {
            (Some(first), Some(last)) => first == last,
            _ => true,
        }
    }

    /// Consumes the tour and returns its edge indices.
    pub fn into_edge_indices(self) -> Vec<usize> {
        self.edge_indices
    }
}

/// A way in which a walk fails to be a valid postman tour.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum ViolationType {
    /// A step references an edge index outside the problem.
    IndexOutOfRange {
        /// Position in the walk.
        step: usize,
        /// The offending index.
        index: usize,
    },
    /// A step does not start where the previous one ended.
    Discontinuous {
        /// Position in the walk.
        step: usize,
        /// Vertex the walk was at.
        at: usize,
    },
    /// A link is never traversed.
    EdgeNotCovered {
        /// Index of the missing link.
        index: usize,
    },
    /// The walk does not return to its start.
    OpenWalk {
        /// First vertex.
        start: usize,
        /// Last vertex.
        end: usize,
    },
}

/// A constraint violation found in a walk.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Violation {
    /// The type of violation.
    pub kind: ViolationType,
}

impl Violation {
    /// Creates a new violation.
    pub fn new(kind: ViolationType) -> Self {
        Self { kind }
    }
}
