//! Edge type for the multigraph model.

/// A weighted link between two vertices.
///
/// `id` is the index of the caller's original edge. Copies added during
/// eulerization keep the id of the edge they copy and set `duplicate`.
///
/// # Examples
///
/// ```
/// use u_postman::models::Edge;
///
/// let e = Edge::new(4, 0, 1, 2.5);
/// assert_eq!(e.id(), 4);
/// assert_eq!(e.other(0), 1);
/// assert!(!e.is_duplicate());
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Edge {
    id: usize,
    src: usize,
    dst: usize,
    weight: f64,
    duplicate: bool,
}

impl Edge {
    /// Creates an original (non-duplicate) edge.
    pub fn new(id: usize, src: usize, dst: usize, weight: f64) -> Self {
        Self {
            id,
            src,
            dst,
            weight,
            duplicate: false,
        }
    }

    /// Returns a copy of this edge flagged as a duplicate.
    pub fn duplicated(&self) -> Self {
        Self {
            duplicate: true,
            ..*self
        }
    }

    /// Index of the caller's edge this edge stands for.
    pub fn id(&self) -> usize {
        self.id
    }

    /// Tail vertex (stored orientation for undirected edges).
    pub fn src(&self) -> usize {
        self.src
    }

    /// Head vertex (stored orientation for undirected edges).
    pub fn dst(&self) -> usize {
        self.dst
    }

    /// Traversal cost.
    pub fn weight(&self) -> f64 {
        self.weight
    }

    /// `true` if this edge was added by eulerization.
    pub fn is_duplicate(&self) -> bool {
        self.duplicate
    }

    /// `true` if both endpoints are the same vertex.
    pub fn is_loop(&self) -> bool {
        self.src == self.dst
    }

    /// The endpoint opposite to `v`.
    ///
    /// For a vertex that is not an endpoint, returns `src`.
    pub fn other(&self, v: usize) -> usize {
        if v == self.src {
            self.dst
        } else {
            self.src
        }
    }

    /// `true` if this edge joins `a` and `b` in either orientation.
    pub fn joins(&self, a: usize, b: usize) -> bool {
        (self.src == a && self.dst == b) || (self.src == b && self.dst == a)
    }
}
