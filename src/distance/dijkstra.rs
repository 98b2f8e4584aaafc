//! Single-source shortest paths (Dijkstra) over a [`Graph`].
//!
//! # Algorithm
//!
//! Binary-heap Dijkstra with lazy deletion. Each vertex keeps its tentative
//! distance and the position of the edge that reached it, so one run answers
//! path queries to every destination.
//!
//! Among parallel edges the lightest one is used; equal weights resolve to
//! the edge inserted first.
//!
//! # Complexity
//!
//! O((V + E) log V) per source.

use std::cmp::Ordering;
use std::collections::BinaryHeap;

use crate::error::{PostmanError, Result};
use crate::models::Graph;

/// A walk through the graph.
#[derive(Debug, Clone, PartialEq)]
pub struct Path {
    /// Vertices in walk order, source first.
    pub vertices: Vec<usize>,
    /// Positions of the edges traversed (one fewer than `vertices`).
    pub edges: Vec<usize>,
    /// Sum of traversed edge weights.
    pub cost: f64,
}

impl Path {
    /// The zero-length path sitting at `v`.
    pub fn trivial(v: usize) -> Self {
        Self {
            vertices: vec![v],
            edges: Vec::new(),
            cost: 0.0,
        }
    }

    /// First vertex.
    pub fn source(&self) -> usize {
        self.vertices[0]
    }

    /// Last vertex.
    pub fn target(&self) -> usize {
        self.vertices[self.vertices.len() - 1]
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
struct State {
    cost: f64,
    vertex: usize,
}

impl Eq for State {}

impl Ord for State {
    // Reversed for a min-heap.
    fn cmp(&self, other: &Self) -> Ordering {
        other
            .cost
            .total_cmp(&self.cost)
            .then_with(|| other.vertex.cmp(&self.vertex))
    }
}

impl PartialOrd for State {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

/// Distances and predecessor edges from one source to every vertex.
///
/// # Examples
///
/// ```
/// use u_postman::models::Graph;
/// use u_postman::distance::ShortestPathTree;
///
/// let g = Graph::from_edges(true, 3, &[(0, 1, 2.0), (1, 2, 3.0), (0, 2, 9.0)]).unwrap();
/// let tree = ShortestPathTree::compute(&g, 0);
/// assert_eq!(tree.cost_to(2), Some(5.0));
/// let path = tree.path_to(2).unwrap();
/// assert_eq!(path.vertices, vec![0, 1, 2]);
/// assert_eq!(tree.cost_to(0), Some(0.0));
/// ```
#[derive(Debug, Clone)]
pub struct ShortestPathTree {
    source: usize,
    dist: Vec<f64>,
    pred: Vec<Option<usize>>,
    directed: bool,
    tails: Vec<usize>,
}

impl ShortestPathTree {
    /// Runs Dijkstra from `source`.
    ///
    /// # Panics
    ///
    /// Panics if `source` is not a vertex of `graph`.
    pub fn compute(graph: &Graph, source: usize) -> Self {
        let n = graph.vertex_count();
        let mut dist = vec![f64::INFINITY; n];
        let mut pred = vec![None; n];
        // Vertex each predecessor edge was entered from.
        let mut tails = vec![usize::MAX; n];
        let mut heap = BinaryHeap::new();

        dist[source] = 0.0;
        heap.push(State {
            cost: 0.0,
            vertex: source,
        });

        while let Some(State { cost, vertex: u }) = heap.pop() {
            if cost > dist[u] {
                continue;
            }
            for &pos in graph.out_edges(u) {
                let edge = graph.edge(pos);
                let v = if graph.is_directed() {
                    edge.dst()
                } else {
                    edge.other(u)
                };
                let next = cost + edge.weight();
                if next < dist[v] {
                    dist[v] = next;
                    pred[v] = Some(pos);
                    tails[v] = u;
                    heap.push(State {
                        cost: next,
                        vertex: v,
                    });
                }
            }
        }

        Self {
            source,
            dist,
            pred,
            directed: graph.is_directed(),
            tails,
        }
    }

    /// The source vertex.
    pub fn source(&self) -> usize {
        self.source
    }

    /// `true` if the tree was grown along edge orientation.
    pub fn is_directed(&self) -> bool {
        self.directed
    }

    /// Shortest distance to `target`, or `None` if unreachable.
    pub fn cost_to(&self, target: usize) -> Option<f64> {
        let d = self.dist[target];
        d.is_finite().then_some(d)
    }

    /// Shortest path to `target`.
    ///
    /// Fails with [`PostmanError::DisconnectedGraph`] if `target` is not
    /// reachable.
    pub fn path_to(&self, target: usize) -> Result<Path> {
        let cost = self.cost_to(target).ok_or(PostmanError::DisconnectedGraph {
            from: self.source,
            to: target,
        })?;

        let mut vertices = vec![target];
        let mut edges = Vec::new();
        let mut current = target;
        while let Some(pos) = self.pred[current] {
            edges.push(pos);
            current = self.tails[current];
            vertices.push(current);
        }
        vertices.reverse();
        edges.reverse();

        Ok(Path {
            vertices,
            edges,
            cost,
        })
    }
}

/// Shortest path from `source` to `target`.
///
/// Convenience wrapper; callers needing several targets from one source
/// should keep the [`ShortestPathTree`].
pub fn shortest_path(graph: &Graph, source: usize, target: usize) -> Result<Path> {
    ShortestPathTree::compute(graph, source).path_to(target)
}
