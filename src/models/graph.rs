//! Multigraph with constant-time degree queries.

use crate::error::InvalidInput;

use super::Edge;

/// A directed or undirected multigraph over vertices `0..vertex_count`.
///
/// Edges are stored in insertion order and addressed by their *position*.
/// Edges are never removed; eulerization only appends duplicates. Degree
/// counters are maintained on every insertion, so degree queries are O(1).
///
/// For undirected graphs, `out_edges(v)` lists every edge incident to `v`
/// (a self-loop once) and `degree(v)` counts endpoints (a self-loop twice).
///
/// # Examples
///
/// ```
/// use u_postman::models::Graph;
///
/// let g = Graph::from_edges(false, 3, &[(0, 1, 1.0), (1, 2, 1.0)]).unwrap();
/// assert_eq!(g.degree(1), 2);
/// assert_eq!(g.odd_vertices(), vec![0, 2]);
/// ```
#[derive(Debug, Clone)]
pub struct Graph {
    directed: bool,
    edges: Vec<Edge>,
    out_adj: Vec<Vec<usize>>,
    in_adj: Vec<Vec<usize>>,
    in_degree: Vec<usize>,
    out_degree: Vec<usize>,
    duplicates: usize,
}

impl Graph {
    /// Creates an edgeless graph.
    pub fn new(vertex_count: usize, directed: bool) -> Self {
        Self {
            directed,
            edges: Vec::new(),
            out_adj: vec![Vec::new(); vertex_count],
            in_adj: vec![Vec::new(); vertex_count],
            in_degree: vec![0; vertex_count],
            out_degree: vec![0; vertex_count],
            duplicates: 0,
        }
    }

    /// Builds a graph from `(src, dst, weight)` tuples.
    ///
    /// The tuple's position becomes the edge id.
    pub fn from_edges(
        directed: bool,
        vertex_count: usize,
        edges: &[(usize, usize, f64)],
    ) -> Result<Self, InvalidInput> {
        let mut graph = Self::new(vertex_count, directed);
        for (id, &(src, dst, weight)) in edges.iter().enumerate() {
            graph.add_edge(src, dst, weight, id)?;
        }
        Ok(graph)
    }

    /// Appends an edge and returns its position.
    pub fn add_edge(
        &mut self,
        src: usize,
        dst: usize,
        weight: f64,
        id: usize,
    ) -> Result<usize, InvalidInput> {
        let n = self.vertex_count();
        for vertex in [src, dst] {
            if vertex >= n {
                return Err(InvalidInput::VertexOutOfRange {
                    edge: id,
                    vertex,
                    vertex_count: n,
                });
            }
        }
        if !weight.is_finite() {
            return Err(InvalidInput::NonFiniteWeight { edge: id, weight });
        }
        if weight < 0.0 {
            return Err(InvalidInput::NegativeWeight { edge: id, weight });
        }
        Ok(self.push(Edge::new(id, src, dst, weight)))
    }

    /// Appends a copy of the edge at `position` and returns the new position.
    ///
    /// # Panics
    ///
    /// Panics if `position` is out of bounds.
    pub fn duplicate_edge(&mut self, position: usize) -> usize {
        let copy = self.edges[position].duplicated();
        self.duplicates += 1;
        self.push(copy)
    }

    fn push(&mut self, edge: Edge) -> usize {
        let pos = self.edges.len();
        let (src, dst) = (edge.src(), edge.dst());
        self.out_adj[src].push(pos);
        if self.directed {
            self.in_adj[dst].push(pos);
        } else if src != dst {
            self.out_adj[dst].push(pos);
        }
        self.out_degree[src] += 1;
        self.in_degree[dst] += 1;
        self.edges.push(edge);
        pos
    }

    /// `true` for a directed graph.
    pub fn is_directed(&self) -> bool {
        self.directed
    }

    /// Number of vertices.
    pub fn vertex_count(&self) -> usize {
        self.out_adj.len()
    }

    /// Number of edges, duplicates included.
    pub fn num_edges(&self) -> usize {
        self.edges.len()
    }

    /// Number of edges added by [`duplicate_edge`](Self::duplicate_edge).
    pub fn num_duplicates(&self) -> usize {
        self.duplicates
    }

    /// All edges in insertion order.
    pub fn edges(&self) -> &[Edge] {
        &self.edges
    }

    /// The edge at `position`.
    ///
    /// # Panics
    ///
    /// Panics if `position` is out of bounds.
    pub fn edge(&self, position: usize) -> &Edge {
        &self.edges[position]
    }

    /// Sum of all edge weights, duplicates included.
    pub fn total_weight(&self) -> f64 {
        self.edges.iter().map(Edge::weight).sum()
    }

    /// Sum of the weights of duplicated edges.
    pub fn duplicate_weight(&self) -> f64 {
        self.edges
            .iter()
            .filter(|e| e.is_duplicate())
            .map(Edge::weight)
            .sum()
    }

    /// Number of edge endpoints at `v` (a self-loop counts twice).
    pub fn degree(&self, v: usize) -> usize {
        self.in_degree[v] + self.out_degree[v]
    }

    /// Number of edges whose head is `v`.
    pub fn in_degree(&self, v: usize) -> usize {
        self.in_degree[v]
    }

    /// Number of edges whose tail is `v`.
    pub fn out_degree(&self, v: usize) -> usize {
        self.out_degree[v]
    }

    /// `out_degree(v) - in_degree(v)`.
    pub fn imbalance(&self, v: usize) -> i64 {
        self.out_degree[v] as i64 - self.in_degree[v] as i64
    }

    /// Positions of edges leaving `v`.
    ///
    /// Undirected: every incident edge.
    pub fn out_edges(&self, v: usize) -> &[usize] {
        &self.out_adj[v]
    }

    /// Positions of edges entering `v` (directed only; empty otherwise).
    pub fn in_edges(&self, v: usize) -> &[usize] {
        &self.in_adj[v]
    }

    /// Positions of every edge touching `v`.
    pub fn edges_incident(&self, v: usize) -> impl Iterator<Item = usize> + '_ {
        self.out_adj[v]
            .iter()
            .chain(self.in_adj[v].iter())
            .copied()
    }

    /// `true` if `v` can be entered and left equally often: even degree
    /// when undirected, `in == out` when directed.
    pub fn is_balanced(&self, v: usize) -> bool {
        if self.directed {
            self.in_degree[v] == self.out_degree[v]
        } else {
            self.degree(v) % 2 == 0
        }
    }

    /// First vertex that is not balanced, if any.
    pub fn unbalanced_vertex(&self) -> Option<usize> {
        (0..self.vertex_count()).find(|&v| !self.is_balanced(v))
    }

    /// Vertices of odd degree, ascending.
    pub fn odd_vertices(&self) -> Vec<usize> {
        (0..self.vertex_count())
            .filter(|&v| self.degree(v) % 2 == 1)
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_undirected_degrees() {
        let g = Graph::from_edges(false, 3, &[(0, 1, 1.0), (1, 2, 1.0), (2, 0, 1.0)])
            .expect("valid");
        for v in 0..3 {
            assert_eq!(g.degree(v), 2);
            assert!(g.is_balanced(v));
            assert_eq!(g.out_edges(v).len(), 2);
        }
        assert!(g.odd_vertices().is_empty());
        assert_eq!(g.unbalanced_vertex(), None);
    }

    #[test]
    fn test_directed_degrees() {
        let g = Graph::from_edges(true, 2, &[(0, 1, 1.0), (0, 1, 1.0)]).expect("valid");
        assert_eq!(g.out_degree(0), 2);
        assert_eq!(g.in_degree(0), 0);
        assert_eq!(g.in_degree(1), 2);
        assert_eq!(g.imbalance(0), 2);
        assert_eq!(g.imbalance(1), -2);
        assert_eq!(g.out_edges(0), &[0, 1]);
        assert_eq!(g.in_edges(1), &[0, 1]);
        assert_eq!(g.unbalanced_vertex(), Some(0));
    }

    #[test]
    fn test_self_loop() {
        let g = Graph::from_edges(false, 2, &[(0, 0, 1.0), (0, 1, 1.0)]).expect("valid");
        assert_eq!(g.degree(0), 3);
        assert_eq!(g.out_edges(0), &[0, 1]);
        assert_eq!(g.odd_vertices(), vec![0, 1]);
    }

    #[test]
    fn test_duplicate_updates_degrees() {
        let mut g = Graph::from_edges(false, 3, &[(0, 1, 2.0), (1, 2, 3.0)]).expect("valid");
        let pos = g.duplicate_edge(1);
        assert_eq!(pos, 2);
        assert_eq!(g.edge(pos).id(), 1);
        assert!(g.edge(pos).is_duplicate());
        assert_eq!(g.degree(2), 2);
        assert_eq!(g.degree(1), 3);
        assert_eq!(g.num_duplicates(), 1);
        assert!((g.total_weight() - 8.0).abs() < 1e-10);
        assert!((g.duplicate_weight() - 3.0).abs() < 1e-10);
    }

    #[test]
    fn test_edges_incident_directed() {
        let g = Graph::from_edges(true, 3, &[(0, 1, 1.0), (2, 1, 1.0), (1, 0, 1.0)])
            .expect("valid");
        let mut incident: Vec<usize> = g.edges_incident(1).collect();
        incident.sort_unstable();
        assert_eq!(incident, vec![0, 1, 2]);
    }

    #[test]
    fn test_rejects_out_of_range() {
        let err = Graph::from_edges(false, 2, &[(0, 1, 1.0), (1, 2, 1.0)]).unwrap_err();
        assert_eq!(
            err,
            InvalidInput::VertexOutOfRange {
                edge: 1,
                vertex: 2,
                vertex_count: 2
            }
        );
    }

    #[test]
    fn test_rejects_bad_weights() {
        assert!(matches!(
            Graph::from_edges(true, 2, &[(0, 1, -0.5)]),
            Err(InvalidInput::NegativeWeight { edge: 0, .. })
        ));
        assert!(matches!(
            Graph::from_edges(true, 2, &[(0, 1, f64::NAN)]),
            Err(InvalidInput::NonFiniteWeight { edge: 0, .. })
        ));
    }
}
