//! Hierholzer's algorithm.
//!
//! # Algorithm
//!
//! Walk from the start along unused edges until stuck; the stuck vertex
//! closes a sub-circuit. Backtrack, emitting edges in reverse, and resume
//! from the first vertex on the stack that still has unused edges. The
//! emitted sequence, reversed, splices all sub-circuits into one walk.
//!
//! Each vertex keeps a cursor into its adjacency list, so every edge is
//! inspected a constant number of times. An undirected edge is marked used
//! once, which removes it from both endpoints.
//!
//! # Complexity
//!
//! O(V + E).
//!
//! # Reference
//!
//! Hierholzer, C. & Wiener, C. (1873). "Über die Möglichkeit, einen
//! Linienzug ohne Wiederholung und ohne Unterbrechung zu umfahren",
//! *Mathematische Annalen* 6(1), 30-32.

use tracing::debug;

use crate::error::{InvalidInput, PostmanError, Result};
use crate::models::Graph;

use super::{Circuit, Traversal};

/// Extracts a closed walk using every edge exactly once.
///
/// Starts at `start`, or at the lowest vertex with an edge. A `start`
/// without edges is rejected as [`InvalidInput::StartIsolated`]. Fails with
/// [`PostmanError::NotEulerian`] if any vertex is unbalanced and with
/// [`PostmanError::DisconnectedGraph`] if some edge is unreachable from the
/// start.
pub fn eulerian_circuit(graph: &Graph, start: Option<usize>) -> Result<Circuit> {
    if let Some(vertex) = graph.unbalanced_vertex() {
        return Err(PostmanError::NotEulerian { vertex });
    }
    let start = match start {
        Some(v) if v >= graph.vertex_count() => {
            return Err(InvalidInput::StartOutOfRange {
                vertex: v,
                vertex_count: graph.vertex_count(),
            }
            .into())
        }
        Some(v) if graph.degree(v) == 0 && graph.num_edges() > 0 => {
            return Err(InvalidInput::StartIsolated { vertex: v }.into())
        }
        Some(v) => v,
        None => match first_with_edges(graph) {
            Some(v) => v,
            None => return Ok(Circuit::default()),
        },
    };
    walk(graph, start)
}

/// Extracts a walk using every edge exactly once, closed if possible.
///
/// A balanced graph yields a circuit. Otherwise an open walk is produced
/// when exactly two vertices have odd degree (undirected; the walk starts at
/// the lower one) or when exactly one vertex has one surplus outgoing edge
/// and one has one surplus incoming edge (directed; the walk starts at the
/// former). Any other imbalance fails with [`PostmanError::NotEulerian`].
///
/// # Examples
///
/// ```
/// use u_postman::models::Graph;
/// use u_postman::circuit::eulerian_path;
///
/// let g = Graph::from_edges(false, 3, &[(0, 1, 1.0), (1, 2, 1.0)]).unwrap();
/// let p = eulerian_path(&g).unwrap();
/// assert_eq!(p.vertices(), vec![0, 1, 2]);
/// assert!(!p.is_closed());
/// ```
pub fn eulerian_path(graph: &Graph) -> Result<Circuit> {
    if graph.unbalanced_vertex().is_none() {
        return eulerian_circuit(graph, None);
    }
    let start = if graph.is_directed() {
        open_start_directed(graph)?
    } else {
        let odd = graph.odd_vertices();
        if odd.len() != 2 {
            return Err(PostmanError::NotEulerian {
                vertex: odd.get(2).copied().unwrap_or(odd[0]),
            });
        }
        odd[0]
    };
    walk(graph, start)
}

fn open_start_directed(graph: &Graph) -> Result<usize> {
    let mut start = None;
    let mut end = None;
    for v in 0..graph.vertex_count() {
        let slot = match graph.imbalance(v) {
            0 => continue,
            1 => &mut start,
            -1 => &mut end,
            _ => return Err(PostmanError::NotEulerian { vertex: v }),
        };
        if slot.is_some() {
            return Err(PostmanError::NotEulerian { vertex: v });
        }
        *slot = Some(v);
    }
    match (start, end) {
        (Some(s), Some(_)) => Ok(s),
        (Some(v), None) | (None, Some(v)) => Err(PostmanError::NotEulerian { vertex: v }),
        (None, None) => unreachable!("graph has an unbalanced vertex"),
    }
}

fn first_with_edges(graph: &Graph) -> Option<usize> {
    (0..graph.vertex_count()).find(|&v| graph.degree(v) > 0)
}

fn walk(graph: &Graph, start: usize) -> Result<Circuit> {
    let m = graph.num_edges();
    let mut used = vec![false; m];
    let mut cursor = vec![0usize; graph.vertex_count()];
    // (vertex, edge used to reach it)
    let mut stack: Vec<(usize, Option<usize>)> = vec![(start, None)];
    let mut reversed: Vec<Traversal> = Vec::with_capacity(m);

    while let Some(&(v, _)) = stack.last() {
        let adj = graph.out_edges(v);
        while cursor[v] < adj.len() && used[adj[cursor[v]]] {
            cursor[v] += 1;
        }
        if let Some(&pos) = adj.get(cursor[v]) {
            cursor[v] += 1;
            used[pos] = true;
            let edge = graph.edge(pos);
            let next = if graph.is_directed() {
                edge.dst()
            } else {
                edge.other(v)
            };
            stack.push((next, Some(pos)));
        } else if let Some((to, Some(pos))) = stack.pop() {
            if let Some(&(from, _)) = stack.last() {
                reversed.push(Traversal {
                    edge: pos,
                    id: graph.edge(pos).id(),
                    from,
                    to,
                });
            }
        }
    }

    if let Some(stranded) = used.iter().position(|&u| !u) {
        return Err(PostmanError::DisconnectedGraph {
            from: start,
            to: graph.edge(stranded).src(),
        });
    }

    reversed.reverse();
    debug!(steps = reversed.len(), start, "extracted eulerian walk");
    Ok(Circuit::new(reversed))
}
