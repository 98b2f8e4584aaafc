//! Undirected eulerization by minimum-weight perfect matching.
//!
//! # Algorithm
//!
//! 1. Collect the odd-degree vertices `O` (always an even number).
//! 2. Run Dijkstra from every vertex of `O`.
//! 3. Build the complete graph on `O` weighted by shortest distance and find
//!    its minimum-weight perfect matching.
//! 4. Duplicate every edge on the shortest path of each matched pair. Each
//!    pair's endpoints gain one degree, interior vertices gain two.
//!
//! The result is the optimal Chinese Postman augmentation.
//!
//! # Complexity
//!
//! O(|O| (V + E) log V) for the paths plus O(|O|³) for the matching.
//!
//! # Reference
//!
//! Edmonds, J. & Johnson, E.L. (1973). "Matching, Euler tours and the
//! Chinese postman", *Mathematical Programming* 5, 88-124.

use tracing::debug;

use crate::distance::PathMatrix;
use crate::error::{PostmanError, Result};
use crate::matching::min_weight_perfect_matching;
use crate::models::Graph;

use super::Augmentation;

/// Duplicates edges so every vertex of an undirected graph has even degree.
///
/// # Examples
///
/// ```
/// use u_postman::models::Graph;
/// use u_postman::eulerize::eulerize_undirected;
///
/// // Star with three leaves: the hub and all leaves have odd degree, and
/// // every pairing of them repeats each spoke exactly once.
/// let mut g = Graph::from_edges(false, 4, &[(0, 1, 1.0), (0, 2, 2.0), (0, 3, 3.0)]).unwrap();
/// let aug = eulerize_undirected(&mut g).unwrap();
/// assert!(g.odd_vertices().is_empty());
/// assert!((aug.added_cost - 6.0).abs() < 1e-10);
/// ```
pub fn eulerize_undirected(graph: &mut Graph) -> Result<Augmentation> {
    let odd = graph.odd_vertices();
    if odd.len() % 2 == 1 {
        return Err(PostmanError::MatchingInfeasible {
            vertices: odd.len(),
        });
    }
    if odd.is_empty() {
        debug!("all degrees even, nothing to duplicate");
        return Ok(Augmentation::default());
    }

    let paths = PathMatrix::compute(graph, &odd, &odd)?;
    debug_assert!(paths.is_symmetric(1e-6), "undirected distances must be symmetric");
    let k = odd.len();
    let mut aux = Vec::with_capacity(k * (k - 1) / 2);
    for i in 0..k {
        for j in (i + 1)..k {
            aux.push((i, j, paths.get(i, j)));
        }
    }

    let matching = min_weight_perfect_matching(k, &aux)?;
    debug!(
        odd_vertices = k,
        pairs = matching.len(),
        "matched odd-degree vertices"
    );

    let mut augmentation = Augmentation {
        rounds: 1,
        ..Augmentation::default()
    };
    for (i, j) in matching.pairs() {
        let path = paths.path(i, j)?;
        augmentation.apply(graph, &path);
    }
    Ok(augmentation)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_path_graph() {
        let mut g = Graph::from_edges(false, 3, &[(0, 1, 1.0), (1, 2, 1.0)]).expect("valid");
        let aug = eulerize_undirected(&mut g).expect("connected");
        assert_eq!(aug.added_edges, 2);
        assert_eq!(aug.matched_pairs, 1);
        assert_eq!(aug.rounds, 1);
        assert!((aug.added_cost - 2.0).abs() < 1e-10);
        assert_eq!(g.num_edges(), 4);
        assert_eq!(g.edge(2).id() + g.edge(3).id(), 1);
        for v in 0..3 {
            assert_eq!(g.degree(v) % 2, 0);
        }
    }

    #[test]
    fn test_picks_cheaper_pairing() {
        // Square 0-1-2-3-0 plus chord 0-2: odd vertices are 0 and 2.
        // Chord is the cheapest connection.
        let mut g = Graph::from_edges(
            false,
            4,
            &[(0, 1, 2.0), (1, 2, 2.0), (2, 3, 2.0), (3, 0, 2.0), (0, 2, 3.0)],
        )
        .expect("valid");
        let aug = eulerize_undirected(&mut g).expect("connected");
        assert_eq!(aug.added_edges, 1);
        assert_eq!(g.edge(5).id(), 4);
        assert!(g.odd_vertices().is_empty());
    }

    #[test]
    fn test_optimal_matching_over_six_odd_vertices() {
        // Two clusters joined by the heavy bridge 2-3.
        let edges = [
            (0, 1, 1.0),
            (1, 2, 1.0),
            (2, 3, 10.0),
            (3, 4, 1.0),
            (4, 5, 1.0),
            (1, 6, 1.0),
            (6, 2, 1.0),
            (4, 7, 1.0),
            (7, 3, 1.0),
        ];
        // Degrees: 0:1, 1:3, 2:3, 3:3, 4:3, 5:1, 6:2, 7:2.
        let mut g = Graph::from_edges(false, 8, &edges).expect("valid");
        assert_eq!(g.odd_vertices(), vec![0, 1, 2, 3, 4, 5]);
        let aug = eulerize_undirected(&mut g).expect("connected");
        // Best pairing: (0,1)=1, (2,3)=10, (4,5)=1 -> 12.
        assert!((aug.added_cost - 12.0).abs() < 1e-10);
        assert!(g.odd_vertices().is_empty());
    }

    #[test]
    fn test_disconnected() {
        let mut g = Graph::from_edges(false, 4, &[(0, 1, 1.0), (2, 3, 1.0)]).expect("valid");
        let err = eulerize_undirected(&mut g).unwrap_err();
        assert!(matches!(err, PostmanError::DisconnectedGraph { .. }));
        // Nothing was duplicated before the failure.
        assert_eq!(g.num_edges(), 2);
    }
}
