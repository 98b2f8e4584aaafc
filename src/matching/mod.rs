//! General-graph matching for pairing imbalanced vertices.
//!
//! - [`max_weight_matching`] — Edmonds' blossom algorithm, O(n³)
//! - [`min_weight_perfect_matching`] — perfect matching of least total weight
//! - [`Matching`] — mate table result

mod blossom;
mod mates;

pub use blossom::max_weight_matching;
pub use mates::Matching;

use crate::error::{PostmanError, Result};

/// Finds a perfect matching of minimum total weight.
///
/// Runs [`max_weight_matching`] in maximum-cardinality mode on negated
/// weights. Fails with [`PostmanError::MatchingInfeasible`] when
/// `vertex_count` is odd or the edges admit no perfect matching.
///
/// # Examples
///
/// ```
/// use u_postman::matching::min_weight_perfect_matching;
///
/// // Square 0-1-2-3 with expensive diagonals.
/// let edges = [
///     (0, 1, 1.0), (1, 2, 4.0), (2, 3, 1.0), (3, 0, 4.0),
///     (0, 2, 9.0), (1, 3, 9.0),
/// ];
/// let m = min_weight_perfect_matching(4, &edges).unwrap();
/// assert_eq!(m.pairs(), vec![(0, 1), (2, 3)]);
/// ```
pub fn min_weight_perfect_matching(
    vertex_count: usize,
    edges: &[(usize, usize, f64)],
) -> Result<Matching> {
    if vertex_count % 2 == 1 {
        return Err(PostmanError::MatchingInfeasible {
            vertices: vertex_count,
        });
    }
    let negated: Vec<(usize, usize, f64)> = edges.iter().map(|&(u, v, w)| (u, v, -w)).collect();
    let matching = max_weight_matching(vertex_count, &negated, true);
    if !matching.is_perfect() {
        return Err(PostmanError::MatchingInfeasible {
            vertices: vertex_count,
        });
    }
    Ok(matching)
}
