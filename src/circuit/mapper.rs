//! Mapping walk steps back to the caller's edge indices.

use crate::error::{PostmanError, Result};

use super::Circuit;

/// Translates each step of `circuit` into an index of `original_edges`.
///
/// Every step carries the id of the caller edge it was built from; the id is
/// accepted if that edge joins the step's endpoints (exact orientation when
/// `directed`, either orientation otherwise). Failing that, the first edge
/// joining the endpoints is used. A step no edge joins fails with
/// [`PostmanError::EdgeLookup`].
///
/// # Examples
///
/// ```
/// use u_postman::models::Graph;
/// use u_postman::circuit::{eulerian_circuit, map_to_original_indices};
///
/// let edges = [(0, 1), (1, 0)];
/// let g = Graph::from_edges(true, 2, &[(0, 1, 1.0), (1, 0, 1.0)]).unwrap();
/// let c = eulerian_circuit(&g, None).unwrap();
/// assert_eq!(map_to_original_indices(&c, &edges, true).unwrap(), vec![0, 1]);
/// ```
pub fn map_to_original_indices(
    circuit: &Circuit,
    original_edges: &[(usize, usize)],
    directed: bool,
) -> Result<Vec<usize>> {
    let joins = |(src, dst): (usize, usize), from: usize, to: usize| {
        (src, dst) == (from, to) || (!directed && (src, dst) == (to, from))
    };

    circuit
        .steps()
        .iter()
        .enumerate()
        .map(|(step, t)| {
            if original_edges
                .get(t.id)
                .is_some_and(|&e| joins(e, t.from, t.to))
            {
                return Ok(t.id);
            }
            original_edges
                .iter()
                .position(|&e| joins(e, t.from, t.to))
                .ok_or(PostmanError::EdgeLookup {
                    step,
                    from: t.from,
                    to: t.to,
                })
        })
        .collect()
}
