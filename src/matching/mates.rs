//! Matching result type.

/// A set of vertex pairs in which no vertex appears twice.
///
/// Stored as a mate table: `mate(v)` is the vertex paired with `v`.
///
/// # Examples
///
/// ```
/// use u_postman::matching::Matching;
///
/// let m = Matching::from_pairs(4, &[(0, 3), (2, 1)]);
/// assert_eq!(m.mate(3), Some(0));
/// assert_eq!(m.pairs(), vec![(0, 3), (1, 2)]);
/// assert!(m.is_perfect());
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Matching {
    mate: Vec<Option<usize>>,
}

impl Matching {
    /// Wraps a mate table.
    pub fn new(mate: Vec<Option<usize>>) -> Self {
        Self { mate }
    }

    /// Builds a matching over `vertex_count` vertices from explicit pairs.
    ///
    /// # Panics
    ///
    /// Panics if a vertex is out of range.
    pub fn from_pairs(vertex_count: usize, pairs: &[(usize, usize)]) -> Self {
        let mut mate = vec![None; vertex_count];
        for &(u, v) in pairs {
            mate[u] = Some(v);
            mate[v] = Some(u);
        }
        Self { mate }
    }

    /// Number of vertices the matching is defined over.
    pub fn vertex_count(&self) -> usize {
        self.mate.len()
    }

    /// Partner of `v`, if matched.
    pub fn mate(&self, v: usize) -> Option<usize> {
        self.mate[v]
    }

    /// Matched pairs `(u, v)` with `u < v`, ordered by `u`.
    pub fn pairs(&self) -> Vec<(usize, usize)> {
        self.mate
            .iter()
            .enumerate()
            .filter_map(|(u, m)| m.filter(|&v| u < v).map(|v| (u, v)))
            .collect()
    }

    /// Number of matched pairs.
    pub fn len(&self) -> usize {
        self.mate.iter().filter(|m| m.is_some()).count() / 2
    }

    /// `true` if nothing is matched.
    pub fn is_empty(&self) -> bool {
        self.mate.iter().all(Option::is_none)
    }

    /// `true` if every vertex is matched.
    pub fn is_perfect(&self) -> bool {
        self.mate.iter().all(Option::is_some)
    }

    /// Sum of the heaviest edge weight between each matched pair.
    ///
    /// Pairs with no edge in `edges` contribute nothing.
    pub fn total_weight(&self, edges: &[(usize, usize, f64)]) -> f64 {
        self.pairs()
            .into_iter()
            .filter_map(|(u, v)| {
                edges
                    .iter()
                    .filter(|&&(a, b, _)| (a == u && b == v) || (a == v && b == u))
                    .map(|&(_, _, w)| w)
                    .max_by(f64::total_cmp)
            })
            .sum()
    }
}
