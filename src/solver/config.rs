//! Solver configuration.

use serde::{Deserialize, Serialize};

/// Shape of the walk the solver returns.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum WalkKind {
    /// Always a closed walk: duplicate links until every vertex is balanced.
    #[default]
    Circuit,
    /// Accept an open walk when the network already has an Eulerian trail
    /// (two odd vertices, or one surplus pair when directed); otherwise as
    /// [`WalkKind::Circuit`].
    Path,
}

/// Configuration for [`PostmanSolver`](super::PostmanSolver).
///
/// # Examples
///
/// ```
/// use u_postman::solver::{SolverConfig, WalkKind};
///
/// let config = SolverConfig::default()
///     .with_start_vertex(2)
///     .with_walk(WalkKind::Path)
///     .without_verification();
/// assert_eq!(config.start_vertex, Some(2));
/// assert!(!config.verify);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SolverConfig {
    /// Vertex a closed walk starts and ends at. Defaults to the lowest vertex
    /// with a link. Ignored for open walks, which start at a trail endpoint.
    pub start_vertex: Option<usize>,
    /// Walk shape.
    pub walk: WalkKind,
    /// Re-check the walk with [`TourEvaluator`](crate::evaluation::TourEvaluator)
    /// before returning it.
    pub verify: bool,
}

impl Default for SolverConfig {
    fn default() -> Self {
        Self {
            start_vertex: None,
            walk: WalkKind::Circuit,
            verify: true,
        }
    }
}

impl SolverConfig {
    /// Sets the start vertex.
    pub fn with_start_vertex(mut self, vertex: usize) -> Self {
        self.start_vertex = Some(vertex);
        self
    }

    /// Sets the walk shape.
    pub fn with_walk(mut self, walk: WalkKind) -> Self {
        self.walk = walk;
        self
    }

    /// Skips the final verification pass.
    pub fn without_verification(mut self) -> Self {
        self.verify = false;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let c = SolverConfig::default();
        assert_eq!(c.start_vertex, None);
        assert_eq!(c.walk, WalkKind::Circuit);
        assert!(c.verify);
    }

    #[test]
    fn test_deserialize_partial() {
        let c: SolverConfig = serde_json::from_str(r#"{"walk":"path"}"#).expect("valid json");
        assert_eq!(c.walk, WalkKind::Path);
        assert!(c.verify);
        assert_eq!(c.start_vertex, None);
    }
}
