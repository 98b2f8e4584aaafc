//! Route inspection solver.
//!
//! - [`PostmanSolver`] — configurable solver returning a [`PostmanTour`]
//! - [`solve`] — one-call entry point returning edge indices
//! - [`SolverConfig`], [`WalkKind`] — solver options
//! - [`SolveRequest`] — problem plus options, as received by the bindings
//!
//! # Algorithm
//!
//! 1. Validate the links and build the working graph.
//! 2. Eulerize it ([`crate::eulerize`]): matching of odd vertices when
//!    undirected, iterative greedy matching of surplus vertices when directed.
//! 3. Extract an Eulerian walk with Hierholzer's algorithm.
//! 4. Map each step back to the caller's link index.

mod config;

pub use config::{SolverConfig, WalkKind};

use serde::{Deserialize, Serialize};
use tracing::{debug, debug_span};

use crate::circuit::{eulerian_circuit, eulerian_path, map_to_original_indices, Circuit};
use crate::error::{InvalidInput, PostmanError, Result};
use crate::eulerize::eulerize;
use crate::evaluation::TourEvaluator;
use crate::models::{Graph, PostmanProblem, PostmanTour};

/// Computes a minimum-cost walk that traverses every link at least once.
///
/// # Examples
///
/// ```
/// use u_postman::models::PostmanProblem;
/// use u_postman::solver::{PostmanSolver, SolverConfig};
///
/// let problem = PostmanProblem::from_tuples(
///     true,
///     2,
///     &[(0, 1, 1.0), (0, 1, 1.0), (1, 0, 5.0)],
/// );
/// let tour = PostmanSolver::new(SolverConfig::default()).solve(&problem).unwrap();
/// assert_eq!(tour.len(), 4);
/// assert_eq!(tour.duplicated_edges(), 1);
/// assert!((tour.total_cost() - 12.0).abs() < 1e-10);
/// ```
#[derive(Debug, Clone, Default)]
pub struct PostmanSolver {
    config: SolverConfig,
}

impl PostmanSolver {
    /// Creates a solver with the given configuration.
    pub fn new(config: SolverConfig) -> Self {
        Self { config }
    }

    /// Returns the configuration.
    pub fn config(&self) -> &SolverConfig {
        &self.config
    }

    /// Solves `problem`.
    ///
    /// # Errors
    ///
    /// - [`PostmanError::InvalidInput`] for out-of-range endpoints, bad
    ///   weights, or a start vertex that is out of range or has no links.
    /// - [`PostmanError::DisconnectedGraph`] when some link cannot be reached
    ///   (or, when directed, cannot be returned from).
    /// - [`PostmanError::InvalidTour`] if verification is enabled and fails.
    pub fn solve(&self, problem: &PostmanProblem) -> Result<PostmanTour> {
        let _span = debug_span!(
            "postman_solve",
            directed = problem.directed,
            vertices = problem.vertex_count,
            edges = problem.num_edges()
        )
        .entered();

        let mut graph = problem.build_graph()?;
        if let Some(vertex) = self.config.start_vertex {
            if vertex >= problem.vertex_count {
                return Err(InvalidInput::StartOutOfRange {
                    vertex,
                    vertex_count: problem.vertex_count,
                }
                .into());
            }
        }

        let (circuit, require_closed) = match self.open_trail(&graph)? {
            Some(trail) => (trail, false),
            None => {
                let augmentation = eulerize(&mut graph)?;
                debug!(
                    added_edges = augmentation.added_edges,
                    added_cost = augmentation.added_cost,
                    rounds = augmentation.rounds,
                    "graph eulerized"
                );
                (eulerian_circuit(&graph, self.config.start_vertex)?, true)
            }
        };

        let indices = map_to_original_indices(&circuit, &problem.endpoints(), problem.directed)?;
        let tour = PostmanTour::new(
            indices,
            circuit.vertices(),
            graph.total_weight(),
            graph.duplicate_weight(),
            graph.num_duplicates(),
        );

        if self.config.verify {
            verify_tour(problem, &tour, require_closed)?;
        }

        debug!(
            steps = tour.len(),
            total_cost = tour.total_cost(),
            deadhead_cost = tour.deadhead_cost(),
            "tour complete"
        );
        Ok(tour)
    }

    /// The open Eulerian trail of `graph`, when open walks are allowed and
    /// the graph has one without duplication.
    fn open_trail(&self, graph: &Graph) -> Result<Option<Circuit>> {
        if self.config.walk != WalkKind::Path || graph.unbalanced_vertex().is_none() {
            return Ok(None);
        }
        match eulerian_path(graph) {
            Ok(trail) => Ok(Some(trail)),
            Err(PostmanError::NotEulerian { .. }) => Ok(None),
            Err(e) => Err(e),
        }
    }
}

/// Re-checks `tour` against `problem`: every link covered, consecutive steps
/// joined and, when `require_closed`, the walk ending where it started.
fn verify_tour(problem: &PostmanProblem, tour: &PostmanTour, require_closed: bool) -> Result<()> {
    let (_, violations) = TourEvaluator::new(problem)
        .with_require_closed(require_closed)
        .evaluate(tour.edge_indices());
    if violations.is_empty() {
        Ok(())
    } else {
        Err(PostmanError::InvalidTour { violations })
    }
}

/// A problem bundled with solver options.
///
/// Serialized flat: the problem's fields plus an optional `config` object.
///
/// ```
/// use u_postman::solver::SolveRequest;
///
/// let request: SolveRequest = serde_json::from_str(
///     r#"{"directed":false,"vertex_count":2,"edges":[{"src":0,"dst":1,"weight":2.0}]}"#,
/// ).unwrap();
/// let tour = request.solve().unwrap();
/// assert_eq!(tour.edge_indices(), &[0, 0]);
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SolveRequest {
    /// The network to cover.
    #[serde(flatten)]
    pub problem: PostmanProblem,
    /// Solver options.
    #[serde(default)]
    pub config: SolverConfig,
}

impl SolveRequest {
    /// Runs [`PostmanSolver`] with the bundled options.
    pub fn solve(&self) -> Result<PostmanTour> {
        PostmanSolver::new(self.config.clone()).solve(&self.problem)
    }
}

/// Solves the route inspection problem and returns the walk as caller edge
/// indices.
///
/// `edges` holds `(src, dst, weight)` triples; the result lists indices into
/// it in traversal order, repeating links that must be walked more than once.
/// The walk is closed.
///
/// # Examples
///
/// ```
/// use u_postman::solve;
///
/// let walk = solve(false, 3, &[(0, 1, 1.0), (1, 2, 1.0), (2, 0, 1.0)]).unwrap();
/// let mut sorted = walk.clone();
/// sorted.sort();
/// assert_eq!(sorted, vec![0, 1, 2]);
/// ```
pub fn solve(
    directed: bool,
    vertex_count: usize,
    edges: &[(usize, usize, f64)],
) -> Result<Vec<usize>> {
    let problem = PostmanProblem::from_tuples(directed, vertex_count, edges);
    PostmanSolver::default()
        .solve(&problem)
        .map(PostmanTour::into_edge_indices)
}
