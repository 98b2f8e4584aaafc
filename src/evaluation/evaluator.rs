//! Tour evaluator that computes cost and checks coverage and continuity.

use serde::{Deserialize, Serialize};

use crate::models::{PostmanProblem, Violation, ViolationType};

/// Cost breakdown of a walk.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct TourCost {
    /// Weight of every traversal.
    pub total: f64,
    /// Weight of the first traversal of each distinct link.
    pub required: f64,
    /// `total - required`: the cost of repeated traversals.
    pub deadhead: f64,
}

/// Evaluates walks given as sequences of edge indices, checking index range,
/// continuity, coverage and (optionally) closure.
///
/// Undirected links may be traversed in either direction; the evaluator picks
/// the orientation that continues from the previous step.
///
/// # Examples
///
/// ```
/// use u_postman::models::PostmanProblem;
/// use u_postman::evaluation::TourEvaluator;
///
/// let problem = PostmanProblem::from_tuples(false, 3, &[(0, 1, 1.0), (1, 2, 2.0)]);
/// let evaluator = TourEvaluator::new(&problem);
///
/// let (cost, violations) = evaluator.evaluate(&[0, 1, 1, 0]);
/// assert!(violations.is_empty());
/// assert!((cost.total - 6.0).abs() < 1e-10);
/// assert!((cost.deadhead - 3.0).abs() < 1e-10);
/// assert_eq!(evaluator.vertex_sequence(&[0, 1, 1, 0]), vec![0, 1, 2, 1, 0]);
/// ```
pub struct TourEvaluator<'a> {
    problem: &'a PostmanProblem,
    require_closed: bool,
}

impl<'a> TourEvaluator<'a> {
    /// Creates an evaluator that requires closed walks.
    pub fn new(problem: &'a PostmanProblem) -> Self {
        Self {
            problem,
            require_closed: true,
        }
    }

    /// Sets whether an open walk is reported as a violation.
    pub fn with_require_closed(mut self, require_closed: bool) -> Self {
        self.require_closed = require_closed;
        self
    }

    /// Computes the cost of `edge_indices` and every violation found.
    ///
    /// Out-of-range indices are reported and skipped; the walk resumes from
    /// the next valid step.
    pub fn evaluate(&self, edge_indices: &[usize]) -> (TourCost, Vec<Violation>) {
        let mut violations = Vec::new();
        let mut covered = vec![false; self.problem.num_edges()];
        let mut cost = TourCost::default();

        for (step, &index) in edge_indices.iter().enumerate() {
            match self.problem.edges.get(index) {
                Some(edge) => {
                    cost.total += edge.weight;
                    if !covered[index] {
                        covered[index] = true;
                        cost.required += edge.weight;
                    }
                }
                None => violations.push(Violation::new(ViolationType::IndexOutOfRange {
                    step,
                    index,
                })),
            }
        }
        cost.deadhead = cost.total - cost.required;

        let vertices = self.walk(edge_indices, &mut violations);

        for (index, &seen) in covered.iter().enumerate() {
            if !seen {
                violations.push(Violation::new(ViolationType::EdgeNotCovered { index }));
            }
        }

        if self.require_closed {
            if let (Some(&start), Some(&end)) = (vertices.first(), vertices.last()) {
                if start != end {
                    violations.push(Violation::new(ViolationType::OpenWalk { start, end }));
                }
            }
        }

        (cost, violations)
    }

    /// Recovers the vertex sequence of a walk: its start, then the vertex
    /// reached by each step.
    ///
    /// Out-of-range indices are skipped. A break in the walk resumes at the
    /// next link's head.
    pub fn vertex_sequence(&self, edge_indices: &[usize]) -> Vec<usize> {
        self.walk(edge_indices, &mut Vec::new())
    }

    /// Orients every step, reporting discontinuities.
    ///
    /// An undirected walk is tried from both ends of its first link and the
    /// orientation with fewer breaks wins (the link's source on a tie).
    fn walk(&self, edge_indices: &[usize], violations: &mut Vec<Violation>) -> Vec<usize> {
        let steps: Vec<(usize, (usize, usize))> = edge_indices
            .iter()
            .enumerate()
            .filter_map(|(step, &i)| self.problem.edges.get(i).map(|e| (step, (e.src, e.dst))))
            .collect();

        let Some(&(_, (src, dst))) = steps.first() else {
            return Vec::new();
        };

        let mut forward = Vec::new();
        let vertices = self.walk_from(src, &steps, &mut forward);
        if self.problem.directed || forward.is_empty() || src == dst {
            violations.append(&mut forward);
            return vertices;
        }

        let mut backward = Vec::new();
        let reversed = self.walk_from(dst, &steps, &mut backward);
        if backward.len() < forward.len() {
            violations.append(&mut backward);
            reversed
        } else {
            violations.append(&mut forward);
            vertices
        }
    }

    fn walk_from(
        &self,
        start: usize,
        steps: &[(usize, (usize, usize))],
        violations: &mut Vec<Violation>,
    ) -> Vec<usize> {
        let mut vertices = Vec::with_capacity(steps.len() + 1);
        vertices.push(start);
        let mut at = start;
        for &(step, (src, dst)) in steps {
            at = if at == src {
                dst
            } else if !self.problem.directed && at == dst {
                src
            } else {
                violations.push(Violation::new(ViolationType::Discontinuous { step, at }));
                dst
            };
            vertices.push(at);
        }
        vertices
    }
}
