//! Dense table of shortest paths between two vertex sets.

use crate::error::{PostmanError, Result};
use crate::models::Graph;

use super::{Path, ShortestPathTree};

/// Shortest-path costs from every `row` vertex to every `col` vertex,
/// stored row-major, plus one [`ShortestPathTree`] per row for recovering
/// the actual paths.
///
/// Dijkstra runs once per row vertex; the tree is reused for every column.
///
/// # Examples
///
/// ```
/// use u_postman::models::Graph;
/// use u_postman::distance::PathMatrix;
///
/// let g = Graph::from_edges(false, 3, &[(0, 1, 1.0), (1, 2, 2.0)]).unwrap();
/// let m = PathMatrix::compute(&g, &[0, 2], &[0, 2]).unwrap();
/// assert!((m.get(0, 1) - 3.0).abs() < 1e-10);
/// assert_eq!(m.path(1, 0).unwrap().vertices, vec![2, 1, 0]);
/// ```
#[derive(Debug, Clone)]
pub struct PathMatrix {
    rows: Vec<usize>,
    cols: Vec<usize>,
    data: Vec<f64>,
    trees: Vec<ShortestPathTree>,
}

impl PathMatrix {
    /// Computes all `rows × cols` shortest paths.
    ///
    /// Fails with [`PostmanError::DisconnectedGraph`]
    /// as soon as one column vertex is unreachable from a row vertex.
    pub fn compute(graph: &Graph, rows: &[usize], cols: &[usize]) -> Result<Self> {
        let mut data = Vec::with_capacity(rows.len() * cols.len());
        let mut trees = Vec::with_capacity(rows.len());
        for &source in rows {
            let tree = ShortestPathTree::compute(graph, source);
            for &target in cols {
                let cost = tree
                    .cost_to(target)
                    .ok_or(PostmanError::DisconnectedGraph {
                        from: source,
                        to: target,
                    })?;
                data.push(cost);
            }
            trees.push(tree);
        }
        Ok(Self {
            rows: rows.to_vec(),
            cols: cols.to_vec(),
            data,
            trees,
        })
    }

    /// Cost from row `i` to column `j`.
    ///
    /// # Panics
    ///
    /// Panics if either index is out of bounds.
    pub fn get(&self, i: usize, j: usize) -> f64 {
        self.data[i * self.cols.len() + j]
    }

    /// Shortest path from row `i` to column `j`.
    pub fn path(&self, i: usize, j: usize) -> Result<Path> {
        self.trees[i].path_to(self.cols[j])
    }

    /// Row vertices.
    pub fn rows(&self) -> &[usize] {
        &self.rows
    }

    /// Column vertices.
    pub fn cols(&self) -> &[usize] {
        &self.cols
    }

    /// Returns `true` if the matrix is symmetric within the given tolerance.
    ///
    /// Only meaningful when rows and columns are the same vertex list.
    pub fn is_symmetric(&self, tol: f64) -> bool {
        if self.rows != self.cols {
            return false;
        }
        let n = self.rows.len();
        for i in 0..n {
            for j in (i + 1)..n {
                if (self.get(i, j) - self.get(j, i)).abs() > tol {
                    return false;
                }
            }
        }
        true
    }
}
