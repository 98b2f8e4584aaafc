//! # u-postman
//!
//! Route inspection (Chinese Postman) library: find a minimum-cost closed walk
//! that traverses every link of a directed or undirected network at least
//! once.
//!
//! ## Modules
//!
//! - [`models`] — Domain model types (Graph, Edge, PostmanProblem, PostmanTour)
//! - [`distance`] — Dijkstra shortest paths and path matrices
//! - [`matching`] — Maximum-weight and minimum-weight perfect matching (blossom)
//! - [`eulerize`] — Edge duplication until every vertex is balanced
//! - [`circuit`] — Hierholzer circuit extraction and index mapping
//! - [`evaluation`] — Walk verification and cost breakdown
//! - [`solver`] — End-to-end solver and configuration
//!
//! ## Example
//!
//! ```
//! // Path 0-1-2: both links must be walked twice to return to the start.
//! let walk = u_postman::solve(false, 3, &[(0, 1, 1.0), (1, 2, 1.0)]).unwrap();
//! assert_eq!(walk.len(), 4);
//! ```

pub mod circuit;
pub mod distance;
pub mod error;
pub mod eulerize;
pub mod evaluation;
pub mod matching;
pub mod models;
pub mod solver;

#[cfg(feature = "ffi")]
pub mod ffi;
#[cfg(feature = "wasm")]
pub mod wasm;

pub use error::{InvalidInput, PostmanError, Result};
pub use solver::solve;
