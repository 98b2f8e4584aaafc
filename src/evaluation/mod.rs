//! Walk verification and cost breakdown.
//!
//! - [`TourEvaluator`] — checks a walk against its problem
//! - [`TourCost`] — total, required and deadhead cost

mod evaluator;

pub use evaluator::{TourCost, TourEvaluator};
