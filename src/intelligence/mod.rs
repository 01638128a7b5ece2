// ABOUTME: Fitness intelligence module - estimation algorithms and physiological constants
// ABOUTME: Pure arithmetic over resting biometrics; no state, no I/O

/// Estimation algorithm building blocks
pub mod algorithms;
/// The top-level estimation operation
pub mod estimator;
/// Literature-sourced model coefficients
pub mod physiological_constants;

pub use estimator::estimate_fitness;
