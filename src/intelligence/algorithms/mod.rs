// ABOUTME: Fitness estimation algorithms with scientific validation
// ABOUTME: Contains maximal HR, VO2max, and fitness age building blocks

/// Fitness age and relative mortality risk derivation
pub mod fitness_age;
/// Maximal heart rate estimation
pub mod maxhr;
/// `VO2max` estimation and combination
pub mod vo2max;

pub use fitness_age::{estimate_fitness_age, relative_mortality_risk};
pub use maxhr::estimate_max_heart_rate;
pub use vo2max::{
    body_mass_index, combine_estimates, estimate_from_heart_rate_ratio, estimate_non_exercise,
};
