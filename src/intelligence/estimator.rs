// ABOUTME: Top-level fitness estimation operation composing the algorithm chain
// ABOUTME: Profile in, VO2max + fitness age out, with every intermediate quantity reported

use crate::errors::AppResult;
use crate::intelligence::algorithms::{
    body_mass_index, combine_estimates, estimate_fitness_age, estimate_from_heart_rate_ratio,
    estimate_max_heart_rate, estimate_non_exercise, relative_mortality_risk,
};
use crate::models::{FitnessEstimate, FitnessProfile};
use tracing::debug;

/// Estimate cardiorespiratory fitness and fitness age from a profile
///
/// Runs the full estimation chain in order:
///
/// 1. BMI from weight and height
/// 2. Non-exercise `VO2max` estimate (questionnaire model)
/// 3. Sex-specific logistic maximal heart rate
/// 4. Heart-rate-ratio `VO2max` estimate
/// 5. Harmonic-mean combination of the two estimates
/// 6. Relative mortality risk versus the reference `VO2max` of 35
/// 7. Risk-to-age conversion into the fitness age
///
/// The headline numbers are rounded to the nearest integer with
/// `f64::round` (half away from zero); the unrounded values and all
/// intermediates are returned alongside them.
///
/// # Errors
///
/// Returns `AppError::InvalidInput` if age, weight, height, or resting
/// heart rate is not positive. No partial result is produced.
///
/// # Example
///
/// ```rust
/// use fitage::intelligence::estimator::estimate_fitness;
/// use fitage::models::{ActivityLevel, FitnessProfile, Sex};
///
/// let profile = FitnessProfile {
///     age: 40.0,
///     sex: Sex::Male,
///     weight_kg: 80.0,
///     height_cm: 180.0,
///     resting_hr: 60.0,
///     activity_level: ActivityLevel::new(5)?,
/// };
/// let estimate = estimate_fitness(&profile)?;
/// assert_eq!(estimate.vo2max, 45);
/// assert_eq!(estimate.fitness_age, 38);
/// # Ok::<(), fitage::errors::AppError>(())
/// ```
pub fn estimate_fitness(profile: &FitnessProfile) -> AppResult<FitnessEstimate> {
    let bmi = body_mass_index(profile.weight_kg, profile.height_cm)?;

    let vo2max_non_exercise =
        estimate_non_exercise(profile.age, profile.sex, bmi, profile.activity_level)?;
    let max_heart_rate = estimate_max_heart_rate(profile.age, profile.sex)?;
    let vo2max_heart_rate_ratio =
        estimate_from_heart_rate_ratio(max_heart_rate, profile.resting_hr)?;

    let vo2max_raw = combine_estimates(vo2max_non_exercise, vo2max_heart_rate_ratio);
    let relative_risk = relative_mortality_risk(vo2max_raw);
    let fitness_age_raw = estimate_fitness_age(profile.age, vo2max_raw);

    debug!(
        bmi,
        vo2max_non_exercise,
        max_heart_rate,
        vo2max_heart_rate_ratio,
        vo2max = vo2max_raw,
        relative_risk,
        fitness_age = fitness_age_raw,
        "fitness estimation chain complete"
    );

    Ok(FitnessEstimate {
        vo2max: vo2max_raw.round() as i32,
        fitness_age: fitness_age_raw.round() as i32,
        vo2max_raw,
        fitness_age_raw,
        bmi,
        vo2max_non_exercise,
        vo2max_heart_rate_ratio,
        max_heart_rate,
        relative_risk,
    })
}
