// ABOUTME: VO2max estimation from resting data - non-exercise model and heart rate ratio method
// ABOUTME: Implements the Jackson questionnaire model, the Uth HRmax/HRrest method, and their combination

use crate::errors::{AppError, AppResult};
use crate::intelligence::physiological_constants::{heart_rate_ratio, non_exercise};
use crate::models::{ActivityLevel, Sex};

/// Compute body mass index from weight and height
///
/// Formula: `BMI = weight_kg / (height_cm / 100)^2`
///
/// # Errors
///
/// Returns `AppError::InvalidInput` if weight or height is not positive
pub fn body_mass_index(weight_kg: f64, height_cm: f64) -> AppResult<f64> {
    if weight_kg <= 0.0 {
        return Err(AppError::invalid_input(format!(
            "Weight must be positive, got {weight_kg} kg"
        )));
    }
    if height_cm <= 0.0 {
        return Err(AppError::invalid_input(format!(
            "Height must be positive, got {height_cm} cm"
        )));
    }

    let height_m = height_cm / 100.0;
    Ok(weight_kg / (height_m * height_m))
}

/// Estimate `VO2max` without exercise testing
///
/// Regression on age, BMI, and the 0-10 physical activity rating, with an
/// additive offset for males:
///
/// `VO2max = 56.363 + 1.921 x rating - 0.754 x BMI - 0.381 x age (+ 10.987 if male)`
///
/// # Arguments
///
/// * `age` - Age in years (must be positive)
/// * `sex` - Biological sex
/// * `bmi` - Body mass index (kg/m²), see [`body_mass_index`]
/// * `activity_level` - Self-reported 0-10 activity rating
///
/// # Scientific References
///
/// - Jackson, A.S. et al. (1990). "Prediction of functional aerobic capacity without exercise testing." *Med Sci Sports Exerc*, 22(6), 863-870.
///
/// # Errors
///
/// Returns `AppError::InvalidInput` if `age` is not positive
pub fn estimate_non_exercise(
    age: f64,
    sex: Sex,
    bmi: f64,
    activity_level: ActivityLevel,
) -> AppResult<f64> {
    if age <= 0.0 {
        return Err(AppError::invalid_input(format!(
            "Age must be positive, got {age}"
        )));
    }

    let rating = f64::from(activity_level.value());
    let mut vo2max = non_exercise::INTERCEPT + non_exercise::ACTIVITY_RATING_COEF * rating
        - non_exercise::BMI_COEF * bmi
        - non_exercise::AGE_COEF * age;

    if sex == Sex::Male {
        vo2max += non_exercise::MALE_OFFSET;
    }

    Ok(vo2max)
}

/// Estimate `VO2max` from the ratio between maximal and resting heart rate
///
/// Formula: `VO2max = 15.3 x HRmax / HRrest`
///
/// # Arguments
///
/// * `max_hr` - Maximal heart rate in bpm (must be positive)
/// * `resting_hr` - Resting heart rate in bpm (must be positive; it is the divisor)
///
/// # Scientific References
///
/// - Uth, N. et al. (2004). "Estimation of VO2max from the ratio between HRmax and HRrest - the Heart Rate Ratio Method." *Eur J Appl Physiol*, 91(1), 111-115.
///
/// # Errors
///
/// Returns `AppError::InvalidInput` if either heart rate is not positive
pub fn estimate_from_heart_rate_ratio(max_hr: f64, resting_hr: f64) -> AppResult<f64> {
    if max_hr <= 0.0 {
        return Err(AppError::invalid_input(format!(
            "Maximal heart rate must be positive, got {max_hr} bpm"
        )));
    }
    if resting_hr <= 0.0 {
        return Err(AppError::invalid_input(format!(
            "Resting heart rate must be positive, got {resting_hr} bpm"
        )));
    }

    Ok(heart_rate_ratio::RATIO_FACTOR * max_hr / resting_hr)
}

/// Combine two independent `VO2max` estimates via their harmonic mean
///
/// Formula: `VO2max = 2 x a x b / (a + b)`
///
/// The harmonic mean weighs the lower estimate more heavily than the
/// arithmetic mean, so one optimistic estimate cannot dominate.
#[must_use]
pub fn combine_estimates(vo2max_1: f64, vo2max_2: f64) -> f64 {
    2.0 * vo2max_1 * vo2max_2 / (vo2max_1 + vo2max_2)
}
