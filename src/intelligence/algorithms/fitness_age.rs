// ABOUTME: Fitness age derivation - maps VO2max to relative mortality risk, then to a biological age delta
// ABOUTME: Based on the Ekblom-Bak dose-response between cardiorespiratory fitness and all-cause mortality

use crate::intelligence::physiological_constants::mortality_risk;

/// Relative all-cause mortality / CVD morbidity risk for a given `VO2max`
///
/// Risk decreases by 2.3% per 1 ml/kg/min above the population reference
/// `VO2max` of 35, with no significant sex differences:
///
/// `risk = (1 - 0.023)^(VO2max - 35)`
///
/// A value below 1.0 means lower risk than the reference population.
///
/// # Scientific References
///
/// - Ekblom-Bak, E. et al. (2019). "Sex- and age-specific associations between cardiorespiratory fitness, CVD morbidity and all-cause mortality in 266,109 adults." *Prev Med*, 127, 105799.
#[must_use]
pub fn relative_mortality_risk(vo2max: f64) -> f64 {
    (1.0 - mortality_risk::RISK_REDUCTION_PER_UNIT).powf(vo2max - mortality_risk::REFERENCE_VO2MAX)
}

/// Estimate fitness age from chronological age and `VO2max`
///
/// Converts the relative risk ratio into a biological age delta at ten
/// years per natural-log unit of risk, then shifts chronological age by
/// that delta:
///
/// `fitness_age = age - (-10 x ln(risk))`
///
/// A `VO2max` above the reference of 35 yields a fitness age below
/// chronological age; below the reference, above it. At exactly the
/// reference the two ages coincide.
#[must_use]
pub fn estimate_fitness_age(age: f64, vo2max: f64) -> f64 {
    let years_delta = -mortality_risk::YEARS_PER_LOG_RISK * relative_mortality_risk(vo2max).ln();
    age - years_delta
}
