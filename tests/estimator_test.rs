// ABOUTME: Integration tests for the full fitness estimation chain through the public API
// ABOUTME: Verifies the arithmetic against independently recomputed formulas plus error handling
//
// SPDX-License-Identifier: MIT OR Apache-2.0

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
#![allow(missing_docs)]

use fitage::errors::ErrorCode;
use fitage::estimate_fitness;
use fitage::models::{ActivityLevel, FitnessProfile, Sex};

const EPSILON: f64 = 1e-9;

fn profile(
    age: f64,
    sex: Sex,
    weight_kg: f64,
    height_cm: f64,
    resting_hr: f64,
    activity_level: u8,
) -> FitnessProfile {
    FitnessProfile {
        age,
        sex,
        weight_kg,
        height_cm,
        resting_hr,
        activity_level: ActivityLevel::new(activity_level).unwrap(),
    }
}

// === Reference chain ===

#[test]
fn test_reference_case_male_matches_formula_chain() {
    let estimate = estimate_fitness(&profile(40.0, Sex::Male, 80.0, 180.0, 60.0, 5)).unwrap();

    // Recompute the whole chain independently, step by step
    let bmi = 80.0 / (180.0_f64 / 100.0).powi(2);
    let vo2max_1 = 56.363 + 1.921 * 5.0 - 0.754 * bmi - 0.381 * 40.0 + 10.987;
    let max_hr = 203.7 / (1.0 + (0.033_f64 * (40.0 - 104.3)).exp());
    let vo2max_2 = 15.3 * max_hr / 60.0;
    let vo2max = 2.0 * vo2max_1 * vo2max_2 / (vo2max_1 + vo2max_2);
    let relative_risk = (1.0_f64 - 0.023).powf(vo2max - 35.0);
    let fitness_age = 40.0 - (-10.0 * relative_risk.ln());

    assert!((estimate.bmi - bmi).abs() < EPSILON);
    assert!((estimate.vo2max_non_exercise - vo2max_1).abs() < EPSILON);
    assert!((estimate.max_heart_rate - max_hr).abs() < EPSILON);
    assert!((estimate.vo2max_heart_rate_ratio - vo2max_2).abs() < EPSILON);
    assert!((estimate.vo2max_raw - vo2max).abs() < EPSILON);
    assert!((estimate.relative_risk - relative_risk).abs() < EPSILON);
    assert!((estimate.fitness_age_raw - fitness_age).abs() < EPSILON);

    // Exact equality after rounding
    assert_eq!(estimate.vo2max, vo2max.round() as i32);
    assert_eq!(estimate.fitness_age, fitness_age.round() as i32);
    assert_eq!(estimate.vo2max, 45);
    assert_eq!(estimate.fitness_age, 38);
}

#[test]
fn test_reference_case_female_matches_formula_chain() {
    let estimate = estimate_fitness(&profile(35.0, Sex::Female, 62.0, 168.0, 64.0, 4)).unwrap();

    // Female branch: no male offset, different logistic max HR parameters
    let bmi = 62.0 / (168.0_f64 / 100.0).powi(2);
    let vo2max_1 = 56.363 + 1.921 * 4.0 - 0.754 * bmi - 0.381 * 35.0;
    let max_hr = 190.2 / (1.0 + (0.0453_f64 * (35.0 - 107.5)).exp());
    let vo2max_2 = 15.3 * max_hr / 64.0;
    let vo2max = 2.0 * vo2max_1 * vo2max_2 / (vo2max_1 + vo2max_2);
    let relative_risk = (1.0_f64 - 0.023).powf(vo2max - 35.0);
    let fitness_age = 35.0 - (-10.0 * relative_risk.ln());

    assert!((estimate.vo2max_raw - vo2max).abs() < EPSILON);
    assert!((estimate.fitness_age_raw - fitness_age).abs() < EPSILON);
    assert_eq!(estimate.vo2max, vo2max.round() as i32);
    assert_eq!(estimate.fitness_age, fitness_age.round() as i32);
}

#[test]
fn test_estimate_is_deterministic() {
    let p = profile(52.0, Sex::Female, 70.0, 172.0, 58.0, 7);
    let first = estimate_fitness(&p).unwrap();
    let second = estimate_fitness(&p).unwrap();

    assert_eq!(first.vo2max, second.vo2max);
    assert_eq!(first.fitness_age, second.fitness_age);
    assert!((first.vo2max_raw - second.vo2max_raw).abs() < f64::EPSILON);
    assert!((first.fitness_age_raw - second.fitness_age_raw).abs() < f64::EPSILON);
}

// === Monotonicity ===

#[test]
fn test_vo2max_strictly_increases_with_activity_level() {
    let mut previous = f64::NEG_INFINITY;
    for level in 0..=ActivityLevel::MAX {
        let estimate = estimate_fitness(&profile(45.0, Sex::Male, 85.0, 178.0, 62.0, level))
            .unwrap();
        assert!(
            estimate.vo2max_raw > previous,
            "VO2max should strictly increase with activity level, got {} after {previous} at level {level}",
            estimate.vo2max_raw
        );
        previous = estimate.vo2max_raw;
    }
}

#[test]
fn test_vo2max_strictly_increases_as_resting_hr_drops() {
    let mut previous = f64::NEG_INFINITY;
    for resting_hr in [90.0, 80.0, 70.0, 60.0, 50.0, 40.0] {
        let estimate =
            estimate_fitness(&profile(45.0, Sex::Female, 64.0, 170.0, resting_hr, 5)).unwrap();
        assert!(
            estimate.vo2max_raw > previous,
            "VO2max should strictly increase as resting HR drops, got {} after {previous} at {resting_hr} bpm",
            estimate.vo2max_raw
        );
        previous = estimate.vo2max_raw;
    }
}

// === Boundaries ===

#[test]
fn test_boundary_activity_levels_produce_finite_results() {
    for level in [0, ActivityLevel::MAX] {
        let estimate = estimate_fitness(&profile(30.0, Sex::Male, 75.0, 182.0, 65.0, level))
            .unwrap();
        assert!(estimate.vo2max_raw.is_finite());
        assert!(estimate.fitness_age_raw.is_finite());
    }
}

#[test]
fn test_high_fitness_lowers_fitness_age() {
    // Active, low resting HR: combined VO2max well above the reference of 35
    let fit = estimate_fitness(&profile(40.0, Sex::Male, 72.0, 180.0, 48.0, 9)).unwrap();
    assert!(fit.vo2max_raw > 35.0);
    assert!(fit.fitness_age_raw < 40.0);

    // Sedentary, high resting HR, high BMI: combined VO2max below the reference
    let unfit = estimate_fitness(&profile(40.0, Sex::Male, 110.0, 170.0, 88.0, 0)).unwrap();
    assert!(unfit.vo2max_raw < 35.0);
    assert!(unfit.fitness_age_raw > 40.0);
}

// === Error handling ===

#[test]
fn test_zero_resting_hr_is_rejected() {
    let err = estimate_fitness(&profile(40.0, Sex::Male, 80.0, 180.0, 0.0, 5)).unwrap_err();
    assert_eq!(err.code, ErrorCode::InvalidInput);
}

#[test]
fn test_zero_height_is_rejected() {
    let err = estimate_fitness(&profile(40.0, Sex::Male, 80.0, 0.0, 60.0, 5)).unwrap_err();
    assert_eq!(err.code, ErrorCode::InvalidInput);
}

#[test]
fn test_negative_weight_is_rejected() {
    let err = estimate_fitness(&profile(40.0, Sex::Female, -70.0, 165.0, 60.0, 5)).unwrap_err();
    assert_eq!(err.code, ErrorCode::InvalidInput);
}

#[test]
fn test_zero_age_is_rejected() {
    let err = estimate_fitness(&profile(0.0, Sex::Female, 70.0, 165.0, 60.0, 5)).unwrap_err();
    assert_eq!(err.code, ErrorCode::InvalidInput);
}
