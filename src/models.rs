// ABOUTME: Domain types for fitness estimation - sex, activity rating, profile, estimate
// ABOUTME: Plain data carriers with serde support; range validation lives with the algorithms

use crate::errors::AppError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Biological sex used to select the sex-specific estimation formulas
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum Sex {
    /// Male (higher maximal HR plateau, non-exercise estimate offset +10.987)
    Male,
    /// Female
    Female,
}

impl Sex {
    /// Canonical lowercase name, matching the serialized form
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Male => "male",
            Self::Female => "female",
        }
    }
}

impl fmt::Display for Sex {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Sex {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "male" => Ok(Self::Male),
            "female" => Ok(Self::Female),
            other => Err(AppError::invalid_input(format!(
                "Unknown sex: '{other}'. Valid options: male, female"
            ))),
        }
    }
}

/// Self-reported physical activity rating on the 11-point NASA/JSC scale
///
/// An ordinal 0-10 scale used as a proxy for exercise habit in the
/// non-exercise `VO2max` model. Band descriptions follow the original
/// questionnaire wording (running mileage, walking mileage, or comparable
/// weekly activity time).
///
/// # Scientific References
///
/// - Jackson, A.S. et al. (1990). "Prediction of functional aerobic capacity without exercise testing." *Med Sci Sports Exerc*, 22(6), 863-870.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, PartialOrd, Ord)]
#[serde(try_from = "u8", into = "u8")]
pub struct ActivityLevel(u8);

impl ActivityLevel {
    /// Highest defined rating (high-volume endurance training)
    pub const MAX: u8 = 10;

    /// Create a rating, rejecting values outside the 0-10 scale
    ///
    /// # Errors
    ///
    /// Returns `AppError::InvalidInput` if `value` exceeds [`Self::MAX`]
    pub fn new(value: u8) -> Result<Self, AppError> {
        if value > Self::MAX {
            return Err(AppError::invalid_input(format!(
                "Activity level must be between 0 and {}, got {value}",
                Self::MAX
            )));
        }
        Ok(Self(value))
    }

    /// The raw 0-10 rating
    #[must_use]
    pub const fn value(&self) -> u8 {
        self.0
    }

    /// Questionnaire band description for this rating
    #[must_use]
    pub const fn description(&self) -> &'static str {
        match self.0 {
            0 => "Avoid walking or exertion, e.g. always use elevator, drive whenever possible instead of walking",
            1 => "Walk for pleasure, routinely use stairs, or occasionally exercise sufficiently to cause heavy breathing or perspiration",
            2 => "10 to 60 minutes of exercise per week",
            3 => "Over one hour of exercise per week",
            4 => "Run about 1 mile per week, walk about 1.3 miles per week, or about 30 minutes per week of comparable physical activity",
            5 => "Run 1 to 5 miles per week, walk 1.3 to 6 miles per week, or 30 to 60 minutes per week of comparable physical activity",
            6 => "Run 6 to 10 miles per week, walk 7 to 13 miles per week, or 1 to 3 hours per week of comparable physical activity",
            7 => "Run 11 to 15 miles per week, walk 14 to 20 miles per week, or 4 to 6 hours per week of comparable physical activity",
            8 => "Run 16 to 20 miles per week, walk 21 to 26 miles per week, or 6 to 8 hours per week of comparable physical activity",
            9 => "Run 21 to 25 miles per week, walk 27 to 33 miles per week, or 9 to 11 hours per week of comparable physical activity",
            _ => "Run over 25 miles per week, walk over 34 miles per week, or over 12 hours per week of comparable physical activity",
        }
    }
}

impl fmt::Display for ActivityLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl TryFrom<u8> for ActivityLevel {
    type Error = AppError;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<ActivityLevel> for u8 {
    fn from(level: ActivityLevel) -> Self {
        level.value()
    }
}

impl FromStr for ActivityLevel {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let value: u8 = s.parse().map_err(|_| {
            AppError::invalid_input(format!(
                "Activity level must be an integer between 0 and {}, got '{s}'",
                Self::MAX
            ))
        })?;
        Self::new(value)
    }
}

/// Resting biometrics and activity self-assessment for one person
///
/// The six inputs the estimator consumes. A plain data carrier: range
/// validation happens inside the estimation chain so errors carry the
/// offending value in context.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
pub struct FitnessProfile {
    /// Chronological age in years
    pub age: f64,
    /// Biological sex
    pub sex: Sex,
    /// Body weight in kilograms
    pub weight_kg: f64,
    /// Height in centimeters
    pub height_cm: f64,
    /// Resting heart rate in beats per minute
    pub resting_hr: f64,
    /// Self-reported physical activity rating (0-10)
    pub activity_level: ActivityLevel,
}

/// Complete fitness estimation result
///
/// Rounded headline numbers plus every intermediate quantity in the
/// estimation chain, so callers can surface the breakdown.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FitnessEstimate {
    /// Estimated `VO2max`, rounded to the nearest integer (ml/kg/min)
    pub vo2max: i32,

    /// Estimated fitness age, rounded to the nearest integer (years)
    pub fitness_age: i32,

    /// Unrounded combined `VO2max` estimate (ml/kg/min)
    pub vo2max_raw: f64,

    /// Unrounded fitness age (years)
    pub fitness_age_raw: f64,

    /// Body mass index (kg/m²)
    pub bmi: f64,

    /// Non-exercise `VO2max` estimate from the activity questionnaire model (ml/kg/min)
    pub vo2max_non_exercise: f64,

    /// Heart-rate-ratio `VO2max` estimate (ml/kg/min)
    pub vo2max_heart_rate_ratio: f64,

    /// Estimated maximal heart rate (bpm)
    pub max_heart_rate: f64,

    /// All-cause mortality / CVD morbidity risk relative to a `VO2max` of 35
    pub relative_risk: f64,
}
