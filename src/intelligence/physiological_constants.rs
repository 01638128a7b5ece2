//! Physiological constants based on sports science research
//!
//! This module contains the fixed model coefficients used by the fitness
//! estimation chain. These values are taken directly from peer-reviewed
//! research and are not calibrated or fitted at runtime.

/// Non-exercise `VO2max` model coefficients
///
/// References:
/// - Jackson, A.S. et al. (1990). Prediction of functional aerobic capacity without exercise testing.
///   Medicine and Science in Sports and Exercise, 22(6), 863-870.
pub mod non_exercise {
    /// Model intercept (ml/kg/min)
    pub const INTERCEPT: f64 = 56.363;

    /// Gain per point on the 0-10 physical activity rating scale
    pub const ACTIVITY_RATING_COEF: f64 = 1.921;

    /// Loss per BMI unit
    pub const BMI_COEF: f64 = 0.754;

    /// Loss per year of age
    pub const AGE_COEF: f64 = 0.381;

    /// Additive offset applied for males
    pub const MALE_OFFSET: f64 = 10.987;
}

/// Logistic-decay maximal heart rate model parameters
///
/// Sex-specific logistic functions of age, in place of the classic linear
/// "220 - age" rule.
///
/// References:
/// - Farazdaghi, G.R. & Wohlfart, B. (2001). Reference values for the physical work capacity
///   on a bicycle ergometer for women between 20 and 80 years of age. Clinical Physiology, 21(6), 682-687.
/// - Wohlfart, B. & Farazdaghi, G.R. (2003). Reference values for the physical work capacity
///   on a bicycle ergometer for men. Clinical Physiology and Functional Imaging, 23(3), 166-170.
pub mod max_hr {
    /// Young-age heart rate plateau for males (bpm)
    pub const MALE_PLATEAU: f64 = 203.7;

    /// Logistic decay rate for males (1/year)
    pub const MALE_DECAY_RATE: f64 = 0.033;

    /// Logistic midpoint age for males (years)
    pub const MALE_MIDPOINT_AGE: f64 = 104.3;

    /// Young-age heart rate plateau for females (bpm)
    pub const FEMALE_PLATEAU: f64 = 190.2;

    /// Logistic decay rate for females (1/year)
    pub const FEMALE_DECAY_RATE: f64 = 0.0453;

    /// Logistic midpoint age for females (years)
    pub const FEMALE_MIDPOINT_AGE: f64 = 107.5;
}

/// Heart rate ratio method factor
///
/// References:
/// - Uth, N., Sorensen, H., Overgaard, K. & Pedersen, P.K. (2004). Estimation of VO2max from
///   the ratio between HRmax and HRrest. European Journal of Applied Physiology, 91(1), 111-115.
pub mod heart_rate_ratio {
    /// `VO2max` per unit of HRmax/HRrest ratio (ml/kg/min)
    pub const RATIO_FACTOR: f64 = 15.3;
}

/// Fitness-to-mortality-risk model parameters
///
/// References:
/// - Ekblom-Bak, E. et al. (2019). Sex- and age-specific associations between cardiorespiratory
///   fitness, CVD morbidity and all-cause mortality in 266,109 adults. Preventive Medicine, 127, 105799.
pub mod mortality_risk {
    /// Reference `VO2max` at which relative risk is defined as 1.0 (ml/kg/min)
    pub const REFERENCE_VO2MAX: f64 = 35.0;

    /// All-cause mortality / CVD morbidity risk reduction per 1 ml/kg/min above reference
    pub const RISK_REDUCTION_PER_UNIT: f64 = 0.023;

    /// Years of biological age per natural-log unit of relative risk
    pub const YEARS_PER_LOG_RISK: f64 = 10.0;
}
