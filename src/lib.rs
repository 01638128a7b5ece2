// ABOUTME: Main library entry point for the fitage fitness estimation engine
// ABOUTME: Estimates VO2max and fitness age from resting biometrics and an activity rating
//
// SPDX-License-Identifier: MIT OR Apache-2.0

#![deny(unsafe_code)]

//! # fitage
//!
//! A cardiorespiratory fitness estimation engine. Given age, biological
//! sex, weight, height, resting heart rate, and a self-reported physical
//! activity rating, it estimates `VO2max` (ml/kg/min) and a derived
//! "fitness age" in years.
//!
//! The estimate combines two independent models via their harmonic mean:
//!
//! - **Non-exercise model**: a regression on age, BMI, and the 0-10
//!   activity rating (Jackson et al. 1990)
//! - **Heart rate ratio method**: `15.3 x HRmax / HRrest`, with maximal HR
//!   from sex-specific logistic-decay reference formulas (Uth et al. 2004;
//!   Farazdaghi & Wohlfart 2001/2003)
//!
//! Fitness age maps the combined `VO2max` onto the all-cause mortality
//! dose-response reported by Ekblom-Bak et al. (2019).
//!
//! The whole computation is pure and synchronous: no state, no I/O, and
//! every call with the same profile returns the same estimate. Invalid
//! input surfaces as a recoverable [`errors::AppError`], never a panic.
//!
//! ## Example
//!
//! ```rust
//! use fitage::models::{ActivityLevel, FitnessProfile, Sex};
//!
//! let profile = FitnessProfile {
//!     age: 40.0,
//!     sex: Sex::Female,
//!     weight_kg: 65.0,
//!     height_cm: 168.0,
//!     resting_hr: 58.0,
//!     activity_level: ActivityLevel::new(6)?,
//! };
//!
//! let estimate = fitage::estimate_fitness(&profile)?;
//! println!(
//!     "VO2max {} ml/kg/min, fitness age {}",
//!     estimate.vo2max, estimate.fitness_age
//! );
//! # Ok::<(), fitage::errors::AppError>(())
//! ```

/// Unified error handling
pub mod errors;
/// Fitness estimation algorithms and constants
pub mod intelligence;
/// Domain types
pub mod models;

pub use errors::{AppError, AppResult, ErrorCode};
pub use intelligence::estimate_fitness;
pub use models::{ActivityLevel, FitnessEstimate, FitnessProfile, Sex};
