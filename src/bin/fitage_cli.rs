// ABOUTME: fitage CLI - thin wrapper collecting the six estimator inputs from flags
// ABOUTME: Prints VO2max and fitness age human-readably or as JSON
//
// SPDX-License-Identifier: MIT OR Apache-2.0
//!
//! Usage:
//! ```bash
//! # Estimate fitness for a 40 year old male
//! fitage-cli estimate --age 40 --sex male --weight 80 --height 180 \
//!     --resting-hr 60 --activity-level 5
//!
//! # Same estimate as JSON, with the full breakdown
//! fitage-cli estimate --age 40 --sex male --weight 80 --height 180 \
//!     --resting-hr 60 --activity-level 5 --json
//!
//! # Show the activity rating bands
//! fitage-cli levels
//! ```

use clap::{Parser, Subcommand};
use fitage::errors::AppResult;
use fitage::estimate_fitness;
use fitage::models::{ActivityLevel, FitnessProfile, Sex};
use tracing::info;

#[derive(Parser)]
#[command(
    name = "fitage-cli",
    about = "Cardiorespiratory fitness estimation CLI",
    long_about = "Estimates VO2max and fitness age from age, sex, weight, height, resting heart rate, and a self-reported activity rating."
)]
struct Cli {
    #[command(subcommand)]
    command: Command,

    /// Enable debug logging (shows the intermediate quantities)
    #[arg(short, long, global = true)]
    verbose: bool,
}

#[derive(Subcommand)]
enum Command {
    /// Estimate VO2max and fitness age
    Estimate {
        /// Age in years
        #[arg(long)]
        age: f64,

        /// Biological sex (male or female)
        #[arg(long)]
        sex: Sex,

        /// Body weight in kilograms
        #[arg(long)]
        weight: f64,

        /// Height in centimeters
        #[arg(long)]
        height: f64,

        /// Resting heart rate in beats per minute
        #[arg(long)]
        resting_hr: f64,

        /// Physical activity rating, 0-10 (run `fitage-cli levels` for the bands)
        #[arg(long)]
        activity_level: ActivityLevel,

        /// Output the full estimate as JSON
        #[arg(long)]
        json: bool,
    },

    /// List the 0-10 activity rating bands
    Levels,
}

fn main() -> AppResult<()> {
    let cli = Cli::parse();

    // Initialize logging
    let log_level = if cli.verbose { "debug" } else { "info" };
    tracing_subscriber::fmt().with_env_filter(log_level).init();

    match cli.command {
        Command::Estimate {
            age,
            sex,
            weight,
            height,
            resting_hr,
            activity_level,
            json,
        } => {
            let profile = FitnessProfile {
                age,
                sex,
                weight_kg: weight,
                height_cm: height,
                resting_hr,
                activity_level,
            };

            info!(%sex, age, "estimating fitness");
            let estimate = estimate_fitness(&profile)?;

            if json {
                println!("{}", serde_json::to_string_pretty(&estimate)?);
            } else {
                println!("VO2max:       {} ml/min/kg", estimate.vo2max);
                println!("Fitness age:  {} years", estimate.fitness_age);
                println!();
                println!("BMI:              {:.1} kg/m2", estimate.bmi);
                println!("Estimated max HR: {:.0} bpm", estimate.max_heart_rate);
                println!(
                    "Relative risk vs reference fitness: {:.2}",
                    estimate.relative_risk
                );
            }
        }
        Command::Levels => {
            for value in 0..=ActivityLevel::MAX {
                if let Ok(level) = ActivityLevel::new(value) {
                    println!("{value:>2}  {}", level.description());
                }
            }
        }
    }

    Ok(())
}
