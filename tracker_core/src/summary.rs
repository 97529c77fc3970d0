//! Human-readable workout summaries.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Decimal places used when no precision is configured
pub const DEFAULT_PRECISION: usize = 3;

/// Summary of one workout, ready to print
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct InfoMessage {
    pub training_type: String,
    pub duration_hours: f64,
    pub distance_km: f64,
    pub mean_speed_kmh: f64,
    pub calories_kcal: f64,
}

impl InfoMessage {
    pub fn new(
        training_type: impl Into<String>,
        duration_hours: f64,
        distance_km: f64,
        mean_speed_kmh: f64,
        calories_kcal: f64,
    ) -> Self {
        Self {
            training_type: training_type.into(),
            duration_hours,
            distance_km,
            mean_speed_kmh,
            calories_kcal,
        }
    }

    /// Render the summary with three decimal places
    pub fn message(&self) -> String {
        self.message_with_precision(DEFAULT_PRECISION)
    }

    /// Render the summary with `precision` decimal places for every number
    pub fn message_with_precision(&self, precision: usize) -> String {
        format!(
            "Training type: {}; Duration: {:.p$} h; Distance: {:.p$} km; \
             Mean speed: {:.p$} km/h; Calories burned: {:.p$}.",
            self.training_type,
            self.duration_hours,
            self.distance_km,
            self.mean_speed_kmh,
            self.calories_kcal,
            p = precision,
        )
    }
}

impl fmt::Display for InfoMessage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.message())
    }
}
