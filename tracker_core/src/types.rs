//! Core domain types for Fittrack.
//!
//! This module defines the fundamental types used throughout the system:
//! - Activity kinds and their sensor tags
//! - Validated activity records (one per workout)
//! - Computed metrics
//! - Sensor packages and journal entries

use crate::{Error, InfoMessage, Result};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use uuid::Uuid;

// ============================================================================
// Activity Kinds
// ============================================================================

/// Type of workout reported by a sensor
#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "snake_case")]
pub enum ActivityKind {
    Running,
    Walking,
    Swimming,
}

impl ActivityKind {
    pub const ALL: [ActivityKind; 3] = [
        ActivityKind::Running,
        ActivityKind::Walking,
        ActivityKind::Swimming,
    ];

    /// Three-letter tag used by sensor packages
    pub fn tag(self) -> &'static str {
        match self {
            ActivityKind::Running => "RUN",
            ActivityKind::Walking => "WLK",
            ActivityKind::Swimming => "SWM",
        }
    }

    /// Name shown in summaries
    pub fn display_name(self) -> &'static str {
        match self {
            ActivityKind::Running => "Running",
            ActivityKind::Walking => "SportsWalking",
            ActivityKind::Swimming => "Swimming",
        }
    }

    /// Number of positional values a package of this kind must carry
    pub fn expected_values(self) -> usize {
        match self {
            ActivityKind::Running => 3,
            ActivityKind::Walking => 4,
            ActivityKind::Swimming => 5,
        }
    }
}

impl FromStr for ActivityKind {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s {
            "RUN" => Ok(ActivityKind::Running),
            "WLK" => Ok(ActivityKind::Walking),
            "SWM" => Ok(ActivityKind::Swimming),
            other => Err(Error::UnknownActivity(other.to_string())),
        }
    }
}

impl fmt::Display for ActivityKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.display_name())
    }
}

// ============================================================================
// Activity Records
// ============================================================================

/// Fields shared by every workout
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Workout {
    action_count: u32,
    duration_hours: f64,
    weight_kg: f64,
}

impl Workout {
    /// Create a workout, rejecting non-positive durations and negative weights
    pub fn new(action_count: u32, duration_hours: f64, weight_kg: f64) -> Result<Self> {
        if !duration_hours.is_finite() || duration_hours <= 0.0 {
            return Err(Error::InvalidInput(format!(
                "duration must be positive, got {duration_hours}"
            )));
        }
        check_magnitude("weight", weight_kg)?;

        Ok(Self {
            action_count,
            duration_hours,
            weight_kg,
        })
    }

    /// Steps or strokes recorded by the sensor
    pub fn action_count(&self) -> u32 {
        self.action_count
    }

    pub fn duration_hours(&self) -> f64 {
        self.duration_hours
    }

    pub fn weight_kg(&self) -> f64 {
        self.weight_kg
    }
}

/// Running workout
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Running {
    pub(crate) workout: Workout,
}

impl Running {
    pub fn new(action_count: u32, duration_hours: f64, weight_kg: f64) -> Result<Self> {
        Ok(Self {
            workout: Workout::new(action_count, duration_hours, weight_kg)?,
        })
    }
}

/// Sports walking workout
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SportsWalking {
    pub(crate) workout: Workout,
    height_cm: f64,
}

impl SportsWalking {
    pub fn new(
        action_count: u32,
        duration_hours: f64,
        weight_kg: f64,
        height_cm: f64,
    ) -> Result<Self> {
        let workout = Workout::new(action_count, duration_hours, weight_kg)?;
        // Height divides the calorie formula
        if !height_cm.is_finite() || height_cm <= 0.0 {
            return Err(Error::InvalidInput(format!(
                "height must be positive, got {height_cm}"
            )));
        }

        Ok(Self { workout, height_cm })
    }

    pub fn height_cm(&self) -> f64 {
        self.height_cm
    }
}

/// Pool swimming workout
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Swimming {
    pub(crate) workout: Workout,
    pool_length_m: f64,
    pool_laps: u32,
}

impl Swimming {
    pub fn new(
        action_count: u32,
        duration_hours: f64,
        weight_kg: f64,
        pool_length_m: f64,
        pool_laps: u32,
    ) -> Result<Self> {
        let workout = Workout::new(action_count, duration_hours, weight_kg)?;
        check_magnitude("pool length", pool_length_m)?;

        Ok(Self {
            workout,
            pool_length_m,
            pool_laps,
        })
    }

    pub fn pool_length_m(&self) -> f64 {
        self.pool_length_m
    }

    pub fn pool_laps(&self) -> u32 {
        self.pool_laps
    }
}

/// Any supported workout, dispatched by variant
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Activity {
    Running(Running),
    Walking(SportsWalking),
    Swimming(Swimming),
}

impl Activity {
    pub fn kind(&self) -> ActivityKind {
        match self {
            Activity::Running(_) => ActivityKind::Running,
            Activity::Walking(_) => ActivityKind::Walking,
            Activity::Swimming(_) => ActivityKind::Swimming,
        }
    }
}

fn check_magnitude(field: &str, value: f64) -> Result<()> {
    if !value.is_finite() || value < 0.0 {
        return Err(Error::InvalidInput(format!(
            "{field} must be a non-negative number, got {value}"
        )));
    }
    Ok(())
}

// ============================================================================
// Metrics
// ============================================================================

/// Values derived from one activity record
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct Metrics {
    pub distance_km: f64,
    pub mean_speed_kmh: f64,
    pub calories_kcal: f64,
}

// ============================================================================
// Packages and Journal
// ============================================================================

/// Raw sensor reading: an activity tag plus positional values
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
pub struct Package {
    pub tag: String,
    pub values: Vec<f64>,
}

impl Package {
    pub fn new(tag: impl Into<String>, values: impl Into<Vec<f64>>) -> Self {
        Self {
            tag: tag.into(),
            values: values.into(),
        }
    }
}

/// One summary recorded in the JSONL journal
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct JournalEntry {
    pub run_id: Uuid,
    pub recorded_at: DateTime<Utc>,
    pub summary: InfoMessage,
}
