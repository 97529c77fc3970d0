//! Metric formulas for each activity.
//!
//! Every record implements [`Training`]. Distance and mean speed have default
//! implementations driven by the record's step (or stroke) length; swimming
//! overrides mean speed to use pool length and laps instead.

use crate::{
    Activity, ActivityKind, InfoMessage, Metrics, Running, SportsWalking, Swimming, Workout,
};

pub const M_IN_KM: f64 = 1000.0;
pub const MIN_IN_H: f64 = 60.0;

/// Metres covered per step, for running and walking
pub const STEP_LENGTH_M: f64 = 0.65;

/// Metres covered per swimming stroke
pub const STROKE_LENGTH_M: f64 = 1.38;

const RUN_SPEED_MULTIPLIER: f64 = 18.0;
const RUN_SPEED_SHIFT: f64 = 1.79;

const WALK_WEIGHT_MULTIPLIER: f64 = 0.035;
const WALK_SPEED_HEIGHT_MULTIPLIER: f64 = 0.029;
const KMH_IN_MSEC: f64 = 0.278;
const CM_IN_M: f64 = 100.0;

const SWIM_SPEED_SHIFT: f64 = 1.1;
const SWIM_WEIGHT_MULTIPLIER: f64 = 2.0;

/// Capability shared by every workout record
pub trait Training {
    fn kind(&self) -> ActivityKind;

    fn workout(&self) -> &Workout;

    /// Distance covered by one step or stroke, in metres
    fn unit_length_m(&self) -> f64 {
        STEP_LENGTH_M
    }

    /// Distance in km
    fn distance(&self) -> f64 {
        self.workout().action_count() as f64 * self.unit_length_m() / M_IN_KM
    }

    /// Mean speed in km/h
    fn mean_speed(&self) -> f64 {
        self.distance() / self.workout().duration_hours()
    }

    /// Calories burned, in kcal
    fn spent_calories(&self) -> f64;

    fn metrics(&self) -> Metrics {
        Metrics {
            distance_km: self.distance(),
            mean_speed_kmh: self.mean_speed(),
            calories_kcal: self.spent_calories(),
        }
    }

    fn summary(&self) -> InfoMessage {
        let metrics = self.metrics();
        InfoMessage::new(
            self.kind().display_name(),
            self.workout().duration_hours(),
            metrics.distance_km,
            metrics.mean_speed_kmh,
            metrics.calories_kcal,
        )
    }
}

impl Training for Running {
    fn kind(&self) -> ActivityKind {
        ActivityKind::Running
    }

    fn workout(&self) -> &Workout {
        &self.workout
    }

    fn spent_calories(&self) -> f64 {
        let w = &self.workout;
        (RUN_SPEED_MULTIPLIER * self.mean_speed() + RUN_SPEED_SHIFT) * w.weight_kg() / M_IN_KM
            * w.duration_hours()
            * MIN_IN_H
    }
}

impl Training for SportsWalking {
    fn kind(&self) -> ActivityKind {
        ActivityKind::Walking
    }

    fn workout(&self) -> &Workout {
        &self.workout
    }

    fn spent_calories(&self) -> f64 {
        let w = &self.workout;
        let speed_msec = self.mean_speed() * KMH_IN_MSEC;
        let height_m = self.height_cm() / CM_IN_M;

        (WALK_WEIGHT_MULTIPLIER * w.weight_kg()
            + (speed_msec.powi(2) / height_m) * WALK_SPEED_HEIGHT_MULTIPLIER * w.weight_kg())
            * w.duration_hours()
            * MIN_IN_H
    }
}

impl Training for Swimming {
    fn kind(&self) -> ActivityKind {
        ActivityKind::Swimming
    }

    fn workout(&self) -> &Workout {
        &self.workout
    }

    fn unit_length_m(&self) -> f64 {
        STROKE_LENGTH_M
    }

    fn mean_speed(&self) -> f64 {
        self.pool_length_m() * self.pool_laps() as f64 / M_IN_KM / self.workout.duration_hours()
    }

    fn spent_calories(&self) -> f64 {
        let w = &self.workout;
        (self.mean_speed() + SWIM_SPEED_SHIFT) * SWIM_WEIGHT_MULTIPLIER * w.weight_kg()
            * w.duration_hours()
    }
}

impl Training for Activity {
    fn kind(&self) -> ActivityKind {
        Activity::kind(self)
    }

    fn workout(&self) -> &Workout {
        match self {
            Activity::Running(r) => r.workout(),
            Activity::Walking(w) => w.workout(),
            Activity::Swimming(s) => s.workout(),
        }
    }

    fn unit_length_m(&self) -> f64 {
        match self {
            Activity::Running(r) => r.unit_length_m(),
            Activity::Walking(w) => w.unit_length_m(),
            Activity::Swimming(s) => s.unit_length_m(),
        }
    }

    fn distance(&self) -> f64 {
        match self {
            Activity::Running(r) => r.distance(),
            Activity::Walking(w) => w.distance(),
            Activity::Swimming(s) => s.distance(),
        }
    }

    fn mean_speed(&self) -> f64 {
        match self {
            Activity::Running(r) => r.mean_speed(),
            Activity::Walking(w) => w.mean_speed(),
            Activity::Swimming(s) => s.mean_speed(),
        }
    }

    fn spent_calories(&self) -> f64 {
        match self {
            Activity::Running(r) => r.spent_calories(),
            Activity::Walking(w) => w.spent_calories(),
            Activity::Swimming(s) => s.spent_calories(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const EPS: f64 = 1e-9;

    fn assert_close(actual: f64, expected: f64) {
        assert!(
            (actual - expected).abs() < EPS,
            "expected {expected}, got {actual}"
        );
    }

    #[test]
    fn test_running_distance_per_step() {
        for steps in [0, 1, 1000, 15000, 123_457] {
            let run = Running::new(steps, 1.5, 70.0).unwrap();
            assert_close(run.distance(), steps as f64 * 0.00065);
        }
    }

    #[test]
    fn test_running_metrics() {
        let run = Running::new(15000, 1.0, 75.0).unwrap();
        assert_close(run.distance(), 9.75);
        assert_close(run.mean_speed(), 9.75);
        assert_close(run.spent_calories(), 797.805);
    }

    #[test]
    fn test_walking_metrics() {
        let walk = SportsWalking::new(9000, 1.0, 75.0, 180.0).unwrap();
        assert_close(walk.distance(), 5.85);
        assert_close(walk.mean_speed(), 5.85);

        let speed_msec: f64 = 5.85 * 0.278;
        let expected = (0.035 * 75.0 + (speed_msec.powi(2) / 1.8) * 0.029 * 75.0) * 60.0;
        assert_close(walk.spent_calories(), expected);
        assert!((walk.spent_calories() - 349.252).abs() < 1e-3);
    }

    #[test]
    fn test_swimming_metrics() {
        let swim = Swimming::new(720, 1.0, 80.0, 25.0, 40).unwrap();
        assert_close(swim.distance(), 0.9936);
        assert_close(swim.mean_speed(), 1.0);
        assert_close(swim.spent_calories(), 336.0);
    }

    #[test]
    fn test_swimming_speed_uses_pool_not_strokes() {
        let run = Running::new(720, 1.0, 80.0).unwrap();
        let swim = Swimming::new(720, 1.0, 80.0, 25.0, 40).unwrap();
        assert!((run.mean_speed() - swim.mean_speed()).abs() > EPS);
        assert_close(swim.mean_speed(), 25.0 * 40.0 / 1000.0);
    }

    #[test]
    fn test_speed_scales_with_duration() {
        let run = Running::new(15000, 2.0, 75.0).unwrap();
        assert_close(run.mean_speed(), 4.875);
    }

    #[test]
    fn test_activity_dispatch_matches_variant() {
        let swim = Swimming::new(720, 1.0, 80.0, 25.0, 40).unwrap();
        let activity = Activity::Swimming(swim);
        assert_eq!(activity.metrics(), swim.metrics());
        assert_eq!(Training::kind(&activity), ActivityKind::Swimming);
        assert_close(activity.unit_length_m(), STROKE_LENGTH_M);
    }
}
