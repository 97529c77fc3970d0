//! Sensor package dispatch.
//!
//! Maps an activity tag and its positional values to a validated record.

use crate::{Activity, ActivityKind, Error, Result, Running, SportsWalking, Swimming};

/// Build an activity record from a sensor tag and its values
///
/// Value layout per tag:
/// - `RUN`: count, duration (h), weight (kg)
/// - `WLK`: count, duration (h), weight (kg), height (cm)
/// - `SWM`: count, duration (h), weight (kg), pool length (m), laps
pub fn build_activity(tag: &str, values: &[f64]) -> Result<Activity> {
    let kind: ActivityKind = tag.parse()?;

    let expected = kind.expected_values();
    if values.len() != expected {
        return Err(Error::ArityMismatch {
            tag: tag.to_string(),
            expected,
            actual: values.len(),
        });
    }

    let count = whole_number("action count", values[0])?;
    let (duration, weight) = (values[1], values[2]);

    let activity = match kind {
        ActivityKind::Running => Activity::Running(Running::new(count, duration, weight)?),
        ActivityKind::Walking => {
            Activity::Walking(SportsWalking::new(count, duration, weight, values[3])?)
        }
        ActivityKind::Swimming => {
            let laps = whole_number("pool laps", values[4])?;
            Activity::Swimming(Swimming::new(count, duration, weight, values[3], laps)?)
        }
    };

    tracing::debug!("Built {:?} from package {}", activity, tag);
    Ok(activity)
}

/// Convert a counter value to u32, rejecting fractions and negatives
fn whole_number(field: &str, value: f64) -> Result<u32> {
    if !value.is_finite() || value < 0.0 || value.fract() != 0.0 || value > u32::MAX as f64 {
        return Err(Error::InvalidInput(format!(
            "{field} must be a whole non-negative number, got {value}"
        )));
    }
    Ok(value as u32)
}
