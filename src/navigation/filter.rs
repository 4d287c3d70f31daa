use crate::robot::IsRobot;
use crate::world::{MotionModel, RangeMeasurementModel};
use std::fmt::Display;
use tracing::trace;

/// Averages `samples` distance readings, at least one.
pub fn average_distance<Robot: IsRobot>(robot: &mut Robot, samples: usize) -> f64 {
    let samples = samples.max(1);
    let sum: f64 = (0..samples).map(|_| robot.read_distance_sensor()).sum();
    sum / samples as f64
}

/// Belief about the range to the wall ahead
#[derive(Clone, Debug, PartialEq)]
pub struct RangeBelief {
    /// mean of the range belief
    pub mean: f64,
    /// covariance of the range belief
    pub covariance: f64,
}

impl Default for RangeBelief {
    fn default() -> Self {
        Self {
            mean: 0.0,
            covariance: 100.0,
        }
    }
}

/// One dimensional Kalman filter tracking the range to the wall the robot is driving towards.
///
/// Predicted with the commanded energy, updated with noisy distance readings.
#[derive(Clone, Debug, Default)]
pub struct RangeFilter {
    /// number of predictions so far
    pub steps: u64,
    /// belief about the range
    pub range: RangeBelief,
}

impl Display for RangeFilter {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "(steps: {}, range: {} +/- {})",
            self.steps,
            self.range.mean,
            self.range.covariance.sqrt()
        )
    }
}

impl RangeFilter {
    const MOTION_MODEL: MotionModel = MotionModel {};

    /// Starts from the average of `samples` readings.
    pub fn from_average(average: f64, samples: usize) -> Self {
        const RANGE_STD_DEV: f64 = RangeMeasurementModel::RANGE_STD_DEV;
        Self {
            steps: 0,
            range: RangeBelief {
                mean: average,
                covariance: RANGE_STD_DEV * RANGE_STD_DEV / samples.max(1) as f64,
            },
        }
    }

    /// Prediction step of the filter
    ///
    /// Moving towards the wall shrinks the range by the energy plus the expected overshoot.
    pub fn prediction(&mut self, energy: f64) {
        self.steps += 1;
        self.range.mean -= energy + Self::MOTION_MODEL.mean_overshoot(energy);
        self.range.covariance += Self::MOTION_MODEL.overshoot_variance(energy);
        trace!("predicted {}", self);
    }

    /// Update step of the filter
    ///
    /// Fuses a single distance reading.
    pub fn update(&mut self, noisy_range: f64) {
        const RANGE_STD_DEV: f64 = RangeMeasurementModel::RANGE_STD_DEV;

        let innovation = noisy_range - self.range.mean;
        let innovation_covariance = self.range.covariance + RANGE_STD_DEV * RANGE_STD_DEV;
        let kalman_gain = self.range.covariance / innovation_covariance;
        self.range.mean += kalman_gain * innovation;
        self.range.covariance *= 1.0 - kalman_gain;
    }
}
