use crate::error::{DemoError, Result};
use crate::library::{Vec3, euclidean_magnitude, magnitude};

/// Seconds between switching the unscaled and scaled vector pairs.
pub const SWITCH_INTERVAL: f32 = 5.0;
/// Smallest scalar applied to a vector (inclusive).
pub const SCALAR_MIN: i32 = 2;
/// Largest scalar applied to a vector (inclusive).
pub const SCALAR_MAX: i32 = 10;

/// Which length the classification and the geometric dot product use.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Norm {
    /// Two smaller sides only, see [`magnitude`].
    #[default]
    Legacy,
    Euclidean,
}

impl Norm {
    pub fn function(self) -> fn(Vec3) -> f32 {
        match self {
            Norm::Legacy => magnitude,
            Norm::Euclidean => euclidean_magnitude,
        }
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct DemoConfig {
    pub switch_interval: f32,
    pub scalar_min: i32,
    pub scalar_max: i32,
    pub seed: Option<u64>,
    pub norm: Norm,
}

impl Default for DemoConfig {
    fn default() -> Self {
        DemoConfig {
            switch_interval: SWITCH_INTERVAL,
            scalar_min: SCALAR_MIN,
            scalar_max: SCALAR_MAX,
            seed: None,
            norm: Norm::default(),
        }
    }
}

impl DemoConfig {
    pub fn validate(&self) -> Result<()> {
        if !self.switch_interval.is_finite() || self.switch_interval <= 0.0 {
            return Err(DemoError::InvalidInterval(self.switch_interval));
        }
        if self.scalar_min > self.scalar_max {
            return Err(DemoError::InvalidScalarRange {
                min: self.scalar_min,
                max: self.scalar_max,
            });
        }
        Ok(())
    }
}

/// Checks a host-supplied fixed time step.
pub fn validate_time_step(dt: f32) -> Result<f32> {
    if !dt.is_finite() || dt <= 0.0 {
        return Err(DemoError::InvalidTimeStep(dt));
    }
    Ok(dt)
}
