use thiserror::Error;

use crate::math::quadrature::interval::Interval;

#[derive(Debug, Error, PartialEq)]
pub enum PartitionError {
    #[error("a partition needs at least one computational unit")]
    Empty
}

/// N equal-width subintervals of an interval. delta_x is computed once and
/// shared by every sample.
#[derive(Clone, Copy, Debug)]
pub struct Partition {
    interval: Interval,
    units: usize,
    delta_x: f64
}

impl Partition {
    pub fn new(interval: Interval, units: usize) -> Result<Partition, PartitionError> {
        if units == 0 {
            return Err(PartitionError::Empty);
        }
        let delta_x = interval.width() / units as f64;
        Ok(Partition { interval, units, delta_x })
    }

    pub fn interval(&self) -> Interval {
        self.interval
    }

    pub fn units(&self) -> usize {
        self.units
    }

    pub fn delta_x(&self) -> f64 {
        self.delta_x
    }

    pub fn midpoint(&self, i: usize) -> f64 {
        self.interval.lower() + (i as f64 + 0.5) * self.delta_x
    }
}
