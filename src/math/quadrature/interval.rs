use thiserror::Error;

#[derive(Debug, Error, PartialEq)]
pub enum IntervalError {
    #[error("lower bound {0} is not strictly below upper bound {1}")]
    Degenerate(f64, f64)
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Interval {
    lower: f64,
    upper: f64
}

impl Interval {
    pub fn new(lower: f64, upper: f64) -> Result<Interval, IntervalError> {
        // NaN bounds fail the comparison as well.
        if lower < upper {
            Ok(Interval { lower, upper })
        }
        else {
            Err(IntervalError::Degenerate(lower, upper))
        }
    }

    pub fn lower(&self) -> f64 {
        self.lower
    }

    pub fn upper(&self) -> f64 {
        self.upper
    }

    pub fn width(&self) -> f64 {
        self.upper - self.lower
    }
}
