use crate::stats::fiterror::{FitError, FitResult};

use log::warn;
use statrs::statistics::Statistics;

use std::fmt;

/// Ordinary least-squares line `y = intercept + slope * x`.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct LinReg {
    pub intercept: f64,
    pub slope: f64,
}

impl fmt::Display for LinReg {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "y = {:.4}x {:+.4}", self.slope, self.intercept)
    }
}

impl Default for LinReg {
    fn default() -> Self {
        Self::new()
    }
}

impl LinReg {
    pub fn new() -> Self {
        Self { intercept: 0., slope: 0. }
    }
    pub fn calculate(&self, x: f64) -> f64 {
        self.intercept + self.slope * x
    }
    pub fn from_val(intercept: f64, slope: f64) -> Self {
        Self { intercept, slope }
    }

    /// Fits y on x. With no variance in x (a single point, or every x equal) the line is
    /// flat through the mean of y.
    pub fn train(x: &[f64], y: &[f64]) -> FitResult<Self> {
        if x.len() != y.len() {
            return Err(FitError::LengthMismatch { len_x: x.len(), len_y: y.len() });
        }
        if x.is_empty() {
            return Err(FitError::NotEnoughPoints { len: 0, needed: 1 });
        }

        let avg_x = x.iter().mean();
        let avg_y = y.iter().mean();

        let x_differences_to_average: Vec<f64> = x.iter().map(|value| value - avg_x).collect();
        let ss_xx: f64 = x_differences_to_average.iter().map(|value| value.powi(2)).sum();

        // tolerance relative to the magnitude of x, so small-scale inputs still fit
        let sum_sq_x: f64 = x.iter().map(|value| value * value).sum();
        if !ss_xx.is_finite() || ss_xx <= f64::EPSILON * sum_sq_x {
            warn!("no variance in x over {} points, fitting a flat line", x.len());
            return Ok(Self { intercept: avg_y, slope: 0. });
        }

        let ss_xy: f64 = x_differences_to_average
            .iter()
            .zip(y.iter())
            .map(|(dx, value)| dx * (value - avg_y))
            .sum();
        let slope = ss_xy / ss_xx;
        let intercept = avg_y - slope * avg_x;

        Ok(Self { intercept, slope })
    }
}
