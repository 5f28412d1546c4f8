use crate::stats::{adjusted_r2, r2_from_predictions, rmse, slope_p_value, FitResult, LinReg};

use std::fmt;

/// A fitted line together with its in-sample goodness-of-fit statistics.
#[derive(Clone, Debug)]
pub struct LinearModel {
    pub model: LinReg,
    pub r2: Option<f64>,
    pub adjusted_r2: Option<f64>,
    pub rmse: f64,
    pub p_value: Option<f64>,
    pub n: usize,
}

impl fmt::Display for LinearModel {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(
            f,
            "{}, n: {}, r2: {}, adj r2: {}, rmse: {:.4}, p: {}",
            self.model,
            self.n,
            fmt_opt(self.r2),
            fmt_opt(self.adjusted_r2),
            self.rmse,
            fmt_opt(self.p_value),
        )
    }
}

fn fmt_opt(value: Option<f64>) -> String {
    value.map_or("n/a".to_string(), |v| format!("{v:.4}"))
}

impl LinearModel {
    pub fn from_data(x: &[f64], y: &[f64]) -> FitResult<Self> {
        let model = LinReg::train(x, y)?;

        let y_hat: Vec<f64> = x.iter().map(|&xi| model.calculate(xi)).collect();
        let r2 = r2_from_predictions(y, &y_hat);

        Ok(Self {
            model,
            r2,
            adjusted_r2: r2.map(|r2| adjusted_r2(r2, x.len(), 1)),
            rmse: rmse(y, &y_hat).unwrap_or(0.0),
            p_value: slope_p_value(x, y, model.slope, &y_hat),
            n: x.len(),
        })
    }

    pub fn predict(&self, x: f64) -> f64 {
        self.model.calculate(x)
    }
    pub fn slope(&self) -> f64 {
        self.model.slope
    }
    pub fn intercept(&self) -> f64 {
        self.model.intercept
    }
}
