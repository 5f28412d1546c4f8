use statrs::distribution::{ContinuousCDF, StudentsT};

pub fn rmse(y: &[f64], y_hat: &[f64]) -> Option<f64> {
    if y.len() != y_hat.len() || y.is_empty() {
        return None;
    }

    let sum_sq: f64 = y.iter().zip(y_hat.iter()).map(|(&yi, &yhi)| (yi - yhi).powi(2)).sum();

    Some((sum_sq / y.len() as f64).sqrt())
}

/// Coefficient of determination. Undefined below two points. With no variance in `y` the
/// score is 1.0 for a perfect fit and 0.0 otherwise.
pub fn r2_from_predictions(y: &[f64], y_hat: &[f64]) -> Option<f64> {
    if y.len() != y_hat.len() || y.len() < 2 {
        return None;
    }

    let y_mean = y.iter().sum::<f64>() / y.len() as f64;

    let ss_res: f64 = y.iter().zip(y_hat).map(|(&yi, &yhi)| (yi - yhi).powi(2)).sum();
    let ss_tot: f64 = y.iter().map(|&yi| (yi - y_mean).powi(2)).sum();

    if ss_tot == 0.0 {
        return Some(if ss_res == 0.0 { 1.0 } else { 0.0 });
    }

    Some(1.0 - ss_res / ss_tot)
}

pub fn adjusted_r2(r2: f64, n: usize, k: usize) -> f64 {
    if n <= k + 1 {
        return r2; // Not enough data to adjust
    }
    1.0 - (1.0 - r2) * (n as f64 - 1.0) / (n as f64 - k as f64 - 1.0)
}

/// Two-sided p-value of the slope against zero. `None` when the t statistic is undefined:
/// fewer than three points, no variance in x, or a perfect fit.
pub fn slope_p_value(x: &[f64], y: &[f64], slope: f64, y_hat: &[f64]) -> Option<f64> {
    if x.len() != y.len() || y.len() != y_hat.len() || x.len() < 3 {
        return None;
    }
    let n = x.len() as f64;
    let x_mean = x.iter().sum::<f64>() / n;
    let ss_xx: f64 = x.iter().map(|xi| (xi - x_mean).powi(2)).sum();
    let rss: f64 = y.iter().zip(y_hat).map(|(&yi, &yhi)| (yi - yhi).powi(2)).sum();

    let sigma = (rss / (n - 2.0)).sqrt();
    let se_slope = sigma / ss_xx.sqrt();
    if !se_slope.is_finite() || se_slope <= 0.0 {
        return None;
    }
    let t_stat = slope / se_slope;
    if !t_stat.is_finite() {
        return None;
    }
    let dist = StudentsT::new(0.0, 1.0, n - 2.0).ok()?;
    Some(2.0 * (1.0 - dist.cdf(t_stat.abs())))
}
