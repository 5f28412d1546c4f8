use crate::error::PlotError;
use crate::predictionlog::PredictionLog;

use plotters::prelude::*;

use std::fmt;
use std::path::Path;

pub const DEFAULT_PLOT_FILE: &str = "predictions.png";
pub const PLOT_WIDTH: u32 = 800;
pub const PLOT_HEIGHT: u32 = 500;

const TITLE: &str = "Prediction Chart";
const X_LABEL: &str = "Input values";
const Y_LABEL: &str = "Predicted values";
const SERIES_LABEL: &str = "Predictions";

fn draw_err<E: fmt::Display>(e: E) -> PlotError {
    PlotError::Draw(e.to_string())
}

// 5% buffer around the data, or one unit when every value is the same
fn padded_range(values: impl Iterator<Item = f64>) -> (f64, f64) {
    let (min, max) = values
        .filter(|v| v.is_finite())
        .fold((f64::INFINITY, f64::NEG_INFINITY), |(lo, hi), v| (lo.min(v), hi.max(v)));
    if !min.is_finite() || !max.is_finite() {
        return (-1., 1.);
    }
    let span = max - min;
    if span <= f64::EPSILON {
        return (min - 1., max + 1.);
    }
    (min - span * 0.05, max + span * 0.05)
}

/// Renders the prediction log as a line with circle markers into a PNG at `path`.
pub fn plot_predictions(predictions: &PredictionLog, path: &Path) -> Result<(), PlotError> {
    if predictions.is_empty() {
        return Err(PlotError::NoPredictions);
    }
    let points = predictions.entries();
    let (xmin, xmax) = padded_range(points.iter().map(|p| p.0));
    let (ymin, ymax) = padded_range(points.iter().map(|p| p.1));

    let root_area = BitMapBackend::new(path, (PLOT_WIDTH, PLOT_HEIGHT)).into_drawing_area();
    root_area.fill(&WHITE).map_err(draw_err)?;

    let mut ctx = ChartBuilder::on(&root_area)
        .caption(TITLE, ("sans-serif", 24))
        .margin(10)
        .x_label_area_size(40)
        .y_label_area_size(60)
        .build_cartesian_2d(xmin..xmax, ymin..ymax)
        .map_err(draw_err)?;

    ctx.configure_mesh().x_desc(X_LABEL).y_desc(Y_LABEL).draw().map_err(draw_err)?;

    ctx.draw_series(LineSeries::new(points.iter().copied(), &BLUE))
        .map_err(draw_err)?
        .label(SERIES_LABEL)
        .legend(|(x, y)| PathElement::new(vec![(x, y), (x + 20, y)], BLUE));
    ctx.draw_series(points.iter().map(|&point| Circle::new(point, 4, BLUE.filled())))
        .map_err(draw_err)?;

    ctx.configure_series_labels()
        .background_style(WHITE.mix(0.8))
        .border_style(BLACK)
        .draw()
        .map_err(draw_err)?;

    root_area.present().map_err(draw_err)?;
    Ok(())
}
