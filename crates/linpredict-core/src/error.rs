use crate::stats::FitError;

#[derive(thiserror::Error, Debug)]
pub enum DatasetError {
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
    #[error("malformed dataset file: {0}")]
    Json(#[from] serde_json::Error),
    #[error("X and y have different lengths: {len_x} vs {len_y}")]
    LengthMismatch { len_x: usize, len_y: usize },
    #[error("dataset has no points")]
    Empty,
    #[error("X row {index} has {width} values, expected exactly 1")]
    BadRow { index: usize, width: usize },
}

#[derive(thiserror::Error, Debug)]
pub enum ExportError {
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
    #[error("csv error: {0}")]
    Csv(#[from] csv::Error),
}

#[derive(thiserror::Error, Debug)]
pub enum PlotError {
    #[error("no predictions made yet, make a prediction first")]
    NoPredictions,
    #[error("failed to draw plot: {0}")]
    Draw(String),
}

#[derive(thiserror::Error, Debug)]
pub enum PredictorError {
    #[error(transparent)]
    Dataset(#[from] DatasetError),
    #[error("fit failed: {0}")]
    Fit(#[from] FitError),
}
