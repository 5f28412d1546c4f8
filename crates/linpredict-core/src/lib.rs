pub mod dataset;
pub mod error;
pub mod model;
pub mod plot;
pub mod predictionlog;
pub mod predictor;
pub mod stats;

pub use dataset::Dataset;
pub use error::{DatasetError, ExportError, PlotError, PredictorError};
pub use model::LinearModel;
pub use predictionlog::PredictionLog;
pub use predictor::Predictor;
