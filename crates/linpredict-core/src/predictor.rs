use crate::dataset::Dataset;
use crate::error::{ExportError, PredictorError};
use crate::model::LinearModel;
use crate::predictionlog::PredictionLog;

use log::{debug, info};

use std::path::{Path, PathBuf};

/// Owns the dataset and keeps a line fitted to it. Every mutation refits and writes the
/// dataset back to `data_path`.
#[derive(Clone, Debug)]
pub struct Predictor {
    data_path: PathBuf,
    dataset: Dataset,
    fit: LinearModel,
    predictions: PredictionLog,
}

impl Predictor {
    /// Loads the dataset at `data_path`, or creates it with the default points when the file
    /// does not exist, then fits the model.
    pub fn load(data_path: impl Into<PathBuf>) -> Result<Self, PredictorError> {
        let data_path = data_path.into();
        let dataset = if data_path.exists() {
            Dataset::read(&data_path)?
        } else {
            info!("{} not found, starting from the default dataset", data_path.display());
            let dataset = Dataset::default();
            dataset.write(&data_path)?;
            dataset
        };
        let fit = LinearModel::from_data(dataset.xs(), dataset.ys())?;
        Ok(Self { data_path, dataset, fit, predictions: PredictionLog::new() })
    }

    pub fn save(&self) -> Result<(), PredictorError> {
        self.dataset.write(&self.data_path)?;
        Ok(())
    }

    pub fn train(&mut self) -> Result<(), PredictorError> {
        self.fit = LinearModel::from_data(self.dataset.xs(), self.dataset.ys())?;
        debug!("trained on {} points: {}", self.dataset.len(), self.fit);
        Ok(())
    }

    pub fn predict(&self, value: f64) -> f64 {
        self.fit.predict(value)
    }

    /// Predicts `value` and appends the result to this run's prediction log.
    pub fn predict_logged(&mut self, value: f64) -> f64 {
        let prediction = self.predict(value);
        self.predictions.push(value, prediction);
        prediction
    }

    pub fn update(&mut self, x: f64, y: f64) -> Result<(), PredictorError> {
        self.dataset.push(x, y);
        self.train()?;
        self.save()
    }

    /// Restores the default dataset and forgets this run's predictions.
    pub fn reset(&mut self) -> Result<(), PredictorError> {
        self.dataset = Dataset::default();
        self.predictions.clear();
        self.train()?;
        self.save()?;
        info!("model reset to the default dataset");
        Ok(())
    }

    pub fn export(&self, filename: &Path) -> Result<(), ExportError> {
        self.predictions.export(filename)
    }

    /// In-sample R² of the current fit.
    pub fn score(&self) -> Option<f64> {
        self.fit.r2
    }
    pub fn fit(&self) -> &LinearModel {
        &self.fit
    }
    pub fn dataset(&self) -> &Dataset {
        &self.dataset
    }
    pub fn predictions(&self) -> &PredictionLog {
        &self.predictions
    }
}
