use crate::error::ExportError;

use csv::Writer;
use log::info;

use std::path::Path;

pub const DEFAULT_EXPORT_FILE: &str = "predictions.csv";
pub const EXPORT_HEADER: [&str; 2] = ["Input", "Prediction"];

/// Predictions made during the current run, in the order they were requested.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct PredictionLog {
    entries: Vec<(f64, f64)>,
}

impl PredictionLog {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, input: f64, prediction: f64) {
        self.entries.push((input, prediction));
    }
    pub fn clear(&mut self) {
        self.entries.clear();
    }
    pub fn entries(&self) -> &[(f64, f64)] {
        &self.entries
    }
    pub fn len(&self) -> usize {
        self.entries.len()
    }
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Writes `Input,Prediction` followed by one row per entry, replacing any existing file.
    pub fn export(&self, path: &Path) -> Result<(), ExportError> {
        let mut wtr = Writer::from_path(path)?;
        wtr.write_record(EXPORT_HEADER)?;
        for (input, prediction) in &self.entries {
            wtr.write_record(&[input.to_string(), prediction.to_string()])?;
        }
        wtr.flush()?;
        info!("exported {} predictions to {}", self.len(), path.display());
        Ok(())
    }
}
