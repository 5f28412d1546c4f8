use crate::error::DatasetError;

use log::debug;
use serde::{Deserialize, Serialize};

use std::fs::File;
use std::io::{BufReader, BufWriter, Write};
use std::path::Path;

pub const DEFAULT_DATA_FILE: &str = "model_data.json";

/// On-disk layout: `{"X": [[x1], [x2], ...], "y": [y1, y2, ...]}`.
#[derive(Serialize, Deserialize)]
struct DatasetFile {
    #[serde(rename = "X")]
    x: Vec<Vec<f64>>,
    y: Vec<f64>,
}

/// Paired observations. Always holds at least one point and `xs.len() == ys.len()`.
#[derive(Clone, Debug, PartialEq)]
pub struct Dataset {
    xs: Vec<f64>,
    ys: Vec<f64>,
}

impl Default for Dataset {
    /// x = 1..=5, y = 2x
    fn default() -> Self {
        let xs: Vec<f64> = (1..=5).map(f64::from).collect();
        let ys = xs.iter().map(|x| x * 2.).collect();
        Self { xs, ys }
    }
}

impl Dataset {
    pub fn new(xs: Vec<f64>, ys: Vec<f64>) -> Result<Self, DatasetError> {
        if xs.len() != ys.len() {
            return Err(DatasetError::LengthMismatch { len_x: xs.len(), len_y: ys.len() });
        }
        if xs.is_empty() {
            return Err(DatasetError::Empty);
        }
        Ok(Self { xs, ys })
    }

    pub fn xs(&self) -> &[f64] {
        &self.xs
    }
    pub fn ys(&self) -> &[f64] {
        &self.ys
    }
    pub fn len(&self) -> usize {
        self.xs.len()
    }
    pub fn is_empty(&self) -> bool {
        self.xs.is_empty()
    }

    pub fn push(&mut self, x: f64, y: f64) {
        self.xs.push(x);
        self.ys.push(y);
    }

    pub fn read(path: &Path) -> Result<Self, DatasetError> {
        let file = File::open(path)?;
        let raw: DatasetFile = serde_json::from_reader(BufReader::new(file))?;

        let mut xs = Vec::with_capacity(raw.x.len());
        for (index, row) in raw.x.iter().enumerate() {
            match row.as_slice() {
                [x] => xs.push(*x),
                _ => return Err(DatasetError::BadRow { index, width: row.len() }),
            }
        }
        let dataset = Self::new(xs, raw.y)?;
        debug!("read {} points from {}", dataset.len(), path.display());
        Ok(dataset)
    }

    /// Overwrites `path` with the current points.
    pub fn write(&self, path: &Path) -> Result<(), DatasetError> {
        let raw = DatasetFile { x: self.xs.iter().map(|&x| vec![x]).collect(), y: self.ys.clone() };
        let mut writer = BufWriter::new(File::create(path)?);
        serde_json::to_writer(&mut writer, &raw)?;
        writer.flush()?;
        debug!("wrote {} points to {}", self.len(), path.display());
        Ok(())
    }
}
