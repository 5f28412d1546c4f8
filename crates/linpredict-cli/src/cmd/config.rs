use crate::session::Session;

use linpredict_core::{Predictor, PredictorError};

use log::info;

use std::io::{self, Write};
use std::path::PathBuf;

/* =================== Public configuration types =================== */

#[derive(Debug, Clone)]
pub struct Config {
    pub data_path: PathBuf,
    pub plot_path: PathBuf,
    pub action: Action,
}

#[derive(Debug, Clone)]
pub enum Action {
    Interactive,
    Summary,
    Predict(Vec<f64>),
}

/* =================== Error type (no process::exit) =================== */

#[derive(thiserror::Error, Debug)]
pub enum CmdError {
    #[error(transparent)]
    Predictor(#[from] PredictorError),
    #[error("io error: {0}")]
    Io(#[from] io::Error),
    #[error("{0}")]
    Msg(String),
}

/* =================== Entry point =================== */

impl Config {
    pub fn run(&self) -> Result<(), CmdError> {
        let predictor = Predictor::load(&self.data_path).map_err(|e| {
            CmdError::Msg(format!("Failed to load '{}': {}", self.data_path.display(), e))
        })?;
        info!("loaded {} points from {}", predictor.dataset().len(), self.data_path.display());

        let stdout = io::stdout();
        match &self.action {
            Action::Interactive => {
                let stdin = io::stdin();
                let mut session = Session::new(predictor, &self.plot_path, stdin.lock(), stdout);
                session.run()
            },
            Action::Summary => self.run_summary(&predictor, &mut stdout.lock()),
            Action::Predict(values) => self.run_predict(&predictor, values, &mut stdout.lock()),
        }
    }
}

/* =================== Actions =================== */

impl Config {
    fn run_summary(&self, predictor: &Predictor, out: &mut impl Write) -> Result<(), CmdError> {
        let fit = predictor.fit();
        writeln!(out, "data: {}", self.data_path.display())?;
        writeln!(out, "points: {}", predictor.dataset().len())?;
        writeln!(out, "slope: {:.4}", fit.slope())?;
        writeln!(out, "intercept: {:.4}", fit.intercept())?;
        match fit.r2 {
            Some(r2) => writeln!(out, "r2: {r2:.4}")?,
            None => writeln!(out, "r2: n/a")?,
        }
        writeln!(out, "rmse: {:.4}", fit.rmse)?;
        Ok(())
    }

    fn run_predict(
        &self,
        predictor: &Predictor,
        values: &[f64],
        out: &mut impl Write,
    ) -> Result<(), CmdError> {
        for &value in values {
            writeln!(out, "{value}\t{:.2}", predictor.predict(value))?;
        }
        Ok(())
    }
}
