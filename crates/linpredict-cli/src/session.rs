use crate::cmd::config::CmdError;
use crate::input::{is_confirmation, parse_count, parse_number, ParseInputError};
use crate::menu::MenuChoice;

use linpredict_core::plot::plot_predictions;
use linpredict_core::predictionlog::DEFAULT_EXPORT_FILE;
use linpredict_core::{PlotError, Predictor};

use log::{debug, warn};

use std::io::{BufRead, Write};
use std::path::{Path, PathBuf};

enum Step {
    Continue,
    Quit,
}

/// Outcome of reading one value from the user.
enum Entry<T> {
    Value(T),
    Invalid(ParseInputError),
    Eof,
}

/// The interactive menu. Reads choices from `input` until exit or end of input, writing all
/// feedback to `out`.
pub struct Session<R, W> {
    predictor: Predictor,
    plot_path: PathBuf,
    input: R,
    out: W,
}

impl<R: BufRead, W: Write> Session<R, W> {
    pub fn new(predictor: Predictor, plot_path: impl Into<PathBuf>, input: R, out: W) -> Self {
        Self { predictor, plot_path: plot_path.into(), input, out }
    }

    pub fn into_parts(self) -> (Predictor, W) {
        (self.predictor, self.out)
    }

    pub fn run(&mut self) -> Result<(), CmdError> {
        writeln!(self.out, "Welcome to the advanced prediction model!")?;
        writeln!(self.out, "Make predictions, add new data and analyse the model.")?;

        loop {
            self.print_menu()?;
            let Some(line) = self.prompt("Choose an option (1-8): ")? else {
                writeln!(self.out)?;
                break;
            };
            let choice = match line.parse::<MenuChoice>() {
                Ok(choice) => choice,
                Err(e) => {
                    debug!("{e}");
                    writeln!(self.out, "Invalid option, please try again.")?;
                    continue;
                },
            };
            if let Step::Quit = self.dispatch(choice)? {
                break;
            }
        }
        Ok(())
    }

    fn print_menu(&mut self) -> Result<(), CmdError> {
        writeln!(self.out, "\n--- Menu ---")?;
        for choice in MenuChoice::all() {
            writeln!(self.out, "{}. {}", choice.as_int(), choice)?;
        }
        Ok(())
    }

    fn dispatch(&mut self, choice: MenuChoice) -> Result<Step, CmdError> {
        match choice {
            MenuChoice::Predict => self.predict(),
            MenuChoice::AddPoint => self.add_point(),
            MenuChoice::AddBulk => self.add_bulk(),
            MenuChoice::ShowAccuracy => self.show_accuracy(),
            MenuChoice::Plot => self.plot(),
            MenuChoice::Export => self.export(),
            MenuChoice::Reset => self.reset(),
            MenuChoice::Exit => {
                writeln!(self.out, "Exiting the program. Have a nice day!")?;
                Ok(Step::Quit)
            },
        }
    }

    fn predict(&mut self) -> Result<Step, CmdError> {
        let value = match self.read_with("Enter a number to predict: ", parse_number)? {
            Entry::Value(v) => v,
            Entry::Invalid(e) => return self.invalid(e, "Please enter a valid number!"),
            Entry::Eof => return Ok(Step::Quit),
        };
        let prediction = self.predictor.predict_logged(value);
        writeln!(self.out, "Predicted value for {value}: {prediction:.2}")?;
        Ok(Step::Continue)
    }

    fn add_point(&mut self) -> Result<Step, CmdError> {
        match self.read_and_update()? {
            Entry::Value(()) => {
                writeln!(self.out, "New data added and model updated!")?;
                Ok(Step::Continue)
            },
            Entry::Invalid(e) => self.invalid(e, "Please enter valid numbers!"),
            Entry::Eof => Ok(Step::Quit),
        }
    }

    // points added before an invalid entry stay in the dataset
    fn add_bulk(&mut self) -> Result<Step, CmdError> {
        let text = "How many data points do you want to add? ";
        let count = match self.read_with(text, parse_count)? {
            Entry::Value(n) => n,
            Entry::Invalid(e) => return self.invalid(e, "Please enter valid numbers!"),
            Entry::Eof => return Ok(Step::Quit),
        };
        for _ in 0..count.max(0) {
            match self.read_and_update()? {
                Entry::Value(()) => {},
                Entry::Invalid(e) => return self.invalid(e, "Please enter valid numbers!"),
                Entry::Eof => return Ok(Step::Quit),
            }
        }
        writeln!(self.out, "Bulk data added and model updated!")?;
        Ok(Step::Continue)
    }

    fn read_and_update(&mut self) -> Result<Entry<()>, CmdError> {
        let x = match self.read_with("New input value (x): ", parse_number)? {
            Entry::Value(v) => v,
            Entry::Invalid(e) => return Ok(Entry::Invalid(e)),
            Entry::Eof => return Ok(Entry::Eof),
        };
        let y = match self.read_with("New output value (y): ", parse_number)? {
            Entry::Value(v) => v,
            Entry::Invalid(e) => return Ok(Entry::Invalid(e)),
            Entry::Eof => return Ok(Entry::Eof),
        };
        self.predictor.update(x, y)?;
        Ok(Entry::Value(()))
    }

    fn show_accuracy(&mut self) -> Result<Step, CmdError> {
        match self.predictor.score() {
            Some(r2) => writeln!(self.out, "Model accuracy (R² score): {r2:.2}")?,
            None => writeln!(self.out, "Model accuracy (R² score): undefined for a single point")?,
        }
        writeln!(self.out, "Fit: {}", self.predictor.fit())?;
        Ok(Step::Continue)
    }

    fn plot(&mut self) -> Result<Step, CmdError> {
        match plot_predictions(self.predictor.predictions(), &self.plot_path) {
            Ok(()) => {
                writeln!(self.out, "Prediction chart saved to '{}'.", self.plot_path.display())?
            },
            Err(PlotError::NoPredictions) => {
                writeln!(self.out, "No predictions made yet, make a prediction first.")?
            },
            Err(e) => {
                warn!("{e}");
                writeln!(self.out, "Could not draw the chart: {e}")?
            },
        }
        Ok(Step::Continue)
    }

    fn export(&mut self) -> Result<Step, CmdError> {
        let Some(name) = self.prompt("File name for the predictions (e.g. predictions.csv): ")?
        else {
            return Ok(Step::Quit);
        };
        let name = match name.trim() {
            "" => DEFAULT_EXPORT_FILE.to_string(),
            other => other.to_string(),
        };
        match self.predictor.export(Path::new(&name)) {
            Ok(()) => writeln!(self.out, "Predictions saved to '{name}'.")?,
            Err(e) => {
                warn!("export to {name} failed: {e}");
                writeln!(self.out, "Error while saving the file: {e}")?
            },
        }
        Ok(Step::Continue)
    }

    fn reset(&mut self) -> Result<Step, CmdError> {
        let Some(answer) = self.prompt("Are you sure you want to reset the model? (yes/no): ")?
        else {
            return Ok(Step::Quit);
        };
        if is_confirmation(&answer) {
            self.predictor.reset()?;
            writeln!(self.out, "Model reset!")?;
        } else {
            debug!("reset declined");
        }
        Ok(Step::Continue)
    }

    fn invalid(&mut self, e: ParseInputError, message: &str) -> Result<Step, CmdError> {
        debug!("{e}");
        writeln!(self.out, "{message}")?;
        Ok(Step::Continue)
    }

    fn read_with<T>(
        &mut self,
        text: &str,
        parse: fn(&str) -> Result<T, ParseInputError>,
    ) -> Result<Entry<T>, CmdError> {
        Ok(match self.prompt(text)? {
            Some(line) => match parse(&line) {
                Ok(v) => Entry::Value(v),
                Err(e) => Entry::Invalid(e),
            },
            None => Entry::Eof,
        })
    }

    /// Prints `text` and reads one line. `None` at end of input. Invalid UTF-8 is replaced so
    /// it fails to parse like any other bad entry.
    fn prompt(&mut self, text: &str) -> Result<Option<String>, CmdError> {
        write!(self.out, "{text}")?;
        self.out.flush()?;
        // bytes, not read_line: invalid UTF-8 is bad input, not an io failure
        let mut buf = Vec::new();
        if self.input.read_until(b'\n', &mut buf)? == 0 {
            return Ok(None);
        }
        let line = String::from_utf8_lossy(&buf);
        Ok(Some(line.trim_end_matches(&['\r', '\n'][..]).to_string()))
    }
}
