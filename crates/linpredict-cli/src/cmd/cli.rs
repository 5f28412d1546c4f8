use clap::{Parser, Subcommand, ValueHint};
use std::path::PathBuf;

use crate::cmd::config::{Action, Config};

use linpredict_core::dataset::DEFAULT_DATA_FILE;
use linpredict_core::plot::DEFAULT_PLOT_FILE;

#[derive(Debug, Parser)]
#[command(
    name = "linpredict",
    about = "Interactive linear regression predictor",
    version,
    disable_help_subcommand = true
)]
pub struct Cli {
    /// Path to the JSON dataset file
    #[arg(long = "data", value_name = "PATH", value_hint = ValueHint::FilePath,
        default_value = DEFAULT_DATA_FILE, global = true)]
    pub data_path: PathBuf,

    /// Where the prediction chart is rendered (PNG)
    #[arg(long = "plot", value_name = "PATH", value_hint = ValueHint::FilePath,
        default_value = DEFAULT_PLOT_FILE, global = true)]
    pub plot_path: PathBuf,

    /// Without a subcommand the interactive menu starts
    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Print the fitted line and its statistics
    Summary,

    /// Print predictions for the given inputs
    Predict {
        #[arg(required = true, num_args = 1.., allow_negative_numbers = true)]
        values: Vec<f64>,
    },
}

// -------- Map CLI -> Config/Action --------

impl Cli {
    pub fn into_config(self) -> Config {
        let action = match self.command {
            None => Action::Interactive,
            Some(Commands::Summary) => Action::Summary,
            Some(Commands::Predict { values }) => Action::Predict(values),
        };
        Config { data_path: self.data_path, plot_path: self.plot_path, action }
    }
}
