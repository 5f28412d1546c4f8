pub mod fiterror;
pub mod linreg;
pub mod stats;

pub use fiterror::{FitError, FitResult};
pub use linreg::LinReg;
pub use stats::{adjusted_r2, r2_from_predictions, rmse, slope_p_value};
