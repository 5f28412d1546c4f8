use std::fmt;
use std::str::FromStr;

#[derive(Debug)]
pub struct ParseMenuError(String);

impl fmt::Display for ParseMenuError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
impl std::error::Error for ParseMenuError {}

#[derive(Debug, PartialEq, Eq, Clone, Copy)]
pub enum MenuChoice {
    Predict,
    AddPoint,
    AddBulk,
    ShowAccuracy,
    Plot,
    Export,
    Reset,
    Exit,
}

impl MenuChoice {
    pub fn all() -> &'static [MenuChoice] {
        &[
            MenuChoice::Predict,
            MenuChoice::AddPoint,
            MenuChoice::AddBulk,
            MenuChoice::ShowAccuracy,
            MenuChoice::Plot,
            MenuChoice::Export,
            MenuChoice::Reset,
            MenuChoice::Exit,
        ]
    }
    pub fn as_int(&self) -> u8 {
        match self {
            MenuChoice::Predict => 1,
            MenuChoice::AddPoint => 2,
            MenuChoice::AddBulk => 3,
            MenuChoice::ShowAccuracy => 4,
            MenuChoice::Plot => 5,
            MenuChoice::Export => 6,
            MenuChoice::Reset => 7,
            MenuChoice::Exit => 8,
        }
    }
}

impl FromStr for MenuChoice {
    type Err = ParseMenuError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        match s {
            "1" => Ok(MenuChoice::Predict),
            "2" => Ok(MenuChoice::AddPoint),
            "3" => Ok(MenuChoice::AddBulk),
            "4" => Ok(MenuChoice::ShowAccuracy),
            "5" => Ok(MenuChoice::Plot),
            "6" => Ok(MenuChoice::Export),
            "7" => Ok(MenuChoice::Reset),
            "8" => Ok(MenuChoice::Exit),
            other => Err(ParseMenuError(format!("invalid option: {other}"))),
        }
    }
}

impl fmt::Display for MenuChoice {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MenuChoice::Predict => write!(f, "Make a prediction"),
            MenuChoice::AddPoint => write!(f, "Add a new data point"),
            MenuChoice::AddBulk => write!(f, "Add data in bulk"),
            MenuChoice::ShowAccuracy => write!(f, "Show model accuracy"),
            MenuChoice::Plot => write!(f, "Show prediction chart"),
            MenuChoice::Export => write!(f, "Export predictions"),
            MenuChoice::Reset => write!(f, "Reset the model"),
            MenuChoice::Exit => write!(f, "Exit"),
        }
    }
}
