use std::fmt;

#[derive(Debug, PartialEq)]
pub struct ParseInputError(String);

impl fmt::Display for ParseInputError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
impl std::error::Error for ParseInputError {}

/// Parses a finite number. `NaN` and infinities are refused since they can't be stored.
pub fn parse_number(s: &str) -> Result<f64, ParseInputError> {
    let s = s.trim();
    match s.parse::<f64>() {
        Ok(v) if v.is_finite() => Ok(v),
        Ok(_) => Err(ParseInputError(format!("not a finite number: {s}"))),
        Err(_) => Err(ParseInputError(format!("not a number: {s}"))),
    }
}

pub fn parse_count(s: &str) -> Result<i64, ParseInputError> {
    let s = s.trim();
    s.parse::<i64>().map_err(|_| ParseInputError(format!("not a whole number: {s}")))
}

pub fn is_confirmation(s: &str) -> bool {
    matches!(s.trim().to_lowercase().as_str(), "yes" | "y" | "evet" | "e")
}
