//! Session 3: Celsius/Fahrenheit converter.

use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum ConvertError {
    #[error("temperature value cannot be nil")]
    MissingValue,
    #[error("invalid unit: {0} (must be 'C' or 'F')")]
    InvalidUnit(String),
}

/// Converts from the given unit to the other one: `"C"` yields Fahrenheit,
/// `"F"` yields Celsius.
pub fn convert_temperature(value: Option<f64>, unit: &str) -> Result<f64, ConvertError> {
    let value = value.ok_or(ConvertError::MissingValue)?;
    match unit {
        "C" => Ok(value * 9.0 / 5.0 + 32.0),
        "F" => Ok((value - 32.0) * 5.0 / 9.0),
        other => Err(ConvertError::InvalidUnit(other.to_string())),
    }
}
