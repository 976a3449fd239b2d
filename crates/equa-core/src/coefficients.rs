//! Coefficient extraction from untyped JSON payloads.

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::{Error, Result};

/// Field names every equation payload must carry, in report order.
pub const REQUIRED_FIELDS: [&str; 3] = ["a", "b", "c"];

/// Message reported when a coefficient is present but not a usable number.
pub const INVALID_NUMBERS_MESSAGE: &str = "Coefficients a, b, c must be valid numbers";

/// The three coefficients of `a·x² + b·x + c = 0`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Coefficients {
    /// Coefficient of `x²`.
    pub a: f64,
    /// Coefficient of `x`.
    pub b: f64,
    /// Constant term.
    pub c: f64,
}

impl Coefficients {
    /// Creates coefficients from raw values.
    pub fn new(a: f64, b: f64, c: f64) -> Self {
        Self { a, b, c }
    }

    /// Extracts and validates coefficients from a JSON payload.
    ///
    /// Missing fields are reported together. Each present field must be a
    /// JSON number or a string holding a number; the value must be finite.
    ///
    /// # Examples
    ///
    /// ```
    /// use equa_core::Coefficients;
    /// use serde_json::json;
    ///
    /// let c = Coefficients::from_json(&json!({"a": 1, "b": "-5", "c": 6.0})).unwrap();
    /// assert_eq!(c, Coefficients::new(1.0, -5.0, 6.0));
    /// ```
    pub fn from_json(payload: &Value) -> Result<Self> {
        let Some(object) = payload.as_object() else {
            return Err(Error::validation("Request body must be a JSON object"));
        };

        let missing: Vec<String> = REQUIRED_FIELDS
            .iter()
            .filter(|field| !object.contains_key(**field))
            .map(|field| field.to_string())
            .collect();
        if !missing.is_empty() {
            return Err(Error::MissingFields(missing));
        }

        let coefficients = Self {
            a: parse_number("a", &object["a"])?,
            b: parse_number("b", &object["b"])?,
            c: parse_number("c", &object["c"])?,
        };
        coefficients.validate()?;
        Ok(coefficients)
    }

    /// Checks that every coefficient is finite and, for a quadratic, that
    /// `b² − 4ac` does not overflow.
    pub fn validate(&self) -> Result<()> {
        finite("a", self.a)?;
        finite("b", self.b)?;
        finite("c", self.c)?;
        if self.a != 0.0 && !(self.b * self.b - 4.0 * self.a * self.c).is_finite() {
            return Err(Error::validation(DISCRIMINANT_OVERFLOW_MESSAGE));
        }
        Ok(())
    }
}

/// Message reported when the discriminant of finite coefficients overflows.
pub const DISCRIMINANT_OVERFLOW_MESSAGE: &str =
    "Coefficients are too large: b² - 4ac is not a finite number";

/// Parses one coefficient from text, rejecting `NaN` and infinities.
///
/// ```
/// use equa_core::coefficients::parse_coefficient;
///
/// assert_eq!(parse_coefficient("b", " -5 ").unwrap(), -5.0);
/// assert!(parse_coefficient("b", "NaN").is_err());
/// ```
pub fn parse_coefficient(field: &str, raw: &str) -> Result<f64> {
    let value = raw.trim().parse::<f64>().map_err(|_| {
        Error::validation_field(field, format!("could not convert {field} to a number: {raw:?}"))
    })?;
    finite(field, value)
}

fn finite(field: &str, x: f64) -> Result<f64> {
    if x.is_finite() {
        Ok(x)
    } else {
        Err(Error::validation_field(
            field,
            format!("{field} must be finite, got {x}"),
        ))
    }
}

impl From<(f64, f64, f64)> for Coefficients {
    fn from((a, b, c): (f64, f64, f64)) -> Self {
        Self { a, b, c }
    }
}

fn parse_number(field: &str, value: &Value) -> Result<f64> {
    match value {
        Value::Number(n) => match n.as_f64() {
            Some(x) => finite(field, x),
            None => Err(Error::validation_field(
                field,
                format!("could not convert {field} to a number: {value}"),
            )),
        },
        Value::String(s) => parse_coefficient(field, s),
        _ => Err(Error::validation_field(
            field,
            format!("could not convert {field} to a number: {value}"),
        )),
    }
}
