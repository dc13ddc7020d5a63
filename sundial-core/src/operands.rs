//! Validation of the `{"num1": .., "num2": ..}` request body.

use serde::Serialize;
use serde_json::Value;

use crate::{arith, error::CoreError};

/// Name of the first operand field.
pub const FIRST: &str = "num1";

/// Name of the second operand field.
pub const SECOND: &str = "num2";

/// Two validated integer operands.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Operands {
    pub num1: i64,
    pub num2: i64,
}

/// The operands echoed back together with their sum.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Summation {
    pub num1: i64,
    pub num2: i64,
    pub result: i64,
}

impl Operands {
    /// Parse and validate operands from a raw JSON body.
    ///
    /// An empty or unparseable body, or one that is not a JSON object, is
    /// reported as both operands missing.
    ///
    /// # Errors
    /// - [`CoreError::MissingParameters`] if a field is absent or `null`.
    /// - [`CoreError::InvalidIntegers`] if a field is present but not an integer.
    pub fn from_json_slice(body: &[u8]) -> Result<Self, CoreError> {
        match serde_json::from_slice::<Value>(body) {
            Ok(value) => Self::from_value(&value),
            Err(_) => Err(CoreError::MissingParameters { names: vec![FIRST, SECOND] }),
        }
    }

    /// Validate operands from an already-parsed JSON value.
    ///
    /// # Errors
    /// Same as [`Operands::from_json_slice`].
    pub fn from_value(value: &Value) -> Result<Self, CoreError> {
        let Some(fields) = value.as_object() else {
            return Err(CoreError::MissingParameters { names: vec![FIRST, SECOND] });
        };

        let first = fields.get(FIRST).filter(|v| !v.is_null());
        let second = fields.get(SECOND).filter(|v| !v.is_null());

        let (first, second) = match (first, second) {
            (Some(a), Some(b)) => (a, b),
            (a, b) => {
                let names = [(FIRST, a), (SECOND, b)]
                    .into_iter()
                    .filter(|(_, v)| v.is_none())
                    .map(|(name, _)| name)
                    .collect();
                return Err(CoreError::MissingParameters { names });
            }
        };

        match (integer_value(first), integer_value(second)) {
            (Some(num1), Some(num2)) => Ok(Self { num1, num2 }),
            _ => Err(CoreError::InvalidIntegers),
        }
    }

    /// Add the operands.
    ///
    /// # Errors
    /// Returns [`CoreError::SumOutOfRange`] if the sum overflows `i64`.
    pub fn sum(self) -> Result<Summation, CoreError> {
        let result = arith::add(self.num1, self.num2)?;
        Ok(Summation { num1: self.num1, num2: self.num2, result })
    }
}

/// Interpret a JSON value as an `i64`.
///
/// Integral numbers and strings holding a decimal integer are accepted;
/// booleans, fractional numbers and everything else are not. Floats are
/// accepted only below [`MAX_EXACT_FLOAT`] in magnitude, since larger
/// literals may already have been rounded by the JSON decoder.
fn integer_value(value: &Value) -> Option<i64> {
    match value {
        Value::Number(n) => n.as_i64().or_else(|| n.as_f64().and_then(integral_f64)),
        Value::String(s) => s.trim().parse().ok(),
        _ => None,
    }
}

/// 2^53: every integer with a smaller magnitude is exact in an `f64`.
pub const MAX_EXACT_FLOAT: f64 = 9_007_199_254_740_992.0;

#[allow(clippy::cast_possible_truncation)]
fn integral_f64(f: f64) -> Option<i64> {
    (f.is_finite() && f.fract() == 0.0 && f.abs() < MAX_EXACT_FLOAT).then(|| f as i64)
}
