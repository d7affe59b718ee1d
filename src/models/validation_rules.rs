//! Checks for loosely typed request fields. Numeric fields may arrive
//! either as JSON numbers or as numeric strings.
use std::borrow::Cow;
use std::collections::HashMap;
use std::convert::TryFrom;

use serde_json::Value;
use validator::ValidationError;

/// Values that count as a missing field: null, false, "" and numeric zero
pub fn is_absent(value: &Value) -> bool {
    match *value {
        Value::Null => true,
        Value::Bool(flag) => !flag,
        Value::String(ref s) => s.is_empty(),
        Value::Number(ref n) => n.as_f64().map(|n| n == 0.0).unwrap_or(false),
        Value::Array(_) | Value::Object(_) => false,
    }
}

/// Integral values that fit `i32`, written either way: `10`, `10.0`, `1e2`, `"10"`
pub fn as_integer(value: &Value) -> Option<i32> {
    match *value {
        Value::Number(ref n) => n
            .as_i64()
            .and_then(|n| i32::try_from(n).ok())
            .or_else(|| n.as_f64().and_then(integral_i32)),
        Value::String(ref s) => {
            let s = s.trim();
            s.parse::<i32>()
                .ok()
                .or_else(|| s.parse::<f64>().ok().and_then(integral_i32))
        }
        _ => None,
    }
}

fn integral_i32(n: f64) -> Option<i32> {
    if n.is_finite() && n.fract() == 0.0 && n >= f64::from(i32::MIN) && n <= f64::from(i32::MAX) {
        Some(n as i32)
    } else {
        None
    }
}

pub fn as_decimal(value: &Value) -> Option<f64> {
    match *value {
        Value::Number(ref n) => n.as_f64(),
        Value::String(ref s) => s.trim().parse::<f64>().ok().filter(|n| n.is_finite()),
        _ => None,
    }
}

pub fn validate_non_negative<T: Into<f64>>(val: T) -> Result<(), ValidationError> {
    if val.into() >= 0f64 {
        Ok(())
    } else {
        Err(ValidationError {
            code: Cow::from("value"),
            message: Some(Cow::from("Value must be non negative.")),
            params: HashMap::new(),
        })
    }
}
