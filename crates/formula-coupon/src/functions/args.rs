//! Argument preparation shared by scalar-only builtins.

use crate::coercion::datetime::parse_datevalue_text;
use crate::coercion::number::{parse_number_text, text_to_number_js};
use crate::value::{ErrorKind, Value};

use super::FunctionContext;

/// Pre-flight shape check for scalar-only functions.
///
/// Arguments are visited in order and the first failure wins:
/// - a 1x1 array is replaced by its single element (which is then checked like any other value),
/// - any other array is `#VALUE!`,
/// - an error value is returned unchanged,
/// - a boolean is `#VALUE!`.
pub(crate) fn reject_array_or_boolean(args: &[Value]) -> Result<Vec<Value>, ErrorKind> {
    args.iter()
        .map(|arg| -> Result<Value, ErrorKind> {
            let scalar = match arg {
                Value::Array(arr) => arr.as_single().ok_or(ErrorKind::Value)?,
                other => other,
            };
            match scalar {
                Value::Error(e) => Err(*e),
                Value::Bool(_) | Value::Array(_) => Err(ErrorKind::Value),
                other => Ok(other.clone()),
            }
        })
        .collect()
}

/// Coerce a scalar into a date serial (fractional part preserved).
///
/// Numbers pass through, blanks are serial 0, and text is read as a number first and as a date
/// second. Negative serials are `#NUM!`; unparseable text is `#VALUE!`.
pub(crate) fn date_serial_from_value(
    ctx: &dyn FunctionContext,
    value: &Value,
) -> Result<f64, ErrorKind> {
    let serial = match value {
        Value::Number(n) => *n,
        Value::Blank => 0.0,
        Value::Text(s) => match parse_number_text(s, ctx.value_locale()) {
            Some(n) => n,
            None => parse_datevalue_text(s, ctx.value_locale(), ctx.date_system())?,
        },
        Value::Error(e) => return Err(*e),
        Value::Bool(_) | Value::Array(_) => return Err(ErrorKind::Value),
    };
    if !serial.is_finite() {
        return Err(ErrorKind::Num);
    }
    if serial < 0.0 {
        return Err(ErrorKind::Num);
    }
    Ok(serial)
}

/// `floor(+value)` with JavaScript numeric conversion; `NaN` signals a type mismatch.
pub(crate) fn floor_number(value: &Value) -> f64 {
    let n = match value {
        Value::Number(n) => *n,
        Value::Blank => 0.0,
        Value::Text(s) => text_to_number_js(s),
        Value::Bool(b) => f64::from(u8::from(*b)),
        Value::Error(_) | Value::Array(_) => f64::NAN,
    };
    n.floor()
}

/// Convert an already-floored number into an `i32`; out-of-range values are `#NUM!`.
pub(crate) fn floored_to_i32(n: f64) -> Result<i32, ErrorKind> {
    if n.is_nan() {
        return Err(ErrorKind::Value);
    }
    if n < f64::from(i32::MIN) || n > f64::from(i32::MAX) {
        return Err(ErrorKind::Num);
    }
    Ok(n as i32)
}
