use crate::error::ExcelResult;
use crate::functions::args::{
    date_serial_from_value, floor_number, floored_to_i32, reject_array_or_boolean,
};
use crate::functions::{FunctionContext, FunctionSpec};
use crate::value::{ErrorKind, Value};

fn excel_result_number(res: ExcelResult<f64>) -> Value {
    match res {
        Ok(n) => Value::Number(n),
        Err(e) => Value::Error(e.into()),
    }
}

fn excel_result_serial(res: ExcelResult<i32>) -> Value {
    match res {
        Ok(n) => Value::Number(f64::from(n)),
        Err(e) => Value::Error(e.into()),
    }
}

/// Arguments shared by the COUP* builtins after coercion.
struct CoupArgs {
    settlement: i32,
    maturity: i32,
    frequency: i32,
    basis: i32,
}

/// Value-level preparation for `(settlement, maturity, frequency, [basis])`.
///
/// The first failing step wins: the array/boolean gate, then date coercion of settlement and
/// maturity, then `#VALUE!` for a non-numeric frequency or basis. Domain checks (`#NUM!`) are left
/// to the numeric layer.
fn coup_args(ctx: &dyn FunctionContext, args: &[Value]) -> Result<CoupArgs, ErrorKind> {
    let mut raw = args.to_vec();
    if raw.len() == 3 {
        raw.push(Value::Number(0.0));
    }
    let [settlement, maturity, frequency, basis] =
        <[Value; 4]>::try_from(reject_array_or_boolean(&raw)?).map_err(|_| ErrorKind::NA)?;

    let settlement = date_serial_from_value(ctx, &settlement)?;
    let maturity = date_serial_from_value(ctx, &maturity)?;

    let frequency = floor_number(&frequency);
    let basis = floor_number(&basis);
    if frequency.is_nan() || basis.is_nan() {
        return Err(ErrorKind::Value);
    }

    Ok(CoupArgs {
        settlement: floored_to_i32(settlement.floor())?,
        maturity: floored_to_i32(maturity.floor())?,
        frequency: floored_to_i32(frequency)?,
        basis: floored_to_i32(basis)?,
    })
}

inventory::submit! {
    FunctionSpec {
        name: "COUPDAYBS",
        min_args: 3,
        max_args: 4,
        implementation: coupdaybs_fn,
    }
}

fn coupdaybs_fn(ctx: &dyn FunctionContext, args: &[Value]) -> Value {
    let args = match coup_args(ctx, args) {
        Ok(v) => v,
        Err(e) => return Value::Error(e),
    };
    excel_result_number(super::coupdaybs(
        args.settlement,
        args.maturity,
        args.frequency,
        args.basis,
        ctx.date_system(),
    ))
}

inventory::submit! {
    FunctionSpec {
        name: "COUPPCD",
        min_args: 3,
        max_args: 4,
        implementation: couppcd_fn,
    }
}

fn couppcd_fn(ctx: &dyn FunctionContext, args: &[Value]) -> Value {
    let args = match coup_args(ctx, args) {
        Ok(v) => v,
        Err(e) => return Value::Error(e),
    };
    excel_result_serial(super::couppcd(
        args.settlement,
        args.maturity,
        args.frequency,
        args.basis,
        ctx.date_system(),
    ))
}
