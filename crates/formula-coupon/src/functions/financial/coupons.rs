use crate::date::ExcelDateSystem;
use crate::error::ExcelResult;

use super::coupon_schedule::{previous_coupon_serial, validate_coupon_args};
use super::day_count::days_between;

/// COUPDAYBS(settlement, maturity, frequency, [basis])
///
/// Days from the beginning of the coupon period to the settlement date.
///
/// `settlement` and `maturity` are whole-day serials. The previous coupon date is derived from
/// maturity alone (see [`super::previous_coupon_date`]) and the day count between it and
/// settlement follows `basis`.
///
/// Serials whose magnitude exceeds [`crate::date::MAX_SERIAL_MAGNITUDE`] cannot be converted to
/// calendar dates and yield `#NUM!`, even when `settlement < maturity`.
pub fn coupdaybs(
    settlement: i32,
    maturity: i32,
    frequency: i32,
    basis: i32,
    system: ExcelDateSystem,
) -> ExcelResult<f64> {
    let args = validate_coupon_args(settlement, maturity, frequency, basis)?;
    let pcd = previous_coupon_serial(args.settlement, args.maturity, args.frequency, system)?;
    let days = days_between(pcd, args.settlement, args.basis, system)?;
    Ok(days as f64)
}

/// COUPPCD(settlement, maturity, frequency, [basis])
///
/// Serial of the coupon date at or before settlement. `basis` is validated but does not affect
/// the date.
pub fn couppcd(
    settlement: i32,
    maturity: i32,
    frequency: i32,
    basis: i32,
    system: ExcelDateSystem,
) -> ExcelResult<i32> {
    let args = validate_coupon_args(settlement, maturity, frequency, basis)?;
    previous_coupon_serial(args.settlement, args.maturity, args.frequency, system)
}
