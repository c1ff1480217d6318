use chrono::{Datelike, NaiveDate};

use crate::date::{serial_to_date, ExcelDateSystem};
use crate::error::{ExcelError, ExcelResult};

/// Day-count basis codes accepted by Excel's bond functions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Basis {
    /// `0`: US (NASD) 30/360.
    UsNasd30360,
    /// `1`: Actual/actual.
    ActualActual,
    /// `2`: Actual/360.
    Actual360,
    /// `3`: Actual/365.
    Actual365,
    /// `4`: European 30/360.
    European30360,
}

impl TryFrom<i32> for Basis {
    type Error = ExcelError;

    fn try_from(value: i32) -> Result<Self, Self::Error> {
        match value {
            0 => Ok(Basis::UsNasd30360),
            1 => Ok(Basis::ActualActual),
            2 => Ok(Basis::Actual360),
            3 => Ok(Basis::Actual365),
            4 => Ok(Basis::European30360),
            _ => Err(ExcelError::Num),
        }
    }
}

fn next_day_is_new_month(date: NaiveDate) -> bool {
    date.succ_opt().map_or(true, |next| next.month() != date.month())
}

fn is_last_day_of_february(date: NaiveDate) -> bool {
    date.month() == 2 && next_day_is_new_month(date)
}

fn thirty_360(start: NaiveDate, end: NaiveDate, d1: u32, d2: u32) -> i64 {
    let years = i64::from(end.year()) - i64::from(start.year());
    let months = i64::from(end.month()) - i64::from(start.month());
    let days = i64::from(d2) - i64::from(d1);
    360 * years + 30 * months + days
}

/// US (NASD) 30/360 as used by basis 0 of the bond functions.
///
/// 1. If D1 is the last day of February, D1 = 30.
/// 2. If D1 is 31, D1 = 30.
/// 3. If D2 is the last day of February and D1 was too, D2 = 30.
/// 4. If D2 is 31 and D1 is now 30 or 31, D2 = 30.
pub fn thirty_360_us(start: NaiveDate, end: NaiveDate) -> i64 {
    let start_feb_eom = is_last_day_of_february(start);
    let mut d1 = start.day();
    let mut d2 = end.day();

    if start_feb_eom {
        d1 = 30;
    } else if d1 == 31 {
        d1 = 30;
    }
    if start_feb_eom && is_last_day_of_february(end) {
        d2 = 30;
    } else if d2 == 31 && d1 >= 30 {
        d2 = 30;
    }

    thirty_360(start, end, d1, d2)
}

/// European 30E/360: any day 31 counts as 30.
pub fn thirty_360_european(start: NaiveDate, end: NaiveDate) -> i64 {
    thirty_360(start, end, start.day().min(30), end.day().min(30))
}

/// Whole days from `start` to `end` (both date serials) under `basis`.
///
/// The actual-day bases count serial differences, so the 1900 system's phantom leap day is
/// counted like any other serial.
pub fn days_between(
    start: i32,
    end: i32,
    basis: Basis,
    system: ExcelDateSystem,
) -> ExcelResult<i64> {
    match basis {
        Basis::ActualActual | Basis::Actual360 | Basis::Actual365 => {
            Ok(i64::from(end) - i64::from(start))
        }
        Basis::UsNasd30360 => Ok(thirty_360_us(
            serial_to_date(start, system)?,
            serial_to_date(end, system)?,
        )),
        Basis::European30360 => Ok(thirty_360_european(
            serial_to_date(start, system)?,
            serial_to_date(end, system)?,
        )),
    }
}
