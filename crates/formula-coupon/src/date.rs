//! Excel date serials and calendar conversions.
//!
//! Serial numbers count whole days from the workbook epoch. In the 1900 system serial `1` is
//! 1900-01-01 and serial `0` is the placeholder "1900-01-00" (1899-12-31). Dates before the epoch
//! convert to negative serials; callers decide whether those are meaningful.

use chrono::{Datelike, Duration, NaiveDate};
use serde::{Deserialize, Serialize};

use crate::error::{ExcelError, ExcelResult};

/// Largest magnitude accepted by the serial/calendar conversions (roughly +/- 8000 years).
///
/// This sits above Excel's own last date (9999-12-31, serial 2958465) so schedules that run a
/// little past it still resolve. Anything further out is `#NUM!`.
pub const MAX_SERIAL_MAGNITUDE: i32 = 3_000_000;

/// Workbook date system used to interpret serial date values.
///
/// Excel supports two base date systems:
/// - `Excel1900` (default on Windows). With `lotus_compat` enabled, serial 60 is the fictitious
///   1900-02-29 inherited from Lotus 1-2-3 and every later serial is shifted by one day.
/// - `Excel1904` (default on older Mac versions), where serial 0 is 1904-01-01.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum ExcelDateSystem {
    #[serde(rename_all = "camelCase")]
    Excel1900 { lotus_compat: bool },
    Excel1904,
}

impl ExcelDateSystem {
    pub const EXCEL_1900: Self = Self::Excel1900 { lotus_compat: true };

    fn epoch(self) -> ExcelResult<NaiveDate> {
        let epoch = match self {
            ExcelDateSystem::Excel1900 { .. } => NaiveDate::from_ymd_opt(1899, 12, 31),
            ExcelDateSystem::Excel1904 => NaiveDate::from_ymd_opt(1904, 1, 1),
        };
        epoch.ok_or(ExcelError::Num)
    }

    fn lotus_compat(self) -> bool {
        matches!(self, ExcelDateSystem::Excel1900 { lotus_compat: true })
    }
}

impl Default for ExcelDateSystem {
    fn default() -> Self {
        Self::EXCEL_1900
    }
}

/// A year/month/day triple as Excel reports it.
///
/// Unlike [`NaiveDate`] this can hold the Lotus placeholder 1900-02-29.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ExcelDate {
    pub year: i32,
    pub month: u8,
    pub day: u8,
}

impl ExcelDate {
    pub const fn new(year: i32, month: u8, day: u8) -> Self {
        Self { year, month, day }
    }
}

impl From<NaiveDate> for ExcelDate {
    fn from(value: NaiveDate) -> Self {
        // `month()` is 1..=12 and `day()` is 1..=31, both fit in a u8.
        Self::new(value.year(), value.month() as u8, value.day() as u8)
    }
}

fn lotus_leap_day(system: ExcelDateSystem) -> ExcelResult<Option<NaiveDate>> {
    if !system.lotus_compat() {
        return Ok(None);
    }
    NaiveDate::from_ymd_opt(1900, 2, 28)
        .map(Some)
        .ok_or(ExcelError::Num)
}

/// Convert a serial into a calendar date.
///
/// In the Lotus-compatible 1900 system the phantom serial 60 has no calendar counterpart and is
/// read as 1900-02-28. Negative serials resolve to dates before the epoch.
pub fn serial_to_date(serial: i32, system: ExcelDateSystem) -> ExcelResult<NaiveDate> {
    let serial = i64::from(serial);
    if serial.abs() > i64::from(MAX_SERIAL_MAGNITUDE) {
        return Err(ExcelError::Num);
    }
    let offset = if system.lotus_compat() && serial >= 60 {
        serial - 1
    } else {
        serial
    };
    system
        .epoch()?
        .checked_add_signed(Duration::days(offset))
        .ok_or(ExcelError::Num)
}

/// Convert a calendar date into a serial, allowing dates before the epoch (negative serials).
pub fn date_to_serial(date: NaiveDate, system: ExcelDateSystem) -> ExcelResult<i32> {
    let mut days = date.signed_duration_since(system.epoch()?).num_days();
    if let Some(leap) = lotus_leap_day(system)? {
        if date > leap {
            days += 1;
        }
    }
    if days.abs() > i64::from(MAX_SERIAL_MAGNITUDE) {
        return Err(ExcelError::Num);
    }
    i32::try_from(days).map_err(|_| ExcelError::Num)
}

/// Convert an Excel calendar date into a serial.
///
/// The date must exist in the calendar (1900-02-29 is accepted only in the Lotus-compatible
/// 1900 system) and must not precede the epoch.
pub fn ymd_to_serial(date: ExcelDate, system: ExcelDateSystem) -> ExcelResult<i32> {
    if system.lotus_compat() && (date.year, date.month, date.day) == (1900, 2, 29) {
        return Ok(60);
    }
    let naive = NaiveDate::from_ymd_opt(date.year, u32::from(date.month), u32::from(date.day))
        .ok_or(ExcelError::Num)?;
    let serial = date_to_serial(naive, system)?;
    if serial < 0 {
        return Err(ExcelError::Num);
    }
    Ok(serial)
}

pub fn serial_to_ymd(serial: i32, system: ExcelDateSystem) -> ExcelResult<ExcelDate> {
    if system.lotus_compat() && serial == 60 {
        return Ok(ExcelDate::new(1900, 2, 29));
    }
    serial_to_date(serial, system).map(ExcelDate::from)
}

/// Shift `(year, month, day)` by `months` calendar months without clamping the day.
///
/// The month index is normalized first (borrowing/carrying whole years), then a day-of-month
/// that does not exist in the target month spills into the following month: `(2023, 8, 31)`
/// minus 6 months is "Feb 31 2023", which normalizes to 2023-03-03.
///
/// Returns `None` if the result is outside the representable range.
pub fn add_months_overflowing(year: i32, month: u32, day: u32, months: i32) -> Option<NaiveDate> {
    let month_index = i64::from(year) * 12 + i64::from(month) - 1 + i64::from(months);
    let year = i32::try_from(month_index.div_euclid(12)).ok()?;
    let month = u32::try_from(month_index.rem_euclid(12)).ok()? + 1;
    let first = NaiveDate::from_ymd_opt(year, month, 1)?;
    first.checked_add_signed(Duration::days(i64::from(day) - 1))
}

/// Replace the year of `date`, spilling a nonexistent Feb 29 into Mar 1.
pub fn with_year_overflowing(date: NaiveDate, year: i32) -> Option<NaiveDate> {
    add_months_overflowing(year, date.month(), date.day(), 0)
}
