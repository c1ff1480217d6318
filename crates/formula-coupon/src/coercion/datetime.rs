use chrono::{NaiveDate, NaiveTime, Timelike};

use super::{DateOrder, ValueLocaleConfig};
use crate::date::{ymd_to_serial, ExcelDate, ExcelDateSystem};
use crate::error::{ExcelError, ExcelResult};

const ISO_FORMATS: &[&str] = &["%Y-%m-%d", "%Y/%m/%d"];
const MDY_FORMATS: &[&str] = &["%m/%d/%Y", "%m-%d-%Y"];
const DMY_FORMATS: &[&str] = &["%d/%m/%Y", "%d-%m-%Y", "%d.%m.%Y"];
const MONTH_NAME_FORMATS: &[&str] = &[
    "%d-%b-%Y", "%d %b %Y", "%d %B %Y", "%b %d %Y", "%B %d %Y", "%b %d, %Y", "%B %d, %Y",
];
const TIME_FORMATS: &[&str] = &["%H:%M:%S", "%H:%M"];

fn parse_date_part(text: &str, order: DateOrder) -> Option<NaiveDate> {
    let ordered = match order {
        DateOrder::Mdy => MDY_FORMATS,
        DateOrder::Dmy => DMY_FORMATS,
    };
    ISO_FORMATS
        .iter()
        .chain(ordered)
        .chain(MONTH_NAME_FORMATS)
        .find_map(|fmt| NaiveDate::parse_from_str(text, fmt).ok())
}

fn parse_time_part(text: &str) -> Option<f64> {
    let time = TIME_FORMATS
        .iter()
        .find_map(|fmt| NaiveTime::parse_from_str(text, fmt).ok())?;
    Some(f64::from(time.num_seconds_from_midnight()) / 86_400.0)
}

/// Parse date-like text (optionally followed by a time of day) into a date serial.
///
/// Returns `#VALUE!` when the text is not recognized as a date or the date cannot be represented
/// in `system`.
pub fn parse_datevalue_text(
    text: &str,
    locale: ValueLocaleConfig,
    system: ExcelDateSystem,
) -> ExcelResult<f64> {
    let s = text.trim();
    if s.is_empty() {
        return Err(ExcelError::Value);
    }

    let (date, fraction) = match parse_date_part(s, locale.date_order) {
        Some(date) => (date, 0.0),
        None => {
            let (date_text, time_text) = s.rsplit_once(' ').ok_or(ExcelError::Value)?;
            let fraction = parse_time_part(time_text.trim()).ok_or(ExcelError::Value)?;
            let date =
                parse_date_part(date_text.trim(), locale.date_order).ok_or(ExcelError::Value)?;
            (date, fraction)
        }
    };

    let serial = ymd_to_serial(ExcelDate::from(date), system).map_err(|_| ExcelError::Value)?;
    Ok(f64::from(serial) + fraction)
}
