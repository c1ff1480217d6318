#![forbid(unsafe_code)]
#![deny(unreachable_patterns)]

//! Excel-compatible coupon-date functions for spreadsheet calculation engines.
//!
//! The crate implements `COUPDAYBS` (days from the previous coupon date to settlement) and
//! `COUPPCD` (the previous coupon date itself) at two levels:
//!
//! - a numeric API over whole-day date serials ([`functions::financial::coupdaybs`],
//!   [`functions::financial::couppcd`]) returning [`ExcelResult`], and
//! - value-level builtins registered in the function table and invoked through
//!   [`functions::call_function`], which handle argument coercion (date text, numeric text,
//!   1x1 arrays) and surface failures as [`Value::Error`].
//!
//! Workbook settings (date system, value locale) are supplied through a
//! [`functions::FunctionContext`]; [`CalcSettings`] is the serde-configurable default
//! implementation.
//!
//! Logging goes through the [`log`] facade; hosts install their own logger.

pub mod calc_settings;
pub mod coercion;
pub mod date;
pub mod error;
pub mod functions;
pub mod value;

pub use crate::calc_settings::CalcSettings;
pub use crate::error::{ExcelError, ExcelResult};
pub use value::{Array, ErrorKind, Value};
