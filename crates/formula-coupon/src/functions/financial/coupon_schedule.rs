use chrono::{Datelike, NaiveDate};

use crate::date::{
    add_months_overflowing, date_to_serial, serial_to_date, with_year_overflowing,
    ExcelDateSystem,
};
use crate::error::{ExcelError, ExcelResult};

use super::day_count::Basis;

/// Coupon payments per year.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Frequency {
    Annual,
    SemiAnnual,
    Quarterly,
}

impl Frequency {
    pub fn per_year(self) -> i32 {
        match self {
            Frequency::Annual => 1,
            Frequency::SemiAnnual => 2,
            Frequency::Quarterly => 4,
        }
    }

    /// Length of one coupon period in calendar months.
    pub fn months(self) -> i32 {
        12 / self.per_year()
    }
}

impl TryFrom<i32> for Frequency {
    type Error = ExcelError;

    fn try_from(value: i32) -> Result<Self, Self::Error> {
        match value {
            1 => Ok(Frequency::Annual),
            2 => Ok(Frequency::SemiAnnual),
            4 => Ok(Frequency::Quarterly),
            _ => Err(ExcelError::Num),
        }
    }
}

/// Validated inputs shared by the COUP* date functions.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct CouponArgs {
    pub settlement: i32,
    pub maturity: i32,
    pub frequency: Frequency,
    pub basis: Basis,
}

/// Domain validation: frequency in {1, 2, 4}, basis in 0..=4, settlement strictly before
/// maturity. Every violation is `#NUM!`.
pub(crate) fn validate_coupon_args(
    settlement: i32,
    maturity: i32,
    frequency: i32,
    basis: i32,
) -> ExcelResult<CouponArgs> {
    let frequency = Frequency::try_from(frequency)?;
    let basis = Basis::try_from(basis)?;
    if settlement >= maturity {
        return Err(ExcelError::Num);
    }
    Ok(CouponArgs {
        settlement,
        maturity,
        frequency,
        basis,
    })
}

/// Calendar date of the coupon payment at or before `settlement`.
///
/// The maturity month/day is carried into the settlement year (one year later if that
/// anniversary has already passed), then stepped back one coupon period at a time until it is no
/// longer after settlement. Month steps use [`add_months_overflowing`], so a day-of-month that
/// does not exist in the target month rolls into the next month and later steps start from the
/// rolled date.
///
/// Callers must pass `settlement < maturity`; [`Frequency::months`] always divides 12.
pub fn previous_coupon_date(
    settlement: i32,
    maturity: i32,
    frequency: Frequency,
    system: ExcelDateSystem,
) -> ExcelResult<NaiveDate> {
    let settlement_date = serial_to_date(settlement, system)?;
    let maturity_date = serial_to_date(maturity, system)?;

    let mut anchor =
        with_year_overflowing(maturity_date, settlement_date.year()).ok_or(ExcelError::Num)?;
    if anchor < settlement_date {
        anchor = with_year_overflowing(anchor, anchor.year() + 1).ok_or(ExcelError::Num)?;
    }

    // The anchor sits at most a year (plus a few rolled days) past settlement; rolled days can
    // cost one extra period, so allow a full extra year.
    let years_ahead = anchor.year() - settlement_date.year();
    let max_steps = (years_ahead + 2) * frequency.per_year();
    let months = frequency.months();

    for step in 0..=max_steps {
        if anchor <= settlement_date {
            log::trace!(
                "previous coupon date {anchor} for settlement {settlement_date} after {step} step(s)"
            );
            return Ok(anchor);
        }
        anchor = add_months_overflowing(anchor.year(), anchor.month(), anchor.day(), -months)
            .ok_or(ExcelError::Num)?;
    }

    debug_assert!(false, "coupon anchor did not reach settlement within {max_steps} steps");
    Err(ExcelError::Num)
}

/// Serial of the previous coupon date, with pre-epoch results pinned to serial 0.
///
/// Schedules that resolve before the workbook epoch report serial 0 rather than a negative
/// serial; this mirrors Excel's output for such bonds.
pub(crate) fn previous_coupon_serial(
    settlement: i32,
    maturity: i32,
    frequency: Frequency,
    system: ExcelDateSystem,
) -> ExcelResult<i32> {
    let pcd = previous_coupon_date(settlement, maturity, frequency, system)?;
    let serial = date_to_serial(pcd, system)?;
    if serial < 0 {
        log::debug!("previous coupon date {pcd} precedes the epoch; clamping serial {serial} to 0");
        return Ok(0);
    }
    Ok(serial)
}
