//! Schedules whose maturity day does not exist in every month.
//!
//! Coupon dates are stepped with day overflow (a missing day rolls into the following month)
//! rather than being clamped to month-end, and each step starts from the previous result.

use formula_coupon::functions::financial::{coupdaybs, couppcd};

use super::harness::{serial, SYSTEM};

#[test]
fn quarterly_day_31_into_leap_february_rolls_to_march_2() {
    // 2024-05-31 - 3 months = "2024-02-31" = 2024-03-02.
    let maturity = serial(2024, 5, 31);

    let on_rolled_date = serial(2024, 3, 2);
    assert_eq!(couppcd(on_rolled_date, maturity, 4, 0, SYSTEM), Ok(on_rolled_date));
    assert_eq!(coupdaybs(on_rolled_date, maturity, 4, 0, SYSTEM), Ok(0.0));

    // One day earlier the rolled date is still ahead, so the schedule steps back again from
    // 2024-03-02 (not from the 31st) to 2023-12-02.
    let settlement = serial(2024, 3, 1);
    assert_eq!(couppcd(settlement, maturity, 4, 0, SYSTEM), Ok(serial(2023, 12, 2)));
    assert_eq!(coupdaybs(settlement, maturity, 4, 1, SYSTEM), Ok(90.0));
    assert_eq!(coupdaybs(settlement, maturity, 4, 0, SYSTEM), Ok(89.0));
}

#[test]
fn quarterly_day_31_into_common_february_rolls_to_march_3() {
    // 2023-05-31 - 3 months = "2023-02-31" = 2023-03-03.
    let maturity = serial(2023, 5, 31);

    let on_rolled_date = serial(2023, 3, 3);
    assert_eq!(couppcd(on_rolled_date, maturity, 4, 0, SYSTEM), Ok(on_rolled_date));

    let settlement = serial(2023, 3, 1);
    assert_eq!(couppcd(settlement, maturity, 4, 0, SYSTEM), Ok(serial(2022, 12, 3)));
    assert_eq!(coupdaybs(settlement, maturity, 4, 1, SYSTEM), Ok(88.0));
    assert_eq!(coupdaybs(settlement, maturity, 4, 0, SYSTEM), Ok(88.0));
}

#[test]
fn semiannual_day_31_steps_through_february() {
    // 2024-08-31 - 6 months = 2024-03-02; settlement 2024-03-01 is before it, so step again to
    // 2023-09-02.
    let settlement = serial(2024, 3, 1);
    let maturity = serial(2024, 8, 31);
    assert_eq!(couppcd(settlement, maturity, 2, 0, SYSTEM), Ok(serial(2023, 9, 2)));
    assert_eq!(coupdaybs(settlement, maturity, 2, 0, SYSTEM), Ok(179.0));
}

#[test]
fn day_31_into_a_30_day_month_rolls_to_the_first() {
    // 2024-07-31 - 3 months = "2024-04-31" = 2024-05-01.
    let maturity = serial(2024, 7, 31);
    let settlement = serial(2024, 5, 10);
    assert_eq!(couppcd(settlement, maturity, 4, 0, SYSTEM), Ok(serial(2024, 5, 1)));
    assert_eq!(coupdaybs(settlement, maturity, 4, 1, SYSTEM), Ok(9.0));
}

#[test]
fn leap_day_maturity_reanchored_into_a_common_year() {
    // 2024-02-29 carried into 2023 becomes 2023-03-01.
    let maturity = serial(2024, 2, 29);

    let settlement = serial(2023, 3, 1);
    assert_eq!(couppcd(settlement, maturity, 2, 0, SYSTEM), Ok(settlement));
    for basis in 0..=4 {
        assert_eq!(coupdaybs(settlement, maturity, 2, basis, SYSTEM), Ok(0.0));
    }

    // Before the re-anchored date the schedule steps back six months to 2022-09-01.
    let settlement = serial(2023, 2, 28);
    assert_eq!(couppcd(settlement, maturity, 2, 0, SYSTEM), Ok(serial(2022, 9, 1)));
    assert_eq!(coupdaybs(settlement, maturity, 2, 1, SYSTEM), Ok(180.0));
    assert_eq!(coupdaybs(settlement, maturity, 2, 0, SYSTEM), Ok(177.0));
}

#[test]
fn leap_day_maturity_reanchored_into_a_leap_year() {
    let maturity = serial(2028, 2, 29);

    let settlement = serial(2024, 2, 29);
    assert_eq!(couppcd(settlement, maturity, 4, 0, SYSTEM), Ok(settlement));

    // 2024-02-29 is after settlement: step back to 2023-11-29.
    let settlement = serial(2024, 1, 10);
    assert_eq!(couppcd(settlement, maturity, 4, 0, SYSTEM), Ok(serial(2023, 11, 29)));
    assert_eq!(coupdaybs(settlement, maturity, 4, 0, SYSTEM), Ok(41.0));
    assert_eq!(coupdaybs(settlement, maturity, 4, 1, SYSTEM), Ok(42.0));
}

#[test]
fn leap_day_anniversary_pushed_into_a_common_year_rolls_to_march() {
    // 2024-02-29 has passed on 2024-05-01, so the anchor moves to "2025-02-29" = 2025-03-01 and
    // the quarterly steps land on the 1st: 2024-12-01, 2024-09-01, 2024-06-01, 2024-03-01.
    let maturity = serial(2028, 2, 29);
    let settlement = serial(2024, 5, 1);
    assert_eq!(couppcd(settlement, maturity, 4, 0, SYSTEM), Ok(serial(2024, 3, 1)));
    assert_eq!(coupdaybs(settlement, maturity, 4, 0, SYSTEM), Ok(60.0));
    assert_eq!(coupdaybs(settlement, maturity, 4, 1, SYSTEM), Ok(61.0));
}
