use formula_coupon::date::{serial_to_date, ymd_to_serial, ExcelDate};
use formula_coupon::functions::financial::{coupdaybs, couppcd};
use proptest::prelude::*;

use super::harness::SYSTEM;

/// Serial for 9990-12-30; settlement plus ten years still converts to a calendar date.
const LAST_SETTLEMENT: i32 = 2_955_177;

fn arb_frequency() -> impl Strategy<Value = i32> {
    prop_oneof![Just(1), Just(2), Just(4)]
}

fn arb_settlement_maturity() -> impl Strategy<Value = (i32, i32)> {
    (1i32..=LAST_SETTLEMENT, 1i32..=3_650).prop_map(|(s, len)| (s, s + len))
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(256))]

    #[test]
    fn valid_inputs_give_non_negative_whole_days(
        (settlement, maturity) in arb_settlement_maturity(),
        frequency in arb_frequency(),
        basis in 0i32..=4,
    ) {
        let days = coupdaybs(settlement, maturity, frequency, basis, SYSTEM);
        prop_assert!(days.is_ok(), "{days:?}");
        let days = days.unwrap();
        prop_assert!(days >= 0.0);
        prop_assert_eq!(days.fract(), 0.0);

        let pcd = couppcd(settlement, maturity, frequency, basis, SYSTEM).unwrap();
        prop_assert!(pcd <= settlement);

        // Pure: repeated calls agree.
        prop_assert_eq!(coupdaybs(settlement, maturity, frequency, basis, SYSTEM), Ok(days));
    }

    #[test]
    fn days_grow_within_a_coupon_period(
        (settlement, maturity) in arb_settlement_maturity(),
        frequency in arb_frequency(),
    ) {
        let next = settlement + 1;
        prop_assume!(next < maturity);
        let pcd = couppcd(settlement, maturity, frequency, 1, SYSTEM).unwrap();
        prop_assume!(couppcd(next, maturity, frequency, 1, SYSTEM).unwrap() == pcd);

        let today = coupdaybs(settlement, maturity, frequency, 1, SYSTEM).unwrap();
        let tomorrow = coupdaybs(next, maturity, frequency, 1, SYSTEM).unwrap();
        prop_assert_eq!(tomorrow, today + 1.0);

        let today_30_360 = coupdaybs(settlement, maturity, frequency, 0, SYSTEM).unwrap();
        let tomorrow_30_360 = coupdaybs(next, maturity, frequency, 0, SYSTEM).unwrap();
        prop_assert!(tomorrow_30_360 >= today_30_360);
    }

    #[test]
    fn settlement_on_an_anniversary_is_zero_days(
        year in 1941i32..=9000,
        month in 1u8..=12,
        day in 1u8..=28,
        frequency in arb_frequency(),
        periods_before in 1i32..=40,
        basis in 0i32..=4,
    ) {
        let maturity = ymd_to_serial(ExcelDate::new(year, month, day), SYSTEM).unwrap();

        // Days 1..=28 exist in every month, so stepping whole periods back never rolls over.
        let months_back = periods_before * (12 / frequency);
        let index = year * 12 + i32::from(month) - 1 - months_back;
        let anniversary = ExcelDate::new(index.div_euclid(12), (index.rem_euclid(12) + 1) as u8, day);
        let settlement = ymd_to_serial(anniversary, SYSTEM).unwrap();

        prop_assert_eq!(coupdaybs(settlement, maturity, frequency, basis, SYSTEM), Ok(0.0));
        prop_assert_eq!(couppcd(settlement, maturity, frequency, basis, SYSTEM), Ok(settlement));
        prop_assert_eq!(
            serial_to_date(settlement, SYSTEM).map(ExcelDate::from),
            Ok(anniversary)
        );
    }
}
