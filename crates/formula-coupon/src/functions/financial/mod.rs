mod builtins_coupons;
mod coupon_schedule;
mod coupons;
mod day_count;

pub use coupon_schedule::{previous_coupon_date, Frequency};
pub use coupons::{coupdaybs, couppcd};
pub use day_count::{days_between, thirty_360_european, thirty_360_us, Basis};
