pub(crate) mod number;
pub mod datetime;

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DateOrder {
    /// Month / day / year (e.g. `12/31/2024`).
    #[default]
    Mdy,
    /// Day / month / year (e.g. `31/12/2024`).
    Dmy,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ValueLocaleConfig {
    pub decimal_separator: char,
    pub group_separator: char,
    pub date_order: DateOrder,
}

impl ValueLocaleConfig {
    #[must_use]
    pub const fn en_us() -> Self {
        Self {
            decimal_separator: '.',
            group_separator: ',',
            date_order: DateOrder::Mdy,
        }
    }

    #[must_use]
    pub const fn de_de() -> Self {
        Self {
            decimal_separator: ',',
            group_separator: '.',
            date_order: DateOrder::Dmy,
        }
    }
}

impl Default for ValueLocaleConfig {
    fn default() -> Self {
        Self::en_us()
    }
}
