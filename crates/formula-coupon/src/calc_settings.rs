use serde::{Deserialize, Serialize};

use crate::coercion::ValueLocaleConfig;
use crate::date::ExcelDateSystem;
use crate::functions::FunctionContext;

/// Workbook-level settings that influence how function arguments are interpreted.
///
/// Hosts typically persist these alongside the workbook and load them with
/// [`CalcSettings::from_json`]; missing fields fall back to the Excel (en-US, 1900) defaults.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct CalcSettings {
    pub date_system: ExcelDateSystem,
    pub value_locale: ValueLocaleConfig,
}

impl CalcSettings {
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }

    #[must_use]
    pub fn with_date_system(mut self, date_system: ExcelDateSystem) -> Self {
        self.date_system = date_system;
        self
    }

    #[must_use]
    pub fn with_value_locale(mut self, value_locale: ValueLocaleConfig) -> Self {
        self.value_locale = value_locale;
        self
    }
}

impl FunctionContext for CalcSettings {
    fn date_system(&self) -> ExcelDateSystem {
        self.date_system
    }

    fn value_locale(&self) -> ValueLocaleConfig {
        self.value_locale
    }
}
