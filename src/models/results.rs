use serde::{Deserialize, Serialize};

/// Output of one calculator run. Replaced wholesale on every run.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CalculationResult {
    pub hours_per_year: i64,
    /// One fractional digit, e.g. "15.0"
    pub risk_percent: String,
    /// One fractional digit, e.g. "5.0"
    pub growth_percent: String,
    /// hours_per_year × hourly_value × 12, unformatted
    pub annual_money_value: i64,
}
