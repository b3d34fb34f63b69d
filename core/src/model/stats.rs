use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// One row of the per-month breakdown.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct MonthStat {
    /// 1-12.
    pub month: u32,
    pub hours_for_month: Decimal,
    /// Days in the month with hours strictly above zero.
    pub days_worked_for_month: u32,
}

impl MonthStat {
    pub fn empty(month: u32) -> Self {
        Self {
            month,
            hours_for_month: Decimal::ZERO,
            days_worked_for_month: 0,
        }
    }
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct EmployeeTotals {
    pub total_hours: Decimal,
    /// Every logged day, including zero-hour ones.
    pub total_days_worked: usize,
    pub total_pay: Decimal,
}
