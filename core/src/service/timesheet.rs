//! Builders for the whole-`monthlyData` patches the editing screens send.
//!
//! The store never edits single days itself; these helpers copy the current
//! log, change it, and hand back a patch for [`EmployeeStore::update`].
//!
//! [`EmployeeStore::update`]: crate::service::employee_store::EmployeeStore::update

use rust_decimal::Decimal;

use crate::error::PaysheetError;
use crate::input::check_rate;
use crate::model::day_entry::{DayEntry, DayKey, YearMonth};
use crate::model::employee::{Employee, EmployeePatch};

/// Hours stored for `day`, or zero when nothing is logged.
pub fn hours_on(employee: &Employee, day: DayKey) -> Decimal {
    employee
        .monthly_data
        .get(&day)
        .map(|entry| entry.hours())
        .unwrap_or(Decimal::ZERO)
}

/// Sets `day` to `hours` and carries the (possibly changed) rate along, since
/// the edit form saves both at once.
pub fn edit_day_patch(
    employee: &Employee,
    day: DayKey,
    hours: Decimal,
    rate: Decimal,
) -> Result<EmployeePatch, PaysheetError> {
    let rate = check_rate(rate)?;
    let mut monthly_data = employee.monthly_data.clone();
    monthly_data.insert(day, DayEntry::new(hours)?);
    Ok(EmployeePatch::new().monthly_data(monthly_data).rate(rate))
}

pub fn remove_day_patch(employee: &Employee, day: DayKey) -> EmployeePatch {
    let mut monthly_data = employee.monthly_data.clone();
    monthly_data.remove(&day);
    EmployeePatch::new().monthly_data(monthly_data)
}

/// Drops every day of `month` (that year only) and keeps the rest.
pub fn reset_month_patch(employee: &Employee, month: YearMonth) -> EmployeePatch {
    let monthly_data = employee
        .monthly_data
        .iter()
        .filter(|(day, _)| !month.contains(**day))
        .map(|(day, entry)| (*day, *entry))
        .collect();
    EmployeePatch::new().monthly_data(monthly_data)
}
