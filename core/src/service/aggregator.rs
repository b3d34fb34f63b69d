use rust_decimal::Decimal;

use crate::error::PaysheetError;
use crate::input::round_two_places;
use crate::model::day_entry::MonthlyData;
use crate::model::employee::Employee;
use crate::model::stats::{EmployeeTotals, MonthStat};

/// Which years feed the per-month breakdown.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum YearPolicy {
    /// Same calendar month of every year is summed together.
    #[default]
    AllYears,
    /// Only days from this year are counted.
    Only(i32),
}

impl YearPolicy {
    fn includes(&self, year: i32) -> bool {
        match self {
            YearPolicy::AllYears => true,
            YearPolicy::Only(only) => *only == year,
        }
    }
}

// Standalone functions for pure logic. None of them mutate their input.
// Sums use checked arithmetic and report `Overflow` rather than panic.

fn checked_sum<I>(what: &'static str, values: I) -> Result<Decimal, PaysheetError>
where
    I: IntoIterator<Item = Decimal>,
{
    values.into_iter().try_fold(Decimal::ZERO, |acc, value| {
        acc.checked_add(value).ok_or(PaysheetError::Overflow(what))
    })
}

pub fn total_hours(monthly_data: &MonthlyData) -> Result<Decimal, PaysheetError> {
    let sum = checked_sum("total hours", monthly_data.values().map(|entry| entry.hours()))?;
    Ok(round_two_places(sum))
}

/// Number of logged days, zero-hour days included.
pub fn total_days_worked(monthly_data: &MonthlyData) -> usize {
    monthly_data.len()
}

/// Twelve rows, January first. Unlike [`total_days_worked`], a day only
/// counts as worked here when its hours are above zero.
pub fn monthly_breakdown(
    monthly_data: &MonthlyData,
    policy: YearPolicy,
) -> Result<Vec<MonthStat>, PaysheetError> {
    let mut months: Vec<MonthStat> = (1..=12).map(MonthStat::empty).collect();

    for (day, entry) in monthly_data {
        if !policy.includes(day.year()) {
            continue;
        }
        let stat = &mut months[(day.month() - 1) as usize];
        stat.hours_for_month = stat
            .hours_for_month
            .checked_add(entry.hours())
            .ok_or(PaysheetError::Overflow("monthly hours"))?;
        if entry.hours() > Decimal::ZERO {
            stat.days_worked_for_month += 1;
        }
    }

    for stat in &mut months {
        stat.hours_for_month = round_two_places(stat.hours_for_month);
    }
    Ok(months)
}

/// Rate times total hours. The rate is never applied per day.
pub fn total_pay(employee: &Employee) -> Result<Decimal, PaysheetError> {
    let pay = total_hours(&employee.monthly_data)?
        .checked_mul(employee.rate)
        .ok_or(PaysheetError::Overflow("total pay"))?;
    Ok(round_two_places(pay))
}

pub fn totals(employee: &Employee) -> Result<EmployeeTotals, PaysheetError> {
    Ok(EmployeeTotals {
        total_hours: total_hours(&employee.monthly_data)?,
        total_days_worked: total_days_worked(&employee.monthly_data),
        total_pay: total_pay(employee)?,
    })
}
