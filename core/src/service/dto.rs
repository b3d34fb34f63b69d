use serde::{Deserialize, Serialize};

use crate::error::PaysheetError;
use crate::input::format_two_places;
use crate::model::employee::{Employee, EmployeeId};
use crate::model::stats::MonthStat;
use crate::service::aggregator;
use crate::time::month_label;

/// One line of the employee table, with amounts already formatted.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct EmployeeRow {
    pub id: EmployeeId,
    pub name: String,
    pub rate: String,
    pub total_hours: String,
    pub total_days_worked: usize,
    pub total_pay: String,
}

impl EmployeeRow {
    pub fn from_entity(employee: &Employee) -> Result<Self, PaysheetError> {
        let totals = aggregator::totals(employee)?;
        Ok(Self {
            id: employee.id,
            name: employee.name.clone(),
            rate: format_two_places(employee.rate),
            total_hours: format_two_places(totals.total_hours),
            total_days_worked: totals.total_days_worked,
            total_pay: format_two_places(totals.total_pay),
        })
    }
}

/// One row of the detail view's month table.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct MonthRow {
    pub label: String,
    pub hours: String,
    pub days_worked: u32,
}

impl From<&MonthStat> for MonthRow {
    fn from(stat: &MonthStat) -> Self {
        Self {
            label: month_label(stat.month),
            hours: format_two_places(stat.hours_for_month),
            days_worked: stat.days_worked_for_month,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::day_entry::{DayEntry, DayKey};
    use crate::service::aggregator::YearPolicy;
    use rust_decimal_macros::dec;

    #[test]
    fn test_row_from_entity() {
        let mut employee = Employee::new("Ana".to_string(), dec!(15));
        employee.monthly_data.insert(
            DayKey::parse("2024-03-01").unwrap(),
            DayEntry::new(dec!(4)).unwrap(),
        );
        employee.monthly_data.insert(
            DayKey::parse("2024-03-02").unwrap(),
            DayEntry::new(dec!(6)).unwrap(),
        );

        let row = EmployeeRow::from_entity(&employee).unwrap();
        assert_eq!(row.id, employee.id);
        assert_eq!(row.rate, "15.00");
        assert_eq!(row.total_hours, "10.00");
        assert_eq!(row.total_days_worked, 2);
        assert_eq!(row.total_pay, "150.00");
    }

    #[test]
    fn test_month_rows() {
        let mut employee = Employee::new("Bo".to_string(), dec!(10));
        employee.monthly_data.insert(
            DayKey::parse("2024-02-10").unwrap(),
            DayEntry::new(dec!(7.5)).unwrap(),
        );
        let rows: Vec<MonthRow> = aggregator::monthly_breakdown(&employee.monthly_data, YearPolicy::AllYears)
            .unwrap()
            .iter()
            .map(MonthRow::from)
            .collect();

        assert_eq!(rows.len(), 12);
        assert_eq!(
            rows[1],
            MonthRow {
                label: "Month 2".to_string(),
                hours: "7.50".to_string(),
                days_worked: 1,
            }
        );
        assert_eq!(rows[0].hours, "0.00");
    }
}
