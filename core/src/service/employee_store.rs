use anyhow::Result;
use log::debug;
use rust_decimal::Decimal;

use crate::error::PaysheetError;
use crate::input::{check_rate, parse_rate};
use crate::model::day_entry::{DayKey, YearMonth};
use crate::model::employee::{Employee, EmployeeId, EmployeePatch};
use crate::repository::EmployeeRepository;
use crate::service::dto::EmployeeRow;
use crate::service::timesheet;

/// Owns the in-memory employee collection and writes it through `repo`
/// after every change.
///
/// Updates and deletes aimed at an unknown id do nothing and return `false`;
/// nothing is saved in that case.
pub struct EmployeeStore<R: EmployeeRepository> {
    repo: R,
    employees: Vec<Employee>,
}

impl<R: EmployeeRepository> EmployeeStore<R> {
    /// Loads the saved collection once; malformed data comes back empty.
    pub fn open(repo: R) -> Result<Self> {
        let employees = repo.load()?;
        Ok(Self { repo, employees })
    }

    pub fn repository(&self) -> &R {
        &self.repo
    }

    /// All employees in the order they were added.
    pub fn list(&self) -> &[Employee] {
        &self.employees
    }

    pub fn get(&self, id: &EmployeeId) -> Option<&Employee> {
        self.employees.iter().find(|e| e.id == *id)
    }

    /// The name is stored as given; callers decide whether blank names are
    /// acceptable.
    pub fn create(&mut self, name: impl Into<String>, rate: Decimal) -> Result<Employee> {
        let rate = check_rate(rate)?;

        let mut employee = Employee::new(name.into(), rate);
        while self.get(&employee.id).is_some() {
            employee.id = EmployeeId::new();
        }

        self.employees.push(employee.clone());
        self.persist()?;
        debug!("Created employee {} ({})", employee.id, employee.name);
        Ok(employee)
    }

    /// Same as [`create`](Self::create) but takes the rate as typed text.
    pub fn create_from_input(&mut self, name: &str, rate: &str) -> Result<Employee> {
        let rate = parse_rate(rate)?;
        self.create(name, rate)
    }

    pub fn update(&mut self, id: &EmployeeId, mut patch: EmployeePatch) -> Result<bool> {
        if let Some(rate) = patch.rate {
            patch.rate = Some(check_rate(rate)?);
        }

        let Some(employee) = self.employees.iter_mut().find(|e| e.id == *id) else {
            debug!("Update skipped, no employee with id {}", id);
            return Ok(false);
        };
        employee.apply(patch);

        self.persist()?;
        debug!("Updated employee {}", id);
        Ok(true)
    }

    pub fn delete(&mut self, id: &EmployeeId) -> Result<bool> {
        let initial_len = self.employees.len();
        self.employees.retain(|e| e.id != *id);

        if self.employees.len() == initial_len {
            debug!("Delete skipped, no employee with id {}", id);
            return Ok(false);
        }

        self.persist()?;
        debug!("Deleted employee {}", id);
        Ok(true)
    }

    // Day-level editing, routed through `update` with a whole-log patch.

    pub fn set_day_hours(
        &mut self,
        id: &EmployeeId,
        day: DayKey,
        hours: Decimal,
        rate: Decimal,
    ) -> Result<bool> {
        let Some(employee) = self.get(id) else {
            return Ok(false);
        };
        let patch = timesheet::edit_day_patch(employee, day, hours, rate)?;
        self.update(id, patch)
    }

    pub fn remove_day(&mut self, id: &EmployeeId, day: DayKey) -> Result<bool> {
        let Some(employee) = self.get(id) else {
            return Ok(false);
        };
        let patch = timesheet::remove_day_patch(employee, day);
        self.update(id, patch)
    }

    pub fn reset_month(&mut self, id: &EmployeeId, month: YearMonth) -> Result<bool> {
        let Some(employee) = self.get(id) else {
            return Ok(false);
        };
        let patch = timesheet::reset_month_patch(employee, month);
        self.update(id, patch)
    }

    /// Rows for the list view, in list order.
    pub fn rows(&self) -> Result<Vec<EmployeeRow>, PaysheetError> {
        self.employees.iter().map(EmployeeRow::from_entity).collect()
    }

    fn persist(&self) -> Result<()> {
        self.repo.save(&self.employees)
    }
}
