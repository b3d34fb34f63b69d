use std::cell::{Cell, RefCell};

use anyhow::Result;

use crate::model::employee::Employee;
use crate::repository::traits::EmployeeRepository;

/// Keeps the "persisted" collection in memory. Handy as a test double.
#[derive(Debug, Default)]
pub struct InMemoryEmployeeRepository {
    employees: RefCell<Vec<Employee>>,
    saves: Cell<usize>,
}

impl InMemoryEmployeeRepository {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_employees(employees: Vec<Employee>) -> Self {
        Self {
            employees: RefCell::new(employees),
            saves: Cell::new(0),
        }
    }

    /// Snapshot of the last saved collection.
    pub fn snapshot(&self) -> Vec<Employee> {
        self.employees.borrow().clone()
    }

    pub fn save_count(&self) -> usize {
        self.saves.get()
    }
}

impl EmployeeRepository for InMemoryEmployeeRepository {
    fn load(&self) -> Result<Vec<Employee>> {
        Ok(self.snapshot())
    }

    fn save(&self, employees: &[Employee]) -> Result<()> {
        *self.employees.borrow_mut() = employees.to_vec();
        self.saves.set(self.saves.get() + 1);
        Ok(())
    }
}
