use serde::{Deserialize, Serialize};

use crate::error::PaysheetError;
use crate::model::employee::{Employee, EmployeeId};
use crate::model::stats::{EmployeeTotals, MonthStat};
use crate::repository::EmployeeRepository;
use crate::service::aggregator::{self, YearPolicy};
use crate::service::dto::MonthRow;
use crate::service::employee_store::EmployeeStore;

/// Everything the per-employee detail screen shows.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct EmployeeDetail {
    pub id: EmployeeId,
    pub name: String,
    pub months: Vec<MonthStat>,
    pub rows: Vec<MonthRow>,
    pub totals: EmployeeTotals,
}

pub struct EmployeeDetailUseCase<'a, R: EmployeeRepository> {
    store: &'a EmployeeStore<R>,
    policy: YearPolicy,
}

impl<'a, R: EmployeeRepository> EmployeeDetailUseCase<'a, R> {
    pub fn new(store: &'a EmployeeStore<R>) -> Self {
        Self {
            store,
            policy: YearPolicy::default(),
        }
    }

    pub fn with_policy(mut self, policy: YearPolicy) -> Self {
        self.policy = policy;
        self
    }

    /// `Ok(None)` when no employee has `id`.
    pub fn get(&self, id: &EmployeeId) -> Result<Option<EmployeeDetail>, PaysheetError> {
        self.store.get(id).map(|employee| self.build(employee)).transpose()
    }

    fn build(&self, employee: &Employee) -> Result<EmployeeDetail, PaysheetError> {
        let months = aggregator::monthly_breakdown(&employee.monthly_data, self.policy)?;
        let rows = months.iter().map(MonthRow::from).collect();
        Ok(EmployeeDetail {
            id: employee.id,
            name: employee.name.clone(),
            months,
            rows,
            totals: aggregator::totals(employee)?,
        })
    }
}
