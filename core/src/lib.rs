pub mod config;
pub mod error;
pub mod input;
pub mod model;
pub mod repository;
pub mod service;
pub mod time;
pub mod usecase;

pub use error::PaysheetError;
pub use input::{format_two_places, parse_hours, parse_rate};
pub use model::day_entry::{DayEntry, DayKey, MonthlyData, YearMonth};
pub use model::employee::{Employee, EmployeeId, EmployeePatch};
pub use model::stats::{EmployeeTotals, MonthStat};
pub use repository::{EmployeeRepository, FileEmployeeRepository, InMemoryEmployeeRepository};
pub use service::aggregator::{
    monthly_breakdown, total_days_worked, total_hours, total_pay, totals, YearPolicy,
};
pub use service::dto::{EmployeeRow, MonthRow};
pub use service::employee_store::EmployeeStore;
pub use time::{local_day_key, today_key};
pub use usecase::employee_detail::{EmployeeDetail, EmployeeDetailUseCase};
