pub mod aggregator;
pub mod dto;
pub mod employee_store;
pub mod timesheet;
