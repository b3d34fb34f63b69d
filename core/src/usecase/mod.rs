pub mod employee_detail;
