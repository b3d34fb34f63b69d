pub mod day_entry;
pub mod employee;
pub mod stats;
