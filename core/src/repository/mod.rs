pub mod file;
pub mod memory;
pub mod traits;

pub use file::FileEmployeeRepository;
pub use memory::InMemoryEmployeeRepository;
pub use traits::EmployeeRepository;
