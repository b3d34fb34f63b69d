use crate::model::employee::Employee;
use anyhow::Result;

/// Where the employee collection is kept between runs.
///
/// `load` must not fail on malformed content: it returns an empty collection
/// instead. Only genuine I/O problems are errors.
pub trait EmployeeRepository {
    fn load(&self) -> Result<Vec<Employee>>;
    /// Replaces whatever was stored before with `employees`, in order.
    fn save(&self, employees: &[Employee]) -> Result<()>;
}
