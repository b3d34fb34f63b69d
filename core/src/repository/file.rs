use std::fs::{self, File};
use std::io::{self, BufWriter, Write};
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use log::{info, warn};

use crate::config::{data_dir, EMPLOYEES_FILE_NAME};
use crate::model::employee::Employee;
use crate::repository::traits::EmployeeRepository;

/// Keeps the whole collection as one pretty-printed JSON array.
#[derive(Clone, Debug)]
pub struct FileEmployeeRepository {
    file_path: PathBuf,
}

impl FileEmployeeRepository {
    pub fn new(base_dir: Option<PathBuf>) -> Result<Self> {
        let mut path = match base_dir {
            Some(dir) => dir,
            None => data_dir()?,
        };
        fs::create_dir_all(&path)
            .with_context(|| format!("Could not create data directory {}", path.display()))?;
        path.push(EMPLOYEES_FILE_NAME);

        let repo = FileEmployeeRepository { file_path: path };
        if !repo.file_path.exists() {
            repo.write_employees(&[])?;
        }
        Ok(repo)
    }

    pub fn path(&self) -> &Path {
        &self.file_path
    }

    fn write_employees(&self, employees: &[Employee]) -> Result<()> {
        let file = File::create(&self.file_path)
            .with_context(|| format!("Could not open {} for writing", self.file_path.display()))?;
        let mut writer = BufWriter::new(file);
        serde_json::to_writer_pretty(&mut writer, employees)?;
        writer.flush()?;
        Ok(())
    }
}

impl EmployeeRepository for FileEmployeeRepository {
    fn load(&self) -> Result<Vec<Employee>> {
        let content = match fs::read_to_string(&self.file_path) {
            Ok(content) => content,
            Err(e) if e.kind() == io::ErrorKind::NotFound => return Ok(Vec::new()),
            Err(e) => {
                return Err(e)
                    .with_context(|| format!("Could not read {}", self.file_path.display()))
            }
        };

        if content.trim().is_empty() {
            return Ok(Vec::new());
        }

        match serde_json::from_str::<Vec<Employee>>(&content) {
            Ok(employees) => {
                info!(
                    "Loaded {} employee(s) from {}",
                    employees.len(),
                    self.file_path.display()
                );
                Ok(employees)
            }
            Err(e) => {
                warn!(
                    "Ignoring malformed employee data in {}: {}",
                    self.file_path.display(),
                    e
                );
                Ok(Vec::new())
            }
        }
    }

    fn save(&self, employees: &[Employee]) -> Result<()> {
        self.write_employees(employees)
    }
}
