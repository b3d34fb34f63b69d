use std::path::PathBuf;

use anyhow::{anyhow, Result};

/// Overrides the data directory, mostly for tests and portable installs.
pub const DATA_DIR_ENV: &str = "PAYSHEET_HOME";

/// Name of the file holding the whole employee collection.
pub const EMPLOYEES_FILE_NAME: &str = "employees.json";

/// Resolves the directory the employee file lives in.
///
/// Order: `PAYSHEET_HOME`, then `<local data dir>/paysheet`, then `~/.paysheet`.
pub fn data_dir() -> Result<PathBuf> {
    resolve_data_dir(std::env::var_os(DATA_DIR_ENV).map(PathBuf::from))
}

fn resolve_data_dir(env_override: Option<PathBuf>) -> Result<PathBuf> {
    if let Some(dir) = env_override.filter(|d| !d.as_os_str().is_empty()) {
        return Ok(dir);
    }
    if let Some(dir) = dirs::data_local_dir() {
        return Ok(dir.join("paysheet"));
    }
    dirs::home_dir()
        .map(|home| home.join(".paysheet"))
        .ok_or_else(|| anyhow!("Could not determine a data directory; set {}", DATA_DIR_ENV))
}
