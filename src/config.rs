// YAML configuration for the table and the CLI

use crate::models::{Department, EmploymentStatus};
use crate::page::{DEFAULT_PAGE_SIZE, DEFAULT_PAGE_SIZES};
use eyre::{Context, Result, eyre};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use tracing::{debug, info};

const CONFIG_DIR: &str = "stafftable";
const CONFIG_FILE: &str = "config.yml";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Rows per page when the table opens
    pub page_size: usize,
    /// Page sizes the user may switch between
    pub page_sizes: Vec<usize>,
    /// Values given to fields a new employee is added without
    pub defaults: NewEmployeeDefaults,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            page_size: DEFAULT_PAGE_SIZE,
            page_sizes: DEFAULT_PAGE_SIZES.to_vec(),
            defaults: NewEmployeeDefaults::default(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct NewEmployeeDefaults {
    pub name: String,
    /// New employees get `new.employee{id}@{email_domain}`
    pub email_domain: String,
    pub department: Department,
    pub salary: u64,
    pub status: EmploymentStatus,
}

impl Default for NewEmployeeDefaults {
    fn default() -> Self {
        Self {
            name: "New Employee".to_string(),
            email_domain: "company.com".to_string(),
            department: Department::Engineering,
            salary: 60000,
            status: EmploymentStatus::Active,
        }
    }
}

impl NewEmployeeDefaults {
    pub fn email_for(&self, id: u64) -> String {
        format!("new.employee{}@{}", id, self.email_domain)
    }
}

impl Config {
    /// Load configuration
    ///
    /// An explicit path must exist. Without one, the per-user config file is used
    /// when present and the built-in defaults otherwise.
    pub fn load(path: Option<&Path>) -> Result<Self> {
        let path = match path {
            Some(p) => p.to_path_buf(),
            None => match Self::default_path().filter(|p| p.exists()) {
                Some(p) => p,
                None => {
                    debug!("No config file found, using defaults");
                    return Ok(Self::default());
                }
            },
        };

        let config = Self::from_file(&path)?;
        info!(path = ?path, page_size = config.page_size, "Loaded config");
        Ok(config)
    }

    pub fn from_file(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path).with_context(|| format!("Failed to read config file {:?}", path))?;
        Self::from_yaml(&content).with_context(|| format!("Invalid config file {:?}", path))
    }

    pub fn from_yaml(content: &str) -> Result<Self> {
        let config: Config = serde_yaml::from_str(content).context("Failed to parse YAML")?;
        config.validate()?;
        Ok(config)
    }

    /// `~/.config/stafftable/config.yml` or the platform equivalent
    pub fn default_path() -> Option<PathBuf> {
        dirs::config_dir().map(|d| d.join(CONFIG_DIR).join(CONFIG_FILE))
    }

    pub fn validate(&self) -> Result<()> {
        if self.page_sizes.is_empty() {
            return Err(eyre!("page_sizes cannot be empty"));
        }
        if self.page_sizes.contains(&0) {
            return Err(eyre!("page_sizes cannot contain 0"));
        }
        if !self.page_sizes.contains(&self.page_size) {
            return Err(eyre!(
                "page_size {} is not one of page_sizes {:?}",
                self.page_size,
                self.page_sizes
            ));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_default_config_is_valid() {
        let config = Config::default();
        assert!(config.validate().is_ok());
        assert_eq!(config.page_size, 10);
        assert_eq!(config.page_sizes, vec![10, 25, 50, 100]);
        assert_eq!(config.defaults.email_for(13), "new.employee13@company.com");
    }

    #[test]
    fn test_partial_yaml_uses_defaults() {
        let config = Config::from_yaml("page_size: 25\n").unwrap();
        assert_eq!(config.page_size, 25);
        assert_eq!(config.page_sizes, vec![10, 25, 50, 100]);
        assert_eq!(config.defaults.name, "New Employee");
    }

    #[test]
    fn test_full_yaml() {
        let yaml = r#"
page_size: 5
page_sizes: [5, 15]
defaults:
  name: Intern
  email_domain: example.org
  department: HR
  salary: 30000
  status: On Leave
"#;
        let config = Config::from_yaml(yaml).unwrap();
        assert_eq!(config.page_size, 5);
        assert_eq!(config.defaults.department, Department::Hr);
        assert_eq!(config.defaults.status, EmploymentStatus::OnLeave);
        assert_eq!(config.defaults.email_for(2), "new.employee2@example.org");
    }

    #[test]
    fn test_invalid_configs() {
        assert!(Config::from_yaml("page_size: 7\n").is_err());
        assert!(Config::from_yaml("page_sizes: []\n").is_err());
        assert!(Config::from_yaml("page_size: 0\npage_sizes: [0]\n").is_err());
        assert!(Config::from_yaml("defaults:\n  department: Legal\n").is_err());
    }

    #[test]
    fn test_load_from_file() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("config.yml");
        fs::write(&path, "page_size: 50\n").unwrap();

        let config = Config::load(Some(&path)).unwrap();
        assert_eq!(config.page_size, 50);
    }

    #[test]
    fn test_load_missing_explicit_path_fails() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("missing.yml");
        assert!(Config::load(Some(&path)).is_err());
    }
}
