// Data models for the employee table

use crate::error::TableError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// A single row of the employee table
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Employee {
    pub id: u64,
    pub name: String,
    pub email: String,
    pub department: Department,
    pub salary: u64,
    pub status: EmploymentStatus,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Department {
    Engineering,
    Marketing,
    Sales,
    #[serde(rename = "HR")]
    Hr,
    Finance,
}

impl Department {
    pub const ALL: [Department; 5] = [
        Department::Engineering,
        Department::Marketing,
        Department::Sales,
        Department::Hr,
        Department::Finance,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            Department::Engineering => "Engineering",
            Department::Marketing => "Marketing",
            Department::Sales => "Sales",
            Department::Hr => "HR",
            Department::Finance => "Finance",
        }
    }
}

impl fmt::Display for Department {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Department {
    type Err = TableError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim();
        Department::ALL
            .into_iter()
            .find(|d| d.as_str().eq_ignore_ascii_case(wanted))
            .ok_or_else(|| TableError::UnknownDepartment(s.to_string()))
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum EmploymentStatus {
    Active,
    Inactive,
    #[serde(rename = "On Leave")]
    OnLeave,
}

impl EmploymentStatus {
    pub const ALL: [EmploymentStatus; 3] = [
        EmploymentStatus::Active,
        EmploymentStatus::Inactive,
        EmploymentStatus::OnLeave,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            EmploymentStatus::Active => "Active",
            EmploymentStatus::Inactive => "Inactive",
            EmploymentStatus::OnLeave => "On Leave",
        }
    }
}

impl fmt::Display for EmploymentStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for EmploymentStatus {
    type Err = TableError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized = s.trim().replace(['-', '_'], " ");
        EmploymentStatus::ALL
            .into_iter()
            .find(|st| st.as_str().eq_ignore_ascii_case(&normalized))
            .ok_or_else(|| TableError::UnknownStatus(s.to_string()))
    }
}

/// Field values for a new employee; anything left `None` is filled from defaults
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct EmployeeDraft {
    pub name: Option<String>,
    pub email: Option<String>,
    pub department: Option<Department>,
    pub salary: Option<u64>,
    pub status: Option<EmploymentStatus>,
}

/// Partial update for an existing employee. The id is never patchable.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct EmployeePatch {
    pub name: Option<String>,
    pub email: Option<String>,
    pub department: Option<Department>,
    pub salary: Option<u64>,
    pub status: Option<EmploymentStatus>,
}

impl EmployeePatch {
    pub fn is_empty(&self) -> bool {
        self.name.is_none()
            && self.email.is_none()
            && self.department.is_none()
            && self.salary.is_none()
            && self.status.is_none()
    }

    /// Overwrite the provided fields of `employee`
    pub fn apply_to(self, employee: &mut Employee) {
        if let Some(name) = self.name {
            employee.name = name;
        }
        if let Some(email) = self.email {
            employee.email = email;
        }
        if let Some(department) = self.department {
            employee.department = department;
        }
        if let Some(salary) = self.salary {
            employee.salary = salary;
        }
        if let Some(status) = self.status {
            employee.status = status;
        }
    }
}

/// The twelve demonstration employees the table starts with
pub fn seed_employees() -> Vec<Employee> {
    use Department::*;
    use EmploymentStatus::*;

    let rows: [(&str, &str, Department, u64, EmploymentStatus); 12] = [
        ("John Smith", "john.smith", Engineering, 75000, Active),
        ("Sarah Johnson", "sarah.johnson", Marketing, 65000, Active),
        ("Michael Brown", "michael.brown", Sales, 70000, Active),
        ("Emily Davis", "emily.davis", Hr, 60000, Active),
        ("David Wilson", "david.wilson", Engineering, 80000, Active),
        ("Lisa Anderson", "lisa.anderson", Finance, 70000, Inactive),
        ("Robert Taylor", "robert.taylor", Sales, 65000, Active),
        ("Jennifer Martinez", "jennifer.martinez", Marketing, 60000, OnLeave),
        ("Christopher Garcia", "christopher.garcia", Engineering, 85000, Active),
        ("Amanda Rodriguez", "amanda.rodriguez", Hr, 55000, Active),
        ("James Lee", "james.lee", Finance, 75000, Active),
        ("Michelle White", "michelle.white", Sales, 70000, Active),
    ];

    rows.into_iter()
        .enumerate()
        .map(|(idx, (name, mailbox, department, salary, status))| Employee {
            id: idx as u64 + 1,
            name: name.to_string(),
            email: format!("{}@company.com", mailbox),
            department,
            salary,
            status,
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_seed_employees() {
        let seed = seed_employees();
        assert_eq!(seed.len(), 12);
        assert_eq!(seed[0].id, 1);
        assert_eq!(seed[0].name, "John Smith");
        assert_eq!(seed[0].email, "john.smith@company.com");
        assert_eq!(seed[11].id, 12);
        assert_eq!(seed[7].status, EmploymentStatus::OnLeave);
    }

    #[test]
    fn test_department_parse() {
        assert_eq!("engineering".parse::<Department>().unwrap(), Department::Engineering);
        assert_eq!("hr".parse::<Department>().unwrap(), Department::Hr);
        assert_eq!(" Finance ".parse::<Department>().unwrap(), Department::Finance);
        assert!(matches!(
            "Legal".parse::<Department>(),
            Err(TableError::UnknownDepartment(_))
        ));
    }

    #[test]
    fn test_status_parse() {
        assert_eq!("active".parse::<EmploymentStatus>().unwrap(), EmploymentStatus::Active);
        assert_eq!("On Leave".parse::<EmploymentStatus>().unwrap(), EmploymentStatus::OnLeave);
        assert_eq!("on-leave".parse::<EmploymentStatus>().unwrap(), EmploymentStatus::OnLeave);
        assert_eq!("on_leave".parse::<EmploymentStatus>().unwrap(), EmploymentStatus::OnLeave);
        assert!("retired".parse::<EmploymentStatus>().is_err());
    }

    #[test]
    fn test_enum_serialization() {
        let json = serde_json::to_string(&Department::Hr).unwrap();
        assert_eq!(json, "\"HR\"");

        let json = serde_json::to_string(&EmploymentStatus::OnLeave).unwrap();
        assert_eq!(json, "\"On Leave\"");
    }

    #[test]
    fn test_employee_serialization() {
        let employee = seed_employees().remove(0);
        let json = serde_json::to_string(&employee).unwrap();
        let deserialized: Employee = serde_json::from_str(&json).unwrap();
        assert_eq!(deserialized, employee);
    }

    #[test]
    fn test_patch_preserves_unset_fields() {
        let mut employee = seed_employees().remove(0);
        let patch = EmployeePatch {
            salary: Some(90000),
            status: Some(EmploymentStatus::OnLeave),
            ..Default::default()
        };
        assert!(!patch.is_empty());

        patch.apply_to(&mut employee);
        assert_eq!(employee.id, 1);
        assert_eq!(employee.name, "John Smith");
        assert_eq!(employee.salary, 90000);
        assert_eq!(employee.status, EmploymentStatus::OnLeave);
        assert!(EmployeePatch::default().is_empty());
    }
}
