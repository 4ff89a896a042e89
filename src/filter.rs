// Row filtering for the employee table

use crate::models::Employee;
use crate::record::Column;

/// Composite predicate: free-text search AND exact department match.
/// An empty part matches every row.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Filter {
    /// Case-insensitive substring searched in every column
    pub search: String,
    /// Exact department name, e.g. "Engineering"
    pub department: String,
}

impl Filter {
    pub fn new(search: impl Into<String>, department: impl Into<String>) -> Self {
        Self {
            search: search.into(),
            department: department.into(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.search.is_empty() && self.department.is_empty()
    }

    pub fn matches(&self, employee: &Employee) -> bool {
        self.matches_department(employee) && self.matches_search(employee)
    }

    fn matches_search(&self, employee: &Employee) -> bool {
        if self.search.is_empty() {
            return true;
        }
        let needle = self.search.to_lowercase();
        Column::ALL
            .iter()
            .any(|c| employee.field(*c).to_string().to_lowercase().contains(&needle))
    }

    fn matches_department(&self, employee: &Employee) -> bool {
        self.department.is_empty() || employee.department.as_str() == self.department
    }
}

impl std::fmt::Display for Filter {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match (self.search.is_empty(), self.department.is_empty()) {
            (true, true) => write!(f, "all"),
            (false, true) => write!(f, "search \"{}\"", self.search),
            (true, false) => write!(f, "department {}", self.department),
            (false, false) => write!(f, "search \"{}\" in {}", self.search, self.department),
        }
    }
}
