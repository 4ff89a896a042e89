// Column addressing and typed cell values for employee rows

use crate::error::TableError;
use crate::models::Employee;
use std::fmt;
use std::str::FromStr;

/// A sortable, searchable column of the employee table
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Column {
    Id,
    Name,
    Email,
    Department,
    Salary,
    Status,
}

impl Column {
    /// Display order of the columns
    pub const ALL: [Column; 6] = [
        Column::Id,
        Column::Name,
        Column::Email,
        Column::Department,
        Column::Salary,
        Column::Status,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            Column::Id => "id",
            Column::Name => "name",
            Column::Email => "email",
            Column::Department => "department",
            Column::Salary => "salary",
            Column::Status => "status",
        }
    }

    pub fn title(self) -> &'static str {
        match self {
            Column::Id => "ID",
            Column::Name => "Name",
            Column::Email => "Email",
            Column::Department => "Department",
            Column::Salary => "Salary",
            Column::Status => "Status",
        }
    }

    pub fn is_numeric(self) -> bool {
        matches!(self, Column::Id | Column::Salary)
    }
}

impl fmt::Display for Column {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Column {
    type Err = TableError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim();
        Column::ALL
            .into_iter()
            .find(|c| c.as_str().eq_ignore_ascii_case(wanted))
            .ok_or_else(|| TableError::UnknownColumn(s.to_string()))
    }
}

/// Value of one cell
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FieldValue<'a> {
    Int(u64),
    Text(&'a str),
}

impl fmt::Display for FieldValue<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FieldValue::Int(i) => write!(f, "{}", i),
            FieldValue::Text(s) => write!(f, "{}", s),
        }
    }
}

impl Employee {
    pub fn field(&self, column: Column) -> FieldValue<'_> {
        match column {
            Column::Id => FieldValue::Int(self.id),
            Column::Name => FieldValue::Text(&self.name),
            Column::Email => FieldValue::Text(&self.email),
            Column::Department => FieldValue::Text(self.department.as_str()),
            Column::Salary => FieldValue::Int(self.salary),
            Column::Status => FieldValue::Text(self.status.as_str()),
        }
    }
}
