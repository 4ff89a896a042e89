// Column ordering for the employee table

use crate::models::Employee;
use crate::record::Column;
use std::cmp::Ordering;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SortDirection {
    #[default]
    Ascending,
    Descending,
}

impl SortDirection {
    pub fn flip(self) -> Self {
        match self {
            SortDirection::Ascending => SortDirection::Descending,
            SortDirection::Descending => SortDirection::Ascending,
        }
    }

    pub fn arrow(self) -> &'static str {
        match self {
            SortDirection::Ascending => "▲",
            SortDirection::Descending => "▼",
        }
    }
}

/// Active sort key and direction
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Sort {
    pub column: Column,
    pub direction: SortDirection,
}

impl Default for Sort {
    fn default() -> Self {
        Self {
            column: Column::Id,
            direction: SortDirection::Ascending,
        }
    }
}

impl Sort {
    /// Clicking the active column flips direction; any other column starts ascending.
    pub fn toggle(self, column: Column) -> Self {
        if column == self.column {
            Self {
                column,
                direction: self.direction.flip(),
            }
        } else {
            Self {
                column,
                direction: SortDirection::Ascending,
            }
        }
    }

    /// Ordering of two rows under this key and direction. Descending swaps the
    /// arguments, so a stable sort keeps equal keys in input order either way.
    pub fn compare(&self, a: &Employee, b: &Employee) -> Ordering {
        let compare = comparator(self.column);
        match self.direction {
            SortDirection::Ascending => compare(a, b),
            SortDirection::Descending => compare(b, a),
        }
    }
}

pub type Comparator = fn(&Employee, &Employee) -> Ordering;

fn by_id(a: &Employee, b: &Employee) -> Ordering {
    a.id.cmp(&b.id)
}

fn by_salary(a: &Employee, b: &Employee) -> Ordering {
    a.salary.cmp(&b.salary)
}

fn by_name(a: &Employee, b: &Employee) -> Ordering {
    cmp_text(&a.name, &b.name)
}

fn by_email(a: &Employee, b: &Employee) -> Ordering {
    cmp_text(&a.email, &b.email)
}

fn by_department(a: &Employee, b: &Employee) -> Ordering {
    cmp_text(a.department.as_str(), b.department.as_str())
}

fn by_status(a: &Employee, b: &Employee) -> Ordering {
    cmp_text(a.status.as_str(), b.status.as_str())
}

fn cmp_text(a: &str, b: &str) -> Ordering {
    a.to_lowercase().cmp(&b.to_lowercase())
}

/// Comparator per column. Numeric columns compare as numbers, the rest as
/// lowercase text.
const COMPARATORS: [(Column, Comparator); 6] = [
    (Column::Id, by_id),
    (Column::Name, by_name),
    (Column::Email, by_email),
    (Column::Department, by_department),
    (Column::Salary, by_salary),
    (Column::Status, by_status),
];

pub fn comparator(column: Column) -> Comparator {
    COMPARATORS
        .iter()
        .find(|(c, _)| *c == column)
        .map(|(_, f)| *f)
        .unwrap_or(by_id)
}
