// Errors raised by table commands

use thiserror::Error;

/// A rejected command. Every variant leaves the table untouched.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TableError {
    #[error("no employee with id {0}")]
    NotFound(u64),

    #[error("page size {size} is not one of {allowed:?}")]
    InvalidPageSize { size: usize, allowed: Vec<usize> },

    #[error("unknown column: {0}")]
    UnknownColumn(String),

    #[error("unknown department: {0}")]
    UnknownDepartment(String),

    #[error("unknown status: {0}")]
    UnknownStatus(String),
}

impl TableError {
    pub fn is_not_found(&self) -> bool {
        matches!(self, TableError::NotFound(_))
    }
}
