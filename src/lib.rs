// StaffTable - In-memory employee table with filtering, sorting and paging

pub mod config;
pub mod error;
pub mod filter;
pub mod jsonl;
pub mod models;
pub mod page;
pub mod record;
pub mod render;
pub mod shell;
pub mod sort;
pub mod table;

// Re-export main types for convenience
pub use config::Config;
pub use error::TableError;
pub use filter::Filter;
pub use models::{Department, Employee, EmployeeDraft, EmployeePatch, EmploymentStatus, seed_employees};
pub use page::Page;
pub use record::{Column, FieldValue};
pub use sort::{Sort, SortDirection};
pub use table::EmployeeTable;
