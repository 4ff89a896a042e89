// Employee table: in-memory records plus a derived filtered/sorted/paged view

use crate::config::{Config, NewEmployeeDefaults};
use crate::error::TableError;
use crate::filter::Filter;
use crate::models::{Employee, EmployeeDraft, EmployeePatch};
use crate::page::{Page, PageSize, page_bounds, page_count};
use crate::record::Column;
use crate::sort::Sort;
use std::collections::HashMap;
use tracing::{debug, info, warn};

/// Owns the employee records and the view state.
///
/// The view is rebuilt from `(records, filter, sort)` after every command and
/// cached as indices into `records`. The commands below are the only way to
/// change either.
#[derive(Debug, Clone)]
pub struct EmployeeTable {
    records: Vec<Employee>,
    filter: Filter,
    sort: Sort,
    page: usize,
    page_size: PageSize,
    page_sizes: Vec<usize>,
    defaults: NewEmployeeDefaults,
    view: Vec<usize>,
}

impl EmployeeTable {
    /// Create a table with the built-in configuration.
    ///
    /// Ids are made unique: when an id repeats, the later record replaces the
    /// earlier one in the earlier one's position.
    pub fn new(records: Vec<Employee>) -> Self {
        let config = Config::default();
        let mut table = Self {
            records: unique_by_id(records),
            filter: Filter::default(),
            sort: Sort::default(),
            page: 1,
            page_size: PageSize::default(),
            page_sizes: config.page_sizes,
            defaults: config.defaults,
            view: Vec::new(),
        };
        table.rebuild();
        table
    }

    pub fn with_config(records: Vec<Employee>, config: &Config) -> Result<Self, TableError> {
        let page_size = PageSize::new(config.page_size, &config.page_sizes)?;
        let mut table = Self::new(records);
        table.page_size = page_size;
        table.page_sizes = config.page_sizes.clone();
        table.defaults = config.defaults.clone();
        table.rebuild();
        Ok(table)
    }

    // ========================================================================
    // Commands
    // ========================================================================

    /// Replace the filter and go back to the first page
    pub fn set_filter(&mut self, search: &str, department: &str) {
        self.filter = Filter::new(search, department);
        self.page = 1;
        self.rebuild();
        debug!(filter = %self.filter, matches = self.view.len(), "set_filter");
    }

    /// Sort by `column`, flipping direction when it is already the sort key.
    /// The current page is kept.
    pub fn sort_by(&mut self, column: Column) {
        self.sort = self.sort.toggle(column);
        self.rebuild();
        debug!(column = %self.sort.column, direction = ?self.sort.direction, "sort_by");
    }

    /// Append a new employee and return its id
    pub fn add(&mut self, draft: EmployeeDraft) -> u64 {
        let id = self.next_id();
        let employee = Employee {
            id,
            name: draft.name.unwrap_or_else(|| self.defaults.name.clone()),
            email: draft.email.unwrap_or_else(|| self.defaults.email_for(id)),
            department: draft.department.unwrap_or(self.defaults.department),
            salary: draft.salary.unwrap_or(self.defaults.salary),
            status: draft.status.unwrap_or(self.defaults.status),
        };
        info!(id, name = %employee.name, "Added employee");
        self.records.push(employee);
        self.rebuild();
        id
    }

    /// Overwrite the fields set in `patch` on employee `id`
    pub fn edit(&mut self, id: u64, patch: EmployeePatch) -> Result<(), TableError> {
        let employee = self
            .records
            .iter_mut()
            .find(|e| e.id == id)
            .ok_or(TableError::NotFound(id))?;
        patch.apply_to(employee);
        info!(id, "Updated employee");
        self.rebuild();
        Ok(())
    }

    /// Remove employee `id`. The page is pulled back when it no longer exists.
    pub fn delete(&mut self, id: u64) -> Result<Employee, TableError> {
        let idx = self
            .records
            .iter()
            .position(|e| e.id == id)
            .ok_or(TableError::NotFound(id))?;
        let removed = self.records.remove(idx);
        info!(id, "Deleted employee");
        self.rebuild();
        Ok(removed)
    }

    /// Change rows per page and go back to the first page
    pub fn set_page_size(&mut self, size: usize) -> Result<(), TableError> {
        self.page_size = PageSize::new(size, &self.page_sizes)?;
        self.page = 1;
        self.rebuild();
        Ok(())
    }

    /// Jump to `page`, clamped to the pages that exist
    pub fn set_page(&mut self, page: usize) {
        self.page = page.clamp(1, self.page_count());
    }

    pub fn next_page(&mut self) {
        self.set_page(self.page.saturating_add(1));
    }

    pub fn prev_page(&mut self) {
        self.set_page(self.page.saturating_sub(1));
    }

    /// Recompute the view from the current inputs
    pub fn refresh(&mut self) {
        self.rebuild();
    }

    // ========================================================================
    // Queries
    // ========================================================================

    /// The rows of the current page plus the shown/total counts
    pub fn page(&self) -> Page<'_> {
        let total_count = self.view.len();
        let (start, end) = page_bounds(self.page, self.page_size, total_count);
        let rows: Vec<&Employee> = self.view[start..end].iter().map(|&i| &self.records[i]).collect();

        Page {
            shown_count: rows.len(),
            rows,
            page: self.page,
            page_count: self.page_count(),
            page_size: self.page_size.get(),
            total_count,
        }
    }

    /// Every row matching the filter, in sort order
    pub fn view_records(&self) -> Vec<&Employee> {
        self.view.iter().map(|&i| &self.records[i]).collect()
    }

    pub fn get(&self, id: u64) -> Option<&Employee> {
        self.records.iter().find(|e| e.id == id)
    }

    /// All records in insertion order
    pub fn records(&self) -> &[Employee] {
        &self.records
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn view_len(&self) -> usize {
        self.view.len()
    }

    pub fn filter(&self) -> &Filter {
        &self.filter
    }

    pub fn sort(&self) -> Sort {
        self.sort
    }

    pub fn current_page(&self) -> usize {
        self.page
    }

    pub fn page_size(&self) -> usize {
        self.page_size.get()
    }

    pub fn page_sizes(&self) -> &[usize] {
        &self.page_sizes
    }

    pub fn page_count(&self) -> usize {
        page_count(self.view.len(), self.page_size)
    }

    // ========================================================================
    // Helpers
    // ========================================================================

    fn next_id(&self) -> u64 {
        self.records.iter().map(|e| e.id).max().map_or(1, |max| max + 1)
    }

    /// filter -> stable sort -> clamp page
    fn rebuild(&mut self) {
        let records = &self.records;
        let mut view: Vec<usize> = (0..records.len())
            .filter(|&i| self.filter.matches(&records[i]))
            .collect();
        view.sort_by(|&a, &b| self.sort.compare(&records[a], &records[b]));
        self.view = view;

        let last = self.page_count();
        if self.page > last {
            debug!(from = self.page, to = last, "Clamping page");
            self.page = last;
        }
        self.page = self.page.max(1);
    }
}

fn unique_by_id(records: Vec<Employee>) -> Vec<Employee> {
    let mut unique: Vec<Employee> = Vec::with_capacity(records.len());
    let mut positions: HashMap<u64, usize> = HashMap::new();

    for record in records {
        match positions.get(&record.id).copied() {
            Some(idx) => {
                warn!(id = record.id, "Duplicate employee id, keeping the later record");
                unique[idx] = record;
            }
            None => {
                positions.insert(record.id, unique.len());
                unique.push(record);
            }
        }
    }
    unique
}

impl Default for EmployeeTable {
    fn default() -> Self {
        Self::new(Vec::new())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Department, EmploymentStatus, seed_employees};
    use crate::sort::SortDirection;

    fn seeded() -> EmployeeTable {
        EmployeeTable::new(seed_employees())
    }

    #[test]
    fn test_first_and_second_page() {
        let mut table = seeded();
        table.set_page_size(10).unwrap();

        let page = table.page();
        assert_eq!(page.rows.len(), 10);
        assert_eq!(page.shown_count, 10);
        assert_eq!(page.total_count, 12);
        assert_eq!(page.ids(), (1..=10).collect::<Vec<u64>>());

        table.next_page();
        let page = table.page();
        assert_eq!(page.page, 2);
        assert_eq!(page.shown_count, 2);
        assert_eq!(page.ids(), vec![11, 12]);
    }

    #[test]
    fn test_set_filter_resets_page() {
        let mut table = seeded();
        table.set_page(2);
        assert_eq!(table.current_page(), 2);

        table.set_filter("john", "");
        assert_eq!(table.current_page(), 1);
        assert_eq!(table.page().ids(), vec![1, 2]);

        table.set_filter("", "Engineering");
        assert_eq!(table.page().ids(), vec![1, 5, 9]);

        table.set_filter("", "");
        assert_eq!(table.page().total_count, 12);
    }

    #[test]
    fn test_sort_by_flips_and_keeps_page() {
        let mut table = seeded();
        table.set_page(2);

        table.sort_by(Column::Name);
        assert_eq!(table.sort().direction, SortDirection::Ascending);
        assert_eq!(table.current_page(), 2);

        table.sort_by(Column::Name);
        assert_eq!(table.sort().direction, SortDirection::Descending);
        let first = table.view_records()[0].name.clone();
        assert_eq!(first, "Sarah Johnson");

        table.sort_by(Column::Name);
        assert_eq!(table.sort().direction, SortDirection::Ascending);
        assert_eq!(table.view_records()[0].name, "Amanda Rodriguez");
    }

    #[test]
    fn test_sort_applies_after_filter() {
        let mut table = seeded();
        table.sort_by(Column::Salary);
        table.sort_by(Column::Salary);
        table.set_filter("", "Engineering");
        assert_eq!(table.page().ids(), vec![9, 5, 1]);
    }

    #[test]
    fn test_add_assigns_next_id_and_defaults() {
        let mut table = seeded();
        let id = table.add(EmployeeDraft::default());
        assert_eq!(id, 13);

        let employee = table.get(13).unwrap();
        assert_eq!(employee.name, "New Employee");
        assert_eq!(employee.email, "new.employee13@company.com");
        assert_eq!(employee.department, Department::Engineering);
        assert_eq!(employee.salary, 60000);
        assert_eq!(employee.status, EmploymentStatus::Active);
        assert_eq!(table.page().total_count, 13);
    }

    #[test]
    fn test_add_to_empty_table() {
        let mut table = EmployeeTable::default();
        assert!(table.is_empty());
        let id = table.add(EmployeeDraft {
            name: Some("Ada".to_string()),
            salary: Some(0),
            ..Default::default()
        });
        assert_eq!(id, 1);
        assert_eq!(table.get(1).unwrap().name, "Ada");
        assert_eq!(table.get(1).unwrap().salary, 0);
    }

    #[test]
    fn test_add_respects_active_filter() {
        let mut table = seeded();
        table.set_filter("", "HR");
        table.add(EmployeeDraft::default());
        // New employee is in Engineering and falls outside the view
        assert_eq!(table.view_len(), 2);
        assert_eq!(table.len(), 13);
    }

    #[test]
    fn test_edit_updates_fields_and_keeps_id() {
        let mut table = seeded();
        table
            .edit(
                3,
                EmployeePatch {
                    name: Some("Mike Brown".to_string()),
                    salary: Some(72000),
                    ..Default::default()
                },
            )
            .unwrap();

        let employee = table.get(3).unwrap();
        assert_eq!(employee.id, 3);
        assert_eq!(employee.name, "Mike Brown");
        assert_eq!(employee.salary, 72000);
        assert_eq!(employee.department, Department::Sales);
    }

    #[test]
    fn test_edit_unknown_id_changes_nothing() {
        let mut table = seeded();
        let before = table.records().to_vec();

        let err = table
            .edit(
                999,
                EmployeePatch {
                    name: Some("Ghost".to_string()),
                    ..Default::default()
                },
            )
            .unwrap_err();

        assert_eq!(err, TableError::NotFound(999));
        assert_eq!(table.records(), before.as_slice());
    }

    #[test]
    fn test_delete_unknown_id() {
        let mut table = seeded();
        assert_eq!(table.delete(42), Err(TableError::NotFound(42)));
        assert_eq!(table.len(), 12);
    }

    #[test]
    fn test_delete_last_page_clamps() {
        let mut table = seeded();
        table.set_page(2);
        assert_eq!(table.page().ids(), vec![11, 12]);

        table.delete(11).unwrap();
        assert_eq!(table.current_page(), 2);

        let removed = table.delete(12).unwrap();
        assert_eq!(removed.name, "Michelle White");
        assert_eq!(table.current_page(), 1);
        assert_eq!(table.page().total_count, 10);
        assert_eq!(table.page().shown_count, 10);
    }

    #[test]
    fn test_delete_everything() {
        let mut table = seeded();
        for id in 1..=12 {
            table.delete(id).unwrap();
        }
        let page = table.page();
        assert!(page.is_empty());
        assert_eq!(page.page, 1);
        assert_eq!(page.page_count, 1);
        assert_eq!(page.total_count, 0);
        assert_eq!(table.add(EmployeeDraft::default()), 1);
    }

    #[test]
    fn test_edit_out_of_filter_clamps_page() {
        let mut table = seeded();
        table.set_filter("company", "");
        table.set_page(2);
        assert_eq!(table.page().ids(), vec![11, 12]);

        for id in [11, 12] {
            table
                .edit(
                    id,
                    EmployeePatch {
                        email: Some(format!("staff{}@example.org", id)),
                        ..Default::default()
                    },
                )
                .unwrap();
        }

        assert_eq!(table.view_len(), 10);
        assert_eq!(table.current_page(), 1);
        assert_eq!(table.len(), 12);
    }

    #[test]
    fn test_set_page_size() {
        let mut table = seeded();
        table.set_page(2);
        table.set_page_size(25).unwrap();
        assert_eq!(table.current_page(), 1);
        assert_eq!(table.page().shown_count, 12);
        assert_eq!(table.page_count(), 1);

        let err = table.set_page_size(11).unwrap_err();
        assert!(matches!(err, TableError::InvalidPageSize { size: 11, .. }));
        assert_eq!(table.page_size(), 25);
    }

    #[test]
    fn test_page_navigation_saturates() {
        let mut table = seeded();
        table.prev_page();
        assert_eq!(table.current_page(), 1);
        table.next_page();
        table.next_page();
        assert_eq!(table.current_page(), 2);
        table.set_page(0);
        assert_eq!(table.current_page(), 1);
        table.set_page(99);
        assert_eq!(table.current_page(), 2);
    }

    #[test]
    fn test_with_config() {
        let config = Config {
            page_size: 25,
            ..Config::default()
        };
        let table = EmployeeTable::with_config(seed_employees(), &config).unwrap();
        assert_eq!(table.page_size(), 25);

        let bad = Config {
            page_size: 3,
            ..Config::default()
        };
        assert!(EmployeeTable::with_config(seed_employees(), &bad).is_err());
    }

    #[test]
    fn test_new_keeps_ids_unique() {
        let mut records = seed_employees();
        let mut replacement = records[2].clone();
        replacement.name = "Michael Brown Jr".to_string();
        records.push(replacement);

        let mut table = EmployeeTable::new(records);
        assert_eq!(table.len(), 12);
        assert_eq!(table.page().ids(), (1..=10).collect::<Vec<u64>>());
        assert_eq!(table.get(3).unwrap().name, "Michael Brown Jr");

        table.delete(3).unwrap();
        assert!(table.get(3).is_none());
        assert_eq!(table.add(EmployeeDraft::default()), 13);
    }

    #[test]
    fn test_page_sizes_come_from_config() {
        assert_eq!(seeded().page_sizes(), &[10, 25, 50, 100]);
        let config = Config {
            page_size: 5,
            page_sizes: vec![5, 15],
            ..Config::default()
        };
        let table = EmployeeTable::with_config(seed_employees(), &config).unwrap();
        assert_eq!(table.page_sizes(), &[5, 15]);
    }

    #[test]
    fn test_refresh_is_deterministic() {
        let mut table = seeded();
        table.sort_by(Column::Department);
        let before = table.page().ids();
        table.refresh();
        assert_eq!(table.page().ids(), before);
    }
}
