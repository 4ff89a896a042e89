// Pagination of the filtered and sorted view

use crate::error::TableError;
use crate::models::Employee;

pub const DEFAULT_PAGE_SIZE: usize = 10;
pub const DEFAULT_PAGE_SIZES: [usize; 4] = [10, 25, 50, 100];

/// Rows per page, restricted to a fixed set of choices
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageSize(usize);

impl PageSize {
    pub fn new(size: usize, allowed: &[usize]) -> Result<Self, TableError> {
        if size > 0 && allowed.contains(&size) {
            Ok(Self(size))
        } else {
            Err(TableError::InvalidPageSize {
                size,
                allowed: allowed.to_vec(),
            })
        }
    }

    pub fn get(self) -> usize {
        self.0
    }
}

impl Default for PageSize {
    fn default() -> Self {
        Self(DEFAULT_PAGE_SIZE)
    }
}

/// Number of pages needed for `total` rows; an empty view still has one page
pub fn page_count(total: usize, size: PageSize) -> usize {
    total.div_ceil(size.get()).max(1)
}

/// Index range of `page` (1-based) within a view of `total` rows
pub fn page_bounds(page: usize, size: PageSize, total: usize) -> (usize, usize) {
    let start = page.saturating_sub(1).saturating_mul(size.get()).min(total);
    let end = start.saturating_add(size.get()).min(total);
    (start, end)
}

/// One page of the view, as handed to the presentation layer
#[derive(Debug, Clone, PartialEq)]
pub struct Page<'a> {
    pub rows: Vec<&'a Employee>,
    pub page: usize,
    pub page_count: usize,
    pub page_size: usize,
    /// Rows on this page
    pub shown_count: usize,
    /// Rows matching the filter, across all pages
    pub total_count: usize,
}

impl Page<'_> {
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    pub fn has_next(&self) -> bool {
        self.page < self.page_count
    }

    pub fn has_prev(&self) -> bool {
        self.page > 1
    }

    pub fn ids(&self) -> Vec<u64> {
        self.rows.iter().map(|e| e.id).collect()
    }
}
