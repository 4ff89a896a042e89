// Plain-text rendering of a table page

use crate::models::{Department, Employee, EmploymentStatus};
use crate::page::Page;
use crate::record::Column;
use crate::sort::Sort;
use colored::{Color, Colorize};

const COLUMN_GAP: &str = "  ";

/// "$75,000"
pub fn format_salary(salary: u64) -> String {
    let digits = salary.to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3 + 1);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(ch);
    }
    format!("${}", out)
}

pub fn department_color(department: Department) -> Color {
    match department {
        Department::Engineering => Color::Blue,
        Department::Marketing => Color::Green,
        Department::Sales => Color::Magenta,
        Department::Hr => Color::Yellow,
        Department::Finance => Color::Red,
    }
}

pub fn status_color(status: EmploymentStatus) -> Color {
    match status {
        EmploymentStatus::Active => Color::Green,
        EmploymentStatus::Inactive => Color::Red,
        EmploymentStatus::OnLeave => Color::Yellow,
    }
}

fn cell_text(employee: &Employee, column: Column) -> String {
    match column {
        Column::Salary => format_salary(employee.salary),
        other => employee.field(other).to_string(),
    }
}

fn header_text(column: Column, sort: Sort) -> String {
    if column == sort.column {
        format!("{} {}", column.title(), sort.direction.arrow())
    } else {
        column.title().to_string()
    }
}

/// Render `page` as an aligned table with a header and a footer line
pub fn render_page(page: &Page<'_>, sort: Sort) -> String {
    if page.is_empty() {
        return format!("No matching employees\n{}\n", footer(page));
    }

    let headers: Vec<String> = Column::ALL.iter().map(|c| header_text(*c, sort)).collect();
    let cells: Vec<Vec<String>> = page
        .rows
        .iter()
        .map(|e| Column::ALL.iter().map(|c| cell_text(e, *c)).collect())
        .collect();

    let widths: Vec<usize> = (0..Column::ALL.len())
        .map(|i| {
            cells
                .iter()
                .map(|row| row[i].chars().count())
                .chain(std::iter::once(headers[i].chars().count()))
                .max()
                .unwrap_or(0)
        })
        .collect();

    let mut out = String::new();

    let header_line: Vec<String> = headers
        .iter()
        .zip(&widths)
        .map(|(h, w)| pad(h, *w, false).as_str().bold().to_string())
        .collect();
    out.push_str(header_line.join(COLUMN_GAP).trim_end());
    out.push('\n');

    let rule: Vec<String> = widths.iter().map(|w| "-".repeat(*w)).collect();
    out.push_str(&rule.join(COLUMN_GAP));
    out.push('\n');

    for (employee, row) in page.rows.iter().zip(&cells) {
        let line: Vec<String> = Column::ALL
            .iter()
            .zip(row)
            .zip(&widths)
            .map(|((column, text), width)| {
                let padded = pad(text, *width, column.is_numeric());
                match column {
                    Column::Department => padded.as_str().color(department_color(employee.department)).to_string(),
                    Column::Status => padded.as_str().color(status_color(employee.status)).to_string(),
                    _ => padded,
                }
            })
            .collect();
        out.push_str(line.join(COLUMN_GAP).trim_end());
        out.push('\n');
    }

    out.push_str(&footer(page));
    out.push('\n');
    out
}

/// "Showing 10 of 12 entries (page 1/2)"
pub fn footer(page: &Page<'_>) -> String {
    format!(
        "Showing {} of {} entries (page {}/{})",
        page.shown_count, page.total_count, page.page, page.page_count
    )
}

/// "‹ prev  next ›", listing only the directions that lead somewhere
pub fn navigation(page: &Page<'_>) -> Option<String> {
    match (page.has_prev(), page.has_next()) {
        (false, false) => None,
        (true, false) => Some("‹ prev".to_string()),
        (false, true) => Some("next ›".to_string()),
        (true, true) => Some("‹ prev  next ›".to_string()),
    }
}

fn pad(text: &str, width: usize, right_align: bool) -> String {
    if right_align {
        format!("{:>width$}", text, width = width)
    } else {
        format!("{:<width$}", text, width = width)
    }
}
