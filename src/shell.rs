// Line-oriented command shell driving an EmployeeTable

use crate::error::TableError;
use crate::models::{Department, EmployeeDraft, EmployeePatch};
use crate::record::Column;
use crate::render::{navigation, render_page};
use crate::table::EmployeeTable;
use colored::Colorize;
use std::io::{BufRead, Write};
use std::str::FromStr;
use thiserror::Error;
use tracing::debug;

pub const HELP_TEXT: &str = "\
Commands:
  show                          redraw the current page
  search [text]                 filter by text (empty clears)
  dept [name|all]               filter by department
  sort <column>                 sort by column, again to reverse
  size <n>                      rows per page
  page <n> | next | prev        move between pages
  add [field=value ...]         add an employee
  edit <id> field=value ...     change an employee
  delete <id> [--yes]           remove an employee (asks y/N first)
  refresh                       rebuild the view
  help                          this text
  quit                          leave the shell

Columns: id, name, email, department, salary, status
Quote values with spaces: name=\"Jane Doe\"";

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ShellError {
    #[error("unknown command: {0} (try `help`)")]
    UnknownCommand(String),

    #[error("missing argument: {0}")]
    MissingArgument(&'static str),

    #[error("not a number: {0}")]
    InvalidNumber(String),

    #[error("expected field=value, got: {0}")]
    InvalidAssignment(String),

    #[error("unknown or read-only field: {0}")]
    UnknownField(String),

    #[error("unterminated quote")]
    UnterminatedQuote,

    #[error(transparent)]
    Table(#[from] TableError),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ShellCommand {
    Show,
    Search(String),
    Department(String),
    Sort(Column),
    PageSize(usize),
    Page(usize),
    Next,
    Prev,
    Add(EmployeeDraft),
    Edit(u64, EmployeePatch),
    Delete { id: u64, confirmed: bool },
    Refresh,
    Help,
    Quit,
}

impl FromStr for ShellCommand {
    type Err = ShellError;

    fn from_str(line: &str) -> Result<Self, Self::Err> {
        let tokens = tokenize(line)?;
        let Some((verb, args)) = tokens.split_first() else {
            return Ok(ShellCommand::Show);
        };

        let command = match verb.to_lowercase().as_str() {
            "show" | "ls" => ShellCommand::Show,
            "search" | "find" => ShellCommand::Search(args.join(" ")),
            "dept" | "department" => {
                let wanted = args.join(" ");
                let department = if wanted.is_empty() || wanted.eq_ignore_ascii_case("all") {
                    String::new()
                } else {
                    wanted
                        .parse::<Department>()
                        .map(|d| d.as_str().to_string())
                        .unwrap_or(wanted)
                };
                ShellCommand::Department(department)
            }
            "sort" => ShellCommand::Sort(first(args, "column")?.parse()?),
            "size" => ShellCommand::PageSize(parse_number(first(args, "page size")?)?),
            "page" => ShellCommand::Page(parse_number(first(args, "page number")?)?),
            "next" | "n" => ShellCommand::Next,
            "prev" | "p" => ShellCommand::Prev,
            "add" => ShellCommand::Add(parse_draft(args)?),
            "edit" => {
                let id = parse_number(first(args, "id")?)?;
                let patch = parse_patch(&args[1..])?;
                if patch.is_empty() {
                    return Err(ShellError::MissingArgument("field=value"));
                }
                ShellCommand::Edit(id, patch)
            }
            "delete" | "rm" => {
                let (flags, rest): (Vec<String>, Vec<String>) =
                    args.iter().cloned().partition(|a| a == "--yes" || a == "-y");
                ShellCommand::Delete {
                    id: parse_number(first(&rest, "id")?)?,
                    confirmed: !flags.is_empty(),
                }
            }
            "refresh" => ShellCommand::Refresh,
            "help" | "?" => ShellCommand::Help,
            "quit" | "exit" | "q" => ShellCommand::Quit,
            other => return Err(ShellError::UnknownCommand(other.to_string())),
        };
        Ok(command)
    }
}

/// Split on whitespace; double quotes group text and are dropped
fn tokenize(line: &str) -> Result<Vec<String>, ShellError> {
    let mut tokens = Vec::new();
    let mut current = String::new();
    let mut in_token = false;
    let mut quoted = false;

    for ch in line.chars() {
        match ch {
            '"' => {
                quoted = !quoted;
                in_token = true;
            }
            c if c.is_whitespace() && !quoted => {
                if in_token {
                    tokens.push(std::mem::take(&mut current));
                    in_token = false;
                }
            }
            c => {
                current.push(c);
                in_token = true;
            }
        }
    }

    if quoted {
        return Err(ShellError::UnterminatedQuote);
    }
    if in_token {
        tokens.push(current);
    }
    Ok(tokens)
}

fn first<'a>(args: &'a [String], what: &'static str) -> Result<&'a str, ShellError> {
    args.first().map(String::as_str).ok_or(ShellError::MissingArgument(what))
}

fn parse_number<T: FromStr>(s: &str) -> Result<T, ShellError> {
    s.parse().map_err(|_| ShellError::InvalidNumber(s.to_string()))
}

fn parse_patch(args: &[String]) -> Result<EmployeePatch, ShellError> {
    let mut patch = EmployeePatch::default();
    for arg in args {
        let (field, value) = arg
            .split_once('=')
            .ok_or_else(|| ShellError::InvalidAssignment(arg.clone()))?;
        let column: Column = field.parse().map_err(|_| ShellError::UnknownField(field.to_string()))?;
        match column {
            Column::Name => patch.name = Some(value.to_string()),
            Column::Email => patch.email = Some(value.to_string()),
            Column::Department => patch.department = Some(value.parse()?),
            Column::Salary => patch.salary = Some(parse_number(value)?),
            Column::Status => patch.status = Some(value.parse()?),
            Column::Id => return Err(ShellError::UnknownField(field.to_string())),
        }
    }
    Ok(patch)
}

fn parse_draft(args: &[String]) -> Result<EmployeeDraft, ShellError> {
    let patch = parse_patch(args)?;
    Ok(EmployeeDraft {
        name: patch.name,
        email: patch.email,
        department: patch.department,
        salary: patch.salary,
        status: patch.status,
    })
}

/// What the caller should do after a line was handled
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    Continue(String),
    Quit,
}

const DELETE_QUESTION: &str = "Are you sure you want to delete this employee?";

fn is_yes(answer: &str) -> bool {
    matches!(answer.trim().to_lowercase().as_str(), "y" | "yes")
}

pub struct Shell {
    table: EmployeeTable,
    /// Id of a delete waiting for its y/N answer
    pending_delete: Option<u64>,
}

impl Shell {
    pub fn new(table: EmployeeTable) -> Self {
        Self {
            table,
            pending_delete: None,
        }
    }

    pub fn table(&self) -> &EmployeeTable {
        &self.table
    }

    pub fn awaiting_confirmation(&self) -> bool {
        self.pending_delete.is_some()
    }

    /// Parse and run one line. Errors become a notice; the table is left as it was.
    ///
    /// While a delete waits for confirmation the line is read as the answer:
    /// `y`/`yes` deletes, anything else cancels.
    pub fn handle_line(&mut self, line: &str) -> Outcome {
        let result = match self.pending_delete.take() {
            Some(id) if is_yes(line) => self.execute(ShellCommand::Delete { id, confirmed: true }),
            Some(id) => {
                debug!(id, "Delete cancelled");
                return Outcome::Continue("Delete cancelled\n".to_string());
            }
            None => line.parse::<ShellCommand>().and_then(|cmd| self.execute(cmd)),
        };

        match result {
            Ok(outcome) => outcome,
            Err(e) => {
                debug!(line, error = %e, "Command rejected");
                Outcome::Continue(format!("{} {}\n", "✘".red(), e))
            }
        }
    }

    pub fn execute(&mut self, command: ShellCommand) -> Result<Outcome, ShellError> {
        let notice = match command {
            ShellCommand::Quit => return Ok(Outcome::Quit),
            ShellCommand::Help => {
                let sizes: Vec<String> = self.table.page_sizes().iter().map(|n| n.to_string()).collect();
                return Ok(Outcome::Continue(format!("{}\nPage sizes: {}\n", HELP_TEXT, sizes.join(", "))));
            }
            ShellCommand::Show => None,
            ShellCommand::Search(text) => {
                let department = self.table.filter().department.clone();
                self.table.set_filter(&text, &department);
                None
            }
            ShellCommand::Department(department) => {
                let search = self.table.filter().search.clone();
                self.table.set_filter(&search, &department);
                None
            }
            ShellCommand::Sort(column) => {
                self.table.sort_by(column);
                None
            }
            ShellCommand::PageSize(size) => {
                self.table.set_page_size(size)?;
                None
            }
            ShellCommand::Page(page) => {
                self.table.set_page(page);
                None
            }
            ShellCommand::Next => {
                self.table.next_page();
                None
            }
            ShellCommand::Prev => {
                self.table.prev_page();
                None
            }
            ShellCommand::Add(draft) => {
                let id = self.table.add(draft);
                Some(format!("New employee added successfully! (id {})", id))
            }
            ShellCommand::Edit(id, patch) => {
                self.table.edit(id, patch)?;
                Some("Employee updated successfully!".to_string())
            }
            ShellCommand::Delete { id, confirmed: false } => {
                let employee = self.table.get(id).ok_or(TableError::NotFound(id))?;
                let question = format!("{} ({}, id {}) [y/N] ", DELETE_QUESTION, employee.name, id);
                self.pending_delete = Some(id);
                return Ok(Outcome::Continue(question));
            }
            ShellCommand::Delete { id, confirmed: true } => {
                self.table.delete(id)?;
                Some("Employee deleted successfully!".to_string())
            }
            ShellCommand::Refresh => {
                self.table.refresh();
                Some("Table refreshed!".to_string())
            }
        };

        let mut out = self.render();
        if let Some(notice) = notice {
            out.push_str(&format!("{} {}\n", "✔".green(), notice));
        }
        Ok(Outcome::Continue(out))
    }

    /// Current page plus the prev/next hint
    fn render(&self) -> String {
        let page = self.table.page();
        let mut out = render_page(&page, self.table.sort());
        if let Some(hint) = navigation(&page) {
            out.push_str(&format!("{}\n", hint.as_str().dimmed()));
        }
        out
    }

    /// Read commands from `input` until EOF or `quit`
    pub fn run<R: BufRead, W: Write>(&mut self, input: R, output: &mut W) -> eyre::Result<()> {
        write!(output, "{}", self.render())?;
        write!(output, "> ")?;
        output.flush()?;

        for line in input.lines() {
            let line = line?;
            match self.handle_line(&line) {
                Outcome::Quit => break,
                Outcome::Continue(text) => write!(output, "{}", text)?,
            }
            // a pending delete already printed its own question
            if !self.awaiting_confirmation() {
                write!(output, "> ")?;
            }
            output.flush()?;
        }
        writeln!(output)?;
        Ok(())
    }
}
