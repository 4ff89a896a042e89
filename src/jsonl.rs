// JSONL import/export of employee records

use crate::models::Employee;
use eyre::{Context, Result};
use std::collections::HashMap;
use std::fs::File;
use std::io::{BufRead, BufReader, Write};
use std::path::Path;
use tracing::{info, warn};

/// Read employees from a JSONL file, one record per line
///
/// Blank and unparseable lines are skipped. When an id appears more than once
/// the later line replaces the earlier one but keeps its position.
pub fn read_employees(path: &Path) -> Result<Vec<Employee>> {
    let file = File::open(path).with_context(|| format!("Failed to open JSONL file {:?}", path))?;
    let reader = BufReader::new(file);

    let mut records: Vec<Employee> = Vec::new();
    let mut positions: HashMap<u64, usize> = HashMap::new();

    for (line_num, line) in reader.lines().enumerate() {
        let line = match line {
            Ok(l) => l,
            Err(e) => {
                warn!(
                    file = ?path,
                    line = line_num + 1,
                    error = ?e,
                    "Failed to read line, skipping"
                );
                continue;
            }
        };

        if line.trim().is_empty() {
            continue;
        }

        let record: Employee = match serde_json::from_str(&line) {
            Ok(r) => r,
            Err(e) => {
                warn!(
                    file = ?path,
                    line = line_num + 1,
                    error = ?e,
                    "Failed to parse employee, skipping"
                );
                continue;
            }
        };

        match positions.get(&record.id).copied() {
            Some(idx) => records[idx] = record,
            None => {
                positions.insert(record.id, records.len());
                records.push(record);
            }
        }
    }

    info!(file = ?path, count = records.len(), "Loaded employees from JSONL");

    Ok(records)
}

/// Write employees as JSONL
pub fn write_employees<'a, W, I>(writer: &mut W, records: I) -> Result<usize>
where
    W: Write,
    I: IntoIterator<Item = &'a Employee>,
{
    let mut count = 0;
    for record in records {
        let json = serde_json::to_string(record).context("Failed to serialize employee")?;
        writeln!(writer, "{}", json)?;
        count += 1;
    }
    writer.flush()?;
    Ok(count)
}
