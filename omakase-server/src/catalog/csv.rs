//! Minimal CSV reader for the published catalog sheet
//!
//! Handles the subset the sheet export actually produces: a header
//! row, double-quoted fields with `""` escapes, embedded commas and
//! newlines inside quotes, and CRLF line endings. Rows shorter than
//! the header are padded with empty fields; fully empty lines are
//! skipped.

use shared::error::{AppError, AppResult, ErrorCode};
use std::collections::HashMap;

/// One data row keyed by header name
pub type Record = HashMap<String, String>;

/// Parse CSV text into header-keyed records
pub fn parse_records(input: &str) -> AppResult<Vec<Record>> {
    let rows = parse_rows(input);
    let mut iter = rows.into_iter();
    let headers = iter.next().ok_or_else(|| {
        AppError::with_message(ErrorCode::CatalogParseError, "CSV input has no header row")
    })?;

    let mut records = Vec::new();
    for row in iter {
        if row.iter().all(|f| f.trim().is_empty()) {
            continue;
        }
        let mut record = Record::with_capacity(headers.len());
        for (i, header) in headers.iter().enumerate() {
            let value = row.get(i).cloned().unwrap_or_default();
            record.insert(header.trim().to_string(), value);
        }
        records.push(record);
    }
    Ok(records)
}

/// Split CSV text into rows of fields
fn parse_rows(input: &str) -> Vec<Vec<String>> {
    let mut rows = Vec::new();
    let mut row: Vec<String> = Vec::new();
    let mut field = String::new();
    let mut in_quotes = false;

    let mut chars = input.chars().peekable();
    while let Some(c) = chars.next() {
        if in_quotes {
            match c {
                '"' => {
                    if chars.peek() == Some(&'"') {
                        chars.next();
                        field.push('"');
                    } else {
                        in_quotes = false;
                    }
                }
                _ => field.push(c),
            }
            continue;
        }
        match c {
            '"' => in_quotes = true,
            ',' => row.push(std::mem::take(&mut field)),
            '\r' => {
                if chars.peek() == Some(&'\n') {
                    chars.next();
                }
                row.push(std::mem::take(&mut field));
                rows.push(std::mem::take(&mut row));
            }
            '\n' => {
                row.push(std::mem::take(&mut field));
                rows.push(std::mem::take(&mut row));
            }
            _ => field.push(c),
        }
    }
    if !field.is_empty() || !row.is_empty() {
        row.push(field);
        rows.push(row);
    }

    // Drop lines that were nothing but a line break
    rows.retain(|r| !(r.len() == 1 && r[0].is_empty()));
    rows
}
