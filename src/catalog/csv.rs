//! Lenient CSV scanner for the materials spreadsheet export.
//!
//! Google Sheets exports are mostly well-formed, but hand-edited sheets are
//! not, so the scanner never fails: stray quotes toggle quoting mode and an
//! unterminated quote swallows the rest of the input into one field.

use std::collections::HashMap;

/// One data row keyed by (trimmed) header name
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CsvRow {
    fields: HashMap<String, String>,
}

impl CsvRow {
    /// Value of a column, if the header had it
    pub fn get(&self, key: &str) -> Option<&str> {
        self.fields.get(key).map(String::as_str)
    }
}

impl<K, V> FromIterator<(K, V)> for CsvRow
where
    K: Into<String>,
    V: Into<String>,
{
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self {
            fields: iter
                .into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        }
    }
}

/// Split raw text into rows of trimmed cells
fn scan_rows(text: &str) -> Vec<Vec<String>> {
    let mut rows = Vec::new();
    let mut row: Vec<String> = Vec::new();
    let mut cell = String::new();
    let mut quoted = false;
    let mut chars = text.chars().peekable();

    while let Some(c) = chars.next() {
        if quoted {
            if c == '"' {
                if chars.peek() == Some(&'"') {
                    cell.push('"');
                    chars.next();
                } else {
                    quoted = false;
                }
            } else {
                cell.push(c);
            }
            continue;
        }

        match c {
            '"' => quoted = true,
            ',' => {
                row.push(cell.trim().to_string());
                cell.clear();
            }
            '\n' | '\r' => {
                // \r\n is a single terminator
                if c == '\r' && chars.peek() == Some(&'\n') {
                    chars.next();
                }
                row.push(cell.trim().to_string());
                rows.push(std::mem::take(&mut row));
                cell.clear();
            }
            _ => cell.push(c),
        }
    }

    if !cell.is_empty() || !row.is_empty() {
        row.push(cell.trim().to_string());
        rows.push(row);
    }

    rows
}

/// Parse CSV text into header-keyed rows.
///
/// The first row is the header. Data rows shorter than the header get empty
/// strings for the missing trailing columns; extra cells are ignored. Rows in
/// which every cell is empty are skipped.
pub fn parse_csv(text: &str) -> Vec<CsvRow> {
    let mut rows = scan_rows(text).into_iter();
    let header = match rows.next() {
        Some(header) => header,
        None => return Vec::new(),
    };

    rows.filter(|cells| cells.iter().any(|cell| !cell.is_empty()))
        .map(|cells| {
            header
                .iter()
                .enumerate()
                .map(|(idx, name)| {
                    let value = cells.get(idx).cloned().unwrap_or_default();
                    (name.trim().to_string(), value)
                })
                .collect()
        })
        .collect()
}
