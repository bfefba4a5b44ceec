// src/specs/schema.rs
// Named columns over a positional table, checked once per page.

use crate::core::html::RawTable;
use crate::core::sanitize::header_key;
use crate::error::{Error, Result};

/// One expected column: its name in our schema, its position in the page
/// table, and header spellings that are accepted for it (compared after
/// `header_key` normalization, as prefixes).
#[derive(Clone, Copy, Debug)]
pub struct ColumnSpec {
    pub name: &'static str,
    pub index: usize,
    pub aliases: &'static [&'static str],
}

impl ColumnSpec {
    fn accepts(&self, header: &str) -> bool {
        let key = header_key(header);
        !key.is_empty() && self.aliases.iter().any(|a| key.starts_with(a))
    }
}

#[derive(Clone, Copy, Debug)]
pub struct TableSchema {
    pub page: &'static str,
    pub columns: &'static [ColumnSpec],
}

impl TableSchema {
    /// Cells a row needs so every named column exists.
    pub fn min_width(&self) -> usize {
        self.columns.iter().map(|c| c.index + 1).max().unwrap_or(0)
    }

    fn column(&self, name: &str) -> Option<&ColumnSpec> {
        self.columns.iter().find(|c| c.name == name)
    }

    /// Fail fast when the page no longer looks like we expect.
    ///
    /// With a header row, it must be wide enough and each named column's
    /// header must match one of its aliases. Without one, the widest body
    /// row must be wide enough.
    pub fn validate(&self, table: &RawTable, source: &str) -> Result<()> {
        let need = self.min_width();

        if let Some(headers) = &table.headers {
            if headers.len() < need {
                return Err(Error::schema(
                    source,
                    format!(
                        "{} table has {} header columns, expected at least {}",
                        self.page,
                        headers.len(),
                        need
                    ),
                ));
            }
            for col in self.columns {
                let got = &headers[col.index];
                if !col.accepts(got) {
                    return Err(Error::schema(
                        source,
                        format!(
                            "{} table column {} is {:?}, expected {} (one of {:?})",
                            self.page,
                            col.index + 1,
                            got,
                            col.name,
                            col.aliases
                        ),
                    ));
                }
            }
            return Ok(());
        }

        let width = table.width();
        if width < need {
            return Err(Error::schema(
                source,
                format!("{} table is {} columns wide, expected at least {}", self.page, width, need),
            ));
        }
        Ok(())
    }

    /// Named cell from a row; `None` if the row is too short or the cell blank.
    pub fn field<'a>(&self, row: &'a [String], name: &str) -> Option<&'a str> {
        let col = self.column(name)?;
        row.get(col.index)
            .map(|s| s.trim())
            .filter(|s| !s.is_empty())
    }

    /// Named cell as owned text; blank when absent.
    pub fn text(&self, row: &[String], name: &str) -> String {
        self.column(name)
            .and_then(|c| row.get(c.index))
            .map(|s| s.trim().to_string())
            .unwrap_or_default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const SCHEMA: TableSchema = TableSchema {
        page: "demo",
        columns: &[
            ColumnSpec { name: "week", index: 0, aliases: &["wk", "week"] },
            ColumnSpec { name: "lanes", index: 2, aliases: &["lane"] },
        ],
    };

    fn table(headers: Option<&[&str]>, rows: &[&[&str]]) -> RawTable {
        RawTable {
            headers: headers.map(|h| h.iter().map(|s| s.to_string()).collect()),
            rows: rows.iter().map(|r| r.iter().map(|s| s.to_string()).collect()).collect(),
        }
    }

    #[test]
    fn accepts_matching_headers() {
        let t = table(Some(&["Wk", "Date", "Lane(s)"]), &[&["1", "x", "7"]]);
        SCHEMA.validate(&t, "p").unwrap();
    }

    #[test]
    fn rejects_renamed_column_with_detail() {
        let t = table(Some(&["Wk", "Date", "Pins"]), &[]);
        let err = SCHEMA.validate(&t, "p1").unwrap_err().to_string();
        assert!(err.contains("column 3"), "{err}");
        assert!(err.contains("\"Pins\""), "{err}");
        assert!(err.starts_with("unexpected table layout on p1"), "{err}");
    }

    #[test]
    fn rejects_narrow_tables() {
        let t = table(Some(&["Wk", "Date"]), &[]);
        assert!(matches!(SCHEMA.validate(&t, "p"), Err(Error::Schema { .. })));
        let t = table(None, &[&["1", "x"]]);
        assert!(matches!(SCHEMA.validate(&t, "p"), Err(Error::Schema { .. })));
        let t = table(None, &[&["1", "x", "7"]]);
        assert!(SCHEMA.validate(&t, "p").is_ok());
    }

    #[test]
    fn field_treats_blank_and_missing_as_none() {
        let row: Vec<String> = vec![s!(" 3 "), s!("x"), s!("  ")];
        assert_eq!(SCHEMA.field(&row, "week"), Some("3"));
        assert_eq!(SCHEMA.field(&row, "lanes"), None);
        assert_eq!(SCHEMA.field(&row[..1], "lanes"), None);
        assert_eq!(SCHEMA.text(&row, "week"), "3");
    }
}
