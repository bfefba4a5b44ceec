// src/specs/lanes.rs
// Team-history page. Only week, date and lane columns matter; the page also
// carries "Page N" navigation rows that are filtered later, after concat.

use super::schema::{ColumnSpec, TableSchema};
use crate::core::html::RawTable;
use crate::error::Result;
use crate::model::{RawLanePage, RawLaneRow};

pub const SCHEMA: TableSchema = TableSchema {
    page: "lane",
    columns: &[
        ColumnSpec { name: "week", index: 0, aliases: &["wk", "week"] },
        ColumnSpec { name: "date", index: 1, aliases: &["date"] },
        ColumnSpec { name: "lanes", index: 7, aliases: &["lane", "ln"] },
    ],
};

/// Validate and keep columns 1, 2 and 8; rows missing any of them are dropped.
pub fn extract(table: &RawTable, source: &str) -> Result<RawLanePage> {
    SCHEMA.validate(table, source)?;

    let rows: Vec<RawLaneRow> = table
        .rows
        .iter()
        .filter_map(|cells| {
            Some(RawLaneRow {
                week: SCHEMA.field(cells, "week")?.to_string(),
                date: SCHEMA.field(cells, "date")?.to_string(),
                lanes: SCHEMA.field(cells, "lanes")?.to_string(),
            })
        })
        .collect();

    logd!("Lanes: kept {} of {} rows on {}", rows.len(), table.rows.len(), source);
    Ok(RawLanePage { source: s!(source), rows })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::Error;

    fn strings(cells: &[&str]) -> Vec<String> {
        cells.iter().map(|s| s.to_string()).collect()
    }

    fn header() -> Vec<String> {
        strings(&["Wk", "Date", "Opponent", "Pts Won", "Pts Lost", "Scratch", "HDCP", "Lanes"])
    }

    #[test]
    fn keeps_complete_rows_and_pagination_markers() {
        let t = RawTable {
            headers: Some(header()),
            rows: vec![
                strings(&["1", "9/8/2021", "Team 3", "5", "2", "2400", "2700", "9"]),
                strings(&["2", "9/15/2021", "Bye", "", "", "", "", ""]),
                strings(&["Page 1 2", "Page 1 2", "Page 1 2", "Page 1 2", "Page 1 2", "Page 1 2", "Page 1 2", "Page 1 2"]),
                strings(&["3", "9/22/2021"]),
            ],
        };
        let p = extract(&t, "2021 lanes p1").unwrap();
        assert_eq!(p.rows.len(), 2);
        assert_eq!(p.rows[0], RawLaneRow { week: s!("1"), date: s!("9/8/2021"), lanes: s!("9") });
        assert_eq!(p.rows[1].week, "Page 1 2");
    }

    #[test]
    fn seven_column_header_is_rejected() {
        let mut h = header();
        h.pop();
        let t = RawTable { headers: Some(h), rows: Vec::new() };
        assert!(matches!(extract(&t, "x"), Err(Error::Schema { .. })));
    }

    #[test]
    fn lane_header_must_be_eighth() {
        let mut h = header();
        h.swap(6, 7);
        let t = RawTable { headers: Some(h), rows: Vec::new() };
        let err = extract(&t, "x").unwrap_err().to_string();
        assert!(err.contains("column 8"), "{err}");
    }
}
