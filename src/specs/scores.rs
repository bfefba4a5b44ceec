// src/specs/scores.rs
// Bowler-info page: one row per league night, totals footer last.

use super::schema::{ColumnSpec, TableSchema};
use crate::core::html::RawTable;
use crate::error::{Error, Result};
use crate::model::{RawScorePage, RawScoreRow};

pub const SCHEMA: TableSchema = TableSchema {
    page: "score",
    columns: &[
        ColumnSpec { name: "week", index: 0, aliases: &["wk", "week"] },
        ColumnSpec { name: "date", index: 1, aliases: &["date"] },
        ColumnSpec { name: "game1", index: 2, aliases: &["gm1", "g1", "game1", "1"] },
        ColumnSpec { name: "game2", index: 3, aliases: &["gm2", "g2", "game2", "2"] },
        ColumnSpec { name: "game3", index: 4, aliases: &["gm3", "g3", "game3", "3"] },
        ColumnSpec { name: "total", index: 5, aliases: &["ss", "sers", "series", "total", "scratch"] },
    ],
};

/// Validate, drop the footer, keep the first six columns, drop bye weeks.
pub fn extract(table: &RawTable, source: &str) -> Result<RawScorePage> {
    SCHEMA.validate(table, source)?;

    let body = match table.rows.split_last() {
        Some((_footer, body)) => body,
        None => &[],
    };

    let need = SCHEMA.min_width();
    let mut rows = Vec::with_capacity(body.len());
    for (i, cells) in body.iter().enumerate() {
        if cells.len() < need {
            return Err(Error::schema(
                source,
                format!("score row {} has {} cells, expected at least {}", i + 1, cells.len(), need),
            ));
        }
        let row = RawScoreRow {
            week: SCHEMA.text(cells, "week"),
            date: SCHEMA.text(cells, "date"),
            game1: SCHEMA.text(cells, "game1"),
            game2: SCHEMA.text(cells, "game2"),
            game3: SCHEMA.text(cells, "game3"),
            total: SCHEMA.text(cells, "total"),
        };
        if row.is_unplayed() {
            continue;
        }
        rows.push(row);
    }

    logd!("Scores: {} played rows of {} on {}", rows.len(), body.len(), source);
    Ok(RawScorePage { source: s!(source), rows })
}
