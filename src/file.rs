// src/file.rs

use std::{
    fs,
    io::Write,
    path::{Path, PathBuf},
};

use csv::WriterBuilder;

use crate::config::options::{ExportLayout, ExportOptions};
use crate::error::{Error, Result};
use crate::model::EnrichedRow;
use crate::stats::wide_view;

pub const TIDY_HEADERS: [&str; 8] =
    ["week", "date", "game", "score", "total", "season", "lanes", "lane_pair"];

pub const WIDE_HEADERS: [&str; 8] =
    ["date", "season", "week", "game1", "game2", "game3", "total", "lane_pair"];

const DATE_FMT: &str = "%Y-%m-%d";

/// Write one export file per ExportOptions (path, format, layout, headers).
/// Returns the final path written to.
pub fn write_export(export: &ExportOptions, rows: &[EnrichedRow]) -> Result<PathBuf> {
    let path = export.out_path();

    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            ensure_directory(parent)?;
        }
    }

    let file = fs::File::create(&path)?; // truncate/overwrite
    write_to(file, export, rows)?;
    logf!("Export: {} rows → {}", rows.len(), path.display());
    Ok(path)
}

/// Same bytes as `write_export`, kept in memory (clipboard copy).
pub fn to_export_string(export: &ExportOptions, rows: &[EnrichedRow]) -> Result<String> {
    let mut buf = Vec::new();
    write_to(&mut buf, export, rows)?;
    String::from_utf8(buf).map_err(|e| Error::Io(std::io::Error::other(e)))
}

pub fn write_to<W: Write>(out: W, export: &ExportOptions, rows: &[EnrichedRow]) -> Result<()> {
    let mut w = WriterBuilder::new()
        .delimiter(export.format.delim())
        .has_headers(false)
        .from_writer(out);

    match export.layout {
        ExportLayout::Tidy => {
            if export.include_headers {
                w.write_record(TIDY_HEADERS)?;
            }
            for r in rows {
                w.write_record([
                    r.week.to_string(),
                    r.date.format(DATE_FMT).to_string(),
                    r.game.to_string(),
                    r.score.to_string(),
                    r.total.to_string(),
                    r.season.clone().unwrap_or_default(),
                    r.lanes.to_string(),
                    r.lane_pair.clone(),
                ])?;
            }
        }
        ExportLayout::Wide => {
            if export.include_headers {
                w.write_record(WIDE_HEADERS)?;
            }
            let cell = |g: Option<u32>| g.map(|v| v.to_string()).unwrap_or_default();
            for r in wide_view(rows) {
                w.write_record([
                    r.date.format(DATE_FMT).to_string(),
                    r.season.unwrap_or_default(),
                    r.week.to_string(),
                    cell(r.games[0]),
                    cell(r.games[1]),
                    cell(r.games[2]),
                    r.total.to_string(),
                    r.lane_pair,
                ])?;
            }
        }
    }

    w.flush()?;
    Ok(())
}

pub fn ensure_directory(dir: &Path) -> Result<()> {
    if !dir.exists() {
        fs::create_dir_all(dir)?;
    }
    Ok(())
}
