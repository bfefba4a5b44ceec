// src/store.rs
//! On-disk snapshot of the last successful refresh.
//!
//! Two JSON files under the store dir: the enriched table and the local
//! timestamp it was saved at. Both are replaced wholesale on each refresh
//! (written to a `.tmp` sibling, then renamed). Two processes refreshing at
//! once is not supported; the last rename wins.

use std::fs;
use std::io::{BufReader, BufWriter, Write};
use std::path::{Path, PathBuf};

use chrono::{DateTime, Local};
use serde::de::DeserializeOwned;
use serde::Serialize;

use crate::config::consts::{SNAPSHOT_FILE, STAMP_FILE, STORE_DIR};
use crate::config::options::ScrapeOptions;
use crate::error::{Error, Result};
use crate::model::EnrichedRow;
use crate::progress::Progress;
use crate::scrape::run_pipeline;
use crate::source::PageSource;

#[derive(Clone, Debug, PartialEq)]
pub struct Snapshot {
    pub saved_at: DateTime<Local>,
    pub rows: Vec<EnrichedRow>,
}

/// How the snapshot handed back by [`SnapshotCache::load_or_refresh`] came to be.
#[derive(Debug)]
pub enum Freshness {
    /// Saved earlier today; nothing fetched.
    Cached,
    /// Just scraped and saved.
    Refreshed,
    /// Refresh failed; this is the previous snapshot.
    Stale(Error),
}

#[derive(Debug)]
pub struct Loaded {
    pub snapshot: Snapshot,
    pub freshness: Freshness,
}

#[derive(Clone, Debug)]
pub struct SnapshotCache {
    dir: PathBuf,
}

impl Default for SnapshotCache {
    fn default() -> Self {
        Self::open(STORE_DIR)
    }
}

impl SnapshotCache {
    pub fn open(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }

    fn data_path(&self) -> PathBuf {
        self.dir.join(SNAPSHOT_FILE)
    }

    fn stamp_path(&self) -> PathBuf {
        self.dir.join(STAMP_FILE)
    }

    /// Timestamp of the last save, if one is stored and readable.
    pub fn last_saved(&self) -> Option<DateTime<Local>> {
        read_json(&self.stamp_path()).ok()
    }

    /// Stale unless a readable stamp falls on `now`'s calendar day.
    pub fn is_stale(&self, now: DateTime<Local>) -> bool {
        match self.last_saved() {
            Some(stamp) => stamp.date_naive() != now.date_naive(),
            None => true,
        }
    }

    /// `None` if nothing was ever saved here.
    pub fn load(&self) -> Result<Option<Snapshot>> {
        let (data, stamp) = (self.data_path(), self.stamp_path());
        if !data.exists() || !stamp.exists() {
            return Ok(None);
        }
        let rows: Vec<EnrichedRow> = read_json(&data)?;
        let saved_at: DateTime<Local> = read_json(&stamp)?;
        Ok(Some(Snapshot { saved_at, rows }))
    }

    /// Table first, stamp second, so a crash in between reads as stale.
    pub fn save(&self, rows: &[EnrichedRow], stamp: DateTime<Local>) -> Result<()> {
        fs::create_dir_all(&self.dir)?;
        write_json_atomic(&self.data_path(), &rows)?;
        write_json_atomic(&self.stamp_path(), &stamp)?;
        logd!("Store: Saved {} rows to {}", rows.len(), self.dir.display());
        Ok(())
    }

    /// Run the pipeline and save its output stamped with `clock()` at
    /// completion. On failure the files on disk are left as they were.
    pub fn refresh(
        &self,
        source: &dyn PageSource,
        opts: &ScrapeOptions,
        progress: Option<&mut dyn Progress>,
        clock: impl Fn() -> DateTime<Local>,
    ) -> Result<Snapshot> {
        let rows = run_pipeline(source, opts, progress)?;
        let saved_at = clock();
        self.save(&rows, saved_at)?;
        logf!("Store: Refreshed snapshot at {}", saved_at.format("%Y-%m-%d %H:%M:%S"));
        Ok(Snapshot { saved_at, rows })
    }

    /// Serve today's snapshot, refreshing first when stale. A failed refresh
    /// falls back to the previous snapshot if there is one.
    pub fn load_or_refresh(
        &self,
        source: &dyn PageSource,
        opts: &ScrapeOptions,
        progress: Option<&mut dyn Progress>,
        clock: impl Fn() -> DateTime<Local>,
    ) -> Result<Loaded> {
        if !self.is_stale(clock()) {
            // an unreadable table under today's stamp is treated as stale
            match self.load() {
                Ok(Some(snapshot)) => {
                    logd!("Store: Using cached snapshot from {}", snapshot.saved_at);
                    return Ok(Loaded { snapshot, freshness: Freshness::Cached });
                }
                Ok(None) => {}
                Err(e) => loge!("Store: Cached snapshot unreadable, refreshing: {}", e),
            }
        }

        match self.refresh(source, opts, progress, clock) {
            Ok(snapshot) => Ok(Loaded { snapshot, freshness: Freshness::Refreshed }),
            Err(e) => match self.load() {
                Ok(Some(snapshot)) => {
                    loge!("Store: Refresh failed, serving snapshot from {}: {}", snapshot.saved_at, e);
                    Ok(Loaded { snapshot, freshness: Freshness::Stale(e) })
                }
                _ => Err(e),
            },
        }
    }
}

fn read_json<T: DeserializeOwned>(path: &Path) -> Result<T> {
    let file = fs::File::open(path)?;
    Ok(serde_json::from_reader(BufReader::new(file))?)
}

fn write_json_atomic<T: Serialize + ?Sized>(path: &Path, value: &T) -> Result<()> {
    let tmp = path.with_extension("json.tmp");
    {
        let mut w = BufWriter::new(fs::File::create(&tmp)?);
        serde_json::to_writer(&mut w, value)?;
        w.flush()?;
    }
    fs::rename(&tmp, path)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{NaiveDate, TimeZone};

    use crate::model::Game;

    fn at(y: i32, m: u32, d: u32, h: u32) -> DateTime<Local> {
        Local.with_ymd_and_hms(y, m, d, h, 0, 0).single().unwrap()
    }

    fn rows() -> Vec<EnrichedRow> {
        vec![EnrichedRow {
            week: 1,
            date: NaiveDate::from_ymd_opt(2021, 9, 8).unwrap(),
            game: Game::Game1,
            score: 190,
            total: 570,
            season: Some(s!("2021-2022")),
            lanes: 9,
            lane_pair: s!("9/10"),
        }]
    }

    #[test]
    fn empty_store_is_stale_and_loads_nothing() {
        let tmp = tempfile::tempdir().unwrap();
        let cache = SnapshotCache::open(tmp.path().join("store"));
        assert!(cache.is_stale(at(2024, 1, 10, 12)));
        assert!(cache.load().unwrap().is_none());
        assert!(cache.last_saved().is_none());
    }

    #[test]
    fn staleness_follows_calendar_day() {
        let tmp = tempfile::tempdir().unwrap();
        let cache = SnapshotCache::open(tmp.path());
        cache.save(&rows(), at(2024, 1, 10, 8)).unwrap();

        assert!(!cache.is_stale(at(2024, 1, 10, 23)));
        assert!(cache.is_stale(at(2024, 1, 11, 0)));
        assert!(cache.is_stale(at(2024, 1, 9, 23)));
    }

    #[test]
    fn save_then_load() {
        let tmp = tempfile::tempdir().unwrap();
        let cache = SnapshotCache::open(tmp.path());
        let stamp = at(2024, 1, 10, 8);
        cache.save(&rows(), stamp).unwrap();

        let snap = cache.load().unwrap().unwrap();
        assert_eq!(snap.saved_at, stamp);
        assert_eq!(snap.rows, rows());
        assert!(!tmp.path().join("bowler_data.json.tmp").exists());
    }

    #[test]
    fn garbage_stamp_reads_as_stale() {
        let tmp = tempfile::tempdir().unwrap();
        let cache = SnapshotCache::open(tmp.path());
        cache.save(&rows(), at(2024, 1, 10, 8)).unwrap();
        fs::write(tmp.path().join(STAMP_FILE), "yesterday-ish").unwrap();
        assert!(cache.is_stale(at(2024, 1, 10, 9)));
    }
}
