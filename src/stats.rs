// src/stats.rs
//! Dashboard-side filtering and aggregation.
//!
//! Everything here is pure and works on the unfiltered snapshot table (or a
//! filtered copy of it). The pipeline never aggregates.

use std::collections::{BTreeMap, BTreeSet, HashSet};

use chrono::{Datelike, NaiveDate};

use crate::config::consts::HISTOGRAM_BINS;
use crate::model::{EnrichedRow, Game};

/* ------------------------------- filtering ------------------------------- */

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub enum Selection {
    #[default]
    All,
    Only(BTreeSet<String>),
}

impl Selection {
    /// Rows without a value (no season) pass only under `All`.
    pub fn admits(&self, value: Option<&str>) -> bool {
        match (self, value) {
            (Selection::All, _) => true,
            (Selection::Only(set), Some(v)) => set.contains(v),
            (Selection::Only(_), None) => false,
        }
    }

    pub fn is_all(&self) -> bool {
        matches!(self, Selection::All)
    }

    /// Checkbox toggle; the last item unchecked leaves an empty `Only`.
    pub fn toggle(&mut self, value: &str, universe: &[String]) {
        let mut set = match self {
            Selection::All => universe.iter().cloned().collect(),
            Selection::Only(set) => std::mem::take(set),
        };
        if !set.remove(value) {
            set.insert(s!(value));
        }
        *self = if universe.iter().all(|u| set.contains(u)) {
            Selection::All
        } else {
            Selection::Only(set)
        };
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Filter {
    /// Inclusive.
    pub start: NaiveDate,
    /// Inclusive.
    pub end: NaiveDate,
    pub seasons: Selection,
    pub lane_pairs: Selection,
}

impl Filter {
    /// Full date span of `rows`, everything selected.
    pub fn covering(rows: &[EnrichedRow]) -> Self {
        let start = rows.iter().map(|r| r.date).min().unwrap_or(NaiveDate::MIN);
        let end = rows.iter().map(|r| r.date).max().unwrap_or(NaiveDate::MAX);
        Self { start, end, seasons: Selection::All, lane_pairs: Selection::All }
    }

    pub fn matches(&self, row: &EnrichedRow) -> bool {
        row.date >= self.start
            && row.date <= self.end
            && self.seasons.admits(row.season_label())
            && self.lane_pairs.admits(Some(&row.lane_pair))
    }

    pub fn apply(&self, rows: &[EnrichedRow]) -> Vec<EnrichedRow> {
        rows.iter().filter(|r| self.matches(r)).cloned().collect()
    }
}

/* ------------------------------- summaries ------------------------------- */

pub fn round_to(v: f64, places: i32) -> f64 {
    let m = 10f64.powi(places);
    (v * m).round() / m
}

/// One series per league night: (date, total), deduplicated, first seen order.
pub fn series(rows: &[EnrichedRow]) -> Vec<(NaiveDate, u32)> {
    let mut seen = HashSet::new();
    rows.iter()
        .map(|r| (r.date, r.total))
        .filter(|k| seen.insert(*k))
        .collect()
}

#[derive(Clone, Debug, Default, PartialEq)]
pub struct Summary {
    pub games: usize,
    pub pins: u64,
    /// Mean score, 2 dp; 0 for no games.
    pub average: f64,
    pub high_game: Option<u32>,
    pub low_game: Option<u32>,
    pub high_series: Option<u32>,
    pub low_series: Option<u32>,
}

/// Filtered minus overall, for the metric cards.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct SummaryDelta {
    pub games: i64,
    pub average: f64,
    pub high_game: Option<i64>,
    pub low_game: Option<i64>,
    pub high_series: Option<i64>,
    pub low_series: Option<i64>,
}

impl Summary {
    pub fn of(rows: &[EnrichedRow]) -> Self {
        let games = rows.len();
        let pins: u64 = rows.iter().map(|r| r.score as u64).sum();
        let average = if games == 0 { 0.0 } else { round_to(pins as f64 / games as f64, 2) };
        let totals: Vec<u32> = series(rows).into_iter().map(|(_, t)| t).collect();
        Self {
            games,
            pins,
            average,
            high_game: rows.iter().map(|r| r.score).max(),
            low_game: rows.iter().map(|r| r.score).min(),
            high_series: totals.iter().copied().max(),
            low_series: totals.iter().copied().min(),
        }
    }

    pub fn delta(&self, overall: &Summary) -> SummaryDelta {
        fn diff(a: Option<u32>, b: Option<u32>) -> Option<i64> {
            Some(a? as i64 - b? as i64)
        }
        SummaryDelta {
            games: self.games as i64 - overall.games as i64,
            average: round_to(self.average - overall.average, 2),
            high_game: diff(self.high_game, overall.high_game),
            low_game: diff(self.low_game, overall.low_game),
            high_series: diff(self.high_series, overall.high_series),
            low_series: diff(self.low_series, overall.low_series),
        }
    }
}

/* ------------------------------- averages -------------------------------- */

#[derive(Clone, Debug, PartialEq)]
pub struct GroupAverage {
    pub label: String,
    /// 2 dp.
    pub average: f64,
    pub games: usize,
}

fn averages<K: Ord>(
    rows: &[EnrichedRow],
    key: impl Fn(&EnrichedRow) -> Option<K>,
    label: impl Fn(&K) -> String,
) -> Vec<GroupAverage> {
    let mut acc: BTreeMap<K, (u64, usize)> = BTreeMap::new();
    for r in rows {
        if let Some(k) = key(r) {
            let e = acc.entry(k).or_default();
            e.0 += r.score as u64;
            e.1 += 1;
        }
    }
    acc.into_iter()
        .map(|(k, (sum, n))| GroupAverage {
            label: label(&k),
            average: round_to(sum as f64 / n as f64, 2),
            games: n,
        })
        .collect()
}

/// game1, game2, game3 order.
pub fn average_by_game(rows: &[EnrichedRow]) -> Vec<GroupAverage> {
    averages(rows, |r| Some(r.game), Game::to_string)
}

/// Seasons in label order; rows without a season are left out.
pub fn average_by_season(rows: &[EnrichedRow]) -> Vec<GroupAverage> {
    averages(rows, |r| r.season.clone(), String::clone)
}

/// Highest average first.
pub fn average_by_lane_pair(rows: &[EnrichedRow]) -> Vec<GroupAverage> {
    let mut v = averages(rows, |r| Some(pair_key(&r.lane_pair)), |k| k.1.clone());
    v.sort_by(|a, b| b.average.total_cmp(&a.average));
    v
}

/// Calendar months in order, labelled `MM-YYYY`.
pub fn average_by_month(rows: &[EnrichedRow]) -> Vec<GroupAverage> {
    averages(
        rows,
        |r| Some((r.date.year(), r.date.month())),
        |&(y, m)| format!("{m:02}-{y}"),
    )
}

/// Sort key putting "9/10" before "11/12".
fn pair_key(pair: &str) -> (u32, String) {
    let first = pair
        .split('/')
        .next()
        .and_then(|s| s.trim().parse().ok())
        .unwrap_or(u32::MAX);
    (first, s!(pair))
}

#[derive(Clone, Debug, Default, PartialEq)]
pub struct BestWorst {
    pub best: Vec<GroupAverage>,
    pub worst: Vec<GroupAverage>,
}

/// Highest and lowest averages; ties keep every tied group.
pub fn best_and_worst(groups: &[GroupAverage]) -> BestWorst {
    let hi = groups.iter().map(|g| g.average).max_by(f64::total_cmp);
    let lo = groups.iter().map(|g| g.average).min_by(f64::total_cmp);
    let pick = |v: Option<f64>| -> Vec<GroupAverage> {
        v.map(|v| groups.iter().filter(|g| g.average == v).cloned().collect())
            .unwrap_or_default()
    };
    BestWorst { best: pick(hi), worst: pick(lo) }
}

/* ------------------------------ distributions ---------------------------- */

/// Inclusive integer range `lo..=hi` and how many values fell in it.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Bin {
    pub lo: u32,
    pub hi: u32,
    pub count: usize,
}

impl Bin {
    pub fn label(&self) -> String {
        if self.lo == self.hi { self.lo.to_string() } else { format!("{}–{}", self.lo, self.hi) }
    }
}

/// Equal-width integer bins, at most `max_bins`, spanning min..=max.
pub fn histogram(values: &[u32], max_bins: usize) -> Vec<Bin> {
    let (Some(&min), Some(&max)) = (values.iter().min(), values.iter().max()) else {
        return Vec::new();
    };
    let max_bins = max_bins.max(1) as u64;
    let span = (max - min) as u64 + 1;
    let width = span.div_ceil(max_bins).max(1);
    let n = span.div_ceil(width) as usize;

    let mut bins: Vec<Bin> = (0..n)
        .map(|i| {
            let lo = min as u64 + i as u64 * width;
            let hi = (lo + width - 1).min(max as u64);
            Bin { lo: lo as u32, hi: hi as u32, count: 0 }
        })
        .collect();
    for &v in values {
        let i = ((v - min) as u64 / width) as usize;
        bins[i.min(n - 1)].count += 1;
    }
    bins
}

pub fn score_histogram(rows: &[EnrichedRow]) -> Vec<Bin> {
    let scores: Vec<u32> = rows.iter().map(|r| r.score).collect();
    histogram(&scores, HISTOGRAM_BINS)
}

pub fn series_histogram(rows: &[EnrichedRow]) -> Vec<Bin> {
    let totals: Vec<u32> = series(rows).into_iter().map(|(_, t)| t).collect();
    histogram(&totals, HISTOGRAM_BINS)
}

/* -------------------------------- extremes ------------------------------- */

/// A record value and every date it was reached on (ascending).
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Extreme {
    pub value: u32,
    pub dates: Vec<NaiveDate>,
}

fn extreme(pairs: impl Iterator<Item = (NaiveDate, u32)> + Clone, high: bool) -> Option<Extreme> {
    let value = if high {
        pairs.clone().map(|(_, v)| v).max()?
    } else {
        pairs.clone().map(|(_, v)| v).min()?
    };
    let dates: BTreeSet<NaiveDate> = pairs.filter(|&(_, v)| v == value).map(|(d, _)| d).collect();
    Some(Extreme { value, dates: dates.into_iter().collect() })
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Extremes {
    pub high_game: Option<Extreme>,
    pub low_game: Option<Extreme>,
    pub high_series: Option<Extreme>,
    pub low_series: Option<Extreme>,
}

impl Extremes {
    pub fn of(rows: &[EnrichedRow]) -> Self {
        let games = rows.iter().map(|r| (r.date, r.score));
        let totals = series(rows);
        Self {
            high_game: extreme(games.clone(), true),
            low_game: extreme(games, false),
            high_series: extreme(totals.iter().copied(), true),
            low_series: extreme(totals.iter().copied(), false),
        }
    }
}

/* --------------------------------- views --------------------------------- */

/// One league night with its three games side by side.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct WideRow {
    pub date: NaiveDate,
    pub season: Option<String>,
    pub week: u32,
    pub games: [Option<u32>; 3],
    pub total: u32,
    pub lane_pair: String,
}

/// Pivot back to one row per (date, week, season, total, lane pair),
/// newest first.
pub fn wide_view(rows: &[EnrichedRow]) -> Vec<WideRow> {
    type Key = (NaiveDate, u32, Option<String>, u32, String);
    let mut acc: BTreeMap<Key, [Option<u32>; 3]> = BTreeMap::new();
    for r in rows {
        let key = (r.date, r.week, r.season.clone(), r.total, r.lane_pair.clone());
        let slot = &mut acc.entry(key).or_default()[r.game.index()];
        if slot.is_none() {
            *slot = Some(r.score);
        }
    }
    acc.into_iter()
        .rev()
        .map(|((date, week, season, total, lane_pair), games)| WideRow {
            date,
            season,
            week,
            games,
            total,
            lane_pair,
        })
        .collect()
}

pub fn distinct_seasons(rows: &[EnrichedRow]) -> Vec<String> {
    rows.iter()
        .filter_map(|r| r.season.clone())
        .collect::<BTreeSet<_>>()
        .into_iter()
        .collect()
}

/// Sorted by lane number, not text.
pub fn distinct_lane_pairs(rows: &[EnrichedRow]) -> Vec<String> {
    rows.iter()
        .map(|r| pair_key(&r.lane_pair))
        .collect::<BTreeSet<_>>()
        .into_iter()
        .map(|(_, p)| p)
        .collect()
}
