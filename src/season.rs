// src/season.rs
//! Season labels derived from game dates.
//!
//! A league year is an open date interval: the 2021 league
//! year covers dates strictly after 2021-09-01 and strictly before
//! 2022-06-01 and is labelled `"2021-2022"`. Dates that fall in no window
//! (summer gaps, anything before the first or after the last cataloged
//! year, or exactly on a boundary) have no season.

use chrono::NaiveDate;

use crate::config::consts::{LEAGUE_YEARS, SEASON_END, SEASON_START};

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SeasonInterval {
    pub start: NaiveDate,
    pub end: NaiveDate,
    pub label: String,
}

impl SeasonInterval {
    /// Both bounds exclusive.
    pub fn contains(&self, date: NaiveDate) -> bool {
        date > self.start && date < self.end
    }
}

/// Ordered interval table; the first matching interval wins.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SeasonTable {
    intervals: Vec<SeasonInterval>,
}

impl SeasonTable {
    pub fn new(intervals: Vec<SeasonInterval>) -> Self {
        Self { intervals }
    }

    /// One interval per league year, Sep 1 of `y` to Jun 1 of `y + 1`.
    pub fn league_years(years: &[i32]) -> Self {
        let (sm, sd) = SEASON_START;
        let (em, ed) = SEASON_END;
        let intervals = years
            .iter()
            .filter_map(|&y| {
                Some(SeasonInterval {
                    start: NaiveDate::from_ymd_opt(y, sm, sd)?,
                    end: NaiveDate::from_ymd_opt(y + 1, em, ed)?,
                    label: format!("{}-{}", y, y + 1),
                })
            })
            .collect();
        Self { intervals }
    }

    pub fn label_for(&self, date: NaiveDate) -> Option<&str> {
        self.intervals
            .iter()
            .find(|iv| iv.contains(date))
            .map(|iv| iv.label.as_str())
    }

    pub fn labels(&self) -> impl Iterator<Item = &str> {
        self.intervals.iter().map(|iv| iv.label.as_str())
    }

    pub fn len(&self) -> usize {
        self.intervals.len()
    }

    pub fn is_empty(&self) -> bool {
        self.intervals.is_empty()
    }
}

impl Default for SeasonTable {
    fn default() -> Self {
        Self::league_years(LEAGUE_YEARS)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn d(y: i32, m: u32, day: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, day).unwrap()
    }

    #[test]
    fn default_table_labels_each_league_year() {
        let t = SeasonTable::default();
        assert_eq!(t.labels().collect::<Vec<_>>(), ["2021-2022", "2022-2023", "2023-2024"]);
        assert_eq!(t.label_for(d(2021, 9, 14)), Some("2021-2022"));
        assert_eq!(t.label_for(d(2022, 5, 31)), Some("2021-2022"));
        assert_eq!(t.label_for(d(2023, 1, 10)), Some("2022-2023"));
        assert_eq!(t.label_for(d(2024, 3, 5)), Some("2023-2024"));
    }

    #[test]
    fn boundaries_and_gaps_have_no_season() {
        let t = SeasonTable::default();
        assert_eq!(t.label_for(d(2021, 9, 1)), None);
        assert_eq!(t.label_for(d(2022, 6, 1)), None);
        assert_eq!(t.label_for(d(2022, 7, 15)), None);
        assert_eq!(t.label_for(d(2020, 12, 1)), None);
        assert_eq!(t.label_for(d(2024, 10, 1)), None);
    }

    #[test]
    fn lookup_is_repeatable() {
        let t = SeasonTable::default();
        let date = d(2022, 11, 2);
        assert_eq!(t.label_for(date), t.label_for(date));
    }

    #[test]
    fn custom_intervals_keep_order() {
        let t = SeasonTable::new(vec![
            SeasonInterval { start: d(2020, 1, 1), end: d(2020, 12, 31), label: s!("first") },
            SeasonInterval { start: d(2020, 6, 1), end: d(2021, 6, 1), label: s!("second") },
        ]);
        assert_eq!(t.label_for(d(2020, 7, 1)), Some("first"));
        assert_eq!(t.label_for(d(2021, 2, 1)), Some("second"));
        assert_eq!(t.len(), 2);
    }
}
