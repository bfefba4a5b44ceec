// src/scrape/lanes.rs
// Lane history pages → per-date lane lookup, then the left join onto scores.

use std::collections::{BTreeMap, HashMap, HashSet};

use chrono::NaiveDate;

use crate::core::coerce::{parse_date, parse_whole};
use crate::error::{Error, JoinError, Result};
use crate::model::{EnrichedRow, LaneAssignment, RawLanePage, RawLaneRow, ScoreRow};

/// Navigation rows the site renders inside the table body.
pub fn is_pagination(row: &RawLaneRow) -> bool {
    row.week.contains("Page")
}

/// Concatenate pages in order, dropping pagination rows after every step.
pub fn concat_pages(pages: &[RawLanePage]) -> Vec<(&str, &RawLaneRow)> {
    let mut acc: Vec<(&str, &RawLaneRow)> = Vec::new();
    for page in pages {
        acc.extend(page.rows.iter().map(|r| (page.source.as_str(), r)));
        acc.retain(|(_, r)| !is_pagination(r));
    }
    acc
}

/// A lane-history row keyed by its parsed date. The lane cell stays as page
/// text until a score row joins on that date.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct LaneEntry {
    pub date: NaiveDate,
    pub lanes: String,
    pub source: String,
}

/// Entries in page order; duplicates are still present.
pub fn lane_entries(pages: &[RawLanePage]) -> Result<Vec<LaneEntry>> {
    concat_pages(pages)
        .into_iter()
        .map(|(src, raw)| {
            let date = parse_date(&raw.date).ok_or_else(|| Error::parse("date", &raw.date, src))?;
            Ok(LaneEntry { date, lanes: raw.lanes.trim().to_string(), source: s!(src) })
        })
        .collect()
}

/// date → distinct lane cells seen for that league night.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct LaneLookup {
    by_date: BTreeMap<NaiveDate, Vec<LaneEntry>>,
}

impl LaneLookup {
    /// Identical repeats (same night on overlapping pages) collapse here.
    pub fn build(entries: Vec<LaneEntry>) -> Self {
        let mut by_date: BTreeMap<NaiveDate, Vec<LaneEntry>> = BTreeMap::new();
        for e in entries {
            let seen = by_date.entry(e.date).or_default();
            if !seen.iter().any(|s| s.lanes == e.lanes) {
                seen.push(e);
            }
        }
        Self { by_date }
    }

    /// Coerced assignment for `date`, or None when no page listed that night.
    ///
    /// Lane 0 or a non-numeric cell is a Parse error; two different lane
    /// numbers for the same night is a ConflictingLanes error.
    pub fn resolve(&self, date: NaiveDate) -> Result<Option<LaneAssignment>> {
        let Some(entries) = self.by_date.get(&date) else { return Ok(None) };

        let mut found: Option<u32> = None;
        for e in entries {
            let lanes = parse_whole(&e.lanes)
                .filter(|&l| l > 0)
                .ok_or_else(|| Error::parse("lanes", &e.lanes, &e.source))?;
            match found {
                None => found = Some(lanes),
                Some(first) if first == lanes => {}
                Some(first) => {
                    return Err(JoinError::ConflictingLanes { date, first, second: lanes }.into());
                }
            }
        }
        Ok(found.map(|lanes| LaneAssignment { date, lanes }))
    }

    pub fn len(&self) -> usize {
        self.by_date.len()
    }

    pub fn is_empty(&self) -> bool {
        self.by_date.is_empty()
    }
}

/// Left-merge scores onto lanes by date. Every score row must find a lane;
/// exact duplicate results are dropped, first occurrence wins.
///
/// Lanes are coerced only for dates a score row hits, so a bye night may
/// carry any text in its lane cell.
pub fn join(scores: Vec<ScoreRow>, lookup: &LaneLookup) -> Result<Vec<EnrichedRow>> {
    let mut resolved: HashMap<NaiveDate, u32> = HashMap::new();
    let mut seen = HashSet::with_capacity(scores.len());
    let mut out = Vec::with_capacity(scores.len());

    for row in scores {
        let lanes = match resolved.get(&row.date) {
            Some(&l) => l,
            None => {
                let l = lookup
                    .resolve(row.date)?
                    .map(|a| a.lanes)
                    .ok_or(JoinError::MissingLanes { date: row.date })?;
                resolved.insert(row.date, l);
                l
            }
        };
        let enriched = EnrichedRow::new(row, lanes, lane_pair(lanes));
        if seen.insert(enriched.clone()) {
            out.push(enriched);
        }
    }

    Ok(out)
}

/// Odd/even pair sharing a pinsetter: 7 → "7/8", 12 → "11/12".
pub fn lane_pair(lanes: u32) -> String {
    if lanes % 2 == 0 {
        format!("{}/{}", lanes.saturating_sub(1), lanes)
    } else {
        format!("{}/{}", lanes, lanes + 1)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::Game;

    fn d(y: i32, m: u32, day: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, day).unwrap()
    }

    fn raw(week: &str, date: &str, lanes: &str) -> RawLaneRow {
        RawLaneRow { week: s!(week), date: s!(date), lanes: s!(lanes) }
    }

    fn page(src: &str, rows: Vec<RawLaneRow>) -> RawLanePage {
        RawLanePage { source: s!(src), rows }
    }

    fn entry(date: NaiveDate, lanes: &str) -> LaneEntry {
        LaneEntry { date, lanes: s!(lanes), source: s!("p") }
    }

    fn score(date: NaiveDate, game: Game, score: u32) -> ScoreRow {
        ScoreRow { week: 1, date, game, score, total: 600, season: None }
    }

    #[test]
    fn pairs() {
        assert_eq!(lane_pair(7), "7/8");
        assert_eq!(lane_pair(12), "11/12");
        assert_eq!(lane_pair(1), "1/2");
        assert_eq!(lane_pair(2), "1/2");
        assert_eq!(lane_pair(9), lane_pair(10));
    }

    #[test]
    fn pagination_rows_never_survive() {
        let pages = [
            page("p1", vec![raw("1", "9/8/2021", "9"), raw("Page 1 2", "Page 1 2", "Page 1 2")]),
            page("p2", vec![raw("Page 1 2", "x", "y"), raw("2", "9/15/2021", "11")]),
        ];
        let got = lane_entries(&pages).unwrap();
        assert_eq!(
            got,
            vec![
                LaneEntry { date: d(2021, 9, 8), lanes: s!("9"), source: s!("p1") },
                LaneEntry { date: d(2021, 9, 15), lanes: s!("11"), source: s!("p2") },
            ]
        );
    }

    #[test]
    fn bad_date_fails_but_lane_text_is_kept_raw() {
        let p = [page("p", vec![raw("1", "week one", "3")])];
        assert!(matches!(lane_entries(&p), Err(Error::Parse { field: "date", .. })));

        let p = [page("p", vec![raw("1", "9/8/2021", "BYE")])];
        assert_eq!(lane_entries(&p).unwrap()[0].lanes, "BYE");
    }

    #[test]
    fn resolve_coerces_and_rejects() {
        let day = d(2021, 9, 8);
        let lk = LaneLookup::build(vec![entry(day, "9"), entry(day, "9")]);
        assert_eq!(lk.len(), 1);
        assert_eq!(lk.resolve(day).unwrap(), Some(LaneAssignment { date: day, lanes: 9 }));
        assert_eq!(lk.resolve(d(2021, 9, 15)).unwrap(), None);

        let lk = LaneLookup::build(vec![entry(day, "0")]);
        assert!(matches!(lk.resolve(day), Err(Error::Parse { field: "lanes", .. })));
        let lk = LaneLookup::build(vec![entry(day, "TBA")]);
        assert!(matches!(lk.resolve(day), Err(Error::Parse { field: "lanes", .. })));

        let lk = LaneLookup::build(vec![entry(day, "9"), entry(day, "3")]);
        assert!(matches!(
            lk.resolve(day),
            Err(Error::Join(JoinError::ConflictingLanes { first: 9, second: 3, .. }))
        ));

        // same number written two ways is not a conflict
        let lk = LaneLookup::build(vec![entry(day, "9"), entry(day, "9.0")]);
        assert_eq!(lk.resolve(day).unwrap().map(|a| a.lanes), Some(9));
    }

    #[test]
    fn join_enriches_and_dedups_in_order() {
        let day = d(2021, 9, 8);
        let lk = LaneLookup::build(vec![entry(day, "10")]);
        let scores = vec![
            score(day, Game::Game1, 200),
            score(day, Game::Game2, 180),
            score(day, Game::Game1, 200),
            score(day, Game::Game3, 220),
        ];
        let out = join(scores, &lk).unwrap();
        assert_eq!(out.len(), 3);
        assert_eq!(out.iter().map(|r| r.game).collect::<Vec<_>>(), Game::ALL.to_vec());
        assert!(out.iter().all(|r| r.lanes == 10 && r.lane_pair == "9/10"));
    }

    #[test]
    fn join_ignores_bad_lanes_on_unplayed_nights() {
        let played = d(2021, 9, 8);
        let bye = d(2021, 9, 22);
        let lk = LaneLookup::build(vec![
            entry(played, "10"),
            entry(bye, "0"),
            entry(bye, "BYE"),
        ]);
        let out = join(vec![score(played, Game::Game1, 200)], &lk).unwrap();
        assert_eq!(out.len(), 1);
        assert_eq!(out[0].lanes, 10);
    }

    #[test]
    fn join_fails_on_missing_lane() {
        let lk = LaneLookup::build(vec![entry(d(2021, 9, 8), "10")]);
        let err = join(vec![score(d(2021, 9, 15), Game::Game1, 1)], &lk).unwrap_err();
        assert!(matches!(
            err,
            Error::Join(JoinError::MissingLanes { date }) if date == d(2021, 9, 15)
        ));
    }
}
