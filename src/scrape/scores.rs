// src/scrape/scores.rs
// Raw per-season score pages → tidy ScoreRow table.

use crate::core::coerce::{parse_date, parse_whole};
use crate::error::{Error, Result};
use crate::model::{RawScorePage, ScoreRow};
use crate::season::SeasonTable;

/// Concatenate pages in the order given, melt game1..game3 into one row per
/// game, coerce every field and attach the season label.
///
/// Rows come out week-major: each raw row yields its three games in order.
/// Any coercion failure aborts with a Parse error naming the page.
pub fn build_score_table(pages: &[RawScorePage], seasons: &SeasonTable) -> Result<Vec<ScoreRow>> {
    let mut out = Vec::with_capacity(pages.iter().map(|p| p.rows.len() * 3).sum());

    for page in pages {
        let src = page.source.as_str();
        for raw in &page.rows {
            // specs::scores drops these already; hand-built pages may not.
            if raw.is_unplayed() {
                continue;
            }
            let week = parse_whole(&raw.week).ok_or_else(|| Error::parse("week", &raw.week, src))?;
            let date = parse_date(&raw.date).ok_or_else(|| Error::parse("date", &raw.date, src))?;
            let total = parse_whole(&raw.total).ok_or_else(|| Error::parse("total", &raw.total, src))?;
            let season = seasons.label_for(date).map(str::to_string);

            for (game, cell) in raw.games() {
                let score = parse_whole(cell).ok_or_else(|| Error::parse("score", cell, src))?;
                out.push(ScoreRow {
                    week,
                    date,
                    game,
                    score,
                    total,
                    season: season.clone(),
                });
            }
        }
    }

    Ok(out)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{Game, RawScoreRow};
    use chrono::NaiveDate;

    fn row(week: &str, date: &str, g: [&str; 3], total: &str) -> RawScoreRow {
        RawScoreRow {
            week: s!(week),
            date: s!(date),
            game1: s!(g[0]),
            game2: s!(g[1]),
            game3: s!(g[2]),
            total: s!(total),
        }
    }

    fn page(rows: Vec<RawScoreRow>) -> RawScorePage {
        RawScorePage { source: s!("2021 scores"), rows }
    }

    #[test]
    fn melts_each_week_into_three_games() {
        let seasons = SeasonTable::league_years(&[2021]);
        let p = page(vec![
            row("1", "9/8/2021", ["180", "190", "200"], "570"),
            row("2", "9/15/2021", ["0", "0", "0"], "0"),
            row("3", "9/22/2021", ["150", "160.0", "170"], "480"),
        ]);
        let rows = build_score_table(&[p], &seasons).unwrap();

        assert_eq!(rows.len(), 6);
        assert!(rows.iter().all(|r| r.total != 0));
        assert_eq!(rows[0].game, Game::Game1);
        assert_eq!(rows[2].game, Game::Game3);
        assert_eq!(rows[2].score, 200);
        assert_eq!(rows[4].score, 160);
        assert!(rows[..3].iter().all(|r| r.week == 1 && r.total == 570));
        assert!(rows.iter().all(|r| r.season.as_deref() == Some("2021-2022")));
    }

    #[test]
    fn out_of_range_date_has_no_season() {
        let seasons = SeasonTable::league_years(&[2021]);
        let p = page(vec![row("1", "7/1/2022", ["100", "100", "100"], "300")]);
        let rows = build_score_table(&[p], &seasons).unwrap();
        assert_eq!(rows.len(), 3);
        assert!(rows.iter().all(|r| r.season.is_none()));
        assert_eq!(rows[0].date, NaiveDate::from_ymd_opt(2022, 7, 1).unwrap());
    }

    #[test]
    fn bad_score_names_field_value_and_page() {
        let seasons = SeasonTable::league_years(&[2021]);
        let p = page(vec![row("1", "9/8/2021", ["180", "A", "200"], "570")]);
        match build_score_table(&[p], &seasons) {
            Err(Error::Parse { field, value, page }) => {
                assert_eq!(field, "score");
                assert_eq!(value, "A");
                assert_eq!(page, "2021 scores");
            }
            other => panic!("expected parse error, got {other:?}"),
        }
    }

    #[test]
    fn bad_date_fails_the_whole_table() {
        let seasons = SeasonTable::default();
        let p = page(vec![
            row("1", "9/8/2021", ["1", "2", "3"], "6"),
            row("2", "someday", ["1", "2", "3"], "6"),
        ]);
        assert!(matches!(
            build_score_table(&[p], &seasons),
            Err(Error::Parse { field: "date", .. })
        ));
    }

    #[test]
    fn pages_keep_their_order() {
        let seasons = SeasonTable::league_years(&[2021, 2022]);
        let a = RawScorePage { source: s!("a"), rows: vec![row("1", "9/7/2022", ["1", "1", "1"], "3")] };
        let b = RawScorePage { source: s!("b"), rows: vec![row("1", "9/8/2021", ["2", "2", "2"], "6")] };
        let rows = build_score_table(&[a, b], &seasons).unwrap();
        assert_eq!(rows[0].season.as_deref(), Some("2022-2023"));
        assert_eq!(rows[3].season.as_deref(), Some("2021-2022"));
    }
}
