// benches/pipeline.rs
use std::hint::black_box;

use chrono::{Duration, NaiveDate};
use criterion::{criterion_group, criterion_main, Criterion};

use bowl_scrape::model::{RawLanePage, RawLaneRow, RawScorePage, RawScoreRow};
use bowl_scrape::scrape::{build_score_table, lanes, LaneLookup};
use bowl_scrape::season::SeasonTable;
use bowl_scrape::stats::{self, Filter};

const YEARS: [i32; 3] = [2021, 2022, 2023];
const WEEKS: u32 = 32;

/// Weekly league nights from mid-September, three seasons.
fn synthetic() -> (Vec<RawScorePage>, Vec<RawLanePage>) {
    let mut scores = Vec::new();
    let mut lanes = Vec::new();
    for y in YEARS {
        let Some(start) = NaiveDate::from_ymd_opt(y, 9, 8) else { continue };
        let mut s_rows = Vec::new();
        let mut l_rows = Vec::new();
        for w in 0..WEEKS {
            let date = (start + Duration::weeks(w as i64)).format("%m/%d/%Y").to_string();
            let g = [140 + (w * 7) % 90, 150 + (w * 11) % 80, 160 + (w * 13) % 70];
            s_rows.push(RawScoreRow {
                week: (w + 1).to_string(),
                date: date.clone(),
                game1: g[0].to_string(),
                game2: g[1].to_string(),
                game3: g[2].to_string(),
                total: g.iter().sum::<u32>().to_string(),
            });
            l_rows.push(RawLaneRow { week: (w + 1).to_string(), date, lanes: (1 + w % 24).to_string() });
            if w % 16 == 15 {
                l_rows.push(RawLaneRow { week: "Page 1 2".into(), date: "Page 1 2".into(), lanes: "Page 1 2".into() });
            }
        }
        scores.push(RawScorePage { source: format!("{y} scores"), rows: s_rows });
        lanes.push(RawLanePage { source: format!("{y} lanes"), rows: l_rows });
    }
    (scores, lanes)
}

fn bench_pipeline(c: &mut Criterion) {
    let (score_pages, lane_pages) = synthetic();
    let seasons = SeasonTable::league_years(&YEARS);

    c.bench_function("build_score_table", |b| {
        b.iter(|| {
            let rows = build_score_table(black_box(&score_pages), &seasons).unwrap();
            black_box(rows.len())
        })
    });

    c.bench_function("lanes_join", |b| {
        let scores = build_score_table(&score_pages, &seasons).unwrap();
        b.iter(|| {
            let lookup = LaneLookup::build(lanes::lane_entries(black_box(&lane_pages)).unwrap());
            let rows = lanes::join(scores.clone(), &lookup).unwrap();
            black_box(rows.len())
        })
    });

    c.bench_function("dashboard_stats", |b| {
        let scores = build_score_table(&score_pages, &seasons).unwrap();
        let lookup = LaneLookup::build(lanes::lane_entries(&lane_pages).unwrap());
        let rows = lanes::join(scores, &lookup).unwrap();
        let filter = Filter::covering(&rows);
        b.iter(|| {
            let picked = filter.apply(black_box(&rows));
            let wide = stats::wide_view(&picked);
            let lanes = stats::average_by_lane_pair(&picked);
            let bins = stats::score_histogram(&picked);
            black_box((wide.len(), lanes.len(), bins.len()))
        })
    });
}

criterion_group!(benches, bench_pipeline);
criterion_main!(benches);
