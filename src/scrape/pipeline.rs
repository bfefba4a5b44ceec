// src/scrape/pipeline.rs
use std::time::Instant;

use super::lanes::{self, LaneLookup};
use super::scores::build_score_table;
use crate::config::options::ScrapeOptions;
use crate::error::Result;
use crate::model::EnrichedRow;
use crate::progress::Progress;
use crate::source::PageSource;
use crate::specs;

/// Fetch every configured page strictly in sequence (scores first, then
/// lanes), build the tidy score table and join the lane lookup onto it.
///
/// Any error aborts the run; nothing is written here.
pub fn run_pipeline(
    source: &dyn PageSource,
    opts: &ScrapeOptions,
    mut progress: Option<&mut dyn Progress>,
) -> Result<Vec<EnrichedRow>> {
    let total = opts.years.len() + opts.lane_targets().len();
    if let Some(p) = progress.as_deref_mut() {
        p.begin(total);
    }

    // reborrow with a shorter object lifetime so `progress` is free again for finish()
    let result = run(source, opts, progress.as_mut().map(|p| &mut **p as &mut dyn Progress));

    if let Some(p) = progress.as_deref_mut() {
        p.finish();
    }
    result
}

fn run(
    source: &dyn PageSource,
    opts: &ScrapeOptions,
    mut progress: Option<&mut dyn Progress>,
) -> Result<Vec<EnrichedRow>> {
    let t0 = Instant::now();

    // 1) Scores, one page per league year
    if let Some(p) = progress.as_deref_mut() {
        p.log("Fetching score pages…");
    }
    let mut score_pages = Vec::with_capacity(opts.years.len());
    for &year in &opts.years {
        let label = format!("{year} scores");
        let url = opts.score_url(year);
        logf!("Scrape: {} ← {}", label, url);

        let table = source.fetch_table(&url)?;
        score_pages.push(specs::scores::extract(&table, &label)?);

        if let Some(p) = progress.as_deref_mut() {
            p.item_done(&label);
        }
    }
    let scores = build_score_table(&score_pages, &opts.seasons())?;
    logd!("Scrape: {} score rows after {:?}", scores.len(), t0.elapsed());

    // 2) Lanes, several pages per league year
    if let Some(p) = progress.as_deref_mut() {
        p.log("Fetching lane history…");
    }
    let mut lane_pages = Vec::new();
    for (year, page) in opts.lane_targets() {
        let label = format!("{year} lanes p{page}");
        let url = opts.lane_url(year, page);
        logf!("Scrape: {} ← {}", label, url);

        let table = source.fetch_table(&url)?;
        lane_pages.push(specs::lanes::extract(&table, &label)?);

        if let Some(p) = progress.as_deref_mut() {
            p.item_done(&label);
        }
    }
    let lookup = LaneLookup::build(lanes::lane_entries(&lane_pages)?);

    // 3) Join
    let rows = lanes::join(scores, &lookup)?;
    logf!(
        "Scrape: {} rows, {} league nights, done in {:?}",
        rows.len(),
        lookup.len(),
        t0.elapsed()
    );
    Ok(rows)
}
