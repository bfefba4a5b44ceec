// tests/common/mod.rs
//
// In-memory league site: URL → HTML, parsed through the real table reader.
#![allow(dead_code)]

use std::cell::Cell;
use std::collections::HashMap;

use bowl_scrape::config::options::ScrapeOptions;
use bowl_scrape::core::html::{self, RawTable};
use bowl_scrape::source::PageSource;
use bowl_scrape::{Error, Result};

#[derive(Default)]
pub struct FixtureSite {
    pages: HashMap<String, String>,
    pub fetches: Cell<usize>,
}

impl FixtureSite {
    pub fn with(mut self, url: String, doc: String) -> Self {
        self.pages.insert(url, doc);
        self
    }

    pub fn remove(&mut self, url: &str) {
        self.pages.remove(url);
    }
}

impl PageSource for FixtureSite {
    fn fetch_table(&self, url: &str) -> Result<RawTable> {
        self.fetches.set(self.fetches.get() + 1);
        let doc = self
            .pages
            .get(url)
            .ok_or_else(|| Error::fetch(url, "HTTP 404 Not Found"))?;
        html::first_table(doc).ok_or_else(|| Error::fetch(url, "page has no <table>"))
    }
}

pub fn options() -> ScrapeOptions {
    ScrapeOptions {
        years: vec![2021],
        lane_pages: vec![1, 2],
        ..ScrapeOptions::default()
    }
}

fn td_row(cells: &[&str]) -> String {
    let tds: String = cells.iter().map(|c| format!("<td>{c}</td>")).collect();
    format!("<tr>{tds}</tr>")
}

pub fn score_page(rows: &[[&str; 6]]) -> String {
    let body: String = rows.iter().map(|r| td_row(r)).collect();
    format!(
        r#"<html><body>
        <table class="bowler-scores">
          <thead><tr><th>Wk</th><th>Date</th><th>Gm 1</th><th>Gm 2</th><th>Gm 3</th><th>SS</th></tr></thead>
          <tbody>{body}</tbody>
          <tfoot><tr><td colspan="2">Totals</td><td>530</td><td>560</td><td>590</td><td>1680</td></tr></tfoot>
        </table>
        <table><tr><td>sidebar</td></tr></table>
        </body></html>"#
    )
}

pub fn lane_page(rows: &[(&str, &str, &str)]) -> String {
    let body: String = rows
        .iter()
        .map(|(wk, date, lane)| td_row(&[wk, date, "Team 4", "5", "2", "2400", "2700", lane]))
        .collect();
    format!(
        r#"<table>
          <tr><th>Wk</th><th>Date</th><th>Opponent</th><th>Won</th><th>Lost</th><th>Scratch</th><th>HDCP</th><th>Lanes</th></tr>
          {body}
          <tr><td colspan="8">Page 1 2</td></tr>
        </table>"#
    )
}

/// One season: 4 weeks, week 3 a bye (total 0), lanes split over two pages
/// with one overlapping night.
pub fn league() -> FixtureSite {
    let o = options();
    FixtureSite::default()
        .with(
            o.score_url(2021),
            score_page(&[
                ["1", "9/8/2021", "180", "190", "200", "570"],
                ["2", "9/15/2021", "150", "160", "170", "480"],
                ["3", "9/22/2021", "0", "0", "0", "0"],
                ["4", "9/29/2021", "200", "210", "220", "630"],
            ]),
        )
        .with(
            o.lane_url(2021, 1),
            lane_page(&[("1", "9/8/2021", "9"), ("2", "9/15/2021", "10")]),
        )
        .with(
            o.lane_url(2021, 2),
            lane_page(&[("2", "9/15/2021", "10"), ("3", "9/22/2021", "3"), ("4", "9/29/2021", "12")]),
        )
}
