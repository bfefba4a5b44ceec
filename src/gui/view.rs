// src/gui/view.rs
//
// Everything the dashboard draws, computed once per filter change instead of
// every frame. Components only read from here.

use crate::model::EnrichedRow;
use crate::stats::{self, BestWorst, Bin, Extremes, Filter, GroupAverage, Summary, SummaryDelta, WideRow};

#[derive(Clone, Debug, Default)]
pub struct DashboardView {
    // filter widget choices (from the unfiltered table)
    pub all_seasons: Vec<String>,
    pub all_lane_pairs: Vec<String>,

    // metric rows
    pub overall: Summary,
    pub filtered: Summary,
    pub delta: SummaryDelta,

    // rows after the filter, tidy + wide
    pub rows: Vec<EnrichedRow>,
    pub wide: Vec<WideRow>,

    // graphs
    pub by_game: Vec<GroupAverage>,
    pub by_season: Vec<GroupAverage>,
    pub by_lane_pair: Vec<GroupAverage>,
    pub score_bins: Vec<Bin>,
    pub series_bins: Vec<Bin>,

    // analysis: extremes follow the filter, best/worst use the whole table
    pub extremes: Extremes,
    pub seasons: BestWorst,
    pub lane_pairs: BestWorst,
    pub months: BestWorst,
}

impl DashboardView {
    pub fn build(all: &[EnrichedRow], filter: &Filter) -> Self {
        let rows = filter.apply(all);
        let overall = Summary::of(all);
        let filtered = Summary::of(&rows);
        let delta = filtered.delta(&overall);

        let by_season = stats::average_by_season(&rows);
        let by_lane_pair = stats::average_by_lane_pair(&rows);

        Self {
            all_seasons: stats::distinct_seasons(all),
            all_lane_pairs: stats::distinct_lane_pairs(all),
            overall,
            filtered,
            delta,
            wide: stats::wide_view(&rows),
            by_game: stats::average_by_game(&rows),
            score_bins: stats::score_histogram(&rows),
            series_bins: stats::series_histogram(&rows),
            extremes: Extremes::of(&rows),
            // best/worst ignore the filter
            seasons: stats::best_and_worst(&stats::average_by_season(all)),
            lane_pairs: stats::best_and_worst(&stats::average_by_lane_pair(all)),
            months: stats::best_and_worst(&stats::average_by_month(all)),
            by_season,
            by_lane_pair,
            rows,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }
}
