// src/model.rs
//! Typed rows for each pipeline stage.
//!
//! Raw* types hold page text exactly as scraped; ScoreRow / EnrichedRow are
//! fully coerced and are what the snapshot stores.

use std::fmt;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::core::coerce::parse_whole;

/// One row of a bowler-info score table.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RawScoreRow {
    pub week: String,
    pub date: String,
    pub game1: String,
    pub game2: String,
    pub game3: String,
    pub total: String,
}

impl RawScoreRow {
    /// Bye or unplayed week: the series total reads as zero.
    pub fn is_unplayed(&self) -> bool {
        parse_whole(&self.total) == Some(0)
    }

    pub fn games(&self) -> [(Game, &str); 3] {
        [
            (Game::Game1, self.game1.as_str()),
            (Game::Game2, self.game2.as_str()),
            (Game::Game3, self.game3.as_str()),
        ]
    }
}

/// One season's score rows plus where they came from (for error messages).
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct RawScorePage {
    pub source: String,
    pub rows: Vec<RawScoreRow>,
}

/// One row of a team-history table. `week` may be a "Page N" marker.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RawLaneRow {
    pub week: String,
    pub date: String,
    pub lanes: String,
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct RawLanePage {
    pub source: String,
    pub rows: Vec<RawLaneRow>,
}

/// Game slot within a week's series.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Game {
    Game1,
    Game2,
    Game3,
}

impl Game {
    pub const ALL: [Game; 3] = [Game::Game1, Game::Game2, Game::Game3];

    pub fn label(&self) -> &'static str {
        match self {
            Game::Game1 => "game1",
            Game::Game2 => "game2",
            Game::Game3 => "game3",
        }
    }

    pub fn index(&self) -> usize {
        match self {
            Game::Game1 => 0,
            Game::Game2 => 1,
            Game::Game3 => 2,
        }
    }
}

impl fmt::Display for Game {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// One game bowled.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ScoreRow {
    pub week: u32,
    pub date: NaiveDate,
    pub game: Game,
    pub score: u32,
    pub total: u32,
    pub season: Option<String>,
}

/// Lane number the team bowled on for one league night.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct LaneAssignment {
    pub date: NaiveDate,
    pub lanes: u32,
}

/// ScoreRow joined with its lane assignment. This is the snapshot row.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct EnrichedRow {
    pub week: u32,
    pub date: NaiveDate,
    pub game: Game,
    pub score: u32,
    pub total: u32,
    pub season: Option<String>,
    pub lanes: u32,
    pub lane_pair: String,
}

impl EnrichedRow {
    pub fn new(row: ScoreRow, lanes: u32, lane_pair: String) -> Self {
        Self {
            week: row.week,
            date: row.date,
            game: row.game,
            score: row.score,
            total: row.total,
            season: row.season,
            lanes,
            lane_pair,
        }
    }

    pub fn season_label(&self) -> Option<&str> {
        self.season.as_deref()
    }
}
