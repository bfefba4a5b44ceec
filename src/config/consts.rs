// src/config/consts.rs

// Net config
pub const HOST: &str = "https://www.leaguesecretary.com";
pub const REQUEST_TIMEOUT_SECS: u64 = 30;
pub const USER_AGENT: &str = concat!("bowl_scrape/", env!("CARGO_PKG_VERSION"));

// League coordinates (one bowler, one team)
pub const CENTER: &str = "harbor-lanes-saint-clair-shores-michigan";
pub const LEAGUE: &str = "lochmoor-men-2324";
pub const LEAGUE_ID: u32 = 117119;
pub const BOWLER: &str = "scott-thomas";
pub const BOWLER_ID: u32 = 60;
pub const TEAM: &str = "12-team-thomas";
pub const TEAM_NUMBER: u32 = 12;

// Seasons: league year Y runs Sep 1 Y .. Jun 1 Y+1 (both exclusive)
pub const LEAGUE_YEARS: &[i32] = &[2021, 2022, 2023];
pub const SEASON_START: (u32, u32) = (9, 1);
pub const SEASON_END: (u32, u32) = (6, 1);

// Team-history pagination per season
pub const LANE_PAGES: &[u32] = &[1, 2];

// Local cache
pub const STORE_DIR: &str = ".store";
pub const SNAPSHOT_FILE: &str = "bowler_data.json";
pub const STAMP_FILE: &str = "lastsave.json";
pub const LOG_FILE: &str = "debug.log";
pub const CONFIG_FILE: &str = "bowl_scrape.toml";

// Export
pub const DEFAULT_OUT_DIR: &str = "out";
pub const DEFAULT_FILE: &str = "bowler_data";

// Dashboard
pub const HISTOGRAM_BINS: usize = 10;
