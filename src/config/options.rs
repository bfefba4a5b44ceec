// src/config/options.rs
use std::ffi::OsString;
use std::fs;
use std::path::{Path, PathBuf};

use serde::Deserialize;

use super::consts::*;
use crate::error::{Error, Result};
use crate::season::SeasonTable;

/// Everything the front ends can tune. Only `[scrape]` is read from the
/// config file; export settings live in the UI / CLI flags.
#[derive(Clone, Debug, Default, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct AppOptions {
    pub scrape: ScrapeOptions,
    #[serde(skip)]
    pub export: ExportOptions,
}

impl AppOptions {
    /// Explicit path must exist; otherwise `bowl_scrape.toml` in the working
    /// directory is used when present, else built-in defaults.
    pub fn load(path: Option<&Path>) -> Result<Self> {
        let path = match path {
            Some(p) => p.to_path_buf(),
            None => {
                let p = PathBuf::from(CONFIG_FILE);
                if !p.exists() {
                    return Ok(Self::default());
                }
                p
            }
        };
        let text = fs::read_to_string(&path)
            .map_err(|e| Error::Config(format!("{}: {e}", path.display())))?;
        let opts = Self::from_toml(&text)?;
        logf!("Config: Loaded {}", path.display());
        Ok(opts)
    }

    pub fn from_toml(text: &str) -> Result<Self> {
        let opts: Self = toml::from_str(text)?;
        opts.scrape.validate()?;
        Ok(opts)
    }
}

/// Where the league pages live and which seasons/pages to pull.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct ScrapeOptions {
    pub host: String,
    pub center: String,
    pub league: String,
    pub league_id: u32,
    pub bowler: String,
    pub bowler_id: u32,
    pub team: String,
    pub team_number: u32,
    pub years: Vec<i32>,
    pub lane_pages: Vec<u32>,
}

impl Default for ScrapeOptions {
    fn default() -> Self {
        Self {
            host: s!(HOST),
            center: s!(CENTER),
            league: s!(LEAGUE),
            league_id: LEAGUE_ID,
            bowler: s!(BOWLER),
            bowler_id: BOWLER_ID,
            team: s!(TEAM),
            team_number: TEAM_NUMBER,
            years: LEAGUE_YEARS.to_vec(),
            lane_pages: LANE_PAGES.to_vec(),
        }
    }
}

impl ScrapeOptions {
    fn league_root(&self) -> String {
        format!(
            "{}/bowling-centers/{}/bowling-leagues/{}",
            self.host.trim_end_matches('/'),
            self.center,
            self.league
        )
    }

    /// Bowler-info page for one league year.
    pub fn score_url(&self, year: i32) -> String {
        format!(
            "{}/bowler-info/{}/{}/fall/{}/{}",
            self.league_root(),
            self.bowler,
            year,
            self.league_id,
            self.bowler_id
        )
    }

    /// Team-history page `page` for one league year.
    pub fn lane_url(&self, year: i32, page: u32) -> String {
        format!(
            "{}/team/history/{}/{}/Fall/{}/{}/{}",
            self.league_root(),
            self.team,
            year,
            self.league_id,
            self.team_number,
            page
        )
    }

    /// (year, page) pairs in fetch order.
    pub fn lane_targets(&self) -> Vec<(i32, u32)> {
        self.years
            .iter()
            .flat_map(|&y| self.lane_pages.iter().map(move |&p| (y, p)))
            .collect()
    }

    pub fn seasons(&self) -> SeasonTable {
        SeasonTable::league_years(&self.years)
    }

    pub fn validate(&self) -> Result<()> {
        if self.years.is_empty() {
            return Err(Error::Config(s!("scrape.years is empty")));
        }
        if self.lane_pages.is_empty() {
            return Err(Error::Config(s!("scrape.lane_pages is empty")));
        }
        if !self.host.starts_with("http://") && !self.host.starts_with("https://") {
            return Err(Error::Config(format!("scrape.host must be an http(s) URL: {}", self.host)));
        }
        Ok(())
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ExportFormat {
    Csv,
    Tsv,
}

impl ExportFormat {
    pub fn ext(&self) -> &'static str {
        match self { ExportFormat::Csv => "csv", ExportFormat::Tsv => "tsv" }
    }
    pub fn delim(&self) -> u8 {
        match self { ExportFormat::Csv => b',', ExportFormat::Tsv => b'\t' }
    }
}

/// Tidy = one row per game; Wide = one row per week with game1..game3.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ExportLayout {
    Tidy,
    Wide,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ExportOptions {
    pub format: ExportFormat,
    pub layout: ExportLayout,
    pub include_headers: bool,
    out_path: OutputPath,
}

impl Default for ExportOptions {
    fn default() -> Self {
        Self {
            format: ExportFormat::Csv,
            layout: ExportLayout::Tidy,
            include_headers: true,
            out_path: OutputPath::default(),
        }
    }
}

impl ExportOptions {
    /// `<dir>/<stem>.<ext>`, extension follows the format.
    pub fn out_path(&self) -> PathBuf {
        let stem = self.out_path.file_stem.to_string_lossy();
        self.out_path.dir.join(join!(stem, ".", self.format.ext()))
    }

    /// Parse free text into dir + stem. A pasted extension is ignored.
    pub fn set_path(&mut self, text: &str) {
        let p = Path::new(text.trim());
        if let Some(parent) = p.parent() {
            self.out_path.dir = parent.to_path_buf();
        }
        if let Some(stem) = p.file_stem() {
            self.out_path.file_stem = stem.to_os_string();
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
struct OutputPath {
    dir: PathBuf,
    file_stem: OsString,
}

impl Default for OutputPath {
    fn default() -> Self {
        Self {
            dir: PathBuf::from(DEFAULT_OUT_DIR),
            file_stem: OsString::from(DEFAULT_FILE),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn urls_follow_league_layout() {
        let o = ScrapeOptions::default();
        assert_eq!(
            o.score_url(2022),
            "https://www.leaguesecretary.com/bowling-centers/harbor-lanes-saint-clair-shores-michigan\
             /bowling-leagues/lochmoor-men-2324/bowler-info/scott-thomas/2022/fall/117119/60"
        );
        assert!(o.lane_url(2021, 2).ends_with("/team/history/12-team-thomas/2021/Fall/117119/12/2"));
        assert_eq!(
            o.lane_targets(),
            vec![(2021, 1), (2021, 2), (2022, 1), (2022, 2), (2023, 1), (2023, 2)]
        );
    }

    #[test]
    fn toml_overrides_only_what_it_names() {
        let opts = AppOptions::from_toml("[scrape]\nyears = [2022]\nbowler_id = 7\n").unwrap();
        assert_eq!(opts.scrape.years, vec![2022]);
        assert_eq!(opts.scrape.bowler_id, 7);
        assert_eq!(opts.scrape.league, LEAGUE);
        assert_eq!(opts.export, ExportOptions::default());
    }

    #[test]
    fn toml_rejects_empty_years() {
        let err = AppOptions::from_toml("[scrape]\nyears = []\n").unwrap_err();
        assert!(matches!(err, Error::Config(_)));
    }

    #[test]
    fn export_path_ignores_pasted_extension() {
        let mut e = ExportOptions::default();
        e.set_path("reports/league.txt");
        e.format = ExportFormat::Tsv;
        assert_eq!(e.out_path(), PathBuf::from("reports").join("league.tsv"));
    }
}
