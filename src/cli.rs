// src/cli.rs
use std::path::PathBuf;

use chrono::{Local, NaiveDate};
use clap::{Args, Parser, Subcommand, ValueEnum};

use crate::config::consts::STORE_DIR;
use crate::config::options::{AppOptions, ExportFormat, ExportLayout};
use crate::error::{Error, Result};
use crate::model::EnrichedRow;
use crate::progress::Progress;
use crate::source::HttpSource;
use crate::stats::{Filter, Selection, Summary, SummaryDelta};
use crate::store::{Freshness, Loaded, SnapshotCache};

#[derive(Debug, Parser)]
#[command(name = "bowl_scrape", version, about = "Bowling league history: scrape, summarize, export")]
pub struct Cli {
    /// TOML file with a [scrape] section (default: ./bowl_scrape.toml if present)
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    /// Snapshot directory
    #[arg(long, global = true, default_value = STORE_DIR)]
    pub store: PathBuf,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Re-scrape every configured season if the snapshot is stale
    Refresh {
        /// Scrape even if today's snapshot exists
        #[arg(long)]
        force: bool,
    },
    /// Last save time and staleness
    Status,
    /// Overall and filtered metrics
    Summary(FilterArgs),
    /// Write the (filtered) table to CSV/TSV
    Export(ExportArgs),
}

#[derive(Debug, Default, Args)]
pub struct FilterArgs {
    /// First date to include (YYYY-MM-DD)
    #[arg(long)]
    pub from: Option<NaiveDate>,
    /// Last date to include (YYYY-MM-DD)
    #[arg(long)]
    pub to: Option<NaiveDate>,
    /// Season label, e.g. 2022-2023 (repeatable)
    #[arg(long = "season")]
    pub seasons: Vec<String>,
    /// Lane pairs, e.g. 7/8,11/12
    #[arg(long, value_delimiter = ',')]
    pub lanes: Vec<String>,
}

#[derive(Debug, Args)]
pub struct ExportArgs {
    #[command(flatten)]
    pub filter: FilterArgs,
    /// Output file; extension follows --format
    #[arg(short, long)]
    pub out: Option<PathBuf>,
    #[arg(long, value_enum, default_value_t = FormatArg::Csv)]
    pub format: FormatArg,
    /// One row per week instead of one row per game
    #[arg(long)]
    pub wide: bool,
    /// Include a header row
    #[arg(long)]
    pub headers: bool,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
pub enum FormatArg {
    Csv,
    Tsv,
}

impl From<FormatArg> for ExportFormat {
    fn from(f: FormatArg) -> Self {
        match f {
            FormatArg::Csv => ExportFormat::Csv,
            FormatArg::Tsv => ExportFormat::Tsv,
        }
    }
}

impl FilterArgs {
    /// Unset bounds fall back to the table's full span.
    pub fn to_filter(&self, rows: &[EnrichedRow]) -> Filter {
        let mut f = Filter::covering(rows);
        if let Some(d) = self.from {
            f.start = d;
        }
        if let Some(d) = self.to {
            f.end = d;
        }
        if !self.seasons.is_empty() {
            f.seasons = Selection::Only(self.seasons.iter().cloned().collect());
        }
        if !self.lanes.is_empty() {
            f.lane_pairs = Selection::Only(self.lanes.iter().map(|l| l.trim().to_string()).collect());
        }
        f
    }
}

/// Page counter on stderr.
struct ConsoleProgress {
    total: usize,
    done: usize,
}

impl Progress for ConsoleProgress {
    fn begin(&mut self, total: usize) {
        self.total = total;
        self.done = 0;
    }
    fn log(&mut self, msg: &str) {
        eprintln!("{msg}");
    }
    fn item_done(&mut self, label: &str) {
        self.done += 1;
        eprintln!("[{}/{}] {}", self.done, self.total, label);
    }
}

/// Exit status for a failed command: 2 when the scrape itself failed,
/// 1 for local trouble (disk, config, snapshot encoding).
pub fn exit_code(err: &Error) -> i32 {
    if err.is_run_failure() { 2 } else { 1 }
}

pub fn run() -> Result<()> {
    let cli = Cli::parse();
    crate::log::init(&cli.store);

    let mut opts = AppOptions::load(cli.config.as_deref())?;
    let cache = SnapshotCache::open(&cli.store);
    let mut progress = ConsoleProgress { total: 0, done: 0 };

    match cli.command {
        Command::Status => {
            match cache.last_saved() {
                Some(t) => println!("Last save: {}", t.format("%Y-%m-%d %H:%M:%S")),
                None => println!("Last save: never"),
            }
            println!("Stale:     {}", if cache.is_stale(Local::now()) { "yes" } else { "no" });
            if let Some(snap) = cache.load()? {
                println!("Rows:      {}", snap.rows.len());
            }
        }

        Command::Refresh { force } => {
            if !force && !cache.is_stale(Local::now()) {
                println!("Snapshot is current; use --force to scrape anyway.");
                return Ok(());
            }
            let source = HttpSource::new()?;
            let snap = cache.refresh(&source, &opts.scrape, Some(&mut progress), Local::now)?;
            println!(
                "Saved {} rows at {}",
                snap.rows.len(),
                snap.saved_at.format("%Y-%m-%d %H:%M:%S")
            );
        }

        Command::Summary(args) => {
            let rows = load_rows(&cache, &opts, &mut progress)?;
            let overall = Summary::of(&rows);
            let filtered = Summary::of(&args.to_filter(&rows).apply(&rows));
            print_summary("Overall", &overall, None);
            print_summary("Filtered", &filtered, Some(&filtered.delta(&overall)));
        }

        Command::Export(args) => {
            let rows = load_rows(&cache, &opts, &mut progress)?;
            let picked = args.filter.to_filter(&rows).apply(&rows);

            let export = &mut opts.export;
            export.format = args.format.into();
            export.layout = if args.wide { ExportLayout::Wide } else { ExportLayout::Tidy };
            export.include_headers = args.headers;
            if let Some(out) = &args.out {
                export.set_path(&out.to_string_lossy());
            }

            let path = crate::file::write_export(export, &picked)?;
            println!("Wrote {} rows to {}", picked.len(), path.display());
        }
    }

    Ok(())
}

fn load_rows(
    cache: &SnapshotCache,
    opts: &AppOptions,
    progress: &mut ConsoleProgress,
) -> Result<Vec<EnrichedRow>> {
    let source = HttpSource::new()?;
    let Loaded { snapshot, freshness } =
        cache.load_or_refresh(&source, &opts.scrape, Some(progress), Local::now)?;
    if let Freshness::Stale(e) = &freshness {
        eprintln!(
            "Warning: refresh failed ({e}); using snapshot from {}",
            snapshot.saved_at.format("%Y-%m-%d %H:%M")
        );
    }
    Ok(snapshot.rows)
}

fn print_summary(title: &str, s: &Summary, delta: Option<&SummaryDelta>) {
    let opt = |v: Option<u32>| v.map_or_else(|| s!("-"), |v| v.to_string());
    let d = |v: Option<i64>| match (delta, v) {
        (Some(_), Some(v)) => format!(" ({v:+})"),
        _ => String::new(),
    };
    println!("{title}");
    println!(
        "  games        {}{}",
        s.games,
        delta.map(|x| format!(" ({:+})", x.games)).unwrap_or_default()
    );
    println!("  pins         {}", s.pins);
    println!(
        "  average      {:.2}{}",
        s.average,
        delta.map(|x| format!(" ({:+.2})", x.average)).unwrap_or_default()
    );
    println!("  high game    {}{}", opt(s.high_game), d(delta.and_then(|x| x.high_game)));
    println!("  low game     {}{}", opt(s.low_game), d(delta.and_then(|x| x.low_game)));
    println!("  high series  {}{}", opt(s.high_series), d(delta.and_then(|x| x.high_series)));
    println!("  low series   {}{}", opt(s.low_series), d(delta.and_then(|x| x.low_series)));
}
