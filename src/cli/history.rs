use std::{collections::BTreeMap, path::PathBuf, time::Duration};

use indicatif::{ProgressBar, ProgressStyle};
use serde::Serialize;

use super::{graphs, settings};
use crate::{
    analysis::{self, ListeningPatterns, MonthStats, TimePeriod, YearStats},
    config, error, info,
    management::HistoryManager,
    spotify::history::{IngestOptions, IngestReport},
    spotify, success, warning,
};

/// Number of most played artists whose genres feed the yearly trends.
const GENRE_TREND_ARTISTS: usize = 100;

/// Options of the `history` command as given on the command line.
#[derive(Debug, Clone, Default)]
pub struct HistoryRequest {
    pub dir: Option<PathBuf>,
    pub year: Option<i32>,
    pub top: Option<usize>,
    pub min_ms: Option<u64>,
    pub utc_offset: Option<String>,
    pub scale: Option<usize>,
    pub genres: Option<PathBuf>,
    pub json: bool,
}

#[derive(Serialize)]
struct HistoryReport<'a> {
    ingest: &'a IngestReport,
    year: Option<i32>,
    patterns: ListeningPatterns,
    yearly: BTreeMap<i32, YearStats>,
    time_patterns: Vec<(TimePeriod, usize)>,
    hourly: [usize; 24],
    hourly_by_year: BTreeMap<i32, [usize; 24]>,
    monthly: BTreeMap<u32, MonthStats>,
    genres: Option<Vec<(String, usize)>>,
    genre_trends: Option<BTreeMap<i32, Vec<(String, usize)>>>,
}

/// Analyzes every streaming history export in a directory.
///
/// Discovers the `*.json` files, loads and normalizes all records, and prints
/// the overall summary, top artists, a year-by-year breakdown, time-of-day
/// patterns, ASCII graphs and, when a genre lookup is available, genre counts
/// and yearly genre trends. With `json` set, the same report is printed as a
/// single JSON document instead.
///
/// # Example Usage
///
/// ```bash
/// spotstats history --dir ~/Downloads/MyData
/// spotstats history --year 2023 --top 20 --utc-offset -05:00
/// spotstats history --genres ~/.local/share/spotstats/genres.json --json
/// ```
pub async fn history(request: HistoryRequest) {
    let settings = settings::resolve(
        request.top,
        request.min_ms,
        request.utc_offset.clone(),
        request.scale,
    );
    let quiet = request.json;

    let dir = request.dir.clone().unwrap_or_else(config::history_dir);
    if !quiet {
        info!("Reading files from: {}", dir.display());
    }

    let paths = match HistoryManager::discover(&dir).await {
        Ok(paths) => paths,
        Err(e) => error!("Cannot read history directory {}: {}", dir.display(), e),
    };
    if paths.is_empty() {
        error!("No JSON files found in {}", dir.display());
    }

    let pb = ProgressBar::new_spinner();
    pb.set_message(format!("Loading {} history files...", paths.len()));
    pb.enable_steady_tick(Duration::from_millis(100));
    if let Ok(style) = ProgressStyle::with_template("{spinner:.blue} {msg}") {
        pb.set_style(style.tick_chars("⠋⠙⠹⠸⠼⠴⠦⠧⠇⠏"));
    }

    let manager = match HistoryManager::load(&paths).await {
        Ok(manager) => manager,
        Err(e) => {
            pb.finish_and_clear();
            error!("Failed to load history: {}", e);
        }
    };
    pb.finish_and_clear();

    if !quiet {
        for file in manager.files() {
            let name = file
                .path
                .file_name()
                .map(|n| n.to_string_lossy().to_string())
                .unwrap_or_else(|| file.path.display().to_string());
            info!("Added {} entries from {}", file.entries, name);
        }
        info!("Total entries collected: {}", manager.count_records());
    }

    let options = IngestOptions {
        min_play_ms: settings.min_play_ms,
        zone: settings.zone,
    };
    let mut normalized = spotify::history::normalize_history(manager.into_records(), &options);

    if !quiet {
        print_ingest_report(&normalized.report, settings.min_play_ms);
    }

    let plays = match request.year {
        Some(year) => analysis::filter_year(&normalized.plays, year),
        None => std::mem::take(&mut normalized.plays),
    };

    // --json always prints a report, even for no plays
    if plays.is_empty() && !quiet {
        warning!("No valid tracks found in the data");
        return;
    }

    let genre_source = settings::load_genres(request.genres.clone(), quiet).await;

    let report = HistoryReport {
        ingest: &normalized.report,
        year: request.year,
        patterns: analysis::analyze_listening_patterns(&plays, settings.top_n),
        yearly: analysis::analyze_by_year(&plays, settings.top_n),
        time_patterns: analysis::analyze_time_patterns(&plays),
        hourly: analysis::hourly_distribution(&plays),
        hourly_by_year: analysis::analyze_hourly_by_year(&plays),
        monthly: analysis::analyze_monthly(&plays),
        genres: genre_source
            .as_ref()
            .map(|source| analysis::analyze_genres(&plays, source)),
        genre_trends: genre_source
            .as_ref()
            .map(|source| analysis::analyze_genre_trends(&plays, source, GENRE_TREND_ARTISTS)),
    };

    if request.json {
        if let Err(e) = graphs::print_json(&report) {
            error!("Cannot serialize report: {}", e);
        }
        return;
    }

    print_report(&report, settings.scale);
}

fn print_ingest_report(report: &IngestReport, min_play_ms: u64) {
    success!(
        "Kept {} of {} entries as music plays.",
        report.kept,
        report.total
    );
    if report.dropped() == 0 {
        return;
    }

    info!(
        "Dropped {} podcast episodes, {} entries without track metadata, {} zero-length entries",
        report.podcasts, report.missing_metadata, report.zero_duration
    );
    info!(
        "Dropped {} plays under {} seconds",
        report.short_plays,
        min_play_ms as f64 / 1000.0
    );
    if report.malformed + report.bad_timestamp > 0 {
        warning!(
            "Skipped {} malformed entries and {} entries with unreadable timestamps",
            report.malformed,
            report.bad_timestamp
        );
    }
}

fn print_report(report: &HistoryReport<'_>, scale: usize) {
    match report.year {
        Some(year) => graphs::print_heading(&format!("Listening History Analysis {}", year)),
        None => graphs::print_heading("Complete Listening History Analysis"),
    }
    graphs::print_summary(&report.patterns);

    graphs::print_heading("Top Artists Overall");
    graphs::print_top_artists(&report.patterns.top_artists);

    graphs::print_heading("Year-by-Year Analysis");
    graphs::print_yearly(&report.yearly, 5);

    graphs::print_heading("Listening Patterns by Time of Day");
    graphs::print_time_patterns(&report.time_patterns);

    graphs::print_top_artist_graph(&report.patterns.top_artists, scale);
    graphs::print_hourly_graph(&report.hourly, scale);
    graphs::print_hourly_heatmap(&report.hourly_by_year);
    graphs::print_yearly_graph(&report.yearly, scale);
    graphs::print_monthly_graph(&report.monthly, scale);

    if let Some(genres) = &report.genres {
        graphs::print_heading("Top Genres");
        graphs::print_genres(genres, 10);
    }
    if let Some(trends) = &report.genre_trends {
        graphs::print_genre_trends(trends);
    }
}
