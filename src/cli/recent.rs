use std::path::PathBuf;

use serde::Serialize;

use super::{graphs, settings};
use crate::{
    analysis::{self, ListeningPatterns},
    error, info,
    management::load_recently_played,
    spotify, warning,
};

#[derive(Serialize)]
struct RecentReport {
    patterns: ListeningPatterns,
    genres: Option<Vec<(String, usize)>>,
}

/// Analyzes a saved recently-played response.
///
/// # Example Usage
///
/// ```bash
/// spotstats recent --file recently-played.json
/// spotstats recent --file recently-played.json --genres genres.json --json
/// ```
pub async fn recent(
    file: PathBuf,
    top: Option<usize>,
    utc_offset: Option<String>,
    genres: Option<PathBuf>,
    json: bool,
) {
    let settings = settings::resolve(top, None, utc_offset, None);

    let response = match load_recently_played(&file).await {
        Ok(response) => response,
        Err(e) => error!("Failed to read {}: {}", file.display(), e),
    };

    let plays = spotify::recent::process_recently_played(&response, settings.zone);
    let skipped = response.items.len() - plays.len();
    if skipped > 0 && !json {
        warning!("Skipped {} items without artist or valid timestamp", skipped);
    }
    if plays.is_empty() && !json {
        warning!("No valid tracks found in the data");
        return;
    }

    let genre_source = settings::load_genres(genres, json).await;
    let report = RecentReport {
        patterns: analysis::analyze_listening_patterns(&plays, settings.top_n),
        genres: genre_source
            .as_ref()
            .map(|source| analysis::analyze_genres(&plays, source)),
    };

    if json {
        if let Err(e) = graphs::print_json(&report) {
            error!("Cannot serialize report: {}", e);
        }
        return;
    }

    graphs::print_heading("Listening History Analysis");
    if let Some(first) = plays.first() {
        info!(
            "Latest play: {} UTC ({} in zone {})",
            first.played_at.format("%Y-%m-%d %H:%M:%S"),
            first.local_time.format("%Y-%m-%d %H:%M:%S"),
            settings.zone
        );
    }
    graphs::print_summary(&report.patterns);

    graphs::print_heading("Top Artists");
    graphs::print_top_artists(&report.patterns.top_artists);

    if let Some(genres) = &report.genres {
        graphs::print_heading("Top Genres");
        graphs::print_genres(genres, 10);
    }

    let entries: Vec<(String, f64)> = report
        .patterns
        .peak_hours
        .iter()
        .map(|(hour, plays)| (format!("{:02}:00", hour), *plays as f64))
        .collect();
    graphs::print_bar_chart("Listening by Hour (plays)", &entries, settings.scale);
}
