use std::collections::BTreeMap;

use chrono::Datelike;
use serde::Serialize;

use super::patterns::{count_distinct, total_hours, value_counts};
use crate::types::Play;

/// Listening statistics of one calendar year.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct YearStats {
    pub total_tracks: usize,
    pub unique_tracks: usize,
    pub unique_artists: usize,
    pub listening_hours: f64,
    pub top_artists: Vec<(String, usize)>,
}

/// Groups plays by local calendar year, oldest year first.
///
/// # Arguments
///
/// * `plays` - Normalized plays
/// * `top_n` - How many artists each year's `top_artists` keeps
///
/// # Returns
///
/// Per-year statistics keyed by year. Years without plays are absent.
///
/// # Example
///
/// ```
/// for (year, stats) in analyze_by_year(&plays, 5) {
///     println!("{year}: {} tracks, {:.2} hours", stats.total_tracks, stats.listening_hours);
/// }
/// ```
pub fn analyze_by_year(plays: &[Play], top_n: usize) -> BTreeMap<i32, YearStats> {
    let mut by_year: BTreeMap<i32, Vec<&Play>> = BTreeMap::new();
    for play in plays {
        by_year.entry(play.local_time.year()).or_default().push(play);
    }

    by_year
        .into_iter()
        .map(|(year, plays)| {
            let mut top_artists = value_counts(plays.iter().map(|p| p.artist_name.as_str()));
            let unique_artists = top_artists.len();
            top_artists.truncate(top_n);

            let stats = YearStats {
                total_tracks: plays.len(),
                unique_tracks: count_distinct(plays.iter().map(|p| p.track_name.as_str())),
                unique_artists,
                listening_hours: total_hours(plays.iter().copied()),
                top_artists,
            };
            (year, stats)
        })
        .collect()
}
