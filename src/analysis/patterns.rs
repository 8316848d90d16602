use std::collections::{BTreeMap, HashMap, HashSet};

use chrono::{Datelike, Timelike};
use serde::Serialize;

use crate::{types::Play, utils};

/// Overall summary of a collection of plays.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ListeningPatterns {
    pub total_tracks: usize,
    /// Distinct track names.
    pub unique_tracks: usize,
    pub unique_artists: usize,
    pub listening_hours: f64,
    /// Most played artists with their play counts, most played first.
    pub top_artists: Vec<(String, usize)>,
    /// Play count per hour of day, only for hours with plays.
    pub peak_hours: BTreeMap<u32, usize>,
}

/// Counts occurrences of each label.
///
/// Sorted by count descending; equal counts are ordered by label so the
/// output is stable between runs.
///
/// # Arguments
///
/// * `values` - Labels to count, e.g. artist or track names
///
/// # Returns
///
/// `(label, count)` pairs, one per distinct label.
///
/// # Example
///
/// ```
/// let counts = value_counts(["b", "a", "b"]);
/// assert_eq!(counts, vec![("b".to_string(), 2), ("a".to_string(), 1)]);
/// ```
pub fn value_counts<'a, I>(values: I) -> Vec<(String, usize)>
where
    I: IntoIterator<Item = &'a str>,
{
    let mut counts: HashMap<String, usize> = HashMap::new();
    for value in values {
        *counts.entry(value.to_string()).or_insert(0) += 1;
    }
    sorted_counts(counts)
}

pub(crate) fn sorted_counts(counts: HashMap<String, usize>) -> Vec<(String, usize)> {
    let mut counts: Vec<(String, usize)> = counts.into_iter().collect();
    counts.sort_by(|a, b| b.1.cmp(&a.1).then_with(|| a.0.cmp(&b.0)));
    counts
}

/// Summarizes a collection of plays.
///
/// Counts plays, distinct tracks and artists, adds up listening time and
/// finds the most played artists and the busiest hours of the day.
///
/// # Arguments
///
/// * `plays` - Normalized plays, in any order
/// * `top_n` - How many artists `top_artists` keeps
///
/// # Returns
///
/// A [`ListeningPatterns`] summary. `unique_artists` counts every artist,
/// not just the ones kept in `top_artists`.
///
/// # Example
///
/// ```
/// let patterns = analyze_listening_patterns(&plays, 10);
/// println!("{} plays, {:.2} hours", patterns.total_tracks, patterns.listening_hours);
/// for (artist, count) in &patterns.top_artists {
///     println!("- {artist}: {count} plays");
/// }
/// ```
pub fn analyze_listening_patterns(plays: &[Play], top_n: usize) -> ListeningPatterns {
    let mut top_artists = value_counts(plays.iter().map(|p| p.artist_name.as_str()));
    let unique_artists = top_artists.len();
    top_artists.truncate(top_n);

    let mut peak_hours = BTreeMap::new();
    for play in plays {
        *peak_hours.entry(play.local_time.hour()).or_insert(0) += 1;
    }

    ListeningPatterns {
        total_tracks: plays.len(),
        unique_tracks: count_distinct(plays.iter().map(|p| p.track_name.as_str())),
        unique_artists,
        listening_hours: total_hours(plays),
        top_artists,
        peak_hours,
    }
}

/// Play counts for every hour of the day, midnight first.
pub fn hourly_distribution(plays: &[Play]) -> [usize; 24] {
    let mut hours = [0usize; 24];
    for play in plays {
        hours[play.local_time.hour() as usize] += 1;
    }
    hours
}

/// Keeps only the plays of one (local) calendar year.
pub fn filter_year(plays: &[Play], year: i32) -> Vec<Play> {
    plays
        .iter()
        .filter(|p| p.local_time.year() == year)
        .cloned()
        .collect()
}

pub(crate) fn count_distinct<'a, I>(values: I) -> usize
where
    I: IntoIterator<Item = &'a str>,
{
    values.into_iter().collect::<HashSet<_>>().len()
}

pub(crate) fn total_hours<'a, I>(plays: I) -> f64
where
    I: IntoIterator<Item = &'a Play>,
{
    utils::ms_to_hours(plays.into_iter().map(|p| p.ms_played).sum())
}
