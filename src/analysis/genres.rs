use std::collections::{BTreeMap, HashMap, HashSet};

use chrono::Datelike;

use super::patterns::{sorted_counts, value_counts};
use crate::types::Play;

/// Anything that can tell which genres an artist belongs to.
pub trait GenreSource {
    /// Returns the genres of `artist`, or `None` for unknown artists.
    fn genres_for(&self, artist: &str) -> Option<&[String]>;

    /// Key under which two artist names count as the same artist.
    ///
    /// Must agree with how [`genres_for`](GenreSource::genres_for) matches
    /// names. The default ignores case and surrounding whitespace.
    fn artist_key(&self, artist: &str) -> String {
        artist.trim().to_lowercase()
    }
}

/// Counts genres over the distinct artists of `plays`.
///
/// Every artist contributes one to each of its genres, no matter how often it
/// was played. Artist names that differ only in case are one artist, as
/// decided by [`GenreSource::artist_key`]. Artists the source does not know
/// are ignored.
///
/// # Arguments
///
/// * `plays` - Normalized plays to count over
/// * `source` - Artist to genre lookup
///
/// # Returns
///
/// `(genre, artist count)` pairs sorted by count descending, then genre name.
///
/// # Example
///
/// ```
/// let genres = analyze_genres(&plays, &genre_manager);
/// for (genre, artists) in genres.iter().take(10) {
///     println!("{genre}: {artists}");
/// }
/// ```
pub fn analyze_genres<S: GenreSource + ?Sized>(plays: &[Play], source: &S) -> Vec<(String, usize)> {
    let mut seen = HashSet::new();
    let mut counts: HashMap<String, usize> = HashMap::new();

    for play in plays {
        if !seen.insert(source.artist_key(&play.artist_name)) {
            continue;
        }
        if let Some(genres) = source.genres_for(&play.artist_name) {
            for genre in genres {
                *counts.entry(genre.clone()).or_insert(0) += 1;
            }
        }
    }

    sorted_counts(counts)
}

/// Genre play counts per year for the `top_n` most played artists overall.
///
/// Each play of one of those artists adds one to every genre of the artist in
/// the year it was played.
pub fn analyze_genre_trends<S: GenreSource + ?Sized>(
    plays: &[Play],
    source: &S,
    top_n: usize,
) -> BTreeMap<i32, Vec<(String, usize)>> {
    let top_artists: HashSet<String> = value_counts(plays.iter().map(|p| p.artist_name.as_str()))
        .into_iter()
        .take(top_n)
        .map(|(artist, _)| artist)
        .collect();

    let mut by_year: BTreeMap<i32, HashMap<String, usize>> = BTreeMap::new();
    for play in plays.iter().filter(|p| top_artists.contains(&p.artist_name)) {
        let Some(genres) = source.genres_for(&play.artist_name) else {
            continue;
        };
        if genres.is_empty() {
            continue;
        }

        let year = by_year.entry(play.local_time.year()).or_default();
        for genre in genres {
            *year.entry(genre.clone()).or_insert(0) += 1;
        }
    }

    by_year
        .into_iter()
        .map(|(year, counts)| (year, sorted_counts(counts)))
        .collect()
}
