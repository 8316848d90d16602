use std::collections::BTreeMap;

use colored::Colorize;
use serde::Serialize;
use tabled::Table;

use crate::{
    Res,
    analysis::{ListeningPatterns, MonthStats, TimePeriod, YearStats},
    info,
    types::{ArtistTableRow, GenreTableRow, PeriodTableRow, YearTableRow},
    utils,
};

/// Bar width used for the per-year genre trend graphs.
pub const GENRE_TREND_SCALE: usize = 20;

const MONTH_NAMES: [&str; 12] = [
    "Jan", "Feb", "Mar", "Apr", "May", "Jun", "Jul", "Aug", "Sep", "Oct", "Nov", "Dec",
];

/// Writes a report to stdout as pretty-printed JSON.
pub fn print_json<T: Serialize>(report: &T) -> Res<()> {
    let json = serde_json::to_string_pretty(report)?;
    println!("{}", json);
    Ok(())
}

pub fn print_heading(title: &str) {
    println!("\n{}", title.bold());
    println!("{}", "-".repeat(title.chars().count()));
}

pub fn print_summary(patterns: &ListeningPatterns) {
    info!("Total tracks analyzed: {}", patterns.total_tracks);
    info!("Unique tracks: {}", patterns.unique_tracks);
    info!("Unique artists: {}", patterns.unique_artists);
    info!(
        "Total listening hours: {}",
        utils::format_hours(patterns.listening_hours)
    );
}

pub fn print_top_artists(top_artists: &[(String, usize)]) {
    let rows: Vec<ArtistTableRow> = top_artists
        .iter()
        .enumerate()
        .map(|(idx, (artist, plays))| ArtistTableRow {
            rank: idx + 1,
            artist: artist.clone(),
            plays: *plays,
        })
        .collect();

    println!("{}", Table::new(rows));
}

/// Prints the year overview table followed by each year's top artists.
pub fn print_yearly(yearly: &BTreeMap<i32, YearStats>, artists_per_year: usize) {
    let rows: Vec<YearTableRow> = yearly
        .iter()
        .map(|(year, stats)| YearTableRow {
            year: *year,
            total_tracks: stats.total_tracks,
            unique_tracks: stats.unique_tracks,
            unique_artists: stats.unique_artists,
            hours: utils::format_hours(stats.listening_hours),
        })
        .collect();
    println!("{}", Table::new(rows));

    for (year, stats) in yearly {
        println!("\n{}", year.to_string().bold());
        for (artist, plays) in stats.top_artists.iter().take(artists_per_year) {
            println!("- {}: {} plays", artist, plays);
        }
    }
}

pub fn print_time_patterns(periods: &[(TimePeriod, usize)]) {
    let rows: Vec<PeriodTableRow> = periods
        .iter()
        .map(|(period, tracks)| PeriodTableRow {
            period: period.to_string(),
            tracks: *tracks,
        })
        .collect();

    println!("{}", Table::new(rows));
}

pub fn print_genres(genres: &[(String, usize)], limit: usize) {
    let rows: Vec<GenreTableRow> = genres
        .iter()
        .take(limit)
        .map(|(genre, count)| GenreTableRow {
            genre: genre.clone(),
            count: *count,
        })
        .collect();

    println!("{}", Table::new(rows));
}

pub fn print_bar_chart(title: &str, entries: &[(String, f64)], scale: usize) {
    print_heading(title);
    for line in utils::render_bar_chart(entries, scale) {
        println!("{}", line);
    }
}

pub fn print_top_artist_graph(top_artists: &[(String, usize)], scale: usize) {
    let entries: Vec<(String, f64)> = top_artists
        .iter()
        .map(|(artist, plays)| (artist.clone(), *plays as f64))
        .collect();
    print_bar_chart("Top Artists (plays)", &entries, scale);
}

pub fn print_hourly_graph(hourly: &[usize; 24], scale: usize) {
    let entries: Vec<(String, f64)> = hourly
        .iter()
        .enumerate()
        .map(|(hour, plays)| (format!("{:02}:00", hour), *plays as f64))
        .collect();
    print_bar_chart("Listening by Hour (plays)", &entries, scale);
}

pub fn print_yearly_graph(yearly: &BTreeMap<i32, YearStats>, scale: usize) {
    let entries: Vec<(String, f64)> = yearly
        .iter()
        .map(|(year, stats)| (year.to_string(), stats.listening_hours))
        .collect();
    print_bar_chart("Listening Hours by Year", &entries, scale);
}

pub fn print_monthly_graph(monthly: &BTreeMap<u32, MonthStats>, scale: usize) {
    let entries: Vec<(String, f64)> = (1..=12u32)
        .map(|month| {
            let plays = monthly.get(&month).map_or(0, |m| m.plays);
            (MONTH_NAMES[month as usize - 1].to_string(), plays as f64)
        })
        .collect();
    print_bar_chart("Monthly Listening Patterns (plays)", &entries, scale);
}

/// Prints plays per hour of day for every year as a shaded grid.
pub fn print_hourly_heatmap(heatmap: &BTreeMap<i32, [usize; 24]>) {
    print_heading("Activity by Hour and Year");
    let max = heatmap
        .values()
        .flat_map(|hours| hours.iter().copied())
        .max()
        .unwrap_or(0);

    let header: String = (0..24)
        .step_by(6)
        .map(|hour| format!("{:<6}", format!("{:02}", hour)))
        .collect();
    println!("      {}", header.trim_end());
    for (year, hours) in heatmap {
        println!("{:<4} |{}|", year, utils::render_heat_row(hours, max));
    }
    println!(
        "      {} = most plays in one hour ({})",
        utils::HEAT_SHADES[utils::HEAT_SHADES.len() - 1],
        max
    );
}

/// Prints the five strongest genres of every year as bars.
pub fn print_genre_trends(trends: &BTreeMap<i32, Vec<(String, usize)>>) {
    print_heading("Genre Analysis by Year");
    for (year, genres) in trends {
        println!("\n{} Top Genres:", year.to_string().bold());
        let entries: Vec<(String, f64)> = genres
            .iter()
            .take(5)
            .map(|(genre, plays)| (genre.clone(), *plays as f64))
            .collect();
        for line in utils::render_bar_chart(&entries, GENRE_TREND_SCALE) {
            println!("- {}", line);
        }
    }
}
