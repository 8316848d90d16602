//! # Analysis Module
//!
//! Grouping and aggregation over normalized [`Play`](crate::types::Play) rows.
//! Every function here is pure: it takes a slice of plays and returns plain
//! data that the CLI layer formats as tables, bar graphs or JSON.
//!
//! - [`patterns`] - overall summary, top artists, hour-of-day counts
//! - [`yearly`] - per-year breakdown
//! - [`time`] - parts of the day, month-of-year and hour-by-year patterns
//! - [`genres`] - genre counts and yearly genre trends via a [`GenreSource`]
//!
//! Hour, month and year always come from `Play::local_time`, so the listening
//! zone chosen at ingest time decides the buckets.

pub mod genres;
pub mod patterns;
pub mod time;
pub mod yearly;

pub use genres::{GenreSource, analyze_genre_trends, analyze_genres};
pub use patterns::{
    ListeningPatterns, analyze_listening_patterns, filter_year, hourly_distribution, value_counts,
};
pub use time::{
    MonthStats, TimePeriod, analyze_hourly_by_year, analyze_monthly, analyze_time_patterns,
};
pub use yearly::{YearStats, analyze_by_year};
