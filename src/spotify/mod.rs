//! # Spotify Data Formats
//!
//! This module understands the JSON shapes Spotify hands out and turns them into
//! the crate's [`Play`](crate::types::Play) rows. No network access happens
//! here; inputs are files the user already has.
//!
//! ## Supported Inputs
//!
//! ### Streaming History Exports
//!
//! [`history`] normalizes the privacy export:
//! - **Extended history** (`Streaming_History_Audio_*.json`): `ts`, `ms_played`,
//!   `master_metadata_*` fields, `episode_name`, `platform`
//! - **Legacy history** (`StreamingHistory*.json`): `endTime`, `msPlayed`,
//!   `trackName`, `artistName`
//!
//! Records are filtered down to real music plays: podcast episodes, entries
//! without track metadata, zero-length entries and plays under the skip
//! threshold (30 seconds by default) are dropped and counted.
//!
//! ### Recently Played Responses
//!
//! [`recent`] converts a saved `recently-played` Web API response (the last 50
//! plays) into the same row type.
//!
//! ## Usage
//!
//! ```rust
//! let options = IngestOptions::default();
//! let history = spotify::history::normalize_history(raw_values, &options);
//! println!("kept {} of {}", history.report.kept, history.report.total);
//! ```

pub mod history;
pub mod recent;
