//! # CLI Module
//!
//! This module provides the command-line interface layer for spotstats. It
//! implements all user-facing commands and coordinates between the loaders,
//! the Spotify format normalization and the analysis functions.
//!
//! ## Commands
//!
//! - [`history`] - Analyzes all streaming history exports in a directory
//! - [`recent`] - Analyzes a saved recently-played response
//! - [`info`] - Shows the effective configuration and the export files found
//!
//! ## Data Flow
//!
//! ```text
//! CLI Layer (flags, output)
//!     ↓
//! Management Layer (file discovery and loading)
//!     ↓
//! Spotify Layer (record normalization)
//!     ↓
//! Analysis Layer (aggregation)
//! ```
//!
//! Output goes through the crate's `info!`/`success!`/`warning!` macros,
//! `tabled` tables and ASCII bar graphs. Fatal problems such as unreadable
//! files or invalid configuration end the program via `error!`; everything
//! below this layer returns errors instead.
//!
//! ## Usage Patterns
//!
//! ```bash
//! spotstats info                               # check configuration
//! spotstats history                            # analyze ~/Downloads/MyData
//! spotstats history --year 2023 --top 20       # one year, longer lists
//! spotstats recent --file recently-played.json # last 50 plays
//! ```

mod graphs;
mod history;
mod info;
mod recent;
mod settings;

pub use history::HistoryRequest;
pub use history::history;
pub use info::info;
pub use recent::recent;
