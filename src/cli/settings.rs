use std::path::PathBuf;

use crate::{
    config, error, info,
    management::GenreManager,
    utils::{self, ListeningZone},
};

/// Effective settings of a command after flags and configuration are merged.
pub struct Settings {
    /// Entries shown in top-N tables and graphs.
    pub top_n: usize,
    /// Plays shorter than this many milliseconds are dropped as skips.
    pub min_play_ms: u64,
    /// Zone used for hour, month and year buckets.
    pub zone: ListeningZone,
    /// Width of a full-length ASCII bar.
    pub scale: usize,
}

/// Merges command-line flags over configured values.
///
/// Invalid configuration terminates the program with an error message naming
/// the offending value.
///
/// # Arguments
///
/// * `top` - `--top` flag
/// * `min_ms` - `--min-ms` flag
/// * `utc_offset` - `--utc-offset` flag, e.g. `-05:00`, `UTC` or `local`
/// * `scale` - `--scale` flag, at most [`config::MAX_BAR_SCALE`]
///
/// # Returns
///
/// The flag value where given, otherwise the configured or default value.
pub fn resolve(
    top: Option<usize>,
    min_ms: Option<u64>,
    utc_offset: Option<String>,
    scale: Option<usize>,
) -> Settings {
    let top_n = match top {
        Some(n) => n,
        None => match config::top_n() {
            Ok(n) => n,
            Err(e) => error!("Invalid configuration: {}", e),
        },
    };

    let min_play_ms = match min_ms {
        Some(ms) => ms,
        None => match config::min_play_ms() {
            Ok(ms) => ms,
            Err(e) => error!("Invalid configuration: {}", e),
        },
    };

    let zone = match utc_offset {
        Some(raw) => match utils::parse_listening_zone(&raw) {
            Ok(zone) => zone,
            Err(e) => error!("Invalid --utc-offset: {}", e),
        },
        None => match config::listening_zone() {
            Ok(zone) => zone,
            Err(e) => error!("Invalid configuration: {}", e),
        },
    };

    let scale = match scale {
        Some(s) => match config::check_bar_scale("--scale", s) {
            Ok(s) => s,
            Err(e) => error!("Invalid argument: {}", e),
        },
        None => match config::bar_scale() {
            Ok(s) => s,
            Err(e) => error!("Invalid configuration: {}", e),
        },
    };

    Settings {
        top_n,
        min_play_ms,
        zone,
        scale,
    }
}

/// Loads the genre lookup from the flag or the configured file, if any.
pub async fn load_genres(path: Option<PathBuf>, quiet: bool) -> Option<GenreManager> {
    let path = path.or_else(config::genre_file)?;

    match GenreManager::load(&path).await {
        Ok(manager) => {
            if !quiet {
                info!(
                    "Loaded genres for {} artists from {}",
                    manager.count_artists(),
                    path.display()
                );
            }
            Some(manager)
        }
        Err(e) => error!("Failed to load genre file {}: {}", path.display(), e),
    }
}
