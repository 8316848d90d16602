//! Configuration management for the listening history analyzer.
//!
//! This module handles loading and accessing configuration values from environment
//! variables and `.env` files. Every value has an application default, so a fresh
//! installation works without any configuration at all.
//!
//! The configuration system follows a hierarchical approach:
//! 1. Command-line flags (highest priority, applied by the CLI layer)
//! 2. Environment variables
//! 3. `.env` file in the local data directory
//! 4. Application defaults

use std::{env, path::PathBuf, str::FromStr};

use crate::utils::{self, ListeningZone};

pub const DEFAULT_MIN_PLAY_MS: u64 = 30_000;
pub const DEFAULT_BAR_SCALE: usize = 40;
pub const DEFAULT_TOP_N: usize = 10;
/// Widest bar the graphs accept.
pub const MAX_BAR_SCALE: usize = 500;

/// Returns the application directory inside the platform's local data dir.
///
/// - Linux: `~/.local/share/spotstats`
/// - macOS: `~/Library/Application Support/spotstats`
/// - Windows: `%LOCALAPPDATA%/spotstats`
pub fn data_dir() -> PathBuf {
    let mut path = dirs::data_local_dir().unwrap_or_else(|| PathBuf::from("."));
    path.push("spotstats");
    path
}

/// Loads environment variables from a `.env` file in the local data directory.
///
/// Creates the application directory if it doesn't exist. A missing `.env`
/// file is not an error; a file that exists but cannot be parsed is.
///
/// # Errors
///
/// This function will return an error if:
/// - The application directory cannot be created
/// - The `.env` file exists but cannot be read or parsed
pub async fn load_env() -> Result<(), String> {
    let dir = data_dir();
    async_fs::create_dir_all(&dir)
        .await
        .map_err(|e| e.to_string())?;

    let path = dir.join(".env");
    if path.is_file() {
        dotenv::from_path(&path).map_err(|e| format!("{}: {}", path.display(), e))?;
    }

    Ok(())
}

/// Returns the directory holding the exported streaming history JSON files.
///
/// Reads `SPOTSTATS_HISTORY_DIR`, falling back to `~/Downloads/MyData`, which
/// is where Spotify's privacy export unpacks by default.
pub fn history_dir() -> PathBuf {
    match env::var("SPOTSTATS_HISTORY_DIR") {
        Ok(dir) if !dir.trim().is_empty() => PathBuf::from(dir),
        _ => {
            let mut path = dirs::home_dir().unwrap_or_else(|| PathBuf::from("."));
            path.push("Downloads");
            path.push("MyData");
            path
        }
    }
}

/// Returns the zone used for hour-of-day, month and year groupings.
///
/// Reads `SPOTSTATS_UTC_OFFSET` (e.g. `-05:00`). Unset means the system's
/// local zone.
pub fn listening_zone() -> Result<ListeningZone, String> {
    parse_zone_value(
        "SPOTSTATS_UTC_OFFSET",
        env::var("SPOTSTATS_UTC_OFFSET").ok().as_deref(),
    )
}

/// Returns the minimum play duration in milliseconds for a play to count.
pub fn min_play_ms() -> Result<u64, String> {
    parse_var("SPOTSTATS_MIN_PLAY_MS", DEFAULT_MIN_PLAY_MS)
}

/// Returns the width in characters of a full-length ASCII bar.
///
/// Values above [`MAX_BAR_SCALE`] are rejected.
pub fn bar_scale() -> Result<usize, String> {
    let scale = parse_var("SPOTSTATS_BAR_SCALE", DEFAULT_BAR_SCALE)?;
    check_bar_scale("SPOTSTATS_BAR_SCALE", scale)
}

/// Returns how many entries the top-N listings show.
pub fn top_n() -> Result<usize, String> {
    parse_var("SPOTSTATS_TOP_N", DEFAULT_TOP_N)
}

/// Returns the optional artist genre lookup file.
pub fn genre_file() -> Option<PathBuf> {
    env::var("SPOTSTATS_GENRE_FILE")
        .ok()
        .filter(|p| !p.trim().is_empty())
        .map(PathBuf::from)
}

/// Parses a raw configuration value.
///
/// A missing or blank value yields `default`. Anything else must parse as
/// `T`; an invalid value is an error naming the setting, never replaced by
/// the default.
///
/// # Arguments
///
/// * `name` - Setting name used in the error message
/// * `raw` - The raw value, `None` if unset
/// * `default` - Value used when the setting is unset or blank
///
/// # Example
///
/// ```
/// assert_eq!(parse_value("SPOTSTATS_TOP_N", Some(" 25 "), 10), Ok(25));
/// assert_eq!(parse_value("SPOTSTATS_TOP_N", Some(""), 10), Ok(10));
/// assert!(parse_value::<usize>("SPOTSTATS_TOP_N", Some("many"), 10).is_err());
/// ```
pub fn parse_value<T>(name: &str, raw: Option<&str>, default: T) -> Result<T, String>
where
    T: FromStr,
    T::Err: std::fmt::Display,
{
    match raw.map(str::trim) {
        Some(value) if !value.is_empty() => value
            .parse::<T>()
            .map_err(|e| format!("{name} has invalid value '{value}': {e}")),
        _ => Ok(default),
    }
}

/// Parses a raw listening zone setting; missing or blank means local time.
pub fn parse_zone_value(name: &str, raw: Option<&str>) -> Result<ListeningZone, String> {
    match raw.map(str::trim) {
        Some(value) if !value.is_empty() => {
            utils::parse_listening_zone(value).map_err(|e| format!("{name}: {e}"))
        }
        _ => Ok(ListeningZone::Local),
    }
}

/// Rejects bar scales above [`MAX_BAR_SCALE`].
pub fn check_bar_scale(name: &str, scale: usize) -> Result<usize, String> {
    if scale > MAX_BAR_SCALE {
        return Err(format!(
            "{name} has invalid value '{scale}': must be at most {MAX_BAR_SCALE}"
        ));
    }
    Ok(scale)
}

fn parse_var<T>(name: &str, default: T) -> Result<T, String>
where
    T: FromStr,
    T::Err: std::fmt::Display,
{
    parse_value(name, env::var(name).ok().as_deref(), default)
}
