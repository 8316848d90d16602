use crate::{config, info, management::HistoryManager, warning};

/// Displays the resolved configuration and the export files it points at.
///
/// Shows where configuration is read from, the effective values of every
/// setting and the history files that `spotstats history` would load. Invalid
/// configuration values are reported as warnings rather than aborting, so
/// this command can be used to track them down.
///
/// # Output Example
///
/// ```
/// [o] Config file: /home/me/.local/share/spotstats/.env (found)
/// [o] History directory: /home/me/Downloads/MyData
/// [o] Listening zone: local
/// [o] Minimum play duration: 30000 ms
/// [o] Found 3 export files:
/// [o] - Streaming_History_Audio_2022.json
/// ```
pub async fn info() {
    let env_file = config::data_dir().join(".env");
    info!(
        "Config file: {} ({})",
        env_file.display(),
        if env_file.is_file() { "found" } else { "not found" }
    );

    let dir = config::history_dir();
    info!("History directory: {}", dir.display());

    match config::listening_zone() {
        Ok(zone) => info!("Listening zone: {}", zone),
        Err(e) => warning!("{}", e),
    }
    match config::min_play_ms() {
        Ok(ms) => info!("Minimum play duration: {} ms", ms),
        Err(e) => warning!("{}", e),
    }
    match config::bar_scale() {
        Ok(scale) => info!("Bar scale: {}", scale),
        Err(e) => warning!("{}", e),
    }
    match config::top_n() {
        Ok(n) => info!("Top entries: {}", n),
        Err(e) => warning!("{}", e),
    }
    match config::genre_file() {
        Some(path) => info!("Genre file: {}", path.display()),
        None => info!("Genre file: not configured"),
    }

    match HistoryManager::discover(&dir).await {
        Ok(paths) if paths.is_empty() => warning!("No JSON files found in {}", dir.display()),
        Ok(paths) => {
            info!("Found {} export files:", paths.len());
            for path in paths {
                let name = path
                    .file_name()
                    .map(|n| n.to_string_lossy().to_string())
                    .unwrap_or_else(|| path.display().to_string());
                info!("- {}", name);
            }
        }
        Err(e) => warning!("Cannot read history directory: {}", e),
    }
}
