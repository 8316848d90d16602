use std::{
    fmt,
    io::Error,
    path::{Path, PathBuf},
};

use futures::StreamExt;
use serde_json::Value;

use crate::types::RecentlyPlayedResponse;

#[derive(Debug)]
pub enum LoadError {
    IoError(Error),
    CriticalError(String),
    SerdeError(serde_json::Error),
}

impl From<Error> for LoadError {
    fn from(err: Error) -> Self {
        LoadError::IoError(err)
    }
}

impl From<serde_json::Error> for LoadError {
    fn from(err: serde_json::Error) -> Self {
        LoadError::SerdeError(err)
    }
}

impl fmt::Display for LoadError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LoadError::IoError(e) => write!(f, "I/O error: {}", e),
            LoadError::CriticalError(msg) => write!(f, "{}", msg),
            LoadError::SerdeError(e) => write!(f, "invalid JSON: {}", e),
        }
    }
}

impl std::error::Error for LoadError {}

#[derive(Debug, Clone)]
pub struct LoadedFile {
    pub path: PathBuf,
    pub entries: usize,
}

/// Raw records of one or more streaming history export files.
pub struct HistoryManager {
    files: Vec<LoadedFile>,
    records: Vec<Value>,
}

impl HistoryManager {
    /// Lists the `*.json` files directly inside `dir`, sorted by path.
    pub async fn discover(dir: &Path) -> Result<Vec<PathBuf>, LoadError> {
        let mut entries = std::pin::pin!(async_fs::read_dir(dir).await?);
        let mut paths = Vec::new();

        while let Some(entry) = entries.next().await {
            let path = entry?.path();
            let is_json = path
                .extension()
                .and_then(|ext| ext.to_str())
                .is_some_and(|ext| ext.eq_ignore_ascii_case("json"));
            if is_json && path.is_file() {
                paths.push(path);
            }
        }

        paths.sort();
        Ok(paths)
    }

    /// Reads every file and concatenates their records in file order.
    pub async fn load(paths: &[PathBuf]) -> Result<Self, LoadError> {
        let mut files = Vec::with_capacity(paths.len());
        let mut records = Vec::new();

        for path in paths {
            let file_records = Self::load_file(path).await?;
            files.push(LoadedFile {
                path: path.clone(),
                entries: file_records.len(),
            });
            records.extend(file_records);
        }

        Ok(Self { files, records })
    }

    /// Reads one export file, which must hold a JSON array of records.
    pub async fn load_file(path: &Path) -> Result<Vec<Value>, LoadError> {
        let content = async_fs::read_to_string(path).await?;
        let json: Value = serde_json::from_str(&content).map_err(|e| {
            LoadError::CriticalError(format!("{} is not valid JSON: {}", path.display(), e))
        })?;

        match json {
            Value::Array(items) => Ok(items),
            _ => Err(LoadError::CriticalError(format!(
                "{} is not a JSON array of history records",
                path.display()
            ))),
        }
    }

    pub fn files(&self) -> &[LoadedFile] {
        &self.files
    }

    pub fn count_records(&self) -> usize {
        self.records.len()
    }

    pub fn into_records(self) -> Vec<Value> {
        self.records
    }
}

/// Reads a saved recently-played API response.
pub async fn load_recently_played(path: &Path) -> Result<RecentlyPlayedResponse, LoadError> {
    let content = async_fs::read_to_string(path).await?;
    let response: RecentlyPlayedResponse = serde_json::from_str(&content)?;
    Ok(response)
}
