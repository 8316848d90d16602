use std::{collections::HashMap, path::Path};

use serde::Deserialize;

use super::LoadError;
use crate::{analysis::GenreSource, types::Artist};

#[derive(Deserialize)]
#[serde(untagged)]
enum GenreFile {
    Artists(Vec<Artist>),
    Map(HashMap<String, Vec<String>>),
}

/// Artist to genre lookup backed by a JSON file.
///
/// The file is either a list of `{ "id", "name", "genres" }` artist objects,
/// as written by artist caches, or an object mapping artist names to genre
/// lists. Lookups ignore case.
pub struct GenreManager {
    genres: HashMap<String, Vec<String>>,
}

impl GenreManager {
    pub fn new(artists: Vec<Artist>) -> Self {
        let mut manager = Self {
            genres: HashMap::new(),
        };
        for artist in artists {
            manager.add_artist(&artist.name, artist.genres);
        }
        manager
    }

    pub fn from_map(map: HashMap<String, Vec<String>>) -> Self {
        let mut manager = Self {
            genres: HashMap::new(),
        };
        for (name, genres) in map {
            manager.add_artist(&name, genres);
        }
        manager
    }

    pub async fn load(path: &Path) -> Result<Self, LoadError> {
        let content = async_fs::read_to_string(path).await?;
        let file: GenreFile = serde_json::from_str(&content).map_err(|e| {
            LoadError::CriticalError(format!(
                "{} is not a genre lookup file: {}",
                path.display(),
                e
            ))
        })?;

        Ok(match file {
            GenreFile::Artists(artists) => Self::new(artists),
            GenreFile::Map(map) => Self::from_map(map),
        })
    }

    pub fn count_artists(&self) -> usize {
        self.genres.len()
    }

    fn add_artist(&mut self, name: &str, genres: Vec<String>) {
        let key = self.artist_key(name);
        let known = self.genres.entry(key).or_default();
        for genre in genres {
            if !known.contains(&genre) {
                known.push(genre);
            }
        }
    }
}

impl GenreSource for GenreManager {
    fn genres_for(&self, artist: &str) -> Option<&[String]> {
        self.genres.get(&self.artist_key(artist)).map(Vec::as_slice)
    }
}
