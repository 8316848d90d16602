use chrono::{DateTime, NaiveDateTime, Utc};
use serde::{Deserialize, Serialize};
use tabled::Tabled;

/// One raw entry of a streaming history export.
///
/// Covers both the extended streaming history (`Streaming_History_Audio_*.json`)
/// and the legacy account data export (`StreamingHistory*.json`). Every field is
/// optional; presence is checked during normalization.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct HistoryRecord {
    #[serde(default, alias = "endTime")]
    pub ts: Option<String>,
    #[serde(default, alias = "msPlayed")]
    pub ms_played: Option<u64>,
    #[serde(default, alias = "trackName")]
    pub master_metadata_track_name: Option<String>,
    #[serde(default, alias = "artistName")]
    pub master_metadata_album_artist_name: Option<String>,
    #[serde(default)]
    pub master_metadata_album_album_name: Option<String>,
    #[serde(default)]
    pub episode_name: Option<String>,
    #[serde(default)]
    pub platform: Option<String>,
}

/// A normalized music play, the row type every analysis works on.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Play {
    pub track_name: String,
    pub artist_name: String,
    pub album_name: String,
    pub played_at: DateTime<Utc>,
    /// Wall-clock time of the play in the configured listening zone.
    pub local_time: NaiveDateTime,
    pub ms_played: u64,
    pub platform: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RecentlyPlayedResponse {
    pub items: Vec<PlayHistoryItem>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PlayHistoryItem {
    pub played_at: String,
    pub track: RecentTrack,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RecentTrack {
    pub name: String,
    pub duration_ms: u64,
    pub artists: Vec<TrackArtist>,
    pub album: TrackAlbum,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TrackArtist {
    pub name: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TrackAlbum {
    pub name: String,
}

/// Artist entry of a genre lookup file.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Artist {
    #[serde(default)]
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub genres: Vec<String>,
}

#[derive(Tabled)]
pub struct ArtistTableRow {
    #[tabled(rename = "#")]
    pub rank: usize,
    #[tabled(rename = "Artist")]
    pub artist: String,
    #[tabled(rename = "Plays")]
    pub plays: usize,
}

#[derive(Tabled)]
pub struct YearTableRow {
    #[tabled(rename = "Year")]
    pub year: i32,
    #[tabled(rename = "Tracks")]
    pub total_tracks: usize,
    #[tabled(rename = "Unique tracks")]
    pub unique_tracks: usize,
    #[tabled(rename = "Unique artists")]
    pub unique_artists: usize,
    #[tabled(rename = "Hours")]
    pub hours: String,
}

#[derive(Tabled)]
pub struct PeriodTableRow {
    #[tabled(rename = "Time of day")]
    pub period: String,
    #[tabled(rename = "Tracks")]
    pub tracks: usize,
}

#[derive(Tabled)]
pub struct GenreTableRow {
    #[tabled(rename = "Genre")]
    pub genre: String,
    #[tabled(rename = "Count")]
    pub count: usize,
}
