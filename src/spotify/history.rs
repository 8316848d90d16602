use serde::Serialize;
use serde_json::Value;

use crate::{
    config,
    types::{HistoryRecord, Play},
    utils::{self, ListeningZone},
};

/// Settings applied while turning raw export records into plays.
#[derive(Debug, Clone, Copy)]
pub struct IngestOptions {
    /// Plays shorter than this are treated as skips and dropped.
    pub min_play_ms: u64,
    pub zone: ListeningZone,
}

impl Default for IngestOptions {
    fn default() -> Self {
        Self {
            min_play_ms: config::DEFAULT_MIN_PLAY_MS,
            zone: ListeningZone::Local,
        }
    }
}

/// Why a raw record did not become a play.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DropReason {
    Malformed,
    Podcast,
    MissingMetadata,
    ZeroDuration,
    ShortPlay,
    BadTimestamp,
}

/// Counts of what happened to every record of an ingest run.
///
/// `total` always equals `kept` plus the sum of all drop counters.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct IngestReport {
    pub total: usize,
    pub kept: usize,
    pub malformed: usize,
    pub podcasts: usize,
    pub missing_metadata: usize,
    pub zero_duration: usize,
    pub short_plays: usize,
    pub bad_timestamp: usize,
}

impl IngestReport {
    pub fn dropped(&self) -> usize {
        self.malformed
            + self.podcasts
            + self.missing_metadata
            + self.zero_duration
            + self.short_plays
            + self.bad_timestamp
    }

    fn record_drop(&mut self, reason: DropReason) {
        match reason {
            DropReason::Malformed => self.malformed += 1,
            DropReason::Podcast => self.podcasts += 1,
            DropReason::MissingMetadata => self.missing_metadata += 1,
            DropReason::ZeroDuration => self.zero_duration += 1,
            DropReason::ShortPlay => self.short_plays += 1,
            DropReason::BadTimestamp => self.bad_timestamp += 1,
        }
    }
}

#[derive(Debug, Clone, Default, Serialize)]
pub struct NormalizedHistory {
    pub plays: Vec<Play>,
    pub report: IngestReport,
}

/// Normalizes raw streaming history records into music plays.
///
/// Each record is deserialized on its own, so a single malformed entry is
/// counted and skipped instead of failing the whole export. Kept plays are
/// returned in input order.
///
/// # Filtering
///
/// In order, a record is dropped when it:
/// 1. is not a JSON object with correctly typed fields
/// 2. is a podcast episode (`episode_name` set)
/// 3. lacks a track or artist name (audiobooks, videos, removed tracks)
/// 4. has no or zero `ms_played`
/// 5. was played for less than `options.min_play_ms`
/// 6. has a missing or unparseable timestamp
pub fn normalize_history<I>(records: I, options: &IngestOptions) -> NormalizedHistory
where
    I: IntoIterator<Item = Value>,
{
    let mut history = NormalizedHistory::default();

    for value in records {
        history.report.total += 1;

        let outcome = if value.is_object() {
            serde_json::from_value::<HistoryRecord>(value)
                .map_err(|_| DropReason::Malformed)
                .and_then(|record| normalize_record(&record, options))
        } else {
            Err(DropReason::Malformed)
        };

        match outcome {
            Ok(play) => {
                history.report.kept += 1;
                history.plays.push(play);
            }
            Err(reason) => history.report.record_drop(reason),
        }
    }

    history
}

/// Turns one typed export record into a play, or names why it is dropped.
pub fn normalize_record(record: &HistoryRecord, options: &IngestOptions) -> Result<Play, DropReason> {
    if present(&record.episode_name).is_some() {
        return Err(DropReason::Podcast);
    }

    let (Some(track_name), Some(artist_name)) = (
        present(&record.master_metadata_track_name),
        present(&record.master_metadata_album_artist_name),
    ) else {
        return Err(DropReason::MissingMetadata);
    };

    let ms_played = match record.ms_played {
        Some(ms) if ms > 0 => ms,
        _ => return Err(DropReason::ZeroDuration),
    };
    if ms_played < options.min_play_ms {
        return Err(DropReason::ShortPlay);
    }

    let played_at = record
        .ts
        .as_deref()
        .and_then(utils::parse_timestamp)
        .ok_or(DropReason::BadTimestamp)?;

    Ok(Play {
        track_name: track_name.to_string(),
        artist_name: artist_name.to_string(),
        album_name: present(&record.master_metadata_album_album_name)
            .unwrap_or_default()
            .to_string(),
        played_at,
        local_time: options.zone.localize(&played_at),
        ms_played,
        platform: present(&record.platform).map(str::to_string),
    })
}

fn present(field: &Option<String>) -> Option<&str> {
    field.as_deref().map(str::trim).filter(|s| !s.is_empty())
}
