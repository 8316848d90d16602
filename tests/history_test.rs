use chrono::{NaiveDate, TimeZone, Utc};
use serde_json::{Value, json};
use spotstats::spotify::history::*;
use spotstats::spotify::recent::process_recently_played;
use spotstats::types::{HistoryRecord, RecentlyPlayedResponse};
use spotstats::utils::{ListeningZone, parse_listening_zone};

// Helper function to create an extended history record
fn extended_record(track: &str, artist: &str, ts: &str, ms_played: u64) -> Value {
    json!({
        "ts": ts,
        "platform": "android",
        "ms_played": ms_played,
        "conn_country": "US",
        "master_metadata_track_name": track,
        "master_metadata_album_artist_name": artist,
        "master_metadata_album_album_name": format!("{} album", artist),
        "spotify_track_uri": "spotify:track:abc",
        "episode_name": null,
        "episode_show_name": null,
        "reason_start": "trackdone",
        "reason_end": "trackdone",
        "shuffle": false,
        "skipped": null,
        "offline": false
    })
}

fn podcast_record(ts: &str) -> Value {
    json!({
        "ts": ts,
        "platform": "ios",
        "ms_played": 1_800_000,
        "master_metadata_track_name": null,
        "master_metadata_album_artist_name": null,
        "master_metadata_album_album_name": null,
        "episode_name": "Episode 12",
        "episode_show_name": "Some Show"
    })
}

fn utc_options() -> IngestOptions {
    IngestOptions {
        min_play_ms: 30_000,
        zone: ListeningZone::utc(),
    }
}

#[test]
fn test_keeps_valid_music_plays() {
    let records = vec![extended_record(
        "Everything In Its Right Place",
        "Radiohead",
        "2021-03-04T12:34:56Z",
        250_000,
    )];

    let history = normalize_history(records, &utc_options());

    assert_eq!(history.plays.len(), 1);
    let play = &history.plays[0];
    assert_eq!(play.track_name, "Everything In Its Right Place");
    assert_eq!(play.artist_name, "Radiohead");
    assert_eq!(play.album_name, "Radiohead album");
    assert_eq!(
        play.played_at,
        Utc.with_ymd_and_hms(2021, 3, 4, 12, 34, 56).unwrap()
    );
    assert_eq!(play.ms_played, 250_000);
    assert_eq!(play.platform.as_deref(), Some("android"));
    assert_eq!(history.report.total, 1);
    assert_eq!(history.report.kept, 1);
    assert_eq!(history.report.dropped(), 0);
}

#[test]
fn test_drops_noise_with_reasons() {
    let mut missing_artist = extended_record("Track", "Artist", "2021-01-01T00:00:00Z", 60_000);
    missing_artist["master_metadata_album_artist_name"] = Value::Null;
    let mut missing_ms = extended_record("Track", "Artist", "2021-01-01T00:00:00Z", 60_000);
    missing_ms.as_object_mut().unwrap().remove("ms_played");
    let mut wrong_type = extended_record("Track", "Artist", "2021-01-01T00:00:00Z", 60_000);
    wrong_type["ms_played"] = json!("a lot");

    let records = vec![
        podcast_record("2021-01-01T00:00:00Z"),
        missing_artist,
        extended_record("Track", "Artist", "2021-01-01T00:00:00Z", 0),
        missing_ms,
        extended_record("Track", "Artist", "2021-01-01T00:00:00Z", 29_999),
        extended_record("Track", "Artist", "not a date", 60_000),
        json!("just a string"),
        json!(42),
        wrong_type,
        extended_record("Kept", "Artist", "2021-01-01T00:00:00Z", 60_000),
    ];

    let history = normalize_history(records, &utc_options());
    let report = &history.report;

    assert_eq!(report.total, 10);
    assert_eq!(report.kept, 1);
    assert_eq!(report.podcasts, 1);
    assert_eq!(report.missing_metadata, 1);
    assert_eq!(report.zero_duration, 2);
    assert_eq!(report.short_plays, 1);
    assert_eq!(report.bad_timestamp, 1);
    assert_eq!(report.malformed, 3);
    assert_eq!(report.total, report.kept + report.dropped());
    assert_eq!(history.plays[0].track_name, "Kept");
}

#[test]
fn test_threshold_boundary_is_inclusive() {
    let records = vec![
        extended_record("Short", "A", "2021-01-01T00:00:00Z", 29_999),
        extended_record("Exact", "A", "2021-01-01T00:00:00Z", 30_000),
    ];

    let history = normalize_history(records, &utc_options());

    assert_eq!(history.plays.len(), 1);
    assert_eq!(history.plays[0].track_name, "Exact");
}

#[test]
fn test_custom_threshold() {
    let options = IngestOptions {
        min_play_ms: 0,
        zone: ListeningZone::utc(),
    };
    let records = vec![
        extended_record("Blip", "A", "2021-01-01T00:00:00Z", 1),
        extended_record("Nothing", "A", "2021-01-01T00:00:00Z", 0),
    ];

    let history = normalize_history(records, &options);

    assert_eq!(history.plays.len(), 1);
    assert_eq!(history.report.zero_duration, 1);
}

#[test]
fn test_podcast_takes_precedence() {
    // an episode with a zero duration still counts as a podcast
    let mut record = podcast_record("2021-01-01T00:00:00Z");
    record["ms_played"] = json!(0);

    let history = normalize_history(vec![record], &utc_options());

    assert_eq!(history.report.podcasts, 1);
    assert_eq!(history.report.zero_duration, 0);
}

#[test]
fn test_blank_names_count_as_missing() {
    let records = vec![
        extended_record("   ", "Artist", "2021-01-01T00:00:00Z", 60_000),
        extended_record("Track", "", "2021-01-01T00:00:00Z", 60_000),
    ];

    let history = normalize_history(records, &utc_options());

    assert_eq!(history.report.missing_metadata, 2);
    assert!(history.plays.is_empty());
}

#[test]
fn test_legacy_export_records() {
    let records = vec![json!({
        "endTime": "2020-01-02 10:05",
        "artistName": "ABBA",
        "trackName": "Dancing Queen",
        "msPlayed": 230_000
    })];

    let history = normalize_history(records, &utc_options());

    assert_eq!(history.plays.len(), 1);
    let play = &history.plays[0];
    assert_eq!(play.artist_name, "ABBA");
    assert_eq!(play.track_name, "Dancing Queen");
    assert_eq!(play.album_name, "");
    assert_eq!(play.platform, None);
    assert_eq!(
        play.played_at,
        Utc.with_ymd_and_hms(2020, 1, 2, 10, 5, 0).unwrap()
    );
}

#[test]
fn test_preserves_input_order() {
    let records = vec![
        extended_record("Third", "A", "2021-01-03T00:00:00Z", 60_000),
        extended_record("First", "A", "2021-01-01T00:00:00Z", 60_000),
        extended_record("Second", "A", "2021-01-02T00:00:00Z", 60_000),
    ];

    let history = normalize_history(records, &utc_options());
    let names: Vec<&str> = history.plays.iter().map(|p| p.track_name.as_str()).collect();

    assert_eq!(names, vec!["Third", "First", "Second"]);
}

#[test]
fn test_local_time_uses_zone() {
    let options = IngestOptions {
        min_play_ms: 30_000,
        zone: parse_listening_zone("-05:00").unwrap(),
    };
    let records = vec![extended_record("T", "A", "2021-01-01T03:00:00Z", 60_000)];

    let history = normalize_history(records, &options);

    assert_eq!(
        history.plays[0].local_time,
        NaiveDate::from_ymd_opt(2020, 12, 31)
            .unwrap()
            .and_hms_opt(22, 0, 0)
            .unwrap()
    );
}

#[test]
fn test_normalize_record_reports_reason() {
    let record = HistoryRecord {
        ts: Some("2021-01-01T00:00:00Z".to_string()),
        ms_played: Some(10_000),
        master_metadata_track_name: Some("T".to_string()),
        master_metadata_album_artist_name: Some("A".to_string()),
        ..Default::default()
    };

    assert_eq!(
        normalize_record(&record, &utc_options()),
        Err(DropReason::ShortPlay)
    );
    assert_eq!(
        normalize_record(&HistoryRecord::default(), &utc_options()),
        Err(DropReason::MissingMetadata)
    );
}

#[test]
fn test_default_options() {
    let options = IngestOptions::default();
    assert_eq!(options.min_play_ms, 30_000);
    assert_eq!(options.zone, ListeningZone::Local);
}

#[test]
fn test_process_recently_played() {
    let response: RecentlyPlayedResponse = serde_json::from_value(json!({
        "items": [
            {
                "played_at": "2024-05-01T20:15:30.123Z",
                "track": {
                    "name": "Karma Police",
                    "duration_ms": 264_066,
                    "popularity": 80,
                    "artists": [{ "name": "Radiohead" }, { "name": "Someone Else" }],
                    "album": { "name": "OK Computer" }
                }
            },
            {
                "played_at": "2024-05-01T20:10:00.000Z",
                "track": {
                    "name": "Orphan",
                    "duration_ms": 100_000,
                    "artists": [],
                    "album": { "name": "Nowhere" }
                }
            },
            {
                "played_at": "garbage",
                "track": {
                    "name": "Broken",
                    "duration_ms": 100_000,
                    "artists": [{ "name": "X" }],
                    "album": { "name": "Y" }
                }
            }
        ]
    }))
    .unwrap();

    let plays = process_recently_played(&response, ListeningZone::utc());

    assert_eq!(plays.len(), 1);
    assert_eq!(plays[0].track_name, "Karma Police");
    assert_eq!(plays[0].artist_name, "Radiohead");
    assert_eq!(plays[0].album_name, "OK Computer");
    assert_eq!(plays[0].ms_played, 264_066);
    assert_eq!(plays[0].local_time.format("%H:%M").to_string(), "20:15");
}
